//! 双把手区间选择：连续模式 (整数取值) 与离散模式 (吸附到固定取值集合)。

pub mod controller;
pub mod format;
pub mod geometry;
pub mod model;
pub mod policy;
pub mod presentation;
pub mod prompt;

pub use controller::{RangeController, RangeProps};
pub use format::{format_euro, format_fixed, format_label};
pub use geometry::GeometryHandle;
pub use model::{FixedValues, Handle, RangeBounds, RangeError, Selection};
pub use policy::{FixedOrdering, RangePolicy, MIN_GAP};
pub use presentation::{AccessNode, HandleLabel, HandleView, RangeView, Role, Tick};
pub use prompt::{parse_value, NoPrompt, Prompt};
