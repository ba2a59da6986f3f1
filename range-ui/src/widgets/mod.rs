pub mod button;
pub mod range;
pub mod slider;

pub use button::Button;
pub use slider::{RangeSlider, SliderLayout, SliderMetrics, SliderResponse};
