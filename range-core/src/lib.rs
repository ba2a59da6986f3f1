pub mod config;
pub mod event;
pub mod page;
pub mod renderer;
pub mod services;
pub mod session;

pub use event::{InputEvent, OutputEvent};
pub use page::{Exercise, Page, PageState, RangeSetup};
pub use renderer::driver::Driver;
pub use renderer::terminal::TerminalRenderer;
#[cfg(feature = "tui")]
pub use renderer::tui::{route_mouse, TuiRenderer};
pub use session::RangeSession;
