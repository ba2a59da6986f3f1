pub mod canvas;
pub mod driver;
pub mod terminal;
#[cfg(feature = "tui")]
pub mod tui;

use range_ui::widgets::range::Prompt;

use crate::event::{InputEvent, OutputEvent};

/// 行式前端：展示一帧，返回下一条输入；`None` 表示输入结束。
/// 同时也是标签编辑时的输入源。
pub trait Renderer: Prompt {
    fn render(&mut self, out: &OutputEvent) -> Option<InputEvent>;
}
