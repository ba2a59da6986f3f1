pub mod input;
pub mod types;
pub mod widgets;

pub use types::{Rect, Color, Alignment};
pub use input::{Interaction, PointerEvent, PointerHub, PointerKind, Subscription, UiContext};
use widgets::range::AccessNode;

pub trait UiRenderer {
    /// 绘制实心矩形
    fn draw_rect(&mut self, rect: Rect, color: Color);

    /// 绘制文字
    fn draw_text(&mut self, text: &str, rect: Rect, color: Color, size: f32, align: Alignment);

    /// 绘制圆形
    fn draw_circle(&mut self, center: (f32, f32), radius: f32, color: Color);

    /// 核心交互：查询某个区域的状态
    fn interact(&self, rect: Rect) -> Interaction;

    /// 获取当前鼠标位置
    fn cursor_pos(&self) -> (f32, f32);

    /// 本帧的按下事件 (如果后端能提供)
    fn pointer_down(&mut self) -> Option<&mut PointerEvent> {
        None
    }

    /// 无障碍信息。没有无障碍树的后端直接忽略
    fn describe(&mut self, _rect: Rect, _node: &AccessNode) {}
}
