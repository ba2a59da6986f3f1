use crate::{Rect, Color, UiRenderer, Alignment};
use crate::input::PointerEvent;
use crate::widgets::Button;
use crate::widgets::range::{AccessNode, Handle, HandleLabel, Prompt, RangeController, Selection};

/// 尺寸参数。默认值按像素设计，字符界面用 [`SliderMetrics::cells`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderMetrics {
    pub knob_radius: f32,
    pub active_knob_radius: f32,
    pub bar_height: f32,
    pub tick_width: f32,
    pub tick_height: f32,
    pub label_height: f32,
    pub font_size: f32,
}

impl Default for SliderMetrics {
    fn default() -> Self {
        Self {
            knob_radius: 8.0,
            active_knob_radius: 10.0, // 按住时变大
            bar_height: 4.0,
            tick_width: 2.0,
            tick_height: 10.0,
            label_height: 24.0,
            font_size: 18.0,
        }
    }
}

impl SliderMetrics {
    /// 一个单位 = 一个字符格
    pub fn cells() -> Self {
        Self {
            knob_radius: 0.5,
            active_knob_radius: 0.5,
            bar_height: 1.0,
            tick_width: 1.0,
            tick_height: 1.0,
            label_height: 1.0,
            font_size: 1.0,
        }
    }
}

/// 控件内部布局：上面是轨道，下面一行放两个标签
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderLayout {
    pub track: Rect,
    pub min_label: Rect,
    pub max_label: Rect,
}

impl SliderLayout {
    pub fn compute(rect: Rect, metrics: &SliderMetrics) -> Self {
        let (label_row, body) = rect.split_bottom(metrics.label_height.min(rect.h / 2.0));
        // 左右留出圆钮半径，0% 和 100% 的圆钮不会出界
        let track = body.inset_x(metrics.knob_radius);
        let (min_label, max_label) = label_row.split_left(label_row.w / 2.0);

        Self { track, min_label, max_label }
    }

    pub fn handle_x(&self, percent: f64) -> f32 {
        self.track.x + self.track.w * (percent as f32 / 100.0)
    }

    pub fn handle_center(&self, percent: f64) -> (f32, f32) {
        (self.handle_x(percent), self.track.center_y())
    }

    pub fn label(&self, handle: Handle) -> Rect {
        match handle {
            Handle::Min => self.min_label,
            Handle::Max => self.max_label,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SliderResponse {
    /// 本帧被按下的把手
    pub pressed: Option<Handle>,
    /// 本帧被点击的标签 (只有连续模式会出现)
    pub edit_requested: Option<Handle>,
}

/// 双把手区间滑块。值由外部持有，提交走控制器的 `on_change`。
pub struct RangeSlider<'a> {
    controller: &'a RangeController,
    range: Selection,
    metrics: SliderMetrics,
    bar_color: Color,
    fill_color: Color,
    tick_color: Color,
    knob_color: Color,
    knob_active_color: Color,
    label_color: Color,
}

impl<'a> RangeSlider<'a> {
    pub fn new(controller: &'a RangeController, range: Selection) -> Self {
        Self {
            controller,
            range,
            metrics: SliderMetrics::default(),
            bar_color: Color::rgb(60, 60, 60),     // 深灰底槽
            fill_color: Color::rgb(100, 180, 255), // 亮蓝填充
            tick_color: Color::GRAY,
            knob_color: Color::WHITE,              // 白色圆钮
            knob_active_color: Color::LIGHT_GRAY,
            label_color: Color::WHITE,
        }
    }

    pub fn metrics(mut self, metrics: SliderMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn bar_color(mut self, color: Color) -> Self {
        self.bar_color = color;
        self
    }

    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn knob_color(mut self, color: Color) -> Self {
        self.knob_color = color;
        self
    }

    /// 绘制并处理交互；标签被点击时立即弹出输入框
    pub fn show_with_prompt(
        self,
        ui: &mut impl UiRenderer,
        rect: Rect,
        prompt: &mut (impl Prompt + ?Sized),
    ) -> SliderResponse {
        let controller = self.controller;
        let response = self.show(ui, rect);
        if let Some(handle) = response.edit_requested {
            controller.prompt_for_value(handle, prompt);
        }
        response
    }

    pub fn show(self, ui: &mut impl UiRenderer, rect: Rect) -> SliderResponse {
        let m = self.metrics;
        self.controller.set_range(self.range);

        let layout = SliderLayout::compute(rect, &m);
        self.controller.geometry().set(layout.track);

        // 1. 交互：max 画在上层，先检测
        let mut response = SliderResponse::default();
        let mut hovered = None;
        let before = self.controller.view();
        for handle in [Handle::Max, Handle::Min] {
            let (cx, cy) = layout.handle_center(before.handle(handle).percent);
            let hit = m.knob_radius.max(m.active_knob_radius) * 2.0;
            let interaction = ui.interact(Rect::centered_at(cx, cy, hit, hit));

            if hovered.is_none() && interaction.is_hovered() {
                hovered = Some(handle);
            }
            if response.pressed.is_none() && interaction.is_clicked() {
                let (x, y) = ui.cursor_pos();
                let mut synthetic = PointerEvent::down(x, y);
                let event = match ui.pointer_down() {
                    Some(event) => event,
                    None => &mut synthetic,
                };
                self.controller.begin_drag(handle, event);
                response.pressed = Some(handle);
            }
        }
        self.controller.set_hovered(hovered);

        let view = self.controller.view();
        let cy = layout.track.center_y();

        // 2. 底槽
        let bar = Rect::new(layout.track.x, cy - m.bar_height / 2.0, layout.track.w, m.bar_height);
        ui.draw_rect(bar, self.bar_color);

        // 3. 已选区间
        let (start, end) = view.fill;
        let x0 = layout.handle_x(start);
        let x1 = layout.handle_x(end);
        if x1 > x0 {
            ui.draw_rect(Rect::new(x0, bar.y, x1 - x0, bar.h), self.fill_color);
        }

        // 4. 刻度 (离散模式)，纯装饰
        for tick in &view.ticks {
            let mark = Rect::centered_at(layout.handle_x(tick.percent), cy, m.tick_width, m.tick_height);
            ui.draw_rect(mark, self.tick_color);
            ui.describe(mark, &AccessNode::decoration());
        }

        // 5. 圆钮
        for hv in [&view.min, &view.max] {
            let center = layout.handle_center(hv.percent);
            let radius = if hv.dragging { m.active_knob_radius } else { m.knob_radius };
            let color = if hv.dragging || hv.hovered { self.knob_active_color } else { self.knob_color };
            ui.draw_circle(center, radius, color);
            ui.describe(Rect::centered_at(center.0, center.1, radius * 2.0, radius * 2.0), &hv.access);
        }

        // 6. 标签
        for (hv, align) in [(&view.min, Alignment::Start), (&view.max, Alignment::End)] {
            let label_rect = layout.label(hv.handle);
            match &hv.label {
                HandleLabel::Button { text, access } => {
                    let clicked = Button::new(text)
                        .transparent()
                        .text_color(self.label_color)
                        .size(m.font_size)
                        .align(align)
                        .show(ui, label_rect);
                    ui.describe(label_rect, access);
                    if clicked {
                        response.edit_requested = Some(hv.handle);
                    }
                }
                HandleLabel::Static { text } => {
                    ui.draw_text(text, label_rect, self.label_color, m.font_size, align);
                }
            }
        }

        response
    }
}
