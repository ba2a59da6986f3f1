use crate::{Rect, Color, UiRenderer, Alignment};
use crate::input::Interaction;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonStyle {
    pub background: Color,
}

pub struct Button<'a> {
    text: &'a str,

    normal_style: ButtonStyle,
    hover_style: ButtonStyle,
    active_style: ButtonStyle,

    text_color: Color,
    font_size: f32,
    align: Alignment,
}

impl<'a> Button<'a> {
    pub fn new(text: &'a str) -> Self {
        // 默认：深灰背景，悬停变浅，按下变深
        let normal = ButtonStyle { background: Color::DARK_GRAY };
        let hover = ButtonStyle { background: Color::GRAY };
        let active = ButtonStyle { background: Color::rgb(20, 20, 20) };

        Self {
            text,
            normal_style: normal,
            hover_style: hover,
            active_style: active,
            text_color: Color::WHITE,
            font_size: 24.0,
            align: Alignment::Center,
        }
    }

    /// 透明按钮，悬停时微微发亮
    pub fn transparent(mut self) -> Self {
        self.normal_style.background = Color::TRANSPARENT;
        self.hover_style.background = Color::rgba(255, 255, 255, 30);
        self.active_style.background = Color::rgba(255, 255, 255, 60);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn show(self, ui: &mut impl UiRenderer, rect: Rect) -> bool {
        let interaction = ui.interact(rect);

        let style = match interaction {
            Interaction::Held | Interaction::Clicked => &self.active_style,
            Interaction::Hovered => &self.hover_style,
            Interaction::None => &self.normal_style,
        };

        if style.background.a > 0 {
            ui.draw_rect(rect, style.background);
        }

        ui.draw_text(self.text, rect, self.text_color, self.font_size, self.align);

        interaction.is_clicked()
    }
}
