#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255, a: 255 };
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };
    pub const GRAY: Self = Self { r: 128, g: 128, b: 128, a: 255 };
    pub const LIGHT_GRAY: Self = Self { r: 200, g: 200, b: 200, a: 255 };
    pub const DARK_GRAY: Self = Self { r: 40, g: 40, b: 40, a: 255 };

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// 感知亮度 (0 ~ 255)，文本后端用它挑选字符
    pub fn luma(&self) -> u8 {
        let l = 0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32;
        l.round().clamp(0.0, 255.0) as u8
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Start,
    Center,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w &&
            y >= self.y && y < self.y + self.h
    }

    /// 返回 (切出的底部, 上面的剩余)
    pub fn split_bottom(&self, height: f32) -> (Rect, Rect) {
        let h = height.min(self.h);
        let rest_h = self.h - h;
        let rest = Rect::new(self.x, self.y, self.w, rest_h);
        let bottom = Rect::new(self.x, self.y + rest_h, self.w, h);
        (bottom, rest)
    }

    pub fn split_left(&self, width: f32) -> (Rect, Rect) {
        let w = width.min(self.w);
        let left = Rect::new(self.x, self.y, w, self.h);
        let rest = Rect::new(self.x + w, self.y, self.w - w, self.h);
        (left, rest)
    }

    /// 左右各收缩 `amount`，缩没了就返回 0 宽
    pub fn inset_x(&self, amount: f32) -> Rect {
        if self.w <= amount * 2.0 {
            return Rect::new(self.x + self.w / 2.0, self.y, 0.0, self.h);
        }
        Rect::new(self.x + amount, self.y, self.w - amount * 2.0, self.h)
    }

    /// 以 (cx, cy) 为中心的 w x h 矩形
    pub fn centered_at(cx: f32, cy: f32, w: f32, h: f32) -> Rect {
        Rect::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }
}
