use range_ui::widgets::range::AccessNode;
use range_ui::{Alignment, Color, Interaction, PointerEvent, Rect, UiContext, UiRenderer};

/// 字符网格后端：一个逻辑单位 = 一列 / 一行。
/// 格子中心落在矩形内就算被覆盖。
pub struct TextCanvas<'a> {
    input: &'a mut UiContext,
    width: usize,
    height: usize,
    cells: Vec<char>,
    access: Vec<AccessNode>,
}

impl<'a> TextCanvas<'a> {
    pub fn new(input: &'a mut UiContext, width: usize, height: usize) -> Self {
        Self {
            input,
            width,
            height,
            cells: vec![' '; width * height],
            access: Vec::new(),
        }
    }

    fn put(&mut self, col: i64, row: i64, ch: char) {
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return;
        }
        self.cells[row as usize * self.width + col as usize] = ch;
    }

    pub fn lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<AccessNode>) {
        let lines = self.lines();
        (lines, self.access)
    }
}

/// 亮度越高字符越"满"
fn glyph(color: Color) -> char {
    match color.luma() {
        0..100 => '-',
        100..150 => '|',
        _ => '=',
    }
}

impl<'a> UiRenderer for TextCanvas<'a> {
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        // 半透明高亮在字符界面上不画
        if color.a < 128 {
            return;
        }
        let ch = glyph(color);
        for row in 0..self.height {
            for col in 0..self.width {
                if rect.contains(col as f32 + 0.5, row as f32 + 0.5) {
                    self.put(col as i64, row as i64, ch);
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, rect: Rect, _color: Color, _size: f32, align: Alignment) {
        let len = text.chars().count() as f32;
        let start = match align {
            Alignment::Start => rect.x,
            Alignment::Center => rect.x + (rect.w - len) / 2.0,
            Alignment::End => rect.x + rect.w - len,
        };
        let row = rect.center_y().floor() as i64;
        let first = start.max(rect.x).floor() as i64;
        let limit = (rect.x + rect.w).floor() as i64;
        for (i, ch) in text.chars().enumerate() {
            let col = start.floor() as i64 + i as i64;
            if col >= first && col < limit {
                self.put(col, row, ch);
            }
        }
    }

    fn draw_circle(&mut self, center: (f32, f32), _radius: f32, color: Color) {
        // 白色 = 常态，其余 (悬停 / 按住) 用实心
        let ch = if color.luma() >= 230 { 'O' } else { '@' };
        self.put(center.0.floor() as i64, center.1.floor() as i64, ch);
    }

    fn interact(&self, rect: Rect) -> Interaction {
        self.input.interact(rect)
    }

    fn cursor_pos(&self) -> (f32, f32) {
        self.input.mouse_pos
    }

    fn pointer_down(&mut self) -> Option<&mut PointerEvent> {
        self.input.pointer_down()
    }

    fn describe(&mut self, _rect: Rect, node: &AccessNode) {
        if !node.hidden {
            self.access.push(node.clone());
        }
    }
}
