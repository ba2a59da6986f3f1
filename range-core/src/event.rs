use range_ui::widgets::range::{AccessNode, Handle};

#[derive(Debug, Clone, PartialEq)]
pub enum OutputEvent {
    ShowRange {
        title: String,
        instructions: String,
        canvas: Vec<String>,
        summary: Vec<String>,
        access: Vec<AccessNode>,
    },
    ShowError { title: String, message: String },
    End,
}

/// 行命令。坐标单位是控件内的列/行
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Press { handle: Handle },
    Move { col: f32 },
    Release,
    Click { col: f32, row: f32 },
    Hover { handle: Option<Handle> },
    Edit { handle: Handle },
    Show,
    Help,
    Exit,
}

impl InputEvent {
    pub fn parse(line: &str) -> Option<InputEvent> {
        let mut parts = line.split_whitespace();
        let cmd = parts.next()?.to_ascii_lowercase();
        let args: Vec<&str> = parts.collect();

        let ev = match (cmd.as_str(), args.as_slice()) {
            ("press", [h]) => InputEvent::Press { handle: Handle::parse(h)? },
            ("move", [col]) => InputEvent::Move { col: col.parse().ok()? },
            ("release", []) => InputEvent::Release,
            ("click", [col, row]) => InputEvent::Click {
                col: col.parse().ok()?,
                row: row.parse().ok()?,
            },
            ("hover", [h]) if h.eq_ignore_ascii_case("none") => InputEvent::Hover { handle: None },
            ("hover", [h]) => InputEvent::Hover { handle: Some(Handle::parse(h)?) },
            ("edit", [h]) => InputEvent::Edit { handle: Handle::parse(h)? },
            ("show", []) => InputEvent::Show,
            ("help", []) | ("?", []) => InputEvent::Help,
            ("quit", []) | ("exit", []) | ("q", []) => InputEvent::Exit,
            _ => return None,
        };
        Some(ev)
    }
}

pub const HELP: &str = "\
commands:
  press min|max      press a handle
  move <col>         move the pointer (drags while pressed)
  release            release the pointer
  click <col> <row>  click inside the widget
  hover min|max|none hover a handle
  edit min|max       type a new value (normal range only)
  show               redraw
  quit";
