use std::io::{self, Stdout};
use std::time::Duration;

use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEvent, MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Terminal;

use range_ui::widgets::range::Handle;
use range_ui::PointerEvent;

use crate::page::Page;
use crate::session::RangeSession;

/// 全屏前端：鼠标直接拖动把手，点击标签后在底部输入新值
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

/// 底部输入行的状态
struct Editing {
    handle: Handle,
    buffer: String,
}

impl TuiRenderer {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        Ok(Self { terminal })
    }

    pub fn run_event_loop(&mut self, page: &Page, track_width: u16) -> io::Result<()> {
        let mut session = page.setup().map(|setup| RangeSession::new(setup, track_width));
        let mut editing: Option<Editing> = None;
        // 控件左上角在屏幕上的位置
        let mut origin = (0u16, 0u16);

        loop {
            let mut edit_requested = None;
            self.terminal.draw(|f| {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(3),
                        Constraint::Length(4),
                        Constraint::Length(4),
                        Constraint::Min(1),
                    ])
                    .split(f.area());

                let header = Paragraph::new(page.exercise.instructions())
                    .block(Block::default().borders(Borders::ALL).title(page.title()));
                f.render_widget(header, rows[0]);

                let Some(session) = session.as_mut() else {
                    let message = page.error_line().unwrap_or_default();
                    f.render_widget(Paragraph::new(message), rows[1]);
                    return;
                };

                let frame = session.frame();
                edit_requested = frame.response.edit_requested;
                origin = (rows[1].x + 1, rows[1].y + 1);

                let canvas: Vec<Line> = frame.lines.into_iter().map(Line::from).collect();
                f.render_widget(
                    Paragraph::new(canvas).block(Block::default().borders(Borders::ALL)),
                    rows[1],
                );

                let summary: Vec<Line> = page
                    .summary(session.selection())
                    .into_iter()
                    .map(Line::from)
                    .collect();
                f.render_widget(Paragraph::new(summary), rows[2]);

                let status = match &editing {
                    Some(e) => format!("Enter new {} value: {}_", e.handle.accessible_name(), e.buffer),
                    None => "drag with the mouse, click a label to edit, q to quit".to_string(),
                };
                f.render_widget(Paragraph::new(status), rows[3]);
            })?;

            if let Some(handle) = edit_requested {
                log::debug!("Editing '{}' from the TUI", handle);
                editing = Some(Editing { handle, buffer: String::new() });
            }

            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match editing.as_mut() {
                    Some(e) => match key.code {
                        KeyCode::Char(c) => e.buffer.push(c),
                        KeyCode::Backspace => {
                            e.buffer.pop();
                        }
                        KeyCode::Enter => {
                            if let (Some(e), Some(session)) = (editing.take(), session.as_mut()) {
                                let text = e.buffer;
                                session.edit(e.handle, &mut |_: &str| Some(text.clone()));
                            }
                        }
                        KeyCode::Esc => editing = None,
                        _ => {}
                    },
                    None => {
                        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                            break;
                        }
                    }
                },
                Event::Mouse(mouse) => {
                    if let Some(session) = session.as_mut() {
                        if let Some(event) = route_mouse(mouse, origin, editing.is_some()) {
                            session.pointer(event);
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }
}

/// 屏幕坐标 → 控件内坐标 (格子中心)。
/// 输入行打开时只放行左键松开，打开输入行的那次点击要能正常结束。
pub fn route_mouse(mouse: MouseEvent, origin: (u16, u16), editing: bool) -> Option<PointerEvent> {
    let x = mouse.column as f32 - origin.0 as f32 + 0.5;
    let y = mouse.row as f32 - origin.1 as f32 + 0.5;
    match mouse.kind {
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::up(x, y)),
        _ if editing => None,
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::down(x, y)),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            Some(PointerEvent::moved(x, y))
        }
        _ => None,
    }
}

impl Drop for TuiRenderer {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
