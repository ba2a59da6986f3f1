use crate::event::{InputEvent, OutputEvent};
use crate::page::Page;
use crate::renderer::Renderer;
use crate::session::RangeSession;

pub struct Driver<R: Renderer> {
    page: Page,
    session: Option<RangeSession>,
    renderer: R,
}

impl<R: Renderer> Driver<R> {
    pub fn new(page: Page, track_width: u16, renderer: R) -> Self {
        let session = page.setup().map(|setup| RangeSession::new(setup, track_width));
        Self { page, session, renderer }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn session(&self) -> Option<&RangeSession> {
        self.session.as_ref()
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn run(&mut self) {
        log::info!("Driver started: {}", self.page.title());
        while self.step() {}
        self.renderer.render(&OutputEvent::End);
        log::info!("Driver finished");
    }

    /// 画一帧并处理一条输入，返回 false 表示结束
    pub fn step(&mut self) -> bool {
        let out = self.output();
        match self.renderer.render(&out) {
            Some(InputEvent::Exit) | None => false,
            Some(ev) => {
                self.feed(ev);
                true
            }
        }
    }

    pub fn feed(&mut self, ev: InputEvent) {
        let Some(session) = self.session.as_mut() else {
            log::debug!("No widget on an error page, dropping {:?}", ev);
            return;
        };
        log::debug!("Input: {:?}", ev);

        match ev {
            InputEvent::Press { handle } => {
                let response = session.press(handle);
                if response.pressed != Some(handle) {
                    log::debug!("Press on '{}' landed on {:?}", handle, response.pressed);
                }
            }
            InputEvent::Move { col } => session.drag_to(col),
            InputEvent::Release => session.release(),
            InputEvent::Click { col, row } => {
                let response = session.click(col, row);
                if let Some(handle) = response.edit_requested {
                    session.edit(handle, &mut self.renderer);
                }
            }
            InputEvent::Hover { handle } => session.hover(handle),
            InputEvent::Edit { handle } => {
                session.edit(handle, &mut self.renderer);
            }
            InputEvent::Show | InputEvent::Help | InputEvent::Exit => {}
        }
    }

    fn output(&mut self) -> OutputEvent {
        let title = self.page.title().to_string();
        match self.session.as_mut() {
            Some(session) => {
                let frame = session.frame();
                OutputEvent::ShowRange {
                    title,
                    instructions: self.page.exercise.instructions().to_string(),
                    canvas: frame.lines,
                    summary: self.page.summary(session.selection()),
                    access: frame.access,
                }
            }
            None => OutputEvent::ShowError {
                title,
                message: self.page.error_line().unwrap_or_default(),
            },
        }
    }
}
