use std::io::{self, BufRead, StdinLock, Stdout, Write};

use range_ui::widgets::range::{AccessNode, Prompt, Role};

use crate::event::{InputEvent, OutputEvent, HELP};
use crate::renderer::Renderer;

/// 行式终端前端。默认读写 stdin / stdout，测试里可以换成内存缓冲。
pub struct TerminalRenderer<I = StdinLock<'static>, O = Stdout> {
    input: I,
    output: O,
}

impl TerminalRenderer {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> TerminalRenderer<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    fn show(&mut self, out: &OutputEvent) -> io::Result<()> {
        match out {
            OutputEvent::ShowRange { title, instructions, canvas, summary, access } => {
                writeln!(self.output, "--- {} ---", title)?;
                writeln!(self.output, "{}", instructions)?;
                writeln!(self.output)?;
                for line in canvas {
                    writeln!(self.output, "  {}", line)?;
                }
                writeln!(self.output)?;
                for line in summary {
                    writeln!(self.output, "{}", line)?;
                }
                let controls: Vec<String> = access.iter().map(describe).collect();
                writeln!(self.output, "[{}]", controls.join(", "))?;
            }
            OutputEvent::ShowError { title, message } => {
                writeln!(self.output, "--- {} ---", title)?;
                writeln!(self.output, "{}", message)?;
            }
            OutputEvent::End => {}
        }
        self.output.flush()
    }

    /// 读一行；EOF 返回 `None`
    fn read_line(&mut self) -> Option<String> {
        let mut buf = String::new();
        match self.input.read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                None
            }
        }
    }

    fn wait_command(&mut self) -> Option<InputEvent> {
        loop {
            if write!(self.output, "> ").and_then(|_| self.output.flush()).is_err() {
                return None;
            }
            let line = self.read_line()?;
            if line.trim().is_empty() {
                continue;
            }
            match InputEvent::parse(&line) {
                Some(InputEvent::Help) => {
                    let _ = writeln!(self.output, "{}", HELP);
                }
                Some(ev) => return Some(ev),
                None => {
                    let _ = writeln!(self.output, "invalid (type 'help')");
                }
            }
        }
    }
}

fn describe(node: &AccessNode) -> String {
    match (node.role, node.value_now) {
        (Role::Slider, Some(v)) => format!("slider '{}' = {}", node.name, v),
        (Role::Button, _) => format!("button '{}'", node.name),
        _ => node.name.clone(),
    }
}

impl<I: BufRead, O: Write> Renderer for TerminalRenderer<I, O> {
    fn render(&mut self, out: &OutputEvent) -> Option<InputEvent> {
        if let Err(e) = self.show(out) {
            log::error!("Failed to write output: {}", e);
            return None;
        }
        match out {
            OutputEvent::ShowRange { .. } => self.wait_command(),
            OutputEvent::ShowError { .. } | OutputEvent::End => None,
        }
    }
}

impl<I: BufRead, O: Write> Prompt for TerminalRenderer<I, O> {
    fn ask(&mut self, message: &str) -> Option<String> {
        if write!(self.output, "{} ", message).and_then(|_| self.output.flush()).is_err() {
            return None;
        }
        self.read_line()
    }
}
