use std::cell::Cell;
use std::rc::Rc;

use range_ui::widgets::range::{AccessNode, Handle, Prompt, RangeController, Selection};
use range_ui::widgets::{RangeSlider, SliderLayout, SliderMetrics, SliderResponse};
use range_ui::{PointerEvent, Rect, UiContext};

use crate::page::RangeSetup;
use crate::renderer::canvas::TextCanvas;

/// 轨道至少这么宽，否则两个标签放不下
pub const MIN_TRACK_WIDTH: u16 = 24;

/// 一帧的渲染结果
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub lines: Vec<String>,
    pub response: SliderResponse,
    pub access: Vec<AccessNode>,
}

/// 字符界面上的一个区间控件实例，同时扮演受控组件的宿主：
/// 提交的新选区先存进 `current`，下一帧再交回控件。
pub struct RangeSession {
    ui: UiContext,
    controller: RangeController,
    current: Rc<Cell<Selection>>,
    commits: Rc<Cell<usize>>,
    metrics: SliderMetrics,
    rect: Rect,
}

impl RangeSession {
    pub fn new(setup: &RangeSetup, track_width: u16) -> Self {
        let mut ui = UiContext::new();
        // 指针初始放在控件外，免得第一帧就显示悬停
        ui.mouse_pos = (-1.0, -1.0);
        let current = Rc::new(Cell::new(setup.initial));
        let commits = Rc::new(Cell::new(0));

        let sink = current.clone();
        let counter = commits.clone();
        let controller = RangeController::new(setup.props.clone(), ui.hub().clone(), move |next| {
            sink.set(next);
            counter.set(counter.get() + 1);
        });

        // 左右各留半格给圆钮：列 c 的中心 c + 0.5 正好对应轨道上的 c / track_width
        let width = track_width.max(MIN_TRACK_WIDTH) as f32 + 1.0;

        Self {
            ui,
            controller,
            current,
            commits,
            metrics: SliderMetrics::cells(),
            rect: Rect::new(0.0, 0.0, width, 2.0),
        }
    }

    pub fn width(&self) -> usize {
        self.rect.w as usize
    }

    pub fn height(&self) -> usize {
        self.rect.h as usize
    }

    pub fn selection(&self) -> Selection {
        self.current.get()
    }

    pub fn commits(&self) -> usize {
        self.commits.get()
    }

    pub fn controller(&self) -> &RangeController {
        &self.controller
    }

    /// 指针是否仍处于按住状态
    pub fn is_pointer_held(&self) -> bool {
        self.ui.mouse_held
    }

    pub fn is_fixed(&self) -> bool {
        self.controller.is_fixed()
    }

    pub fn layout(&self) -> SliderLayout {
        SliderLayout::compute(self.rect, &self.metrics)
    }

    pub fn handle_center(&self, handle: Handle) -> (f32, f32) {
        let pct = self.controller.value_to_percentage(self.current.get().get(handle));
        self.layout().handle_center(pct)
    }

    /// 原始指针事件 (坐标已换算到控件内)
    pub fn pointer(&mut self, event: PointerEvent) {
        self.ui.feed(event);
    }

    pub fn frame(&mut self) -> Frame {
        let mut canvas = TextCanvas::new(&mut self.ui, self.rect.w as usize, self.rect.h as usize);
        let response = RangeSlider::new(&self.controller, self.current.get())
            .metrics(self.metrics)
            .show(&mut canvas, self.rect);
        let (lines, access) = canvas.into_parts();
        self.ui.end_frame();

        Frame { lines, response, access }
    }

    /// 在把手上按下，并跑一帧让控件接住这次按下
    pub fn press(&mut self, handle: Handle) -> SliderResponse {
        let (x, y) = self.handle_center(handle);
        self.pointer(PointerEvent::down(x, y));
        self.frame().response
    }

    pub fn drag_to(&mut self, col: f32) {
        let y = self.layout().track.center_y();
        self.pointer(PointerEvent::moved(col + 0.5, y));
    }

    pub fn release(&mut self) {
        let (x, y) = self.ui.mouse_pos;
        self.pointer(PointerEvent::up(x, y));
    }

    pub fn click(&mut self, col: f32, row: f32) -> SliderResponse {
        let (x, y) = (col + 0.5, row + 0.5);
        self.pointer(PointerEvent::down(x, y));
        let response = self.frame().response;
        self.pointer(PointerEvent::up(x, y));
        response
    }

    pub fn hover(&mut self, handle: Option<Handle>) {
        let (x, y) = match handle {
            Some(h) => self.handle_center(h),
            None => (-1.0, -1.0),
        };
        self.pointer(PointerEvent::moved(x, y));
        self.frame();
    }

    /// 标签编辑。离散模式的标签是只读的，返回 false
    pub fn edit(&mut self, handle: Handle, prompt: &mut (impl Prompt + ?Sized)) -> bool {
        if self.controller.is_fixed() {
            log::warn!("Labels are read-only in fixed mode, ignoring edit of '{}'", handle);
            return false;
        }
        self.controller.prompt_for_value(handle, prompt);
        true
    }
}
