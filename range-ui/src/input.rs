use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// 一次指针事件 (逻辑坐标)
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
    default_prevented: bool,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: f32, y: f32) -> Self {
        Self { kind, x, y, default_prevented: false }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Down, x, y)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Move, x, y)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Up, x, y)
    }

    /// 阻止宿主的默认行为 (文本选择、原生拖放)
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

type Listener = Rc<RefCell<dyn FnMut(&PointerEvent)>>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// 进程级指针事件分发器。
///
/// 所有指针事件不论落在哪个控件上都会经过这里，订阅者拿到的是
/// [`Subscription`] 守卫，守卫被 drop 时自动退订。
#[derive(Clone, Default)]
pub struct PointerHub {
    inner: Rc<RefCell<HubInner>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&PointerEvent) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        inner.listeners.push((id, listener));
        log::trace!("Pointer listener {} attached ({} active)", id, inner.listeners.len());

        Subscription { hub: Rc::downgrade(&self.inner), id }
    }

    pub fn dispatch(&self, event: &PointerEvent) {
        // 先拍快照再回调：监听者可能在回调里退订自己
        let snapshot: Vec<(u64, Listener)> = self.inner.borrow().listeners.clone();

        for (id, listener) in snapshot {
            if !self.is_subscribed(id) {
                continue;
            }
            if let Ok(mut callback) = listener.try_borrow_mut() {
                (&mut *callback)(event);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn is_subscribed(&self, id: u64) -> bool {
        self.inner.borrow().listeners.iter().any(|(l, _)| *l == id)
    }
}

/// 订阅守卫
pub struct Subscription {
    hub: Weak<RefCell<HubInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            let mut inner = hub.borrow_mut();
            inner.listeners.retain(|(id, _)| *id != self.id);
            log::trace!("Pointer listener {} detached ({} active)", self.id, inner.listeners.len());
        }
    }
}

pub struct UiContext {
    /// 当前鼠标位置 (逻辑坐标)
    pub mouse_pos: (f32, f32),
    /// 鼠标左键是否刚刚按下 (本帧触发)
    pub mouse_pressed: bool,
    /// 鼠标左键是否处于按下状态 (拖拽用)
    pub mouse_held: bool,
    press: Option<PointerEvent>,
    hub: PointerHub,
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            mouse_pos: (0.0, 0.0),
            mouse_pressed: false,
            mouse_held: false,
            press: None,
            hub: PointerHub::new(),
        }
    }

    pub fn hub(&self) -> &PointerHub {
        &self.hub
    }

    /// 输入一条指针事件 (由宿主调用)，同时广播给进程级订阅者
    pub fn feed(&mut self, event: PointerEvent) {
        self.mouse_pos = (event.x, event.y);
        match event.kind {
            PointerKind::Down => {
                self.mouse_pressed = true;
                self.mouse_held = true;
                self.press = Some(event.clone());
            }
            PointerKind::Move => {}
            PointerKind::Up => {
                self.mouse_held = false;
            }
        }
        self.hub.dispatch(&event);
    }

    /// 本帧按下事件，控件可以在上面调用 `prevent_default`
    pub fn pointer_down(&mut self) -> Option<&mut PointerEvent> {
        self.press.as_mut()
    }

    /// 帧结束：清掉单帧状态，返回本帧的按下事件
    pub fn end_frame(&mut self) -> Option<PointerEvent> {
        self.mouse_pressed = false;
        self.press.take()
    }

    pub fn interact(&self, rect: Rect) -> Interaction {
        let (mx, my) = self.mouse_pos;
        let hovered = rect.contains(mx, my);

        if hovered {
            if self.mouse_pressed {
                return Interaction::Clicked;
            }
            if self.mouse_held {
                return Interaction::Held;
            }
            return Interaction::Hovered;
        }

        Interaction::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    None,
    Hovered,
    Clicked, // 刚刚点击
    Held,    // 按住中
}

impl Interaction {
    pub fn is_clicked(&self) -> bool {
        matches!(self, Interaction::Clicked)
    }

    pub fn is_hovered(&self) -> bool {
        !matches!(self, Interaction::None)
    }
}
