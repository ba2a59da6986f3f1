use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use super::geometry::GeometryHandle;
use super::model::{FixedValues, Handle, RangeBounds, Selection};
use super::policy::{self, RangePolicy};
use super::presentation::{self, RangeView};
use super::prompt::{parse_value, Prompt};
use crate::input::{PointerEvent, PointerHub, PointerKind, Subscription};

type ChangeCallback = Box<dyn FnMut(Selection)>;

/// 构造参数
#[derive(Debug, Clone, PartialEq)]
pub struct RangeProps {
    pub bounds: RangeBounds,
    pub fixed: Option<FixedValues>,
    pub range: Selection,
    pub policy: RangePolicy,
}

impl RangeProps {
    pub fn continuous(bounds: RangeBounds, range: Selection) -> Self {
        Self { bounds, fixed: None, range, policy: RangePolicy::default() }
    }

    /// 离散模式：min / max 取集合的首尾
    pub fn fixed(values: FixedValues, range: Selection) -> Self {
        Self {
            bounds: values.bounds(),
            fixed: Some(values),
            range,
            policy: RangePolicy::default(),
        }
    }

    pub fn policy(mut self, policy: RangePolicy) -> Self {
        self.policy = policy;
        self
    }
}

struct State {
    bounds: RangeBounds,
    fixed: Option<FixedValues>,
    policy: RangePolicy,
    /// 宿主最近一次传入的选区，提交时不会改它
    range: Selection,
    dragging: Option<Handle>,
    hovered: Option<Handle>,
    geometry: GeometryHandle,
    on_change: Option<ChangeCallback>,
    /// 拖拽期间的进程级指针订阅
    capture: Option<Subscription>,
    /// 回调执行期间产生的提交，等回调返回后依次送出
    pending: VecDeque<Selection>,
}

impl State {
    fn position_to_value(&self, client_x: f32) -> Option<f64> {
        let rect = self.geometry.get()?;
        if rect.w <= 0.0 {
            return None;
        }
        // 先升到 f64 再除，值域很大时 f32 的商会丢整数位
        let f = ((client_x as f64 - rect.x as f64) / rect.w as f64).clamp(0.0, 1.0);
        Some(self.bounds.min + f * self.bounds.span())
    }
}

/// 双把手选区的状态控制器。
///
/// 选区归外部所有：控制器只把校验后的新值交给 `on_change`，
/// 宿主在下一帧通过 [`RangeController::set_range`] 把它传回来。
pub struct RangeController {
    state: Rc<RefCell<State>>,
    hub: PointerHub,
}

impl RangeController {
    pub fn new<F>(props: RangeProps, hub: PointerHub, on_change: F) -> Self
    where
        F: FnMut(Selection) + 'static,
    {
        let state = State {
            bounds: props.bounds,
            fixed: props.fixed,
            policy: props.policy,
            range: props.range,
            dragging: None,
            hovered: None,
            geometry: GeometryHandle::new(),
            on_change: Some(Box::new(on_change)),
            capture: None,
            pending: VecDeque::new(),
        };

        Self { state: Rc::new(RefCell::new(state)), hub }
    }

    /// 按下把手：记录拖拽中的把手并开始监听全局指针。
    /// 松开前再次按下只会换把手，订阅仍然只有一份。
    pub fn begin_drag(&self, handle: Handle, event: &mut PointerEvent) {
        event.prevent_default();

        let mut st = self.state.borrow_mut();
        st.dragging = Some(handle);
        if st.capture.is_none() {
            let weak = Rc::downgrade(&self.state);
            st.capture = Some(self.hub.subscribe(move |ev| on_pointer(&weak, ev)));
        }
        log::debug!("Range handle '{}' armed", handle);
    }

    pub fn set_hovered(&self, handle: Option<Handle>) {
        self.state.borrow_mut().hovered = handle;
    }

    /// 横坐标 → 值域。未挂载或宽度为 0 时返回 `None`。
    /// 不取整也不吸附，那是提交阶段的事。
    pub fn convert_position_to_value(&self, client_x: f32) -> Option<f64> {
        self.state.borrow().position_to_value(client_x)
    }

    /// 弹出输入框修改一个把手。取消或输入无效时什么也不做。
    pub fn prompt_for_value(&self, handle: Handle, prompt: &mut (impl Prompt + ?Sized)) {
        let message = format!("Enter new {} value:", handle.accessible_name());
        let Some(input) = prompt.ask(&message) else {
            log::debug!("Prompt for '{}' cancelled", handle);
            return;
        };
        let Some(value) = parse_value(&input) else {
            log::debug!("Ignoring non-numeric input {:?} for '{}'", input, handle);
            return;
        };

        let next = {
            let st = self.state.borrow();
            policy::enforce_continuous(handle, value, st.bounds, st.range, st.policy.min_gap)
        };
        log::debug!("Prompt commit '{}': {} -> {:?}", handle, value, next);
        emit(&self.state, next);
    }

    /// 外部选区更新 (受控组件的 props)
    pub fn set_range(&self, range: Selection) {
        self.state.borrow_mut().range = range;
    }

    /// 卸载：解除拖拽并释放全局订阅
    pub fn unmount(&self) {
        release(&self.state);
        self.state.borrow().geometry.clear();
    }

    pub fn range(&self) -> Selection {
        self.state.borrow().range
    }

    pub fn dragging(&self) -> Option<Handle> {
        self.state.borrow().dragging
    }

    pub fn hovered(&self) -> Option<Handle> {
        self.state.borrow().hovered
    }

    pub fn bounds(&self) -> RangeBounds {
        self.state.borrow().bounds
    }

    pub fn is_fixed(&self) -> bool {
        self.state.borrow().fixed.is_some()
    }

    pub fn is_capturing(&self) -> bool {
        self.state.borrow().capture.is_some()
    }

    pub fn geometry(&self) -> GeometryHandle {
        self.state.borrow().geometry.clone()
    }

    pub fn value_to_percentage(&self, value: f64) -> f64 {
        presentation::percentage(self.state.borrow().bounds, value)
    }

    pub fn view(&self) -> RangeView {
        let st = self.state.borrow();
        presentation::describe(st.bounds, st.fixed.as_ref(), st.range, st.dragging, st.hovered)
    }
}

impl Drop for RangeController {
    fn drop(&mut self) {
        release(&self.state);
    }
}

fn on_pointer(state: &Weak<RefCell<State>>, event: &PointerEvent) {
    let Some(state) = state.upgrade() else {
        return;
    };
    match event.kind {
        PointerKind::Move => commit_drag(&state, event.x),
        PointerKind::Up => release(&state),
        PointerKind::Down => {}
    }
}

fn commit_drag(state: &Rc<RefCell<State>>, client_x: f32) {
    let next = {
        let st = state.borrow();
        let Some(handle) = st.dragging else {
            return;
        };
        let Some(raw) = st.position_to_value(client_x) else {
            return;
        };
        policy::drag_commit(handle, raw, st.bounds, st.fixed.as_ref(), st.range, &st.policy)
    };
    log::trace!("Drag commit at x={}: {:?}", client_x, next);
    emit(state, next);
}

fn release(state: &Rc<RefCell<State>>) {
    let capture = {
        let mut st = state.borrow_mut();
        if let Some(handle) = st.dragging.take() {
            log::debug!("Range handle '{}' released", handle);
        }
        st.capture.take()
    };
    // 在借用之外 drop，退订会再借一次 hub
    drop(capture);
}

/// 回调期间不持有借用，回调里可以再调用 `set_range`。
/// 回调里再触发的提交排队，等当前回调返回后按顺序送出。
fn emit(state: &Rc<RefCell<State>>, next: Selection) {
    let callback = state.borrow_mut().on_change.take();
    let Some(mut callback) = callback else {
        log::debug!("Deferring nested commit {:?} until on_change returns", next);
        state.borrow_mut().pending.push_back(next);
        return;
    };

    let mut next = Some(next);
    while let Some(selection) = next {
        callback(selection);
        next = state.borrow_mut().pending.pop_front();
    }
    state.borrow_mut().on_change = Some(callback);
}
