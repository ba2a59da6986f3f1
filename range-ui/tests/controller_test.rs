use std::cell::RefCell;
use std::rc::{Rc, Weak};

use range_ui::input::{PointerEvent, PointerHub};
use range_ui::widgets::range::{
    FixedOrdering, FixedValues, Handle, NoPrompt, RangeBounds, RangeController, RangePolicy,
    RangeProps, Selection,
};
use range_ui::Rect;

const FIXED: [f64; 6] = [1.99, 5.99, 10.99, 30.99, 50.99, 70.99];

type Calls = Rc<RefCell<Vec<Selection>>>;

fn continuous_with(bounds: (f64, f64), range: [f64; 2], policy: RangePolicy) -> (RangeController, PointerHub, Calls) {
    let hub = PointerHub::new();
    let calls: Calls = Rc::default();
    let sink = calls.clone();
    let props = RangeProps::continuous(RangeBounds::new(bounds.0, bounds.1).unwrap(), range.into())
        .policy(policy);
    let controller = RangeController::new(props, hub.clone(), move |s| sink.borrow_mut().push(s));
    (controller, hub, calls)
}

fn continuous(range: [f64; 2]) -> (RangeController, PointerHub, Calls) {
    continuous_with((0.0, 100.0), range, RangePolicy::default())
}

fn fixed(range: [f64; 2], ordering: FixedOrdering) -> (RangeController, PointerHub, Calls) {
    let hub = PointerHub::new();
    let calls: Calls = Rc::default();
    let sink = calls.clone();
    let props = RangeProps::fixed(FixedValues::new(FIXED.to_vec()).unwrap(), range.into())
        .policy(RangePolicy::default().fixed_ordering(ordering));
    let controller = RangeController::new(props, hub.clone(), move |s| sink.borrow_mut().push(s));
    controller.geometry().set(Rect::new(0.0, 0.0, 1000.0, 50.0));
    (controller, hub, calls)
}

fn answer(text: &'static str) -> impl FnMut(&str) -> Option<String> {
    move |_: &str| Some(text.to_string())
}

fn arm(controller: &RangeController, handle: Handle) {
    controller.begin_drag(handle, &mut PointerEvent::down(0.0, 0.0));
}

fn last(calls: &Calls) -> Selection {
    *calls.borrow().last().expect("no commit recorded")
}

#[test]
fn test_initial_state() {
    let (controller, hub, calls) = continuous([25.0, 75.0]);
    assert_eq!(controller.dragging(), None);
    assert_eq!(controller.hovered(), None);
    assert!(!controller.is_capturing());
    assert!(!controller.is_fixed());
    assert_eq!(hub.listener_count(), 0);
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_value_to_percentage() {
    let (c, _, _) = continuous_with((0.0, 100.0), [25.0, 75.0], RangePolicy::default());
    assert_eq!(c.value_to_percentage(0.0), 0.0);
    assert_eq!(c.value_to_percentage(50.0), 50.0);
    assert_eq!(c.value_to_percentage(100.0), 100.0);

    let (c, _, _) = continuous_with((10.0, 90.0), [25.0, 75.0], RangePolicy::default());
    assert_eq!(c.value_to_percentage(10.0), 0.0);
    assert_eq!(c.value_to_percentage(50.0), 50.0);
    assert_eq!(c.value_to_percentage(90.0), 100.0);

    let (c, _, _) = continuous_with((-50.0, 50.0), [-25.0, 25.0], RangePolicy::default());
    assert_eq!(c.value_to_percentage(-50.0), 0.0);
    assert_eq!(c.value_to_percentage(0.0), 50.0);
    assert_eq!(c.value_to_percentage(50.0), 100.0);

    // 越界值夹到 [0, 100]
    assert_eq!(c.value_to_percentage(-80.0), 0.0);
    assert_eq!(c.value_to_percentage(80.0), 100.0);
}

#[test]
fn test_begin_drag_arms_and_prevents_default() {
    let (controller, hub, _) = continuous([25.0, 75.0]);
    let mut event = PointerEvent::down(10.0, 10.0);
    controller.begin_drag(Handle::Min, &mut event);

    assert!(event.default_prevented());
    assert_eq!(controller.dragging(), Some(Handle::Min));
    assert!(controller.is_capturing());
    assert_eq!(hub.listener_count(), 1);
}

#[test]
fn test_second_press_reassigns_handle_without_extra_listener() {
    let (controller, hub, _) = continuous([25.0, 75.0]);
    arm(&controller, Handle::Min);
    arm(&controller, Handle::Max);

    assert_eq!(controller.dragging(), Some(Handle::Max));
    assert_eq!(hub.listener_count(), 1);
}

#[test]
fn test_hovered_handle() {
    let (controller, _, _) = continuous([25.0, 75.0]);
    controller.set_hovered(Some(Handle::Min));
    assert_eq!(controller.hovered(), Some(Handle::Min));
    controller.set_hovered(Some(Handle::Max));
    assert_eq!(controller.hovered(), Some(Handle::Max));
    controller.set_hovered(None);
    assert_eq!(controller.hovered(), None);
}

#[test]
fn test_prompt_cancel_does_nothing() {
    let (controller, _, calls) = continuous([25.0, 75.0]);
    controller.prompt_for_value(Handle::Min, &mut NoPrompt);
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_prompt_updates_min_and_max() {
    let (controller, _, calls) = continuous([25.0, 75.0]);

    controller.prompt_for_value(Handle::Min, &mut answer("30"));
    assert_eq!(last(&calls), Selection::new(30.0, 75.0));

    controller.prompt_for_value(Handle::Max, &mut answer("70"));
    assert_eq!(last(&calls), Selection::new(25.0, 70.0));
}

#[test]
fn test_prompt_respects_min_gap() {
    let (controller, _, calls) = continuous([25.0, 30.0]);

    // 30 - 3 = 27
    controller.prompt_for_value(Handle::Min, &mut answer("28"));
    assert_eq!(last(&calls), Selection::new(27.0, 30.0));

    // 25 + 3 = 28
    controller.prompt_for_value(Handle::Max, &mut answer("27"));
    assert_eq!(last(&calls), Selection::new(25.0, 28.0));
}

#[test]
fn test_prompt_clamps_to_bounds() {
    let (controller, _, calls) = continuous([25.0, 75.0]);

    controller.prompt_for_value(Handle::Min, &mut answer("-10"));
    assert_eq!(last(&calls), Selection::new(0.0, 75.0));

    controller.prompt_for_value(Handle::Max, &mut answer("150"));
    assert_eq!(last(&calls), Selection::new(25.0, 100.0));
}

#[test]
fn test_prompt_ignores_invalid_input() {
    let (controller, _, calls) = continuous([25.0, 75.0]);
    for input in ["invalid", "", "   ", "inf", "NaN", "12abc"] {
        controller.prompt_for_value(Handle::Min, &mut answer(input));
    }
    assert!(calls.borrow().is_empty());

    controller.prompt_for_value(Handle::Min, &mut answer("  42 "));
    assert_eq!(last(&calls), Selection::new(42.0, 75.0));
}

#[test]
fn test_prompt_uses_configured_gap() {
    let (controller, _, calls) = continuous_with(
        (0.0, 100.0),
        [25.0, 75.0],
        RangePolicy::default().min_gap(10.0),
    );
    controller.prompt_for_value(Handle::Min, &mut answer("70"));
    assert_eq!(last(&calls), Selection::new(65.0, 75.0));
}

#[test]
fn test_repeated_commit_is_idempotent() {
    let (controller, _, calls) = continuous([25.0, 75.0]);
    controller.prompt_for_value(Handle::Min, &mut answer("30"));
    controller.prompt_for_value(Handle::Min, &mut answer("30"));

    let calls = calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}

#[test]
fn test_drag_rounds_to_integers() {
    let (controller, hub, calls) = continuous([25.0, 75.0]);
    controller.geometry().set(Rect::new(0.0, 0.0, 1000.0, 50.0));
    arm(&controller, Handle::Min);

    hub.dispatch(&PointerEvent::moved(500.4, 300.0));
    assert_eq!(last(&calls), Selection::new(50.0, 75.0));

    hub.dispatch(&PointerEvent::moved(123.6, 0.0));
    let low = last(&calls).low;
    assert_eq!(low, 12.0);
    assert_eq!(low.fract(), 0.0);
}

#[test]
fn test_drag_commits_every_movement() {
    let (controller, hub, calls) = continuous([25.0, 75.0]);
    controller.geometry().set(Rect::new(0.0, 0.0, 1000.0, 50.0));
    arm(&controller, Handle::Max);

    for x in [800.0, 810.0, 820.0] {
        hub.dispatch(&PointerEvent::moved(x, 0.0));
    }
    let highs: Vec<f64> = calls.borrow().iter().map(|s| s.high).collect();
    assert_eq!(highs, vec![80.0, 81.0, 82.0]);
}

#[test]
fn test_drag_outside_widget_is_clamped() {
    let (controller, hub, calls) = continuous([25.0, 75.0]);
    controller.geometry().set(Rect::new(100.0, 0.0, 500.0, 50.0));

    arm(&controller, Handle::Min);
    hub.dispatch(&PointerEvent::moved(-400.0, 0.0));
    assert_eq!(last(&calls), Selection::new(0.0, 75.0));

    arm(&controller, Handle::Max);
    hub.dispatch(&PointerEvent::moved(5000.0, 0.0));
    assert_eq!(last(&calls), Selection::new(25.0, 100.0));
}

#[test]
fn test_drag_enforces_gap() {
    let (controller, hub, calls) = continuous([25.0, 75.0]);
    controller.geometry().set(Rect::new(0.0, 0.0, 1000.0, 50.0));
    arm(&controller, Handle::Min);

    hub.dispatch(&PointerEvent::moved(900.0, 0.0));
    assert_eq!(last(&calls), Selection::new(72.0, 75.0));
}

#[test]
fn test_release_disarms_and_detaches() {
    let (controller, hub, calls) = continuous([25.0, 75.0]);
    controller.geometry().set(Rect::new(0.0, 0.0, 1000.0, 50.0));
    arm(&controller, Handle::Min);

    hub.dispatch(&PointerEvent::moved(400.0, 0.0));
    hub.dispatch(&PointerEvent::up(400.0, 0.0));
    assert_eq!(controller.dragging(), None);
    assert!(!controller.is_capturing());
    assert_eq!(hub.listener_count(), 0);

    hub.dispatch(&PointerEvent::moved(100.0, 0.0));
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn test_pointer_down_on_hub_is_ignored() {
    let (controller, hub, calls) = continuous([25.0, 75.0]);
    controller.geometry().set(Rect::new(0.0, 0.0, 1000.0, 50.0));
    arm(&controller, Handle::Min);

    hub.dispatch(&PointerEvent::down(400.0, 0.0));
    assert!(calls.borrow().is_empty());
    assert_eq!(controller.dragging(), Some(Handle::Min));
}

#[test]
fn test_move_without_geometry_commits_nothing() {
    let (controller, hub, calls) = continuous([25.0, 75.0]);
    arm(&controller, Handle::Min);
    hub.dispatch(&PointerEvent::moved(400.0, 0.0));
    assert!(calls.borrow().is_empty());
    assert_eq!(controller.convert_position_to_value(400.0), None);

    controller.geometry().set(Rect::new(0.0, 0.0, 0.0, 50.0));
    hub.dispatch(&PointerEvent::moved(400.0, 0.0));
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_geometry_is_read_lazily() {
    let (controller, _, _) = continuous([25.0, 75.0]);
    let geometry = controller.geometry();

    geometry.set(Rect::new(0.0, 0.0, 1000.0, 50.0));
    assert_eq!(controller.convert_position_to_value(250.0), Some(25.0));

    // 布局变了，下一次换算立即生效
    geometry.set(Rect::new(500.0, 0.0, 500.0, 50.0));
    assert_eq!(controller.convert_position_to_value(750.0), Some(50.0));
    assert_eq!(controller.convert_position_to_value(0.0), Some(0.0));
}

#[test]
fn test_commits_do_not_mutate_controlled_range() {
    let (controller, hub, calls) = continuous([25.0, 75.0]);
    controller.geometry().set(Rect::new(0.0, 0.0, 1000.0, 50.0));

    arm(&controller, Handle::Min);
    hub.dispatch(&PointerEvent::moved(400.0, 0.0));
    assert_eq!(controller.range(), Selection::new(25.0, 75.0));

    // 宿主没回传新值，另一把手仍按旧值计算
    arm(&controller, Handle::Max);
    hub.dispatch(&PointerEvent::moved(900.0, 0.0));
    assert_eq!(last(&calls), Selection::new(25.0, 90.0));

    controller.set_range(Selection::new(40.0, 90.0));
    arm(&controller, Handle::Min);
    hub.dispatch(&PointerEvent::moved(950.0, 0.0));
    assert_eq!(last(&calls), Selection::new(87.0, 90.0));
}

#[test]
fn test_callback_may_feed_value_back() {
    let slot: Rc<RefCell<Weak<RangeController>>> = Rc::new(RefCell::new(Weak::new()));
    let hub = PointerHub::new();
    let back = slot.clone();
    let props = RangeProps::continuous(RangeBounds::new(0.0, 100.0).unwrap(), Selection::new(25.0, 75.0));
    let controller = Rc::new(RangeController::new(props, hub.clone(), move |next| {
        if let Some(c) = back.borrow().upgrade() {
            c.set_range(next);
        }
    }));
    *slot.borrow_mut() = Rc::downgrade(&controller);

    controller.geometry().set(Rect::new(0.0, 0.0, 1000.0, 50.0));
    arm(&controller, Handle::Min);
    hub.dispatch(&PointerEvent::moved(400.0, 0.0));
    assert_eq!(controller.range(), Selection::new(40.0, 75.0));

    controller.prompt_for_value(Handle::Max, &mut answer("60"));
    assert_eq!(controller.range(), Selection::new(40.0, 60.0));
}

#[test]
fn test_nested_commit_is_delivered_after_callback() {
    let slot: Rc<RefCell<Weak<RangeController>>> = Rc::new(RefCell::new(Weak::new()));
    let calls: Calls = Rc::default();
    let hub = PointerHub::new();
    let (back, sink) = (slot.clone(), calls.clone());
    let props = RangeProps::continuous(RangeBounds::new(0.0, 100.0).unwrap(), Selection::new(25.0, 75.0));
    let controller = Rc::new(RangeController::new(props, hub.clone(), move |next| {
        let first = sink.borrow().is_empty();
        sink.borrow_mut().push(next);
        // 回调里再发起一次提交
        if first {
            if let Some(c) = back.borrow().upgrade() {
                c.prompt_for_value(Handle::Max, &mut answer("60"));
            }
        }
    }));
    *slot.borrow_mut() = Rc::downgrade(&controller);

    controller.geometry().set(Rect::new(0.0, 0.0, 1000.0, 50.0));
    arm(&controller, Handle::Min);
    hub.dispatch(&PointerEvent::moved(400.0, 0.0));

    assert_eq!(*calls.borrow(), vec![Selection::new(40.0, 75.0), Selection::new(25.0, 60.0)]);

    // 回调已经放回，后续提交照常送达
    controller.prompt_for_value(Handle::Max, &mut answer("70"));
    assert_eq!(last(&calls), Selection::new(25.0, 70.0));
}

#[test]
fn test_position_conversion_is_exact_on_wide_bounds() {
    let (controller, _, _) = continuous_with((0.0, 1e8), [0.0, 1e8], RangePolicy::default());
    controller.geometry().set(Rect::new(0.0, 0.0, 1000.0, 50.0));

    let value = controller.convert_position_to_value(123.5).unwrap();
    assert!((value - 12_350_000.0).abs() < 1e-6, "got {}", value);

    let (controller, _, _) = continuous_with((-5e7, 5e7), [-5e7, 5e7], RangePolicy::default());
    controller.geometry().set(Rect::new(100.0, 0.0, 1000.0, 50.0));
    let value = controller.convert_position_to_value(350.25).unwrap();
    assert!((value - -24_975_000.0).abs() < 1e-6, "got {}", value);
}

#[test]
fn test_teardown_while_armed_releases_listener() {
    let (controller, hub, _) = continuous([25.0, 75.0]);
    arm(&controller, Handle::Max);
    assert_eq!(hub.listener_count(), 1);

    drop(controller);
    assert_eq!(hub.listener_count(), 0);
    hub.dispatch(&PointerEvent::moved(10.0, 0.0));
}

#[test]
fn test_unmount_clears_drag_state() {
    let (controller, hub, _) = continuous([25.0, 75.0]);
    controller.geometry().set(Rect::new(0.0, 0.0, 1000.0, 50.0));
    arm(&controller, Handle::Min);

    controller.unmount();
    assert_eq!(controller.dragging(), None);
    assert_eq!(hub.listener_count(), 0);
    assert_eq!(controller.convert_position_to_value(10.0), None);
}

#[test]
fn test_fixed_mode_bounds_come_from_values() {
    let (controller, _, _) = fixed([10.99, 50.99], FixedOrdering::Unguarded);
    assert!(controller.is_fixed());
    assert_eq!(controller.bounds(), RangeBounds { min: 1.99, max: 70.99 });
}

#[test]
fn test_fixed_drag_snaps_to_exact_member() {
    let (controller, hub, calls) = fixed([10.99, 50.99], FixedOrdering::Unguarded);
    arm(&controller, Handle::Min);

    // 58px ≈ 5.99
    hub.dispatch(&PointerEvent::moved(58.0, 0.0));
    assert_eq!(last(&calls).low, 5.99);
    assert_eq!(last(&calls).high, 50.99);

    // 100px ≈ 8.89，离 10.99 更近
    hub.dispatch(&PointerEvent::moved(100.0, 0.0));
    assert_eq!(last(&calls).low, 10.99);
    assert!(FIXED.contains(&last(&calls).low));
}

#[test]
fn test_fixed_tie_goes_to_lower_value() {
    let hub = PointerHub::new();
    let calls: Calls = Rc::default();
    let sink = calls.clone();
    let values = FixedValues::new(vec![0.0, 10.0, 20.0]).unwrap();
    let props = RangeProps::fixed(values, Selection::new(0.0, 20.0));
    let controller = RangeController::new(props, hub.clone(), move |s| sink.borrow_mut().push(s));
    controller.geometry().set(Rect::new(0.0, 0.0, 1000.0, 50.0));

    arm(&controller, Handle::Max);
    hub.dispatch(&PointerEvent::moved(250.0, 0.0));
    assert_eq!(last(&calls).high, 0.0);
}

#[test]
fn test_fixed_unguarded_allows_crossing() {
    let (controller, hub, calls) = fixed([10.99, 30.99], FixedOrdering::Unguarded);
    arm(&controller, Handle::Min);
    hub.dispatch(&PointerEvent::moved(1000.0, 0.0));
    assert_eq!(last(&calls), Selection::new(70.99, 30.99));
}

#[test]
fn test_fixed_guarded_keeps_order() {
    let (controller, hub, calls) = fixed([10.99, 30.99], FixedOrdering::Guarded);
    arm(&controller, Handle::Min);
    hub.dispatch(&PointerEvent::moved(1000.0, 0.0));
    assert_eq!(last(&calls), Selection::new(30.99, 30.99));

    arm(&controller, Handle::Max);
    hub.dispatch(&PointerEvent::moved(0.0, 0.0));
    assert_eq!(last(&calls), Selection::new(10.99, 10.99));
}
