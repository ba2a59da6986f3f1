//! 提交策略：取整、吸附、边界与最小间距。
//!
//! 这里全部是纯函数，控制器在拖拽和输入两条路径上共用。

use super::model::{FixedValues, Handle, RangeBounds, Selection};

/// 两个把手之间的最小间距 (连续模式，值域单位)
pub const MIN_GAP: f64 = 3.0;

/// 离散模式下是否保证 low <= high
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixedOrdering {
    /// 每个把手独立吸附，不检查顺序
    #[default]
    Unguarded,
    /// 被编辑的把手不能越过另一个把手
    Guarded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangePolicy {
    pub min_gap: f64,
    pub fixed_ordering: FixedOrdering,
}

impl Default for RangePolicy {
    fn default() -> Self {
        Self {
            min_gap: MIN_GAP,
            fixed_ordering: FixedOrdering::Unguarded,
        }
    }
}

impl RangePolicy {
    pub fn min_gap(mut self, gap: f64) -> Self {
        self.min_gap = gap.max(0.0);
        self
    }

    pub fn fixed_ordering(mut self, ordering: FixedOrdering) -> Self {
        self.fixed_ordering = ordering;
        self
    }
}

/// 四舍五入到整数，.5 向正无穷进位
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// 连续模式：先夹到 [min, max]，再按间距夹到另一个把手。
/// 两者冲突时边界优先，结果永远不会越出 [min, max]。
pub fn enforce_continuous(
    handle: Handle,
    candidate: f64,
    bounds: RangeBounds,
    current: Selection,
    min_gap: f64,
) -> Selection {
    let c = bounds.clamp(candidate);
    match handle {
        Handle::Min => {
            let low = c.min(current.high - min_gap).max(bounds.min);
            current.with(Handle::Min, low)
        }
        Handle::Max => {
            let high = c.max(current.low + min_gap).min(bounds.max);
            current.with(Handle::Max, high)
        }
    }
}

/// 离散模式：吸附到最近成员，没有数值间距
pub fn snap_fixed(
    handle: Handle,
    raw: f64,
    values: &FixedValues,
    current: Selection,
    ordering: FixedOrdering,
) -> Selection {
    let snapped = match (ordering, handle) {
        (FixedOrdering::Unguarded, _) => values.nearest(raw),
        (FixedOrdering::Guarded, Handle::Min) => {
            values.nearest_within(raw, f64::NEG_INFINITY, current.high)
        }
        (FixedOrdering::Guarded, Handle::Max) => {
            values.nearest_within(raw, current.low, f64::INFINITY)
        }
    };
    current.with(handle, snapped)
}

/// 拖拽提交：离散模式吸附，连续模式取整后做边界/间距约束
pub fn drag_commit(
    handle: Handle,
    raw: f64,
    bounds: RangeBounds,
    fixed: Option<&FixedValues>,
    current: Selection,
    policy: &RangePolicy,
) -> Selection {
    match fixed {
        Some(values) => snap_fixed(handle, raw, values, current, policy.fixed_ordering),
        None => enforce_continuous(handle, round_half_up(raw), bounds, current, policy.min_gap),
    }
}
