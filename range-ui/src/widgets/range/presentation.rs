//! 状态 → 视觉描述。纯函数，不读指针也不改状态。

use super::format::format_label;
use super::model::{FixedValues, Handle, RangeBounds, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Slider,
    Button,
    /// 纯装饰，辅助技术忽略
    Presentation,
}

/// 交给渲染后端的无障碍元数据
#[derive(Debug, Clone, PartialEq)]
pub struct AccessNode {
    pub role: Role,
    pub name: String,
    pub value_now: Option<f64>,
    pub value_min: Option<f64>,
    pub value_max: Option<f64>,
    /// 可以通过 Tab 获得焦点 (tabindex = 0)
    pub focusable: bool,
    pub hidden: bool,
}

impl AccessNode {
    pub fn slider(handle: Handle, value: f64, bounds: RangeBounds) -> Self {
        Self {
            role: Role::Slider,
            name: handle.accessible_name().to_string(),
            value_now: Some(value),
            value_min: Some(bounds.min),
            value_max: Some(bounds.max),
            focusable: true,
            hidden: false,
        }
    }

    pub fn button(name: String) -> Self {
        Self {
            role: Role::Button,
            name,
            value_now: None,
            value_min: None,
            value_max: None,
            focusable: true,
            hidden: false,
        }
    }

    pub fn decoration() -> Self {
        Self {
            role: Role::Presentation,
            name: String::new(),
            value_now: None,
            value_min: None,
            value_max: None,
            focusable: false,
            hidden: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HandleLabel {
    /// 连续模式：可点击，激活后弹出输入框
    Button { text: String, access: AccessNode },
    /// 离散模式：只读文本
    Static { text: String },
}

impl HandleLabel {
    pub fn text(&self) -> &str {
        match self {
            HandleLabel::Button { text, .. } | HandleLabel::Static { text } => text,
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, HandleLabel::Button { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HandleView {
    pub handle: Handle,
    pub value: f64,
    /// 0 ~ 100
    pub percent: f64,
    pub dragging: bool,
    pub hovered: bool,
    pub label: HandleLabel,
    pub access: AccessNode,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeView {
    pub min: HandleView,
    pub max: HandleView,
    /// 填充段 (起点%, 终点%)
    pub fill: (f64, f64),
    /// 离散模式下每个成员一个刻度，连续模式为空
    pub ticks: Vec<Tick>,
}

impl RangeView {
    pub fn handle(&self, handle: Handle) -> &HandleView {
        match handle {
            Handle::Min => &self.min,
            Handle::Max => &self.max,
        }
    }
}

/// 值 → 百分比偏移，夹在 [0, 100]
pub fn percentage(bounds: RangeBounds, value: f64) -> f64 {
    let span = bounds.span();
    if span <= 0.0 {
        return 0.0;
    }
    ((value - bounds.min) / span * 100.0).clamp(0.0, 100.0)
}

pub fn describe(
    bounds: RangeBounds,
    fixed: Option<&FixedValues>,
    range: Selection,
    dragging: Option<Handle>,
    hovered: Option<Handle>,
) -> RangeView {
    let handle_view = |handle: Handle| {
        let value = range.get(handle);
        let text = format_label(value, fixed.is_some());
        let label = match fixed {
            Some(_) => HandleLabel::Static { text },
            None => HandleLabel::Button {
                text,
                access: AccessNode::button(format!("Set {} value", handle.accessible_name())),
            },
        };

        HandleView {
            handle,
            value,
            percent: percentage(bounds, value),
            dragging: dragging == Some(handle),
            hovered: hovered == Some(handle),
            label,
            access: AccessNode::slider(handle, value, bounds),
        }
    };

    let min = handle_view(Handle::Min);
    let max = handle_view(Handle::Max);
    let fill = (min.percent, max.percent);

    let ticks = fixed
        .map(|values| {
            values
                .as_slice()
                .iter()
                .map(|&value| Tick { value, percent: percentage(bounds, value) })
                .collect()
        })
        .unwrap_or_default();

    RangeView { min, max, fill, ticks }
}
