use std::fmt;

use range_ui::widgets::range::{
    format_euro, format_fixed, FixedValues, RangeBounds, RangePolicy, RangeProps, Selection,
};

use crate::services::RangeService;

const LOAD_FAILED: &str = "Failed to load data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exercise {
    Normal,
    Fixed,
}

impl Exercise {
    pub const ALL: [Exercise; 2] = [Exercise::Normal, Exercise::Fixed];

    pub fn title(&self) -> &'static str {
        match self {
            Exercise::Normal => "Exercise 1: Normal Range",
            Exercise::Fixed => "Exercise 2: Fixed Values Range",
        }
    }

    pub fn instructions(&self) -> &'static str {
        match self {
            Exercise::Normal => "Drag the handles or click on the labels to edit values",
            Exercise::Fixed => "Drag the handles to select from fixed price values",
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// 构建控件所需的全部数据
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSetup {
    pub props: RangeProps,
    pub initial: Selection,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Ready(RangeSetup),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub exercise: Exercise,
    pub state: PageState,
}

impl Page {
    /// 向上游取数据。任何失败都落到 `PageState::Error`，不向外传播
    pub fn load(exercise: Exercise, service: &dyn RangeService, policy: RangePolicy) -> Self {
        let state = match exercise {
            Exercise::Normal => load_normal(service, policy),
            Exercise::Fixed => load_fixed(service, policy),
        };
        match &state {
            PageState::Ready(setup) => log::info!("{} ready: {:?}", exercise, setup.initial),
            PageState::Error(msg) => log::error!("{} failed to load: {}", exercise, msg),
        }
        Self { exercise, state }
    }

    pub fn title(&self) -> &'static str {
        self.exercise.title()
    }

    pub fn setup(&self) -> Option<&RangeSetup> {
        match &self.state {
            PageState::Ready(setup) => Some(setup),
            PageState::Error(_) => None,
        }
    }

    pub fn error_line(&self) -> Option<String> {
        match &self.state {
            PageState::Ready(_) => None,
            PageState::Error(msg) => Some(format!("Error: {}", msg)),
        }
    }

    /// 控件下方的说明文字
    pub fn summary(&self, selection: Selection) -> Vec<String> {
        let Some(setup) = self.setup() else {
            return Vec::new();
        };
        match &setup.props.fixed {
            None => {
                let b = setup.props.bounds;
                vec![
                    format!("The range is from {} to {}", format_euro(b.min), format_euro(b.max)),
                    format!(
                        "Current Range: {} - {}",
                        format_euro(selection.low),
                        format_euro(selection.high)
                    ),
                ]
            }
            Some(values) => {
                let listed: Vec<String> = values.as_slice().iter().map(|v| format_fixed(*v)).collect();
                vec![
                    format!("Available Values: {}", listed.join(", ")),
                    format!(
                        "Selected Range: {} - {}",
                        format_fixed(selection.low),
                        format_fixed(selection.high)
                    ),
                ]
            }
        }
    }
}

fn load_normal(service: &dyn RangeService, policy: RangePolicy) -> PageState {
    let data = match service.fetch_normal_range() {
        Ok(data) => data,
        Err(e) => return PageState::Error(error_text(&e)),
    };
    match RangeBounds::new(data.min, data.max) {
        Ok(bounds) => {
            let initial = Selection::new(bounds.min, bounds.max);
            PageState::Ready(RangeSetup {
                props: RangeProps::continuous(bounds, initial).policy(policy),
                initial,
            })
        }
        Err(e) => PageState::Error(e.to_string()),
    }
}

fn load_fixed(service: &dyn RangeService, policy: RangePolicy) -> PageState {
    let data = match service.fetch_fixed_range() {
        Ok(data) => data,
        Err(e) => return PageState::Error(error_text(&e)),
    };
    if data.range_values.is_empty() {
        return PageState::Error(LOAD_FAILED.to_string());
    }
    match FixedValues::new(data.range_values) {
        Ok(values) => {
            let initial = Selection::new(values.first(), values.last());
            PageState::Ready(RangeSetup {
                props: RangeProps::fixed(values, initial).policy(policy),
                initial,
            })
        }
        Err(e) => PageState::Error(e.to_string()),
    }
}

fn error_text(e: &anyhow::Error) -> String {
    let text = e.to_string();
    if text.is_empty() { LOAD_FAILED.to_string() } else { text }
}
