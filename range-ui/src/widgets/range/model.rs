use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RangeError {
    #[error("range bounds must be finite (min={min}, max={max})")]
    NonFinite { min: f64, max: f64 },

    #[error("range minimum {min} must be lower than maximum {max}")]
    Inverted { min: f64, max: f64 },

    #[error("fixed value set is empty")]
    EmptyFixedValues,

    #[error("fixed values must be finite and strictly ascending (offending index {index})")]
    UnsortedFixedValues { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    Min,
    Max,
}

impl Handle {
    /// 无障碍名称
    pub fn accessible_name(&self) -> &'static str {
        match self {
            Handle::Min => "minimum",
            Handle::Max => "maximum",
        }
    }

    pub fn parse(s: &str) -> Option<Handle> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" | "minimum" | "low" => Some(Handle::Min),
            "max" | "maximum" | "high" => Some(Handle::Max),
            _ => None,
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handle::Min => f.write_str("min"),
            Handle::Max => f.write_str("max"),
        }
    }
}

/// 外部持有的选区 `[low, high]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Selection {
    pub low: f64,
    pub high: f64,
}

impl Selection {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn get(&self, handle: Handle) -> f64 {
        match handle {
            Handle::Min => self.low,
            Handle::Max => self.high,
        }
    }

    /// 只替换一个把手的值，另一个保持不动
    pub fn with(self, handle: Handle, value: f64) -> Self {
        match handle {
            Handle::Min => Self { low: value, ..self },
            Handle::Max => Self { high: value, ..self },
        }
    }
}

impl From<[f64; 2]> for Selection {
    fn from([low, high]: [f64; 2]) -> Self {
        Self { low, high }
    }
}

impl From<Selection> for [f64; 2] {
    fn from(s: Selection) -> Self {
        [s.low, s.high]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBounds {
    pub min: f64,
    pub max: f64,
}

impl RangeBounds {
    pub fn new(min: f64, max: f64) -> Result<Self, RangeError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(RangeError::NonFinite { min, max });
        }
        if min >= max {
            return Err(RangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// 严格升序、非空的离散取值集合
#[derive(Debug, Clone, PartialEq)]
pub struct FixedValues(Vec<f64>);

impl FixedValues {
    pub fn new(values: Vec<f64>) -> Result<Self, RangeError> {
        if values.is_empty() {
            return Err(RangeError::EmptyFixedValues);
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(RangeError::UnsortedFixedValues { index });
        }
        if let Some(index) = values.windows(2).position(|w| w[0] >= w[1]) {
            return Err(RangeError::UnsortedFixedValues { index: index + 1 });
        }
        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> f64 {
        self.0[0]
    }

    pub fn last(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    pub fn contains(&self, value: f64) -> bool {
        self.0.iter().any(|v| *v == value)
    }

    /// 单元素集合时 min == max，不走 `RangeBounds::new` 的校验
    pub fn bounds(&self) -> RangeBounds {
        RangeBounds { min: self.first(), max: self.last() }
    }

    /// 距离 `raw` 最近的成员。线性扫描，距离相等时取较小的那个
    pub fn nearest(&self, raw: f64) -> f64 {
        self.nearest_within(raw, f64::NEG_INFINITY, f64::INFINITY)
    }

    /// 只在 `[lo, hi]` 内的成员里找最近值；区间内没有成员时退回全集
    pub fn nearest_within(&self, raw: f64, lo: f64, hi: f64) -> f64 {
        let mut best: Option<(f64, f64)> = None;
        for &v in self.0.iter().filter(|v| **v >= lo && **v <= hi) {
            let diff = (raw - v).abs();
            match best {
                Some((_, best_diff)) if diff >= best_diff => {}
                _ => best = Some((v, diff)),
            }
        }
        match best {
            Some((v, _)) => v,
            None if lo.is_infinite() && hi.is_infinite() => self.first(),
            None => self.nearest(raw),
        }
    }
}
