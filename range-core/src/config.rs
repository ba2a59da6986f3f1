use serde::{Deserialize, Serialize};

use range_ui::widgets::range::{FixedOrdering, RangePolicy, MIN_GAP};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub log_path:  String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub min_gap: f64,
    pub fixed_ordering: String, // "unguarded" | "guarded"
    pub track_width: u16,       // 字符界面轨道宽度 (列)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Mock,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub source: DataSource,
    pub json_dir: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            log_path:  "logs/".into(),
            log_level: "info".into(),
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            min_gap: MIN_GAP,
            fixed_ordering: "unguarded".into(),
            track_width: 60,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: DataSource::Mock,
            json_dir: "data/".into(),
        }
    }
}

impl WidgetConfig {
    pub fn policy(&self) -> RangePolicy {
        let ordering = match self.fixed_ordering.trim().to_ascii_lowercase().as_str() {
            "guarded" => FixedOrdering::Guarded,
            "unguarded" => FixedOrdering::Unguarded,
            other => {
                log::warn!("Unknown fixed_ordering '{}', falling back to 'unguarded'.", other);
                FixedOrdering::Unguarded
            }
        };
        RangePolicy::default()
            .min_gap(self.min_gap)
            .fixed_ordering(ordering)
    }
}
