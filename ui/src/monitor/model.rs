use serde::Deserialize;

use crate::core::format;
use crate::model::DataQuality;

/// One collected reading.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonitorRecord {
    pub data_id: String,
    pub meter_id: String,
    pub factory_id: String,
    #[serde(default)]
    pub collect_time: Option<String>,
    #[serde(default)]
    pub energy_value: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub data_quality: Option<DataQuality>,
    #[serde(default)]
    pub is_verified: bool,
}

impl MonitorRecord {
    /// Collect time re-rendered in the console's fixed-width format.
    pub fn collect_time_label(&self) -> String {
        match self.collect_time.as_deref() {
            Some(raw) => format::parse_date_time(raw)
                .map(format::format_date_time)
                .unwrap_or_else(|| raw.to_string()),
            None => "—".to_string(),
        }
    }

    pub fn reading_label(&self) -> String {
        format!("{} {}", format::format_amount(self.energy_value), self.unit)
            .trim_end()
            .to_string()
    }

    /// Verification is one-way; only unverified rows offer the action.
    pub fn can_verify(&self) -> bool {
        !self.is_verified
    }
}
