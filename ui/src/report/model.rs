use serde::Deserialize;

use crate::t;

/// Factory filter value the backend reads as "every factory".
pub const ALL_FACTORIES: &str = "all";

/// Peak/valley totals for one factory, date and energy type.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ReportAggregate {
    pub sharp: f64,
    pub peak: f64,
    pub flat: f64,
    pub valley: f64,
    pub total_usage: f64,
    pub total_cost: f64,
    pub peak_ratio: f64,
}

impl ReportAggregate {
    /// Demonstration figures shown when the report endpoint cannot be reached.
    pub fn fallback() -> Self {
        Self {
            sharp: 120.0,
            peak: 300.0,
            flat: 200.0,
            valley: 150.0,
            total_usage: 770.0,
            total_cost: 850.5,
            peak_ratio: 54.5,
        }
    }

    /// Sharp, peak, flat, valley; the order the chart and table use.
    pub fn buckets(&self) -> [f64; 4] {
        [self.sharp, self.peak, self.flat, self.valley]
    }
}

pub fn bucket_labels() -> [String; 4] {
    [
        t!("bucket-sharp"),
        t!("bucket-peak"),
        t!("bucket-flat"),
        t!("bucket-valley"),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportFilter {
    pub factory_id: String,
    /// Text of the selected factory option, echoed into the detail row.
    pub factory_label: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub energy_type: String,
}

impl ReportFilter {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            factory_id: ALL_FACTORIES.to_string(),
            factory_label: t!("report-all-factories"),
            date: date.into(),
            energy_type: String::new(),
        }
    }

    pub fn params(&self) -> [(&'static str, &str); 3] {
        [
            ("factory_id", self.factory_id.as_str()),
            ("date", self.date.as_str()),
            ("energy_type", self.energy_type.as_str()),
        ]
    }
}
