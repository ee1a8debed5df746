use crate::core::api::{self, ApiResponse};
use crate::core::format;
use crate::core::transport::ApiRequest;
use crate::core::ConsoleEnv;
use crate::model::unit_for;
use crate::t;

use super::chart::{BarChart, ChartSlot};
use super::model::{bucket_labels, ReportAggregate, ReportFilter};

/// Where the figures on screen came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    Live(ReportAggregate),
    /// The endpoint could not be reached; demonstration data is shown.
    Fallback(ReportAggregate),
    /// `success: false`; the dashboard keeps what it had.
    Rejected(String),
}

/// The three summary cards.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub total_usage: String,
    pub total_cost: String,
    pub peak_ratio: String,
    pub unit: &'static str,
}

/// The single detail row under the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub date: String,
    pub factory: String,
    pub buckets: [String; 4],
    pub total_usage: String,
    pub total_cost: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReport {
    pub summary: ReportSummary,
    pub row: ReportRow,
    pub source: ReportSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSource {
    Live,
    Fallback,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DashboardState {
    #[default]
    Idle,
    Rendered(RenderedReport),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeakValleyDashboard {
    state: DashboardState,
    chart: ChartSlot,
}

impl PeakValleyDashboard {
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn rendered(&self) -> Option<&RenderedReport> {
        match &self.state {
            DashboardState::Rendered(report) => Some(report),
            DashboardState::Idle => None,
        }
    }

    pub fn chart(&self) -> &ChartSlot {
        &self.chart
    }

    /// Folds a load result into the dashboard. A rejection leaves it as is.
    pub fn apply(&mut self, filter: &ReportFilter, outcome: &ReportOutcome) {
        match outcome {
            ReportOutcome::Live(data) => self.render(filter, data, ReportSource::Live),
            ReportOutcome::Fallback(data) => self.render(filter, data, ReportSource::Fallback),
            ReportOutcome::Rejected(_) => {}
        }
    }

    fn render(&mut self, filter: &ReportFilter, data: &ReportAggregate, source: ReportSource) {
        let summary = ReportSummary {
            total_usage: format::format_amount(data.total_usage),
            total_cost: format::format_amount(data.total_cost),
            peak_ratio: format::format_amount(data.peak_ratio),
            unit: unit_for(&filter.energy_type),
        };
        let row = ReportRow {
            date: filter.date.clone(),
            factory: filter.factory_label.clone(),
            buckets: data.buckets().map(format::format_amount),
            total_usage: format::format_amount(data.total_usage),
            total_cost: format::format_amount(data.total_cost),
        };

        self.chart
            .render(BarChart::new(bucket_labels().to_vec(), data.buckets().to_vec()));
        self.state = DashboardState::Rendered(RenderedReport {
            summary,
            row,
            source,
        });
    }
}

/// Reads the aggregate for `filter`. Transport failures degrade to
/// [`ReportAggregate::fallback`] instead of leaving the page empty.
pub async fn fetch_report(env: &ConsoleEnv, filter: &ReportFilter) -> ReportOutcome {
    let request = ApiRequest::get(api::REPORT_PEAK_VALLEY).params(filter.params());
    match env.request(&request).await {
        Ok(body) => {
            let response: ApiResponse<ReportAggregate> = ApiResponse::from_value(body);
            if response.success {
                ReportOutcome::Live(response.data.unwrap_or_default())
            } else {
                env.alert(&t!("report-no-data")).await;
                ReportOutcome::Rejected(response.message_or_default())
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "report unavailable, showing demonstration data");
            ReportOutcome::Fallback(ReportAggregate::fallback())
        }
    }
}

/// Fetches and applies in one step.
pub async fn load_report(
    env: &ConsoleEnv,
    filter: &ReportFilter,
    dashboard: &mut PeakValleyDashboard,
) -> ReportOutcome {
    let outcome = fetch_report(env, filter).await;
    dashboard.apply(filter, &outcome);
    outcome
}
