//! Peak/valley cost report: aggregate read, summary cards and bar chart.

pub mod chart;
mod dashboard;
mod model;
mod view;

pub use dashboard::{
    fetch_report, load_report, DashboardState, PeakValleyDashboard, RenderedReport, ReportOutcome,
    ReportRow, ReportSource, ReportSummary,
};
pub use model::{bucket_labels, ReportAggregate, ReportFilter, ALL_FACTORIES};
pub use view::PeakValleyPanel;
