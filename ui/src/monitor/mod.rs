//! Monitoring data: filtering, manual verification and simulated collection.

mod controller;
mod model;
mod view;

pub use controller::{
    filter_records, load_factories, load_records, simulate_collection, verify_record,
    CollectOutcome, MonitorFilter,
};
pub use model::MonitorRecord;
pub use view::MonitorDataPanel;
