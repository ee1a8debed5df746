use serde::Deserialize;

use crate::model::{CommProtocol, EnergyType, RunStatus};

/// A metering device as the backend serialises it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeterRecord {
    pub meter_id: String,
    #[serde(default)]
    pub factory_id: Option<String>,
    pub energy_type: EnergyType,
    pub install_location: String,
    #[serde(default)]
    pub pipe_spec: Option<String>,
    pub comm_protocol: CommProtocol,
    pub run_status: RunStatus,
    pub calib_cycle: u32,
    #[serde(default)]
    pub manufacturer: Option<String>,
}
