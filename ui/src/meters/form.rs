//! State behind the meter modal form.

use crate::t;

use super::model::MeterRecord;
use crate::core::api;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

/// Raw field values as typed/selected in the modal, plus the edit flags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeterForm {
    pub meter_id: String,
    pub energy_type: String,
    pub install_location: String,
    pub pipe_spec: String,
    pub comm_protocol: String,
    pub run_status: String,
    pub calib_cycle: String,
    pub manufacturer: String,
    pub mode: FormMode,
    /// The identifier input is disabled while editing.
    pub id_locked: bool,
}

impl MeterForm {
    /// Empties every field and returns to create mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Loads `record` for editing and locks its identifier.
    pub fn prime_edit(&mut self, record: &MeterRecord) {
        *self = Self {
            meter_id: record.meter_id.clone(),
            energy_type: record.energy_type.wire().to_string(),
            install_location: record.install_location.clone(),
            pipe_spec: record.pipe_spec.clone().unwrap_or_default(),
            comm_protocol: record.comm_protocol.wire().to_string(),
            run_status: record.run_status.wire().to_string(),
            calib_cycle: record.calib_cycle.to_string(),
            manufacturer: record.manufacturer.clone().unwrap_or_default(),
            mode: FormMode::Edit,
            id_locked: true,
        };
    }

    pub fn is_edit(&self) -> bool {
        self.mode == FormMode::Edit
    }

    /// Only the identifier is enforced client-side.
    pub fn has_identifier(&self) -> bool {
        !self.meter_id.trim().is_empty()
    }

    pub fn endpoint(&self) -> &'static str {
        match self.mode {
            FormMode::Create => api::METER_ADD,
            FormMode::Edit => api::METER_UPDATE,
        }
    }

    pub fn title(&self) -> String {
        match self.mode {
            FormMode::Create => t!("meter-modal-create-title"),
            FormMode::Edit => t!("meter-modal-edit-title"),
        }
    }

    /// Write payload in the backend's field order.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("meter_id", self.meter_id.clone()),
            ("energy_type", self.energy_type.clone()),
            ("install_location", self.install_location.clone()),
            ("pipe_spec", self.pipe_spec.clone()),
            ("comm_protocol", self.comm_protocol.clone()),
            ("run_status", self.run_status.clone()),
            ("calib_cycle", self.calib_cycle.clone()),
            ("manufacturer", self.manufacturer.clone()),
        ]
    }
}
