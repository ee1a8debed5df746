//! Backend enums shared by the meter, monitoring and report pages.
//!
//! Wire values are exactly what the backend stores; labels are localized.

use serde::{Deserialize, Serialize};

use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyType {
    #[serde(rename = "电")]
    Electricity,
    #[serde(rename = "水")]
    Water,
    #[serde(rename = "蒸汽")]
    Steam,
    #[serde(rename = "天然气")]
    Gas,
}

impl EnergyType {
    pub const ALL: [EnergyType; 4] = [
        EnergyType::Electricity,
        EnergyType::Water,
        EnergyType::Steam,
        EnergyType::Gas,
    ];

    pub fn wire(self) -> &'static str {
        match self {
            EnergyType::Electricity => "电",
            EnergyType::Water => "水",
            EnergyType::Steam => "蒸汽",
            EnergyType::Gas => "天然气",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.wire() == raw)
    }

    /// Electricity is metered in kWh, everything else by volume.
    pub fn unit(self) -> &'static str {
        match self {
            EnergyType::Electricity => "kWh",
            EnergyType::Water | EnergyType::Steam | EnergyType::Gas => "m³",
        }
    }

    pub fn label(self) -> String {
        match self {
            EnergyType::Electricity => t!("energy-electricity"),
            EnergyType::Water => t!("energy-water"),
            EnergyType::Steam => t!("energy-steam"),
            EnergyType::Gas => t!("energy-gas"),
        }
    }
}

/// Unit label for a raw energy-type filter value.
pub fn unit_for(raw: &str) -> &'static str {
    EnergyType::from_wire(raw)
        .map(EnergyType::unit)
        .unwrap_or("m³")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunStatus {
    #[serde(rename = "正常")]
    Normal,
    #[serde(rename = "故障")]
    Fault,
}

impl RunStatus {
    pub const ALL: [RunStatus; 2] = [RunStatus::Normal, RunStatus::Fault];

    pub fn wire(self) -> &'static str {
        match self {
            RunStatus::Normal => "正常",
            RunStatus::Fault => "故障",
        }
    }

    pub fn label(self) -> String {
        match self {
            RunStatus::Normal => t!("status-normal"),
            RunStatus::Fault => t!("status-fault"),
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RunStatus::Normal => "badge badge--ok",
            RunStatus::Fault => "badge badge--danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommProtocol {
    #[serde(rename = "RS485")]
    Rs485,
    #[serde(rename = "Lora")]
    Lora,
}

impl CommProtocol {
    pub const ALL: [CommProtocol; 2] = [CommProtocol::Rs485, CommProtocol::Lora];

    pub fn wire(self) -> &'static str {
        match self {
            CommProtocol::Rs485 => "RS485",
            CommProtocol::Lora => "Lora",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataQuality {
    #[serde(rename = "优")]
    Excellent,
    #[serde(rename = "良")]
    Good,
    #[serde(rename = "中")]
    Fair,
    #[serde(rename = "差")]
    Poor,
}

impl DataQuality {
    pub const ALL: [DataQuality; 4] = [
        DataQuality::Excellent,
        DataQuality::Good,
        DataQuality::Fair,
        DataQuality::Poor,
    ];

    pub fn wire(self) -> &'static str {
        match self {
            DataQuality::Excellent => "优",
            DataQuality::Good => "良",
            DataQuality::Fair => "中",
            DataQuality::Poor => "差",
        }
    }

    pub fn label(self) -> String {
        match self {
            DataQuality::Excellent => t!("quality-excellent"),
            DataQuality::Good => t!("quality-good"),
            DataQuality::Fair => t!("quality-fair"),
            DataQuality::Poor => t!("quality-poor"),
        }
    }

    /// Fair and poor readings are the ones worth a manual check.
    pub fn needs_review(self) -> bool {
        matches!(self, DataQuality::Fair | DataQuality::Poor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factory {
    pub factory_id: String,
    #[serde(default)]
    pub factory_name: Option<String>,
}

impl Factory {
    /// Dropdown text: the name when known, the id otherwise.
    pub fn label(&self) -> &str {
        self.factory_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.factory_id)
    }
}
