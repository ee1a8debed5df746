//! Backend endpoints and the JSON envelope every API call answers with.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

pub const METER_MANAGE_PAGE: &str = "/energy/meter_manage";
pub const MONITOR_DATA_PAGE: &str = "/energy/monitor_data";
pub const PEAK_VALLEY_PAGE: &str = "/energy/peak_valley";

pub const METER_ADD: &str = "/energy/api/meter/add";
pub const METER_UPDATE: &str = "/energy/api/meter/update";
pub const METER_DELETE: &str = "/energy/api/meter/delete";
pub const METER_LIST: &str = "/energy/api/meter/list";

pub const MONITOR_VERIFY: &str = "/energy/api/monitor/verify";
pub const MONITOR_COLLECT: &str = "/energy/api/monitor/collect";
pub const MONITOR_LIST: &str = "/energy/api/monitor/list";

pub const FACTORY_LIST: &str = "/energy/api/factory/list";

pub const REPORT_PEAK_VALLEY: &str = "/energy/api/report/peak_valley";

/// `{success, message?, data?}` as produced by the backend helpers.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiResponse<T = Value> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decodes a parsed body. A body that is not an envelope at all is
    /// reported as a failed response carrying the decoder message.
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value::<ApiResponse<T>>(value) {
            Ok(response) => response,
            Err(err) => Self {
                success: false,
                message: Some(err.to_string()),
                data: None,
            },
        }
    }

    pub fn message_or_default(&self) -> String {
        self.message.clone().unwrap_or_default()
    }
}
