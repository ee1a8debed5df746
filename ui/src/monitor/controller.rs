use url::form_urlencoded;

use crate::core::action::{self, ActionOutcome, WriteNotices};
use crate::core::api;
use crate::core::transport::{encode_pairs, ApiRequest, TransportError};
use crate::core::ConsoleEnv;
use crate::model::Factory;
use crate::t;

use super::model::MonitorRecord;

/// Filter bar of the monitoring listing. `start_time` keeps the
/// `datetime-local` text (`YYYY-MM-DDTHH:MM`) untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonitorFilter {
    pub meter_id: String,
    pub factory_id: String,
    pub data_quality: String,
    pub start_time: String,
}

impl MonitorFilter {
    pub fn from_query(query: &str) -> Self {
        let mut filter = Self::default();
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            let slot = match key.as_ref() {
                "meter_id" => &mut filter.meter_id,
                "factory_id" => &mut filter.factory_id,
                "data_quality" => &mut filter.data_quality,
                "start_time" => &mut filter.start_time,
                _ => continue,
            };
            *slot = value.into_owned();
        }
        filter
    }

    fn pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("meter_id", self.meter_id.as_str()),
            ("factory_id", self.factory_id.as_str()),
            ("data_quality", self.data_quality.as_str()),
            ("start_time", self.start_time.as_str()),
        ]
    }

    pub fn search_url(&self) -> String {
        format!("{}?{}", api::MONITOR_DATA_PAGE, encode_pairs(&self.pairs()))
    }
}

pub fn filter_records(env: &ConsoleEnv, filter: &MonitorFilter) {
    env.navigator.redirect(&filter.search_url());
}

pub async fn verify_record(env: &ConsoleEnv, data_id: &str) -> ActionOutcome {
    let request = ApiRequest::post(api::MONITOR_VERIFY).param("data_id", data_id);
    action::confirm_and_post(
        env,
        &t!("monitor-verify-confirm", id = data_id),
        &request,
        WriteNotices {
            done: t!("monitor-verified"),
            rejected: |message: &str| t!("monitor-verify-failed", message = message),
        },
    )
    .await
}

#[derive(Debug, Clone, PartialEq)]
pub enum CollectOutcome {
    /// The command reached the backend; the page reloads after the delay.
    Sent,
    Failed(TransportError),
}

/// Asks the backend to simulate one reading. Any 2xx answer counts as sent,
/// whatever the envelope says.
pub async fn simulate_collection(env: &ConsoleEnv) -> CollectOutcome {
    match env.request(&ApiRequest::post(api::MONITOR_COLLECT)).await {
        Ok(_) => {
            env.alert(&t!("monitor-collect-sent")).await;
            env.navigator
                .reload_after(env.config.collect_reload_delay_ms)
                .await;
            CollectOutcome::Sent
        }
        Err(err) => CollectOutcome::Failed(err),
    }
}

pub async fn load_records(
    env: &ConsoleEnv,
    filter: &MonitorFilter,
) -> Result<Vec<MonitorRecord>, String> {
    let request = ApiRequest::get(api::MONITOR_LIST).params(
        filter
            .pairs()
            .into_iter()
            .filter(|(_, value)| !value.is_empty()),
    );
    action::fetch_list(env, &request).await
}

pub async fn load_factories(env: &ConsoleEnv) -> Result<Vec<Factory>, String> {
    action::fetch_list(env, &ApiRequest::get(api::FACTORY_LIST)).await
}
