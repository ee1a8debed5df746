use url::form_urlencoded;

use crate::core::action::{self, ActionOutcome, WriteNotices};
use crate::core::api;
use crate::core::modal::ModalRegistry;
use crate::core::transport::{encode_pairs, ApiRequest};
use crate::core::{ConsoleEnv, UiError};
use crate::t;

use super::form::MeterForm;
use super::model::MeterRecord;

pub const METER_MODAL: &str = "meterModal";

/// Filter bar of the meter listing. Empty values mean "any".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeterFilter {
    pub energy_type: String,
    pub run_status: String,
}

impl MeterFilter {
    /// Reads `energy_type`/`run_status` back out of the listing URL query.
    pub fn from_query(query: &str) -> Self {
        let mut filter = Self::default();
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "energy_type" => filter.energy_type = value.into_owned(),
                "run_status" => filter.run_status = value.into_owned(),
                _ => {}
            }
        }
        filter
    }

    fn pairs(&self) -> [(&'static str, &str); 2] {
        [
            ("energy_type", self.energy_type.as_str()),
            ("run_status", self.run_status.as_str()),
        ]
    }

    /// Both keys are always present, even when empty.
    pub fn search_url(&self) -> String {
        format!("{}?{}", api::METER_MANAGE_PAGE, encode_pairs(&self.pairs()))
    }
}

pub fn search(env: &ConsoleEnv, filter: &MeterFilter) {
    env.navigator.redirect(&filter.search_url());
}

pub fn reset_filter(env: &ConsoleEnv) {
    env.navigator.redirect(api::METER_MANAGE_PAGE);
}

pub fn open_create(form: &mut MeterForm, modals: &mut ModalRegistry) -> Result<(), UiError> {
    form.reset();
    modals.control(METER_MODAL, true)
}

pub fn open_edit(
    form: &mut MeterForm,
    modals: &mut ModalRegistry,
    record: &MeterRecord,
) -> Result<(), UiError> {
    form.prime_edit(record);
    modals.control(METER_MODAL, true)
}

pub fn close_form(modals: &mut ModalRegistry) -> Result<(), UiError> {
    modals.control(METER_MODAL, false)
}

/// Create or update depending on the form mode. An empty identifier stops
/// here with a notice and no request.
pub async fn submit_meter(env: &ConsoleEnv, form: &MeterForm) -> Option<ActionOutcome> {
    if !form.has_identifier() {
        env.alert(&t!("meter-id-required")).await;
        return None;
    }

    let request = ApiRequest::post(form.endpoint()).params(form.to_params());
    let outcome = action::post_and_reload(
        env,
        &request,
        WriteNotices {
            done: t!("meter-saved"),
            rejected: |message: &str| t!("meter-save-failed", message = message),
        },
    )
    .await;
    Some(outcome)
}

pub async fn delete_meter(env: &ConsoleEnv, meter_id: &str) -> ActionOutcome {
    let request = ApiRequest::post(api::METER_DELETE).param("meter_id", meter_id);
    action::confirm_and_post(
        env,
        &t!("meter-delete-confirm"),
        &request,
        WriteNotices {
            done: t!("meter-deleted"),
            rejected: |message: &str| t!("meter-delete-failed", message = message),
        },
    )
    .await
}

pub async fn load_meters(env: &ConsoleEnv, filter: &MeterFilter) -> Result<Vec<MeterRecord>, String> {
    let request = ApiRequest::get(api::METER_LIST).params(
        filter
            .pairs()
            .into_iter()
            .filter(|(_, value)| !value.is_empty()),
    );
    action::fetch_list(env, &request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::Harness;
    use crate::core::transport::{Method, FORM_CONTENT_TYPE};
    use crate::model::{CommProtocol, EnergyType, RunStatus};
    use futures::executor::block_on;
    use serde_json::json;

    fn record() -> MeterRecord {
        MeterRecord {
            meter_id: "M001".into(),
            factory_id: None,
            energy_type: EnergyType::Electricity,
            install_location: "Line 3".into(),
            pipe_spec: Some("DN50".into()),
            comm_protocol: CommProtocol::Rs485,
            run_status: RunStatus::Normal,
            calib_cycle: 12,
            manufacturer: None,
        }
    }

    #[test]
    fn search_redirects_with_both_keys() {
        let h = Harness::new();
        search(
            &h.env,
            &MeterFilter {
                energy_type: "水".into(),
                run_status: String::new(),
            },
        );
        assert_eq!(
            h.navigator.redirects(),
            vec!["/energy/meter_manage?energy_type=%E6%B0%B4&run_status=".to_string()]
        );
        assert!(h.http.requests().is_empty());
    }

    #[test]
    fn reset_goes_back_to_unfiltered_listing() {
        let h = Harness::new();
        reset_filter(&h.env);
        assert_eq!(h.navigator.redirects(), vec!["/energy/meter_manage".to_string()]);
    }

    #[test]
    fn filter_round_trips_through_the_listing_url() {
        let filter = MeterFilter {
            energy_type: "天然气".into(),
            run_status: "故障".into(),
        };
        let url = filter.search_url();
        let query = url.split_once('?').map(|(_, q)| q).unwrap();
        assert_eq!(MeterFilter::from_query(query), filter);
    }

    #[test]
    fn empty_identifier_never_hits_the_network() {
        let h = Harness::new();
        let form = MeterForm::default();

        let outcome = block_on(submit_meter(&h.env, &form));

        assert!(outcome.is_none());
        assert!(h.http.requests().is_empty());
        assert_eq!(h.dialogs.alerts().len(), 1);
    }

    #[test]
    fn create_posts_form_body_and_reloads() {
        let h = Harness::new();
        h.http.respond_json(200, json!({ "success": true, "message": "ok" }));
        let form = MeterForm {
            meter_id: "M009".into(),
            energy_type: "电".into(),
            calib_cycle: "12".into(),
            ..MeterForm::default()
        };

        let outcome = block_on(submit_meter(&h.env, &form));

        assert_eq!(outcome, Some(ActionOutcome::Done));
        let requests = h.http.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].url, "http://console.test/energy/api/meter/add");
        assert_eq!(requests[0].content_type, Some(FORM_CONTENT_TYPE));
        let body = requests[0].body.as_deref().unwrap();
        assert!(body.starts_with("meter_id=M009&energy_type=%E7%94%B5"));
        assert!(body.contains("calib_cycle=12"));
        assert_eq!(h.navigator.reloads(), 1);
    }

    #[test]
    fn edit_mode_posts_to_update() {
        let h = Harness::new();
        h.http.respond_json(200, json!({ "success": true }));
        let mut form = MeterForm::default();
        let mut modals = ModalRegistry::with_targets([METER_MODAL]);
        open_edit(&mut form, &mut modals, &record()).unwrap();

        block_on(submit_meter(&h.env, &form));

        assert!(modals.is_visible(METER_MODAL));
        assert!(form.id_locked);
        assert_eq!(
            h.http.requests()[0].url,
            "http://console.test/energy/api/meter/update"
        );
    }

    #[test]
    fn create_mode_reenables_identifier_and_clears_fields() {
        let mut form = MeterForm::default();
        let mut modals = ModalRegistry::with_targets([METER_MODAL]);
        open_edit(&mut form, &mut modals, &record()).unwrap();
        close_form(&mut modals).unwrap();
        open_create(&mut form, &mut modals).unwrap();

        assert!(!form.id_locked);
        assert!(!form.is_edit());
        assert!(form.meter_id.is_empty());
        assert!(form.pipe_spec.is_empty());
        assert!(modals.is_visible(METER_MODAL));
    }

    #[test]
    fn opening_without_a_registered_modal_is_a_lookup_error() {
        let mut form = MeterForm::default();
        let mut modals = ModalRegistry::default();
        assert_eq!(
            open_create(&mut form, &mut modals),
            Err(UiError::MissingTarget(METER_MODAL.into()))
        );
    }

    #[test]
    fn rejected_save_keeps_the_page() {
        let h = Harness::new();
        h.http
            .respond_json(200, json!({ "success": false, "message": "duplicate id" }));
        let form = MeterForm {
            meter_id: "M001".into(),
            ..MeterForm::default()
        };

        let outcome = block_on(submit_meter(&h.env, &form));

        assert_eq!(outcome, Some(ActionOutcome::Rejected("duplicate id".into())));
        assert!(h.dialogs.alerts()[0].contains("duplicate id"));
        assert_eq!(h.navigator.reloads(), 0);
    }

    #[test]
    fn delete_requires_confirmation() {
        let h = Harness::declining();
        let outcome = block_on(delete_meter(&h.env, "M001"));
        assert_eq!(outcome, ActionOutcome::Cancelled);
        assert!(h.http.requests().is_empty());
        assert_eq!(h.dialogs.confirms().len(), 1);
    }

    #[test]
    fn confirmed_delete_is_keyed_by_meter_id() {
        let h = Harness::new();
        h.http.respond_json(200, json!({ "success": true }));

        let outcome = block_on(delete_meter(&h.env, "M001"));

        assert_eq!(outcome, ActionOutcome::Done);
        let request = &h.http.requests()[0];
        assert_eq!(request.url, "http://console.test/energy/api/meter/delete");
        assert_eq!(request.body.as_deref(), Some("meter_id=M001"));
        assert_eq!(h.navigator.reloads(), 1);
    }

    #[test]
    fn listing_read_only_sends_active_filters() {
        let h = Harness::new();
        h.http.respond_json(200, json!({ "success": true, "data": [] }));
        let filter = MeterFilter {
            energy_type: String::new(),
            run_status: "正常".into(),
        };

        let rows = block_on(load_meters(&h.env, &filter)).unwrap();

        assert!(rows.is_empty());
        let request = &h.http.requests()[0];
        assert!(request.body.is_none());
        assert_eq!(
            request.url,
            "http://console.test/energy/api/meter/list?run_status=%E6%AD%A3%E5%B8%B8"
        );
    }
}
