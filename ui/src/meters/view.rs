use dioxus::prelude::*;

use crate::core::modal::ModalRegistry;
use crate::core::ConsoleEnv;
use crate::i18n;
use crate::model::{CommProtocol, EnergyType, RunStatus};
use crate::t;

use super::controller::{
    close_form, delete_meter, load_meters, open_create, open_edit, reset_filter, search,
    submit_meter, MeterFilter, METER_MODAL,
};
use super::form::MeterForm;
use super::model::MeterRecord;

#[component]
pub fn MeterManagePanel(query: String) -> Element {
    // Re-render labels on language switch.
    let _lang = i18n::use_active_language();
    let env = use_context::<ConsoleEnv>();
    let initial = MeterFilter::from_query(&query);

    let mut filter = use_signal(|| initial.clone());
    let mut form = use_signal(MeterForm::default);
    let mut modals = use_signal(|| ModalRegistry::with_targets([METER_MODAL]));

    let meters = use_resource({
        let env = env.clone();
        move || {
            let env = env.clone();
            let filter = initial.clone();
            async move { load_meters(&env, &filter).await }
        }
    });

    let on_search = {
        let env = env.clone();
        move |_| search(&env, &filter())
    };
    let on_reset = {
        let env = env.clone();
        move |_| reset_filter(&env)
    };
    let on_add = move |_| {
        if let Err(err) = open_create(&mut form.write(), &mut modals.write()) {
            tracing::error!(%err, "meter form unavailable");
        }
    };
    let on_cancel = move |_| {
        if let Err(err) = close_form(&mut modals.write()) {
            tracing::error!(%err, "meter form unavailable");
        }
    };
    let on_save = {
        let env = env.clone();
        move |_| {
            let env = env.clone();
            let snapshot = form();
            spawn(async move {
                submit_meter(&env, &snapshot).await;
            });
        }
    };

    let current_filter = filter();
    let current = form();
    let modal_class = modals.read().class_attr(METER_MODAL);
    let listing = meters.read().clone();

    rsx! {
        div { class: "filter-bar",
            label { r#for: "filter_energy_type", {t!("field-energy-type")} }
            select {
                id: "filter_energy_type",
                value: "{current_filter.energy_type}",
                oninput: move |evt: FormEvent| filter.write().energy_type = evt.value(),
                option { value: "", {t!("filter-any")} }
                for kind in EnergyType::ALL {
                    option { key: "{kind.wire()}", value: "{kind.wire()}", "{kind.label()}" }
                }
            }
            label { r#for: "filter_run_status", {t!("field-run-status")} }
            select {
                id: "filter_run_status",
                value: "{current_filter.run_status}",
                oninput: move |evt: FormEvent| filter.write().run_status = evt.value(),
                option { value: "", {t!("filter-any")} }
                for status in RunStatus::ALL {
                    option { key: "{status.wire()}", value: "{status.wire()}", "{status.label()}" }
                }
            }
            button { r#type: "button", class: "button button--primary", onclick: on_search, {t!("action-search")} }
            button { r#type: "button", class: "button button--ghost", onclick: on_reset, {t!("action-reset")} }
            button { r#type: "button", class: "button button--accent", onclick: on_add, {t!("meter-add")} }
        }

        table { class: "data-table",
            thead {
                tr {
                    th { {t!("field-meter-id")} }
                    th { {t!("field-energy-type")} }
                    th { {t!("field-install-location")} }
                    th { {t!("field-pipe-spec")} }
                    th { {t!("field-comm-protocol")} }
                    th { {t!("field-run-status")} }
                    th { {t!("field-calib-cycle")} }
                    th { {t!("field-manufacturer")} }
                    th { {t!("column-actions")} }
                }
            }
            tbody {
                match listing {
                    None => rsx! {
                        tr { td { colspan: "9", class: "data-table__placeholder", {t!("listing-loading")} } }
                    },
                    Some(Err(err)) => rsx! {
                        tr { td { colspan: "9", class: "data-table__error", {t!("listing-failed", reason = err)} } }
                    },
                    Some(Ok(rows)) if rows.is_empty() => rsx! {
                        tr { td { colspan: "9", class: "data-table__placeholder", {t!("listing-empty")} } }
                    },
                    Some(Ok(rows)) => rsx! {
                        for record in rows.into_iter() {
                            {render_meter_row(record, form, modals, env.clone())}
                        }
                    },
                }
            }
        }

        div { id: METER_MODAL, class: "{modal_class}",
            div { class: "modal__dialog",
                h3 { id: "modalTitle", class: "modal__title", "{current.title()}" }
                div { class: "modal__form",
                    label { r#for: "meter_id", {t!("field-meter-id")} }
                    input {
                        id: "meter_id",
                        r#type: "text",
                        value: "{current.meter_id}",
                        disabled: current.id_locked,
                        oninput: move |evt: FormEvent| form.write().meter_id = evt.value(),
                    }
                    label { r#for: "energy_type", {t!("field-energy-type")} }
                    select {
                        id: "energy_type",
                        value: "{current.energy_type}",
                        oninput: move |evt: FormEvent| form.write().energy_type = evt.value(),
                        option { value: "", {t!("select-placeholder")} }
                        for kind in EnergyType::ALL {
                            option { key: "{kind.wire()}", value: "{kind.wire()}", "{kind.label()}" }
                        }
                    }
                    label { r#for: "install_location", {t!("field-install-location")} }
                    input {
                        id: "install_location",
                        r#type: "text",
                        value: "{current.install_location}",
                        oninput: move |evt: FormEvent| form.write().install_location = evt.value(),
                    }
                    label { r#for: "pipe_spec", {t!("field-pipe-spec")} }
                    input {
                        id: "pipe_spec",
                        r#type: "text",
                        value: "{current.pipe_spec}",
                        oninput: move |evt: FormEvent| form.write().pipe_spec = evt.value(),
                    }
                    label { r#for: "comm_protocol", {t!("field-comm-protocol")} }
                    select {
                        id: "comm_protocol",
                        value: "{current.comm_protocol}",
                        oninput: move |evt: FormEvent| form.write().comm_protocol = evt.value(),
                        option { value: "", {t!("select-placeholder")} }
                        for protocol in CommProtocol::ALL {
                            option { key: "{protocol.wire()}", value: "{protocol.wire()}", "{protocol.wire()}" }
                        }
                    }
                    label { r#for: "run_status", {t!("field-run-status")} }
                    select {
                        id: "run_status",
                        value: "{current.run_status}",
                        oninput: move |evt: FormEvent| form.write().run_status = evt.value(),
                        option { value: "", {t!("select-placeholder")} }
                        for status in RunStatus::ALL {
                            option { key: "{status.wire()}", value: "{status.wire()}", "{status.label()}" }
                        }
                    }
                    label { r#for: "calib_cycle", {t!("field-calib-cycle")} }
                    input {
                        id: "calib_cycle",
                        r#type: "number",
                        min: "1",
                        value: "{current.calib_cycle}",
                        oninput: move |evt: FormEvent| form.write().calib_cycle = evt.value(),
                    }
                    label { r#for: "manufacturer", {t!("field-manufacturer")} }
                    input {
                        id: "manufacturer",
                        r#type: "text",
                        value: "{current.manufacturer}",
                        oninput: move |evt: FormEvent| form.write().manufacturer = evt.value(),
                    }
                }
                div { class: "modal__actions",
                    button { r#type: "button", class: "button button--ghost", onclick: on_cancel, {t!("action-cancel")} }
                    button { r#type: "button", class: "button button--primary", onclick: on_save, {t!("action-save")} }
                }
            }
        }
    }
}

fn render_meter_row(
    record: MeterRecord,
    mut form: Signal<MeterForm>,
    mut modals: Signal<ModalRegistry>,
    env: ConsoleEnv,
) -> Element {
    let edit_record = record.clone();
    let delete_id = record.meter_id.clone();
    let pipe_spec = record.pipe_spec.clone().unwrap_or_default();
    let manufacturer = record.manufacturer.clone().unwrap_or_default();

    rsx! {
        tr { key: "{record.meter_id}",
            td { "{record.meter_id}" }
            td { "{record.energy_type.label()}" }
            td { "{record.install_location}" }
            td { "{pipe_spec}" }
            td { "{record.comm_protocol.wire()}" }
            td { span { class: record.run_status.css_class(), "{record.run_status.label()}" } }
            td { "{record.calib_cycle}" }
            td { "{manufacturer}" }
            td { class: "data-table__actions",
                button {
                    r#type: "button",
                    class: "button button--small",
                    onclick: move |_| {
                        if let Err(err) = open_edit(&mut form.write(), &mut modals.write(), &edit_record) {
                            tracing::error!(%err, "meter form unavailable");
                        }
                    },
                    {t!("action-edit")}
                }
                button {
                    r#type: "button",
                    class: "button button--small button--danger",
                    onclick: move |_| {
                        let env = env.clone();
                        let meter_id = delete_id.clone();
                        spawn(async move {
                            delete_meter(&env, &meter_id).await;
                        });
                    },
                    {t!("action-delete")}
                }
            }
        }
    }
}
