use dioxus::prelude::*;

use crate::core::ConsoleEnv;
use crate::i18n;
use crate::model::DataQuality;
use crate::t;

use super::controller::{
    filter_records, load_factories, load_records, simulate_collection, verify_record,
    MonitorFilter,
};
use super::model::MonitorRecord;

#[component]
pub fn MonitorDataPanel(query: String) -> Element {
    // Re-render labels on language switch.
    let _lang = i18n::use_active_language();
    let env = use_context::<ConsoleEnv>();
    let initial = MonitorFilter::from_query(&query);

    let mut filter = use_signal(|| initial.clone());

    let records = use_resource({
        let env = env.clone();
        move || {
            let env = env.clone();
            let filter = initial.clone();
            async move { load_records(&env, &filter).await }
        }
    });
    let factories = use_resource({
        let env = env.clone();
        move || {
            let env = env.clone();
            async move { load_factories(&env).await.unwrap_or_default() }
        }
    });

    let on_filter = {
        let env = env.clone();
        move |_| filter_records(&env, &filter())
    };
    let on_collect = {
        let env = env.clone();
        move |_| {
            let env = env.clone();
            spawn(async move {
                simulate_collection(&env).await;
            });
        }
    };

    let current = filter();
    let factory_options = factories.read().clone().unwrap_or_default();
    let listing = records.read().clone();

    rsx! {
        div { class: "filter-bar",
            label { r#for: "meter_id", {t!("field-meter-id")} }
            input {
                id: "meter_id",
                r#type: "text",
                value: "{current.meter_id}",
                oninput: move |evt: FormEvent| filter.write().meter_id = evt.value(),
            }
            label { r#for: "factory_id", {t!("field-factory")} }
            select {
                id: "factory_id",
                value: "{current.factory_id}",
                oninput: move |evt: FormEvent| filter.write().factory_id = evt.value(),
                option { value: "", {t!("filter-any")} }
                for factory in factory_options {
                    option { key: "{factory.factory_id}", value: "{factory.factory_id}", "{factory.label()}" }
                }
            }
            label { r#for: "data_quality", {t!("field-data-quality")} }
            select {
                id: "data_quality",
                value: "{current.data_quality}",
                oninput: move |evt: FormEvent| filter.write().data_quality = evt.value(),
                option { value: "", {t!("filter-any")} }
                for quality in DataQuality::ALL {
                    option { key: "{quality.wire()}", value: "{quality.wire()}", "{quality.label()}" }
                }
            }
            label { r#for: "start_time", {t!("field-start-time")} }
            input {
                id: "start_time",
                r#type: "datetime-local",
                value: "{current.start_time}",
                oninput: move |evt: FormEvent| filter.write().start_time = evt.value(),
            }
            button { r#type: "button", class: "button button--primary", onclick: on_filter, {t!("action-search")} }
            button { r#type: "button", class: "button button--accent", onclick: on_collect, {t!("monitor-collect")} }
        }

        table { class: "data-table",
            thead {
                tr {
                    th { {t!("field-data-id")} }
                    th { {t!("field-meter-id")} }
                    th { {t!("field-factory")} }
                    th { {t!("field-collect-time")} }
                    th { {t!("field-reading")} }
                    th { {t!("field-data-quality")} }
                    th { {t!("field-verified")} }
                    th { {t!("column-actions")} }
                }
            }
            tbody {
                match listing {
                    None => rsx! {
                        tr { td { colspan: "8", class: "data-table__placeholder", {t!("listing-loading")} } }
                    },
                    Some(Err(err)) => rsx! {
                        tr { td { colspan: "8", class: "data-table__error", {t!("listing-failed", reason = err)} } }
                    },
                    Some(Ok(rows)) if rows.is_empty() => rsx! {
                        tr { td { colspan: "8", class: "data-table__placeholder", {t!("listing-empty")} } }
                    },
                    Some(Ok(rows)) => rsx! {
                        for record in rows.into_iter() {
                            {render_record_row(record, env.clone())}
                        }
                    },
                }
            }
        }
    }
}

fn render_record_row(record: MonitorRecord, env: ConsoleEnv) -> Element {
    let data_id = record.data_id.clone();
    let (quality_label, quality_class) = match record.data_quality {
        Some(quality) if quality.needs_review() => (quality.label(), "badge badge--warn"),
        Some(quality) => (quality.label(), "badge badge--ok"),
        None => ("—".to_string(), "badge"),
    };
    let verified_label = if record.is_verified {
        t!("verified-yes")
    } else {
        t!("verified-no")
    };

    rsx! {
        tr { key: "{record.data_id}",
            td { "{record.data_id}" }
            td { "{record.meter_id}" }
            td { "{record.factory_id}" }
            td { "{record.collect_time_label()}" }
            td { "{record.reading_label()}" }
            td { span { class: quality_class, "{quality_label}" } }
            td { "{verified_label}" }
            td { class: "data-table__actions",
                if record.can_verify() {
                    button {
                        r#type: "button",
                        class: "button button--small",
                        onclick: move |_| {
                            let env = env.clone();
                            let data_id = data_id.clone();
                            spawn(async move {
                                verify_record(&env, &data_id).await;
                            });
                        },
                        {t!("action-verify")}
                    }
                }
            }
        }
    }
}
