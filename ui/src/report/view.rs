use dioxus::prelude::*;

use crate::core::format;
use crate::core::ConsoleEnv;
use crate::i18n;
use crate::model::{EnergyType, Factory};
use crate::monitor::load_factories;
use crate::t;

use super::chart::{BarChart, VIEW_HEIGHT, VIEW_WIDTH};
use super::dashboard::{fetch_report, PeakValleyDashboard, ReportSource};
use super::model::{bucket_labels, ReportFilter, ALL_FACTORIES};

#[component]
pub fn PeakValleyPanel() -> Element {
    // Re-render labels on language switch.
    let _lang = i18n::use_active_language();
    let env = use_context::<ConsoleEnv>();

    let mut filter = use_signal(|| ReportFilter::new(format::format_date(format::local_now())));
    let dashboard = use_signal(PeakValleyDashboard::default);

    let factories = use_resource({
        let env = env.clone();
        move || {
            let env = env.clone();
            async move { load_factories(&env).await.unwrap_or_default() }
        }
    });

    let load = {
        let env = env.clone();
        move || {
            let env = env.clone();
            let snapshot = filter();
            let mut board = dashboard;
            spawn(async move {
                let outcome = fetch_report(&env, &snapshot).await;
                board.write().apply(&snapshot, &outcome);
            });
        }
    };

    use_hook({
        let load = load.clone();
        move || {
            if !filter.peek().date.is_empty() {
                load();
            }
        }
    });

    let factory_options: Vec<Factory> = factories.read().clone().unwrap_or_default();
    let lookup = factory_options.clone();
    let current = filter();
    let board = dashboard.read().clone();
    let report = board.rendered().cloned();
    let chart = board.chart().current().cloned();

    rsx! {
        div { class: "filter-bar",
            label { r#for: "pv_factory", {t!("field-factory")} }
            select {
                id: "pv_factory",
                value: "{current.factory_id}",
                oninput: move |evt: FormEvent| {
                    let id = evt.value();
                    let label = lookup
                        .iter()
                        .find(|factory| factory.factory_id == id)
                        .map(|factory| factory.label().to_string())
                        .unwrap_or_else(|| t!("report-all-factories"));
                    let mut next = filter.write();
                    next.factory_id = id;
                    next.factory_label = label;
                },
                option { value: ALL_FACTORIES, {t!("report-all-factories")} }
                for factory in factory_options {
                    option { key: "{factory.factory_id}", value: "{factory.factory_id}", "{factory.label()}" }
                }
            }
            label { r#for: "pv_date", {t!("field-date")} }
            input {
                id: "pv_date",
                r#type: "date",
                value: "{current.date}",
                oninput: move |evt: FormEvent| filter.write().date = evt.value(),
            }
            label { r#for: "pv_type", {t!("field-energy-type")} }
            select {
                id: "pv_type",
                value: "{current.energy_type}",
                oninput: move |evt: FormEvent| filter.write().energy_type = evt.value(),
                option { value: "", {t!("filter-any")} }
                for kind in EnergyType::ALL {
                    option { key: "{kind.wire()}", value: "{kind.wire()}", "{kind.label()}" }
                }
            }
            button {
                r#type: "button",
                class: "button button--primary",
                onclick: move |_| load(),
                {t!("report-query")}
            }
        }

        match report {
            None => rsx! {
                p { class: "report__placeholder", {t!("report-idle")} }
            },
            Some(report) => rsx! {
                if report.source == ReportSource::Fallback {
                    p { class: "report__notice", {t!("report-fallback-notice")} }
                }
                div { class: "summary-cards",
                    div { class: "summary-card",
                        span { class: "summary-card__label", {t!("report-total-usage")} }
                        strong { id: "total_usage", class: "summary-card__value", "{report.summary.total_usage}" }
                        span { id: "usage_unit", class: "summary-card__unit", "{report.summary.unit}" }
                    }
                    div { class: "summary-card",
                        span { class: "summary-card__label", {t!("report-total-cost")} }
                        strong { id: "total_cost", class: "summary-card__value", "{report.summary.total_cost}" }
                    }
                    div { class: "summary-card",
                        span { class: "summary-card__label", {t!("report-peak-ratio")} }
                        strong { id: "peak_ratio", class: "summary-card__value", "{report.summary.peak_ratio}" }
                        span { class: "summary-card__unit", "%" }
                    }
                }
                if let Some(chart) = chart {
                    {render_chart(chart)}
                }
                table { class: "data-table",
                    thead {
                        tr {
                            th { {t!("field-date")} }
                            th { {t!("field-factory")} }
                            for label in bucket_labels() {
                                th { "{label}" }
                            }
                            th { {t!("report-total-usage")} }
                            th { {t!("report-total-cost")} }
                        }
                    }
                    tbody { id: "reportTableBody",
                        tr {
                            td { "{report.row.date}" }
                            td { "{report.row.factory}" }
                            for value in report.row.buckets.iter() {
                                td { "{value}" }
                            }
                            td { strong { "{report.row.total_usage}" } }
                            td { class: "data-table__cost", "{report.row.total_cost}" }
                        }
                    }
                }
            },
        }
    }
}

fn render_chart(chart: BarChart) -> Element {
    let layout = chart.layout();
    let view_box = format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}");
    let axis_left = format!("{:.1}", layout.plot_left);
    let axis_right = format!("{:.1}", layout.plot_right);
    let baseline = format!("{:.1}", layout.baseline);
    let label_y = format!("{:.1}", layout.baseline + 20.0);
    let tick_x = format!("{:.1}", layout.plot_left - 6.0);

    rsx! {
        figure { class: "chart", "data-instance": "{chart.id}",
            svg {
                id: "costChart",
                class: "chart__canvas",
                view_box: "{view_box}",
                role: "img",
                for tick in layout.ticks.iter() {
                    g { key: "{tick.value}",
                        line {
                            class: "chart__grid",
                            x1: "{axis_left}",
                            x2: "{axis_right}",
                            y1: format!("{:.1}", tick.y),
                            y2: format!("{:.1}", tick.y),
                        }
                        text {
                            class: "chart__tick",
                            x: "{tick_x}",
                            y: format!("{:.1}", tick.y + 4.0),
                            text_anchor: "end",
                            {format::format_amount(tick.value)}
                        }
                    }
                }
                for bar in layout.bars.iter() {
                    g { key: "{bar.label}",
                        rect {
                            x: format!("{:.1}", bar.x),
                            y: format!("{:.1}", bar.y),
                            width: format!("{:.1}", bar.width),
                            height: format!("{:.1}", bar.height),
                            fill: bar.color,
                            stroke: bar.color,
                            stroke_width: "1",
                        }
                        text {
                            class: "chart__label",
                            x: format!("{:.1}", bar.x + bar.width / 2.0),
                            y: "{label_y}",
                            text_anchor: "middle",
                            "{bar.label}"
                        }
                    }
                }
                line {
                    class: "chart__axis",
                    x1: "{axis_left}",
                    x2: "{axis_right}",
                    y1: "{baseline}",
                    y2: "{baseline}",
                }
            }
        }
    }
}
