use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::ConsoleConfig;
use ui::core::ConsoleEnv;
use ui::views::{Home, MeterManage, MonitorData, PeakValley};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/energy/meter_manage?:..query")]
    MeterManage { query: String },
    #[route("/energy/monitor_data?:..query")]
    MonitorData { query: String },
    #[route("/energy/peak_valley")]
    PeakValley {},
}

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_meters(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::MeterManage { query: String::new() },
        "{label}"
    })
}
fn nav_monitor(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::MonitorData { query: String::new() },
        "{label}"
    })
}
fn nav_report(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::PeakValley {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            home: nav_home,
            meters: nav_meters,
            monitor: nav_monitor,
            report: nav_report,
        });
    }

    use_context_provider(|| {
        let config = ConsoleConfig::detect();
        tracing::info!(api_base = %config.api_base, "energy console starting");
        ConsoleEnv::browser(config)
    });
    // Language code shared with the navbar and pages so a switch re-renders them.
    use_context_provider(|| Signal::new("en-US".to_string()));

    rsx! {
        document::Style { "{THEME_CSS}" }

        Router::<Route> {}
    }
}

/// Web-specific layout around the shared `AppNavbar`, so the shared crate
/// never needs this crate's `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
