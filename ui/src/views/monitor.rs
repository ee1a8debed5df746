use dioxus::prelude::*;

use crate::i18n;
use crate::monitor::MonitorDataPanel;
use crate::t;

#[component]
pub fn MonitorData(query: String) -> Element {
    let _lang = i18n::use_active_language();

    rsx! {
        section { class: "page page-monitor",
            h1 { {t!("monitor-title")} }
            p { class: "page__lead", {t!("monitor-intro")} }
            MonitorDataPanel { query }
        }
    }
}
