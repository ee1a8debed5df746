use dioxus::prelude::*;

use crate::i18n;
use crate::report::PeakValleyPanel;
use crate::t;

#[component]
pub fn PeakValley() -> Element {
    let _lang = i18n::use_active_language();

    rsx! {
        section { class: "page page-report",
            h1 { {t!("report-title")} }
            p { class: "page__lead", {t!("report-intro")} }
            PeakValleyPanel {}
        }
    }
}
