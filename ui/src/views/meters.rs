use dioxus::prelude::*;

use crate::i18n;
use crate::meters::MeterManagePanel;
use crate::t;

/// `query` is the raw listing query (`energy_type=..&run_status=..`).
#[component]
pub fn MeterManage(query: String) -> Element {
    let _lang = i18n::use_active_language();

    rsx! {
        section { class: "page page-meters",
            h1 { {t!("meters-title")} }
            MeterManagePanel { query }
        }
    }
}
