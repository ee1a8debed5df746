use dioxus::prelude::*;

use crate::i18n;
use crate::t;

#[component]
pub fn Home() -> Element {
    let _lang = i18n::use_active_language();

    rsx! {
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { {t!("home-intro")} }

            ul { class: "page-home__features",
                li { {t!("home-feature-meters")} }
                li { {t!("home-feature-monitor")} }
                li { {t!("home-feature-report")} }
            }
        }
    }
}
