//! Blocking user notifications and yes/no confirmations.
//!
//! Controllers only see the [`Dialogs`] trait so tests can script answers.

use async_trait::async_trait;

#[async_trait(?Send)]
pub trait Dialogs {
    /// Shows a message and returns once the user dismissed it.
    async fn alert(&self, message: &str);

    /// Asks a yes/no question. `true` means the user confirmed.
    async fn confirm(&self, message: &str) -> bool;
}

/// `window.alert` / `window.confirm` of the hosting page.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Dialogs for BrowserDialogs {
    async fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(message).is_err() {
                    tracing::warn!(text = message, "alert suppressed by the browser");
                }
            }
            None => tracing::error!(text = message, "window unavailable for alert"),
        }
    }

    async fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Dialogs for BrowserDialogs {
    async fn alert(&self, message: &str) {
        let script = format!("alert({});", js_string(message));
        if let Err(err) = dioxus::prelude::document::eval(&script).await {
            tracing::warn!(text = message, error = ?err, "alert could not be shown");
        }
    }

    async fn confirm(&self, message: &str) -> bool {
        let script = format!("return confirm({});", js_string(message));
        match dioxus::prelude::document::eval(&script).await {
            Ok(answer) => answer.as_bool().unwrap_or(false),
            Err(err) => {
                tracing::warn!(text = message, error = ?err, "confirm could not be shown");
                false
            }
        }
    }
}

/// Quotes `raw` as a JavaScript string literal.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
pub(crate) fn js_string(raw: &str) -> String {
    serde_json::to_string(raw).unwrap_or_else(|_| "\"\"".to_string())
}
