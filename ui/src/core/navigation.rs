//! Whole-page navigation: reloads after a write and redirects after a filter.

use async_trait::async_trait;

use super::timing;

#[async_trait(?Send)]
pub trait PageNavigator {
    /// Reloads the current page so the server-authoritative state shows up.
    fn reload(&self);

    /// Replaces the whole page with `url`.
    fn redirect(&self, url: &str);

    /// Reloads after `delay_ms` milliseconds.
    async fn reload_after(&self, delay_ms: u64) {
        if delay_ms > 0 {
            timing::sleep_ms(delay_ms).await;
        }
        self.reload();
    }
}

/// Drives `window.location` of the hosting page.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl PageNavigator for BrowserNavigator {
    fn reload(&self) {
        let reloaded = web_sys::window().map(|window| window.location().reload());
        if !matches!(reloaded, Some(Ok(()))) {
            tracing::error!("page reload failed");
        }
    }

    fn redirect(&self, url: &str) {
        let redirected = web_sys::window().map(|window| window.location().set_href(url));
        if !matches!(redirected, Some(Ok(()))) {
            tracing::error!(url, "page redirect failed");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl PageNavigator for BrowserNavigator {
    fn reload(&self) {
        run_script("window.location.reload();".to_string(), "page reload failed");
    }

    fn redirect(&self, url: &str) {
        let script = format!(
            "window.location.href = {};",
            super::dialogs::js_string(url)
        );
        run_script(script, "page redirect failed");
    }
}

/// Fires `script` in the page and logs when it errors.
#[cfg(not(target_arch = "wasm32"))]
fn run_script(script: String, failure: &'static str) {
    let eval = dioxus::prelude::document::eval(&script);
    dioxus::prelude::spawn(async move {
        log_script_result(eval.await, &script, failure);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn log_script_result<T, E: std::fmt::Debug>(result: Result<T, E>, script: &str, failure: &str) -> bool {
    match result {
        Ok(_) => true,
        Err(err) => {
            tracing::error!(error = ?err, script, "{failure}");
            false
        }
    }
}
