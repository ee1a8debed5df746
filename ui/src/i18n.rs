//! Localization for `energy-console-ui`.
//!
//! Wires `i18n-embed` (language selection + asset loading), `fluent`
//! (formatting), `rust-embed` (compile-time embedding of `.ftl` files) and
//! `i18n-embed-fl` (`fl!` macro for compile-time checked lookups).
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/energy_console_ui.ftl   (fallback/reference)
//!   zh-CN/energy_console_ui.ftl
//! ```
//!
//! Usage (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let saved = t!("meter-saved");
//! let failed = t!("meter-save-failed", message = "duplicate id");
//! ```
//!
//! Platform notes:
//! - Browser: `WebLanguageRequester` (`navigator.languages`).
//! - Native (tests): `DesktopLanguageRequester` (OS locale list).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation macro routing every lookup through [`LOADER`].
///
/// ```ignore
/// t!("nav-meters");
/// t!("meter-save-failed", message = reason);
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain (package name with underscores); the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "energy_console_ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Loads the bundles for the requested languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(error = %err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switches language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Language code held by the launcher's `Signal<String>` context, or empty
/// when none is provided. Reading it subscribes the calling component, so its
/// `t!` labels re-render after a switch.
pub fn use_active_language() -> String {
    dioxus::prelude::try_use_context::<dioxus::prelude::Signal<String>>()
        .map(|code| code())
        .unwrap_or_default()
}

pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
