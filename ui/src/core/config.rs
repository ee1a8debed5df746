//! Runtime settings for the console.

/// Used when no origin can be discovered (native builds, tests).
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
pub const API_BASE_ENV: &str = "ENERGY_CONSOLE_API_BASE";
pub const DEFAULT_COLLECT_RELOAD_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    /// Prefix for every backend endpoint, without trailing slash.
    pub api_base: String,
    /// Pause between a simulated collection and the page reload.
    pub collect_reload_delay_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            collect_reload_delay_ms: DEFAULT_COLLECT_RELOAD_DELAY_MS,
        }
    }
}

impl ConsoleConfig {
    /// Browser builds talk to the origin that served the page.
    #[cfg(target_arch = "wasm32")]
    pub fn detect() -> Self {
        let origin = web_sys::window().and_then(|window| window.location().origin().ok());
        match origin {
            Some(origin) => Self::default().with_api_base(&origin),
            None => {
                tracing::warn!("page origin unavailable, using default api base");
                Self::default()
            }
        }
    }

    /// Native builds read `ENERGY_CONSOLE_API_BASE`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn detect() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(API_BASE_ENV) {
            Some(base) if !base.trim().is_empty() => Self::default().with_api_base(&base),
            _ => Self::default(),
        }
    }

    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_collect_reload_delay(mut self, delay_ms: u64) -> Self {
        self.collect_reload_delay_ms = delay_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        let config = ConsoleConfig::from_lookup(|_| None);
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.collect_reload_delay_ms, 1000);
    }

    #[test]
    fn env_override_is_normalised() {
        let config = ConsoleConfig::from_lookup(|key| {
            (key == API_BASE_ENV).then(|| " https://energy.example.com/ ".to_string())
        });
        assert_eq!(config.api_base, "https://energy.example.com");
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = ConsoleConfig::from_lookup(|_| Some("  ".into()));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }
}
