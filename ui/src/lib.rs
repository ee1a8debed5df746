//! Shared UI crate for the energy console: backend transport, feature
//! controllers and the Dioxus views every launcher renders.

pub mod core;
pub mod i18n;
pub mod meters;
pub mod model;
pub mod monitor;
pub mod report;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
