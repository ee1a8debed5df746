//! Platform-agnostic plumbing shared by every console page.

pub mod action;
pub mod api;
pub mod config;
pub mod dialogs;
pub mod env;
pub mod error;
pub mod format;
pub mod modal;
pub mod navigation;
pub mod timing;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use env::ConsoleEnv;
pub use error::UiError;
