use thiserror::Error;

/// Controller defects: the caller referenced something the page never set up.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UiError {
    #[error("no element registered under `{0}`")]
    MissingTarget(String),
}
