//! Visibility bookkeeping for the page's modal dialogs.

use std::collections::{BTreeMap, BTreeSet};

use super::error::UiError;

/// Class marker that makes a modal visible in the theme (`.modal.show`).
pub const VISIBLE_MARKER: &str = "show";

/// Class lists of every modal on the page, keyed by element id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalRegistry {
    targets: BTreeMap<String, BTreeSet<String>>,
}

impl ModalRegistry {
    pub fn with_targets<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::default();
        for id in ids {
            registry.register(id);
        }
        registry
    }

    pub fn register(&mut self, id: impl Into<String>) {
        self.targets.entry(id.into()).or_default();
    }

    /// Adds or removes the visibility marker. Repeating a call is a no-op.
    pub fn control(&mut self, id: &str, show: bool) -> Result<(), UiError> {
        let classes = self
            .targets
            .get_mut(id)
            .ok_or_else(|| UiError::MissingTarget(id.to_string()))?;
        if show {
            classes.insert(VISIBLE_MARKER.to_string());
        } else {
            classes.remove(VISIBLE_MARKER);
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn is_visible(&self, id: &str) -> bool {
        self.targets
            .get(id)
            .map(|classes| classes.contains(VISIBLE_MARKER))
            .unwrap_or(false)
    }

    /// `class` attribute for the modal root, e.g. `modal show`.
    pub fn class_attr(&self, id: &str) -> String {
        let mut class = String::from("modal");
        if let Some(classes) = self.targets.get(id) {
            for marker in classes {
                class.push(' ');
                class.push_str(marker);
            }
        }
        class
    }
}
