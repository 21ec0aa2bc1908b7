//! Seams between the behaviors and the page they run on.
//!
//! DESIGN
//! ======
//! Each behavior receives its elements and storage by injection instead of
//! querying the document itself. The browser implementations live in `web`;
//! [`crate::memory`] provides the in-memory ones.

use crate::error::HostError;

/// An element whose class list carries boolean markers.
pub trait ClassTarget {
    /// Whether `class` is currently present.
    ///
    /// The behaviors only write markers; this exists for inspecting a
    /// target's rendered state from tests and embedders.
    fn has_class(&self, class: &str) -> bool;

    /// Add `class` when `on`, remove it otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::ClassList`] if the class list rejects the change.
    fn set_class(&self, class: &str, on: bool) -> Result<(), HostError>;
}

/// An element whose visible text can be replaced.
pub trait TextTarget {
    fn set_text(&self, text: &str);
}

/// Origin-scoped string key-value storage.
pub trait KeyValueStore {
    /// Read `key`, `Ok(None)` when unset.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the backing store throws.
    fn get(&self, key: &str) -> Result<Option<String>, HostError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the backing store throws.
    fn set(&mut self, key: &str, value: &str) -> Result<(), HostError>;
}

/// The OS/browser color-scheme signal.
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> bool;
}

/// Source of the current calendar year.
pub trait Clock {
    fn current_year(&self) -> u32;
}
