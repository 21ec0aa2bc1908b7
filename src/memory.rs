//! In-memory host implementations.
//!
//! Handles are cheap `Rc` clones sharing one underlying state, the way DOM
//! element handles do, so a test can hand an element to a behavior and still
//! inspect it afterwards.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::error::HostError;
use crate::host::{ClassTarget, Clock, ColorSchemeQuery, KeyValueStore, TextTarget};

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

/// An element with a class set and text content.
#[derive(Clone, Debug, Default)]
pub struct MemoryElement {
    classes: Rc<RefCell<BTreeSet<String>>>,
    text: Rc<RefCell<String>>,
    locked: Rc<Cell<bool>>,
}

impl MemoryElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an element that already carries `classes`.
    #[must_use]
    pub fn with_classes(classes: &[&str]) -> Self {
        let element = Self::new();
        element
            .classes
            .borrow_mut()
            .extend(classes.iter().map(|c| (*c).to_owned()));
        element
    }

    /// Make every later class change fail with [`HostError::ClassList`].
    pub fn lock(&self) {
        self.locked.set(true);
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl ClassTarget for MemoryElement {
    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn set_class(&self, class: &str, on: bool) -> Result<(), HostError> {
        if self.locked.get() {
            return Err(HostError::ClassList {
                class: class.to_owned(),
                reason: "element is locked".to_owned(),
            });
        }
        let mut classes = self.classes.borrow_mut();
        if on {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
        Ok(())
    }
}

impl TextTarget for MemoryElement {
    fn set_text(&self, text: &str) {
        text.clone_into(&mut self.text.borrow_mut());
    }
}

/// Key-value storage that can be switched into a throwing mode.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    unavailable: Rc<Cell<bool>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        storage
    }

    /// Storage whose every read and write throws, as with storage disabled
    /// by browser policy.
    #[must_use]
    pub fn unavailable() -> Self {
        let storage = Self::new();
        storage.unavailable.set(true);
        storage
    }

    /// Peek at a value without going through [`KeyValueStore`].
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        if self.unavailable.get() {
            return Err(HostError::StorageRead {
                key: key.to_owned(),
                reason: "storage disabled".to_owned(),
            });
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        if self.unavailable.get() {
            return Err(HostError::StorageWrite {
                key: key.to_owned(),
                reason: "storage disabled".to_owned(),
            });
        }
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// A color-scheme signal fixed at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedScheme {
    pub prefers_dark: bool,
}

impl ColorSchemeQuery for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}

/// A clock stuck on one year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn current_year(&self) -> u32 {
        self.0
    }
}
