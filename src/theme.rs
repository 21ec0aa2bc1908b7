//! Light/dark theme: resolution, application, toggle, persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The active theme is rendered as a single class marker on the root
//! container (the body); page CSS does the rest. The choice is persisted as
//! `"light"` / `"dark"` so the next visit starts where this one ended.
//!
//! DESIGN
//! ======
//! [`ThemeManager`] owns the active [`Theme`] as a field. [`ThemeManager::apply`]
//! is the only path that changes the marker, and it updates the field in the
//! same step, so the marker is always a projection of the field.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort. A read that throws counts as "nothing saved" and
//! resolution falls through to the OS preference; a write that throws is
//! logged and the visual toggle still stands.

use std::fmt;
use std::str::FromStr;

use crate::error::HostError;
use crate::host::{ClassTarget, ColorSchemeQuery, KeyValueStore};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The persisted literal.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

/// Pick the initial theme: saved value, then OS preference, then light.
///
/// An empty saved string counts as nothing saved. Any other saved value that
/// is not `"dark"` resolves to light.
#[must_use]
pub fn resolve(saved: Option<&str>, prefers_dark: bool) -> Theme {
    match saved {
        Some(value) if !value.is_empty() => value.parse().unwrap_or_else(|err: ParseThemeError| {
            log::debug!("theme: {err}, using light");
            Theme::Light
        }),
        _ if prefers_dark => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Marker class and storage key the manager works with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeSettings {
    pub dark_class: String,
    pub storage_key: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            dark_class: "dark-mode".to_owned(),
            storage_key: "theme".to_owned(),
        }
    }
}

pub struct ThemeManager<R, S> {
    root: R,
    store: S,
    settings: ThemeSettings,
    active: Theme,
}

impl<R: ClassTarget, S: KeyValueStore> ThemeManager<R, S> {
    /// Resolve the initial theme and apply it to `root`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::ClassList`] if the root marker cannot be set.
    pub fn new(
        root: R,
        store: S,
        scheme: &impl ColorSchemeQuery,
        settings: ThemeSettings,
    ) -> Result<Self, HostError> {
        let saved = match store.get(&settings.storage_key) {
            Ok(saved) => saved,
            Err(err) => {
                log::warn!("theme: {err}, ignoring saved preference");
                None
            }
        };
        let initial = resolve(saved.as_deref(), scheme.prefers_dark());

        let mut manager = Self {
            root,
            store,
            settings,
            active: initial,
        };
        manager.apply(initial)?;
        log::info!("theme: resolved {initial}");
        Ok(manager)
    }

    #[must_use]
    pub fn active(&self) -> Theme {
        self.active
    }

    /// Render `theme` onto the root container.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::ClassList`] if the marker cannot be changed; the
    /// active theme is then unchanged.
    pub fn apply(&mut self, theme: Theme) -> Result<(), HostError> {
        self.root.set_class(&self.settings.dark_class, theme.is_dark())?;
        self.active = theme;
        Ok(())
    }

    /// Switch to the opposite theme and persist it. Returns the new theme.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::ClassList`] if the marker cannot be changed, in
    /// which case nothing is persisted.
    pub fn toggle(&mut self) -> Result<Theme, HostError> {
        let next = self.active.toggled();
        self.apply(next)?;
        if let Err(err) = self.store.set(&self.settings.storage_key, next.as_str()) {
            log::warn!("theme: {err}, preference not saved");
        }
        log::debug!("theme: toggled to {next}");
        Ok(next)
    }
}
