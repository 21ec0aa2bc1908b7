//! Page contract: selectors, marker classes, and the storage key.
//!
//! Defaults match the site's markup. A page can override any subset with an
//! inline JSON block whose id is [`CONFIG_ELEMENT_ID`]; missing fields keep
//! their defaults.

use serde::Deserialize;

use crate::error::HostError;
use crate::theme::ThemeSettings;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Id of the optional `<script type="application/json">` override block.
pub const CONFIG_ELEMENT_ID: &str = "site-behaviors-config";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Menu container toggled open/closed.
    pub menu_selector: String,
    /// Hamburger icon; also the menu's click trigger.
    pub icon_selector: String,
    /// Marker carried by menu and icon while open.
    pub open_class: String,
    /// Footer element receiving the year. Optional on the page.
    pub year_element_id: String,
    /// Theme toggle buttons (desktop and mobile variants).
    pub theme_button_selector: String,
    /// Marker carried by the body while the dark theme is active.
    pub dark_class: String,
    /// Storage key for the persisted theme.
    pub theme_storage_key: String,
    /// Media query signalling an OS dark-mode preference.
    pub dark_scheme_query: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            menu_selector: ".menu-links".to_owned(),
            icon_selector: ".hamburger-icon".to_owned(),
            open_class: "open".to_owned(),
            year_element_id: "current-year".to_owned(),
            theme_button_selector: ".theme-toggle-btn".to_owned(),
            dark_class: "dark-mode".to_owned(),
            theme_storage_key: "theme".to_owned(),
            dark_scheme_query: "(prefers-color-scheme: dark)".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse an override block. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Config`] when `raw` is not a JSON object of
    /// known field types.
    pub fn from_json(raw: &str) -> Result<Self, HostError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Theme marker and storage key, as [`crate::theme::ThemeManager`] takes them.
    #[must_use]
    pub fn theme_settings(&self) -> ThemeSettings {
        ThemeSettings {
            dark_class: self.dark_class.clone(),
            storage_key: self.theme_storage_key.clone(),
        }
    }
}
