//! Composition root for the three page behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser binding looks up elements once, hands them over as
//! [`PageParts`], and routes every click through [`Page::click`]. Each
//! behavior is built on its own: a page missing the menu markup still gets
//! its year and theme, and a theme that fails to mount leaves the menu
//! working.

use crate::config::SiteConfig;
use crate::error::HostError;
use crate::host::{ClassTarget, Clock, ColorSchemeQuery, KeyValueStore, TextTarget};
use crate::menu::{MenuState, MenuToggle};
use crate::theme::{Theme, ThemeManager};
use crate::year;

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// What was clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// The hamburger icon.
    Menu,
    /// The n-th theme toggle button in document order.
    ThemeButton(usize),
}

/// Whether mounting must wait for `DOMContentLoaded`, given
/// `document.readyState`. Only `"loading"` defers; `"interactive"` and
/// `"complete"` already have the markup parsed.
#[must_use]
pub fn should_defer_mount(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Elements and storage found on the page.
pub struct PageParts<E, S> {
    pub menu: Option<E>,
    pub icon: Option<E>,
    pub year_display: Option<E>,
    pub root: E,
    pub store: S,
    pub theme_buttons: usize,
}

pub struct Page<E, S> {
    menu: Option<MenuToggle<E>>,
    theme: Option<ThemeManager<E, S>>,
    theme_buttons: usize,
    year: Option<u32>,
}

impl<E: ClassTarget + TextTarget, S: KeyValueStore> Page<E, S> {
    /// Stamp the year, bind the menu, and resolve the theme.
    pub fn mount(
        parts: PageParts<E, S>,
        scheme: &impl ColorSchemeQuery,
        clock: &impl Clock,
        config: &SiteConfig,
    ) -> Self {
        let PageParts { menu, icon, year_display, root, store, theme_buttons } = parts;

        let year = year::stamp(year_display.as_ref(), clock);
        if year.is_none() {
            log::debug!("page: no #{} element, year not stamped", config.year_element_id);
        }

        let menu = if let (Some(menu), Some(icon)) = (menu, icon) {
            match MenuToggle::new(menu, icon, config.open_class.as_str()) {
                Ok(toggle) => Some(toggle),
                Err(err) => {
                    log::warn!("page: menu disabled: {err}");
                    None
                }
            }
        } else {
            log::debug!(
                "page: {} or {} missing, menu disabled",
                config.menu_selector,
                config.icon_selector
            );
            None
        };

        let theme = match ThemeManager::new(root, store, scheme, config.theme_settings()) {
            Ok(manager) => Some(manager),
            Err(err) => {
                log::warn!("page: theme disabled: {err}");
                None
            }
        };

        Self { menu, theme, theme_buttons, year }
    }

    /// Dispatch a click. Every theme button behaves identically.
    ///
    /// # Errors
    ///
    /// Returns the marker error from the affected behavior.
    pub fn click(&mut self, trigger: Trigger) -> Result<(), HostError> {
        match trigger {
            Trigger::Menu => self.toggle_menu().map(|_| ()),
            Trigger::ThemeButton(index) => {
                if index >= self.theme_buttons {
                    log::debug!("page: theme button {index} was not bound");
                }
                self.toggle_theme().map(|_| ())
            }
        }
    }

    /// Flip the menu. `Ok(None)` when the page has no menu.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::ClassList`] if a marker cannot be changed.
    pub fn toggle_menu(&mut self) -> Result<Option<MenuState>, HostError> {
        match self.menu.as_mut() {
            Some(menu) => menu.toggle().map(Some),
            None => Ok(None),
        }
    }

    /// Flip the theme. `Ok(None)` when the theme failed to mount.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::ClassList`] if the root marker cannot be changed.
    pub fn toggle_theme(&mut self) -> Result<Option<Theme>, HostError> {
        match self.theme.as_mut() {
            Some(theme) => theme.toggle().map(Some),
            None => Ok(None),
        }
    }

    #[must_use]
    pub fn menu_state(&self) -> Option<MenuState> {
        self.menu.as_ref().map(MenuToggle::state)
    }

    #[must_use]
    pub fn theme(&self) -> Option<Theme> {
        self.theme.as_ref().map(ThemeManager::active)
    }

    #[must_use]
    pub fn theme_buttons(&self) -> usize {
        self.theme_buttons
    }

    /// The year written at mount, if the page had a display element.
    #[must_use]
    pub fn stamped_year(&self) -> Option<u32> {
        self.year
    }
}
