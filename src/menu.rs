//! Mobile navigation toggle.
//!
//! The open/closed state is held here and projected onto both the menu
//! container and the hamburger icon, so the two markers never disagree.

use crate::error::HostError;
use crate::host::ClassTarget;

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Visibility of the navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

pub struct MenuToggle<E> {
    menu: E,
    icon: E,
    open_class: String,
    state: MenuState,
}

impl<E: ClassTarget> MenuToggle<E> {
    /// Bind the menu and its icon, rendering the closed state onto both.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::ClassList`] if either element rejects the marker.
    pub fn new(menu: E, icon: E, open_class: impl Into<String>) -> Result<Self, HostError> {
        let toggle = Self {
            menu,
            icon,
            open_class: open_class.into(),
            state: MenuState::Closed,
        };
        toggle.render(MenuState::Closed)?;
        Ok(toggle)
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Flip the menu and return the new state.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::ClassList`] if a marker cannot be changed; the
    /// held state is then unchanged.
    pub fn toggle(&mut self) -> Result<MenuState, HostError> {
        let next = self.state.toggled();
        if let Err(err) = self.render(next) {
            // Put back whichever element already flipped.
            if let Err(rollback) = self.render(self.state) {
                log::warn!("menu: rollback failed: {rollback}");
            }
            return Err(err);
        }
        self.state = next;
        log::debug!("menu: {next:?}");
        Ok(next)
    }

    fn render(&self, state: MenuState) -> Result<(), HostError> {
        self.menu.set_class(&self.open_class, state.is_open())?;
        self.icon.set_class(&self.open_class, state.is_open())
    }
}
