use super::*;
use crate::memory::MemoryElement;

fn make_toggle() -> (MenuToggle<MemoryElement>, MemoryElement, MemoryElement) {
    let menu = MemoryElement::new();
    let icon = MemoryElement::new();
    let toggle = MenuToggle::new(menu.clone(), icon.clone(), "open").unwrap();
    (toggle, menu, icon)
}

// =============================================================
// MenuState
// =============================================================

#[test]
fn menu_state_default_is_closed() {
    assert_eq!(MenuState::default(), MenuState::Closed);
    assert!(!MenuState::Closed.is_open());
}

#[test]
fn menu_state_toggled_flips() {
    assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
    assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
}

// =============================================================
// MenuToggle
// =============================================================

#[test]
fn new_renders_closed_even_over_stray_marker() {
    let menu = MemoryElement::with_classes(&["open", "menu-links"]);
    let icon = MemoryElement::new();
    let toggle = MenuToggle::new(menu.clone(), icon.clone(), "open").unwrap();
    assert_eq!(toggle.state(), MenuState::Closed);
    assert!(!menu.has_class("open"));
    assert!(menu.has_class("menu-links"));
    assert!(!icon.has_class("open"));
}

#[test]
fn single_toggle_opens_both() {
    let (mut toggle, menu, icon) = make_toggle();
    assert_eq!(toggle.toggle().unwrap(), MenuState::Open);
    assert!(menu.has_class("open"));
    assert!(icon.has_class("open"));
}

#[test]
fn even_toggles_restore_and_odd_toggles_flip() {
    let (mut toggle, menu, icon) = make_toggle();
    for n in 1..=6 {
        toggle.toggle().unwrap();
        let expect_open = n % 2 == 1;
        assert_eq!(menu.has_class("open"), expect_open, "menu after {n} toggles");
        assert_eq!(icon.has_class("open"), expect_open, "icon after {n} toggles");
        assert_eq!(toggle.state().is_open(), expect_open);
    }
}

#[test]
fn failed_toggle_keeps_state_and_markers_paired() {
    let menu = MemoryElement::new();
    let icon = MemoryElement::new();
    let mut toggle = MenuToggle::new(menu.clone(), icon.clone(), "open").unwrap();
    icon.lock();
    let err = toggle.toggle().unwrap_err();
    assert!(matches!(err, HostError::ClassList { .. }));
    assert_eq!(toggle.state(), MenuState::Closed);
    assert!(!menu.has_class("open"));
    assert!(!icon.has_class("open"));
}
