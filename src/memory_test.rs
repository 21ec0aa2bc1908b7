use super::*;

// =============================================================
// MemoryElement
// =============================================================

#[test]
fn element_clones_share_class_state() {
    let element = MemoryElement::new();
    let handle = element.clone();
    element.set_class("open", true).unwrap();
    assert!(handle.has_class("open"));
    handle.set_class("open", false).unwrap();
    assert!(!element.has_class("open"));
}

#[test]
fn locked_element_rejects_changes_and_keeps_classes() {
    let element = MemoryElement::with_classes(&["dark-mode"]);
    element.lock();
    let err = element.set_class("dark-mode", false).unwrap_err();
    assert!(matches!(err, HostError::ClassList { ref class, .. } if class == "dark-mode"));
    assert_eq!(element.classes(), vec!["dark-mode".to_owned()]);
}

#[test]
fn element_text_replaces_previous_text() {
    let element = MemoryElement::new();
    element.set_text("1999");
    element.set_text("2000");
    assert_eq!(element.text(), "2000");
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn storage_get_unset_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("theme").unwrap(), None);
}

#[test]
fn storage_set_then_peek() {
    let mut storage = MemoryStorage::new();
    storage.set("theme", "dark").unwrap();
    assert_eq!(storage.peek("theme").as_deref(), Some("dark"));
}

#[test]
fn unavailable_storage_throws_both_ways() {
    let mut storage = MemoryStorage::unavailable();
    assert!(matches!(storage.get("theme"), Err(HostError::StorageRead { .. })));
    assert!(matches!(storage.set("theme", "dark"), Err(HostError::StorageWrite { .. })));
    assert_eq!(storage.peek("theme"), None);
}

#[test]
fn has_class_reports_rendered_markers() {
    let element = MemoryElement::with_classes(&["menu-links"]);
    assert!(element.has_class("menu-links"));
    assert!(!element.has_class("open"));
}
