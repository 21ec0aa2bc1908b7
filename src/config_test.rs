use super::*;

#[test]
fn defaults_match_site_markup() {
    let config = SiteConfig::default();
    assert_eq!(config.menu_selector, ".menu-links");
    assert_eq!(config.icon_selector, ".hamburger-icon");
    assert_eq!(config.open_class, "open");
    assert_eq!(config.year_element_id, "current-year");
    assert_eq!(config.theme_button_selector, ".theme-toggle-btn");
    assert_eq!(config.dark_class, "dark-mode");
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.dark_scheme_query, "(prefers-color-scheme: dark)");
}

#[test]
fn blank_block_yields_defaults() {
    assert_eq!(SiteConfig::from_json("  \n").unwrap(), SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{"dark_class": "theme-dark", "theme_storage_key": "site.theme"}"#).unwrap();
    assert_eq!(config.dark_class, "theme-dark");
    assert_eq!(config.theme_storage_key, "site.theme");
    assert_eq!(config.menu_selector, ".menu-links");
    assert_eq!(config.open_class, "open");
}

#[test]
fn malformed_block_is_config_error() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, HostError::Config(_)));
}

#[test]
fn wrong_field_type_is_config_error() {
    let err = SiteConfig::from_json(r#"{"open_class": 3}"#).unwrap_err();
    assert!(matches!(err, HostError::Config(_)));
}

#[test]
fn theme_settings_follow_config() {
    let config = SiteConfig::from_json(r#"{"dark_class": "night"}"#).unwrap();
    let settings = config.theme_settings();
    assert_eq!(settings.dark_class, "night");
    assert_eq!(settings.storage_key, "theme");
    assert_eq!(SiteConfig::default().theme_settings(), ThemeSettings::default());
}

#[test]
fn unknown_fields_are_ignored() {
    let config = SiteConfig::from_json(r#"{"open_class": "is-open", "legacy": true}"#).unwrap();
    assert_eq!(config.open_class, "is-open");
}
