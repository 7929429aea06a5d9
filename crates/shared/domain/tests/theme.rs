use amia_domain::theme::Theme;

#[test]
fn system_theme_follows_platform() {
    assert_eq!(Theme::System.resolve(true), Theme::Dark);
    assert_eq!(Theme::System.resolve(false), Theme::Light);
    assert_eq!(Theme::Light.resolve(true), Theme::Light);
}

#[test]
fn toggle_flips_resolved_theme() {
    assert_eq!(Theme::Light.toggled(true), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(false), Theme::Light);
    assert_eq!(Theme::System.toggled(true), Theme::Light);
    assert_eq!(Theme::System.toggled(false), Theme::Dark);
    assert!(Theme::System.is_dark(true));
}

#[test]
fn theme_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    assert_eq!(serde_json::from_str::<Theme>("\"system\"").unwrap(), Theme::System);
}
