#![cfg(not(feature = "hydrate"))]

use super::*;

// =====================
// ThemeMode
// =====================

#[test]
fn default_mode_is_light() {
    assert_eq!(ThemeMode::default(), ThemeMode::Light);
    assert_eq!(ThemeState::default().theme, ThemeMode::Light);
}

#[test]
fn marker_classes_are_distinct() {
    let classes: Vec<&str> = ThemeMode::ALL.iter().map(|m| m.marker_class()).collect();
    assert_eq!(classes, vec!["theme-light", "dark", "theme-hellokitty"]);
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn next_cycles_through_all_modes() {
    assert_eq!(ThemeMode::Light.next(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.next(), ThemeMode::HelloKitty);
    assert_eq!(ThemeMode::HelloKitty.next(), ThemeMode::Light);

    let mut mode = ThemeMode::Light;
    for _ in 0..ThemeMode::ALL.len() {
        mode = mode.next();
    }
    assert_eq!(mode, ThemeMode::Light);
}

// =====================
// Serde wire format
// =====================

#[test]
fn modes_serialize_lowercase() {
    assert_eq!(serde_json::to_string(&ThemeMode::Light).unwrap(), "\"light\"");
    assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
    assert_eq!(
        serde_json::to_string(&ThemeMode::HelloKitty).unwrap(),
        "\"hellokitty\""
    );
}

#[test]
fn snapshot_holds_only_the_theme_field() {
    let json = serde_json::to_string(&ThemeSnapshot { theme: ThemeMode::Dark }).unwrap();
    assert_eq!(json, r#"{"theme":"dark"}"#);

    let parsed: ThemeSnapshot = serde_json::from_str(r#"{"theme":"hellokitty"}"#).unwrap();
    assert_eq!(parsed.theme, ThemeMode::HelloKitty);
}

#[test]
fn unknown_snapshot_value_fails_to_parse() {
    // A corrupt stored value falls back to the default at load time because
    // load_json returns None on parse failure.
    assert!(serde_json::from_str::<ThemeSnapshot>(r#"{"theme":"sepia"}"#).is_err());
}

// =====================
// Rehydration
// =====================

#[test]
fn load_theme_defaults_to_light_without_storage() {
    assert_eq!(load_theme(), ThemeState::default());
}
