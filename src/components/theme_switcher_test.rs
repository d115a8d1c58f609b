#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn every_mode_has_a_label_and_emoji() {
    for mode in ThemeMode::ALL {
        assert!(!mode_label(mode).is_empty());
        assert!(!mode_emoji(mode).is_empty());
    }
    assert_eq!(mode_label(ThemeMode::Light), "Jasny");
    assert_eq!(mode_label(ThemeMode::Dark), "Ciemny");
    assert_eq!(mode_label(ThemeMode::HelloKitty), "Hello Kitty");
}

#[test]
fn tooltip_names_the_next_mode_in_the_cycle() {
    assert_eq!(switch_tooltip(ThemeMode::Light), "Zmień na: Ciemny");
    assert_eq!(switch_tooltip(ThemeMode::Dark), "Zmień na: Hello Kitty");
    assert_eq!(switch_tooltip(ThemeMode::HelloKitty), "Zmień na: Jasny");
}
