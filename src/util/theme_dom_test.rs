#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn apply_is_noop_but_callable_for_every_mode() {
    apply(ThemeMode::Light);
    apply(ThemeMode::Dark);
    apply(ThemeMode::HelloKitty);
}
