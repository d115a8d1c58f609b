//! Visual theme preference store.
//!
//! DESIGN
//! ======
//! The store holds state only; applying the marker class to the document
//! root lives in `util::theme_dom` and is driven by an App-level effect, so
//! state changes and DOM side effects stay separable and testable.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::util::storage;

const STORAGE_KEY: &str = "theme-storage";

/// The active visual theme, applied process-wide.
///
/// `HelloKitty` is an additive decorative skin layered over the light
/// palette, not a third full color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    HelloKitty,
}

impl ThemeMode {
    /// All modes, in the switcher's cycle order.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::HelloKitty];

    /// Marker class set on `<html>`; exactly one is present at a time.
    pub fn marker_class(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "dark",
            ThemeMode::HelloKitty => "theme-hellokitty",
        }
    }

    /// The mode the theme switcher advances to from `self`.
    pub fn next(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::HelloKitty,
            ThemeMode::HelloKitty => ThemeMode::Light,
        }
    }
}

/// Theme preference state, provided as `RwSignal<ThemeState>` via context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: ThemeMode,
}

/// Persisted snapshot; deliberately just the enum so the stored JSON is
/// `{"theme":"light"}` and nothing transient can leak in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct ThemeSnapshot {
    theme: ThemeMode,
}

/// Rehydrate the theme preference from localStorage, defaulting to light.
pub fn load_theme() -> ThemeState {
    storage::load_json::<ThemeSnapshot>(STORAGE_KEY)
        .map_or_else(ThemeState::default, |snap| ThemeState { theme: snap.theme })
}

/// Replace the theme unconditionally and persist the new value.
///
/// Subscribers are notified synchronously through the signal. Persistence is
/// best-effort; a storage failure leaves the in-memory value authoritative.
pub fn set_theme(theme: RwSignal<ThemeState>, next: ThemeMode) {
    theme.set(ThemeState { theme: next });
    storage::save_json(STORAGE_KEY, &ThemeSnapshot { theme: next });
}
