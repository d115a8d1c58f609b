//! Applies the active theme's marker class to the document root.
//!
//! TRADE-OFFS
//! ==========
//! The stores own theme *state*; this module owns the DOM side effect, so a
//! single App-level consumer can apply it at startup and on every change.
//! SSR paths safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_dom_test.rs"]
mod theme_dom_test;

use crate::state::theme::ThemeMode;

/// Swap the `<html>` marker class to the one for `theme`.
///
/// Idempotent: every call removes all known marker classes first, then adds
/// exactly one. `Light` still sets an explicit `theme-light` marker so
/// styling can target it directly rather than by absence of the others.
pub fn apply(theme: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        for mode in ThemeMode::ALL {
            let _ = classes.remove_1(mode.marker_class());
        }
        let _ = classes.add_1(theme.marker_class());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
