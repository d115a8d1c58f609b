//! Single-button theme switcher cycling light, dark and Hello Kitty.

#[cfg(test)]
#[path = "theme_switcher_test.rs"]
mod theme_switcher_test;

use leptos::prelude::*;

use crate::state::theme::{set_theme, ThemeMode, ThemeState};

fn mode_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "Jasny",
        ThemeMode::Dark => "Ciemny",
        ThemeMode::HelloKitty => "Hello Kitty",
    }
}

fn mode_emoji(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "☀️",
        ThemeMode::Dark => "🌙",
        ThemeMode::HelloKitty => "🎀",
    }
}

fn switch_tooltip(current: ThemeMode) -> String {
    format!("Zmień na: {}", mode_label(current.next()))
}

/// Shows the current theme and advances to the next one on click.
#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    view! {
        <button
            class="theme-toggle"
            title=move || switch_tooltip(theme.get().theme)
            on:click=move |_| {
                let next = theme.get_untracked().theme.next();
                set_theme(theme, next);
            }
        >
            <span class="theme-toggle__emoji">{move || mode_emoji(theme.get().theme)}</span>
            <span class="theme-toggle__label">{move || mode_label(theme.get().theme)}</span>
        </button>
    }
}
