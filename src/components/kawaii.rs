//! Decorative floating emoji layer for the Hello Kitty theme.
//!
//! Renders nothing unless the theme is Hello Kitty; the other themes carry
//! no decorative layer at all. The overlay is fixed, non-interactive and
//! hidden from assistive tech.

use leptos::prelude::*;

use crate::state::theme::{ThemeMode, ThemeState};

const DECORATIONS: [(&str, &str); 8] = [
    ("🌸", "kawaii__item kawaii__item--1"),
    ("✨", "kawaii__item kawaii__item--2"),
    ("💖", "kawaii__item kawaii__item--3"),
    ("🎀", "kawaii__item kawaii__item--4"),
    ("🌟", "kawaii__item kawaii__item--5"),
    ("💕", "kawaii__item kawaii__item--6"),
    ("🌸", "kawaii__item kawaii__item--7"),
    ("✨", "kawaii__item kawaii__item--8"),
];

#[component]
pub fn FloatingDecorations() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    view! {
        <Show when=move || theme.get().theme == ThemeMode::HelloKitty>
            <div class="kawaii" aria-hidden="true">
                {DECORATIONS
                    .iter()
                    .map(|(emoji, class)| view! { <span class=*class>{*emoji}</span> })
                    .collect::<Vec<_>>()}
            </div>
        </Show>
    }
}
