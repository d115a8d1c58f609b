//! Pill-style switcher between the two target languages.
//!
//! Clicking the already-active language is a no-op, and the buttons are
//! disabled while a change is being synced so two requests cannot be
//! started from the same control.

#[cfg(test)]
#[path = "language_switcher_test.rs"]
mod language_switcher_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::language::set_language;
use crate::state::language::{LanguageState, TargetLanguage};

fn option_label(lang: TargetLanguage) -> &'static str {
    match lang {
        TargetLanguage::Fr => "Francuski",
        TargetLanguage::En => "Angielski",
    }
}

fn option_flag(lang: TargetLanguage) -> &'static str {
    match lang {
        TargetLanguage::Fr => "🇫🇷",
        TargetLanguage::En => "🇬🇧",
    }
}

fn option_code(lang: TargetLanguage) -> &'static str {
    match lang {
        TargetLanguage::Fr => "FR",
        TargetLanguage::En => "EN",
    }
}

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let language = expect_context::<RwSignal<LanguageState>>();

    let options = TargetLanguage::ALL
        .into_iter()
        .map(|lang| {
            view! {
                <button
                    class="lang-switch__option"
                    class:lang-switch__option--active=move || language.get().active == lang
                    disabled=move || language.get().loading
                    title=option_label(lang)
                    on:click=move |_| {
                        let state = language.get_untracked();
                        if state.active == lang || state.loading {
                            return;
                        }
                        #[cfg(feature = "hydrate")]
                        leptos::task::spawn_local(set_language(language, lang));
                    }
                >
                    <span class="lang-switch__flag">{option_flag(lang)}</span>
                    <span class="lang-switch__code">{option_code(lang)}</span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="lang-switch">{options}</div> }
}
