//! Top navigation bar with the language-aware title, switchers and session
//! controls. Admin links only appear for superusers.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::language_switcher::LanguageSwitcher;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::state::auth::AuthState;
use crate::state::language::LanguageState;

#[component]
pub fn AppHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let language = expect_context::<RwSignal<LanguageState>>();
    let navigate = use_navigate();

    let nav_home = navigate.clone();
    let nav_study = navigate.clone();
    let nav_groups = navigate.clone();
    let nav_flashcards = navigate;

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::state::auth::end_session(auth).await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        });
    };

    view! {
        <header class="app-header">
            <button class="app-header__title" on:click=move |_| nav_home("/", NavigateOptions::default())>
                {move || language.get().active.app_title()}
            </button>
            <nav class="app-header__nav">
                <button class="app-header__link" on:click=move |_| nav_study("/study", NavigateOptions::default())>
                    "Nauka"
                </button>
                <Show when=move || auth.get().user.is_some_and(|u| u.is_superuser)>
                    <button
                        class="app-header__link"
                        on:click={
                            let nav = nav_groups.clone();
                            move |_| nav("/admin/groups", NavigateOptions::default())
                        }
                    >
                        "Grupy"
                    </button>
                    <button
                        class="app-header__link"
                        on:click={
                            let nav = nav_flashcards.clone();
                            move |_| nav("/admin/flashcards", NavigateOptions::default())
                        }
                    >
                        "Fiszki"
                    </button>
                </Show>
            </nav>
            <div class="app-header__controls">
                <LanguageSwitcher/>
                <ThemeSwitcher/>
                <Show when=move || auth.get().user.is_some()>
                    <span class="app-header__user">
                        {move || auth.get().user.map(|u| u.name).unwrap_or_default()}
                    </span>
                    <button class="btn" on:click=on_logout>"Wyloguj"</button>
                </Show>
            </div>
        </header>
    }
}
