//! Authenticated landing page with study and admin entry points.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::language::LanguageState;
use crate::util::guards;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let language = expect_context::<RwSignal<LanguageState>>();
    let navigate = use_navigate();

    guards::install_unauth_redirect(auth, navigate.clone());

    let nav_study = navigate.clone();
    let nav_groups = navigate.clone();
    let nav_flashcards = navigate;

    let greeting = move || {
        auth.get()
            .user
            .map(|user| format!("Cześć, {}!", user.name))
            .unwrap_or_default()
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Ładowanie..." } else { "Przekierowanie do logowania..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <h1 class="dashboard-page__title">{move || language.get().active.app_title()}</h1>
                <p class="dashboard-page__greeting">{greeting}</p>

                <div class="dashboard-page__tiles">
                    <button
                        class="mode-tile"
                        on:click={
                            let nav = nav_study.clone();
                            move |_| nav("/study", NavigateOptions::default())
                        }
                    >
                        <span class="mode-tile__icon">"🎓"</span>
                        <span class="mode-tile__name">"Nauka fiszek"</span>
                        <span class="mode-tile__mode">{move || language.get().active.from_pl_label()}</span>
                    </button>
                </div>

                <Show
                    when=move || auth.get().user.is_some_and(|u| u.is_superuser)
                    clone:nav_groups
                    clone:nav_flashcards
                >
                    <h2 class="dashboard-page__section">"Administracja"</h2>
                    <div class="dashboard-page__tiles">
                        <button
                            class="mode-tile mode-tile--admin"
                            on:click={
                                let nav = nav_groups.clone();
                                move |_| nav("/admin/groups", NavigateOptions::default())
                            }
                        >
                            <span class="mode-tile__icon">"🗂️"</span>
                            <span class="mode-tile__name">"Grupy fiszek"</span>
                        </button>
                        <button
                            class="mode-tile mode-tile--admin"
                            on:click={
                                let nav = nav_flashcards.clone();
                                move |_| nav("/admin/flashcards", NavigateOptions::default())
                            }
                        >
                            <span class="mode-tile__icon">"📋"</span>
                            <span class="mode-tile__name">"Wszystkie fiszki"</span>
                        </button>
                    </div>
                </Show>
            </div>
        </Show>
    }
}
