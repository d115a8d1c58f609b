//! Study page driving a whole session: group selection, the flip-card
//! learning loop and the end-of-session summary.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session state machine lives in `state::study` and is pure; this page
//! owns the signal, performs the HTTP calls and feeds results back in.
//! Progress writes are fire-and-forget: a failed `POST /study/progress`
//! is logged and the session keeps moving.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::flip_card::FlipCard;
use crate::net::types::StudyGroup;
use crate::state::auth::AuthState;
use crate::state::language::LanguageState;
use crate::state::study::{StudyPhase, StudyState, format_duration_ms};
use crate::util::guards;

#[cfg(test)]
#[path = "study_test.rs"]
mod study_test;

/// Cards per session, matching the backend's default page size.
const SESSION_LIMIT: u32 = 20;

/// Completion filter for the group list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum GroupFilter {
    #[default]
    All,
    Incomplete,
    Complete,
}

/// Apply the search box and completion chip to the fetched groups.
fn filter_groups(groups: &[StudyGroup], query: &str, filter: GroupFilter) -> Vec<StudyGroup> {
    groups
        .iter()
        .filter(|group| group.matches_query(query))
        .filter(|group| match filter {
            GroupFilter::All => true,
            GroupFilter::Incomplete => !group.is_complete(),
            GroupFilter::Complete => group.is_complete(),
        })
        .cloned()
        .collect()
}

fn toggle_id(selected: &mut Vec<String>, id: &str) {
    if let Some(pos) = selected.iter().position(|s| s == id) {
        selected.remove(pos);
    } else {
        selected.push(id.to_owned());
    }
}

/// True when every currently visible group is selected (and there is at
/// least one), which flips the select-all button into deselect mode.
fn all_visible_selected(selected: &[String], visible: &[StudyGroup]) -> bool {
    !visible.is_empty()
        && visible
            .iter()
            .all(|group| selected.iter().any(|id| id == &group.id))
}

/// Select every visible group, or drop them all when they already are
/// selected. Selections outside `visible` are left alone.
fn toggle_all(selected: &mut Vec<String>, visible: &[StudyGroup]) {
    if all_visible_selected(selected, visible) {
        selected.retain(|id| !visible.iter().any(|group| &group.id == id));
    } else {
        for group in visible {
            if !selected.iter().any(|id| id == &group.id) {
                selected.push(group.id.clone());
            }
        }
    }
}

fn progress_label(current: usize, total: usize) -> String {
    format!("Fiszka {} / {}", current + 1, total)
}

#[component]
pub fn StudyPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let language = expect_context::<RwSignal<LanguageState>>();
    let navigate = use_navigate();

    guards::install_unauth_redirect(auth, navigate.clone());

    let study = RwSignal::new(StudyState::default());
    let flipped = RwSignal::new(false);
    let celebrating = RwSignal::new(false);

    // Selection-screen state.
    let groups = RwSignal::new(Vec::<StudyGroup>::new());
    let groups_loading = RwSignal::new(true);
    let groups_error = RwSignal::new(None::<String>);
    let query = RwSignal::new(String::new());
    let filter = RwSignal::new(GroupFilter::All);
    let selected = RwSignal::new(Vec::<String>::new());
    let include_learned = RwSignal::new(false);

    let load_groups = move || {
        #[cfg(feature = "hydrate")]
        {
            groups_loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_study_groups().await {
                    Ok(list) => {
                        groups.set(list);
                        groups_error.set(None);
                    }
                    Err(err) => groups_error.set(Some(err)),
                }
                groups_loading.set(false);
            });
        }
    };
    load_groups();

    let visible = move || filter_groups(&groups.get(), &query.get(), filter.get());

    let on_start = move |_| {
        let group_ids = selected.get();
        if group_ids.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let request = crate::net::types::StudySessionRequest {
                group_ids,
                include_learned: include_learned.get(),
                limit: SESSION_LIMIT,
            };
            study.update(|s| s.begin_loading(js_sys::Date::now()));
            flipped.set(false);
            leptos::task::spawn_local(async move {
                match crate::net::api::start_study_session(&request).await {
                    Ok(cards) => study.update(|s| {
                        s.adopt_cards(cards);
                    }),
                    Err(err) => {
                        log::error!("failed to start study session: {err}");
                        study.update(StudyState::back_to_selection);
                    }
                }
            });
        }
    };

    // Shared by the "Umiem" and "Powtórz" buttons.
    let record = move |correct: bool| {
        #[cfg(feature = "hydrate")]
        {
            let card_id = study.with_untracked(|s| s.current_card().map(|c| c.id.clone()));
            let Some(card_id) = card_id else {
                return;
            };
            study.update(|s| s.record_result(correct, js_sys::Date::now()));
            flipped.set(false);
            if correct {
                celebrating.set(true);
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(1000)).await;
                    celebrating.set(false);
                });
            }
            let update = crate::net::types::ProgressUpdate {
                fiszka_id: card_id,
                learned: correct,
            };
            leptos::task::spawn_local(async move {
                if let Err(err) = crate::net::api::submit_progress(&update).await {
                    log::warn!("progress update failed: {err}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = correct;
        }
    };

    let on_skip = move |_| {
        #[cfg(feature = "hydrate")]
        {
            study.update(|s| s.record_skip(js_sys::Date::now()));
            flipped.set(false);
        }
    };

    let on_repeat = move |_| {
        #[cfg(feature = "hydrate")]
        {
            study.update(|s| s.repeat_mistakes(js_sys::Date::now()));
            flipped.set(false);
        }
    };

    let on_back_to_selection = move |_| {
        study.update(StudyState::back_to_selection);
        load_groups();
    };

    let nav_menu = navigate;
    let active_language = Signal::derive(move || language.get().active);

    view! {
        <div class="study-page">
            <Show when=move || study.get().phase == StudyPhase::Selection>
                <div class="study-selection">
                    <h1>"Wybierz grupy do nauki"</h1>
                    <input
                        class="study-selection__search"
                        type="text"
                        placeholder="Szukaj grupy..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <div class="study-selection__filters">
                        <button
                            class="study-filter"
                            class:study-filter--active=move || filter.get() == GroupFilter::All
                            on:click=move |_| filter.set(GroupFilter::All)
                        >
                            "Wszystkie"
                        </button>
                        <button
                            class="study-filter"
                            class:study-filter--active=move || filter.get() == GroupFilter::Incomplete
                            on:click=move |_| filter.set(GroupFilter::Incomplete)
                        >
                            "Nieukończone"
                        </button>
                        <button
                            class="study-filter"
                            class:study-filter--active=move || filter.get() == GroupFilter::Complete
                            on:click=move |_| filter.set(GroupFilter::Complete)
                        >
                            "Ukończone"
                        </button>
                    </div>

                    <Show when=move || groups_error.get().is_some()>
                        <p class="study-selection__error">
                            {move || groups_error.get().unwrap_or_default()}
                        </p>
                    </Show>

                    <Show
                        when=move || !groups_loading.get()
                        fallback=move || view! { <p>"Ładowanie grup..."</p> }
                    >
                        <button
                            class="study-selection__select-all"
                            on:click=move |_| {
                                let now_visible = visible();
                                selected.update(|sel| toggle_all(sel, &now_visible));
                            }
                        >
                            {move || {
                                if all_visible_selected(&selected.get(), &visible()) {
                                    "Odznacz wszystkie"
                                } else {
                                    "Zaznacz wszystkie"
                                }
                            }}
                        </button>
                        <div class="study-selection__groups">
                            {move || {
                                visible()
                                    .into_iter()
                                    .map(|group| {
                                        let id = group.id.clone();
                                        let is_selected = {
                                            let id = id.clone();
                                            move || selected.get().iter().any(|s| s == &id)
                                        };
                                        view! {
                                            <button
                                                class="group-row"
                                                class:group-row--selected=is_selected
                                                on:click=move |_| selected.update(|sel| toggle_id(sel, &id))
                                            >
                                                <span class="group-row__name">{group.name.clone()}</span>
                                                <span class="group-row__counts">
                                                    {format!("{} / {} nauczone", group.learned(), group.total())}
                                                </span>
                                                <Show when={
                                                    let complete = group.is_complete();
                                                    move || complete
                                                }>
                                                    <span class="group-row__complete">"✓"</span>
                                                </Show>
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                        <label class="study-selection__learned">
                            <input
                                type="checkbox"
                                prop:checked=move || include_learned.get()
                                on:input=move |ev| include_learned.set(event_target_checked(&ev))
                            />
                            "Powtórz też już nauczone"
                        </label>
                        <button
                            class="btn btn--primary study-selection__start"
                            disabled=move || selected.get().is_empty()
                            on:click=on_start
                        >
                            "Rozpocznij naukę"
                        </button>
                    </Show>
                </div>
            </Show>

            <Show when=move || study.get().phase == StudyPhase::Loading>
                <div class="study-loading">
                    <p>"Ładowanie fiszek..."</p>
                </div>
            </Show>

            <Show when=move || study.get().phase == StudyPhase::Learning>
                <div class="study-learning">
                    <div class="study-learning__progress">
                        <span class="study-learning__count">
                            {move || {
                                let state = study.get();
                                progress_label(state.current, state.cards.len())
                            }}
                        </span>
                        <div class="progress-bar">
                            <div
                                class="progress-bar__fill"
                                style:width=move || format!("{}%", study.get().progress_percent())
                            ></div>
                        </div>
                    </div>

                    {move || {
                        study
                            .get()
                            .current_card()
                            .cloned()
                            .map(|card| {
                                view! {
                                    <FlipCard card=card flipped=flipped language=active_language/>
                                }
                            })
                    }}

                    <div class="study-learning__actions">
                        <button class="btn btn--success" on:click=move |_| record(true)>
                            "Umiem ✓"
                        </button>
                        <button class="btn btn--danger" on:click=move |_| record(false)>
                            "Powtórz ↻"
                        </button>
                    </div>
                    <button class="study-learning__skip" on:click=on_skip>
                        "Pomiń"
                    </button>

                    <Show when=move || celebrating.get()>
                        <div class="celebration" aria-hidden="true">
                            <span class="celebration__burst">"Super! 🎉"</span>
                        </div>
                    </Show>
                </div>
            </Show>

            <Show when=move || study.get().phase == StudyPhase::Summary>
                <div class="study-summary">
                    <h2>"Podsumowanie Sesji"</h2>
                    <div class="study-summary__stats">
                        <div class="study-summary__stat">
                            <span class="study-summary__value">
                                {move || study.get().stats.correct}
                            </span>
                            <span class="study-summary__label">"Umiem"</span>
                        </div>
                        <div class="study-summary__stat">
                            <span class="study-summary__value">
                                {move || study.get().stats.wrong}
                            </span>
                            <span class="study-summary__label">"Do powtórki"</span>
                        </div>
                        <div class="study-summary__stat">
                            <span class="study-summary__value">
                                {move || study.get().stats.skipped}
                            </span>
                            <span class="study-summary__label">"Pominięte"</span>
                        </div>
                        <div class="study-summary__stat">
                            <span class="study-summary__value">
                                {move || format!("{}%", study.get().stats.accuracy_percent())}
                            </span>
                            <span class="study-summary__label">"Trafność"</span>
                        </div>
                        <div class="study-summary__stat">
                            <span class="study-summary__value">
                                {move || format_duration_ms(study.get().stats.duration_ms())}
                            </span>
                            <span class="study-summary__label">"Czas"</span>
                        </div>
                    </div>

                    <Show when=move || !study.get().mistakes.is_empty()>
                        <div class="study-summary__mistakes">
                            <h3>"Do powtórki"</h3>
                            <ul>
                                {move || {
                                    study
                                        .get()
                                        .mistakes
                                        .into_iter()
                                        .map(|card| {
                                            view! {
                                                <li class="study-summary__mistake">
                                                    <span>{card.text_pl}</span>
                                                    " → "
                                                    <span>{card.text_target}</span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </div>
                    </Show>

                    <div class="study-summary__actions">
                        <Show when=move || !study.get().mistakes.is_empty()>
                            <button class="btn btn--primary" on:click=on_repeat>
                                {move || format!("Powtórz błędne ({})", study.get().mistakes.len())}
                            </button>
                        </Show>
                        <button class="btn" on:click=on_back_to_selection>
                            "Wybierz inne grupy"
                        </button>
                        <button
                            class="btn"
                            on:click={
                                let nav = nav_menu.clone();
                                move |_| nav("/", NavigateOptions::default())
                            }
                        >
                            "Powrót do menu"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
