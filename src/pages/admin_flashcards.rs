//! Admin page managing the base flashcard set across all groups.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Flashcard, FlashcardPayload, Group};
use crate::state::auth::AuthState;
use crate::util::guards;

#[cfg(test)]
#[path = "admin_flashcards_test.rs"]
mod admin_flashcards_test;

fn validate_text_pl(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some("Tekst polski jest wymagany");
    }
    None
}

fn validate_text_target(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some("Tłumaczenie jest wymagane");
    }
    None
}

/// Empty is fine; anything else has to look like a URL.
fn validate_image_url(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        None
    } else {
        Some("Adres obrazka musi zaczynać się od http")
    }
}

/// Build the request body from raw dialog inputs; empty optionals are
/// omitted.
fn flashcard_payload(
    text_pl: &str,
    text_target: &str,
    image_url: &str,
    group_id: &str,
) -> FlashcardPayload {
    let image_url = image_url.trim();
    let group_id = group_id.trim();
    FlashcardPayload {
        text_pl: text_pl.trim().to_owned(),
        text_target: text_target.trim().to_owned(),
        image_url: if image_url.is_empty() {
            None
        } else {
            Some(image_url.to_owned())
        },
        group_id: if group_id.is_empty() {
            None
        } else {
            Some(group_id.to_owned())
        },
    }
}

/// Resolve a group id to its display name for the list rows.
fn group_name(groups: &[Group], id: Option<&str>) -> Option<String> {
    let id = id?;
    groups
        .iter()
        .find(|group| group.id == id)
        .map(|group| group.name.clone())
}

#[component]
pub fn AdminFlashcardsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    guards::install_admin_guard(auth, navigate);

    let flashcards = RwSignal::new(Vec::<Flashcard>::new());
    let groups = RwSignal::new(Vec::<Group>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let group_filter = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0_u64);
    let on_reload = Callback::new(move |()| reload.update(|n| *n += 1));

    // Refetch when the group filter changes or after a dialog saves.
    Effect::new(move || {
        let _ = reload.get();
        let filter = group_filter.get();
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_flashcards(filter.as_deref()).await {
                    Ok(list) => {
                        flashcards.set(list);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err)),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = filter;
        }
    });

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_groups().await {
                Ok(list) => groups.set(list),
                Err(err) => log::warn!("group list failed: {err}"),
            }
        });
    }

    // Dialog state.
    let editing = RwSignal::new(None::<Flashcard>);
    let show_dialog = RwSignal::new(false);
    let text_pl = RwSignal::new(String::new());
    let text_target = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let dialog_group = RwSignal::new(String::new());
    let delete_id = RwSignal::new(None::<String>);

    let on_create = move |_| {
        editing.set(None);
        text_pl.set(String::new());
        text_target.set(String::new());
        image_url.set(String::new());
        dialog_group.set(group_filter.get().unwrap_or_default());
        show_dialog.set(true);
    };
    let on_cancel = Callback::new(move |()| show_dialog.set(false));
    let on_delete_cancel = Callback::new(move |()| delete_id.set(None));

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Wszystkie fiszki"</h1>
                <select
                    class="admin-page__filter"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        group_filter.set(if value.is_empty() { None } else { Some(value) });
                    }
                >
                    <option value="">"Wszystkie grupy"</option>
                    {move || {
                        groups
                            .get()
                            .into_iter()
                            .map(|group| {
                                view! { <option value=group.id.clone()>{group.name.clone()}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <div class="admin-page__actions">
                    <button class="btn btn--primary" on:click=on_create>
                        "+ Dodaj"
                    </button>
                </div>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="admin-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Ładowanie fiszek..."</p> }
            >
                <div class="admin-page__list">
                    {move || {
                        let known_groups = groups.get();
                        flashcards
                            .get()
                            .into_iter()
                            .map(|card| {
                                let edit_target = card.clone();
                                let delete_target = card.id.clone();
                                let group_label =
                                    group_name(&known_groups, card.group_id.as_deref())
                                        .unwrap_or_default();
                                view! {
                                    <div class="admin-row">
                                        <div class="admin-row__info">
                                            <span class="admin-row__name">{card.text_pl.clone()}</span>
                                            <span class="admin-row__description">
                                                {card.text_target.clone()}
                                            </span>
                                        </div>
                                        <span class="admin-row__meta">{group_label}</span>
                                        <Show when={
                                            let learned = card.learned == Some(true);
                                            move || learned
                                        }>
                                            <span class="admin-row__learned">"✓ nauczona"</span>
                                        </Show>
                                        <div class="admin-row__actions">
                                            <button
                                                class="btn"
                                                on:click=move |_| {
                                                    let card = edit_target.clone();
                                                    text_pl.set(card.text_pl.clone());
                                                    text_target.set(card.text_target.clone());
                                                    image_url.set(
                                                        card.image_url.clone().unwrap_or_default(),
                                                    );
                                                    dialog_group.set(
                                                        card.group_id.clone().unwrap_or_default(),
                                                    );
                                                    editing.set(Some(card));
                                                    show_dialog.set(true);
                                                }
                                            >
                                                "Edytuj"
                                            </button>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| delete_id.set(Some(delete_target.clone()))
                                            >
                                                "Usuń"
                                            </button>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>

            <Show when=move || show_dialog.get()>
                <FlashcardDialog
                    editing=editing
                    text_pl=text_pl
                    text_target=text_target
                    image_url=image_url
                    dialog_group=dialog_group
                    groups=groups
                    on_cancel=on_cancel
                    on_saved=on_reload
                />
            </Show>
            <Show when=move || delete_id.get().is_some()>
                <DeleteFlashcardDialog
                    flashcard_id=delete_id
                    on_cancel=on_delete_cancel
                    on_deleted=on_reload
                />
            </Show>
        </div>
    }
}

/// Modal dialog creating or editing one flashcard.
#[component]
fn FlashcardDialog(
    editing: RwSignal<Option<Flashcard>>,
    text_pl: RwSignal<String>,
    text_target: RwSignal<String>,
    image_url: RwSignal<String>,
    dialog_group: RwSignal<String>,
    groups: RwSignal<Vec<Group>>,
    on_cancel: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let pl_error = RwSignal::new(None::<&'static str>);
    let target_error = RwSignal::new(None::<&'static str>);
    let image_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let pl_value = text_pl.get();
        let target_value = text_target.get();
        let image_value = image_url.get();
        let group_value = dialog_group.get();
        let pl_invalid = validate_text_pl(&pl_value);
        let target_invalid = validate_text_target(&target_value);
        let image_invalid = validate_image_url(&image_value);
        pl_error.set(pl_invalid);
        target_error.set(target_invalid);
        image_error.set(image_invalid);
        if pl_invalid.is_some() || target_invalid.is_some() || image_invalid.is_some() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let payload = flashcard_payload(&pl_value, &target_value, &image_value, &group_value);
            let result = match editing.get_untracked() {
                Some(card) => crate::net::api::update_flashcard(&card.id, &payload)
                    .await
                    .map(|_| ()),
                None => crate::net::api::create_flashcard(&payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    on_saved.run(());
                    on_cancel.run(());
                }
                Err(err) => log::error!("failed to save flashcard: {err}"),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = group_value;
            busy.set(false);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || if editing.get().is_some() { "Edytuj fiszkę" } else { "Nowa fiszka" }}</h2>
                <label class="dialog__label">
                    "Tekst polski"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || text_pl.get()
                        on:input=move |ev| text_pl.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || pl_error.get().is_some()>
                    <p class="dialog__error">{move || pl_error.get().unwrap_or_default()}</p>
                </Show>
                <label class="dialog__label">
                    "Tłumaczenie"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || text_target.get()
                        on:input=move |ev| text_target.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || target_error.get().is_some()>
                    <p class="dialog__error">{move || target_error.get().unwrap_or_default()}</p>
                </Show>
                <label class="dialog__label">
                    "Adres obrazka (opcjonalnie)"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="https://..."
                        prop:value=move || image_url.get()
                        on:input=move |ev| image_url.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || image_error.get().is_some()>
                    <p class="dialog__error">{move || image_error.get().unwrap_or_default()}</p>
                </Show>
                <label class="dialog__label">
                    "Grupa (opcjonalnie)"
                    <select
                        class="dialog__input"
                        prop:value=move || dialog_group.get()
                        on:change=move |ev| dialog_group.set(event_target_value(&ev))
                    >
                        <option value="">"Bez grupy"</option>
                        {move || {
                            groups
                                .get()
                                .into_iter()
                                .map(|group| {
                                    view! { <option value=group.id.clone()>{group.name.clone()}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Anuluj"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        "Zapisz"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DeleteFlashcardDialog(
    flashcard_id: RwSignal<Option<String>>,
    on_cancel: Callback<()>,
    on_deleted: Callback<()>,
) -> impl IntoView {
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let Some(id) = flashcard_id.get_untracked() else {
            return;
        };
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_flashcard(&id).await {
                Ok(()) => {
                    on_deleted.run(());
                    on_cancel.run(());
                }
                Err(err) => log::error!("failed to delete flashcard: {err}"),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            busy.set(false);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Usuń fiszkę"</h2>
                <p class="dialog__danger">"Ta operacja trwale usunie fiszkę."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Anuluj"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        "Usuń"
                    </button>
                </div>
            </div>
        </div>
    }
}
