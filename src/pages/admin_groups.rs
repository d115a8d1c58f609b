//! Admin page managing flashcard groups: CRUD dialogs plus the bulk
//! content-generation action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Group, GroupPayload};
use crate::state::auth::AuthState;
use crate::state::language::{LanguageState, TargetLanguage};
use crate::util::guards;

#[cfg(test)]
#[path = "admin_groups_test.rs"]
mod admin_groups_test;

const NAME_MAX: usize = 100;
const DESCRIPTION_MAX: usize = 500;

/// Field-level check for the group dialog's name input.
fn validate_name(name: &str) -> Option<&'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some("Nazwa jest wymagana");
    }
    if trimmed.chars().count() > NAME_MAX {
        return Some("Nazwa jest zbyt długa");
    }
    None
}

fn validate_description(description: &str) -> Option<&'static str> {
    if description.trim().chars().count() > DESCRIPTION_MAX {
        return Some("Opis jest zbyt długi");
    }
    None
}

/// Build the request body from raw dialog inputs. An empty description is
/// omitted rather than sent as an empty string.
fn group_payload(name: &str, description: &str, language: Option<TargetLanguage>) -> GroupPayload {
    let description = description.trim();
    GroupPayload {
        name: name.trim().to_owned(),
        description: if description.is_empty() {
            None
        } else {
            Some(description.to_owned())
        },
        language,
    }
}

/// Parse a count input, falling back to `default` for anything that is not
/// a positive number.
fn parse_positive(value: &str, default: u32) -> u32 {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n >= 1)
        .unwrap_or(default)
}

#[component]
pub fn AdminGroupsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    guards::install_admin_guard(auth, navigate.clone());

    let groups = RwSignal::new(Vec::<Group>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let load_groups = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_groups().await {
                    Ok(list) => {
                        groups.set(list);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err)),
                }
                loading.set(false);
            });
        }
    };
    load_groups();
    let on_reload = Callback::new(move |()| load_groups());

    // Dialog state.
    let editing = RwSignal::new(None::<Group>);
    let show_dialog = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let delete_id = RwSignal::new(None::<String>);
    let show_generate = RwSignal::new(false);

    let on_create = move |_| {
        editing.set(None);
        name.set(String::new());
        description.set(String::new());
        show_dialog.set(true);
    };
    let on_cancel = Callback::new(move |()| show_dialog.set(false));
    let on_delete_cancel = Callback::new(move |()| delete_id.set(None));
    let on_generate_cancel = Callback::new(move |()| show_generate.set(false));

    let nav_items = navigate;

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Grupy fiszek"</h1>
                <div class="admin-page__actions">
                    <button class="btn btn--primary" on:click=on_create>
                        "+ Nowa grupa"
                    </button>
                    <button class="btn" on:click=move |_| show_generate.set(true)>
                        "Wygeneruj zawartość"
                    </button>
                </div>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="admin-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Ładowanie grup..."</p> }
            >
                <div class="admin-page__list">
                    {
                        let nav_items = nav_items.clone();
                        move || {
                        groups
                            .get()
                            .into_iter()
                            .map(|group| {
                                let edit_target = group.clone();
                                let delete_target = group.id.clone();
                                let items_target = group.id.clone();
                                let nav = nav_items.clone();
                                view! {
                                    <div class="admin-row">
                                        <div class="admin-row__info">
                                            <span class="admin-row__name">{group.name.clone()}</span>
                                            <span class="admin-row__description">
                                                {group.description.clone().unwrap_or_default()}
                                            </span>
                                        </div>
                                        <span class="admin-row__meta">
                                            {group.language.map(|lang| lang.default_config().code)}
                                        </span>
                                        <span class="admin-row__meta">
                                            {group.total_items.map(|n| format!("{n} fiszek"))}
                                        </span>
                                        <div class="admin-row__actions">
                                            <button
                                                class="btn"
                                                on:click=move |_| {
                                                    nav(
                                                        &format!("/admin/groups/{items_target}"),
                                                        NavigateOptions::default(),
                                                    );
                                                }
                                            >
                                                "Fiszki"
                                            </button>
                                            <button
                                                class="btn"
                                                on:click=move |_| {
                                                    let group = edit_target.clone();
                                                    name.set(group.name.clone());
                                                    description.set(
                                                        group.description.clone().unwrap_or_default(),
                                                    );
                                                    editing.set(Some(group));
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
                <GroupDialog
                    editing=editing
                    name=name
                    description=description
                    on_cancel=on_cancel
                    on_saved=on_reload
                />
            </Show>
            <Show when=move || delete_id.get().is_some()>
                <DeleteGroupDialog
                    group_id=delete_id
                    on_cancel=on_delete_cancel
                    on_deleted=on_reload
                />
            </Show>
            <Show when=move || show_generate.get()>
                <GenerateContentDialog on_cancel=on_generate_cancel on_generated=on_reload/>
            </Show>
        </div>
    }
}

/// Modal dialog creating or editing a group, with inline field validation.
#[component]
fn GroupDialog(
    editing: RwSignal<Option<Group>>,
    name: RwSignal<String>,
    description: RwSignal<String>,
    on_cancel: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let language = expect_context::<RwSignal<LanguageState>>();
    let name_error = RwSignal::new(None::<&'static str>);
    let description_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let name_value = name.get();
        let description_value = description.get();
        let name_invalid = validate_name(&name_value);
        let description_invalid = validate_description(&description_value);
        name_error.set(name_invalid);
        description_error.set(description_invalid);
        if name_invalid.is_some() || description_invalid.is_some() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // New groups are tagged with the active language; edits leave
            // the tag untouched.
            let language_tag = match editing.get_untracked() {
                Some(_) => None,
                None => Some(language.get_untracked().active),
            };
            let payload = group_payload(&name_value, &description_value, language_tag);
            let result = match editing.get_untracked() {
                Some(group) => crate::net::api::update_group(&group.id, &payload)
                    .await
                    .map(|_| ()),
                None => crate::net::api::create_group(&payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    on_saved.run(());
                    on_cancel.run(());
                }
                Err(err) => log::error!("failed to save group: {err}"),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = language;
            busy.set(false);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || if editing.get().is_some() { "Edytuj grupę" } else { "Nowa grupa" }}</h2>
                <label class="dialog__label">
                    "Nazwa"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <Show when=move || name_error.get().is_some()>
                    <p class="dialog__error">{move || name_error.get().unwrap_or_default()}</p>
                </Show>
                <label class="dialog__label">
                    "Opis"
                    <textarea
                        class="dialog__input dialog__input--multiline"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || description_error.get().is_some()>
                    <p class="dialog__error">{move || description_error.get().unwrap_or_default()}</p>
                </Show>
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
fn DeleteGroupDialog(
    group_id: RwSignal<Option<String>>,
    on_cancel: Callback<()>,
    on_deleted: Callback<()>,
) -> impl IntoView {
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let Some(id) = group_id.get_untracked() else {
            return;
        };
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_group(&id).await {
                Ok(()) => {
                    on_deleted.run(());
                    on_cancel.run(());
                }
                Err(err) => log::error!("failed to delete group: {err}"),
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
                <h2>"Usuń grupę"</h2>
                <p class="dialog__danger">
                    "Ta operacja trwale usunie grupę razem z jej fiszkami."
                </p>
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

/// Modal dialog for server-side seeding of groups with AI content.
#[component]
fn GenerateContentDialog(on_cancel: Callback<()>, on_generated: Callback<()>) -> impl IntoView {
    let group_count = RwSignal::new("3".to_owned());
    let items_per_group = RwSignal::new("10".to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set("Generowanie... to może chwilę potrwać.".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = crate::net::types::GenerateContentRequest {
                group_count: parse_positive(&group_count.get_untracked(), 3),
                items_per_group: parse_positive(&items_per_group.get_untracked(), 10),
            };
            match crate::net::api::generate_initial_content(&request).await {
                Ok(resp) => {
                    info.set(resp.message);
                    on_generated.run(());
                }
                Err(err) => {
                    log::error!("content generation failed: {err}");
                    info.set("Generowanie nie powiodło się.".to_owned());
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            busy.set(false);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Wygeneruj zawartość startową"</h2>
                <label class="dialog__label">
                    "Liczba grup"
                    <input
                        class="dialog__input"
                        type="number"
                        min="1"
                        max="10"
                        prop:value=move || group_count.get()
                        on:input=move |ev| group_count.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Fiszek na grupę"
                    <input
                        class="dialog__input"
                        type="number"
                        min="1"
                        max="30"
                        prop:value=move || items_per_group.get()
                        on:input=move |ev| items_per_group.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__info">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Zamknij"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        "Generuj"
                    </button>
                </div>
            </div>
        </div>
    }
}
