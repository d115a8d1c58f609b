//! Admin page for one group's translation items, including AI generation
//! with an editable preview before saving.
//!
//! SYSTEM CONTEXT
//! ==============
//! Items live under the language-pair API (`/translate-pl-fr` or
//! `/translate-pl-en`), so every request here depends on the active target
//! language; switching the language refetches the list.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::{BatchCreateItems, GeneratedItem, TranslateItem, TranslateItemPayload};
use crate::state::auth::AuthState;
use crate::state::language::LanguageState;
use crate::util::guards;

#[cfg(test)]
#[path = "admin_group_items_test.rs"]
mod admin_group_items_test;

/// CEFR levels offered by the generation dialog.
const LEVELS: [&str; 6] = ["A1", "A2", "B1", "B2", "C1", "C2"];

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

/// Build an item body from dialog inputs. An empty category is omitted.
fn item_payload(
    text_pl: &str,
    text_target: &str,
    category: &str,
    group_id: &str,
) -> TranslateItemPayload {
    let category = category.trim();
    TranslateItemPayload {
        text_pl: text_pl.trim().to_owned(),
        text_target: text_target.trim().to_owned(),
        category: if category.is_empty() {
            None
        } else {
            Some(category.to_owned())
        },
        group_id: Some(group_id.to_owned()),
    }
}

/// Turn the edited preview into a batch body. Rows that lost either side
/// during editing are dropped; the batch-level group id governs, so the
/// per-item one stays empty.
fn batch_from_preview(items: &[GeneratedItem], group_id: &str) -> BatchCreateItems {
    BatchCreateItems {
        items: items
            .iter()
            .filter(|item| {
                !item.text_pl.trim().is_empty() && !item.text_target.trim().is_empty()
            })
            .map(|item| TranslateItemPayload {
                text_pl: item.text_pl.trim().to_owned(),
                text_target: item.text_target.trim().to_owned(),
                category: item
                    .category
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_owned),
                group_id: None,
            })
            .collect(),
        group_id: group_id.to_owned(),
    }
}

#[component]
pub fn AdminGroupItemsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let language = expect_context::<RwSignal<LanguageState>>();
    let navigate = use_navigate();

    guards::install_admin_guard(auth, navigate.clone());

    let params = use_params_map();
    let group_id = move || params.read().get("id").unwrap_or_default();

    let group_name = RwSignal::new(String::new());
    let items = RwSignal::new(Vec::<TranslateItem>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0_u64);
    let on_reload = Callback::new(move |()| reload.update(|n| *n += 1));

    // Refetch on route change, language change, or an explicit reload bump.
    Effect::new(move || {
        let _ = reload.get();
        let id = group_id();
        let lang = language.get().active;
        if id.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_translate_items(lang, &id).await {
                    Ok(list) => {
                        items.set(list);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err)),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, lang);
        }
    });

    // The list endpoint does not carry the group name; look it up once.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let id = params.get_untracked().get("id").unwrap_or_default();
            if id.is_empty() {
                return;
            }
            if let Ok(groups) = crate::net::api::fetch_groups().await {
                if let Some(group) = groups.into_iter().find(|g| g.id == id) {
                    group_name.set(group.name);
                }
            }
        });
    }

    // Dialog state.
    let editing = RwSignal::new(None::<TranslateItem>);
    let show_dialog = RwSignal::new(false);
    let text_pl = RwSignal::new(String::new());
    let text_target = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let delete_id = RwSignal::new(None::<String>);
    let show_generate = RwSignal::new(false);

    let on_create = move |_| {
        editing.set(None);
        text_pl.set(String::new());
        text_target.set(String::new());
        category.set(String::new());
        show_dialog.set(true);
    };
    let on_cancel = Callback::new(move |()| show_dialog.set(false));
    let on_delete_cancel = Callback::new(move |()| delete_id.set(None));
    let on_generate_cancel = Callback::new(move |()| show_generate.set(false));

    let nav_back = navigate;

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <button
                    class="btn admin-page__back"
                    on:click={
                        let nav = nav_back.clone();
                        move |_| nav("/admin/groups", NavigateOptions::default())
                    }
                >
                    "← Grupy"
                </button>
                <h1>
                    {move || {
                        let name = group_name.get();
                        if name.is_empty() { "Fiszki w grupie".to_owned() } else { name }
                    }}
                </h1>
                <span class="admin-page__direction">
                    {move || language.get().active.from_pl_label()}
                </span>
                <div class="admin-page__actions">
                    <button class="btn btn--primary" on:click=on_create>
                        "+ Dodaj"
                    </button>
                    <button class="btn" on:click=move |_| show_generate.set(true)>
                        "Generuj AI"
                    </button>
                </div>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="admin-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Ładowanie..."</p> }
            >
                <div class="admin-page__list">
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|item| {
                                let edit_target = item.clone();
                                let delete_target = item.id.clone();
                                view! {
                                    <div class="admin-row">
                                        <div class="admin-row__info">
                                            <span class="admin-row__name">{item.text_pl.clone()}</span>
                                            <span class="admin-row__description">
                                                {item.text_target.clone()}
                                            </span>
                                        </div>
                                        <span class="admin-row__meta">
                                            {item.category.clone().unwrap_or_default()}
                                        </span>
                                        <div class="admin-row__actions">
                                            <button
                                                class="btn"
                                                on:click=move |_| {
                                                    let item = edit_target.clone();
                                                    text_pl.set(item.text_pl.clone());
                                                    text_target.set(item.text_target.clone());
                                                    category.set(
                                                        item.category.clone().unwrap_or_default(),
                                                    );
                                                    editing.set(Some(item));
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
                <ItemDialog
                    editing=editing
                    text_pl=text_pl
                    text_target=text_target
                    category=category
                    on_cancel=on_cancel
                    on_saved=on_reload
                />
            </Show>
            <Show when=move || delete_id.get().is_some()>
                <DeleteItemDialog
                    item_id=delete_id
                    on_cancel=on_delete_cancel
                    on_deleted=on_reload
                />
            </Show>
            <Show when=move || show_generate.get()>
                <GenerateItemsDialog on_cancel=on_generate_cancel on_saved=on_reload/>
            </Show>
        </div>
    }
}

/// Modal dialog creating or editing one translation item.
#[component]
fn ItemDialog(
    editing: RwSignal<Option<TranslateItem>>,
    text_pl: RwSignal<String>,
    text_target: RwSignal<String>,
    category: RwSignal<String>,
    on_cancel: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let language = expect_context::<RwSignal<LanguageState>>();
    let params = use_params_map();
    let pl_error = RwSignal::new(None::<&'static str>);
    let target_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let pl_value = text_pl.get();
        let target_value = text_target.get();
        let category_value = category.get();
        let pl_invalid = validate_text_pl(&pl_value);
        let target_invalid = validate_text_target(&target_value);
        pl_error.set(pl_invalid);
        target_error.set(target_invalid);
        if pl_invalid.is_some() || target_invalid.is_some() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let lang = language.get_untracked().active;
            let id = params.get_untracked().get("id").unwrap_or_default();
            let payload = item_payload(&pl_value, &target_value, &category_value, &id);
            let result = match editing.get_untracked() {
                Some(item) => crate::net::api::update_translate_item(lang, &item.id, &payload)
                    .await
                    .map(|_| ()),
                None => crate::net::api::create_translate_item(lang, &payload)
                    .await
                    .map(|_| ()),
            };
            match result {
                Ok(()) => {
                    on_saved.run(());
                    on_cancel.run(());
                }
                Err(err) => log::error!("failed to save item: {err}"),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (language, params, category_value);
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
                    "Kategoria (opcjonalnie)"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
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
fn DeleteItemDialog(
    item_id: RwSignal<Option<String>>,
    on_cancel: Callback<()>,
    on_deleted: Callback<()>,
) -> impl IntoView {
    let language = expect_context::<RwSignal<LanguageState>>();
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let Some(id) = item_id.get_untracked() else {
            return;
        };
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let lang = language.get_untracked().active;
            match crate::net::api::delete_translate_item(lang, &id).await {
                Ok(()) => {
                    on_deleted.run(());
                    on_cancel.run(());
                }
                Err(err) => log::error!("failed to delete item: {err}"),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (language, id);
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

/// Modal dialog asking the AI service for item proposals, shown as an
/// editable list before anything is saved.
#[component]
fn GenerateItemsDialog(on_cancel: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let language = expect_context::<RwSignal<LanguageState>>();
    let params = use_params_map();
    let level = RwSignal::new("A1".to_owned());
    let count = RwSignal::new("10".to_owned());
    let category = RwSignal::new(String::new());
    let preview = RwSignal::new(Vec::<GeneratedItem>::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let generate = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set("Generowanie propozycji...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let category_value = category.get_untracked();
            let category_value = category_value.trim();
            let request = crate::net::types::GenerateRequest {
                level: level.get_untracked(),
                count: count
                    .get_untracked()
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|n| *n >= 1)
                    .unwrap_or(10),
                category: if category_value.is_empty() {
                    None
                } else {
                    Some(category_value.to_owned())
                },
            };
            match crate::net::api::generate_items(&request).await {
                Ok(generated) => {
                    info.set(format!("Wygenerowano {} propozycji.", generated.len()));
                    preview.set(generated);
                }
                Err(err) => {
                    log::error!("generation failed: {err}");
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

    let save_all = Callback::new(move |()| {
        if busy.get() || preview.get().is_empty() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let lang = language.get_untracked().active;
            let id = params.get_untracked().get("id").unwrap_or_default();
            let batch = batch_from_preview(&preview.get_untracked(), &id);
            if batch.items.is_empty() {
                info.set("Brak kompletnych propozycji do zapisania.".to_owned());
                busy.set(false);
                return;
            }
            match crate::net::api::batch_create_translate_items(lang, &batch).await {
                Ok(saved) => {
                    info.set(format!("Zapisano {} fiszek.", saved.len()));
                    preview.set(Vec::new());
                    on_saved.run(());
                    on_cancel.run(());
                }
                Err(err) => log::error!("batch save failed: {err}"),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (language, params);
            busy.set(false);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Generuj fiszki AI"</h2>
                <div class="dialog__row">
                    <label class="dialog__label">
                        "Poziom"
                        <select
                            class="dialog__input"
                            prop:value=move || level.get()
                            on:change=move |ev| level.set(event_target_value(&ev))
                        >
                            {LEVELS
                                .iter()
                                .map(|l| view! { <option value=*l>{*l}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Liczba"
                        <input
                            class="dialog__input"
                            type="number"
                            min="1"
                            max="30"
                            prop:value=move || count.get()
                            on:input=move |ev| count.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Kategoria (opcjonalnie)"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="np. zwierzęta"
                            prop:value=move || category.get()
                            on:input=move |ev| category.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__info">{move || info.get()}</p>
                </Show>

                <Show when=move || !preview.get().is_empty()>
                    <div class="generate-preview">
                        {move || {
                            preview
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(idx, item)| {
                                    view! {
                                        <div class="generate-preview__row">
                                            <input
                                                class="dialog__input"
                                                type="text"
                                                prop:value=item.text_pl.clone()
                                                on:input=move |ev| {
                                                    preview.update(|rows| {
                                                        if let Some(row) = rows.get_mut(idx) {
                                                            row.text_pl = event_target_value(&ev);
                                                        }
                                                    });
                                                }
                                            />
                                            <input
                                                class="dialog__input"
                                                type="text"
                                                prop:value=item.text_target.clone()
                                                on:input=move |ev| {
                                                    preview.update(|rows| {
                                                        if let Some(row) = rows.get_mut(idx) {
                                                            row.text_target = event_target_value(&ev);
                                                        }
                                                    });
                                                }
                                            />
                                            <button
                                                class="btn btn--danger generate-preview__remove"
                                                on:click=move |_| {
                                                    preview.update(|rows| {
                                                        if idx < rows.len() {
                                                            rows.remove(idx);
                                                        }
                                                    });
                                                }
                                            >
                                                "✕"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Anuluj"
                    </button>
                    <button
                        class="btn"
                        disabled=move || busy.get()
                        on:click=move |_| generate.run(())
                    >
                        "Generuj"
                    </button>
                    <Show when=move || !preview.get().is_empty()>
                        <button
                            class="btn btn--primary"
                            disabled=move || busy.get()
                            on:click=move |_| save_all.run(())
                        >
                            {move || format!("Zapisz wszystkie ({})", preview.get().len())}
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
