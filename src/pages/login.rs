//! Login page exchanging username + password for a bearer token.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

/// Pre-flight check before hitting the backend.
fn validate_credentials(username: &str, password: &str) -> Option<&'static str> {
    if username.trim().is_empty() || password.is_empty() {
        return Some("Podaj nazwę użytkownika i hasło.");
    }
    None
}

/// Map a request-layer error onto a user-facing message. Bad credentials
/// come back as 400 or 401 depending on the backend path.
#[cfg(any(test, feature = "hydrate"))]
fn login_error_message(err: &str) -> String {
    if err.ends_with("400") || err.ends_with("401") {
        "Nieprawidłowa nazwa użytkownika lub hasło.".to_owned()
    } else {
        format!("Logowanie nie powiodło się: {err}")
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in? This page has nothing to offer.
    let navigate = use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let password_value = password.get();
        if let Some(message) = validate_credentials(&username_value, &password_value) {
            info.set(message.to_owned());
            return;
        }
        busy.set(true);
        info.set("Logowanie...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&username_value, &password_value).await {
                Ok(token) => {
                    match crate::state::auth::begin_session(auth, &token.access_token).await {
                        Ok(()) => {
                            // Full reload so startup effects re-run with the
                            // new token (language fetch included).
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href("/");
                            }
                        }
                        Err(_) => {
                            info.set("Nie udało się pobrać profilu użytkownika.".to_owned());
                            busy.set(false);
                        }
                    }
                }
                Err(e) => {
                    info.set(login_error_message(&e));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Fiszki"</h1>
                <p class="login-card__subtitle">"Zaloguj się, aby rozpocząć naukę"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="nazwa użytkownika"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="hasło"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Zaloguj się"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
