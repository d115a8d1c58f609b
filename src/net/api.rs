//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token from localStorage attached to every request that needs one.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so network
//! failures degrade UI behavior without crashing hydration. A 401 on an
//! authorized call drops the stored token and sends the browser to
//! `/login`; the session is gone either way.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::{
    BatchCreateItems, Flashcard, FlashcardPayload, GenerateContentRequest,
    GenerateContentResponse, GenerateRequest, GeneratedItem, Group, GroupPayload,
    LanguageResponse, ProgressUpdate, StudyFlashcard, StudyGroup, StudySessionRequest,
    TokenResponse, TranslateItem, TranslateItemPayload, User,
};
use crate::state::language::TargetLanguage;

// =====================
// Path + message helpers
// =====================

#[cfg(any(test, feature = "hydrate"))]
fn flashcards_path(group_id: Option<&str>) -> String {
    match group_id {
        Some(id) => format!("/fiszki/?group_id={id}"),
        None => "/fiszki/".to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn flashcard_path(id: &str) -> String {
    format!("/fiszki/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn group_path(id: &str) -> String {
    format!("/fiszki/groups/{id}")
}

/// Root of the translate API for the active language pair.
#[cfg(any(test, feature = "hydrate"))]
fn translate_base(lang: TargetLanguage) -> String {
    format!("/translate-pl-{}", lang.as_str())
}

#[cfg(any(test, feature = "hydrate"))]
fn translate_items_path(lang: TargetLanguage, group_id: &str) -> String {
    format!("{}/items/?group_id={group_id}", translate_base(lang))
}

#[cfg(any(test, feature = "hydrate"))]
fn translate_items_root(lang: TargetLanguage) -> String {
    format!("{}/items/", translate_base(lang))
}

#[cfg(any(test, feature = "hydrate"))]
fn translate_item_path(lang: TargetLanguage, id: &str) -> String {
    format!("{}/items/{id}", translate_base(lang))
}

#[cfg(any(test, feature = "hydrate"))]
fn translate_batch_path(lang: TargetLanguage) -> String {
    format!("{}/items/batch", translate_base(lang))
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Encode key/value pairs as `application/x-www-form-urlencoded`.
#[cfg(any(test, feature = "hydrate"))]
fn form_urlencode(pairs: &[(&str, &str)]) -> String {
    use std::fmt::Write as _;

    fn encode(value: &str, out: &mut String) {
        for byte in value.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    out.push(char::from(byte));
                }
                _ => {
                    let _ = write!(out, "%{byte:02X}");
                }
            }
        }
    }

    let mut out = String::new();
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        encode(key, &mut out);
        out.push('=');
        encode(value, &mut out);
    }
    out
}

// =====================
// Request plumbing (browser only)
// =====================

/// Attach the stored bearer token, if any.
#[cfg(feature = "hydrate")]
fn authorized(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::storage::load_string(crate::state::auth::TOKEN_KEY) {
        Some(token) => req.header("Authorization", &format!("Bearer {token}")),
        None => req,
    }
}

#[cfg(feature = "hydrate")]
fn force_login_redirect() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

/// Reject non-success responses. A 401 additionally tears the token down
/// and redirects, since every later call would fail the same way.
#[cfg(feature = "hydrate")]
fn check(
    resp: gloo_net::http::Response,
    action: &str,
) -> Result<gloo_net::http::Response, String> {
    if resp.status() == 401 {
        crate::util::storage::remove(crate::state::auth::TOKEN_KEY);
        force_login_redirect();
        return Err(request_failed_message(action, 401));
    }
    if !resp.ok() {
        return Err(request_failed_message(action, resp.status()));
    }
    Ok(resp)
}

// =====================
// Auth
// =====================

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// The backend expects an OAuth2 password form, not JSON.
///
/// # Errors
///
/// Returns an error string when the request fails or is rejected.
pub async fn login(username: &str, password: &str) -> Result<TokenResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = form_urlencode(&[("username", username), ("password", password)]);
        let resp = gloo_net::http::Request::post("/auth/login")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("login", resp.status()));
        }
        resp.json::<TokenResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the currently authenticated user from `/auth/me`.
/// Returns `None` if not authenticated or on the server; no redirect here,
/// the caller decides what a dead session means for the current route.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get("/auth/me"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = authorized(gloo_net::http::Request::post("/auth/logout"))
            .send()
            .await;
    }
}

// =====================
// Language preference
// =====================

/// Read the server-side language selection.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn fetch_user_language() -> Result<LanguageResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get("/user/language"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let resp = check(resp, "language fetch")?;
        resp.json::<LanguageResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Store a new language selection on the server.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn update_user_language(lang: TargetLanguage) -> Result<LanguageResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct LanguageUpdate {
            language: TargetLanguage,
        }
        let resp = authorized(gloo_net::http::Request::post("/user/language"))
            .json(&LanguageUpdate { language: lang })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let resp = check(resp, "language update")?;
        resp.json::<LanguageResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lang;
        Err("not available on server".to_owned())
    }
}

// =====================
// Flashcard groups
// =====================

/// List all flashcard groups.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn fetch_groups() -> Result<Vec<Group>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get("/fiszki/groups/"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let resp = check(resp, "group list")?;
        resp.json::<Vec<Group>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a flashcard group.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn create_group(payload: &GroupPayload) -> Result<Group, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post("/fiszki/groups/"))
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let resp = check(resp, "group create")?;
        resp.json::<Group>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}

/// Update a flashcard group.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn update_group(id: &str, payload: &GroupPayload) -> Result<Group, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::put(&group_path(id)))
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let resp = check(resp, "group update")?;
        resp.json::<Group>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err("not available on server".to_owned())
    }
}

/// Delete a flashcard group.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn delete_group(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::delete(&group_path(id)))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        check(resp, "group delete").map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

// =====================
// Flashcards
// =====================

/// List flashcards, optionally restricted to one group.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn fetch_flashcards(group_id: Option<&str>) -> Result<Vec<Flashcard>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get(&flashcards_path(group_id)))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let resp = check(resp, "flashcard list")?;
        resp.json::<Vec<Flashcard>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = group_id;
        Err("not available on server".to_owned())
    }
}

/// Create a flashcard.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn create_flashcard(payload: &FlashcardPayload) -> Result<Flashcard, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post("/fiszki/"))
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let resp = check(resp, "flashcard create")?;
        resp.json::<Flashcard>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}

/// Update a flashcard.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn update_flashcard(id: &str, payload: &FlashcardPayload) -> Result<Flashcard, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::put(&flashcard_path(id)))
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let resp = check(resp, "flashcard update")?;
        resp.json::<Flashcard>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err("not available on server".to_owned())
    }
}

/// Delete a flashcard.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn delete_flashcard(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::delete(&flashcard_path(id)))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        check(resp, "flashcard delete").map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

// =====================
// Translation items (per language pair)
// =====================

/// List one group's translation items for the given language pair.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn fetch_translate_items(
    lang: TargetLanguage,
    group_id: &str,
) -> Result<Vec<TranslateItem>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get(&translate_items_path(
            lang, group_id,
        )))
        .send()
        .await
        .map_err(|e| e.to_string())?;
        let resp = check(resp, "item list")?;
        resp.json::<Vec<TranslateItem>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (lang, group_id);
        Err("not available on server".to_owned())
    }
}

/// Create a translation item.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn create_translate_item(
    lang: TargetLanguage,
    payload: &TranslateItemPayload,
) -> Result<TranslateItem, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post(&translate_items_root(lang)))
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let resp = check(resp, "item create")?;
        resp.json::<TranslateItem>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (lang, payload);
        Err("not available on server".to_owned())
    }
}

/// Update a translation item.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn update_translate_item(
    lang: TargetLanguage,
    id: &str,
    payload: &TranslateItemPayload,
) -> Result<TranslateItem, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::put(&translate_item_path(lang, id)))
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let resp = check(resp, "item update")?;
        resp.json::<TranslateItem>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (lang, id, payload);
        Err("not available on server".to_owned())
    }
}

/// Delete a translation item.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn delete_translate_item(lang: TargetLanguage, id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::delete(&translate_item_path(
            lang, id,
        )))
        .send()
        .await
        .map_err(|e| e.to_string())?;
        check(resp, "item delete").map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (lang, id);
        Err("not available on server".to_owned())
    }
}

/// Save a whole set of items in one request, used after AI generation.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn batch_create_translate_items(
    lang: TargetLanguage,
    batch: &BatchCreateItems,
) -> Result<Vec<TranslateItem>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post(&translate_batch_path(lang)))
            .json(batch)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let resp = check(resp, "batch create")?;
        resp.json::<Vec<TranslateItem>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (lang, batch);
        Err("not available on server".to_owned())
    }
}

// =====================
// AI generation
// =====================

/// Ask the AI service for translation-item proposals.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn generate_items(request: &GenerateRequest) -> Result<Vec<GeneratedItem>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post("/api/ai/generate"))
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let resp = check(resp, "generate")?;
        resp.json::<Vec<GeneratedItem>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Kick off server-side seeding of groups and items.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn generate_initial_content(
    request: &GenerateContentRequest,
) -> Result<GenerateContentResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post(
            "/api/admin/generate-initial-content",
        ))
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
        let resp = check(resp, "content generation")?;
        resp.json::<GenerateContentResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

// =====================
// Study sessions
// =====================

/// List groups with study progress for the selection screen.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn fetch_study_groups() -> Result<Vec<StudyGroup>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get("/study/groups"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let resp = check(resp, "study group list")?;
        resp.json::<Vec<StudyGroup>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Request a card set for the selected groups.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn start_study_session(
    request: &StudySessionRequest,
) -> Result<Vec<StudyFlashcard>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post("/study/fiszki"))
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let resp = check(resp, "session start")?;
        resp.json::<Vec<StudyFlashcard>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Report one card's outcome. Failures are the caller's to ignore; the
/// study flow never blocks on progress writes.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn submit_progress(update: &ProgressUpdate) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post("/study/progress"))
            .json(update)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        check(resp, "progress update").map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = update;
        Err("not available on server".to_owned())
    }
}
