//! Active target-language store with server synchronization.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app teaches Polish speakers either French or English. Which one is
//! active controls page titles, direction labels and which translate API
//! the admin pages talk to, so the choice lives in a single store that the
//! whole tree reads through context.
//!
//! The preference is mirrored on the server (`/user/language`) so it follows
//! the user across devices. Both `set_language` and `fetch_language` go
//! through the same request lifecycle:
//!
//!   1. `begin_request` bumps `request_seq` and raises `loading`
//!   2. the HTTP call resolves
//!   3. the settle helper commits only if its sequence number is still the
//!      latest; anything older is discarded wholesale
//!
//! That sequence guard makes overlapping requests last-request-wins: the
//! user's most recent intent is never clobbered by a slow earlier response.
//!
//! TRADE-OFFS
//! ==========
//! When the server rejects or never receives a language change we still
//! adopt it locally and persist it. The user asked for French, they get
//! French; the server copy catches up on the next successful sync. The cost
//! is a possible mismatch with another device until then.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use crate::net::types::LanguageResponse;
use crate::util::storage;

const STORAGE_KEY: &str = "language-storage";

/// The language being studied. Polish is always the source language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    #[default]
    Fr,
    En,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 2] = [TargetLanguage::Fr, TargetLanguage::En];

    /// Lowercase wire code, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            TargetLanguage::Fr => "fr",
            TargetLanguage::En => "en",
        }
    }

    /// Built-in display config, used as the offline fallback when the
    /// server copy is unavailable.
    pub fn default_config(self) -> LanguageConfig {
        match self {
            TargetLanguage::Fr => LanguageConfig {
                name: "francuski".to_owned(),
                name_en: "French".to_owned(),
                code: "FR".to_owned(),
                flag: "🇫🇷".to_owned(),
            },
            TargetLanguage::En => LanguageConfig {
                name: "angielski".to_owned(),
                name_en: "English".to_owned(),
                code: "EN".to_owned(),
                flag: "🇬🇧".to_owned(),
            },
        }
    }

    /// Window/header title for the active language.
    pub fn app_title(self) -> &'static str {
        match self {
            TargetLanguage::Fr => "Nauka Francuskiego",
            TargetLanguage::En => "Nauka Angielskiego",
        }
    }

    /// Direction label for Polish-to-target translation lists.
    pub fn from_pl_label(self) -> &'static str {
        match self {
            TargetLanguage::Fr => "PL → FR",
            TargetLanguage::En => "PL → EN",
        }
    }
}

/// Display metadata for a target language.
///
/// Normally this arrives from the server together with the language code;
/// `TargetLanguage::default_config` provides the same values locally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Polish name, lowercase ("francuski").
    pub name: String,
    /// English name ("French").
    pub name_en: String,
    /// Uppercase short code ("FR").
    pub code: String,
    /// Flag emoji for compact UI spots.
    pub flag: String,
}

/// Language selection state, provided as `RwSignal<LanguageState>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageState {
    pub active: TargetLanguage,
    pub config: LanguageConfig,
    /// True while a set or fetch request is in flight.
    pub loading: bool,
    /// Monotonic counter identifying the newest in-flight request.
    pub request_seq: u64,
}

impl Default for LanguageState {
    fn default() -> Self {
        let active = TargetLanguage::default();
        Self {
            config: active.default_config(),
            active,
            loading: false,
            request_seq: 0,
        }
    }
}

/// Persisted subset of [`LanguageState`]. `loading` and `request_seq` are
/// transient and never stored.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LanguageSnapshot {
    active_language: TargetLanguage,
    #[serde(default)]
    config: Option<LanguageConfig>,
}

// =====================
// Request lifecycle
// =====================

/// Mark a request as started and return its sequence number.
#[cfg(any(test, feature = "hydrate"))]
fn begin_request(state: &mut LanguageState) -> u64 {
    state.request_seq += 1;
    state.loading = true;
    state.request_seq
}

/// True when `seq` identifies the newest request and may settle the state.
#[cfg(any(test, feature = "hydrate"))]
fn is_current(state: &LanguageState, seq: u64) -> bool {
    state.request_seq == seq
}

/// Adopt a language and its config if `seq` is still current.
#[cfg(any(test, feature = "hydrate"))]
fn adopt(
    state: &mut LanguageState,
    seq: u64,
    active: TargetLanguage,
    config: LanguageConfig,
) -> bool {
    if !is_current(state, seq) {
        return false;
    }
    state.active = active;
    state.config = config;
    state.loading = false;
    true
}

/// Clear the loading flag without touching the selection, if `seq` is
/// still current. Used when a fetch fails and the state should stand.
#[cfg(any(test, feature = "hydrate"))]
fn settle_failure(state: &mut LanguageState, seq: u64) -> bool {
    if !is_current(state, seq) {
        return false;
    }
    state.loading = false;
    true
}

#[cfg(any(test, feature = "hydrate"))]
fn snapshot(state: &LanguageState) -> LanguageSnapshot {
    LanguageSnapshot {
        active_language: state.active,
        config: Some(state.config.clone()),
    }
}

// =====================
// Store operations
// =====================

/// Rehydrate the language selection from localStorage.
///
/// A stored snapshot without a config (or with one that fails to parse)
/// falls back to the built-in config for the stored language.
pub fn load_language() -> LanguageState {
    let Some(snap) = storage::load_json::<LanguageSnapshot>(STORAGE_KEY) else {
        return LanguageState::default();
    };
    let active = snap.active_language;
    LanguageState {
        config: snap.config.unwrap_or_else(|| active.default_config()),
        active,
        loading: false,
        request_seq: 0,
    }
}

/// Switch the active language, telling the server first.
///
/// On success the server's response (language plus config) is adopted. On
/// failure the requested language is adopted anyway with the built-in
/// config, so the UI always reflects what the user just picked. Either
/// way the result is persisted, and a response that lost the sequence race
/// is dropped without touching state.
pub async fn set_language(state: RwSignal<LanguageState>, next: TargetLanguage) {
    #[cfg(feature = "hydrate")]
    {
        let mut seq = 0;
        state.update(|s| seq = begin_request(s));

        let mut committed = false;
        match crate::net::api::update_user_language(next).await {
            Ok(resp) => {
                state.update(|s| committed = adopt(s, seq, resp.language, resp.config));
            }
            Err(err) => {
                log::error!("failed to set language: {err}");
                state.update(|s| committed = adopt(s, seq, next, next.default_config()));
            }
        }
        if committed {
            state.with_untracked(|s| storage::save_json(STORAGE_KEY, &snapshot(s)));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, next);
    }
}

/// Pull the server-side language selection into the store.
///
/// On failure the current selection stands and only the loading flag is
/// cleared. Stale responses are discarded by the sequence guard.
pub async fn fetch_language(state: RwSignal<LanguageState>) {
    #[cfg(feature = "hydrate")]
    {
        let mut seq = 0;
        state.update(|s| seq = begin_request(s));

        match crate::net::api::fetch_user_language().await {
            Ok(LanguageResponse { language, config }) => {
                let mut committed = false;
                state.update(|s| committed = adopt(s, seq, language, config));
                if committed {
                    state.with_untracked(|s| storage::save_json(STORAGE_KEY, &snapshot(s)));
                }
            }
            Err(err) => {
                log::error!("failed to fetch language: {err}");
                state.update(|s| {
                    settle_failure(s, seq);
                });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
    }
}
