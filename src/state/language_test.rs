#![cfg(not(feature = "hydrate"))]

use super::*;

fn en_config() -> LanguageConfig {
    TargetLanguage::En.default_config()
}

// =====================
// Defaults
// =====================

#[test]
fn default_state_is_french_and_idle() {
    let state = LanguageState::default();
    assert_eq!(state.active, TargetLanguage::Fr);
    assert_eq!(state.config, TargetLanguage::Fr.default_config());
    assert!(!state.loading);
    assert_eq!(state.request_seq, 0);
}

#[test]
fn default_configs_carry_display_metadata() {
    let fr = TargetLanguage::Fr.default_config();
    assert_eq!(fr.name, "francuski");
    assert_eq!(fr.name_en, "French");
    assert_eq!(fr.code, "FR");
    assert_eq!(fr.flag, "🇫🇷");

    let en = TargetLanguage::En.default_config();
    assert_eq!(en.name, "angielski");
    assert_eq!(en.name_en, "English");
    assert_eq!(en.code, "EN");
    assert_eq!(en.flag, "🇬🇧");
}

#[test]
fn display_labels_follow_the_language() {
    assert_eq!(TargetLanguage::Fr.app_title(), "Nauka Francuskiego");
    assert_eq!(TargetLanguage::En.app_title(), "Nauka Angielskiego");
    assert_eq!(TargetLanguage::Fr.from_pl_label(), "PL → FR");
    assert_eq!(TargetLanguage::En.from_pl_label(), "PL → EN");
    assert_eq!(TargetLanguage::Fr.as_str(), "fr");
    assert_eq!(TargetLanguage::En.as_str(), "en");
}

// =====================
// Request lifecycle
// =====================

#[test]
fn begin_request_raises_loading_and_bumps_sequence() {
    let mut state = LanguageState::default();
    let first = begin_request(&mut state);
    assert_eq!(first, 1);
    assert!(state.loading);

    let second = begin_request(&mut state);
    assert_eq!(second, 2);
    assert_eq!(state.request_seq, 2);
}

#[test]
fn current_response_commits_language_and_clears_loading() {
    let mut state = LanguageState::default();
    let seq = begin_request(&mut state);

    assert!(adopt(&mut state, seq, TargetLanguage::En, en_config()));
    assert_eq!(state.active, TargetLanguage::En);
    assert_eq!(state.config, en_config());
    assert!(!state.loading);
}

#[test]
fn stale_response_is_discarded_wholesale() {
    let mut state = LanguageState::default();
    let stale = begin_request(&mut state);
    let _latest = begin_request(&mut state);

    let before = state.clone();
    assert!(!adopt(&mut state, stale, TargetLanguage::En, en_config()));
    assert_eq!(state, before);
}

#[test]
fn failure_clears_loading_but_keeps_selection() {
    let mut state = LanguageState::default();
    let seq = begin_request(&mut state);

    assert!(settle_failure(&mut state, seq));
    assert!(!state.loading);
    assert_eq!(state.active, TargetLanguage::Fr);
    assert_eq!(state.config, TargetLanguage::Fr.default_config());
}

#[test]
fn stale_failure_does_not_clear_loading() {
    let mut state = LanguageState::default();
    let stale = begin_request(&mut state);
    let _latest = begin_request(&mut state);

    assert!(!settle_failure(&mut state, stale));
    assert!(state.loading);
}

#[test]
fn overlapping_requests_are_last_request_wins() {
    // User clicks EN, then FR before EN's response lands. The EN response
    // arrives last on the wire but must not win.
    let mut state = LanguageState::default();
    let en_seq = begin_request(&mut state);
    let fr_seq = begin_request(&mut state);

    assert!(adopt(
        &mut state,
        fr_seq,
        TargetLanguage::Fr,
        TargetLanguage::Fr.default_config()
    ));
    assert!(!adopt(&mut state, en_seq, TargetLanguage::En, en_config()));

    assert_eq!(state.active, TargetLanguage::Fr);
    assert!(!state.loading);
}

#[test]
fn late_set_response_cannot_override_newer_fetch() {
    let mut state = LanguageState::default();
    let set_seq = begin_request(&mut state);
    let fetch_seq = begin_request(&mut state);

    // Fetch settles first with the server's answer.
    assert!(adopt(&mut state, fetch_seq, TargetLanguage::En, en_config()));
    // The older set's fallback path must now be a no-op.
    assert!(!adopt(
        &mut state,
        set_seq,
        TargetLanguage::Fr,
        TargetLanguage::Fr.default_config()
    ));
    assert_eq!(state.active, TargetLanguage::En);
}

// =====================
// Persistence format
// =====================

#[test]
fn snapshot_excludes_transient_fields() {
    let mut state = LanguageState::default();
    let seq = begin_request(&mut state);
    adopt(&mut state, seq, TargetLanguage::En, en_config());

    let json = serde_json::to_value(snapshot(&state)).unwrap();
    assert_eq!(json["activeLanguage"], "en");
    assert_eq!(json["config"]["name"], "angielski");
    assert_eq!(json["config"]["name_en"], "English");
    assert_eq!(json["config"]["code"], "EN");
    assert!(json.get("loading").is_none());
    assert!(json.get("isLoading").is_none());
    assert!(json.get("requestSeq").is_none());
}

#[test]
fn snapshot_without_config_still_parses() {
    let snap: LanguageSnapshot = serde_json::from_str(r#"{"activeLanguage":"en"}"#).unwrap();
    assert_eq!(snap.active_language, TargetLanguage::En);
    assert!(snap.config.is_none());
}

#[test]
fn snapshot_with_config_round_trips() {
    let stored = r#"{"activeLanguage":"fr","config":{"name":"francuski","name_en":"French","code":"FR","flag":"🇫🇷"}}"#;
    let snap: LanguageSnapshot = serde_json::from_str(stored).unwrap();
    assert_eq!(snap.active_language, TargetLanguage::Fr);
    assert_eq!(snap.config, Some(TargetLanguage::Fr.default_config()));
}

#[test]
fn load_language_defaults_without_storage() {
    assert_eq!(load_language(), LanguageState::default());
}

// =====================
// Cross-store scenario
// =====================

#[test]
fn theme_restyle_survives_a_language_adoption() {
    use crate::state::theme::{ThemeMode, ThemeState};

    let mut theme = ThemeState::default();
    let mut language = LanguageState::default();
    assert_eq!(theme.theme, ThemeMode::Light);
    assert_eq!(language.active, TargetLanguage::Fr);

    // Restyle first, then let an EN response land.
    theme = ThemeState {
        theme: ThemeMode::HelloKitty,
    };
    let seq = begin_request(&mut language);
    assert!(adopt(&mut language, seq, TargetLanguage::En, en_config()));

    assert_eq!(theme.theme, ThemeMode::HelloKitty);
    assert_eq!(language.active, TargetLanguage::En);
    assert_eq!(language.config.code, "EN");
}
