//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend schemas verbatim (snake_case), so these
//! types serialize straight into request bodies and parse responses without
//! rename gymnastics. Optional response fields stay `Option` rather than
//! defaulting, keeping "server did not say" distinguishable from a value.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::language::{LanguageConfig, TargetLanguage};

/// Bearer token issued by `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// An account as returned by `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Superusers see the admin pages and content-management actions.
    pub is_superuser: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Payload of `GET`/`POST /user/language`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LanguageResponse {
    pub language: TargetLanguage,
    pub config: LanguageConfig,
}

/// A flashcard group (collection) as stored on the server.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Which target language the group's content is for.
    pub language: Option<TargetLanguage>,
    pub total_items: Option<u32>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Create/update body for groups. `None` fields are omitted from the JSON
/// so the server keeps its defaults.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<TargetLanguage>,
}

/// A flashcard with Polish front and target-language back.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Flashcard {
    pub id: String,
    pub text_pl: String,
    pub text_target: String,
    pub image_url: Option<String>,
    pub learned: Option<bool>,
    pub group_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Create/update body for flashcards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FlashcardPayload {
    pub text_pl: String,
    pub text_target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// A translation exercise item. `text_pl` is the question side and
/// `text_target` the expected answer for the PL-to-target direction.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TranslateItem {
    pub id: String,
    pub text_pl: String,
    pub text_target: String,
    pub category: Option<String>,
    pub group_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Create/update body for translation items.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TranslateItemPayload {
    pub text_pl: String,
    pub text_target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// Body of `POST .../items/batch`, saving a whole generated set at once.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatchCreateItems {
    pub items: Vec<TranslateItemPayload>,
    pub group_id: String,
}

/// Body of `POST /api/ai/generate`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerateRequest {
    /// CEFR level, "A1" through "C2".
    pub level: String,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// One AI-proposed translation pair, editable before saving.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedItem {
    pub text_pl: String,
    pub text_target: String,
    pub category: Option<String>,
}

/// Body of `POST /api/admin/generate-initial-content`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerateContentRequest {
    pub group_count: u32,
    pub items_per_group: u32,
}

/// Outcome of the bulk content generation run.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GenerateContentResponse {
    pub success: bool,
    pub message: String,
    pub groups_created: u32,
    pub items_created: u32,
}

/// A group as listed by `GET /study/groups`, with learning progress.
///
/// Count fields exist in two generations: `total_items`/`learned_items` on
/// newer rows, `total_fiszki`/`learned_fiszki` on legacy ones. Use
/// [`StudyGroup::total`] and [`StudyGroup::learned`] instead of reading the
/// fields directly.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StudyGroup {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub language: Option<TargetLanguage>,
    pub total_items: Option<u32>,
    pub learned_items: Option<u32>,
    pub total_fiszki: Option<u32>,
    pub learned_fiszki: Option<u32>,
    pub updated_at: Option<String>,
}

impl StudyGroup {
    pub fn total(&self) -> u32 {
        self.total_items.or(self.total_fiszki).unwrap_or(0)
    }

    pub fn learned(&self) -> u32 {
        self.learned_items.or(self.learned_fiszki).unwrap_or(0)
    }

    /// Every card in the group has been learned at least once.
    pub fn is_complete(&self) -> bool {
        let total = self.total();
        total > 0 && self.learned() == total
    }

    /// Case-insensitive match against name and description, for the
    /// selection screen's search box.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
    }
}

/// A card inside a study session, as served by `POST /study/fiszki`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StudyFlashcard {
    pub id: String,
    pub text_pl: String,
    pub text_target: String,
    pub image_url: Option<String>,
}

/// Body of `POST /study/fiszki`, requesting a session's card set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StudySessionRequest {
    pub group_ids: Vec<String>,
    pub include_learned: bool,
    pub limit: u32,
}

/// Body of `POST /study/progress`, reporting one card's outcome.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProgressUpdate {
    pub fiszka_id: String,
    pub learned: bool,
}
