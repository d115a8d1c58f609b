//! Client-side state stores shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `theme` and `language` hold the two persisted user preferences, `auth`
//! tracks the session, and `study` is the study-session machine owned by
//! the study page.

pub mod auth;
pub mod language;
pub mod study;
pub mod theme;
