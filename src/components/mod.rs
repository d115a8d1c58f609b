//! Shared UI building blocks used across pages.

pub mod app_header;
pub mod flip_card;
pub mod kawaii;
pub mod language_switcher;
pub mod theme_switcher;
