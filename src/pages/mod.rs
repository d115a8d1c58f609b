//! Route-level screens.

pub mod admin_flashcards;
pub mod admin_group_items;
pub mod admin_groups;
pub mod dashboard;
pub mod login;
pub mod study;
