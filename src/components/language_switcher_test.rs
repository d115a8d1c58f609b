#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn option_texts_cover_both_languages() {
    assert_eq!(option_label(TargetLanguage::Fr), "Francuski");
    assert_eq!(option_label(TargetLanguage::En), "Angielski");
    assert_eq!(option_code(TargetLanguage::Fr), "FR");
    assert_eq!(option_code(TargetLanguage::En), "EN");
}

#[test]
fn option_flags_are_distinct() {
    assert_ne!(
        option_flag(TargetLanguage::Fr),
        option_flag(TargetLanguage::En)
    );
}
