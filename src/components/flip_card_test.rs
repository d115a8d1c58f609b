#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn back_face_is_named_in_the_target_language() {
    assert_eq!(back_face_label(TargetLanguage::Fr), "Français");
    assert_eq!(back_face_label(TargetLanguage::En), "English");
}
