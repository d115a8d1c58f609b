#![cfg(not(feature = "hydrate"))]

use super::*;

fn generated(pl: &str, target: &str, category: Option<&str>) -> GeneratedItem {
    GeneratedItem {
        text_pl: pl.to_owned(),
        text_target: target.to_owned(),
        category: category.map(str::to_owned),
    }
}

// =====================
// Validation
// =====================

#[test]
fn both_text_sides_are_required() {
    assert_eq!(validate_text_pl(""), Some("Tekst polski jest wymagany"));
    assert_eq!(validate_text_pl("  "), Some("Tekst polski jest wymagany"));
    assert_eq!(validate_text_pl("kot"), None);

    assert_eq!(validate_text_target(""), Some("Tłumaczenie jest wymagane"));
    assert_eq!(validate_text_target("chat"), None);
}

// =====================
// Payload shape
// =====================

#[test]
fn item_payload_trims_and_omits_empty_category() {
    let payload = item_payload(" kot ", " chat ", "  ", "g1");
    assert_eq!(payload.text_pl, "kot");
    assert_eq!(payload.text_target, "chat");
    assert_eq!(payload.category, None);
    assert_eq!(payload.group_id, Some("g1".to_owned()));
}

#[test]
fn item_payload_keeps_category() {
    let payload = item_payload("pies", "chien", " zwierzęta ", "g1");
    assert_eq!(payload.category, Some("zwierzęta".to_owned()));
}

// =====================
// Batch building
// =====================

#[test]
fn batch_drops_incomplete_rows() {
    let rows = vec![
        generated("kot", "chat", Some("zwierzęta")),
        generated("", "chien", None),
        generated("ryba", "   ", None),
        generated("mysz", "souris", None),
    ];
    let batch = batch_from_preview(&rows, "g7");
    assert_eq!(batch.group_id, "g7");
    assert_eq!(batch.items.len(), 2);
    assert_eq!(batch.items[0].text_pl, "kot");
    assert_eq!(batch.items[0].category, Some("zwierzęta".to_owned()));
    assert_eq!(batch.items[1].text_pl, "mysz");
}

#[test]
fn batch_rows_leave_group_to_the_batch_level() {
    let rows = vec![generated("kot", "chat", None)];
    let batch = batch_from_preview(&rows, "g7");
    assert_eq!(batch.items[0].group_id, None);
}

#[test]
fn batch_trims_whitespace_and_blank_categories() {
    let rows = vec![generated(" kot ", " chat ", Some("  "))];
    let batch = batch_from_preview(&rows, "g1");
    assert_eq!(batch.items[0].text_pl, "kot");
    assert_eq!(batch.items[0].text_target, "chat");
    assert_eq!(batch.items[0].category, None);
}

#[test]
fn cefr_levels_cover_the_scale() {
    assert_eq!(LEVELS.first(), Some(&"A1"));
    assert_eq!(LEVELS.last(), Some(&"C2"));
    assert_eq!(LEVELS.len(), 6);
}
