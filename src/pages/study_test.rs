#![cfg(not(feature = "hydrate"))]

use super::*;

fn sg(id: &str, name: &str, total: u32, learned: u32) -> StudyGroup {
    StudyGroup {
        id: id.to_owned(),
        name: name.to_owned(),
        description: None,
        language: None,
        total_items: Some(total),
        learned_items: Some(learned),
        total_fiszki: None,
        learned_fiszki: None,
        updated_at: None,
    }
}

fn sample_groups() -> Vec<StudyGroup> {
    vec![
        sg("g1", "Zwierzęta", 10, 10),
        sg("g2", "Kolory", 8, 3),
        sg("g3", "Jedzenie", 12, 0),
    ]
}

// =====================
// Filtering
// =====================

#[test]
fn filter_all_keeps_everything() {
    let groups = sample_groups();
    assert_eq!(filter_groups(&groups, "", GroupFilter::All).len(), 3);
}

#[test]
fn filter_splits_by_completion() {
    let groups = sample_groups();
    let complete = filter_groups(&groups, "", GroupFilter::Complete);
    assert_eq!(complete.len(), 1);
    assert_eq!(complete[0].id, "g1");

    let incomplete = filter_groups(&groups, "", GroupFilter::Incomplete);
    assert_eq!(incomplete.len(), 2);
}

#[test]
fn filter_combines_search_and_completion() {
    let groups = sample_groups();
    let hits = filter_groups(&groups, "ko", GroupFilter::Incomplete);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "g2");

    assert!(filter_groups(&groups, "ko", GroupFilter::Complete).is_empty());
}

// =====================
// Selection
// =====================

#[test]
fn toggle_id_adds_then_removes() {
    let mut selected = Vec::new();
    toggle_id(&mut selected, "g1");
    assert_eq!(selected, vec!["g1".to_owned()]);
    toggle_id(&mut selected, "g2");
    assert_eq!(selected.len(), 2);
    toggle_id(&mut selected, "g1");
    assert_eq!(selected, vec!["g2".to_owned()]);
}

#[test]
fn all_visible_selected_requires_nonempty_visible() {
    let selected = vec!["g1".to_owned()];
    assert!(!all_visible_selected(&selected, &[]));
}

#[test]
fn toggle_all_selects_then_clears_visible() {
    let groups = sample_groups();
    let mut selected = vec!["g2".to_owned()];

    toggle_all(&mut selected, &groups);
    assert_eq!(selected.len(), 3);
    assert!(all_visible_selected(&selected, &groups));

    toggle_all(&mut selected, &groups);
    assert!(selected.is_empty());
}

#[test]
fn toggle_all_leaves_hidden_selections_alone() {
    let groups = sample_groups();
    let visible = filter_groups(&groups, "kolory", GroupFilter::All);
    let mut selected = vec!["g3".to_owned()];

    toggle_all(&mut selected, &visible);
    assert!(selected.contains(&"g2".to_owned()));
    assert!(selected.contains(&"g3".to_owned()));

    toggle_all(&mut selected, &visible);
    assert_eq!(selected, vec!["g3".to_owned()]);
}

// =====================
// Labels
// =====================

#[test]
fn progress_label_is_one_based() {
    assert_eq!(progress_label(0, 20), "Fiszka 1 / 20");
    assert_eq!(progress_label(19, 20), "Fiszka 20 / 20");
}
