use tablon_core::{AnnouncementStore, Category, CategoryFilter, SelectionState};

const FIXTURE: &str = include_str!("fixtures/announcements.json");

fn store() -> AnnouncementStore {
    AnnouncementStore::from_json_str(FIXTURE).unwrap()
}

#[test]
fn defaults_show_every_record_with_no_modal() {
    let store = store();
    let mut state = SelectionState::new();

    assert_eq!(state.query(), "");
    assert_eq!(state.category(), CategoryFilter::All);
    assert!(state.selected_id().is_none());
    assert_eq!(state.visible(&store).len(), store.len());
    assert!(!state.is_modal_open(&store));
}

#[test]
fn set_query_stores_raw_text_but_filters_normalized() {
    let store = store();
    let mut state = SelectionState::new();

    state.set_query("  BECA ");
    assert_eq!(state.query(), "  BECA ");

    let visible = state.visible(&store);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "1");
}

#[test]
fn set_category_narrows_the_visible_subset() {
    let store = store();
    let mut state = SelectionState::new();

    state.set_category(CategoryFilter::Only(Category::General));
    let visible = state.visible(&store);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "3");
}

#[test]
fn query_and_category_combine_with_and_semantics() {
    let store = store();
    let mut state = SelectionState::new();

    state.set_query("beca");
    state.set_category(CategoryFilter::Only(Category::Comunicados));
    assert!(state.visible(&store).is_empty());
}

#[test]
fn visible_always_reflects_the_latest_state() {
    let store = store();
    let mut state = SelectionState::new();

    state.set_query("mantenimiento");
    assert_eq!(state.visible(&store).len(), 1);

    state.set_query("");
    assert_eq!(state.visible(&store).len(), store.len());
}

#[test]
fn select_opens_the_modal_when_the_id_resolves() {
    let store = store();
    let mut state = SelectionState::new();

    state.select("2");
    assert_eq!(state.selected_id(), Some("2"));
    assert!(state.is_modal_open(&store));
    assert_eq!(state.selected_announcement(&store).unwrap().title, "Mantenimiento");
}

#[test]
fn selecting_an_unknown_id_is_accepted_but_reads_as_closed() {
    let store = store();
    let mut state = SelectionState::new();

    state.select("does-not-exist");
    assert_eq!(state.selected_id(), Some("does-not-exist"));
    assert!(state.selected_announcement(&store).is_none());
    assert!(!state.is_modal_open(&store));
}

#[test]
fn dismiss_clears_the_selection() {
    let store = store();
    let mut state = SelectionState::new();

    state.select("1");
    assert!(state.is_modal_open(&store));

    state.dismiss();
    assert!(state.selected_id().is_none());
    assert!(!state.is_modal_open(&store));
}

#[test]
fn selection_does_not_disturb_filtering() {
    let store = store();
    let mut state = SelectionState::new();

    state.set_query("beca");
    state.select("3");
    let visible = state.visible(&store);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "1");
}

#[test]
fn repeated_reads_with_unchanged_state_return_the_same_subset() {
    let store = store();
    let mut state = SelectionState::new();
    state.set_category(CategoryFilter::Only(Category::Convocatorias));

    let first: Vec<String> = state.visible(&store).iter().map(|r| r.id.clone()).collect();
    let second: Vec<String> = state.visible(&store).iter().map(|r| r.id.clone()).collect();
    assert_eq!(first, second);
}
