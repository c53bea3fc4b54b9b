use super::*;
use crate::net::types::{Game, Genre, User};
use crate::state::table::TableState;

fn rpg_response() -> Result<Vec<Genre>, FetchError> {
    crate::net::api::parse_collection(
        r#"[{"idgenero":1,"nombre":"RPG","descripcion":"Role playing","idestatus":1}]"#,
    )
}

fn users(count: i64) -> Vec<User> {
    (1..=count)
        .map(|i| User { id: i, name: format!("User {i}"), email: format!("u{i}@example.com"), age: Some(20 + i) })
        .collect()
}

#[test]
fn new_state_is_loading_with_configured_page_size() {
    let state = ListViewState::<Genre>::new();
    assert!(state.is_loading());
    assert_eq!(state.status(), LoadStatus::Loading);
    assert_eq!(state.table, TableState::new(10));
    assert!(state.page().is_none());
    assert!(state.selected.is_none());

    let users_state = ListViewState::<User>::default();
    assert_eq!(users_state.table.page_size, 25);
}

#[test]
fn resolve_success_loads_records() {
    let mut state = ListViewState::<Genre>::new();
    assert!(state.resolve(rpg_response()));
    assert!(!state.is_loading());
    assert_eq!(state.status(), LoadStatus::Loaded);
    assert!(state.error().is_none());
    let page = state.page().unwrap();
    assert_eq!(page.rows.len(), 1);
    assert_eq!(page.rows[0].record.name, "RPG");
}

#[test]
fn resolve_status_error_enters_errored_without_table() {
    let mut state = ListViewState::<Genre>::new();
    assert!(state.resolve(Err(FetchError::Status(500))));
    assert_eq!(state.status(), LoadStatus::Errored);
    assert_eq!(state.error(), Some("HTTP error! status: 500"));
    assert!(state.records().is_none());
    assert!(state.page().is_none());
}

#[test]
fn non_array_body_enters_errored() {
    let mut state = ListViewState::<Genre>::new();
    state.resolve(crate::net::api::parse_collection(r#"{"error":"nope"}"#));
    assert_eq!(state.error(), Some("expected a JSON array, got object"));
}

#[test]
fn errored_is_terminal() {
    let mut state = ListViewState::<Genre>::new();
    state.resolve(Err(FetchError::Transport("offline".into())));
    assert!(!state.resolve(rpg_response()));
    assert_eq!(state.error(), Some("network error: offline"));
}

#[test]
fn loaded_ignores_second_resolution() {
    let mut state = ListViewState::<Genre>::new();
    state.resolve(rpg_response());
    assert!(!state.resolve(Err(FetchError::Status(500))));
    assert_eq!(state.records().map(<[Genre]>::len), Some(1));
}

#[test]
fn details_show_the_selected_source_record() {
    let mut state = ListViewState::<User>::new();
    state.resolve(Ok(users(30)));
    assert!(state.open_details(6));
    let selected = state.selected_record().unwrap();
    assert_eq!(selected, &users(30)[6]);
    assert_eq!(selected.details()[2].value, crate::resources::FieldValue::Text("u7@example.com".into()));
}

#[test]
fn closing_details_restores_unmodified_table() {
    let mut state = ListViewState::<User>::new();
    state.resolve(Ok(users(30)));
    state.table.set_filter("user 1");
    state.table.toggle_sort("name");
    let before = state.table.clone();
    let rows_before: Vec<i64> = state.page().unwrap().rows.iter().map(|row| row.record.id).collect();

    assert!(state.open_details(12));
    state.close_details();

    assert!(state.selected_record().is_none());
    assert_eq!(state.table, before);
    let rows_after: Vec<i64> = state.page().unwrap().rows.iter().map(|row| row.record.id).collect();
    assert_eq!(rows_before, rows_after);
}

#[test]
fn open_details_rejects_out_of_range_and_loading_state() {
    let mut state = ListViewState::<User>::new();
    assert!(!state.open_details(1));
    state.resolve(Ok(users(2)));
    assert!(!state.open_details(2));
    assert!(state.open_details(1));
    assert!(state.selected.is_none());
}

#[test]
fn details_follow_the_clicked_row_when_keys_are_missing() {
    let mut state = ListViewState::<Game>::new();
    state.resolve(crate::net::api::parse_collection(r#"[{"nombre":"Zelda"},{"nombre":"Mario"}]"#));
    let page = state.page().unwrap();
    assert_eq!(page.rows[0].record.key(), page.rows[1].record.key());
    let clicked = page.rows[1].index;

    assert!(state.open_details(clicked));
    assert_eq!(state.selected_record().map(|g| g.name.as_str()), Some("Mario"));
}

#[test]
fn details_follow_the_clicked_row_under_sort() {
    let mut state = ListViewState::<User>::new();
    state.resolve(Ok(vec![
        User { id: 5, name: "Bea".into(), email: "bea@example.com".into(), age: None },
        User { id: 5, name: "Ana".into(), email: "ana@example.com".into(), age: None },
    ]));
    state.table.toggle_sort("name");
    let page = state.page().unwrap();
    assert_eq!(page.rows[0].record.name, "Ana");
    let clicked = page.rows[0].index;

    assert!(state.open_details(clicked));
    assert_eq!(state.selected_record().map(|u| u.email.as_str()), Some("ana@example.com"));
}

#[test]
fn genre_example_scenario() {
    let mut state = ListViewState::<Genre>::new();
    state.resolve(rpg_response());
    let page = state.page().unwrap();
    assert_eq!(page.rows.len(), 1);
    assert_eq!(page.total, 1);
    let status = page.rows[0].record.field("idestatus");
    assert_eq!(status.filter_text(), "Activo");
    let clicked = page.rows[0].index;

    assert!(state.open_details(clicked));
    let details = state.selected_record().unwrap().details();
    assert_eq!(details[0].value, crate::resources::FieldValue::Int(1));
    assert_eq!(details[1].value, crate::resources::FieldValue::Text("RPG".into()));
    assert_eq!(details[3].value.filter_text(), "Activo");
}
