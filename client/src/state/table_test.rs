use super::*;
use crate::net::types::{Game, Genre};
use serde_json::json;

fn genres(count: i64) -> Vec<Genre> {
    (1..=count)
        .map(|i| Genre { id: i, name: format!("Genre {i}"), description: format!("desc {i}"), status_code: Some(1) })
        .collect()
}

fn games() -> Vec<Game> {
    serde_json::from_value(json!([
        { "idjuego": 1, "nombre": "Zelda", "genero": "Aventura", "precio": 59900, "descripcion": "Hyrule", "idestatus": 1 },
        { "idjuego": 2, "nombre": "Doom", "genero": "Shooter", "precio": 120000, "descripcion": "Mars", "idestatus": 0 },
        { "idjuego": 3, "nombre": "Tetris", "genero": "Puzzle", "precio": 9900, "descripcion": "Blocks", "estatus": "Activo" }
    ]))
    .unwrap()
}

fn ids<R: Resource>(page: &TablePage<'_, R>) -> Vec<i64> {
    page.rows.iter().map(|row| row.record.key()).collect()
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn page_rows_are_min_of_page_size_and_total() {
    let data = genres(42);
    let page = TableState::new(10).apply(&data);
    assert_eq!(page.rows.len(), 10);
    assert_eq!(page.total, 42);
    assert_eq!(page.page_count, 5);

    let view = page.to_view();
    assert_eq!(view.rows.len(), 10);
    assert_eq!(view.rows[0].record, data[0]);
    assert_eq!(view.rows[0].index, 0);
    assert_eq!(view.report(), "Mostrando 1 a 10 de 42");
    assert!(view.is_first_page());
    assert!(!view.is_last_page());

    let small = genres(3);
    let page = TableState::new(10).apply(&small);
    assert_eq!(page.rows.len(), 3);
    assert_eq!(page.total, 3);
    assert_eq!(page.page_count, 1);
    let view = page.to_view();
    assert!(view.is_first_page());
    assert!(view.is_last_page());
}

#[test]
fn last_page_holds_the_remainder() {
    let data = genres(42);
    let mut table = TableState::new(10);
    table.set_page(4);
    let page = table.apply(&data);
    assert_eq!(ids(&page), vec![41, 42]);
    assert_eq!((page.first, page.last), (41, 42));
    assert!(page.to_view().is_last_page());
}

#[test]
fn out_of_range_page_is_clamped() {
    let data = genres(12);
    let mut table = TableState::new(5);
    table.set_page(99);
    let page = table.apply(&data);
    assert_eq!(page.page, 2);
    assert_eq!(ids(&page), vec![11, 12]);
}

#[test]
fn empty_collection_reports_zero_rows() {
    let data: Vec<Genre> = Vec::new();
    let page = TableState::new(10).apply(&data);
    assert!(page.rows.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.page_count, 1);
    assert_eq!(page.to_view().report(), "Mostrando 0 a 0 de 0");
}

#[test]
fn page_size_change_returns_to_first_page() {
    let mut table = TableState::new(10);
    table.set_page(3);
    table.set_page_size(25);
    assert_eq!(table.page, 0);
    assert_eq!(table.page_size, 25);
    table.set_page_size(0);
    assert_eq!(table.page_size, 1);
}

// =============================================================
// Filter
// =============================================================

#[test]
fn filter_with_single_match_yields_one_row() {
    let data = games();
    let mut table = TableState::new(10);
    table.set_filter("zeld");
    let page = table.apply(&data);
    assert_eq!(ids(&page), vec![1]);
    assert_eq!(page.total, 1);
}

#[test]
fn filter_with_no_match_yields_zero_rows() {
    let data = games();
    let mut table = TableState::new(10);
    table.set_filter("mario");
    assert!(table.apply(&data).rows.is_empty());
}

#[test]
fn filter_is_case_insensitive() {
    let data = games();
    let mut table = TableState::new(10);
    table.set_filter("SHOOTER");
    assert_eq!(ids(&table.apply(&data)), vec![2]);
}

#[test]
fn filter_matches_raw_price_and_status_label() {
    let data = games();
    let mut table = TableState::new(10);
    table.set_filter("120000");
    assert_eq!(ids(&table.apply(&data)), vec![2]);
    table.set_filter("inactivo");
    assert_eq!(ids(&table.apply(&data)), vec![2]);
}

#[test]
fn filter_ignores_fields_not_configured() {
    // Genre filters on nombre/descripcion only; the id is not searched.
    let data = genres(3);
    let mut table = TableState::new(10);
    table.set_filter("desc 2");
    assert_eq!(ids(&table.apply(&data)), vec![2]);
    table.set_filter("activo");
    assert!(table.apply(&data).rows.is_empty());
}

#[test]
fn filter_resets_page() {
    let mut table = TableState::new(10);
    table.set_page(2);
    table.set_filter("x");
    assert_eq!(table.page, 0);
}

#[test]
fn applying_same_filter_twice_is_idempotent() {
    let data = games();
    let mut table = TableState::new(10);
    table.set_filter("o");
    let once = ids(&table.apply(&data));
    table.set_filter("o");
    let twice = ids(&table.apply(&data));
    assert_eq!(once, twice);
    assert_eq!(ids(&table.apply(&data)), once);
}

#[test]
fn empty_filter_matches_everything() {
    let data = games();
    let table = TableState::new(10);
    assert_eq!(table.apply(&data).total, 3);
    assert!(matches_filter(&data[0], ""));
}

// =============================================================
// Sort
// =============================================================

#[test]
fn toggle_sort_starts_ascending_then_flips() {
    let mut table = TableState::new(10);
    table.toggle_sort("nombre");
    assert_eq!(table.sort_direction("nombre"), Some(SortDirection::Ascending));
    table.toggle_sort("nombre");
    assert_eq!(table.sort_direction("nombre"), Some(SortDirection::Descending));
    table.toggle_sort("nombre");
    assert_eq!(table.sort_direction("nombre"), Some(SortDirection::Ascending));
    table.toggle_sort("precio");
    assert_eq!(table.sort_direction("nombre"), None);
    assert_eq!(table.sort_direction("precio"), Some(SortDirection::Ascending));
}

#[test]
fn sort_by_text_and_number() {
    let data = games();
    let mut table = TableState::new(10);
    table.toggle_sort("nombre");
    assert_eq!(ids(&table.apply(&data)), vec![2, 3, 1]);
    table.toggle_sort("precio");
    assert_eq!(ids(&table.apply(&data)), vec![3, 1, 2]);
    table.toggle_sort("precio");
    assert_eq!(ids(&table.apply(&data)), vec![2, 1, 3]);
}

#[test]
fn unsorted_rows_keep_backend_order() {
    let data = games();
    assert_eq!(ids(&TableState::new(10).apply(&data)), vec![1, 2, 3]);
}

#[test]
fn sort_is_stable_for_ties() {
    let data = genres(4);
    let mut table = TableState::new(10);
    table.toggle_sort("idestatus");
    assert_eq!(ids(&table.apply(&data)), vec![1, 2, 3, 4]);
}

#[test]
fn rows_carry_their_source_position_through_sort_and_filter() {
    let data = games();
    let mut table = TableState::new(10);
    table.toggle_sort("nombre");
    table.set_filter("o");
    let page = table.apply(&data);
    let positions: Vec<usize> = page.rows.iter().map(|row| row.index).collect();
    // Doom (1), Tetris (2), Zelda (0) after sorting by name.
    assert_eq!(positions, vec![1, 2, 0]);
    for row in &page.rows {
        assert_eq!(row.record, &data[row.index]);
    }
}
