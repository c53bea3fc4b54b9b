//! Client-side table state: global filter, column sort, pagination.
//!
//! DESIGN
//! ======
//! The table works over the already-fetched collection only. Each render
//! recomputes filter → sort → page from scratch; there is no index or cache,
//! so applying the same inputs twice always yields the same rows.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::resources::Resource;

/// Sort direction for a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Active column sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState {
    pub field: &'static str,
    pub direction: SortDirection,
}

/// Filter, sort, and paging inputs for one table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    pub filter: String,
    pub sort: Option<SortState>,
    /// Zero-based page index; clamped when rows are computed.
    pub page: usize,
    pub page_size: usize,
}

/// A row on the current page plus its position in the fetched collection.
///
/// The position identifies the source record for row actions; record keys
/// may be missing or repeated.
#[derive(Clone, Debug, PartialEq)]
pub struct PageRow<T> {
    pub index: usize,
    pub record: T,
}

/// One computed page of rows plus paginator figures.
#[derive(Debug, PartialEq)]
pub struct TablePage<'a, R> {
    pub rows: Vec<PageRow<&'a R>>,
    /// Rows matching the filter (all pages).
    pub total: usize,
    /// Effective zero-based page index after clamping.
    pub page: usize,
    pub page_count: usize,
    /// One-based index of the first row shown, `0` when empty.
    pub first: usize,
    /// One-based index of the last row shown, `0` when empty.
    pub last: usize,
}

/// Owned copy of a [`TablePage`], comparable for reactive memos.
#[derive(Clone, Debug, PartialEq)]
pub struct PageView<R> {
    pub rows: Vec<PageRow<R>>,
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
    pub first: usize,
    pub last: usize,
}

impl<R: Clone> TablePage<'_, R> {
    #[must_use]
    pub fn to_view(&self) -> PageView<R> {
        PageView {
            rows: self.rows.iter().map(|row| PageRow { index: row.index, record: row.record.clone() }).collect(),
            total: self.total,
            page: self.page,
            page_count: self.page_count,
            first: self.first,
            last: self.last,
        }
    }
}

impl<R> PageView<R> {
    #[must_use]
    pub fn is_first_page(&self) -> bool {
        self.page == 0
    }

    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.page + 1 >= self.page_count
    }

    /// Paginator report, e.g. `Mostrando 1 a 10 de 42`.
    #[must_use]
    pub fn report(&self) -> String {
        format!("Mostrando {} a {} de {}", self.first, self.last, self.total)
    }
}

impl TableState {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self { filter: String::new(), sort: None, page: 0, page_size: page_size.max(1) }
    }

    /// Replace the filter text and return to the first page.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
        self.page = 0;
    }

    /// Sort by `field`: a new column starts ascending, the same column flips.
    pub fn toggle_sort(&mut self, field: &'static str) {
        self.sort = Some(match self.sort {
            Some(SortState { field: current, direction: SortDirection::Ascending }) if current == field => {
                SortState { field, direction: SortDirection::Descending }
            }
            _ => SortState { field, direction: SortDirection::Ascending },
        });
    }

    #[must_use]
    pub fn sort_direction(&self, field: &str) -> Option<SortDirection> {
        self.sort.filter(|s| s.field == field).map(|s| s.direction)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Change rows per page and return to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    /// Whether `record` matches the current filter on `R`'s filter fields.
    #[must_use]
    pub fn matches<R: Resource>(&self, record: &R) -> bool {
        matches_filter(record, &self.filter)
    }

    /// Filter, sort, and slice `records` into the current page.
    #[must_use]
    pub fn apply<'a, R: Resource>(&self, records: &'a [R]) -> TablePage<'a, R> {
        let mut rows: Vec<PageRow<&R>> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(*record))
            .map(|(index, record)| PageRow { index, record })
            .collect();

        if let Some(sort) = self.sort {
            // Stable: ties keep backend order.
            rows.sort_by(|a, b| {
                let ord = a.record.field(sort.field).compare(&b.record.field(sort.field));
                match sort.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }

        let total = rows.len();
        let page_count = total.div_ceil(self.page_size).max(1);
        let page = self.page.min(page_count - 1);
        let start = page * self.page_size;
        let end = (start + self.page_size).min(total);
        let rows: Vec<PageRow<&R>> = rows.into_iter().skip(start).take(end.saturating_sub(start)).collect();
        let (first, last) = if rows.is_empty() { (0, 0) } else { (start + 1, end) };

        TablePage { rows, total, page, page_count, first, last }
    }
}

/// Case-insensitive substring match over `R::CONFIG.filter_fields`.
/// An empty filter matches everything.
#[must_use]
pub fn matches_filter<R: Resource>(record: &R, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let needle = filter.to_lowercase();
    R::CONFIG
        .filter_fields
        .iter()
        .any(|field| record.field(field).filter_text().to_lowercase().contains(&needle))
}
