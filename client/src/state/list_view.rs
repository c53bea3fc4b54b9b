//! Per-mount state for a resource list view.
//!
//! DESIGN
//! ======
//! `Loading → Loaded | Errored` is one-shot: once the fetch has resolved,
//! later resolutions are ignored and only a remount (fresh state) starts
//! over. Filter/sort/page and the detail selection are client-local and
//! never touch the fetched records.

#[cfg(test)]
#[path = "list_view_test.rs"]
mod list_view_test;

use crate::net::api::FetchError;
use crate::resources::Resource;
use crate::state::table::{TablePage, TableState};

/// Fetch lifecycle of a list view.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewPhase<R> {
    #[default]
    Loading,
    Loaded(Vec<R>),
    Errored(String),
}

/// Phase discriminant without the payload, cheap to compare in memos.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    Errored,
}

/// State owned by one mounted list view.
#[derive(Clone, Debug, PartialEq)]
pub struct ListViewState<R> {
    pub phase: ViewPhase<R>,
    pub table: TableState,
    /// Position in the fetched collection of the record shown in the
    /// detail modal.
    pub selected: Option<usize>,
}

impl<R: Resource> Default for ListViewState<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ListViewState<R> {
    #[must_use]
    pub fn new() -> Self {
        Self { phase: ViewPhase::Loading, table: TableState::new(R::CONFIG.page_size), selected: None }
    }

    /// Apply the fetch outcome. Returns `false` if the view already left
    /// `Loading`.
    pub fn resolve(&mut self, result: Result<Vec<R>, FetchError>) -> bool {
        if !matches!(self.phase, ViewPhase::Loading) {
            return false;
        }
        self.phase = match result {
            Ok(records) => ViewPhase::Loaded(records),
            Err(e) => ViewPhase::Errored(e.to_string()),
        };
        true
    }

    #[must_use]
    pub fn status(&self) -> LoadStatus {
        match self.phase {
            ViewPhase::Loading => LoadStatus::Loading,
            ViewPhase::Loaded(_) => LoadStatus::Loaded,
            ViewPhase::Errored(_) => LoadStatus::Errored,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ViewPhase::Loading)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            ViewPhase::Errored(message) => Some(message.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn records(&self) -> Option<&[R]> {
        match &self.phase {
            ViewPhase::Loaded(records) => Some(records.as_slice()),
            _ => None,
        }
    }

    /// Current page of rows; `None` unless loaded.
    #[must_use]
    pub fn page(&self) -> Option<TablePage<'_, R>> {
        self.records().map(|records| self.table.apply(records))
    }

    /// Select the record at `index` in the fetched collection (a row's
    /// [`PageRow::index`](crate::state::table::PageRow::index)) for the
    /// detail modal. Returns `false` when not loaded or out of range.
    pub fn open_details(&mut self, index: usize) -> bool {
        let found = self.records().is_some_and(|records| index < records.len());
        if found {
            self.selected = Some(index);
        }
        found
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected_record(&self) -> Option<&R> {
        self.records()?.get(self.selected?)
    }
}
