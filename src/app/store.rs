//! In-memory report holder for the listing screen.

use crate::domain::Report;
use crate::search;

/// The last full fetch and the currently displayed subset.
///
/// `all` is only ever replaced wholesale. `visible` is always
/// `search::filter(query, all)` for the query last passed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportStore {
    all: Vec<Report>,
    visible: Vec<Report>,
}

impl ReportStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn all(&self) -> &[Report] {
        &self.all
    }

    #[must_use]
    pub fn visible(&self) -> &[Report] {
        &self.visible
    }

    /// Replaces the full set and recomputes `visible` against `query`.
    pub fn replace_all(&mut self, reports: Vec<Report>, query: &str) {
        self.all = reports;
        self.apply_query(query);
    }

    /// Recomputes `visible` from the current full set.
    pub fn apply_query(&mut self, query: &str) {
        self.visible = search::filter(query, &self.all);
    }
}
