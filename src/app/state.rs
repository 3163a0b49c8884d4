//! Listing screen state and view model computation.
//!
//! [`ListingState`] is the single source of truth for the listing screen: the
//! report store, the active query, the sync state machine, and the bookkeeping
//! needed to coalesce fetch requests and de-duplicate return signals. It is
//! mutated only by [`handle_event`](super::handle_event); renderers read it
//! through [`ListingState::compute_viewmodel`].

use super::modes::SyncState;
use super::navigation::RefreshToken;
use super::store::ReportStore;
use crate::domain::Report;
use crate::ui::viewmodel::{EmptyState, HeaderInfo, ListingViewModel, ReportCard, SearchBarInfo, StatusInfo};

/// Text shown when no report matches (or none exist yet).
pub const EMPTY_LISTING_MESSAGE: &str = "Nenhum relato encontrado.";

/// Central listing state container.
#[derive(Debug, Clone, Default)]
pub struct ListingState {
    /// Last full fetch and its filtered view.
    pub store: ReportStore,

    /// Active search query, as typed.
    pub query: String,

    /// Fetch state machine.
    pub sync_state: SyncState,

    /// Set while a pull-to-refresh fetch is in flight.
    pub refreshing: bool,

    /// Last return-signal token acted upon.
    pub last_token: Option<RefreshToken>,

    /// A fetch was requested while another was in flight.
    ///
    /// Any number of such requests collapse into one follow-up fetch.
    pub fetch_pending: bool,
}

impl ListingState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports currently shown, after filtering.
    #[must_use]
    pub fn visible(&self) -> &[Report] {
        self.store.visible()
    }

    /// Updates the query and recomputes the visible set. Never fetches.
    pub fn set_query(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        self.store.apply_query(&self.query);
    }

    /// Requests a fetch of the full collection.
    ///
    /// Returns `true` when the caller should issue the network read now, and
    /// `false` when one is already in flight (the request is then remembered
    /// and served once the current fetch completes).
    pub fn request_fetch(&mut self) -> bool {
        if self.sync_state.is_loading() {
            tracing::debug!("fetch already in flight, coalescing request");
            self.fetch_pending = true;
            return false;
        }
        self.sync_state = SyncState::Loading;
        true
    }

    /// Applies a successful fetch. Returns `true` if a coalesced follow-up
    /// fetch should be issued.
    pub fn complete_fetch(&mut self, reports: Vec<Report>) -> bool {
        tracing::debug!(report_count = reports.len(), "reports fetched");
        self.store.replace_all(reports, &self.query);
        self.sync_state = SyncState::Loaded;
        self.finish_fetch()
    }

    /// Records a failed fetch, keeping the previous reports on screen.
    /// Returns `true` if a coalesced follow-up fetch should be issued.
    pub fn fail_fetch(&mut self, message: &str) -> bool {
        tracing::warn!(message = %message, "fetch failed, keeping previous reports");
        self.sync_state = SyncState::Failed {
            message: message.to_string(),
        };
        self.finish_fetch()
    }

    fn finish_fetch(&mut self) -> bool {
        self.refreshing = false;
        if std::mem::take(&mut self.fetch_pending) {
            self.sync_state = SyncState::Loading;
            true
        } else {
            false
        }
    }

    /// Computes the listing view model.
    #[must_use]
    pub fn compute_viewmodel(&self) -> ListingViewModel {
        let cards: Vec<ReportCard> = self.visible().iter().map(ReportCard::from).collect();

        let empty_state = (cards.is_empty() && !self.sync_state.is_loading()).then(|| EmptyState {
            message: EMPTY_LISTING_MESSAGE.to_string(),
        });

        ListingViewModel {
            header: HeaderInfo {
                title: format!("Relatos ({})", cards.len()),
            },
            search_bar: SearchBarInfo {
                query: self.query.clone(),
            },
            status: StatusInfo {
                loading: self.sync_state.is_loading() && !self.refreshing,
                refreshing: self.refreshing,
                error: self.sync_state.error_message().map(str::to_string),
            },
            cards,
            empty_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: &str) -> Report {
        Report {
            id: id.to_string(),
            titulo: format!("Relato {id}"),
            descricao: String::new(),
            endereco: String::new(),
            categoria: "Água e Esgoto".to_string(),
            fotos: vec![],
            data_criacao: "2024-05-01T10:00:00".to_string(),
        }
    }

    #[test]
    fn test_request_fetch_coalesces_while_loading() {
        let mut state = ListingState::new();
        assert!(state.request_fetch());
        assert!(!state.request_fetch());
        assert!(!state.request_fetch());
        assert!(state.fetch_pending);

        assert!(state.complete_fetch(vec![report("1")]));
        assert!(state.sync_state.is_loading());
        assert!(!state.complete_fetch(vec![report("1"), report("2")]));
        assert_eq!(state.sync_state, SyncState::Loaded);
    }

    #[test]
    fn test_fail_fetch_keeps_reports() {
        let mut state = ListingState::new();
        state.request_fetch();
        state.complete_fetch(vec![report("1")]);
        state.request_fetch();
        state.fail_fetch("Erro no servidor:\ndb down");
        assert_eq!(state.store.all().len(), 1);
        assert_eq!(state.visible().len(), 1);
        assert_eq!(state.sync_state.error_message(), Some("Erro no servidor:\ndb down"));
    }

    #[test]
    fn test_viewmodel_empty_state_hidden_while_loading() {
        let mut state = ListingState::new();
        state.request_fetch();
        let vm = state.compute_viewmodel();
        assert!(vm.empty_state.is_none());
        assert!(vm.status.loading);

        state.complete_fetch(vec![]);
        let vm = state.compute_viewmodel();
        assert_eq!(vm.empty_state.unwrap().message, EMPTY_LISTING_MESSAGE);
    }

    #[test]
    fn test_viewmodel_cards_follow_visible() {
        let mut state = ListingState::new();
        state.request_fetch();
        state.complete_fetch(vec![report("1"), report("2")]);
        state.set_query("relato 2");
        let vm = state.compute_viewmodel();
        assert_eq!(vm.cards.len(), 1);
        assert_eq!(vm.cards[0].id, "2");
        assert_eq!(vm.header.title, "Relatos (1)");
        assert_eq!(vm.search_bar.query, "relato 2");
    }
}
