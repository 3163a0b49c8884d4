//! Async runtime for the listing screen.
//!
//! [`SyncController`] owns the [`ListingState`] and a [`ReportsApi`]. Each
//! call runs events through [`handle_event`] and executes the returned
//! actions until the queue drains: fetch outcomes are fed back in as events,
//! navigation requests are handed to the caller.
//!
//! All mutation goes through `&mut self`, so two fetches from the same
//! controller can never be in flight at once.

use super::handler::{handle_event, Event};
use super::modes::SyncState;
use super::navigation::{RefreshToken, Route};
use super::{Action, ListingState};
use crate::api::ReportsApi;
use crate::domain::error::Result;
use crate::domain::Report;
use crate::ui::viewmodel::ListingViewModel;
use std::collections::VecDeque;

/// What the caller should do after a dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// The listing changed and should be re-rendered.
    pub render: bool,

    /// Screens requested while handling, in order.
    pub navigation: Vec<Route>,
}

/// Drives the listing state machine against the remote API.
#[derive(Debug)]
pub struct SyncController<A> {
    state: ListingState,
    api: A,
}

impl<A: ReportsApi> SyncController<A> {
    pub fn new(api: A) -> Self {
        Self {
            state: ListingState::new(),
            api,
        }
    }

    /// Handles one event and every follow-up it produces.
    ///
    /// # Errors
    ///
    /// Propagates handler errors. Fetch failures are not errors here: they
    /// become [`SyncState::Failed`] and the previous reports stay visible.
    pub async fn dispatch(&mut self, event: Event) -> Result<Dispatch> {
        let mut queue = VecDeque::from([event]);
        let mut outcome = Dispatch::default();

        while let Some(event) = queue.pop_front() {
            let (render, actions) = handle_event(&mut self.state, &event)?;
            outcome.render |= render;

            for action in actions {
                match action {
                    Action::FetchReports => queue.push_back(self.fetch().await),
                    Action::NavigateTo(route) => outcome.navigation.push(route),
                }
            }
        }

        Ok(outcome)
    }

    async fn fetch(&self) -> Event {
        match self.api.list_reports().await {
            Ok(reports) => Event::ReportsFetched(reports),
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch reports");
                Event::FetchFailed(e.user_message())
            }
        }
    }

    /// Fetches the full collection (screen mount).
    ///
    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub async fn fetch_all(&mut self) -> Result<Dispatch> {
        self.dispatch(Event::FetchRequested).await
    }

    /// Pull-to-refresh. A no-op while a fetch is already in flight.
    ///
    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub async fn refresh(&mut self) -> Result<Dispatch> {
        self.dispatch(Event::PullToRefresh).await
    }

    /// Reacts to the composer's "new data" token. Repeated tokens are ignored.
    ///
    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub async fn on_return_signal(&mut self, token: RefreshToken) -> Result<Dispatch> {
        self.dispatch(Event::ReturnSignal(token)).await
    }

    /// Updates the active query. Never touches the network.
    ///
    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub fn set_query(&mut self, query: &str) -> Result<bool> {
        let (render, actions) = handle_event(&mut self.state, &Event::QueryChanged(query.to_string()))?;
        debug_assert!(actions.is_empty());
        Ok(render)
    }

    /// Opens the detail screen for the visible report at `index`.
    ///
    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub async fn select(&mut self, index: usize) -> Result<Option<Route>> {
        let outcome = self.dispatch(Event::SelectReport(index)).await?;
        Ok(outcome.navigation.into_iter().next())
    }

    /// Opens the composer.
    ///
    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub async fn compose(&mut self) -> Result<Option<Route>> {
        let outcome = self.dispatch(Event::ComposeRequested).await?;
        Ok(outcome.navigation.into_iter().next())
    }

    #[must_use]
    pub fn visible(&self) -> &[Report] {
        self.state.visible()
    }

    #[must_use]
    pub fn all(&self) -> &[Report] {
        self.state.store.all()
    }

    #[must_use]
    pub const fn sync_state(&self) -> &SyncState {
        &self.state.sync_state
    }

    #[must_use]
    pub const fn is_refreshing(&self) -> bool {
        self.state.refreshing
    }

    #[must_use]
    pub const fn state(&self) -> &ListingState {
        &self.state
    }

    #[must_use]
    pub fn viewmodel(&self) -> ListingViewModel {
        self.state.compute_viewmodel()
    }
}
