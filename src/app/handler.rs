//! Listing event handling and state transitions.
//!
//! The handler follows the same unidirectional flow for every input:
//!
//! ```text
//! Event → handle_event → ListingState mutation → (should_render, Vec<Action>)
//!                ↑                                          ↓
//!                └────── ReportsFetched / FetchFailed ──────┘
//! ```
//!
//! Fetch policy:
//! - a fetch request while `Loading` is coalesced into one follow-up fetch
//! - `PullToRefresh` while `Loading` is ignored
//! - a failed fetch keeps the previous reports visible
//! - a return signal repeating the last seen token is ignored

use super::navigation::{DetailParams, RefreshToken, Route};
use super::{Action, ListingState};
use crate::domain::error::Result;
use crate::domain::Report;

/// Inputs to the listing screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Fetch the full collection (issued when the screen mounts).
    FetchRequested,

    /// The user pulled to refresh.
    PullToRefresh,

    /// The composer navigated back after a successful submission.
    ReturnSignal(RefreshToken),

    /// The search text changed.
    QueryChanged(String),

    /// A fetch completed with the full collection.
    ReportsFetched(Vec<Report>),

    /// A fetch failed. Carries the user-facing message.
    FetchFailed(String),

    /// The user tapped the card at this index of the visible list.
    SelectReport(usize),

    /// The user asked to write a new report.
    ComposeRequested,
}

/// Processes an event, mutates listing state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Actions must be executed in order.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the runtime contract uniform with
/// the other screen handlers.
pub fn handle_event(state: &mut ListingState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::FetchRequested => {
            if state.request_fetch() {
                Ok((true, vec![Action::FetchReports]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::PullToRefresh => {
            if state.sync_state.is_loading() {
                tracing::debug!("refresh ignored, fetch already in flight");
                return Ok((false, vec![]));
            }
            state.refreshing = true;
            state.request_fetch();
            Ok((true, vec![Action::FetchReports]))
        }
        Event::ReturnSignal(token) => {
            if state.last_token.as_ref() == Some(token) {
                tracing::debug!(token = %token, "return signal already handled");
                return Ok((false, vec![]));
            }
            tracing::debug!(token = %token, "return signal received");
            state.last_token = Some(token.clone());
            if state.request_fetch() {
                Ok((true, vec![Action::FetchReports]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::QueryChanged(query) => {
            tracing::trace!(query = %query, "search query updated");
            state.set_query(query);
            Ok((true, vec![]))
        }
        Event::ReportsFetched(reports) => {
            let follow_up = state.complete_fetch(reports.clone());
            Ok((true, follow_up_fetch(follow_up)))
        }
        Event::FetchFailed(message) => {
            let follow_up = state.fail_fetch(message);
            Ok((true, follow_up_fetch(follow_up)))
        }
        Event::SelectReport(index) => {
            let Some(report) = state.visible().get(*index) else {
                tracing::debug!(index = index, "no report at selected index");
                return Ok((false, vec![]));
            };
            tracing::debug!(report_id = %report.id, "report selected");
            Ok((
                false,
                vec![Action::NavigateTo(Route::Detail(DetailParams::from(report)))],
            ))
        }
        Event::ComposeRequested => Ok((false, vec![Action::NavigateTo(Route::Composer)])),
    }
}

fn follow_up_fetch(needed: bool) -> Vec<Action> {
    if needed {
        tracing::debug!("issuing coalesced follow-up fetch");
        vec![Action::FetchReports]
    } else {
        vec![]
    }
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::FetchRequested => "FetchRequested",
        Event::PullToRefresh => "PullToRefresh",
        Event::ReturnSignal(_) => "ReturnSignal",
        Event::QueryChanged(_) => "QueryChanged",
        Event::ReportsFetched(_) => "ReportsFetched",
        Event::FetchFailed(_) => "FetchFailed",
        Event::SelectReport(_) => "SelectReport",
        Event::ComposeRequested => "ComposeRequested",
    }
}
