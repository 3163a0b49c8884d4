//! Side effects requested by the listing event handler.
//!
//! [`handle_event`](super::handle_event) never performs I/O. It returns
//! actions, and the runtime ([`SyncController`](super::SyncController))
//! executes them and feeds the outcome back in as events.

use super::navigation::Route;

/// Commands executed by the runtime after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Issue one read of the full report collection.
    ///
    /// The outcome comes back as `Event::ReportsFetched` or `Event::FetchFailed`.
    FetchReports,

    /// Hand control to another screen.
    NavigateTo(Route),
}
