//! Listing synchronization state.
//!
//! The listing moves through `Idle → Loading → {Loaded, Failed}`. Refreshing is
//! an orthogonal flag kept on [`ListingState`](super::ListingState) and is only
//! set while a pull-to-refresh fetch is in flight.

/// Current fetch state of the listing screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyncState {
    /// Nothing fetched yet.
    #[default]
    Idle,

    /// A fetch of the full collection is in flight.
    Loading,

    /// The most recent fetch succeeded.
    Loaded,

    /// The most recent fetch failed. Previously fetched reports are kept.
    Failed {
        /// User-facing description of the failure.
        message: String,
    },
}

impl SyncState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The failure message, when the last fetch failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}
