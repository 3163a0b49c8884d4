//! Application layer: screen state, events, and the controllers that drive them.
//!
//! The listing screen follows a unidirectional data flow:
//!
//! ```text
//! Event → handle_event → ListingState mutation → Actions → SyncController
//!               ↑                                               ↓
//!               └──────────── ReportsFetched / FetchFailed ─────┘
//! ```
//!
//! The composer is simpler: [`ReportComposer`] owns the draft and calls the
//! photo library and the API directly. The two screens only meet at the
//! navigation boundary, through a [`Route::Listing`] carrying a
//! [`RefreshToken`].
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`composer`]: New-report form controller
//! - [`handler`]: Listing event processing and state transitions
//! - [`modes`]: Fetch state machine
//! - [`navigation`]: Routes, detail parameters, and refresh tokens
//! - [`state`]: Listing state container and view model computation
//! - [`store`]: Fetched and visible report sequences
//! - [`sync`]: Async listing runtime
//!
//! # Example
//!
//! ```rust
//! use urbanfy::app::{handle_event, Action, Event, ListingState};
//!
//! let mut state = ListingState::new();
//! let (_, actions) = handle_event(&mut state, &Event::FetchRequested)?;
//! assert_eq!(actions, vec![Action::FetchReports]);
//! # Ok::<(), urbanfy::UrbanfyError>(())
//! ```

pub mod actions;
pub mod composer;
pub mod handler;
pub mod modes;
pub mod navigation;
pub mod state;
pub mod store;
pub mod sync;

pub use actions::Action;
pub use composer::{failure_message, PickOutcome, ReportComposer, Submission, SUCCESS_MESSAGE};
pub use handler::{handle_event, Event};
pub use modes::SyncState;
pub use navigation::{DetailParams, RefreshToken, Route};
pub use state::{ListingState, EMPTY_LISTING_MESSAGE};
pub use store::ReportStore;
pub use sync::{Dispatch, SyncController};
