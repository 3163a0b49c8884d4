//! Domain layer for the Urbanfy client.
//!
//! Core types independent of transport, UI, or runtime concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`report`]: Fetched reports, categories, and the creation payload
//! - [`draft`]: The in-progress report owned by the composer

pub mod draft;
pub mod error;
pub mod report;

pub use draft::{DraftReport, Field, PHOTO_SLOTS};
pub use error::{Result, UrbanfyError};
pub use report::{Category, CreatedReport, NewReport, PhotoPayload, Report};
