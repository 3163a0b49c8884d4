//! Presentation layer.
//!
//! ```text
//! ListingState → compute_viewmodel → ListingViewModel → render_listing → text
//! DetailParams → DetailViewModel → render_detail → text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready data computed from screen state
//! - [`renderer`]: Layout selection for each screen
//! - [`components`]: Renderers for the individual parts of a screen

pub mod components;
pub mod renderer;
pub mod viewmodel;

pub use renderer::{
    render_detail, render_detail_to_string, render_listing, render_listing_to_string, DEFAULT_COLS,
};
pub use viewmodel::{
    DetailViewModel, EmptyState, HeaderInfo, ListingViewModel, ReportCard, SearchBarInfo, StatusInfo,
};
