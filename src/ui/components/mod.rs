//! Composable screen component renderers.
//!
//! Each component writes one part of a screen to any [`std::io::Write`].
//!
//! # Components
//!
//! - [`header`]: Centered title bar
//! - [`search`]: Active query line
//! - [`cards`]: Numbered report cards
//! - [`empty`]: Empty state message
//! - [`detail`]: Fields and photos of one report

mod cards;
mod detail;
mod empty;
mod header;
mod search;

pub use cards::render_cards;
pub use detail::render_detail_body;
pub use empty::render_empty_state;
pub use header::render_header;
pub use search::render_search_bar;
