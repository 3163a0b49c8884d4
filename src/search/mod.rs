//! Report search.
//!
//! [`filter`] maps a query and a report set to the matching subsequence using
//! case- and accent-insensitive substring matching over the title,
//! description, address, and category.

mod filter;

pub use filter::{filter, matches, normalize};
