//! Search bar component renderer.

use crate::ui::viewmodel::SearchBarInfo;
use std::io::{self, Write};

/// Writes the active query. Nothing is written for a blank query.
pub fn render_search_bar<W: Write>(out: &mut W, search: &SearchBarInfo) -> io::Result<()> {
    let query = search.query.trim();
    if query.is_empty() {
        return Ok(());
    }
    writeln!(out, "Buscar: {query}")?;
    writeln!(out)
}
