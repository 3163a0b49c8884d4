//! Empty state component renderer.

use crate::ui::viewmodel::EmptyState;
use std::io::{self, Write};

/// Writes the empty state message centered in `cols` columns.
pub fn render_empty_state<W: Write>(out: &mut W, empty: &EmptyState, cols: usize) -> io::Result<()> {
    let msg_len = empty.message.chars().count();
    let padding = cols.saturating_sub(msg_len) / 2;

    writeln!(out)?;
    writeln!(out, "{}{}", " ".repeat(padding), empty.message)
}
