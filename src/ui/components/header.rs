//! Header component renderer.

use crate::ui::viewmodel::HeaderInfo;
use std::io::{self, Write};

/// Writes the title centered in `cols` columns, underlined with `=`.
///
/// ```text
///                Relatos (3)
/// ==========================================
/// ```
pub fn render_header<W: Write>(out: &mut W, header: &HeaderInfo, cols: usize) -> io::Result<()> {
    let title_len = header.title.chars().count();
    let padding = cols.saturating_sub(title_len) / 2;

    writeln!(out, "{}{}", " ".repeat(padding), header.title)?;
    writeln!(out, "{}", "=".repeat(cols))
}
