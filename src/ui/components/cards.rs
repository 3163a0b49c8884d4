//! Report card list renderer.
//!
//! Each card takes three lines plus a separator:
//!
//! ```text
//! [1] Buraco na via                      01/05/2024
//!     Infraestrutura e Mobilidade
//!     Buraco grande perto do ponto de ônibus
//! ------------------------------------------
//! ```

use crate::ui::viewmodel::ReportCard;
use std::io::{self, Write};

/// Longest description excerpt shown on a card, in characters.
const EXCERPT_CHARS: usize = 60;

/// Writes every card, numbered from 1 in display order.
pub fn render_cards<W: Write>(out: &mut W, cards: &[ReportCard], cols: usize) -> io::Result<()> {
    for (index, card) in cards.iter().enumerate() {
        render_card(out, index + 1, card, cols)?;
    }
    Ok(())
}

fn render_card<W: Write>(out: &mut W, number: usize, card: &ReportCard, cols: usize) -> io::Result<()> {
    let label = format!("[{number}] {}", card.titulo);
    let gap = cols
        .saturating_sub(label.chars().count() + card.date.chars().count())
        .max(1);

    writeln!(out, "{label}{}{}", " ".repeat(gap), card.date)?;
    writeln!(out, "    {}", card.categoria)?;
    if !card.descricao.trim().is_empty() {
        writeln!(out, "    {}", excerpt(&card.descricao))?;
    }
    writeln!(out, "    {}", card.thumbnail)?;
    writeln!(out, "{}", "-".repeat(cols))
}

fn excerpt(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default().trim();
    match first_line.char_indices().nth(EXCERPT_CHARS) {
        Some((idx, _)) => format!("{}...", &first_line[..idx]),
        None => first_line.to_string(),
    }
}
