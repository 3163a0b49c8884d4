//! Top-level rendering coordinator.
//!
//! Chooses the layout for a view model and delegates each part to
//! [`components`]. Output is plain text; the caller decides where it goes
//! (stdout for the CLI, a buffer in tests).
//!
//! # Example
//!
//! ```rust
//! use urbanfy::app::ListingState;
//! use urbanfy::ui::render_listing_to_string;
//!
//! let state = ListingState::new();
//! let text = render_listing_to_string(&state.compute_viewmodel());
//! assert!(text.contains("Nenhum relato encontrado."));
//! ```

use crate::ui::components;
use crate::ui::viewmodel::{DetailViewModel, ListingViewModel};
use std::io::{self, Write};

/// Width the CLI lays text out in.
pub const DEFAULT_COLS: usize = 72;

/// Renders the listing screen.
///
/// Layout, top to bottom: header, search line (when a query is active),
/// status line (while loading or after a failed fetch), then the cards or
/// the empty state.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_listing<W: Write>(out: &mut W, vm: &ListingViewModel, cols: usize) -> io::Result<()> {
    components::render_header(out, &vm.header, cols)?;
    components::render_search_bar(out, &vm.search_bar)?;

    if vm.status.loading {
        writeln!(out, "Carregando...")?;
    } else if vm.status.refreshing {
        writeln!(out, "Atualizando...")?;
    }
    if let Some(error) = &vm.status.error {
        writeln!(out, "{error}")?;
        writeln!(out)?;
    }

    if let Some(empty) = &vm.empty_state {
        return components::render_empty_state(out, empty, cols);
    }
    components::render_cards(out, &vm.cards, cols)
}

/// Renders the detail screen.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_detail<W: Write>(out: &mut W, vm: &DetailViewModel, cols: usize) -> io::Result<()> {
    components::render_detail_body(out, vm, cols)
}

#[must_use]
pub fn render_listing_to_string(vm: &ListingViewModel) -> String {
    to_string(|buf| render_listing(buf, vm, DEFAULT_COLS))
}

#[must_use]
pub fn render_detail_to_string(vm: &DetailViewModel) -> String {
    to_string(|buf| render_detail(buf, vm, DEFAULT_COLS))
}

fn to_string(render: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
    let mut buf = Vec::new();
    // Writes into a Vec cannot fail.
    let _ = render(&mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{DetailParams, ListingState};
    use crate::domain::Report;

    fn report(id: &str, titulo: &str, fotos: Vec<&str>) -> Report {
        Report {
            id: id.to_string(),
            titulo: titulo.to_string(),
            descricao: "Descrição do problema".to_string(),
            endereco: "Rua X, 100".to_string(),
            categoria: "Iluminação e Energia".to_string(),
            fotos: fotos.into_iter().map(String::from).collect(),
            data_criacao: "2024-05-01T10:00:00".to_string(),
        }
    }

    fn loaded(reports: Vec<Report>) -> ListingState {
        let mut state = ListingState::new();
        state.request_fetch();
        state.complete_fetch(reports);
        state
    }

    #[test]
    fn test_listing_shows_cards_in_order() {
        let state = loaded(vec![
            report("1", "Poste apagado", vec![]),
            report("2", "Fiação exposta", vec!["https://blob.example/2.jpg"]),
        ]);
        let text = render_listing_to_string(&state.compute_viewmodel());

        assert!(text.contains("Relatos (2)"));
        let first = text.find("[1] Poste apagado").unwrap();
        let second = text.find("[2] Fiação exposta").unwrap();
        assert!(first < second);
        assert!(text.contains("01/05/2024"));
        assert!(text.contains("https://via.placeholder.com/150"));
        assert!(text.contains("https://blob.example/2.jpg"));
    }

    #[test]
    fn test_listing_failure_keeps_cards() {
        let mut state = loaded(vec![report("1", "Poste apagado", vec![])]);
        state.request_fetch();
        state.fail_fetch("Não foi possível conectar ao servidor.");
        let text = render_listing_to_string(&state.compute_viewmodel());

        assert!(text.contains("Não foi possível conectar ao servidor."));
        assert!(text.contains("[1] Poste apagado"));
    }

    #[test]
    fn test_listing_empty_state_with_query() {
        let mut state = loaded(vec![report("1", "Poste apagado", vec![])]);
        state.set_query("esgoto");
        let text = render_listing_to_string(&state.compute_viewmodel());

        assert!(text.contains("Buscar: esgoto"));
        assert!(text.contains("Nenhum relato encontrado."));
        assert!(!text.contains("[1]"));
    }

    #[test]
    fn test_detail_lists_photos() {
        let params = DetailParams::from(&report("1", "Poste apagado", vec!["a.jpg", "b.jpg"]));
        let text = render_detail_to_string(&DetailViewModel::from(&params));

        assert!(text.starts_with("Poste apagado\n"));
        assert!(text.contains("Endereço:  Rua X, 100"));
        assert!(text.contains("  1. a.jpg"));
        assert!(text.contains("  2. b.jpg"));

        let params = DetailParams::from(&report("1", "Poste apagado", vec!["a.jpg"]));
        let text = render_detail_to_string(&DetailViewModel::from(&params));
        assert!(text.contains("Foto: a.jpg"));
    }
}
