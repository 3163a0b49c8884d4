//! View model types representing renderable screen state.
//!
//! View models are computed from application state and consumed by the
//! renderer. They contain no business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use urbanfy::ui::viewmodel::{EmptyState, HeaderInfo, ListingViewModel, SearchBarInfo, StatusInfo};
//!
//! let vm = ListingViewModel {
//!     header: HeaderInfo { title: "Relatos (0)".to_string() },
//!     search_bar: SearchBarInfo { query: String::new() },
//!     status: StatusInfo::default(),
//!     cards: vec![],
//!     empty_state: Some(EmptyState { message: "Nenhum relato encontrado.".to_string() }),
//! };
//! assert!(vm.cards.is_empty());
//! ```

use crate::app::DetailParams;
use crate::domain::Report;

/// Complete view model of the listing screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingViewModel {
    pub header: HeaderInfo,

    pub search_bar: SearchBarInfo,

    /// Loading, refreshing, and error indicators.
    pub status: StatusInfo,

    /// Visible reports, in display order.
    pub cards: Vec<ReportCard>,

    /// Set when there is nothing to show and nothing is loading.
    pub empty_state: Option<EmptyState>,
}

/// One report as shown in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCard {
    pub id: String,
    pub titulo: String,
    pub descricao: String,
    pub categoria: String,
    /// Creation date, `dd/mm/yyyy`.
    pub date: String,
    /// First photo URL, or the placeholder image.
    pub thumbnail: String,
}

impl From<&Report> for ReportCard {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id.clone(),
            titulo: report.titulo.clone(),
            descricao: report.descricao.clone(),
            categoria: report.categoria.clone(),
            date: report.formatted_date(),
            thumbnail: report.thumbnail().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Current search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
}

/// Fetch indicators.
///
/// `loading` is the blocking first-load indicator; during a pull-to-refresh
/// only `refreshing` is set, and the previous cards stay on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub loading: bool,
    pub refreshing: bool,
    /// Message of the last failed fetch.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}

/// Read-only view of one report, built from navigation parameters alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailViewModel {
    pub titulo: String,
    pub descricao: String,
    pub endereco: String,
    pub categoria: String,
    pub date: String,
    /// Photo URLs in order.
    pub photos: Vec<String>,
    /// Exactly one photo; renderers may show it enlarged.
    pub single_photo: bool,
}

impl From<&DetailParams> for DetailViewModel {
    fn from(params: &DetailParams) -> Self {
        let report = Report::from(params.clone());
        Self {
            date: report.formatted_date(),
            single_photo: report.fotos.len() == 1,
            titulo: report.titulo,
            descricao: report.descricao,
            endereco: report.endereco,
            categoria: report.categoria,
            photos: report.fotos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::PLACEHOLDER_IMAGE_URL;

    fn params(fotos: Vec<&str>) -> DetailParams {
        DetailParams {
            id: "9".to_string(),
            titulo: "Vazamento".to_string(),
            descricao: "Água na calçada".to_string(),
            endereco: "Rua Y, 5".to_string(),
            categoria: "Água e Esgoto".to_string(),
            data_criacao: "2024-03-15T08:30:00.123456".to_string(),
            fotos: fotos.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn test_card_uses_placeholder_without_photos() {
        let report = Report::from(params(vec![]));
        let card = ReportCard::from(&report);
        assert_eq!(card.thumbnail, PLACEHOLDER_IMAGE_URL);
        assert_eq!(card.date, "15/03/2024");
    }

    #[test]
    fn test_detail_single_photo_flag() {
        let vm = DetailViewModel::from(&params(vec!["https://blob.example/a.jpg"]));
        assert!(vm.single_photo);
        assert_eq!(vm.date, "15/03/2024");

        let vm = DetailViewModel::from(&params(vec!["a", "b"]));
        assert!(!vm.single_photo);
        assert_eq!(vm.photos, vec!["a".to_string(), "b".to_string()]);
    }
}
