//! Report domain model.
//!
//! A [`Report`] ("relato") is a citizen-submitted municipal incident record as
//! returned by `GET /relatos`. Reports are read-only snapshots: the client never
//! mutates one, it only replaces the whole collection on every fetch.
//!
//! Photos have two distinct representations. Fetched reports carry photo URLs
//! (`Vec<String>`), while the creation payload carries base64 image data
//! ([`PhotoPayload`]). The server transcodes between them and the two are never
//! interchangeable on the client.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::UrbanfyError;

/// Image shown for a report without photos.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// Closed set of report categories offered by the composer.
///
/// Serialized as the exact Portuguese label the API stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "Iluminação e Energia")]
    IluminacaoEnergia,
    #[serde(rename = "Infraestrutura e Mobilidade")]
    InfraestruturaMobilidade,
    #[serde(rename = "Limpeza Urbana e Meio Ambiente")]
    LimpezaUrbanaMeioAmbiente,
    #[serde(rename = "Água e Esgoto")]
    AguaEsgoto,
}

impl Category {
    /// All categories in selector order. The first one is the draft default.
    pub const ALL: [Self; 4] = [
        Self::IluminacaoEnergia,
        Self::InfraestruturaMobilidade,
        Self::LimpezaUrbanaMeioAmbiente,
        Self::AguaEsgoto,
    ];

    /// The label sent to and stored by the API.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::IluminacaoEnergia => "Iluminação e Energia",
            Self::InfraestruturaMobilidade => "Infraestrutura e Mobilidade",
            Self::LimpezaUrbanaMeioAmbiente => "Limpeza Urbana e Meio Ambiente",
            Self::AguaEsgoto => "Água e Esgoto",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UrbanfyError;

    /// Parses an exact label, or a label matched case- and accent-insensitively
    /// (so `"agua e esgoto"` selects [`Category::AguaEsgoto`]).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = crate::search::normalize(s.trim());
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s || crate::search::normalize(c.label()) == wanted)
            .ok_or_else(|| UrbanfyError::InvalidCategory(s.to_string()))
    }
}

/// A report as returned by the API.
///
/// `categoria` is kept as the raw server string. The client trusts the server
/// to stay within [`Category`] but does not reject anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub titulo: String,
    pub descricao: String,
    pub endereco: String,
    pub categoria: String,
    /// Photo URLs, in submission order.
    #[serde(default)]
    pub fotos: Vec<String>,
    pub data_criacao: String,
}

impl Report {
    /// The four fields the search filter looks at.
    #[must_use]
    pub fn searchable_fields(&self) -> [&str; 4] {
        [&self.titulo, &self.descricao, &self.categoria, &self.endereco]
    }

    /// Parses `data_criacao`.
    ///
    /// The server writes a naive ISO 8601 timestamp, usually with microseconds
    /// (`2024-05-01T13:45:10.123456`). RFC 3339 with an offset is accepted too.
    #[must_use]
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        let raw = self.data_criacao.trim();
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
    }

    /// Creation date in pt-BR form (`dd/mm/yyyy`), or the raw value when it
    /// cannot be parsed.
    #[must_use]
    pub fn formatted_date(&self) -> String {
        self.created_at().map_or_else(
            || self.data_criacao.clone(),
            |dt| dt.format("%d/%m/%Y").to_string(),
        )
    }

    /// First photo URL, or [`PLACEHOLDER_IMAGE_URL`].
    #[must_use]
    pub fn thumbnail(&self) -> &str {
        self.fotos.first().map_or(PLACEHOLDER_IMAGE_URL, String::as_str)
    }
}

/// A base64-encoded image as accepted by `POST /relatos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoPayload(String);

impl PhotoPayload {
    #[must_use]
    pub fn new(base64: impl Into<String>) -> Self {
        Self(base64.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Payloads that are blank after trimming count as no photo.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Creation body for `POST /relatos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReport {
    pub titulo: String,
    pub descricao: String,
    pub endereco: String,
    pub categoria: Category,
    pub fotos: Vec<PhotoPayload>,
}

/// Success body of `POST /relatos`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreatedReport {
    #[serde(default)]
    pub mensagem: String,
    #[serde(default)]
    pub id: Option<String>,
}
