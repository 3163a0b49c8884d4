//! Error types for the Urbanfy client.
//!
//! This module defines the centralized error type [`UrbanfyError`] and a type alias
//! [`Result`] used throughout the crate. Every variant is recoverable at the screen
//! level: none of them terminates the process, and none is retried automatically.

use crate::domain::draft::{Field, PHOTO_SLOTS};
use crate::domain::report::Category;
use thiserror::Error;

/// Message shown when the transport fails before any response arrives.
pub const CONNECTIVITY_MESSAGE: &str = "Não foi possível conectar ao servidor.";

/// Message shown when a required text field is blank at submit time.
pub const MISSING_FIELD_MESSAGE: &str = "Preencha todos os campos obrigatórios.";

/// Message shown when photo-library access is refused.
pub const PERMISSION_MESSAGE: &str = "Precisamos da sua permissão para acessar suas fotos. \
Por favor, permita o acesso nas configurações do seu dispositivo.";

/// Message shown when the photo library fails for a reason other than denial.
pub const PHOTO_LIBRARY_MESSAGE: &str =
    "Não foi possível acessar suas fotos. Por favor, tente novamente.";

/// Message shown when a success response carries an unreadable body.
pub const DECODE_MESSAGE: &str = "Resposta inesperada do servidor. Tente novamente mais tarde.";

/// The main error type for Urbanfy operations.
///
/// The taxonomy mirrors how each failure is recovered:
///
/// - [`MissingField`](Self::MissingField): local validation, no network call made
/// - [`PermissionDenied`](Self::PermissionDenied) / [`PhotoLibrary`](Self::PhotoLibrary):
///   local, the rest of the form is unaffected
/// - [`Network`](Self::Network): no response at all
/// - [`Server`](Self::Server): non-2xx response, optionally with a `detail`
#[derive(Debug, Error)]
pub enum UrbanfyError {
    /// A required draft field was blank at submit time.
    #[error("Missing required field: {0}")]
    MissingField(Field),

    /// The photo-library collaborator refused access.
    #[error("Photo library permission denied")]
    PermissionDenied,

    /// The photo library failed while picking or encoding an image.
    #[error("Photo library error: {0}")]
    PhotoLibrary(String),

    /// A category label matching none of the four categories.
    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    /// A photo slot index outside `0..PHOTO_SLOTS`.
    #[error("Invalid photo slot: {0}")]
    InvalidSlot(usize),

    /// Transport-level failure: the request produced no response.
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    ///
    /// `detail` holds the server-provided `detail` field rendered as text, when the
    /// body carried one.
    #[error("Server error ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Server {
        /// HTTP status code.
        status: u16,
        /// Server-reported detail text, if present.
        detail: Option<String>,
    },

    /// A success response whose body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A route or navigation parameter set could not be decoded.
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// Configuration is invalid or could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl UrbanfyError {
    /// Returns the user-facing text for this error.
    ///
    /// Server errors surface the server-provided detail when present; otherwise
    /// a generic message naming the status. Transport failures always map to
    /// the generic connectivity message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingField(_) => MISSING_FIELD_MESSAGE.to_string(),
            Self::PermissionDenied => PERMISSION_MESSAGE.to_string(),
            Self::PhotoLibrary(_) => PHOTO_LIBRARY_MESSAGE.to_string(),
            Self::InvalidCategory(label) => format!(
                "Categoria desconhecida: \"{label}\". Escolha uma de: {}.",
                Category::ALL.map(Category::label).join(", ")
            ),
            Self::InvalidSlot(_) => format!("Um relato aceita no máximo {PHOTO_SLOTS} fotos."),
            Self::Decode(_) => DECODE_MESSAGE.to_string(),
            Self::Network(_) => CONNECTIVITY_MESSAGE.to_string(),
            Self::Server {
                detail: Some(detail),
                ..
            } => format!("Erro no servidor:\n{detail}"),
            Self::Server {
                status,
                detail: None,
            } => format!("Erro no servidor (HTTP {status})."),
            other => other.to_string(),
        }
    }
}

/// A specialized `Result` type for Urbanfy operations.
pub type Result<T> = std::result::Result<T, UrbanfyError>;
