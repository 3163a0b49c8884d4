//! New-report form controller.
//!
//! [`ReportComposer`] owns the [`DraftReport`] for the lifetime of the form.
//! Local checks (validation, slot bounds, photo permission) always run before
//! any collaborator is called. A failed submission leaves the draft as it was
//! so the user can retry without retyping.

use super::navigation::{RefreshToken, Route};
use crate::api::ReportsApi;
use crate::domain::draft::{DraftReport, Field, PHOTO_SLOTS};
use crate::domain::error::{Result, UrbanfyError};
use crate::domain::{Category, CreatedReport};
use crate::photos::{Permission, PhotoLibrary, PickResult};

/// Confirmation shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Relato enviado com sucesso!";

/// Result of [`ReportComposer::pick_photo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// The picked image now occupies the slot.
    Stored,
    /// The user cancelled; the slot is unchanged.
    Cancelled,
}

/// A completed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// What the server answered.
    pub created: CreatedReport,
    /// Token handed back to the listing.
    pub token: RefreshToken,
    /// Where to navigate next: the listing, carrying `token`.
    pub route: Route,
}

#[derive(Debug, Clone, Default)]
pub struct ReportComposer {
    draft: DraftReport,
}

impl ReportComposer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn draft(&self) -> &DraftReport {
        &self.draft
    }

    /// Sets a field, truncating over-long input.
    ///
    /// # Errors
    ///
    /// Returns [`UrbanfyError::InvalidCategory`] for an unknown category label.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<()> {
        self.draft.set_field(field, value)
    }

    pub fn set_category(&mut self, category: Category) {
        self.draft.set_category(category);
    }

    /// Asks the library for permission, then for an image, and stores it in
    /// `slot`, overwriting what was there.
    ///
    /// # Errors
    ///
    /// - [`UrbanfyError::InvalidSlot`] before the library is consulted
    /// - [`UrbanfyError::PermissionDenied`] when access is refused
    /// - [`UrbanfyError::PhotoLibrary`] for any other library failure
    ///
    /// The slot is untouched on every error.
    pub async fn pick_photo<L>(&mut self, library: &L, slot: usize) -> Result<PickOutcome>
    where
        L: PhotoLibrary + ?Sized,
    {
        if slot >= PHOTO_SLOTS {
            return Err(UrbanfyError::InvalidSlot(slot));
        }

        let permission = library.request_permission().await.map_err(into_library_error)?;
        if permission == Permission::Denied {
            tracing::debug!(slot = slot, "photo permission denied");
            return Err(UrbanfyError::PermissionDenied);
        }

        match library.pick_image().await.map_err(into_library_error)? {
            PickResult::Cancelled => {
                tracing::debug!(slot = slot, "photo pick cancelled");
                Ok(PickOutcome::Cancelled)
            }
            PickResult::Picked(photo) => {
                self.draft.set_photo(slot, photo)?;
                tracing::debug!(slot = slot, photo_count = self.draft.photo_count(), "photo stored");
                Ok(PickOutcome::Stored)
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`UrbanfyError::MissingField`] naming the first blank field.
    pub fn validate(&self) -> Result<()> {
        self.draft.validate()
    }

    /// Validates, sends the report, and on success resets the draft.
    ///
    /// # Errors
    ///
    /// Validation errors are returned without calling `api`. Network and
    /// server errors are returned as-is; in both cases the draft is kept.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn submit<A>(&mut self, api: &A) -> Result<Submission>
    where
        A: ReportsApi + ?Sized,
    {
        let payload = self.draft.to_payload()?;
        let created = api.create_report(&payload).await.map_err(|e| {
            tracing::warn!(error = %e, "report submission failed, draft kept");
            e
        })?;

        let token = RefreshToken::generate();
        self.draft.reset();
        tracing::debug!(report_id = ?created.id, token = %token, "report submitted");

        Ok(Submission {
            created,
            route: Route::Listing {
                refresh: Some(token.clone()),
            },
            token,
        })
    }

    /// Abandons the draft (the user navigated away).
    pub fn discard(&mut self) {
        self.draft.reset();
    }
}

/// User-facing text for a failed submission.
#[must_use]
pub fn failure_message(err: &UrbanfyError) -> String {
    match err {
        UrbanfyError::Server {
            detail: Some(detail),
            ..
        } => format!("Erro ao enviar relato:\n{detail}"),
        other => other.user_message(),
    }
}

fn into_library_error(err: UrbanfyError) -> UrbanfyError {
    match err {
        UrbanfyError::PermissionDenied | UrbanfyError::PhotoLibrary(_) => err,
        other => UrbanfyError::PhotoLibrary(other.to_string()),
    }
}
