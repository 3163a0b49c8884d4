//! Photo-library collaborator.
//!
//! The composer asks for permission first and only then lets the user pick an
//! image. Implementations hand back the picked image already base64-encoded,
//! ready to be placed in a creation payload.

mod file;

pub use file::FilePhotoLibrary;

use crate::domain::error::Result;
use crate::domain::PhotoPayload;

/// Outcome of a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Outcome of an image pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickResult {
    /// The user backed out without choosing.
    Cancelled,
    /// The chosen image, base64-encoded.
    Picked(PhotoPayload),
}

/// Access to the user's photos.
#[async_trait::async_trait]
pub trait PhotoLibrary: Send + Sync {
    /// Asks for access to the library.
    ///
    /// # Errors
    ///
    /// Returns an error when the permission prompt itself fails; a refusal is
    /// `Ok(Permission::Denied)`.
    async fn request_permission(&self) -> Result<Permission>;

    /// Lets the user pick one image.
    ///
    /// # Errors
    ///
    /// Returns an error when the image cannot be read or encoded.
    async fn pick_image(&self) -> Result<PickResult>;
}
