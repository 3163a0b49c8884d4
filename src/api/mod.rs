//! Remote report API.
//!
//! [`ReportsApi`] is the seam between the screens and the server:
//!
//! - `GET /relatos` returns every report (photos as URLs)
//! - `POST /relatos` creates one (photos as base64 payloads)
//!
//! [`HttpReportsApi`] is the reqwest implementation used at runtime; tests
//! substitute in-memory fakes.

mod http;

pub use http::HttpReportsApi;

use crate::domain::error::Result;
use crate::domain::{CreatedReport, NewReport, Report};
use std::sync::Arc;

/// Operations the client performs against the report service.
#[async_trait::async_trait]
pub trait ReportsApi: Send + Sync {
    /// Fetches the full report collection.
    ///
    /// # Errors
    ///
    /// [`Network`](crate::UrbanfyError::Network) when no response arrives,
    /// [`Server`](crate::UrbanfyError::Server) for a non-2xx status, and
    /// [`Decode`](crate::UrbanfyError::Decode) for an unreadable success body.
    async fn list_reports(&self) -> Result<Vec<Report>>;

    /// Submits a new report.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`list_reports`](Self::list_reports).
    async fn create_report(&self, report: &NewReport) -> Result<CreatedReport>;
}

#[async_trait::async_trait]
impl<T: ReportsApi + ?Sized> ReportsApi for Arc<T> {
    async fn list_reports(&self) -> Result<Vec<Report>> {
        (**self).list_reports().await
    }

    async fn create_report(&self, report: &NewReport) -> Result<CreatedReport> {
        (**self).create_report(report).await
    }
}
