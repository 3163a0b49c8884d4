use super::ReportsApi;
use crate::domain::error::{Result, UrbanfyError};
use crate::domain::{CreatedReport, NewReport, Report};
use crate::Config;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Response, StatusCode};
use std::time::Duration;
use url::Url;

const REPORTS_PATH: &str = "relatos";

/// reqwest-backed [`ReportsApi`].
#[derive(Debug, Clone)]
pub struct HttpReportsApi {
    client: reqwest::Client,
    reports_url: Url,
}

impl HttpReportsApi {
    /// Builds a client for `config.api_base_url` with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`UrbanfyError::Config`] for an unparsable base URL or when the
    /// HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let mut base = Url::parse(&config.api_base_url)
            .map_err(|e| UrbanfyError::Config(format!("invalid api_base_url: {e}")))?;
        // Url::join replaces the last segment unless the path ends with '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let reports_url = base
            .join(REPORTS_PATH)
            .map_err(|e| UrbanfyError::Config(format!("invalid api_base_url: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| UrbanfyError::Config(format!("failed to build HTTP client: {e}")))?;

        tracing::debug!(url = %reports_url, "report API client ready");

        Ok(Self { client, reports_url })
    }

    #[must_use]
    pub fn reports_url(&self) -> &Url {
        &self.reports_url
    }

    /// Reads the body of a response, turning non-2xx statuses into
    /// [`UrbanfyError::Server`].
    async fn read_body(response: Response) -> Result<String> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UrbanfyError::Network(e.to_string()))?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(server_error(status, &body))
        }
    }
}

/// Extracts the `detail` field of an error body, rendered as text.
///
/// String details are used as-is; structured ones (validation error lists)
/// are pretty-printed JSON.
fn server_error(status: StatusCode, body: &str) -> UrbanfyError {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|mut value| value.get_mut("detail").map(serde_json::Value::take))
        .filter(|detail| !detail.is_null())
        .map(|detail| match detail {
            serde_json::Value::String(text) => text,
            other => serde_json::to_string_pretty(&other).unwrap_or_else(|_| other.to_string()),
        });

    tracing::warn!(status = status.as_u16(), detail = ?detail, "report API returned an error");

    UrbanfyError::Server {
        status: status.as_u16(),
        detail,
    }
}

fn transport_error(err: &reqwest::Error) -> UrbanfyError {
    tracing::warn!(error = %err, "report API unreachable");
    UrbanfyError::Network(err.to_string())
}

#[async_trait::async_trait]
impl ReportsApi for HttpReportsApi {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_reports(&self) -> Result<Vec<Report>> {
        let response = self
            .client
            .get(self.reports_url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let body = Self::read_body(response).await?;
        let reports: Vec<Report> = serde_json::from_str(&body)
            .map_err(|e| UrbanfyError::Decode(format!("invalid report list: {e}")))?;

        tracing::debug!(report_count = reports.len(), "reports listed");
        Ok(reports)
    }

    #[tracing::instrument(level = "debug", skip(self, report), fields(photo_count = report.fotos.len()))]
    async fn create_report(&self, report: &NewReport) -> Result<CreatedReport> {
        let response = self
            .client
            .post(self.reports_url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .json(report)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let body = Self::read_body(response).await?;
        let created = serde_json::from_str::<CreatedReport>(&body).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "create response body not understood, ignoring");
            CreatedReport::default()
        });

        tracing::debug!(report_id = ?created.id, "report created");
        Ok(created)
    }
}
