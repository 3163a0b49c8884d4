//! Urbanfy: client core for a civic issue-reporting service.
//!
//! Citizens browse the reports others filed (infrastructure problems, broken
//! lighting, sanitation), search them, open one to read it, and file their own
//! with up to three photos. The crate provides:
//! - Accent-insensitive search over the fetched reports
//! - A listing state machine that keeps stale data visible when a fetch fails
//! - A composer that validates locally before touching the network
//! - A navigation boundary with a refresh token so the listing learns about
//!   new reports
//! - A reqwest client for the `/relatos` API

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI Shim (main.rs)                                 │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Listing event handling + SyncController          │
//! │  - ReportComposer                                   │
//! │  - Navigation routes                                │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ API Layer     │   │ Photos        │
//! │ (ui/)         │   │ (api/)        │   │ (photos/)     │
//! │ - View models │   │ - ReportsApi  │   │ - Permission  │
//! │ - Text render │   │ - reqwest     │   │ - Pick/encode │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Search & Infrastructure                    │
//! │  - Report, Category, DraftReport (domain/)          │
//! │  - SearchFilter (search/)                           │
//! │  - Data directory (infrastructure/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing-subscriber fmt layer                     │
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Later sources win: defaults, then a TOML file, then a key/value map, then
//! the environment.
//!
//! ```toml
//! # ~/.config/urbanfy/config.toml
//! api_base_url = "https://relatos.example.org"
//! request_timeout_secs = 15
//! trace_level = "debug"
//! log_file = "~/.local/share/urbanfy/urbanfy.log"
//! ```
//!
//! | Key                    | Environment             |
//! |------------------------|-------------------------|
//! | `api_base_url`         | `URBANFY_API_URL`       |
//! | `request_timeout_secs` | `URBANFY_TIMEOUT_SECS`  |
//! | `trace_level`          | `URBANFY_TRACE_LEVEL`   |
//! | `log_file`             | `URBANFY_LOG_FILE`      |
//!
//! # Example
//!
//! ```rust,no_run
//! use urbanfy::{initialize, Config};
//!
//! # async fn run() -> urbanfy::Result<()> {
//! let config = Config::load(None)?;
//! let mut app = initialize(&config)?;
//! app.listing.fetch_all().await?;
//! app.listing.set_query("agua")?;
//! for report in app.listing.visible() {
//!     println!("{}", report.titulo);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod photos;
pub mod search;
pub mod ui;

pub use api::{HttpReportsApi, ReportsApi};
pub use app::{
    handle_event, Action, DetailParams, Dispatch, Event, ListingState, RefreshToken, ReportComposer,
    Route, Submission, SyncController, SyncState,
};
pub use domain::{
    Category, CreatedReport, DraftReport, Field, NewReport, PhotoPayload, Report, Result, UrbanfyError,
};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_TRACE_LEVEL: &str = "info";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the report service. `relatos` is resolved against it.
    ///
    /// Default: `http://localhost:8000`
    pub api_base_url: String,

    /// Per-request timeout in seconds. Default: 15
    pub request_timeout_secs: u64,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or a full
    /// `EnvFilter` directive. Default: `"info"`
    pub trace_level: String,

    /// Log file path. Defaults to `urbanfy.log` in the data directory.
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            trace_level: DEFAULT_TRACE_LEVEL.to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map keyed like the TOML file.
    ///
    /// # Parsing Rules
    ///
    /// - `request_timeout_secs`: falls back to the default on parse error
    /// - blank values are ignored
    /// - unknown keys are ignored
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use urbanfy::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_base_url".to_string(), "https://relatos.example.org".to_string());
    /// map.insert("request_timeout_secs".to_string(), "abc".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.api_base_url, "https://relatos.example.org");
    /// assert_eq!(config.request_timeout_secs, 15);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self::default().merge_map(map)
    }

    /// Overlays the values present in `map`.
    #[must_use]
    pub fn merge_map(self, map: &BTreeMap<String, String>) -> Self {
        self.merge_with(|key| map.get(key).cloned())
    }

    /// Reads a TOML file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UrbanfyError::Io`] if the file cannot be read and
    /// [`UrbanfyError::Config`] if it is not valid TOML for this struct.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| UrbanfyError::Config(format!("{}: {e}", path.display())))
    }

    /// Overlays the `URBANFY_*` environment variables.
    #[must_use]
    pub fn apply_env(self) -> Self {
        self.merge_with(|key| {
            let var = match key {
                "api_base_url" => "URBANFY_API_URL",
                "request_timeout_secs" => "URBANFY_TIMEOUT_SECS",
                "trace_level" => "URBANFY_TRACE_LEVEL",
                "log_file" => "URBANFY_LOG_FILE",
                _ => return None,
            };
            std::env::var(var).ok()
        })
    }

    fn merge_with(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(url) = get("api_base_url") {
            self.api_base_url = url;
        }
        if let Some(raw) = get("request_timeout_secs") {
            self.request_timeout_secs = raw.parse().unwrap_or_else(|_| {
                tracing::debug!(value = %raw, "invalid request_timeout_secs, using default");
                DEFAULT_TIMEOUT_SECS
            });
        }
        if let Some(level) = get("trace_level") {
            self.trace_level = level;
        }
        if let Some(file) = get("log_file") {
            self.log_file = Some(file);
        }
        self
    }

    /// Checks the values that would otherwise fail at first use.
    ///
    /// # Errors
    ///
    /// Returns [`UrbanfyError::Config`] for an empty or non-http(s)
    /// `api_base_url` or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        let raw = self.api_base_url.trim();
        if raw.is_empty() {
            return Err(UrbanfyError::Config("api_base_url is empty".to_string()));
        }
        let url = url::Url::parse(raw)
            .map_err(|e| UrbanfyError::Config(format!("invalid api_base_url {raw:?}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(UrbanfyError::Config(format!(
                "api_base_url must use http or https, got {:?}",
                url.scheme()
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(UrbanfyError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Defaults, then `path` if given, then the environment; validated.
    ///
    /// # Errors
    ///
    /// See [`from_file`](Self::from_file) and [`validate`](Self::validate).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = path
            .map_or_else(|| Ok(Self::default()), Self::from_file)?
            .apply_env();
        config.validate()?;
        Ok(config)
    }
}

/// Both screens plus the API they share.
///
/// The listing and the composer only communicate through [`Route`]s:
/// [`submit_draft`](Self::submit_draft) hands the composer's route straight
/// to [`arrive`](Self::arrive).
#[derive(Debug)]
pub struct App<A> {
    api: Arc<A>,
    pub listing: SyncController<Arc<A>>,
    pub composer: ReportComposer,
}

impl<A: ReportsApi> App<A> {
    pub fn new(api: A) -> Self {
        let api = Arc::new(api);
        Self {
            listing: SyncController::new(Arc::clone(&api)),
            composer: ReportComposer::new(),
            api,
        }
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Submits the composer's draft and, on success, delivers the refresh
    /// token to the listing.
    ///
    /// # Errors
    ///
    /// Returns the composer's error; the listing is not touched and the draft
    /// is kept.
    pub async fn submit_draft(&mut self) -> Result<Submission> {
        let submission = self.composer.submit(self.api.as_ref()).await?;
        self.arrive(&submission.route).await?;
        Ok(submission)
    }

    /// Applies a navigation to `route` on the screen it targets.
    ///
    /// Arriving at the listing fetches on first mount or when a new refresh
    /// token is carried. Other routes need no listing work.
    ///
    /// # Errors
    ///
    /// Propagates [`SyncController::dispatch`] errors.
    pub async fn arrive(&mut self, route: &Route) -> Result<Dispatch> {
        match route {
            Route::Listing {
                refresh: Some(token),
            } => self.listing.on_return_signal(token.clone()).await,
            Route::Listing { refresh: None } if self.listing.sync_state() == &SyncState::Idle => {
                self.listing.fetch_all().await
            }
            _ => Ok(Dispatch::default()),
        }
    }

    /// Abandons the draft and returns the route back to the listing.
    pub fn leave_composer(&mut self) -> Route {
        self.composer.discard();
        Route::Listing { refresh: None }
    }
}

/// Builds the runtime from configuration.
///
/// Validates `config`, installs tracing, and creates the HTTP client.
///
/// # Errors
///
/// Returns [`UrbanfyError::Config`] for invalid configuration.
pub fn initialize(config: &Config) -> Result<App<HttpReportsApi>> {
    config.validate()?;
    observability::init_tracing(config);
    tracing::debug!(api_base_url = %config.api_base_url, "initializing urbanfy client");

    let api = HttpReportsApi::new(config)?;
    Ok(App::new(api))
}
