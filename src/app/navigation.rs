//! Navigation boundary between screens.
//!
//! Screens never share state directly. The composer tells the listing about a
//! new report by navigating back with a fresh [`RefreshToken`] in the query
//! string, and the listing hands a selected report to the detail screen as a
//! flat parameter set ([`DetailParams`]). Routes round-trip through
//! [`Route::to_path`] and [`Route::parse`] so any host navigation framework
//! that speaks paths can carry them.

use crate::domain::error::{Result, UrbanfyError};
use crate::domain::Report;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use url::form_urlencoded;

const LISTING_PATH: &str = "/telaPrincipal";
const COMPOSER_PATH: &str = "/novoRelato";
const DETAIL_PATH: &str = "/infoRelato";

/// Last token value handed out in this process, in milliseconds.
static LAST_TOKEN_MS: AtomicI64 = AtomicI64::new(0);

/// Opaque "new data available" marker carried across the navigation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefreshToken(String);

impl RefreshToken {
    /// Creates a token from the current time in milliseconds.
    ///
    /// Tokens are strictly increasing within a process, so two submissions in
    /// the same millisecond still get distinct tokens.
    #[must_use]
    pub fn generate() -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        let mut last = LAST_TOKEN_MS.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match LAST_TOKEN_MS.compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed) {
                Ok(_) => return Self(next.to_string()),
                Err(observed) => last = observed,
            }
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RefreshToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Every field of a fetched report, as passed to the detail screen.
///
/// The detail screen only displays these; it never calls the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailParams {
    pub id: String,
    pub titulo: String,
    pub descricao: String,
    pub endereco: String,
    pub categoria: String,
    pub data_criacao: String,
    pub fotos: Vec<String>,
}

impl From<&Report> for DetailParams {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id.clone(),
            titulo: report.titulo.clone(),
            descricao: report.descricao.clone(),
            endereco: report.endereco.clone(),
            categoria: report.categoria.clone(),
            data_criacao: report.data_criacao.clone(),
            fotos: report.fotos.clone(),
        }
    }
}

impl From<DetailParams> for Report {
    fn from(params: DetailParams) -> Self {
        Self {
            id: params.id,
            titulo: params.titulo,
            descricao: params.descricao,
            endereco: params.endereco,
            categoria: params.categoria,
            fotos: params.fotos,
            data_criacao: params.data_criacao,
        }
    }
}

/// A screen plus the parameters it was opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The report listing. `refresh` is set when returning from a successful
    /// submission.
    Listing { refresh: Option<RefreshToken> },
    /// The new-report form.
    Composer,
    /// Read-only display of one report.
    Detail(DetailParams),
}

impl Route {
    /// Encodes the route as a path with a query string.
    ///
    /// ```
    /// use urbanfy::app::{RefreshToken, Route};
    ///
    /// let route = Route::Listing { refresh: Some(RefreshToken::from("1700000000000")) };
    /// assert_eq!(route.to_path(), "/telaPrincipal?refresh=1700000000000");
    /// ```
    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Listing { refresh: None } => LISTING_PATH.to_string(),
            Self::Listing {
                refresh: Some(token),
            } => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("refresh", token.as_str())
                    .finish();
                format!("{LISTING_PATH}?{query}")
            }
            Self::Composer => COMPOSER_PATH.to_string(),
            Self::Detail(params) => {
                // Vec<String> always serializes.
                let fotos = serde_json::to_string(&params.fotos).unwrap_or_else(|_| "[]".to_string());
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("id", &params.id)
                    .append_pair("titulo", &params.titulo)
                    .append_pair("descricao", &params.descricao)
                    .append_pair("endereco", &params.endereco)
                    .append_pair("categoria", &params.categoria)
                    .append_pair("data_criacao", &params.data_criacao)
                    .append_pair("fotos", &fotos)
                    .finish();
                format!("{DETAIL_PATH}?{query}")
            }
        }
    }

    /// Decodes a path produced by [`to_path`](Self::to_path).
    ///
    /// # Errors
    ///
    /// Returns [`UrbanfyError::Navigation`] for an unknown path, a detail route
    /// missing any field, or a `fotos` parameter that is not a JSON string array.
    pub fn parse(path: &str) -> Result<Self> {
        let (base, query) = path.split_once('?').unwrap_or((path, ""));
        let mut params: HashMap<String, String> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();

        match base {
            LISTING_PATH => Ok(Self::Listing {
                refresh: params
                    .remove("refresh")
                    .filter(|t| !t.is_empty())
                    .map(RefreshToken),
            }),
            COMPOSER_PATH => Ok(Self::Composer),
            DETAIL_PATH => {
                let mut take = |name: &str| {
                    params
                        .remove(name)
                        .ok_or_else(|| UrbanfyError::Navigation(format!("missing detail parameter: {name}")))
                };
                let id = take("id")?;
                let titulo = take("titulo")?;
                let descricao = take("descricao")?;
                let endereco = take("endereco")?;
                let categoria = take("categoria")?;
                let data_criacao = take("data_criacao")?;
                let raw_fotos = take("fotos")?;
                let fotos: Vec<String> = serde_json::from_str(&raw_fotos)
                    .map_err(|e| UrbanfyError::Navigation(format!("invalid fotos parameter: {e}")))?;

                Ok(Self::Detail(DetailParams {
                    id,
                    titulo,
                    descricao,
                    endereco,
                    categoria,
                    data_criacao,
                    fotos,
                }))
            }
            other => Err(UrbanfyError::Navigation(format!("unknown route: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> DetailParams {
        DetailParams {
            id: "abc-123".to_string(),
            titulo: "Poste & fios".to_string(),
            descricao: "Fios soltos, perigo!".to_string(),
            endereco: "Rua São José, 45 / ap 2".to_string(),
            categoria: "Iluminação e Energia".to_string(),
            data_criacao: "2024-05-01T13:45:10.123456".to_string(),
            fotos: vec![
                "https://blob.example/a.jpg".to_string(),
                "https://blob.example/b.jpg?x=1&y=2".to_string(),
            ],
        }
    }

    #[test]
    fn test_refresh_tokens_are_distinct_and_increasing() {
        let a = RefreshToken::generate();
        let b = RefreshToken::generate();
        assert_ne!(a, b);
        let a: i64 = a.as_str().parse().unwrap();
        let b: i64 = b.as_str().parse().unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_detail_route_carries_every_field() {
        let route = Route::Detail(params());
        let parsed = Route::parse(&route.to_path()).unwrap();
        assert_eq!(parsed, route);
    }

    #[test]
    fn test_listing_routes() {
        assert_eq!(
            Route::parse("/telaPrincipal").unwrap(),
            Route::Listing { refresh: None }
        );
        assert_eq!(
            Route::parse("/telaPrincipal?refresh=42").unwrap(),
            Route::Listing {
                refresh: Some(RefreshToken::from("42"))
            }
        );
        assert_eq!(Route::parse("/novoRelato").unwrap(), Route::Composer);
    }

    #[test]
    fn test_detail_route_rejects_bad_fotos() {
        let path = "/infoRelato?id=1&titulo=t&descricao=d&endereco=e&categoria=c&data_criacao=x&fotos=not-json";
        assert!(matches!(Route::parse(path), Err(UrbanfyError::Navigation(_))));
    }

    #[test]
    fn test_detail_route_rejects_missing_field() {
        let path = "/infoRelato?id=1&titulo=t";
        assert!(matches!(Route::parse(path), Err(UrbanfyError::Navigation(_))));
        assert!(Route::parse("/somewhere").is_err());
    }
}
