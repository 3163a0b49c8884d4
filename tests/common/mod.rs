//! In-process report service for integration tests.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use urbanfy::Config;

/// Shared server state: the stored reports and every body POSTed.
#[derive(Clone, Default)]
pub struct ServiceState {
    pub reports: Arc<Mutex<Vec<Value>>>,
    pub posted: Arc<Mutex<Vec<Value>>>,
    /// When set, every request answers 500 with this detail.
    pub failure: Arc<Mutex<Option<String>>>,
}

impl ServiceState {
    pub fn with_reports(reports: Vec<Value>) -> Self {
        let state = Self::default();
        *state.reports.lock().unwrap() = reports;
        state
    }

    pub fn fail_with(&self, detail: &str) {
        *self.failure.lock().unwrap() = Some(detail.to_string());
    }

    fn failure(&self) -> Option<Response> {
        self.failure.lock().unwrap().clone().map(|detail| {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": detail }))).into_response()
        })
    }
}

async fn list(State(state): State<ServiceState>) -> Response {
    if let Some(failure) = state.failure() {
        return failure;
    }
    Json(Value::Array(state.reports.lock().unwrap().clone())).into_response()
}

async fn create(State(state): State<ServiceState>, Json(body): Json<Value>) -> Response {
    if let Some(failure) = state.failure() {
        return failure;
    }
    state.posted.lock().unwrap().push(body.clone());

    let mut reports = state.reports.lock().unwrap();
    let id = (reports.len() + 1).to_string();
    let photo_count = body["fotos"].as_array().map_or(0, Vec::len);
    reports.push(json!({
        "id": id,
        "titulo": body["titulo"],
        "descricao": body["descricao"],
        "endereco": body["endereco"],
        "categoria": body["categoria"],
        "fotos": (0..photo_count)
            .map(|i| format!("https://blob.example/{id}/{i}.jpg"))
            .collect::<Vec<_>>(),
        "data_criacao": "2024-06-01T12:00:00.000000",
    }));

    (
        StatusCode::CREATED,
        Json(json!({ "mensagem": "Relato criado com sucesso", "id": id })),
    )
        .into_response()
}

pub fn router(state: ServiceState) -> Router {
    Router::new()
        .route("/relatos", get(list).post(create))
        .with_state(state)
}

/// Serves `router` on an ephemeral port and returns its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn config_for(base_url: &str) -> Config {
    Config {
        api_base_url: base_url.to_string(),
        request_timeout_secs: 5,
        ..Config::default()
    }
}

pub fn report(id: &str, titulo: &str, categoria: &str) -> Value {
    json!({
        "id": id,
        "titulo": titulo,
        "descricao": "Descrição do problema",
        "endereco": "Rua X, 100",
        "categoria": categoria,
        "fotos": [format!("https://blob.example/{id}.jpg")],
        "data_criacao": "2024-05-01T10:00:00.123456",
    })
}
