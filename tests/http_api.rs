mod common;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use common::{config_for, report, router, spawn, ServiceState};
use serde_json::json;
use urbanfy::domain::error::{CONNECTIVITY_MESSAGE, DECODE_MESSAGE};
use urbanfy::{Category, HttpReportsApi, NewReport, PhotoPayload, ReportsApi, UrbanfyError};

fn new_report(fotos: Vec<&str>) -> NewReport {
    NewReport {
        titulo: "Buraco na via".to_string(),
        descricao: "Buraco grande".to_string(),
        endereco: "Rua X, 100".to_string(),
        categoria: Category::InfraestruturaMobilidade,
        fotos: fotos.into_iter().map(PhotoPayload::new).collect(),
    }
}

#[tokio::test]
async fn test_list_reports_decodes_collection() {
    let state = ServiceState::with_reports(vec![
        report("1", "Poste apagado", "Iluminação e Energia"),
        report("2", "Vazamento", "Água e Esgoto"),
    ]);
    let base = spawn(router(state)).await;
    let api = HttpReportsApi::new(&config_for(&base)).unwrap();

    let reports = api.list_reports().await.unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[1].categoria, "Água e Esgoto");
    assert_eq!(reports[1].fotos, vec!["https://blob.example/2.jpg".to_string()]);
    assert_eq!(reports[0].formatted_date(), "01/05/2024");
}

#[tokio::test]
async fn test_create_report_posts_labels_and_base64() {
    let state = ServiceState::default();
    let base = spawn(router(state.clone())).await;
    let api = HttpReportsApi::new(&config_for(&base)).unwrap();

    let created = api.create_report(&new_report(vec!["aGVsbG8="])).await.unwrap();

    assert_eq!(created.id.as_deref(), Some("1"));
    assert_eq!(created.mensagem, "Relato criado com sucesso");
    let posted = state.posted.lock().unwrap();
    assert_eq!(
        posted[0],
        json!({
            "titulo": "Buraco na via",
            "descricao": "Buraco grande",
            "endereco": "Rua X, 100",
            "categoria": "Infraestrutura e Mobilidade",
            "fotos": ["aGVsbG8="],
        })
    );
}

#[tokio::test]
async fn test_server_detail_is_surfaced() {
    let state = ServiceState::default();
    state.fail_with("db down");
    let base = spawn(router(state)).await;
    let api = HttpReportsApi::new(&config_for(&base)).unwrap();

    let err = api.list_reports().await.unwrap_err();

    match &err {
        UrbanfyError::Server { status, detail } => {
            assert_eq!(*status, 500);
            assert_eq!(detail.as_deref(), Some("db down"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.user_message().contains("db down"));
}

#[tokio::test]
async fn test_validation_detail_is_pretty_printed() {
    let app = Router::new().route(
        "/relatos",
        post(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": [{ "loc": ["body", "titulo"], "msg": "field required" }] })),
            )
        }),
    );
    let base = spawn(app).await;
    let api = HttpReportsApi::new(&config_for(&base)).unwrap();

    let err = api.create_report(&new_report(vec![])).await.unwrap_err();

    assert!(matches!(err, UrbanfyError::Server { status: 422, .. }));
    assert!(urbanfy::app::failure_message(&err).contains("field required"));
}

#[tokio::test]
async fn test_error_without_detail_names_status() {
    let app = Router::new().route("/relatos", get(|| async { StatusCode::SERVICE_UNAVAILABLE }));
    let base = spawn(app).await;
    let api = HttpReportsApi::new(&config_for(&base)).unwrap();

    let err = api.list_reports().await.unwrap_err();

    assert!(matches!(err, UrbanfyError::Server { status: 503, detail: None }));
    assert!(err.user_message().contains("503"));
}

#[tokio::test]
async fn test_malformed_list_is_decode_error() {
    let app = Router::new().route("/relatos", get(|| async { Json(json!({ "relatos": [] })) }));
    let base = spawn(app).await;
    let api = HttpReportsApi::new(&config_for(&base)).unwrap();

    let err = api.list_reports().await.unwrap_err();

    assert!(matches!(err, UrbanfyError::Decode(_)));
    assert_eq!(err.user_message(), DECODE_MESSAGE);
}

#[tokio::test]
async fn test_create_tolerates_empty_success_body() {
    let app = Router::new().route("/relatos", post(|| async { StatusCode::NO_CONTENT }));
    let base = spawn(app).await;
    let api = HttpReportsApi::new(&config_for(&base)).unwrap();

    let created = api.create_report(&new_report(vec![])).await.unwrap();

    assert!(created.id.is_none());
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let api = HttpReportsApi::new(&config_for(&format!("http://{addr}"))).unwrap();

    let err = api.list_reports().await.unwrap_err();

    assert!(matches!(err, UrbanfyError::Network(_)));
    assert_eq!(err.user_message(), CONNECTIVITY_MESSAGE);
}
