//! # API REST
//!
//! REST API implementation for RRA.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, status codes, CORS)
//!
//! Uses `api-shared` for wire types and `rra-core` for all report logic.

#![warn(rust_2018_idioms)]

use api_shared::{
    HealthRes, HealthService, ProcessReportReq, ReportRes, SeveritySummaryRes, TranslateReq,
    TranslateRes,
};
use axum::{
    extract::{rejection::JsonRejection, Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use rra_core::validation::{
    parse_language, parse_report_id, validate_outcome_label, validate_report_text,
};
use rra_core::{ReportError, ReportService};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

type ApiError = (StatusCode, &'static str);

/// Application state for the REST API server.
///
/// Shared by all request handlers; the service holds read-only extractors and configuration.
#[derive(Clone)]
pub struct AppState {
    service: ReportService,
}

impl AppState {
    pub fn new(service: ReportService) -> Self {
        Self { service }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        process_report,
        list_reports,
        get_report,
        severity_summary,
        translate_outcome,
    ),
    components(schemas(
        HealthRes,
        ProcessReportReq,
        ReportRes,
        SeveritySummaryRes,
        TranslateReq,
        TranslateRes,
    ))
)]
pub struct ApiDoc;

/// Build the REST router, including Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/process-report", post(process_report))
        .route("/reports", get(list_reports))
        .route("/reports/severity-summary", get(severity_summary))
        .route("/reports/:id", get(get_report))
        .route("/translate", post(translate_outcome))
        .merge(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/process-report",
    request_body = ProcessReportReq,
    responses(
        (status = 200, description = "Report processed and stored", body = ReportRes),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    )
)]
/// Extract structured fields from a free-text report and store the result
///
/// # Errors
/// Returns `400 Bad Request` if the body is malformed or the report is blank, and
/// `500 Internal Server Error` if the report cannot be stored.
#[axum::debug_handler]
async fn process_report(
    State(state): State<AppState>,
    payload: Result<Json<ProcessReportReq>, JsonRejection>,
) -> Result<Json<ReportRes>, ApiError> {
    let Json(req) = payload.map_err(|e| {
        tracing::warn!("Rejected process-report body: {}", e);
        (StatusCode::BAD_REQUEST, "Invalid request body")
    })?;

    let raw_report = validate_report_text(&req.report)
        .map_err(|_| (StatusCode::BAD_REQUEST, "report cannot be empty"))?;

    match state.service.process(raw_report) {
        Ok(report) => Ok(Json(ReportRes::from(&report))),
        Err(e) => {
            tracing::error!("Process report error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/reports",
    responses(
        (status = 200, description = "Stored reports, newest first", body = [ReportRes])
    )
)]
/// List all stored reports, newest first
#[axum::debug_handler]
async fn list_reports(State(state): State<AppState>) -> Json<Vec<ReportRes>> {
    Json(state.service.list().iter().map(ReportRes::from).collect())
}

#[utoipa::path(
    get,
    path = "/reports/{id}",
    params(
        ("id" = String, Path, description = "Report id (32 lowercase hex characters)")
    ),
    responses(
        (status = 200, description = "Stored report", body = ReportRes),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Report not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn get_report(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<ReportRes>, ApiError> {
    let id = match parse_report_id(&id) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("Invalid report id: {}", e);
            return Err((StatusCode::BAD_REQUEST, "Invalid report id"));
        }
    };

    match state.service.get(&id) {
        Ok(report) => Ok(Json(ReportRes::from(&report))),
        Err(ReportError::NotFound(_)) => Err((StatusCode::NOT_FOUND, "Report not found")),
        Err(e) => {
            tracing::error!("Read report error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/reports/severity-summary",
    responses(
        (status = 200, description = "Report counts per severity", body = SeveritySummaryRes)
    )
)]
#[axum::debug_handler]
async fn severity_summary(State(state): State<AppState>) -> Json<SeveritySummaryRes> {
    Json(state.service.severity_summary().into())
}

#[utoipa::path(
    post,
    path = "/translate",
    request_body = TranslateReq,
    responses(
        (status = 200, description = "Translated outcome label", body = TranslateRes),
        (status = 400, description = "Bad request")
    )
)]
/// Translate an outcome label into French (`fr`) or Swahili (`sw`)
///
/// The label is trimmed first; labels without a translation are returned lower-cased and
/// otherwise unchanged.
#[axum::debug_handler]
async fn translate_outcome(
    State(state): State<AppState>,
    payload: Result<Json<TranslateReq>, JsonRejection>,
) -> Result<Json<TranslateRes>, ApiError> {
    let Json(req) = payload.map_err(|e| {
        tracing::warn!("Rejected translate body: {}", e);
        (StatusCode::BAD_REQUEST, "Invalid request body")
    })?;

    let outcome = validate_outcome_label(&req.outcome)
        .map_err(|_| (StatusCode::BAD_REQUEST, "outcome cannot be empty"))?;
    let language = parse_language(&req.language)
        .map_err(|_| (StatusCode::BAD_REQUEST, "language must be one of: fr, sw"))?;

    Ok(Json(TranslateRes {
        outcome: outcome.as_str().to_lowercase(),
        language: language.code().to_string(),
        translated: state.service.translate(outcome.as_str(), language),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use rra_core::CoreConfig;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_app(temp: &TempDir) -> Router {
        let cfg = CoreConfig::with_defaults(temp.path().to_path_buf()).expect("config");
        let service = ReportService::new(Arc::new(cfg)).expect("service");
        router(AppState::new(service))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let temp = TempDir::new().unwrap();
        let (status, body) = send(&test_app(&temp), get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        let health: HealthRes = serde_json::from_slice(&body).unwrap();
        assert!(health.ok);
    }

    #[tokio::test]
    async fn process_report_returns_extracted_fields() {
        let temp = TempDir::new().unwrap();
        let app = test_app(&temp);

        let (status, body) = send(
            &app,
            post_json(
                "/process-report",
                json!({"report": "Patient reported severe nausea and a persistent headache after taking Drug Zentra"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let res: ReportRes = serde_json::from_slice(&body).unwrap();
        assert_eq!(res.drug, "Drug Zentra");
        assert_eq!(res.adverse_events, vec!["nausea", "headache"]);
        assert_eq!(res.severity, "severe");
        assert_eq!(res.outcome, "");
        assert_eq!(res.id.len(), 32);
    }

    #[tokio::test]
    async fn process_report_rejects_blank_and_malformed_bodies() {
        let temp = TempDir::new().unwrap();
        let app = test_app(&temp);

        let (status, _) = send(&app, post_json("/process-report", json!({"report": "   "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, post_json("/process-report", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let request = Request::post("/process-report")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(&app, get("/reports")).await;
        let listed: Vec<ReportRes> = serde_json::from_slice(&body).unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn stored_reports_are_listed_and_fetched_by_id() {
        let temp = TempDir::new().unwrap();
        let app = test_app(&temp);

        let (_, body) = send(
            &app,
            post_json("/process-report", json!({"report": "Mild rash, fully recovered within days"})),
        )
        .await;
        let created: ReportRes = serde_json::from_slice(&body).unwrap();

        let (status, body) = send(&app, get("/reports")).await;
        assert_eq!(status, StatusCode::OK);
        let listed: Vec<ReportRes> = serde_json::from_slice(&body).unwrap();
        assert_eq!(listed, vec![created.clone()]);

        let (status, body) = send(&app, get(&format!("/reports/{}", created.id))).await;
        assert_eq!(status, StatusCode::OK);
        let fetched: ReportRes = serde_json::from_slice(&body).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.severity, "mild");
        assert_eq!(fetched.outcome, "recovered");
    }

    #[tokio::test]
    async fn get_report_distinguishes_bad_and_unknown_ids() {
        let temp = TempDir::new().unwrap();
        let app = test_app(&temp);

        let (status, _) = send(&app, get("/reports/42")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, get("/reports/0123456789abcdef0123456789abcdef")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn severity_summary_counts_reports() {
        let temp = TempDir::new().unwrap();
        let app = test_app(&temp);

        for report in ["mild headache", "severe rash", "slight fever"] {
            send(&app, post_json("/process-report", json!({ "report": report }))).await;
        }

        let (status, body) = send(&app, get("/reports/severity-summary")).await;
        assert_eq!(status, StatusCode::OK);
        let summary: SeveritySummaryRes = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            summary,
            SeveritySummaryRes {
                mild: 2,
                moderate: 0,
                severe: 1
            }
        );
    }

    #[tokio::test]
    async fn translate_known_and_unknown_outcomes() {
        let temp = TempDir::new().unwrap();
        let app = test_app(&temp);

        let (status, body) = send(
            &app,
            post_json("/translate", json!({"outcome": "fatal", "language": "sw"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let res: TranslateRes = serde_json::from_slice(&body).unwrap();
        assert_eq!(res.translated, "mbaya");

        let (_, body) = send(
            &app,
            post_json("/translate", json!({"outcome": "Unknown", "language": "fr"})),
        )
        .await;
        let res: TranslateRes = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            res,
            TranslateRes {
                outcome: "unknown".into(),
                language: "fr".into(),
                translated: "unknown".into(),
            }
        );
    }

    #[tokio::test]
    async fn translate_trims_padded_outcome_and_rejects_blank_outcome() {
        let temp = TempDir::new().unwrap();
        let app = test_app(&temp);

        let (status, body) = send(
            &app,
            post_json("/translate", json!({"outcome": " Fatal ", "language": "sw"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let res: TranslateRes = serde_json::from_slice(&body).unwrap();
        assert_eq!(res.outcome, "fatal");
        assert_eq!(res.translated, "mbaya");

        for blank in ["", "   "] {
            let (status, body) = send(
                &app,
                post_json("/translate", json!({"outcome": blank, "language": "fr"})),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, b"outcome cannot be empty");
        }
    }

    #[tokio::test]
    async fn translate_rejects_unsupported_language() {
        let temp = TempDir::new().unwrap();
        let app = test_app(&temp);

        let (status, _) = send(
            &app,
            post_json("/translate", json!({"outcome": "fatal", "language": "de"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn openapi_document_lists_report_paths() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(doc["paths"]["/process-report"].is_object());
        assert!(doc["paths"]["/reports/{id}"].is_object());
    }
}
