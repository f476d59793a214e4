//! API Handlers
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use stress_core::{catalog, InterpretError, ResultQuery};
use stress_out::{render_view, ResultFormat, ResultView};

use crate::AppState;

/// Query string accepted by the result page
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(flatten)]
    pub result: ResultQuery,
    pub format: Option<String>,
}

pub async fn result_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Response {
    let format = match query.format.as_deref().map(str::parse::<ResultFormat>) {
        None => ResultFormat::Html,
        Some(Ok(format)) => format,
        Some(Err(reason)) => {
            return (StatusCode::BAD_REQUEST, Json(json!({ "ok": false, "error": reason })))
                .into_response();
        }
    };

    let outcome = query.result.interpret();
    state.metrics.observe(&outcome);
    if let Err(e) = &outcome {
        tracing::info!(kind = e.kind(), error = %e, "showing result page for rejected input");
    }

    let view = ResultView::from_outcome(&outcome, state.config.fallback)
        .with_links(state.config.links.clone());

    match render_view(&state.renderer, &view, format) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, format.content_type())],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to render result page");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "ok": false, "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

pub async fn interpret(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ResultQuery>,
) -> (StatusCode, Json<Value>) {
    let outcome = query.interpret();
    state.metrics.observe(&outcome);

    match outcome {
        Ok(interpretation) => (
            StatusCode::OK,
            Json(json!({
                "ok": true,
                "code": interpretation.code,
                "category": interpretation.category,
                "diagnostics": interpretation.diagnostics,
            })),
        ),
        Err(e) => {
            let status = match e {
                InterpretError::MissingCode => StatusCode::BAD_REQUEST,
                InterpretError::InvalidCode(_) | InterpretError::UnknownCode(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
            };
            (
                status,
                Json(json!({
                    "ok": false,
                    "error": { "kind": e.kind(), "message": e.to_string() },
                })),
            )
        }
    }
}

pub async fn list_categories() -> (StatusCode, Json<Value>) {
    let categories: Vec<Value> = catalog()
        .map(|category| {
            json!({
                "code": category.kind.code(),
                "id": category.kind.id(),
                "label": category.label,
                "description": category.description,
                "recommendations": category.recommendations,
                "severity_color": category.severity_color,
            })
        })
        .collect();

    (StatusCode::OK, Json(json!({ "categories": categories })))
}

pub async fn metrics(State(state): State<Arc<AppState>>) -> Response {
    match state.metrics.encode() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "version": stress_core::STRESS_CORE_VERSION })),
    )
}
