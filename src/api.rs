use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::config::ConfigHandle;
use crate::customer::{DiscoveryReport, ScoredCustomer};
use crate::export;
use crate::history::RunHistory;
use crate::pipeline::DiscoveryEngine;
use crate::report::html_report;
use crate::source::PageText;

#[derive(Clone)]
pub struct AppState {
    engine: Arc<DiscoveryEngine>,
    history: Arc<RunHistory>,
}

impl AppState {
    pub fn new(config: ConfigHandle) -> Self {
        Self {
            engine: Arc::new(DiscoveryEngine::new(config)),
            history: Arc::new(RunHistory::with_capacity(2000)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/discover", post(discover))
        .route("/extract", post(extract))
        .route("/export/csv", get(export_csv))
        .route("/export/json", get(export_json))
        .route("/report", get(report_html))
        .route("/debug/history", get(debug_history))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiscoverReq {
    company_name: String,
    #[serde(default)]
    company_website: Option<String>,
    /// Pre-fetched page texts supplied by the caller's fetch layer.
    pages: Vec<PageText>,
    #[serde(default)]
    max_results: Option<usize>,
}

async fn discover(
    State(state): State<AppState>,
    Json(body): Json<DiscoverReq>,
) -> Json<DiscoveryReport> {
    let report = state.engine.discover(
        &body.company_name,
        body.company_website.as_deref(),
        &body.pages,
        body.max_results,
    );
    state.history.push(&report);
    Json(report)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtractReq {
    text: String,
    /// Missing URL just means no URL-based score bonuses.
    #[serde(default)]
    source_url: String,
    /// Missing target company skips the self-match filter rule.
    #[serde(default)]
    company_name: String,
}

/// Single-block extraction: scored candidates for one page, no dedup.
async fn extract(
    State(state): State<AppState>,
    Json(body): Json<ExtractReq>,
) -> Json<Vec<ScoredCustomer>> {
    let page = PageText {
        url: body.source_url,
        text: body.text,
    };
    Json(state.engine.process_page(&page, &body.company_name))
}

async fn export_csv(State(state): State<AppState>) -> Response {
    let Some(report) = state.history.last_report() else {
        return (StatusCode::NOT_FOUND, "no discovery run recorded").into_response();
    };
    match export::report_to_csv(&report) {
        Ok(csv) => ([(header::CONTENT_TYPE, "text/csv")], csv).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

async fn export_json(State(state): State<AppState>) -> Response {
    let Some(report) = state.history.last_report() else {
        return (StatusCode::NOT_FOUND, "no discovery run recorded").into_response();
    };
    match export::report_to_json(&report) {
        Ok(json) => ([(header::CONTENT_TYPE, "application/json")], json).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

async fn report_html(State(state): State<AppState>) -> Response {
    match state.history.last_report() {
        Some(report) => Html(html_report(&report)).into_response(),
        None => (StatusCode::NOT_FOUND, "no discovery run recorded").into_response(),
    }
}

#[derive(Serialize)]
struct HistoryOut {
    ts_unix: u64,
    company_name: String,
    total_customers_found: usize,
    average_confidence: f32,
    urls_processed: usize,
}

async fn debug_history(State(state): State<AppState>) -> Json<Vec<HistoryOut>> {
    let rows = state.history.snapshot_last_n(10);
    let out = rows
        .into_iter()
        .map(|r| HistoryOut {
            ts_unix: r.ts_unix,
            company_name: r.company_name,
            total_customers_found: r.total_customers_found,
            average_confidence: r.average_confidence,
            urls_processed: r.urls_processed,
        })
        .collect::<Vec<_>>();
    Json(out)
}
