//! API route handlers.
//!
//! The read path is deliberately infallible: the cache degrades to the
//! curated fallback instead of surfacing source errors, so `GET
//! /api/companies` and the refresh endpoint always answer 200 with whatever
//! snapshot was produced. Only the id lookup can 404, and only a genuine
//! internal failure would 500.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, info};

use crate::dto::{CompanyListResponse, CompanyResponse, HealthResponse};
use crate::error::ApiError;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

/// GET /api/companies
pub async fn list_companies(State(state): State<Arc<AppState>>) -> Json<CompanyListResponse> {
    let snapshot = state.cache.get_snapshot().await;

    debug!(
        count = snapshot.len(),
        source = %snapshot.source,
        "Serving company list"
    );

    Json(CompanyListResponse::from_snapshot(&snapshot))
}

/// GET /api/companies/:id
pub async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<CompanyResponse>> {
    let company = state.cache.get_by_id(id).await?;

    Ok(Json(CompanyResponse {
        success: true,
        data: company,
    }))
}

/// POST /api/companies/refresh
pub async fn refresh_companies(State(state): State<Arc<AppState>>) -> Json<CompanyListResponse> {
    let snapshot = state.cache.refresh().await;

    info!(
        count = snapshot.len(),
        source = %snapshot.source,
        "Forced refresh"
    );

    Json(CompanyListResponse::from_snapshot(&snapshot))
}

/// GET /api/health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let stats = state.cache.stats();

    Json(HealthResponse {
        success: true,
        status: "ok".into(),
        companies: stats.company_count,
        source: stats.source,
        fetched_at: stats.fetched_at.map(|at| at.to_rfc3339()),
    })
}
