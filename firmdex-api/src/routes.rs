//! API route configuration.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/api/health", get(handlers::health_check))
        // Directory
        .route("/api/companies", get(handlers::list_companies))
        .route("/api/companies/:id", get(handlers::get_company))
        .route("/api/companies/refresh", post(handlers::refresh_companies))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use async_trait::async_trait;
    use firmdex_core::error::{DirectoryError, Result};
    use firmdex_core::traits::CompanySource;
    use firmdex_core::types::CompanyRecord;
    use firmdex_registry::fallback;

    use crate::dto::{ApiFailure, CompanyListResponse, CompanyResponse, HealthResponse};
    use crate::state::ApiConfig;

    struct StaticSource(Vec<CompanyRecord>);

    #[async_trait]
    impl CompanySource for StaticSource {
        async fn fetch(&self) -> Result<Vec<CompanyRecord>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CompanySource for FailingSource {
        async fn fetch(&self) -> Result<Vec<CompanyRecord>> {
            Err(DirectoryError::SourceUnavailable("no route to host".into()))
        }
    }

    fn sample_records() -> Vec<CompanyRecord> {
        vec![
            CompanyRecord::public(1, "Acme", "NY", "Tech", 100, 2000, "ACME"),
            CompanyRecord::private(2, "Zenith", "NY", "Finance", 50, 1990),
        ]
    }

    fn test_app() -> Router {
        let state = AppState::with_source(
            ApiConfig::default(),
            Arc::new(StaticSource(sample_records())),
        );
        create_router(Arc::new(state))
    }

    async fn body_of(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_health_check_cold_cache() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = serde_json::from_slice(&body_of(response).await).unwrap();
        assert!(health.success);
        assert_eq!(health.status, "ok");
        assert_eq!(health.companies, 0);
        assert!(health.fetched_at.is_none());
    }

    #[tokio::test]
    async fn test_list_companies_shape_and_source() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/companies")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let list: CompanyListResponse = serde_json::from_slice(&body_of(response).await).unwrap();
        assert!(list.success);
        assert_eq!(list.count, 2);
        assert_eq!(list.source, "api");
        assert!(list.timestamp.is_some());

        // A second read within the freshness window is served from memory.
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/companies")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let list: CompanyListResponse = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(list.source, "cache");
    }

    #[tokio::test]
    async fn test_get_company_by_id() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/companies/2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let company: CompanyResponse = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(company.data.name, "Zenith");
        assert_eq!(company.data.ticker, None);
    }

    #[tokio::test]
    async fn test_get_company_not_found() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/companies/99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let failure: ApiFailure = serde_json::from_slice(&body_of(response).await).unwrap();
        assert!(!failure.success);
        assert_eq!(failure.message, "Company not found");
    }

    #[tokio::test]
    async fn test_refresh_endpoint() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/companies/refresh")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let list: CompanyListResponse = serde_json::from_slice(&body_of(response).await).unwrap();
        assert!(list.success);
        assert_eq!(list.source, "api");
        assert_eq!(list.count, 2);
    }

    #[tokio::test]
    async fn test_dead_source_still_answers_200_with_fallback() {
        let state = AppState::with_source(ApiConfig::default(), Arc::new(FailingSource));
        let app = create_router(Arc::new(state));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/companies")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let list: CompanyListResponse = serde_json::from_slice(&body_of(response).await).unwrap();
        assert!(list.success);
        assert_eq!(list.count, fallback::CURATED_COUNT);
    }
}
