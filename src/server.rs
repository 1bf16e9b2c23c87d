// src/server.rs
//! HTTP surface of the service.
//!
//! Every path and method reaches the same handler. `OPTIONS` answers the
//! CORS preflight; anything else serves the page content.

use crate::api::{NotionHttpClient, NotionRepository};
use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::output::FailureBody;
use crate::pipeline::PageContentService;
use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use uuid::Uuid;

/// Shared state for the content handler
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PageContentService>,
}

/// Create the content router with permissive CORS headers on every response
pub fn content_router(state: AppState) -> Router {
    Router::new()
        .fallback(serve_page_content)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(state)
}

/// Any method, any path
async fn serve_page_content(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Response {
    if method == Method::OPTIONS {
        log::debug!("Preflight {}", uri.path());
        return StatusCode::OK.into_response();
    }

    let request_id = Uuid::new_v4();
    log::info!("[{}] {} {}", request_id, method, uri.path());

    match state.service.snapshot().await {
        Ok(envelope) => {
            log::info!(
                "[{}] Served {} bytes of content",
                request_id,
                envelope.content.len()
            );
            (StatusCode::OK, Json(envelope)).into_response()
        }
        Err(err) => {
            match &err {
                AppError::NotionService { code, .. } if code.is_credential_problem() => {
                    log::error!(
                        "[{}] Notion rejected the integration token ({}): {}",
                        request_id,
                        code,
                        err
                    );
                }
                _ => log::error!(
                    "[{}] Failed to fetch page (upstream status {:?}): {}",
                    request_id,
                    err.upstream_status(),
                    err
                ),
            }
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureBody::from_error(&err)),
            )
                .into_response()
        }
    }
}

/// Builds the production router: real Notion client behind the handler.
pub fn build_app(config: &ServiceConfig) -> Result<Router, AppError> {
    let client = NotionHttpClient::new(&config.api_key, &config.api_base_url)?;
    let repository: Arc<dyn NotionRepository> = Arc::new(client);
    let service = PageContentService::from_config(repository, config);
    Ok(content_router(AppState {
        service: Arc::new(service),
    }))
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(config: ServiceConfig) -> Result<(), AppError> {
    let app = build_app(&config)?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    log::info!(
        "Serving page {} on http://{}",
        config.page_id,
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotionErrorCode;
    use crate::model::*;
    use crate::types::PageId;
    use axum::body::Body;
    use axum::http::Request;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    /// Repository double that counts calls and replays a canned outcome.
    struct CannedRepository {
        calls: AtomicUsize,
        outcome: fn() -> Result<Vec<Block>, AppError>,
    }

    #[async_trait::async_trait]
    impl NotionRepository for CannedRepository {
        async fn retrieve_children(&self, _parent: &PageId) -> Result<Vec<Block>, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)()
        }
    }

    fn make_app(outcome: fn() -> Result<Vec<Block>, AppError>) -> (Router, Arc<CannedRepository>) {
        let repository = Arc::new(CannedRepository {
            calls: AtomicUsize::new(0),
            outcome,
        });
        let service = PageContentService::from_config(repository.clone(), &ServiceConfig::default());
        let app = content_router(AppState {
            service: Arc::new(service),
        });
        (app, repository)
    }

    fn sample_blocks() -> Result<Vec<Block>, AppError> {
        Ok(vec![
            Block::Heading1(Heading1Block {
                content: TextBlockContent::plain("Title"),
                ..Default::default()
            }),
            Block::Divider(DividerBlock::default()),
            Block::Paragraph(ParagraphBlock {
                content: TextBlockContent::plain("Body text"),
                ..Default::default()
            }),
        ])
    }

    fn not_found() -> Result<Vec<Block>, AppError> {
        Err(AppError::NotionService {
            status: reqwest::StatusCode::NOT_FOUND,
            code: NotionErrorCode::ObjectNotFound,
            message: "Could not find block".to_string(),
        })
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), 1024 * 64)
            .await
            .unwrap()
            .to_vec()
    }

    fn assert_cors(response: &Response) {
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
        assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    }

    #[tokio::test]
    async fn test_preflight_short_circuits() {
        let (app, repository) = make_app(sample_blocks);
        let resp = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/notion-content")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_cors(&resp);
        assert!(body_bytes(resp).await.is_empty());
        assert_eq!(repository.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_get_serves_envelope() {
        let (app, repository) = make_app(sample_blocks);
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/notion-content")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_cors(&resp);
        assert_eq!(resp.headers()["content-type"], "application/json");

        let json: serde_json::Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
        assert_eq!(json["content"], "# Title\n---\nBody text");
        assert_eq!(json["source"], "notion");
        assert_eq!(json["title"], crate::constants::DOCUMENT_TITLE);
        assert!(json["updated"].as_str().unwrap().ends_with('Z'));
        assert_eq!(repository.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_post_on_any_path_is_treated_like_get() {
        let (app, _repository) = make_app(sample_blocks);
        let resp = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/anything/else")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
        assert_eq!(json["content"], "# Title\n---\nBody text");
    }

    #[tokio::test]
    async fn test_upstream_failure_collapses_to_500() {
        let (app, _repository) = make_app(not_found);
        let resp = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_cors(&resp);
        let json: serde_json::Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": "cannot fetch page",
                "details": "Notion API error: 404"
            })
        );
    }

    #[tokio::test]
    async fn test_malformed_content_collapses_to_500() {
        let (app, _repository) =
            make_app(|| Err(AppError::MalformedResponse("missing field `results`".to_string())));
        let resp = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
        assert_eq!(json["error"], "cannot fetch page");
        assert_eq!(json["details"], "Malformed response: missing field `results`");
    }

    #[test]
    fn test_token_unusable_as_header_fails_at_startup() {
        let config = ServiceConfig {
            api_key: crate::types::ApiKey::new("secret_abc\ndef"),
            ..ServiceConfig::default()
        };
        assert!(matches!(
            build_app(&config),
            Err(AppError::MissingConfiguration(_))
        ));
    }
}
