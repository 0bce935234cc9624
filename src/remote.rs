//! Placeholder remote procedure endpoint.
//!
//! Mirrors the single `ping` query of the app's tRPC router, so responses use the
//! tRPC envelope `{"result":{"data":...}}`.

use axum::{Json, Router, routing::get};
use color_eyre::eyre::Result;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub const PING_REPLY: &str = "pont";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrpcResponse<T> {
    pub result: TrpcResult<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrpcResult<T> {
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Health {
    pub status: String,
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/trpc/ping", get(ping))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(port: u16) -> Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Server listening on port {}", port);

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutting down");
}

async fn ping() -> Json<TrpcResponse<String>> {
    Json(TrpcResponse {
        result: TrpcResult {
            data: PING_REPLY.to_owned(),
        },
    })
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy".to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::remote::{Health, TrpcResponse, router};

    async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn ping_answers_pont() {
        let (status, body) = get("/trpc/ping").await;

        assert_eq!(status, StatusCode::OK);
        let response: TrpcResponse<String> = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.result.data, "pont");
        assert_eq!(
            String::from_utf8(body).unwrap(),
            r#"{"result":{"data":"pont"}}"#
        );
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let (status, body) = get("/health").await;

        assert_eq!(status, StatusCode::OK);
        let health: Health = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "healthy");
    }

    #[tokio::test]
    async fn unknown_procedure_is_not_found() {
        let (status, _) = get("/trpc/transfer").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
