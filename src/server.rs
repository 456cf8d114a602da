/*!
 * HTTP front end for the transcript controller.
 *
 * `GET /api/transcript?url=..|id=..[&lang=..][&debug=1]` answers with the
 * controller's JSON body and status. Any origin may call it.
 */

use anyhow::{Context, Result};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use log::{debug, error, info};
use std::any::Any;
use std::sync::Arc;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};

use crate::app_controller::{Controller, TranscriptRequest, TranscriptResponse};
use crate::errors::ResolveError;

/// Shared server state
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Controller>,
}

impl IntoResponse for TranscriptResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body)).into_response()
    }
}

/// Build the router
pub fn router(controller: Arc<Controller>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::OPTIONS]);

    Router::new()
        .route(
            "/api/transcript",
            get(transcript_handler).options(|| async { StatusCode::OK }),
        )
        .with_state(AppState { controller })
        .layer(cors)
}

/// Bind and serve until the process is stopped
pub async fn serve(controller: Arc<Controller>, host: &str, port: u16) -> Result<()> {
    let address = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("Transcript server listening on http://{}", address);
    axum::serve(listener, router(controller))
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}

async fn transcript_handler(
    State(state): State<AppState>,
    query: Result<Query<TranscriptRequest>, QueryRejection>,
) -> TranscriptResponse {
    let request = match query {
        Ok(Query(request)) => request,
        Err(rejection) => {
            debug!("Unreadable query string: {}", rejection.body_text());
            return TranscriptResponse::from_error(&ResolveError::NoIdentifier);
        }
    };
    let controller = state.controller.clone();

    // A panic inside resolution must still produce a JSON 500
    match tokio::spawn(async move { controller.handle(request).await }).await {
        Ok(response) => response,
        Err(e) => {
            let message = if e.is_panic() {
                panic_message(e.into_panic())
            } else {
                e.to_string()
            };
            error!("Transcript request failed: {}", message);
            TranscriptResponse::from_error(&ResolveError::Unexpected(message))
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Internal error".to_string()
    }
}
