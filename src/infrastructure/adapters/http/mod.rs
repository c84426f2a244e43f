//! HTTP adapter - mounts the relay on an axum router

use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Router};
use tokio::net::TcpListener;

use crate::application::errors::RelayServerError;
use crate::application::services::{CommandRelay, HandleOutcome};
use crate::domain::entities::InboundRequest;
use crate::infrastructure::config::ServerConfig;

#[derive(Clone)]
struct AppState {
    relay: Arc<CommandRelay>,
    name: Arc<str>,
}

/// Build the router serving `GET` and `POST` on the configured mount path
pub fn build_router(relay: Arc<CommandRelay>, server: &ServerConfig) -> Router {
    let state = AppState {
        relay,
        name: Arc::from(server.name.as_str()),
    };

    Router::new()
        .route(&server.mount_path(), get(status_page).post(slash_command))
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(
    relay: Arc<CommandRelay>,
    server: &ServerConfig,
) -> Result<(), RelayServerError> {
    let app = build_router(relay, server);

    let listener = TcpListener::bind(server.bind.as_str()).await?;
    tracing::info!("Listening on {}{}", server.bind, server.mount_path());

    axum::serve(listener, app)
        .await
        .map_err(|e| RelayServerError::Server(e.to_string()))
}

async fn status_page(State(state): State<AppState>) -> Html<String> {
    Html(format!("<html><body>{} is running.</body></html>", state.name))
}

async fn slash_command(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
    let Form(pairs) = match form {
        Ok(form) => form,
        Err(rejection) => {
            tracing::debug!("Undecodable callback body: {}", rejection);
            return (StatusCode::BAD_REQUEST, rejection.body_text()).into_response();
        }
    };

    let request = InboundRequest::from_pairs(pairs);
    outcome_response(state.relay.handle(&request))
}

fn outcome_response(outcome: HandleOutcome) -> Response {
    let status = StatusCode::from_u16(outcome.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, outcome.body()).into_response()
}
