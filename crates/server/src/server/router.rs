use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Json, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{RequestError, ValidationError};
use crate::models::resource::{AddResourceForm, AddResourceResponse, ListResourcesResponse};
use crate::server::page::render_index;
use crate::server::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index).post(add_resource))
        .route("/resources", get(list_resources))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = state.config.server.address.clone();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("starting server on: {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, RequestError> {
    let response = state.db_connection.list_resources().await?;
    Ok(Html(render_index(&response.resource_list)))
}

pub async fn list_resources(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListResourcesResponse>, RequestError> {
    let response = state.db_connection.list_resources().await?;
    Ok(Json(response))
}

/// Browsers get the re-rendered page, other clients the JSON acknowledgement.
pub async fn add_resource(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    form: Result<Form<AddResourceForm>, FormRejection>,
) -> Result<Response, RequestError> {
    let Form(form) = form.map_err(|e| ValidationError::MalformedForm {
        reason: e.body_text(),
    })?;
    let request = form.validate()?;
    state.db_connection.add_resource(&request).await?;
    if accepts_html(&headers) {
        let response = state.db_connection.list_resources().await?;
        let page = Html(render_index(&response.resource_list));
        return Ok((StatusCode::CREATED, page).into_response());
    }
    Ok((StatusCode::CREATED, Json(AddResourceResponse::ADDED)).into_response())
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .any(|media| {
            let media = media.split(';').next().unwrap_or_default().trim();
            media.eq_ignore_ascii_case("text/html")
        })
}
