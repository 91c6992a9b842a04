//! Handler for short alias redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::response_sent;

/// Redirects an alias to its original URL.
///
/// # Endpoint
///
/// `GET /{*alias}`
///
/// # Request Flow
///
/// 1. Take the alias from the path, reject it if empty
/// 2. Resolve it through the backend
/// 3. Reject expired links
/// 4. Return `302 Found` with the original URL as `Location`
/// 5. Once the response is done, record the click on a detached task
///
/// # Errors
///
/// Returns 404 Not Found if the alias is empty, undecodable, unknown or expired.
/// Returns 500 Internal Server Error if the backend fails.
pub async fn redirect_handler(
    alias: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let Path(alias) = alias.map_err(|rejection| {
        debug!(error = %rejection, "Rejected alias path");
        AppError::not_found("Not Found")
    })?;

    redirect(state, alias, &headers).await
}

/// `GET /`: the empty alias, answered with `404` without a backend call.
pub async fn root_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    redirect(state, String::new(), &headers).await
}

async fn redirect(state: AppState, alias: String, headers: &HeaderMap) -> Result<Response, AppError> {
    let target = state.redirect_service.resolve_target(&alias).await?;

    let location = HeaderValue::try_from(target.as_str()).map_err(|e| {
        error!(alias = %alias, error = %e, "Original URL is not a valid Location header");
        AppError::internal()
    })?;

    debug!(alias = %alias, target = %target, "Redirecting");

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let (guard, sent) = response_sent::channel();
    state.redirect_service.schedule_click(alias, user_agent, sent);

    let response = (StatusCode::FOUND, [(header::LOCATION, location)]).into_response();
    Ok(response_sent::attach(response, guard))
}
