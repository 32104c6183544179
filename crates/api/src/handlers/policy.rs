use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use mta_sts_domain::DomainError;
use tracing::instrument;

use crate::{errors::ApiError, state::AppState};

#[instrument(skip_all, name = "api_serve_policy")]
pub async fn serve_policy(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, ApiError> {
    let host = request_host(&headers, &uri).ok_or(DomainError::MissingHost)?;
    let outcome = state.serve_policy.execute(host).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain")],
        outcome.body(),
    )
        .into_response())
}

/// Host the request was addressed to: the `Host` header, or the URI authority
/// for HTTP/2 requests that only carry `:authority`.
fn request_host<'a>(headers: &'a HeaderMap, uri: &'a Uri) -> Option<&'a str> {
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| uri.authority().map(|authority| authority.as_str()))
        .filter(|host| !host.is_empty())
}
