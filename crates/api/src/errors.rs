use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use mta_sts_domain::DomainError;
use tracing::error;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::MissingHost => (StatusCode::BAD_REQUEST, self.0.to_string()),

            _ => {
                error!(error = %self.0, "Failed to serve policy");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, [(header::CONTENT_TYPE, "text/plain")], message).into_response()
    }
}
