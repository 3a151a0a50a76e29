use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use db::{record::Record, schema::ValidationErrors, store::StoreError};
use services::services::form::FormError;
use thiserror::Error;
use utils::response::ApiResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{0} not found")]
    NotFound(String),
}

impl<R: Record> From<FormError<R>> for ApiError {
    fn from(err: FormError<R>) -> Self {
        match err {
            FormError::Invalid { errors, .. } => ApiError::Validation(errors),
            FormError::Persist { source, .. } => ApiError::Store(source),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match self {
            ApiError::Validation(errors) => (
                status,
                ResponseJson(ApiResponse::<(), ValidationErrors>::error_with_data(errors)),
            )
                .into_response(),
            other => {
                if status.is_server_error() {
                    tracing::error!(error = %other, "Request failed");
                }
                (
                    status,
                    ResponseJson(ApiResponse::<()>::error(&other.to_string())),
                )
                    .into_response()
            }
        }
    }
}
