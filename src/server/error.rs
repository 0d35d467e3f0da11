use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::StoreError;

/// Failures a handler cannot recover from.
///
/// Missing records and missing sessions are not errors; handlers answer
/// those with a redirect.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Something broke!").into_response()
    }
}
