use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => HttpError::BadRequest(errors.join("; ")),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Conflict(msg) => HttpError::Conflict(msg),
                RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"))
                }
                RepositoryError::Custom(msg) => HttpError::Internal(msg),
                RepositoryError::Sqlx(err) => HttpError::Internal(err.to_string()),
            },

            ServiceError::Internal(msg) | ServiceError::Custom(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}
