use sqlx::Error as SqlxError;
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match &err {
            SqlxError::RowNotFound => RepositoryError::NotFound,
            SqlxError::Database(db) => match db.kind() {
                ErrorKind::UniqueViolation => RepositoryError::AlreadyExists(db.message().to_string()),
                ErrorKind::ForeignKeyViolation => {
                    RepositoryError::ForeignKey(db.message().to_string())
                }
                _ => RepositoryError::Sqlx(err),
            },
            _ => RepositoryError::Sqlx(err),
        }
    }
}
