use axum::http::StatusCode;

/// Failure taxonomy shared by the store, the catalog, and the services.
/// Every request-scoped failure maps to a status code and a `result:
/// "failure"` envelope; nothing here terminates the process.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("rule catalog missing for game version '{0}'")]
    CatalogMissing(String),
    #[error("{0}")]
    ValidationConflict(String),
    #[error("storage failure: {0}")]
    Persistence(String),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) | ServiceError::CatalogMissing(_) => StatusCode::NOT_FOUND,
            ServiceError::ValidationConflict(_) => StatusCode::CONFLICT,
            ServiceError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
