// Query errors - empty results vs. store failures, and their HTTP rendering

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::api::response::Envelope;
use crate::db::StoreError;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Query errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// A well-formed query matched zero rows. Not treated as a failure.
    #[error("{0}")]
    NotFound(String),

    /// The store raised a fault while executing the query
    #[error("{0}")]
    Execution(String),
}

impl QueryError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            QueryError::NotFound(_) => StatusCode::NOT_FOUND,
            QueryError::Execution(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for QueryError {
    fn from(err: StoreError) -> Self {
        QueryError::Execution(err.to_string())
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            QueryError::NotFound(message) => {
                (status, Json(Envelope::not_found(message))).into_response()
            }
            QueryError::Execution(message) => {
                tracing::error!(%message, "query execution failed");
                (status, Json(Envelope::failure(message))).into_response()
            }
        }
    }
}

/// Turn an empty listing into `NotFound`
pub(crate) fn require_rows<T>(rows: Vec<T>, message: impl Into<String>) -> QueryResult<Vec<T>> {
    if rows.is_empty() {
        Err(QueryError::NotFound(message.into()))
    } else {
        Ok(rows)
    }
}

/// Turn a missing single-row lookup into `NotFound`
pub(crate) fn require_row<T>(row: Option<T>, message: impl Into<String>) -> QueryResult<T> {
    row.ok_or_else(|| QueryError::NotFound(message.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            QueryError::NotFound("none".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            QueryError::Execution("disk I/O error".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_message_is_kept_verbatim() {
        let store_err = StoreError::Sqlite(rusqlite::Error::QueryReturnedNoRows);
        let expected = store_err.to_string();

        assert_eq!(QueryError::from(store_err), QueryError::Execution(expected));
    }

    #[test]
    fn test_require_rows() {
        assert_eq!(require_rows(vec![1, 2], "empty"), Ok(vec![1, 2]));
        assert_eq!(
            require_rows(Vec::<i32>::new(), "No dishes found"),
            Err(QueryError::NotFound("No dishes found".to_string()))
        );
    }

    #[test]
    fn test_require_row() {
        assert_eq!(require_row(Some(7), "missing"), Ok(7));
        assert_eq!(
            require_row(None::<i32>, "No dish found"),
            Err(QueryError::NotFound("No dish found".to_string()))
        );
    }
}
