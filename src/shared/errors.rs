use thiserror::Error;

/// Errors surfaced by the domain services.
///
/// `BadRequest` and `NotFound` carry the human-readable message that is sent
/// back to the caller verbatim. `Storage` wraps anything the database layer
/// reported and is never shown to clients as-is.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_display_their_message_verbatim() {
        assert_eq!(DomainError::not_found("Garage not found").to_string(), "Garage not found");
        assert_eq!(DomainError::bad_request("Invalid car_id").to_string(), "Invalid car_id");
    }

    #[test]
    fn storage_errors_carry_the_backend_detail() {
        let err = DomainError::Storage("disk I/O error".into());
        assert_eq!(err.to_string(), "Storage error: disk I/O error");
    }
}
