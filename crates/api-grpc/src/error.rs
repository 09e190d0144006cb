use sample_core::{SampleError, ValueError};
use tonic::Status;

/// Failure of one RPC, tagged with the operation name and the step that failed.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The inbound wire message did not pass value-object validation.
    #[error("{operation}: invalid request: {source}")]
    InvalidRequest {
        operation: &'static str,
        #[source]
        source: ValueError,
    },
    /// The use case itself failed.
    #[error("{operation}: use case failed: {source}")]
    UseCase {
        operation: &'static str,
        #[source]
        source: SampleError,
    },
    /// The use case returned a result its response type rejects.
    #[error("{operation}: failed to build response: {source}")]
    InternalConstruction {
        operation: &'static str,
        #[source]
        source: SampleError,
    },
    /// A wire response could not be turned back into an application response.
    #[error("{operation}: malformed response: {reason}")]
    MalformedResponse {
        operation: &'static str,
        reason: String,
    },
}

impl ApiError {
    pub fn invalid_request(operation: &'static str, source: ValueError) -> Self {
        Self::InvalidRequest { operation, source }
    }

    /// Wraps a use-case failure, separating defects in the use case's own result from
    /// ordinary operation failures.
    pub fn from_use_case(operation: &'static str, source: SampleError) -> Self {
        match source {
            SampleError::InconsistentResponse { .. } => {
                Self::InternalConstruction { operation, source }
            }
            source => Self::UseCase { operation, source },
        }
    }

    pub fn malformed_response(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            operation,
            reason: reason.into(),
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            Self::InvalidRequest { operation, .. }
            | Self::UseCase { operation, .. }
            | Self::InternalConstruction { operation, .. }
            | Self::MalformedResponse { operation, .. } => operation,
        }
    }

    /// Whether the failure was caused by the caller's input rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest { .. }
                | Self::UseCase {
                    source: SampleError::Validation(_) | SampleError::NotFound(_),
                    ..
                }
        )
    }
}

impl From<ApiError> for Status {
    fn from(err: ApiError) -> Self {
        let message = err.to_string();
        match err {
            ApiError::InvalidRequest { .. } => Status::invalid_argument(message),
            ApiError::UseCase { source, .. } => match source {
                SampleError::Validation(_) => Status::invalid_argument(message),
                SampleError::NotFound(_) => Status::not_found(message),
                SampleError::Storage(_) | SampleError::InconsistentResponse { .. } => {
                    Status::internal(message)
                }
            },
            ApiError::InternalConstruction { .. } | ApiError::MalformedResponse { .. } => {
                Status::internal(message)
            }
        }
    }
}
