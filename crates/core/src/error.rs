use sample_types::{SampleId, ValueError};

#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValueError),
    #[error("sample not found (id: {0})")]
    NotFound(SampleId),
    #[error("storage failure: {0}")]
    Storage(String),
    #[error("inconsistent {response}: {reason}")]
    InconsistentResponse {
        response: &'static str,
        reason: String,
    },
}

pub type SampleResult<T> = std::result::Result<T, SampleError>;
