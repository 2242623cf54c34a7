#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Fallback list must contain at least one target")]
    EmptyFallbackList,
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
