use thiserror::Error;

pub type RoadmapResult<T> = Result<T, RoadmapError>;

#[derive(Debug, Error)]
pub enum RoadmapError {
    /// The top-level import payload is not valid JSON at all.
    ///
    /// Everything past this point degrades to best-effort partial results
    /// instead of erroring.
    #[error("import payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
