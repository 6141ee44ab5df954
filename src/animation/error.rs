use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnimationError>;

#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("trajectory has no samples")]
    EmptySeries,
    #[error("series `{series}` has {found} samples, expected {expected}")]
    LengthMismatch {
        series: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("time is not strictly increasing at sample {index}")]
    NonMonotonicTime { index: usize },
    #[error("series `{series}` has a non-finite value at sample {index}")]
    NonFinite { series: &'static str, index: usize },
    #[error(
        "requested frame count {requested} exceeds available samples {available} with non-positive stride"
    )]
    DegenerateStride { requested: usize, available: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("rendering failed: {0}")]
    Render(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for AnimationError
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        AnimationError::Render(Box::new(err))
    }
}
