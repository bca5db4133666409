use thiserror::Error;

/// Contract violations surfaced while building or rendering a scene.
#[derive(Debug, Error)]
pub enum Error {
    #[error("matrix dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: String, found: String },

    #[error("matrix is singular (determinant is zero) and cannot be inverted")]
    SingularMatrix,

    #[error("invalid ray: {reason}")]
    InvalidRay { reason: String },

    #[error("invalid material: {field} must be non-negative, got {value}")]
    InvalidMaterial { field: &'static str, value: f64 },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encoding error: {0}")]
    Encoding(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn dimensions(expected: (usize, usize), found: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            found: format!("{}x{}", found.0, found.1),
        }
    }
}

impl From<gif::EncodingError> for Error {
    fn from(err: gif::EncodingError) -> Self {
        match err {
            gif::EncodingError::Io(err) => Self::Io(err),
            err => Self::Encoding(err.to_string()),
        }
    }
}

impl From<png::EncodingError> for Error {
    fn from(err: png::EncodingError) -> Self {
        match err {
            png::EncodingError::IoError(err) => Self::Io(err),
            err => Self::Encoding(err.to_string()),
        }
    }
}
