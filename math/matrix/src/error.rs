#[derive(thiserror::Error, Debug)]
pub enum MatrixError {
  #[error("element ({row}, {col}) is out of range for a {rows}x{cols} matrix")]
  OutOfRange {
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
  },
  #[error(
    "failed to fill matrix cell {index}: {}",
    .token.as_deref().map_or("input exhausted".to_string(), |t| format!("invalid token {t:?}"))
  )]
  Parse { index: usize, token: Option<String> },
  #[error("matrix is singular, determinant is zero")]
  SingularMatrix,
  #[error("expected a {expected}x{expected} matrix, the source is {actual}x{actual}")]
  DimensionMismatch { expected: usize, actual: usize },
  #[error("value produced during reduction is not representable in the element type")]
  NotRepresentable,
  #[error("failed to read matrix source: {0}")]
  Io(#[from] std::io::Error),
}

pub type MatrixResult<T> = Result<T, MatrixError>;
