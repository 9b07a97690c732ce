use std::fmt::{self, Display};

use crate::*;

/// Determinant and minors of one square matrix snapshot by Laplace expansion.
///
/// The expansion always runs along the first remaining row and recurses into
/// the minor with that row and one column struck out, so the cost is O(N!).
/// This is meant for the small dimensions the fixed size types are used for.
#[derive(Debug, Clone, Copy)]
pub struct MinorCalculator<T, const N: usize> {
  mat: SquareMat<T, N>,
}

impl<T: Scalar, const N: usize> MinorCalculator<T, N> {
  pub fn new(mat: SquareMat<T, N>) -> Self {
    Self { mat }
  }

  pub fn matrix(&self) -> &SquareMat<T, N> {
    &self.mat
  }

  pub fn determinant(&self) -> T {
    Minor::full(&self.mat).det()
  }

  /// The `N - 1` sized submatrix without `row` and `col`.
  pub fn minor(&self, row: usize, col: usize) -> MatrixResult<Minor<'_, T, N>> {
    Minor::full(&self.mat).minor(row, col)
  }

  pub fn minor_det(&self, row: usize, col: usize) -> MatrixResult<T> {
    Ok(self.minor(row, col)?.det())
  }

  /// Minor determinant signed by `(-1)^(row + col)`.
  pub fn cofactor(&self, row: usize, col: usize) -> MatrixResult<T> {
    let minor = self.minor_det(row, col)?;
    Ok(if (row + col) % 2 == 0 {
      minor
    } else {
      T::zero() - minor
    })
  }

  /// Matrix of cofactors, not yet transposed.
  pub fn cofactors(&self) -> SquareMat<T, N> {
    let full = Minor::full(&self.mat);
    Mat::from_fn(|i, j| {
      let minor = full.strike(i, j).det();
      if (i + j) % 2 == 0 {
        minor
      } else {
        T::zero() - minor
      }
    })
  }
}

#[derive(Clone, Copy)]
struct IndexSet<const N: usize> {
  indices: [usize; N],
  len: usize,
}

impl<const N: usize> IndexSet<N> {
  fn full() -> Self {
    Self {
      indices: std::array::from_fn(|i| i),
      len: N,
    }
  }

  /// Drops the index at `position`, keeping the others in order.
  fn without(&self, position: usize) -> Self {
    let mut indices = self.indices;
    indices.copy_within(position + 1..self.len, position);
    Self {
      indices,
      len: self.len - 1,
    }
  }

  fn as_slice(&self) -> &[usize] {
    &self.indices[..self.len]
  }
}

/// Borrowed view of a square submatrix, made by striking rows and columns out of
/// a source matrix. Rows and columns keep their relative order.
#[derive(Clone, Copy)]
pub struct Minor<'a, T, const N: usize> {
  source: &'a SquareMat<T, N>,
  rows: IndexSet<N>,
  cols: IndexSet<N>,
}

impl<'a, T: Scalar, const N: usize> Minor<'a, T, N> {
  pub fn full(source: &'a SquareMat<T, N>) -> Self {
    Self {
      source,
      rows: IndexSet::full(),
      cols: IndexSet::full(),
    }
  }

  /// Side length of the view.
  pub fn dim(&self) -> usize {
    self.rows.len
  }

  #[inline]
  fn at(&self, row: usize, col: usize) -> T {
    self.source[(self.rows.indices[row], self.cols.indices[col])]
  }

  fn strike(&self, row: usize, col: usize) -> Self {
    Self {
      source: self.source,
      rows: self.rows.without(row),
      cols: self.cols.without(col),
    }
  }

  pub fn get(&self, row: usize, col: usize) -> MatrixResult<T> {
    self.check_bounds(row, col)?;
    Ok(self.at(row, col))
  }

  pub fn minor(&self, row: usize, col: usize) -> MatrixResult<Self> {
    self.check_bounds(row, col)?;
    Ok(self.strike(row, col))
  }

  fn check_bounds(&self, row: usize, col: usize) -> MatrixResult<()> {
    if row >= self.dim() || col >= self.dim() {
      return Err(MatrixError::OutOfRange {
        row,
        col,
        rows: self.dim(),
        cols: self.dim(),
      });
    }
    Ok(())
  }

  pub fn det(&self) -> T {
    match self.dim() {
      // empty product, keeps the 1x1 inverse consistent
      0 => T::one(),
      1 => self.at(0, 0),
      2 => self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0),
      n => (0..n).fold(T::zero(), |acc, j| {
        let term = self.at(0, j) * self.strike(0, j).det();
        if j % 2 == 0 {
          acc + term
        } else {
          acc - term
        }
      }),
    }
  }

  /// Copies the view into an owned matrix of side `D`, which must equal [`Minor::dim`].
  pub fn to_mat<const D: usize>(&self) -> MatrixResult<SquareMat<T, D>> {
    if D != self.dim() {
      return Err(MatrixError::DimensionMismatch {
        expected: D,
        actual: self.dim(),
      });
    }
    Ok(Mat::from_fn(|i, j| self.at(i, j)))
  }

  /// Row and column indices of the source matrix this view keeps.
  pub fn source_indices(&self) -> (&[usize], &[usize]) {
    (self.rows.as_slice(), self.cols.as_slice())
  }
}

impl<T: Scalar + Display, const N: usize> Display for Minor<'_, T, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for i in 0..self.dim() {
      for j in 0..self.dim() {
        write!(f, "{} ", self.at(i, j))?;
      }
      writeln!(f)?;
    }
    Ok(())
  }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Minor<'_, T, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Minor")
      .field("rows", &self.rows.as_slice())
      .field("cols", &self.cols.as_slice())
      .finish()
  }
}
