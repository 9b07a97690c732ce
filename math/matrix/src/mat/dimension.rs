use crate::*;

pub type SquareMat<T, const N: usize> = Mat<T, N, N>;

pub trait SquareMatrix<T: Scalar>: Sized {
  #[must_use]
  fn identity() -> Self;

  #[must_use]
  fn transpose(&self) -> Self;

  /// Fails with [`MatrixError::SingularMatrix`] when the determinant is zero.
  fn inverse(&self) -> MatrixResult<Self>;

  #[must_use]
  fn inverse_or_identity(&self) -> Self {
    self.inverse().unwrap_or_else(|_| Self::identity())
  }

  #[must_use]
  fn det(&self) -> T;

  #[must_use]
  fn trace(&self) -> T;
}

impl<T: Scalar, const N: usize> SquareMatrix<T> for SquareMat<T, N> {
  fn identity() -> Self {
    <Self as num_traits::One>::one()
  }

  fn transpose(&self) -> Self {
    Mat::transpose(self)
  }

  /// Cofactor expansion, O(N!).
  fn det(&self) -> T {
    MinorCalculator::new(*self).determinant()
  }

  fn inverse(&self) -> MatrixResult<Self> {
    let minors = MinorCalculator::new(*self);
    let det = minors.determinant();
    if det == T::zero() {
      log::debug!("refusing to invert a singular {N}x{N} matrix");
      return Err(MatrixError::SingularMatrix);
    }

    let inv_det = T::one() / det;
    Ok(Mat::transpose(&(minors.cofactors() * inv_det)))
  }

  fn trace(&self) -> T {
    (0..N).fold(T::zero(), |acc, i| acc + self[(i, i)])
  }
}

impl<T: Scalar, const N: usize> SquareMat<T, N> {
  /// Transposed matrix of cofactors.
  #[must_use]
  pub fn adjugate(&self) -> Self {
    Mat::transpose(&MinorCalculator::new(*self).cofactors())
  }

  /// Signed minor of the cell at `row`, `col`.
  pub fn cofactor(&self, row: usize, col: usize) -> MatrixResult<T> {
    MinorCalculator::new(*self).cofactor(row, col)
  }
}
