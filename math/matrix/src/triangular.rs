use std::fmt::{self, Display};

use num_traits::{NumCast, ToPrimitive};

use crate::*;

/// Forward elimination of a square matrix into upper triangular form.
///
/// Each pivot column `k` is cleared below the diagonal by adding
/// `-(a[i][k] / a[k][k]) * row[k]` to every lower row `i`. The multiplier is always
/// computed in `f64`, whatever `T` is, and the updated cells are cast back into `T`.
/// For integral `T` a cell is rounded to the nearest integer when it is whole up to
/// `f64` rounding error, any truly fractional cell fails the step with
/// [`MatrixError::NotRepresentable`] instead of being truncated.
///
/// A zero pivot is replaced by the first lower row with a non zero entry in the pivot
/// column. That row is swapped up and negated, which leaves the determinant unchanged.
/// When the whole column is zero below the diagonal there is nothing to eliminate.
/// Unsigned element types are accepted, but a negative cell (from a subtraction or a
/// negated swap) is reported as [`MatrixError::NotRepresentable`].
#[derive(Debug, Clone, Copy)]
pub struct TriangularReducer<T, const N: usize> {
  grid: SquareMat<T, N>,
  pivot: usize,
}

impl<T, const N: usize> TriangularReducer<T, N>
where
  T: Scalar + NumCast,
{
  pub fn new(mat: SquareMat<T, N>) -> Self {
    Self { grid: mat, pivot: 0 }
  }

  /// Index of the next pivot column to eliminate.
  pub fn pivot(&self) -> usize {
    self.pivot
  }

  pub fn is_done(&self) -> bool {
    self.pivot + 1 >= N
  }

  /// Current state of the grid, partially reduced until [`Self::is_done`].
  pub fn grid(&self) -> &SquareMat<T, N> {
    &self.grid
  }

  /// Clears one pivot column. Returns `false` once the grid is already triangular.
  pub fn step(&mut self) -> MatrixResult<bool> {
    if self.is_done() {
      return Ok(false);
    }
    let k = self.pivot;
    self.pivot += 1;

    if self.grid[(k, k)].is_zero() {
      let Some(replacement) = (k + 1..N).find(|&i| !self.grid[(i, k)].is_zero()) else {
        log::trace!("pivot column {k} is already zero below the diagonal");
        return Ok(true);
      };
      log::debug!("zero pivot at column {k}, swapping in row {replacement}");
      self.swap_negated(k, replacement)?;
    }

    log::trace!("eliminating below pivot column {k}");
    let pivot = to_f64(self.grid[(k, k)])?;
    for i in k + 1..N {
      if self.grid[(i, k)].is_zero() {
        continue;
      }
      let factor = -to_f64(self.grid[(i, k)])? / pivot;
      for j in k + 1..N {
        let value = to_f64(self.grid[(i, j)])? + factor * to_f64(self.grid[(k, j)])?;
        self.grid[(i, j)] = from_f64(value)?;
      }
      self.grid[(i, k)] = T::zero();
    }
    Ok(true)
  }

  pub fn reduce(mut self) -> MatrixResult<TriangularMat<T, N>> {
    while self.step()? {}
    Ok(TriangularMat { mat: self.grid })
  }

  fn swap_negated(&mut self, target: usize, source: usize) -> MatrixResult<()> {
    let mut negated = [T::zero(); N];
    for (j, cell) in negated.iter_mut().enumerate() {
      *cell = from_f64(-to_f64(self.grid[(source, j)])?)?;
    }
    for (j, cell) in negated.into_iter().enumerate() {
      self.grid[(source, j)] = self.grid[(target, j)];
      self.grid[(target, j)] = cell;
    }
    Ok(())
  }
}

fn to_f64<T: ToPrimitive>(value: T) -> MatrixResult<f64> {
  value.to_f64().ok_or(MatrixError::NotRepresentable)
}

/// Integral `T` is detected by `1 / 2` being zero.
fn is_integral<T: Scalar>() -> bool {
  (T::one() / (T::one() + T::one())).is_zero()
}

fn from_f64<T: Scalar + NumCast>(value: f64) -> MatrixResult<T> {
  let value = if is_integral::<T>() {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-9 * rounded.abs().max(1.) {
      log::debug!("cell {value} has no exact integral representation");
      return Err(MatrixError::NotRepresentable);
    }
    rounded
  } else {
    value
  };
  <T as NumCast>::from(value).ok_or(MatrixError::NotRepresentable)
}

/// Upper triangular square matrix, every cell below the diagonal is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangularMat<T, const N: usize> {
  mat: SquareMat<T, N>,
}

impl<T: Scalar, const N: usize> TriangularMat<T, N> {
  /// Product of the diagonal.
  pub fn det(&self) -> T {
    (0..N).fold(T::one(), |acc, i| acc * self.mat[(i, i)])
  }

  pub fn diagonal(&self) -> [T; N] {
    std::array::from_fn(|i| self.mat[(i, i)])
  }

  pub fn as_mat(&self) -> &SquareMat<T, N> {
    &self.mat
  }

  pub fn into_mat(self) -> SquareMat<T, N> {
    self.mat
  }
}

impl<T: Display, const N: usize> Display for TriangularMat<T, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    Display::fmt(&self.mat, f)
  }
}

impl<T, const N: usize> SquareMat<T, N>
where
  T: Scalar + NumCast,
{
  pub fn to_triangular(&self) -> MatrixResult<TriangularMat<T, N>> {
    TriangularReducer::new(*self).reduce()
  }

  /// Determinant through elimination, O(N^3) instead of the cofactor expansion.
  ///
  /// Integral matrices whose elimination leaves a fractional cell fail with
  /// [`MatrixError::NotRepresentable`], fall back to [`SquareMatrix::det`] for those.
  pub fn det_triangular(&self) -> MatrixResult<T> {
    Ok(self.to_triangular()?.det())
  }
}
