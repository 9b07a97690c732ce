mod dimension;
mod io;
mod ops;
#[cfg(feature = "serde")]
mod serialize;

pub use dimension::*;

use crate::*;

/// Dense `R` x `C` matrix, stored row-major.
///
/// The grid is owned by value, copying a matrix copies every element.
#[repr(C)]
#[derive(Debug, Copy, Clone, Eq)]
pub struct Mat<T, const R: usize, const C: usize> {
  rows: [[T; C]; R],
}

impl<T, const R: usize, const C: usize> Mat<T, R, C> {
  const NON_EMPTY: () = assert!(R > 0 && C > 0, "matrix dimensions must be at least 1x1");

  pub const ROWS: usize = R;
  pub const COLUMNS: usize = C;

  /// Adopts a row-major grid as is.
  pub fn from_array(rows: [[T; C]; R]) -> Self {
    #[allow(clippy::let_unit_value)]
    let () = Self::NON_EMPTY;
    Self { rows }
  }

  /// Builds every cell from its row and column index, visiting cells in row-major order.
  pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
    Self::from_array(std::array::from_fn(|i| std::array::from_fn(|j| f(i, j))))
  }

  pub fn splat(value: T) -> Self
  where
    T: Clone,
  {
    Self::from_fn(|_, _| value.clone())
  }

  #[inline]
  pub const fn shape(&self) -> (usize, usize) {
    (R, C)
  }

  fn check_bounds(row: usize, col: usize) -> MatrixResult<()> {
    if row >= R || col >= C {
      return Err(MatrixError::OutOfRange {
        row,
        col,
        rows: R,
        cols: C,
      });
    }
    Ok(())
  }

  pub fn get(&self, row: usize, col: usize) -> MatrixResult<&T> {
    Self::check_bounds(row, col)?;
    Ok(&self.rows[row][col])
  }

  pub fn get_mut(&mut self, row: usize, col: usize) -> MatrixResult<&mut T> {
    Self::check_bounds(row, col)?;
    Ok(&mut self.rows[row][col])
  }

  pub fn row(&self, row: usize) -> MatrixResult<[T; C]>
  where
    T: Clone,
  {
    Self::check_bounds(row, 0)?;
    Ok(self.rows[row].clone())
  }

  pub fn column(&self, col: usize) -> MatrixResult<[T; R]>
  where
    T: Clone,
  {
    Self::check_bounds(0, col)?;
    Ok(std::array::from_fn(|i| self.rows[i][col].clone()))
  }

  /// Copy of the backing grid.
  pub fn as_array(&self) -> [[T; C]; R]
  where
    T: Clone,
  {
    self.rows.clone()
  }

  pub fn as_rows(&self) -> &[[T; C]; R] {
    &self.rows
  }

  pub fn into_array(self) -> [[T; C]; R] {
    self.rows
  }

  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.rows.iter().flatten()
  }

  /// Calls `f` once per cell with the cell and its indices, in row-major order.
  pub fn apply(&mut self, mut f: impl FnMut(&mut T, usize, usize)) {
    for (i, row) in self.rows.iter_mut().enumerate() {
      for (j, cell) in row.iter_mut().enumerate() {
        f(cell, i, j);
      }
    }
  }

  pub fn map<X>(self, mut f: impl FnMut(T) -> X) -> Mat<X, R, C> {
    Mat::from_array(self.rows.map(|row| row.map(&mut f)))
  }

  #[must_use]
  pub fn transpose(&self) -> Mat<T, C, R>
  where
    T: Copy,
  {
    Mat::from_fn(|i, j| self.rows[j][i])
  }

  /// Flips the sign of every element in place.
  pub fn negate(&mut self) -> &mut Self
  where
    T: std::ops::Neg<Output = T> + Copy,
  {
    self.apply(|cell, _, _| *cell = -*cell);
    self
  }
}

impl<T: Default, const R: usize, const C: usize> Default for Mat<T, R, C> {
  fn default() -> Self {
    Self::from_fn(|_, _| T::default())
  }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Mat<T, R, C> {
  fn from(rows: [[T; C]; R]) -> Self {
    Self::from_array(rows)
  }
}

impl<T, const R: usize, const C: usize> From<Mat<T, R, C>> for [[T; C]; R] {
  fn from(mat: Mat<T, R, C>) -> Self {
    mat.rows
  }
}

/// Unchecked sugar, panics on out of range like slice indexing. Use [`Mat::get`] for a
/// recoverable error.
impl<T, const R: usize, const C: usize> std::ops::Index<(usize, usize)> for Mat<T, R, C> {
  type Output = T;

  #[inline]
  fn index(&self, (row, col): (usize, usize)) -> &T {
    &self.rows[row][col]
  }
}

impl<T, const R: usize, const C: usize> std::ops::IndexMut<(usize, usize)> for Mat<T, R, C> {
  #[inline]
  fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
    &mut self.rows[row][col]
  }
}

impl<T: PartialEq, const R: usize, const C: usize> PartialEq for Mat<T, R, C> {
  fn eq(&self, other: &Self) -> bool {
    self.iter().zip(other.iter()).all(|(a, b)| a == b)
  }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable
  for Mat<T, R, C>
{
}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Mat<T, R, C> {}

#[cfg(test)]
mod test;
