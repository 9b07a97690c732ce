use std::ops::{Mul, Neg};

use num_traits::Zero;

use crate::*;

impl_elementwise_operator!(Add::add, AddAssign::add_assign);
impl_elementwise_operator!(Sub::sub, SubAssign::sub_assign);
impl_scalar_operator!(Mul::mul, MulAssign::mul_assign);
impl_scalar_operator!(Div::div, DivAssign::div_assign);
impl_scalar_lhs_mul!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64, f32, f64);

impl<T, const R: usize, const C: usize> Neg for Mat<T, R, C>
where
  T: Neg<Output = T> + Copy,
{
  type Output = Self;

  #[inline]
  fn neg(mut self) -> Self {
    self.negate();
    self
  }
}

/// `R`x`K` by `K`x`C` product.
impl<T, const R: usize, const K: usize, const C: usize> Mul<Mat<T, K, C>> for Mat<T, R, K>
where
  T: num_traits::Zero + Mul<Output = T> + Copy,
{
  type Output = Mat<T, R, C>;

  fn mul(self, rhs: Mat<T, K, C>) -> Mat<T, R, C> {
    let mut result = Mat::<T, R, C>::zero();
    for i in 0..R {
      for j in 0..C {
        for k in 0..K {
          result[(i, j)] = result[(i, j)] + self[(i, k)] * rhs[(k, j)];
        }
      }
    }
    result
  }
}

impl<T, const R: usize, const C: usize> num_traits::Zero for Mat<T, R, C>
where
  T: num_traits::Zero + Copy,
{
  #[inline(always)]
  fn zero() -> Self {
    Self::splat(T::zero())
  }
  #[inline(always)]
  fn is_zero(&self) -> bool {
    self.iter().all(T::is_zero)
  }
}

impl<T, const N: usize> num_traits::One for SquareMat<T, N>
where
  T: num_traits::One + num_traits::Zero + Copy,
{
  #[inline(always)]
  fn one() -> Self {
    Self::from_fn(|i, j| if i == j { T::one() } else { T::zero() })
  }
}

