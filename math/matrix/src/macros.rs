/// Generates an elementwise binary operator and its assignment form
macro_rules! impl_elementwise_operator {
  ($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident) => {
    impl<T, const R: usize, const C: usize> std::ops::$Op for Mat<T, R, C>
    where
      T: std::ops::$Op<Output = T> + Copy,
    {
      type Output = Self;
      #[inline]
      fn $op(self, rhs: Self) -> Self {
        Mat::from_fn(|i, j| std::ops::$Op::$op(self[(i, j)], rhs[(i, j)]))
      }
    }

    impl<T, const R: usize, const C: usize> std::ops::$OpAssign for Mat<T, R, C>
    where
      T: std::ops::$OpAssign + Copy,
    {
      #[inline]
      fn $op_assign(&mut self, rhs: Self) {
        self.apply(|cell, i, j| std::ops::$OpAssign::$op_assign(cell, rhs[(i, j)]));
      }
    }
  };
}

/// Generates a matrix by scalar operator and its assignment form
macro_rules! impl_scalar_operator {
  ($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident) => {
    impl<T, const R: usize, const C: usize> std::ops::$Op<T> for Mat<T, R, C>
    where
      T: std::ops::$Op<Output = T> + Copy,
    {
      type Output = Self;
      #[inline]
      fn $op(self, scalar: T) -> Self {
        self.map(|v| std::ops::$Op::$op(v, scalar))
      }
    }

    impl<T, const R: usize, const C: usize> std::ops::$OpAssign<T> for Mat<T, R, C>
    where
      T: std::ops::$OpAssign + Copy,
    {
      #[inline]
      fn $op_assign(&mut self, scalar: T) {
        self.apply(|cell, _, _| std::ops::$OpAssign::$op_assign(cell, scalar));
      }
    }
  };
}

/// Generates `scalar * matrix` for primitive scalars, the generic form is rejected by coherence
macro_rules! impl_scalar_lhs_mul {
  ($($S:ty),+) => {
    $(
      impl<const R: usize, const C: usize> std::ops::Mul<Mat<$S, R, C>> for $S {
        type Output = Mat<$S, R, C>;
        #[inline]
        fn mul(self, matrix: Mat<$S, R, C>) -> Mat<$S, R, C> {
          matrix.map(|v| self * v)
        }
      }
    )+
  };
}
