use cgmath::SquareMatrix as _;

use crate::*;

fn assert_close<const R: usize, const C: usize>(a: &Mat<f64, R, C>, b: &Mat<f64, R, C>) {
  for (x, y) in a.iter().zip(b.iter()) {
    assert!((x - y).abs() < 1e-9, "{a}is not close to\n{b}");
  }
}

#[test]
fn construction() {
  let m = Mat::<i32, 2, 3>::from_fn(|i, j| (i * 3 + j) as i32);
  assert_eq!(m.as_array(), [[0, 1, 2], [3, 4, 5]]);
  assert_eq!(m.shape(), (2, 3));
  assert_eq!(Mat::<i32, 2, 3>::ROWS, 2);
  assert_eq!(Mat::<i32, 2, 3>::COLUMNS, 3);

  assert_eq!(Mat::<u8, 2, 2>::default(), Mat::splat(0));
  let arr: [[i32; 3]; 2] = m.into();
  assert_eq!(Mat::from(arr), m);
}

#[test]
fn bounds_checked_access() {
  let mut m = Mat::<i16, 4, 3>::splat(1);
  assert!(matches!(
    m.get(4, 0),
    Err(MatrixError::OutOfRange { row: 4, col: 0, rows: 4, cols: 3 })
  ));
  assert!(m.get(0, 3).is_err());
  assert!(m.get_mut(10, 10).is_err());
  assert!(m.row(4).is_err());
  assert!(m.column(3).is_err());
  assert_eq!(m, Mat::splat(1));

  *m.get_mut(3, 2).unwrap() = 9;
  assert_eq!(*m.get(3, 2).unwrap(), 9);
  assert_eq!(m.row(3).unwrap(), [1, 1, 9]);
  assert_eq!(m.column(2).unwrap(), [1, 1, 1, 9]);
}

#[test]
fn apply_is_row_major() {
  let mut m = Mat::<usize, 3, 4>::default();
  let mut visited = Vec::new();
  let mut counter = 0;
  m.apply(|cell, i, j| {
    visited.push((i, j));
    *cell = counter;
    counter += 1;
  });
  assert_eq!(visited.len(), 12);
  assert_eq!(visited[0], (0, 0));
  assert_eq!(visited[4], (1, 0));
  assert_eq!(visited[11], (2, 3));
  assert_eq!(m.row(1).unwrap(), [4, 5, 6, 7]);
}

#[test]
fn elementwise_ops() {
  let a = Mat::from_array([[1i32, 2], [3, 4]]);
  let b = Mat::from_array([[10, 20], [30, 40]]);
  let sum = a + b;
  for i in 0..2 {
    for j in 0..2 {
      assert_eq!(sum[(i, j)], a[(i, j)] + b[(i, j)]);
    }
  }
  assert_eq!(b - a, Mat::from_array([[9, 18], [27, 36]]));
  assert_eq!(a * 3, Mat::from_array([[3, 6], [9, 12]]));
  assert_eq!(3 * a, a * 3);
  assert_eq!(b / 10, Mat::from_array([[1, 2], [3, 4]]));
  assert_eq!(-a, Mat::from_array([[-1, -2], [-3, -4]]));

  let mut c = a;
  c += b;
  c -= a;
  assert_eq!(c, b);
  c *= 2;
  c /= 4;
  assert_eq!(c, Mat::from_array([[5, 10], [15, 20]]));
  c.negate().negate();
  assert_eq!(c, Mat::from_array([[5, 10], [15, 20]]));
}

#[test]
fn zero_and_identity() {
  use num_traits::{One, Zero};
  let z = Mat::<f32, 2, 3>::zero();
  assert!(z.is_zero());
  assert!(!Mat::<f32, 2, 3>::splat(1.).is_zero());
  assert_eq!(SquareMat::<i32, 3>::one(), SquareMat::identity());
  assert_eq!(SquareMat::<i32, 2>::identity().as_array(), [[1, 0], [0, 1]]);
}

#[test]
fn matrix_product() {
  let a = Mat::from_array([[1, 2, 3], [4, 5, 6]]);
  let b = Mat::from_array([[7, 8], [9, 10], [11, 12]]);
  assert_eq!(a * b, Mat::from_array([[58, 64], [139, 154]]));
  assert_eq!(b * a, Mat::from_array([[39, 54, 69], [49, 68, 87], [59, 82, 105]]));
}

#[test]
fn transpose() {
  let a = Mat::from_array([[1, 2, 3], [4, 5, 6]]);
  assert_eq!(a.transpose(), Mat::from_array([[1, 4], [2, 5], [3, 6]]));
  assert_eq!(a.transpose().transpose(), a);
}

#[test]
fn map_changes_element_type() {
  let a = Mat::from_array([[1, -2], [3, -4]]);
  let b: Mat<f64, 2, 2> = a.map(|v| v as f64 / 2.);
  assert_eq!(b, Mat::from_array([[0.5, -1.], [1.5, -2.]]));
}

#[test]
fn text_format() {
  let m: Mat<i32, 2, 3> = "1 2 3 4 5 6".parse().unwrap();
  assert_eq!(m.to_string(), "1 2 3 \n4 5 6 \n");
  assert_eq!(m.to_string().parse::<Mat<i32, 2, 3>>().unwrap(), m);

  let m: Mat<i32, 2, 2> = "1\n2\t 3\n\n4 5".parse().unwrap();
  assert_eq!(m.as_array(), [[1, 2], [3, 4]]);

  let mut out = Vec::new();
  m.write_to(&mut out).unwrap();
  assert_eq!(out, b"1 2 \n3 4 \n");

  let m = Mat::<i32, 2, 2>::from_reader("9 8 7 6".as_bytes()).unwrap();
  assert_eq!(m.as_array(), [[9, 8], [7, 6]]);
}

#[test]
fn parse_failures() {
  let err = "1 2 3".parse::<Mat<i32, 2, 2>>().unwrap_err();
  assert!(matches!(err, MatrixError::Parse { index: 3, token: None }));

  let err = "1 2 x 4".parse::<Mat<i32, 2, 2>>().unwrap_err();
  match err {
    MatrixError::Parse { index, token } => {
      assert_eq!(index, 2);
      assert_eq!(token.as_deref(), Some("x"));
    }
    other => panic!("unexpected error {other:?}"),
  }

  assert!(Mat::<u8, 1, 1>::from_reader("300".as_bytes()).is_err());
}

#[cfg(feature = "serde")]
#[test]
fn serde_rows() {
  let m = Mat::from_array([[1, 2, 3], [4, 5, 6]]);
  let json = serde_json::to_string(&m).unwrap();
  assert_eq!(json, "[[1,2,3],[4,5,6]]");
  let back: Mat<i32, 2, 3> = serde_json::from_str(&json).unwrap();
  assert_eq!(back, m);

  assert!(serde_json::from_str::<Mat<i32, 3, 2>>(&json).is_err());
  assert!(serde_json::from_str::<Mat<i32, 2, 2>>(&json).is_err());
}

#[cfg(feature = "bytemuck")]
#[test]
fn pod_bytes() {
  let m = Mat::from_array([[1u32, 2], [3, 4]]);
  let words: &[u32] = bytemuck::cast_slice(std::slice::from_ref(&m));
  assert_eq!(words, &[1, 2, 3, 4]);
  assert_eq!(bytemuck::bytes_of(&m).len(), 16);
}

#[test]
fn det_and_inverse() {
  let m: SquareMat<i32, 2> = "1 2 3 4".parse().unwrap();
  assert_eq!(m.det(), -2);
  assert_eq!(m.trace(), 5);
  assert_eq!(m.adjugate(), Mat::from_array([[4, -2], [-3, 1]]));
  assert_eq!(m.cofactor(0, 1).unwrap(), -3);

  let m = Mat::from_array([[2i32, 1], [1, 1]]);
  let inv = m.inverse().unwrap();
  assert_eq!(inv, Mat::from_array([[1, -1], [-1, 2]]));
  assert_eq!(m * inv, SquareMat::identity());

  let m = SquareMat::<f64, 1>::splat(4.);
  assert_eq!(m.inverse().unwrap(), SquareMat::splat(0.25));
}

#[test]
fn singular_inverse() {
  let m = SquareMat::<f64, 3>::splat(0.);
  assert!(matches!(m.inverse(), Err(MatrixError::SingularMatrix)));
  assert_eq!(m.inverse_or_identity(), SquareMat::identity());

  let m: SquareMat<i32, 3> = "1 2 3 4 5 6 7 8 9".parse().unwrap();
  assert!(matches!(m.inverse(), Err(MatrixError::SingularMatrix)));
}

#[test]
fn cgmath_det_inverse_mul() {
  #[rustfmt::skip]
  let rows = [
    [4., 7., 2.],
    [3., 6., 1.],
    [2., 5., 3.],
  ];
  let m = SquareMat::<f64, 3>::from_array(rows);
  let cgmath_m = cgmath::Matrix3::from(rows);

  assert!((m.det() - cgmath_m.determinant()).abs() < 1e-9);

  let cgmath_inv: [[f64; 3]; 3] = cgmath_m.invert().unwrap().into();
  assert_close(&m.inverse().unwrap(), &Mat::from_array(cgmath_inv));
  assert_close(&(m * m.inverse().unwrap()), &SquareMat::identity());

  #[rustfmt::skip]
  let other = [
    [1., -2., 0.5],
    [0., 3., -1.],
    [2., 1., 1.],
  ];
  let cgmath_product: [[f64; 3]; 3] = (cgmath::Matrix3::from(other) * cgmath_m).into();
  assert_close(&(m * Mat::from_array(other)), &Mat::from_array(cgmath_product));
}

#[test]
fn cgmath_4x4() {
  #[rustfmt::skip]
  let rows = [
    [1., 0., 2., -1.],
    [3., 0., 0., 5.],
    [2., 1., 4., -3.],
    [1., 0., 5., 0.],
  ];
  let m = SquareMat::<f64, 4>::from_array(rows);
  let cgmath_m = cgmath::Matrix4::from(rows);
  assert!((m.det() - cgmath_m.determinant()).abs() < 1e-9);
  assert!((m.det() - 30.).abs() < 1e-9);

  let cgmath_inv: [[f64; 4]; 4] = cgmath_m.invert().unwrap().into();
  assert_close(&m.inverse().unwrap(), &Mat::from_array(cgmath_inv));
  assert_close(&(m.inverse().unwrap() * m), &SquareMat::identity());
}
