use std::{
  fmt::{self, Display},
  io::{Read, Write},
  str::FromStr,
};

use crate::*;

/// One line per row, every element followed by a single space.
///
/// Cells use the element's own `Display`, so a `bool` grid prints `true`/`false` rather
/// than `1`/`0`.
impl<T: Display, const R: usize, const C: usize> Display for Mat<T, R, C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for row in self.as_rows() {
      for cell in row {
        write!(f, "{cell} ")?;
      }
      writeln!(f)?;
    }
    Ok(())
  }
}

impl<T, const R: usize, const C: usize> Mat<T, R, C>
where
  T: FromStr + Default,
{
  /// Fills the matrix in row-major order from whitespace separated tokens.
  ///
  /// Tokens left over after the last cell are not consumed.
  pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> MatrixResult<Self> {
    let mut tokens = tokens.into_iter();
    let mut mat = Self::default();
    for (index, cell) in mat.rows.iter_mut().flatten().enumerate() {
      let token = tokens
        .next()
        .ok_or(MatrixError::Parse { index, token: None })?;
      *cell = token.parse().map_err(|_| MatrixError::Parse {
        index,
        token: Some(token.to_string()),
      })?;
    }
    Ok(mat)
  }

  pub fn from_reader(mut reader: impl Read) -> MatrixResult<Self> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    Self::from_tokens(source.split_whitespace())
  }
}

impl<T, const R: usize, const C: usize> FromStr for Mat<T, R, C>
where
  T: FromStr + Default,
{
  type Err = MatrixError;

  fn from_str(s: &str) -> MatrixResult<Self> {
    Self::from_tokens(s.split_whitespace())
  }
}

impl<T: Display, const R: usize, const C: usize> Mat<T, R, C> {
  /// Writes the same text as the `Display` impl.
  pub fn write_to(&self, mut writer: impl Write) -> MatrixResult<()> {
    write!(writer, "{self}")?;
    Ok(())
  }
}
