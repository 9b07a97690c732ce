use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::*;

// serde only covers arrays up to 32 elements, so the grid goes through slices and vecs.

impl<T, const R: usize, const C: usize> Serialize for Mat<T, R, C>
where
  T: Serialize,
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.collect_seq(self.as_rows().iter().map(|row| row.as_slice()))
  }
}

impl<'de, T, const R: usize, const C: usize> Deserialize<'de> for Mat<T, R, C>
where
  T: Deserialize<'de>,
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
    let row_count = rows.len();
    let rows = rows
      .into_iter()
      .map(|row| {
        let len = row.len();
        <[T; C]>::try_from(row)
          .map_err(|_| <D::Error as de::Error>::invalid_length(len, &"a row of matching width"))
      })
      .collect::<Result<Vec<_>, D::Error>>()?;
    let rows = <[[T; C]; R]>::try_from(rows)
      .map_err(|_| <D::Error as de::Error>::invalid_length(row_count, &"a matching row count"))?;
    Ok(Mat::from_array(rows))
  }
}
