/// Element type usable for determinant and inverse.
///
/// Integers work as long as the results stay integral, for example inverting a
/// matrix whose determinant is one.
pub trait Scalar: Copy + num_traits::Num {}

impl<T: Copy + num_traits::Num> Scalar for T {}
