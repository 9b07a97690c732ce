//! Compile-time sized dense matrices over any numeric element type.
//!
//! [`Mat`] is the plain row-major container. Square matrices get determinant and
//! inverse through the [`SquareMatrix`] trait, computed by cofactor expansion in
//! [`MinorCalculator`]. [`TriangularReducer`] offers the elimination based determinant.

#[macro_use]
mod macros;

mod error;
mod mat;
mod minor;
mod scalar;
mod triangular;

pub use error::*;
pub use mat::*;
pub use minor::*;
pub use scalar::*;
pub use triangular::*;
