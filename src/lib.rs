//! # Exact linear algebra in three dimensions
//!
//! Vectors with three integer components and 3x3 integer matrices stored as three column vectors.
//! Quantities that are real valued in general (`magnitude`, `dot`, `determinant`) are computed
//! exactly in a wide integer type and only converted to `f64` at the very end; their
//! `magnitude_squared`, `exact_dot` and `exact_determinant` forms return that exact value.
//!
//! # Overflow
//!
//! Results that are vectors or matrices again have `i32` components and follow the integer
//! arithmetic of `i32`: they panic on overflow in debug builds and wrap in release builds. Each of
//! these operations has a `checked_*` counterpart that returns `None` instead.
#![warn(missing_docs)]

pub use linear_algebra::matrix::Matrix;
pub use linear_algebra::vector::Vector;

pub mod linear_algebra;

/// Create a `Vector` from three values that can be cast to a component.
///
/// Helper macro, mostly for tests.
#[macro_export]
macro_rules! V {
    ($x:expr, $y:expr, $z:expr $(,)?) => {
        $crate::Vector::new($x as i32, $y as i32, $z as i32)
    };
}

/// Create a `Matrix` from three columns, each written as a list of three values.
///
/// Helper macro, mostly for tests.
#[macro_export]
macro_rules! M {
    ([$($c1:expr),+ $(,)?], [$($c2:expr),+ $(,)?], [$($c3:expr),+ $(,)?] $(,)?) => {
        $crate::Matrix::from_columns(
            $crate::V!($($c1),+),
            $crate::V!($($c2),+),
            $crate::V!($($c3),+),
        )
    };
}

#[cfg(test)]
mod tests;
