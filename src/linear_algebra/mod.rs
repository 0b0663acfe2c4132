//! # Linear algebra primitives
//!
//! A three dimensional `Vector` and a `Matrix` made up of three such vectors as its columns.

pub mod matrix;
pub mod vector;

/// Type of a single vector or matrix entry.
pub type Component = i32;

/// Accumulator for products of components that are not stored as components again.
///
/// A determinant is a sum of six products of three components. With `Component = i32`, each
/// product is at most `2^93` in absolute value, so this type can never overflow.
pub type Wide = i128;

/// Suggested tolerance when comparing real valued results, such as magnitudes and determinants.
///
/// The library itself never compares with a tolerance.
pub const EPSILON: f64 = 1e-8;
