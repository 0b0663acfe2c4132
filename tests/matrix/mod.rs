use assert_approx_eq::assert_approx_eq;
use num_traits::{CheckedMul, One};

use linalg3::{M, V};
use linalg3::{Matrix, Vector};
use linalg3::linear_algebra::EPSILON;

#[test]
fn construction() {
    let m = Matrix::from_columns(V!(1, 4, 7), V!(2, 5, 8), V!(3, 6, 9));

    assert_eq!(m, M!([1, 4, 7], [2, 5, 8], [3, 6, 9]));
    assert_eq!(m.c2, V!(2, 5, 8));
    assert_eq!(m.row(0), V!(1, 2, 3));
}

#[test]
fn rotation_about_z_axis() {
    // Quarter turn, counterclockwise when looking down the z axis
    let rotation = M!([0, 1, 0], [-1, 0, 0], [0, 0, 1]);

    assert_eq!(rotation * Vector::x_axis(), Vector::y_axis());
    assert_eq!(rotation * Vector::y_axis(), -Vector::x_axis());
    assert_eq!(rotation * Vector::z_axis(), Vector::z_axis());
    assert_approx_eq!(rotation.determinant(), 1f64, EPSILON);

    let full_turn = rotation * rotation * rotation * rotation;
    assert_eq!(full_turn, Matrix::one());
    // The inverse of a rotation is its transpose
    assert_eq!(rotation * rotation.transpose(), Matrix::one());
}

#[test]
fn operations() {
    let a = M!([6, -1, 2], [9, 2, 4], [-4, 7, 3]);
    let b = M!([2, 8, 1], [12, -2, 3], [11, 7, 3]);

    assert_eq!(a + b, M!([8, 7, 3], [21, 0, 7], [7, 14, 6]));
    assert_eq!(a.multiply(&b), M!([80, 21, 39], [42, 5, 25], [117, 24, 59]));
    assert_eq!(a.multiply_by_vector(&V!(1, 0, 0)), a.c1);
    assert_eq!(a.transpose().c1, a.row(0));
    assert_approx_eq!(a.determinant(), 53f64, EPSILON);
    assert_approx_eq!(b.determinant(), 28f64, EPSILON);
    assert_approx_eq!((a * b).determinant(), 53f64 * 28f64, EPSILON);
}

#[test]
fn overflow_is_reported() {
    let big = Matrix::one() * i32::MAX;

    assert_eq!(big.checked_mul(&Matrix::one()), Some(big));
    assert_eq!(big.checked_mul(&(Matrix::one() * 2)), None);
    assert_eq!(big.checked_multiply_by_vector(&V!(0, 0, -1)), Some(V!(0, 0, -i32::MAX)));
    assert_eq!(big.checked_multiply_by_vector(&V!(0, 0, 2)), None);
}
