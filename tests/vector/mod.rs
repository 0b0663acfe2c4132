use assert_approx_eq::assert_approx_eq;
use num_traits::{CheckedAdd, Zero};

use linalg3::V;
use linalg3::Vector;
use linalg3::linear_algebra::EPSILON;

#[test]
fn construction() {
    let v = Vector::new(4, -1, 2);

    assert_eq!((v.x, v.y, v.z), (4, -1, 2));
    assert_eq!(v, V!(4, -1, 2));
    assert_eq!(v, Vector::from([4, -1, 2]));
    assert_eq!(v.to_array(), [4, -1, 2]);
}

#[test]
fn public_components_can_be_modified() {
    let mut v = Vector::zero();
    v.z = 3;
    assert_eq!(v, Vector::z_axis().scale(3));
}

#[test]
fn operations() {
    let (a, b) = (V!(7, -4, 0), V!(2, 7, -1));

    assert_approx_eq!(a.magnitude(), 65f64.sqrt(), EPSILON);
    assert_approx_eq!(a.dot(&b), -14f64, EPSILON);
    assert_eq!(a + b, V!(9, 3, -1));
    assert_eq!(a - b, V!(5, -11, 1));
    assert_eq!(a.scale(2), V!(14, -8, 0));
    assert_eq!(a.cross(&b), V!(4, 7, 57));
}

#[test]
fn inputs_are_not_consumed() {
    let a = V!(1, 2, 3);
    let b = a + a;
    let c = a.cross(&b);

    assert_eq!(a, V!(1, 2, 3));
    assert_eq!(b, V!(2, 4, 6));
    assert!(c.is_zero());
}

#[test]
fn overflow_is_reported() {
    let v = V!(i32::MAX, 0, 0);

    assert_eq!(v.checked_add(&Vector::x_axis()), None);
    assert_eq!(v.checked_scale(2), None);
    assert_eq!(v.checked_cross(&V!(0, 2, 0)), None);
    assert_eq!(v.checked_cross(&V!(0, 1, 0)), Some(V!(0, 0, i32::MAX)));
    // Exact quantities never overflow
    assert_eq!(v.exact_dot(&v), i128::from(i32::MAX) * i128::from(i32::MAX));
}
