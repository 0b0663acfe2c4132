//! # Three dimensional integer vectors
//!
//! A `Vector` is a plain value: it is `Copy`, compares by its components and every operation
//! returns a new vector. The only mutating operations are the `*Assign` operator
//! implementations and `IndexMut`.
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{CheckedAdd, CheckedNeg, CheckedSub, Zero};

use crate::linear_algebra::{Component, Wide};

/// A point or direction in three dimensional space, or a column of a [`Matrix`].
///
/// [`Matrix`]: crate::linear_algebra::matrix::Matrix
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Vector {
    #[allow(missing_docs)]
    pub x: Component,
    #[allow(missing_docs)]
    pub y: Component,
    #[allow(missing_docs)]
    pub z: Component,
}

impl Vector {
    /// Create a vector from its three components.
    pub const fn new(x: Component, y: Component, z: Component) -> Self {
        Self { x, y, z }
    }

    /// Unit vector along the first axis.
    pub const fn x_axis() -> Self {
        Self::new(1, 0, 0)
    }

    /// Unit vector along the second axis.
    pub const fn y_axis() -> Self {
        Self::new(0, 1, 0)
    }

    /// Unit vector along the third axis.
    pub const fn z_axis() -> Self {
        Self::new(0, 0, 1)
    }

    /// The components in `[x, y, z]` order.
    pub const fn to_array(self) -> [Component; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean length of this vector.
    ///
    /// The sum of squares is computed exactly before the square root is taken. The zero vector
    /// has magnitude `0`, every other vector has a strictly positive magnitude.
    pub fn magnitude(&self) -> f64 {
        (self.magnitude_squared() as f64).sqrt()
    }

    /// Exact square of the Euclidean length.
    pub fn magnitude_squared(&self) -> Wide {
        self.exact_dot(self)
    }

    /// Multiply each component by `scalar`.
    ///
    /// Use `*=` to scale a vector in place instead.
    ///
    /// # Panics
    ///
    /// On `i32` overflow in debug builds; release builds wrap. See `checked_scale`.
    pub fn scale(self, scalar: Component) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Multiply each component by `scalar`.
    ///
    /// # Return value
    ///
    /// `None` if any of the components overflows.
    pub fn checked_scale(self, scalar: Component) -> Option<Self> {
        Some(Self::new(
            self.x.checked_mul(scalar)?,
            self.y.checked_mul(scalar)?,
            self.z.checked_mul(scalar)?,
        ))
    }

    /// Inner product with another vector.
    ///
    /// Computed exactly, see `exact_dot`, and converted to a float afterwards.
    pub fn dot(&self, other: &Self) -> f64 {
        self.exact_dot(other) as f64
    }

    /// Exact inner product with another vector.
    pub fn exact_dot(&self, other: &Self) -> Wide {
        Wide::from(self.x) * Wide::from(other.x)
            + Wide::from(self.y) * Wide::from(other.y)
            + Wide::from(self.z) * Wide::from(other.z)
    }

    /// Cross product of `self` with `other`, in that order.
    ///
    /// The result is orthogonal to both arguments. It is zero when the two vectors are parallel,
    /// which includes either of them being zero. Swapping the arguments negates the result.
    ///
    /// # Panics
    ///
    /// On `i32` overflow in debug builds; release builds wrap. See `checked_cross`.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            -(self.x * other.z - self.z * other.x),
            self.x * other.y - self.y * other.x,
        )
    }

    /// Cross product of `self` with `other`.
    ///
    /// # Return value
    ///
    /// `None` if any of the products, differences or the negation overflows.
    pub fn checked_cross(&self, other: &Self) -> Option<Self> {
        // a * d - b * c
        let minor = |a: Component, d: Component, b: Component, c: Component| {
            a.checked_mul(d)?.checked_sub(b.checked_mul(c)?)
        };

        Some(Self::new(
            minor(self.y, other.z, self.z, other.y)?,
            minor(self.x, other.z, self.z, other.x)?.checked_neg()?,
            minor(self.x, other.y, self.y, other.x)?,
        ))
    }

    /// Apply a fallible operation to each pair of components.
    fn try_zip_with<F>(&self, other: &Self, f: F) -> Option<Self>
    where
        F: Fn(Component, Component) -> Option<Component>,
    {
        Some(Self::new(f(self.x, other.x)?, f(self.y, other.y)?, f(self.z, other.z)?))
    }
}

impl From<[Component; 3]> for Vector {
    fn from([x, y, z]: [Component; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector> for [Component; 3] {
    fn from(vector: Vector) -> Self {
        vector.to_array()
    }
}

impl Index<usize> for Vector {
    type Output = Component;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds: a vector has 3 components but the index is {}", index),
        }
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index out of bounds: a vector has 3 components but the index is {}", index),
        }
    }
}

/// Componentwise sum.
///
/// # Panics
///
/// On `i32` overflow in debug builds; release builds wrap. See `CheckedAdd`.
impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<Component> for Vector {
    type Output = Self;

    fn mul(self, rhs: Component) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Vector> for Component {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Self::Output {
        rhs.scale(self)
    }
}

impl MulAssign<Component> for Vector {
    fn mul_assign(&mut self, rhs: Component) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl Sum for Vector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl Zero for Vector {
    fn zero() -> Self {
        Self::new(0, 0, 0)
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl CheckedAdd for Vector {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        self.try_zip_with(v, Component::checked_add)
    }
}

impl CheckedSub for Vector {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        self.try_zip_with(v, Component::checked_sub)
    }
}

impl CheckedNeg for Vector {
    fn checked_neg(&self) -> Option<Self> {
        Some(Self::new(self.x.checked_neg()?, self.y.checked_neg()?, self.z.checked_neg()?))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
