//! # 3x3 integer matrices
//!
//! A `Matrix` is stored as its three columns. Multiplying a matrix with a vector is taking a linear
//! combination of those columns, and the product of two matrices is built up column by column from
//! such matrix-vector products.
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{CheckedAdd, CheckedMul, CheckedNeg, CheckedSub, One, Zero};

use crate::linear_algebra::{Component, Wide};
use crate::linear_algebra::vector::Vector;

/// Linear transformation of three dimensional space, represented by the images of the three unit
/// vectors.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Matrix {
    /// First column, the image of `Vector::x_axis()`.
    pub c1: Vector,
    /// Second column, the image of `Vector::y_axis()`.
    pub c2: Vector,
    /// Third column, the image of `Vector::z_axis()`.
    pub c3: Vector,
}

impl Matrix {
    /// Create a matrix from its columns.
    pub const fn from_columns(c1: Vector, c2: Vector, c3: Vector) -> Self {
        Self { c1, c2, c3 }
    }

    /// Create a matrix from its rows.
    pub const fn from_rows(r1: Vector, r2: Vector, r3: Vector) -> Self {
        Self::from_columns(r1, r2, r3).transpose()
    }

    /// The three columns, in order.
    pub const fn columns(&self) -> [Vector; 3] {
        [self.c1, self.c2, self.c3]
    }

    /// Row `i` of this matrix, counting from `0`.
    ///
    /// # Panics
    ///
    /// If `i` is not smaller than `3`.
    pub fn row(&self, i: usize) -> Vector {
        debug_assert!(i < 3);

        Vector::new(self.c1[i], self.c2[i], self.c3[i])
    }

    /// The three rows, in order.
    pub fn rows(&self) -> [Vector; 3] {
        [self.row(0), self.row(1), self.row(2)]
    }

    /// Apply the transformation represented by this matrix to a vector.
    ///
    /// The columns are scaled by the respective components of `vector` and summed. The columns of
    /// `self` are only read.
    ///
    /// # Panics
    ///
    /// On `i32` overflow in debug builds; release builds wrap. See `checked_multiply_by_vector`.
    pub fn multiply_by_vector(&self, vector: &Vector) -> Vector {
        self.columns().into_iter()
            .zip(vector.to_array())
            .map(|(column, factor)| column.scale(factor))
            .sum()
    }

    /// Apply the transformation represented by this matrix to a vector.
    ///
    /// # Return value
    ///
    /// `None` if an intermediate scaled column or a partial sum overflows.
    pub fn checked_multiply_by_vector(&self, vector: &Vector) -> Option<Vector> {
        self.columns().into_iter()
            .zip(vector.to_array())
            .try_fold(Vector::zero(), |total, (column, factor)| {
                total.checked_add(&column.checked_scale(factor)?)
            })
    }

    /// Matrix product `self * other`.
    ///
    /// Column `j` of the product is `self` applied to column `j` of `other`.
    ///
    /// # Panics
    ///
    /// On `i32` overflow in debug builds; release builds wrap. See `CheckedMul::checked_mul`.
    pub fn multiply(&self, other: &Self) -> Self {
        Self::from_columns(
            self.multiply_by_vector(&other.c1),
            self.multiply_by_vector(&other.c2),
            self.multiply_by_vector(&other.c3),
        )
    }

    /// Swap rows and columns: row `i` of `self` becomes column `i` of the result.
    pub const fn transpose(&self) -> Self {
        let Self { c1, c2, c3 } = *self;

        Self::from_columns(
            Vector::new(c1.x, c2.x, c3.x),
            Vector::new(c1.y, c2.y, c3.y),
            Vector::new(c1.z, c2.z, c3.z),
        )
    }

    /// Determinant of this matrix, see `exact_determinant`.
    pub fn determinant(&self) -> f64 {
        self.exact_determinant() as f64
    }

    /// Exact determinant of this matrix.
    ///
    /// Cofactor expansion with the first components of the three columns as coefficients. The
    /// value is zero if and only if the columns are linearly dependent.
    pub fn exact_determinant(&self) -> Wide {
        let [c1, c2, c3] = self.columns().map(|c| c.to_array().map(Wide::from));

        let i = c1[0] * (c2[1] * c3[2] - c3[1] * c2[2]);
        let j = c2[0] * (c1[1] * c3[2] - c3[1] * c1[2]);
        let k = c3[0] * (c1[1] * c2[2] - c2[1] * c1[2]);

        i - j + k
    }

    fn map_columns(&self, f: impl Fn(Vector) -> Vector) -> Self {
        Self::from_columns(f(self.c1), f(self.c2), f(self.c3))
    }

    fn zip_columns(&self, other: &Self, f: impl Fn(Vector, Vector) -> Vector) -> Self {
        Self::from_columns(f(self.c1, other.c1), f(self.c2, other.c2), f(self.c3, other.c3))
    }

    fn try_zip_columns(
        &self,
        other: &Self,
        f: impl Fn(&Vector, &Vector) -> Option<Vector>,
    ) -> Option<Self> {
        Some(Self::from_columns(
            f(&self.c1, &other.c1)?,
            f(&self.c2, &other.c2)?,
            f(&self.c3, &other.c3)?,
        ))
    }
}

/// Columnwise sum.
///
/// # Panics
///
/// On `i32` overflow in debug builds; release builds wrap. See `CheckedAdd`.
impl Add for Matrix {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_columns(&rhs, Add::add)
    }
}

impl Sub for Matrix {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_columns(&rhs, Sub::sub)
    }
}

impl Neg for Matrix {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map_columns(Neg::neg)
    }
}

impl Mul for Matrix {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<Vector> for Matrix {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Self::Output {
        self.multiply_by_vector(&rhs)
    }
}

impl Mul<Component> for Matrix {
    type Output = Self;

    fn mul(self, rhs: Component) -> Self::Output {
        self.map_columns(|column| column.scale(rhs))
    }
}

impl Zero for Matrix {
    fn zero() -> Self {
        Self::from_columns(Vector::zero(), Vector::zero(), Vector::zero())
    }

    fn is_zero(&self) -> bool {
        self.columns().iter().all(Vector::is_zero)
    }
}

impl One for Matrix {
    fn one() -> Self {
        Self::from_columns(Vector::x_axis(), Vector::y_axis(), Vector::z_axis())
    }
}

impl CheckedAdd for Matrix {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        self.try_zip_columns(v, Vector::checked_add)
    }
}

impl CheckedSub for Matrix {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        self.try_zip_columns(v, Vector::checked_sub)
    }
}

impl CheckedNeg for Matrix {
    fn checked_neg(&self) -> Option<Self> {
        Some(Self::from_columns(
            self.c1.checked_neg()?,
            self.c2.checked_neg()?,
            self.c3.checked_neg()?,
        ))
    }
}

impl CheckedMul for Matrix {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        Some(Self::from_columns(
            self.checked_multiply_by_vector(&v.c1)?,
            self.checked_multiply_by_vector(&v.c2)?,
            self.checked_multiply_by_vector(&v.c3)?,
        ))
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
