//! 3x3 rotation matrices for re-expressing vectors between reference frames.
//!
//! # Conventions
//!
//! Storage is row-major. Elementary rotations follow ERFA's passive convention:
//! the coordinate frame is rotated, not the vector, so a positive rotation of 90°
//! about Z takes `(1, 0, 0)` to `(0, -1, 0)`.
//!
//! ```text
//! Rz(psi) = | cos  sin  0 |
//!           |-sin  cos  0 |
//!           |  0    0   1 |
//! ```
//!
//! `rotate_x/y/z` pre-multiply in place (`self = R * self`), so a chain reads in
//! the order the rotations are applied to a vector.
//!
//! # Inverse
//!
//! A proper rotation is orthonormal, so its transpose is its inverse. The
//! inertial/fixed conversion relies on this to go from fixed back to inertial
//! without a general matrix inversion.
//!
//! ```
//! use celestial_core::{RotationMatrix3, Vector3};
//!
//! let mut m = RotationMatrix3::identity();
//! m.rotate_z(0.5);
//! m.rotate_x(0.3);
//!
//! let v = Vector3::new(1.0, 2.0, 3.0);
//! let back = m.transpose().multiply_vector(&m.multiply_vector(&v));
//! assert!(back.max_difference(&v) < 1e-14);
//! ```

use super::Vector3;
use std::fmt;

/// A row-major 3x3 rotation matrix. Angles are radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl Default for RotationMatrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl RotationMatrix3 {
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Builds a matrix from row-major elements without checking orthonormality.
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// `Rz(angle)` on its own.
    ///
    /// ```
    /// use celestial_core::{RotationMatrix3, Vector3};
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let v = RotationMatrix3::from_rotation_z(FRAC_PI_2).multiply_vector(&Vector3::x_axis());
    /// assert!(v.max_difference(&Vector3::new(0.0, -1.0, 0.0)) < 1e-15);
    /// ```
    pub fn from_rotation_z(angle: f64) -> Self {
        let mut m = Self::identity();
        m.rotate_z(angle);
        m
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.elements[row][col] = value;
    }

    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// `self = Rx(phi) * self`.
    pub fn rotate_x(&mut self, phi: f64) {
        self.rotate_rows(1, 2, phi);
    }

    /// `self = Ry(theta) * self`.
    ///
    /// Ry mixes rows 2 and 0 (in that order) to keep the same sign pattern as
    /// the other two axes.
    pub fn rotate_y(&mut self, theta: f64) {
        self.rotate_rows(2, 0, theta);
    }

    /// `self = Rz(psi) * self`.
    pub fn rotate_z(&mut self, psi: f64) {
        self.rotate_rows(0, 1, psi);
    }

    // Every elementary rotation is the same 2x2 mix of two rows:
    //   row_a' =  c * row_a + s * row_b
    //   row_b' = -s * row_a + c * row_b
    fn rotate_rows(&mut self, a: usize, b: usize, angle: f64) {
        let (s, c) = libm::sincos(angle);
        for col in 0..3 {
            let ra = self.elements[a][col];
            let rb = self.elements[b][col];
            self.elements[a][col] = c * ra + s * rb;
            self.elements[b][col] = -s * ra + c * rb;
        }
    }

    /// Returns `self * other`; `other` acts on a vector first.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    /// Returns `self * vector`.
    pub fn multiply_vector(&self, vector: &Vector3) -> Vector3 {
        let mut result = Vector3::zeros();
        self.multiply_vector_into(vector, &mut result);
        result
    }

    /// Writes `self * vector` into `result`.
    ///
    /// `vector` is read in full before `result` is written, so passing a copy
    /// of the output slot's previous contents is fine.
    pub fn multiply_vector_into(&self, vector: &Vector3, result: &mut Vector3) {
        let m = &self.elements;
        let (x, y, z) = (vector.x, vector.y, vector.z);
        result.x = m[0][0] * x + m[0][1] * y + m[0][2] * z;
        result.y = m[1][0] * x + m[1][1] * y + m[1][2] * z;
        result.z = m[2][0] * x + m[2][1] * y + m[2][2] * z;
    }

    pub fn transpose(&self) -> Self {
        let mut result = Self::identity();
        self.transpose_into(&mut result);
        result
    }

    /// Writes the transpose into `result`.
    pub fn transpose_into(&self, result: &mut RotationMatrix3) {
        for i in 0..3 {
            for j in 0..3 {
                result.elements[j][i] = self.elements[i][j];
            }
        }
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// `true` when the determinant is +1 and `M * M^T = I`, both within `tolerance`.
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        if (self.determinant() - 1.0).abs() > tolerance {
            return false;
        }
        self.multiply(&self.transpose())
            .max_difference(&Self::identity())
            <= tolerance
    }

    /// Largest absolute element-wise difference.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..3 {
            for j in 0..3 {
                let diff = (self.elements[i][j] - other.elements[i][j]).abs();
                max_diff = max_diff.max(diff);
            }
        }

        max_diff
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.multiply_vector(&vec)
    }
}

impl std::ops::Mul<Vector3> for &RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.multiply_vector(&vec)
    }
}

impl std::ops::Index<(usize, usize)> for RotationMatrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RotationMatrix3:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;

    fn assert_vec_close(actual: Vector3, expected: Vector3) {
        assert!(
            actual.max_difference(&expected) < 1e-15,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_rotate_z_passive_convention() {
        let m = RotationMatrix3::from_rotation_z(HALF_PI);
        assert_vec_close(
            m.multiply_vector(&Vector3::x_axis()),
            Vector3::new(0.0, -1.0, 0.0),
        );
    }

    #[test]
    fn test_rotate_x() {
        let mut m = RotationMatrix3::identity();
        m.rotate_x(HALF_PI);
        assert_vec_close(
            m.multiply_vector(&Vector3::y_axis()),
            Vector3::new(0.0, 0.0, -1.0),
        );
    }

    #[test]
    fn test_rotate_y() {
        let mut m = RotationMatrix3::identity();
        m.rotate_y(HALF_PI);
        assert_vec_close(
            m.multiply_vector(&Vector3::z_axis()),
            Vector3::new(-1.0, 0.0, 0.0),
        );
    }

    #[test]
    fn test_rotate_chain_premultiplies() {
        let mut chained = RotationMatrix3::identity();
        chained.rotate_x(0.2);
        chained.rotate_z(0.7);

        let mut rx = RotationMatrix3::identity();
        rx.rotate_x(0.2);
        let rz = RotationMatrix3::from_rotation_z(0.7);

        assert!(chained.max_difference(&(rz * rx)) < 1e-15);
    }

    #[test]
    fn test_transpose_into_matches_transpose() {
        let mut m = RotationMatrix3::identity();
        m.rotate_x(0.4);
        m.rotate_y(-1.1);
        m.rotate_z(2.3);

        let mut slot = RotationMatrix3::identity();
        m.transpose_into(&mut slot);

        assert_eq!(slot, m.transpose());
        assert_eq!(slot.get(0, 1), m.get(1, 0));
        assert_eq!(slot.get(2, 0), m.get(0, 2));
    }

    #[test]
    fn test_transpose_is_inverse() {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(1.3);
        m.rotate_x(-0.4);

        assert!(m.is_rotation_matrix(1e-14));
        assert!((m * m.transpose()).max_difference(&RotationMatrix3::identity()) < 1e-15);
    }

    #[test]
    fn test_multiply_vector_into_overwrites_slot() {
        let m = RotationMatrix3::from_array([[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let mut slot = Vector3::new(7.0, 7.0, 7.0);
        m.multiply_vector_into(&Vector3::new(1.0, 2.0, 3.0), &mut slot);
        assert_eq!(slot, Vector3::new(2.0, -1.0, 3.0));
    }

    #[test]
    fn test_is_rotation_matrix_rejects_scaling_and_shear() {
        let scaled =
            RotationMatrix3::from_array([[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let sheared =
            RotationMatrix3::from_array([[1.0, 0.1, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!scaled.is_rotation_matrix(1e-15));
        assert!(!sheared.is_rotation_matrix(1e-15));
    }

    #[test]
    fn test_operators_agree_with_methods() {
        let mut a = RotationMatrix3::identity();
        a.rotate_x(0.1);
        let b = RotationMatrix3::from_rotation_z(0.2);
        let v = Vector3::new(1.0, 2.0, 3.0);

        assert_eq!(a * b, a.multiply(&b));
        assert_eq!(&a * &b, a.multiply(&b));
        assert_eq!(a * v, a.multiply_vector(&v));
        assert_eq!(&a * v, a.multiply_vector(&v));
        assert_eq!(a[(1, 1)], a.get(1, 1));
    }

    #[test]
    fn test_display() {
        let s = format!("{}", RotationMatrix3::from_rotation_z(0.1));
        assert!(s.contains("RotationMatrix3:"));
    }
}
