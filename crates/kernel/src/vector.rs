use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::MathError;

/// Two-component vector. Used for texture coordinates.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Three-component vector: positions, directions, scale factors and Euler angles.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Homogeneous four-component vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Homogeneous point `(x, y, z, 1)`.
    pub const fn from_point(p: Vector3) -> Self {
        Self::new(p.x, p.y, p.z, 1.0)
    }

    /// Drop `w` without dividing.
    pub const fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Uniform scaling by `scalar`.
    pub fn multiply(scalar: f32, v: Self) -> Self {
        Self::new(v.x * scalar, v.y * scalar, v.z * scalar)
    }

    /// Inner product.
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean norm.
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the direction of `self`.
    ///
    /// A zero-length input yields the zero vector rather than NaN. Use
    /// [`Vector3::try_normalize`] to have that case reported instead.
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length == 0.0 {
            return Self::ZERO;
        }
        Self::new(self.x / length, self.y / length, self.z / length)
    }

    /// Like [`Vector3::normalize`], but a zero-length input is an error.
    pub fn try_normalize(self) -> Result<Self, MathError> {
        if self.length() == 0.0 {
            return Err(MathError::ZeroLength);
        }
        Ok(self.normalize())
    }

    /// Right-handed cross product.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Component-wise comparison within `eps`.
    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        (self.x - other.x).abs() <= eps
            && (self.y - other.y).abs() <= eps
            && (self.z - other.z).abs() <= eps
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3::multiply(self, rhs)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Vector3::multiply(rhs, self)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl From<glam::Vec3> for Vector3 {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for glam::Vec3 {
    fn from(v: Vector3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn add_and_subtract_componentwise() {
        let a = Vector3::new(1.0, 3.0, -5.0);
        let b = Vector3::new(4.0, -1.0, 2.0);
        assert_eq!(a + b, Vector3::new(5.0, 2.0, -3.0));
        assert_eq!(a - b, Vector3::new(-3.0, 4.0, -7.0));
    }

    #[test]
    fn scalar_multiply_both_sides() {
        let v = Vector3::new(1.0, 3.0, -5.0);
        assert_eq!(4.0 * v, Vector3::new(4.0, 12.0, -20.0));
        assert_eq!(v * 4.0, 4.0 * v);
        assert_eq!(Vector3::multiply(0.5, v), Vector3::new(0.5, 1.5, -2.5));
    }

    #[test]
    fn dot_and_length() {
        let a = Vector3::new(1.0, 3.0, -5.0);
        let b = Vector3::new(4.0, -1.0, 2.0);
        assert_eq!(a.dot(b), -9.0);
        assert!((a.length() - 35.0_f32.sqrt()).abs() < EPS);
        assert_eq!(Vector3::new(3.0, 4.0, 0.0).length(), 5.0);
    }

    #[test]
    fn normalize_yields_unit_length() {
        for v in [
            Vector3::new(2.0, -2.0, -1.0),
            Vector3::new(0.001, 0.0, 0.0),
            Vector3::new(1000.0, 250.0, -3.0),
        ] {
            assert!((v.normalize().length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
    }

    #[test]
    fn try_normalize_reports_zero_length() {
        assert_eq!(Vector3::ZERO.try_normalize(), Err(MathError::ZeroLength));
        let n = Vector3::new(0.0, 0.0, 7.0).try_normalize().unwrap();
        assert_eq!(n, Vector3::Z);
    }

    #[test]
    fn cross_is_right_handed() {
        assert_eq!(Vector3::X.cross(Vector3::Y), Vector3::Z);
        assert_eq!(Vector3::Y.cross(Vector3::Z), Vector3::X);
        assert_eq!(Vector3::Z.cross(Vector3::X), Vector3::Y);
        assert_eq!(Vector3::Y.cross(Vector3::X), -Vector3::Z);
    }

    #[test]
    fn cross_is_orthogonal_to_inputs() {
        let pairs = [
            (Vector3::new(1.0, 2.5, -3.0), Vector3::new(0.5, -4.0, 2.0)),
            (Vector3::new(-7.0, 0.1, 3.3), Vector3::new(2.0, 2.0, 2.0)),
            (Vector3::new(10.0, 0.0, 0.0), Vector3::new(10.0, 0.0, 0.0)),
        ];
        for (a, b) in pairs {
            let c = a.cross(b);
            assert!(c.dot(a).abs() < 1e-3, "{c:?} . {a:?}");
            assert!(c.dot(b).abs() < 1e-3, "{c:?} . {b:?}");
        }
    }

    #[test]
    fn distance_between_points() {
        let a = Vector3::new(1.0, 1.0, 1.0);
        let b = Vector3::new(4.0, 5.0, 1.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn glam_conversion_is_lossless() {
        let v = Vector3::new(1.5, -2.25, 8.0);
        let g: glam::Vec3 = v.into();
        assert_eq!(Vector3::from(g), v);
        assert_eq!(
            g.cross(glam::Vec3::Y),
            glam::Vec3::from(v.cross(Vector3::Y))
        );
    }

    #[test]
    fn homogeneous_point_has_unit_w() {
        let p = Vector4::from_point(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(p, Vector4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(p.xyz(), Vector3::new(1.0, 2.0, 3.0));
    }
}
