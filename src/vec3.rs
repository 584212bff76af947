use crate::renderer::EPSILON;
use std::ops::{Add, Mul, Sub};

#[derive(Clone, Copy, Debug)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(&self, o: Vec3) -> f32 {
        self.x * o.x + self.y * o.y + self.z * o.z
    }

    pub fn cross(&self, o: Vec3) -> Vec3 {
        Vec3::new(
            self.y * o.z - self.z * o.y,
            self.z * o.x - self.x * o.z,
            self.x * o.y - self.y * o.x,
        )
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Zero-length vectors are returned unchanged, so degenerate normals
    /// stay the zero vector instead of dividing by zero.
    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        if len < EPSILON {
            self
        } else {
            self * (1.0 / len)
        }
    }

    pub fn rotate_around_y(&self, angle_degrees: f32) -> Vec3 {
        let angle_rad = angle_degrees * std::f32::consts::PI / 180.0;
        let cos_a = angle_rad.cos();
        let sin_a = angle_rad.sin();

        Vec3 {
            x: self.x * cos_a + self.z * sin_a,
            y: self.y,
            z: -self.x * sin_a + self.z * cos_a,
        }
    }

    pub fn rotate_around_x(&self, angle_degrees: f32) -> Vec3 {
        let angle_rad = angle_degrees * std::f32::consts::PI / 180.0;
        let cos_a = angle_rad.cos();
        let sin_a = angle_rad.sin();

        Vec3 {
            x: self.x,
            y: self.y * cos_a - self.z * sin_a,
            z: self.y * sin_a + self.z * cos_a,
        }
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_product() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert!((a.dot(b) - 32.0).abs() < 1e-6);
    }

    #[test]
    fn cross_product_right_handed() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = x.cross(y);
        assert!(z.x.abs() < 1e-6);
        assert!(z.y.abs() < 1e-6);
        assert!((z.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalized_zero_vector_stays_zero() {
        let n = Vec3::ZERO.normalized();
        assert_eq!(n.length(), 0.0);
    }

    #[test]
    fn rotate_y_quarter_turn() {
        // x' = x cos + z sin, z' = -x sin + z cos
        let v = Vec3::new(1.0, 0.0, 0.0).rotate_around_y(90.0);
        assert!(v.x.abs() < 1e-6);
        assert!((v.z + 1.0).abs() < 1e-6);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn rotate_x_quarter_turn() {
        // y' = y cos - z sin, z' = y sin + z cos
        let v = Vec3::new(0.0, 1.0, 0.0).rotate_around_x(90.0);
        assert!(v.y.abs() < 1e-6);
        assert!((v.z - 1.0).abs() < 1e-6);
        assert_eq!(v.x, 0.0);
    }
}
