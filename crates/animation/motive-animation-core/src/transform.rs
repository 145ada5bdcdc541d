//! Transform math: vectors, per-frame transforms and the captured rest pose.

use serde::{Deserialize, Serialize};

/// 3-component vector used for position, Euler rotation (radians) and scale.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Component-wise product.
    #[inline]
    pub fn mul_elem(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    #[inline]
    pub fn scaled(self, k: f32) -> Vec3 {
        Vec3::new(self.x * k, self.y * k, self.z * k)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(v: [f32; 3]) -> Self {
        Vec3::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;

    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

/// Position, rotation (Euler XYZ, radians) and scale applied to a model root for one frame.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn new(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Offset the position by `delta`.
    #[inline]
    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.position += delta;
        self
    }

    /// Offset the Euler rotation by `delta` radians.
    #[inline]
    pub fn rotate(&mut self, delta: Vec3) -> &mut Self {
        self.rotation += delta;
        self
    }

    /// Multiply the scale component-wise by `factor`.
    #[inline]
    pub fn scale_by(&mut self, factor: Vec3) -> &mut Self {
        self.scale = self.scale.mul_elem(factor);
        self
    }

    /// Uniform variant of [`Transform::scale_by`].
    #[inline]
    pub fn scale_uniform(&mut self, factor: f32) -> &mut Self {
        self.scale_by(Vec3::new(factor, factor, factor))
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }
}

/// Snapshot of a model's transform taken when the model becomes active.
///
/// Every motion offsets from this baseline. The snapshot has no mutating API:
/// a new model means a new `RestPose`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct RestPose(Transform);

impl RestPose {
    pub fn capture(current: &Transform) -> Self {
        Self(*current)
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.0
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.0.position
    }

    #[inline]
    pub fn rotation(&self) -> Vec3 {
        self.0.rotation
    }

    #[inline]
    pub fn scale(&self) -> Vec3 {
        self.0.scale
    }
}

impl Default for RestPose {
    fn default() -> Self {
        Self(Transform::IDENTITY)
    }
}

impl From<Transform> for RestPose {
    fn from(t: Transform) -> Self {
        Self(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_by_is_component_wise() {
        let mut t = Transform::new(Vec3::ZERO, Vec3::ZERO, Vec3::new(2.0, 3.0, 4.0));
        t.scale_by(Vec3::new(0.5, 2.0, 1.0));
        assert_eq!(t.scale, Vec3::new(1.0, 6.0, 4.0));
    }

    #[test]
    fn rest_pose_serializes_as_plain_transform() {
        let rest = RestPose::capture(&Transform::IDENTITY);
        let a = serde_json::to_value(rest).unwrap();
        let b = serde_json::to_value(Transform::IDENTITY).unwrap();
        assert_eq!(a, b);
    }
}
