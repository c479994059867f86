//! Model matrix composition.
//!
//! Every scene element carries an absolute [`Transform`]: there is no parent
//! to inherit from, so the model matrix is built from the element's own scale,
//! rotation and position alone.

use cgmath::{Deg, Matrix4, Vector3};

/// Scale, rotation in degrees about X, Y and Z, and position of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: Vector3<f32>,
    pub rotation: Vector3<f32>,
    pub position: Vector3<f32>,
}

impl Transform {
    /// Identity transformation (no move, rotate, or scale).
    pub fn new() -> Self {
        Self {
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            position: Vector3::new(0.0, 0.0, 0.0),
        }
    }

    pub fn to_matrix(&self) -> Matrix4<f32> {
        compose(self.scale, self.rotation, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vector3<f32>> for Transform {
    fn from(position: Vector3<f32>) -> Self {
        Transform {
            position,
            ..Default::default()
        }
    }
}

/// Builds `T * Rz * Ry * Rx * S`.
///
/// Scale is applied in object space first, then the rotations about X, Y and
/// Z in that order, and the translation last. Changing the order moves
/// objects, so it is part of the contract.
pub fn compose(
    scale: Vector3<f32>,
    rotation_degrees: Vector3<f32>,
    position: Vector3<f32>,
) -> Matrix4<f32> {
    Matrix4::from_translation(position)
        * Matrix4::from_angle_z(Deg(rotation_degrees.z))
        * Matrix4::from_angle_y(Deg(rotation_degrees.y))
        * Matrix4::from_angle_x(Deg(rotation_degrees.x))
        * Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z)
}
