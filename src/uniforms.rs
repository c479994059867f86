//! The uniform sink seam.
//!
//! Shader state reaches the shading stage through named, typed writes. The
//! core never owns a uniform buffer itself: whoever owns the active shader
//! program implements [`UniformSink`] and every write takes effect for the
//! next draw call.

use cgmath::{Matrix4, Vector2, Vector3, Vector4};

/// Typed setters addressed by a stable uniform name.
pub trait UniformSink {
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_int(&mut self, name: &str, value: i32);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_vec2(&mut self, name: &str, value: Vector2<f32>);
    fn set_vec3(&mut self, name: &str, value: Vector3<f32>);
    fn set_vec4(&mut self, name: &str, value: Vector4<f32>);
    fn set_mat4(&mut self, name: &str, value: &Matrix4<f32>);
}

/// A single uniform write, detached from any particular sink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
    Mat4([[f32; 4]; 4]),
}
