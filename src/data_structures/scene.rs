//! Declarative scene data.
//!
//! A scene is a flat, ordered list of [`SceneElement`]s. Elements refer to
//! textures and materials by tag only, so a description can be written before
//! anything is loaded and replayed unchanged every frame.

use std::path::PathBuf;

use cgmath::{Vector2, Vector3, Vector4};

use crate::{
    data_structures::{material::Material, transform::Transform},
    light::Lighting,
    resources::mesh::{MeshFlags, MeshKind},
};

/// How the surface of an element is coloured.
#[derive(Clone, Debug, PartialEq)]
pub enum Appearance {
    /// Sample the texture registered under this tag.
    Texture(String),
    /// Flat RGBA colour, texturing disabled.
    Color(Vector4<f32>),
}

impl Default for Appearance {
    fn default() -> Self {
        Appearance::Color(Vector4::new(1.0, 1.0, 1.0, 1.0))
    }
}

/// One mesh instance of the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneElement {
    pub name: String,
    pub mesh: MeshKind,
    pub flags: MeshFlags,
    pub transform: Transform,
    pub appearance: Appearance,
    pub material: String,
    pub uv_scale: Vector2<f32>,
}

impl SceneElement {
    pub fn new(name: impl Into<String>, mesh: MeshKind) -> Self {
        Self {
            name: name.into(),
            mesh,
            flags: MeshFlags::default(),
            transform: Transform::new(),
            appearance: Appearance::default(),
            material: String::new(),
            uv_scale: Vector2::new(1.0, 1.0),
        }
    }

    pub fn scaled(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.scale = Vector3::new(x, y, z);
        self
    }

    /// Rotation in degrees about the X, Y and Z axes.
    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.rotation = Vector3::new(x, y, z);
        self
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.position = Vector3::new(x, y, z);
        self
    }

    pub fn textured(mut self, tag: impl Into<String>) -> Self {
        self.appearance = Appearance::Texture(tag.into());
        self
    }

    pub fn colored(mut self, r: f32, g: f32, b: f32, a: f32) -> Self {
        self.appearance = Appearance::Color(Vector4::new(r, g, b, a));
        self
    }

    pub fn material(mut self, tag: impl Into<String>) -> Self {
        self.material = tag.into();
        self
    }

    pub fn flags(mut self, flags: MeshFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn uv_scale(mut self, u: f32, v: f32) -> Self {
        self.uv_scale = Vector2::new(u, v);
        self
    }
}

/// An image file to register under `tag`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureSource {
    pub tag: String,
    pub path: PathBuf,
}

impl TextureSource {
    pub fn new(path: impl Into<PathBuf>, tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            path: path.into(),
        }
    }
}

/// Everything the setup phase needs to build a scene.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneDescription {
    pub textures: Vec<TextureSource>,
    pub materials: Vec<Material>,
    pub lighting: Lighting,
    pub elements: Vec<SceneElement>,
}

impl SceneDescription {
    /// Distinct mesh kinds in order of first use.
    pub fn mesh_kinds(&self) -> Vec<MeshKind> {
        let mut kinds = Vec::new();
        for element in &self.elements {
            if !kinds.contains(&element.mesh) {
                kinds.push(element.mesh);
            }
        }
        kinds
    }
}
