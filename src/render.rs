//! Per-draw resource binding.
//!
//! This module defines [`ResourceBinder`], which turns tags into shader state.
//! Before every draw call the scene pushes the full state of the element
//! (transform, appearance, material and UV scale) through the binder; nothing
//! is cached or diffed between elements.
//!
//! # Lookup misses
//!
//! - an unknown texture tag still enables texturing and forwards
//!   [`MISSING_SLOT`] as the sampler index
//! - an unknown material tag follows [`MaterialMissPolicy`]; by default the
//!   previously pushed material stays in effect
//! - an empty material registry never writes material uniforms

use cgmath::{Matrix4, Vector2, Vector4};

use crate::{
    data_structures::{
        material::{Material, MaterialLookup, MaterialRegistry},
        scene::Appearance,
        texture::{MISSING_SLOT, TextureDevice, TextureRegistry},
    },
    uniforms::UniformSink,
};

/// Uniform names the shading stage reads per draw.
pub mod names {
    pub const MODEL: &str = "model";
    pub const OBJECT_COLOR: &str = "objectColor";
    pub const OBJECT_TEXTURE: &str = "objectTexture";
    pub const USE_TEXTURE: &str = "bUseTexture";
    pub const UV_SCALE: &str = "UVscale";
    pub const MATERIAL_DIFFUSE: &str = "material.diffuseColor";
    pub const MATERIAL_SPECULAR: &str = "material.specularColor";
    pub const MATERIAL_SHININESS: &str = "material.shininess";
}

/// What to push when a material tag does not resolve in a non-empty registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MaterialMissPolicy {
    /// Write nothing; the last pushed material stays in effect.
    #[default]
    LeaveUnchanged,
    /// Push [`Material::default`].
    ResetToDefault,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinderConfig {
    pub material_miss: MaterialMissPolicy,
}

/// Resolves tags against the registries and writes the result into a sink.
pub struct ResourceBinder<'a, D, S>
where
    D: TextureDevice,
    S: UniformSink + ?Sized,
{
    textures: &'a TextureRegistry<D>,
    materials: &'a MaterialRegistry,
    sink: &'a mut S,
    config: BinderConfig,
}

impl<'a, D, S> ResourceBinder<'a, D, S>
where
    D: TextureDevice,
    S: UniformSink + ?Sized,
{
    pub fn new(
        textures: &'a TextureRegistry<D>,
        materials: &'a MaterialRegistry,
        sink: &'a mut S,
        config: BinderConfig,
    ) -> Self {
        Self {
            textures,
            materials,
            sink,
            config,
        }
    }

    /// Flat colour for the next draw; disables texturing.
    pub fn apply_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.sink.set_bool(names::USE_TEXTURE, false);
        self.sink.set_vec4(names::OBJECT_COLOR, Vector4::new(r, g, b, a));
    }

    /// Enables texturing and points the sampler at the slot of `tag`.
    pub fn apply_texture(&mut self, tag: &str) {
        self.sink.set_bool(names::USE_TEXTURE, true);
        let slot = match self.textures.lookup_slot(tag) {
            Some(slot) => slot as i32,
            None => {
                log::trace!("Texture '{}' is not registered", tag);
                MISSING_SLOT
            }
        };
        self.sink.set_int(names::OBJECT_TEXTURE, slot);
    }

    pub fn apply_appearance(&mut self, appearance: &Appearance) {
        match appearance {
            Appearance::Texture(tag) => self.apply_texture(tag),
            Appearance::Color(c) => self.apply_color(c.x, c.y, c.z, c.w),
        }
    }

    pub fn apply_material(&mut self, tag: &str) {
        match self.materials.lookup(tag) {
            MaterialLookup::Found(material) => self.push_material(material),
            MaterialLookup::Empty => (),
            MaterialLookup::Missing => match self.config.material_miss {
                MaterialMissPolicy::LeaveUnchanged => {
                    log::trace!("Material '{}' is not defined, keeping the bound one", tag);
                }
                MaterialMissPolicy::ResetToDefault => {
                    log::trace!("Material '{}' is not defined, resetting", tag);
                    self.push_material(&Material::default());
                }
            },
        }
    }

    fn push_material(&mut self, material: &Material) {
        self.sink.set_vec3(names::MATERIAL_DIFFUSE, material.diffuse);
        self.sink.set_vec3(names::MATERIAL_SPECULAR, material.specular);
        self.sink.set_float(names::MATERIAL_SHININESS, material.shininess);
    }

    /// Texture tiling factor used by the shading stage.
    pub fn apply_uv_scale(&mut self, u: f32, v: f32) {
        self.sink.set_vec2(names::UV_SCALE, Vector2::new(u, v));
    }

    pub fn apply_transform(&mut self, model: &Matrix4<f32>) {
        self.sink.set_mat4(names::MODEL, model);
    }
}
