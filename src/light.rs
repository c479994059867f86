//! Scene lighting configuration.
//!
//! Lighting is opaque to the core: these values are pushed into the uniform
//! sink once during setup and the shading stage decides what to do with them.

use cgmath::{Deg, Vector3};

use crate::uniforms::UniformSink;

/// The shading stage declares a fixed array of point lights.
pub const MAX_POINT_LIGHTS: usize = 5;

pub const USE_LIGHTING: &str = "bUseLighting";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vector3<f32>,
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vector3<f32>,
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
}

impl PointLight {
    pub fn new(
        position: impl Into<Vector3<f32>>,
        ambient: impl Into<Vector3<f32>>,
        diffuse: impl Into<Vector3<f32>>,
        specular: impl Into<Vector3<f32>>,
    ) -> Self {
        Self {
            position: position.into(),
            ambient: ambient.into(),
            diffuse: diffuse.into(),
            specular: specular.into(),
        }
    }
}

/// A spot light attached to the viewer. Position and direction come from the
/// camera, so only colour, attenuation and cone angles live here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
    pub cut_off: Deg<f32>,
    pub outer_cut_off: Deg<f32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Lighting {
    pub enabled: bool,
    pub directional: Option<DirectionalLight>,
    pub points: Vec<PointLight>,
    pub spot: Option<SpotLight>,
}

impl Default for Lighting {
    /// Lighting disabled: the shading stage falls back to unlit colours.
    fn default() -> Self {
        Self {
            enabled: false,
            directional: None,
            points: Vec::new(),
            spot: None,
        }
    }
}

impl Lighting {
    pub fn push<S: UniformSink + ?Sized>(&self, sink: &mut S) {
        sink.set_bool(USE_LIGHTING, self.enabled);
        if !self.enabled {
            return;
        }

        if let Some(light) = &self.directional {
            sink.set_vec3("directionalLight.direction", light.direction);
            sink.set_vec3("directionalLight.ambient", light.ambient);
            sink.set_vec3("directionalLight.diffuse", light.diffuse);
            sink.set_vec3("directionalLight.specular", light.specular);
            sink.set_bool("directionalLight.bActive", true);
        }

        if self.points.len() > MAX_POINT_LIGHTS {
            log::warn!(
                "{} point lights configured, only the first {} are used",
                self.points.len(),
                MAX_POINT_LIGHTS
            );
        }
        for (i, light) in self.points.iter().take(MAX_POINT_LIGHTS).enumerate() {
            sink.set_vec3(&format!("pointLights[{i}].position"), light.position);
            sink.set_vec3(&format!("pointLights[{i}].ambient"), light.ambient);
            sink.set_vec3(&format!("pointLights[{i}].diffuse"), light.diffuse);
            sink.set_vec3(&format!("pointLights[{i}].specular"), light.specular);
            sink.set_bool(&format!("pointLights[{i}].bActive"), true);
        }

        if let Some(light) = &self.spot {
            sink.set_vec3("spotLight.ambient", light.ambient);
            sink.set_vec3("spotLight.diffuse", light.diffuse);
            sink.set_vec3("spotLight.specular", light.specular);
            sink.set_float("spotLight.constant", light.constant);
            sink.set_float("spotLight.linear", light.linear);
            sink.set_float("spotLight.quadratic", light.quadratic);
            // The shader compares against cosines, not angles.
            sink.set_float("spotLight.cutOff", cgmath::Angle::cos(light.cut_off));
            sink.set_float("spotLight.outerCutOff", cgmath::Angle::cos(light.outer_cut_off));
            sink.set_bool("spotLight.bActive", true);
        }
    }
}
