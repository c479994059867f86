//! Scene setup and the per-frame render sequence.
//!
//! A [`SceneFlow`] owns the registries, the uniform sink and the mesh provider
//! and moves through two phases:
//!
//! 1. `setup()` runs once: register textures, define materials, push lighting,
//!    prepare every mesh kind the scene uses
//! 2. `render()` runs every frame: rebind textures, then for each element in
//!    scene order push its full shader state and issue one draw call
//!
//! Registries are only mutated during setup, so repeated renders produce the
//! exact same sequence of uniform writes and draw calls.
//!
//! Elements are drawn in scene order. There is no sorting of translucent
//! elements; whatever the depth test does with them is what you see.

use anyhow::bail;

use crate::{
    data_structures::{
        material::MaterialRegistry,
        scene::{SceneDescription, SceneElement},
        texture::{TextureDevice, TextureRegistry},
    },
    render::{BinderConfig, ResourceBinder},
    resources::mesh::{MeshKind, MeshProvider},
    uniforms::UniformSink,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Unprepared,
    Ready,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlowConfig {
    pub binder: BinderConfig,
}

/// What setup managed to load. Failed entries are never retried; their tags
/// simply do not resolve at render time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SetupReport {
    pub textures_loaded: usize,
    pub texture_failures: Vec<(String, String)>,
    pub materials_defined: usize,
    pub material_failures: Vec<(String, String)>,
    pub meshes_prepared: Vec<MeshKind>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub draws: usize,
}

pub struct SceneFlow<D, S, M>
where
    D: TextureDevice,
    S: UniformSink,
    M: MeshProvider,
{
    textures: TextureRegistry<D>,
    materials: MaterialRegistry,
    sink: S,
    meshes: M,
    elements: Vec<SceneElement>,
    config: FlowConfig,
    phase: Phase,
}

impl<D, S, M> SceneFlow<D, S, M>
where
    D: TextureDevice,
    S: UniformSink,
    M: MeshProvider,
{
    pub fn new(textures: TextureRegistry<D>, sink: S, meshes: M) -> Self {
        Self::with_config(textures, sink, meshes, FlowConfig::default())
    }

    pub fn with_config(
        textures: TextureRegistry<D>,
        sink: S,
        meshes: M,
        config: FlowConfig,
    ) -> Self {
        Self {
            textures,
            materials: MaterialRegistry::new(),
            sink,
            meshes,
            elements: Vec::new(),
            config,
            phase: Phase::Unprepared,
        }
    }

    /// Load everything `description` refers to and take ownership of its elements.
    ///
    /// Individual texture and material failures are logged and reported but do
    /// not abort setup. Running setup twice is an error.
    pub fn setup(&mut self, description: &SceneDescription) -> anyhow::Result<SetupReport> {
        if self.phase == Phase::Ready {
            bail!("scene setup has already run");
        }
        let mut report = SetupReport::default();

        for source in &description.textures {
            match self.textures.register(&source.path, &source.tag) {
                Ok(_) => report.textures_loaded += 1,
                Err(e) => report
                    .texture_failures
                    .push((source.tag.clone(), e.to_string())),
            }
        }
        self.textures.bind_all();

        for material in &description.materials {
            match self.materials.insert(material.clone()) {
                Ok(()) => report.materials_defined += 1,
                Err(e) => report
                    .material_failures
                    .push((material.tag.clone(), e.to_string())),
            }
        }

        description.lighting.push(&mut self.sink);

        for kind in description.mesh_kinds() {
            self.meshes.prepare(kind);
            report.meshes_prepared.push(kind);
        }

        self.elements = description.elements.clone();
        self.phase = Phase::Ready;

        log::info!(
            "Scene ready: {} textures ({} failed), {} materials, {} elements",
            report.textures_loaded,
            report.texture_failures.len(),
            report.materials_defined,
            self.elements.len()
        );
        Ok(report)
    }

    /// Draw every element once, in scene order.
    pub fn render(&mut self) -> anyhow::Result<FrameStats> {
        if self.phase != Phase::Ready {
            bail!("render called before scene setup");
        }

        // The active program may have changed since the last frame.
        self.textures.bind_all();

        let mut binder = ResourceBinder::new(
            &self.textures,
            &self.materials,
            &mut self.sink,
            self.config.binder,
        );
        for element in &self.elements {
            binder.apply_transform(&element.transform.to_matrix());
            binder.apply_appearance(&element.appearance);
            binder.apply_material(&element.material);
            binder.apply_uv_scale(element.uv_scale.x, element.uv_scale.y);
            self.meshes.draw(element.mesh, element.flags);
        }

        Ok(FrameStats {
            draws: self.elements.len(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn textures(&self) -> &TextureRegistry<D> {
        &self.textures
    }

    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    pub fn elements(&self) -> &[SceneElement] {
        &self.elements
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn meshes(&self) -> &M {
        &self.meshes
    }
}
