//! scene-ngin
//!
//! Resource binding and scene assembly for static scenes made of primitive
//! meshes. Textures and materials are registered once under human-readable
//! tags; every frame each scene element resolves its tags, pushes its full
//! shader state through a uniform sink and issues one draw call.
//!
//! High-level modules
//! - `context`: GPU device and queue used for texture uploads
//! - `data_structures`: texture and material registries, transforms, scene elements
//! - `flow`: the setup and render phases of a scene
//! - `light`: opaque lighting configuration pushed during setup
//! - `recorder`: headless collaborator that logs every call it receives
//! - `render`: per-draw resource binding
//! - `resources`: image decoding, GPU texture upload and the mesh provider seam
//! - `still_life`: the bundled tabletop scene
//! - `uniforms`: the uniform sink seam
//!

pub mod context;
pub mod data_structures;
pub mod flow;
pub mod light;
pub mod recorder;
pub mod render;
pub mod resources;
pub mod still_life;
pub mod uniforms;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath;
pub use data_structures::{
    material::{Material, MaterialLookup, MaterialRegistry},
    scene::{Appearance, SceneDescription, SceneElement, TextureSource},
    texture::{MAX_TEXTURE_SLOTS, MISSING_SLOT, TextureDevice, TextureError, TextureRegistry},
    transform::Transform,
};
pub use flow::{FlowConfig, SceneFlow};
pub use resources::mesh::{MeshFlags, MeshKind, MeshProvider};
pub use uniforms::UniformSink;
