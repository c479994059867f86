//! Engine data structures: textures, materials, transforms and scene elements.
//!
//! - `texture` holds the tag-keyed texture registry and the texture device seam
//! - `material` holds the tag-keyed material registry
//! - `transform` composes per-element model matrices
//! - `scene` describes the flat, ordered list of scene elements

pub mod material;
pub mod scene;
pub mod texture;
pub mod transform;
