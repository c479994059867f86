/// The primitive shapes a mesh provider knows how to tessellate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeshKind {
    Plane,
    Box,
    Sphere,
    HalfSphere,
    Cone,
    Cylinder,
    TaperedCylinder,
    Pyramid3,
    Pyramid4,
    Prism,
    Torus,
}

/// Which faces of a capped mesh get emitted.
///
/// Only meshes with caps (cylinders, cones, prisms) look at these; the rest
/// ignore them. The flags never affect the transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshFlags {
    pub top: bool,
    pub bottom: bool,
    pub sides: bool,
}

impl MeshFlags {
    pub const ALL: MeshFlags = MeshFlags::new(true, true, true);

    pub const fn new(top: bool, bottom: bool, sides: bool) -> Self {
        Self { top, bottom, sides }
    }
}

impl Default for MeshFlags {
    fn default() -> Self {
        Self::ALL
    }
}

/// Geometry collaborator: loads and draws tessellated primitives.
pub trait MeshProvider {
    /// Uploads the geometry for `kind`. Calling it again for a prepared kind
    /// must be harmless.
    fn prepare(&mut self, kind: MeshKind);

    /// Issues exactly one draw call with whatever geometry `prepare` built for `kind`.
    fn draw(&mut self, kind: MeshKind, flags: MeshFlags);
}
