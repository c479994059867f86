use cgmath::Vector3;
use thiserror::Error;

/// Surface response of a scene element: diffuse and specular colour plus a
/// specular exponent.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub tag: String,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub shininess: f32,
}

impl Material {
    pub fn new(
        tag: impl Into<String>,
        diffuse: impl Into<Vector3<f32>>,
        specular: impl Into<Vector3<f32>>,
        shininess: f32,
    ) -> Self {
        Self {
            tag: tag.into(),
            diffuse: diffuse.into(),
            specular: specular.into(),
            shininess,
        }
    }
}

impl Default for Material {
    /// Plain white diffuse, no highlight.
    fn default() -> Self {
        Self::new("default", [1.0, 1.0, 1.0], [0.0, 0.0, 0.0], 1.0)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MaterialError {
    #[error("material '{tag}' has shininess {shininess}, it must be a positive number")]
    InvalidShininess { tag: String, shininess: f32 },
}

/// Outcome of a material lookup.
///
/// `Missing` means the registry has materials but none with the requested
/// tag. Callers treat it as "keep whatever material state is already bound".
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaterialLookup<'a> {
    Empty,
    Found(&'a Material),
    Missing,
}

#[derive(Clone, Debug, Default)]
pub struct MaterialRegistry {
    materials: Vec<Material>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(
        &mut self,
        tag: impl Into<String>,
        diffuse: impl Into<Vector3<f32>>,
        specular: impl Into<Vector3<f32>>,
        shininess: f32,
    ) -> Result<(), MaterialError> {
        self.insert(Material::new(tag, diffuse, specular, shininess))
    }

    /// Appends `material`. Later definitions of an existing tag are kept but
    /// can never be looked up since the first match wins.
    pub fn insert(&mut self, material: Material) -> Result<(), MaterialError> {
        if !(material.shininess.is_finite() && material.shininess > 0.0) {
            let err = MaterialError::InvalidShininess {
                tag: material.tag,
                shininess: material.shininess,
            };
            log::warn!("{}", err);
            return Err(err);
        }
        if self.materials.iter().any(|m| m.tag == material.tag) {
            log::warn!(
                "Material '{}' is already defined, the new definition is unreachable",
                material.tag
            );
        }
        self.materials.push(material);
        Ok(())
    }

    pub fn lookup(&self, tag: &str) -> MaterialLookup<'_> {
        if self.materials.is_empty() {
            return MaterialLookup::Empty;
        }
        match self.materials.iter().find(|m| m.tag == tag) {
            Some(material) => MaterialLookup::Found(material),
            None => MaterialLookup::Missing,
        }
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }
}
