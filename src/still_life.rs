//! The tabletop still life: a tray with a sugar container, a gold cup, a
//! coffee pot, a bottle, a cork cone, a lidded container and a glass sphere,
//! in front of a wall on a table.
//!
//! Texture paths are relative to the decoder root.

use cgmath::{Deg, Vector3};

use crate::{
    data_structures::{
        material::Material,
        scene::{SceneDescription, SceneElement, TextureSource},
    },
    light::{DirectionalLight, Lighting, PointLight, SpotLight},
    resources::mesh::{MeshFlags, MeshKind},
};

/// Cylinder without its top cap.
const OPEN_TOP: MeshFlags = MeshFlags::new(false, true, true);
/// Tapered cylinder with only its side wall.
const SIDES_ONLY: MeshFlags = MeshFlags::new(false, false, true);

pub fn textures() -> Vec<TextureSource> {
    [
        ("textures/plane.jpg", "planeTexture"),
        ("textures/red.jpg", "redTexture"),
        ("textures/circular-gold.jpg", "midTexture"),
        ("textures/seamless-gold.jpg", "topTexture"),
        ("textures/cork.jpg", "corkTexture"),
        ("textures/gold.jpg", "cupTexture"),
        ("textures/stone.jpg", "bottleTexture"),
        ("textures/copper.jpg", "knobTexture"),
        ("textures/white.jpg", "whiteTexture"),
        ("textures/white2.jpg", "lidTexture"),
        ("textures/grip.jpg", "gripTexture"),
        ("textures/pot1.jpg", "pot1"),
        ("textures/pot2.jpg", "pot2"),
        ("textures/wall.jpg", "wall"),
    ]
    .into_iter()
    .map(|(path, tag)| TextureSource::new(path, tag))
    .collect()
}

pub fn materials() -> Vec<Material> {
    vec![
        Material::new("shinier", [0.4, 0.4, 0.4], [1.0, 1.0, 1.0], 128.0),
        Material::new("matte", [0.3, 0.3, 0.4], [0.0, 0.0, 0.0], 0.05),
        Material::new("gold", [0.4, 0.4, 0.4], [1.0, 1.0, 1.0], 256.0),
        Material::new("glass", [0.1, 0.2, 0.3], [1.0, 1.0, 1.0], 256.0),
    ]
}

pub fn lighting() -> Lighting {
    let ambient = [0.05, 0.05, 0.05];
    Lighting {
        enabled: true,
        directional: Some(DirectionalLight {
            direction: Vector3::new(-0.05, -0.3, -0.1),
            ambient: ambient.into(),
            diffuse: Vector3::new(0.6, 0.6, 0.6),
            specular: Vector3::new(0.0, 0.0, 0.0),
        }),
        points: vec![
            PointLight::new([-4.0, 8.0, 0.0], ambient, [0.3, 0.3, 0.3], [0.1, 0.1, 0.1]),
            PointLight::new([4.0, 8.0, 0.0], ambient, [0.3, 0.3, 0.3], [0.1, 0.1, 0.1]),
            PointLight::new([3.8, 5.5, 4.0], ambient, [0.2, 0.2, 0.2], [0.8, 0.8, 0.8]),
            PointLight::new([3.8, 3.5, 4.0], ambient, [0.2, 0.2, 0.2], [0.8, 0.8, 0.8]),
            PointLight::new([-3.2, 6.0, -4.0], ambient, [0.9, 0.9, 0.9], [0.1, 0.1, 0.1]),
        ],
        spot: Some(SpotLight {
            ambient: Vector3::new(0.8, 0.8, 0.8),
            diffuse: Vector3::new(1.0, 1.0, 1.0),
            specular: Vector3::new(0.7, 0.7, 0.7),
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
            cut_off: Deg(42.5),
            outer_cut_off: Deg(48.0),
        }),
    }
}

pub fn elements() -> Vec<SceneElement> {
    vec![
        SceneElement::new("tray", MeshKind::Box)
            .scaled(9.5, 0.5, 5.5)
            .at(-1.0, -0.9, 6.0)
            .textured("planeTexture")
            .material("matte"),
        // Sugar container
        SceneElement::new("sugar container bottom", MeshKind::Box)
            .scaled(1.5, 1.7, 1.5)
            .rotated(0.0, 45.0, 0.0)
            .at(2.0, 0.2, 5.0)
            .textured("redTexture")
            .material("shinier"),
        SceneElement::new("sugar container middle", MeshKind::Pyramid4)
            .scaled(1.5, 1.5, 1.5)
            .rotated(0.0, 45.0, 0.0)
            .at(2.0, 1.8, 5.0)
            .textured("midTexture")
            .material("shinier"),
        SceneElement::new("sugar container top", MeshKind::Box)
            .scaled(1.0, 0.8, 1.0)
            .rotated(0.0, 45.0, 0.0)
            .at(2.0, 1.9, 5.0)
            .textured("topTexture")
            .material("shinier"),
        SceneElement::new("sugar container cork", MeshKind::Box)
            .scaled(0.7, 0.4, 0.7)
            .rotated(0.0, 45.0, 0.0)
            .at(2.0, 2.3, 5.0)
            .textured("corkTexture")
            .material("matte"),
        SceneElement::new("gold cup", MeshKind::Cylinder)
            .scaled(0.7, 1.2, 0.7)
            .rotated(0.0, 45.0, 0.0)
            .at(2.5, -0.6, 7.4)
            .textured("cupTexture")
            .material("gold")
            .flags(OPEN_TOP),
        // Coffee pot
        SceneElement::new("coffee pot base", MeshKind::Cylinder)
            .scaled(0.9, 1.0, 0.9)
            .at(-0.9, -0.7, 5.3)
            .textured("pot2")
            .material("shinier")
            .flags(OPEN_TOP),
        SceneElement::new("coffee pot middle", MeshKind::TaperedCylinder)
            .scaled(0.9, 2.8, 0.9)
            .at(-0.9, 0.2, 5.3)
            .textured("pot2")
            .material("shinier")
            .flags(SIDES_ONLY),
        SceneElement::new("coffee pot top", MeshKind::TaperedCylinder)
            .scaled(0.9, 1.0, 0.9)
            .rotated(180.0, 0.0, 0.0)
            .at(-0.9, 3.7, 5.3)
            .textured("pot1")
            .material("matte")
            .flags(SIDES_ONLY),
        SceneElement::new("coffee pot handle short", MeshKind::Box)
            .scaled(0.4, 0.5, 0.5)
            .rotated(-78.0, 0.0, 0.0)
            .at(-0.9, 2.3, 4.5)
            .textured("gripTexture")
            .material("matte"),
        SceneElement::new("coffee pot handle long", MeshKind::Box)
            .scaled(0.4, 0.5, 1.6)
            .rotated(-78.0, 0.0, 0.0)
            .at(-0.9, 2.0, 4.1)
            .textured("gripTexture")
            .material("matte"),
        // Bottle
        SceneElement::new("bottle body", MeshKind::Cylinder)
            .scaled(0.8, 2.5, 0.8)
            .at(-2.9, -0.7, 5.3)
            .textured("bottleTexture")
            .material("shinier"),
        SceneElement::new("bottle shoulder", MeshKind::TaperedCylinder)
            .scaled(0.8, 0.5, 0.8)
            .at(-2.9, 1.8, 5.3)
            .textured("bottleTexture")
            .material("shinier"),
        SceneElement::new("bottle neck", MeshKind::Cylinder)
            .scaled(0.4, 0.5, 0.4)
            .at(-2.9, 2.3, 5.3)
            .textured("bottleTexture")
            .material("shinier")
            .flags(OPEN_TOP),
        // Cone object
        SceneElement::new("cone", MeshKind::Cone)
            .scaled(0.8, 2.5, 0.8)
            .at(-4.6, 0.0, 5.3)
            .textured("corkTexture")
            .material("matte"),
        SceneElement::new("cone base", MeshKind::HalfSphere)
            .scaled(0.8, 0.8, 0.8)
            .rotated(180.0, 0.0, 0.0)
            .at(-4.6, -0.02, 5.3)
            .textured("corkTexture")
            .material("matte"),
        // Container
        SceneElement::new("container base", MeshKind::Box)
            .scaled(3.8, 0.7, 1.5)
            .at(-1.5, -0.5, 7.5)
            .textured("whiteTexture")
            .material("shinier"),
        SceneElement::new("container base left edge", MeshKind::Cylinder)
            .scaled(0.77, 0.7, 0.77)
            .at(-3.2, -0.85, 7.5)
            .textured("whiteTexture")
            .material("shinier"),
        SceneElement::new("container base right edge", MeshKind::Cylinder)
            .scaled(0.77, 0.7, 0.77)
            .at(0.2, -0.85, 7.5)
            .textured("whiteTexture")
            .material("shinier"),
        SceneElement::new("container lid", MeshKind::Box)
            .scaled(3.8, 0.3, 1.58)
            .at(-1.5, 0.0, 7.5)
            .textured("lidTexture")
            .material("shinier"),
        SceneElement::new("container lid left edge", MeshKind::Cylinder)
            .scaled(0.8, 0.3, 0.8)
            .at(-3.2, -0.15, 7.5)
            .textured("lidTexture")
            .material("shinier"),
        SceneElement::new("container lid right edge", MeshKind::Cylinder)
            .scaled(0.8, 0.3, 0.8)
            .at(0.2, -0.15, 7.5)
            .textured("lidTexture")
            .material("shinier"),
        SceneElement::new("container knob", MeshKind::Cylinder)
            .scaled(0.3, 0.2, 0.3)
            .at(-1.5, 0.15, 7.5)
            .textured("knobTexture")
            .material("shinier"),
        SceneElement::new("wall", MeshKind::Plane)
            .scaled(11.0, 0.5, 7.0)
            .rotated(90.0, 0.0, 0.0)
            .at(-1.0, 5.45, -0.97)
            .textured("wall")
            .material("matte"),
        SceneElement::new("table", MeshKind::Box)
            .scaled(22.0, 0.5, 15.0)
            .at(-1.0, -1.4, 6.0)
            .textured("planeTexture")
            .material("shinier"),
        // Translucent, and drawn last without any sorting.
        SceneElement::new("glass sphere", MeshKind::Sphere)
            .scaled(0.8, 0.8, 0.8)
            .at(-5.1, 0.0, 7.3)
            .colored(0.1, 0.2, 0.3, 0.8)
            .material("glass"),
    ]
}

pub fn description() -> SceneDescription {
    SceneDescription {
        textures: textures(),
        materials: materials(),
        lighting: lighting(),
        elements: elements(),
    }
}
