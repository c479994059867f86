use scene_ngin::{
    Material, MaterialLookup, MaterialRegistry, data_structures::material::MaterialError,
};

#[test]
fn empty_registry_reports_empty() {
    let materials = MaterialRegistry::new();
    assert_eq!(materials.lookup("matte"), MaterialLookup::Empty);
}

#[test]
fn lookup_finds_defined_material() {
    let mut materials = MaterialRegistry::new();
    materials
        .define("matte", [0.3, 0.3, 0.4], [0.0, 0.0, 0.0], 0.05)
        .unwrap();
    materials
        .define("gold", [0.4, 0.4, 0.4], [1.0, 1.0, 1.0], 256.0)
        .unwrap();

    match materials.lookup("gold") {
        MaterialLookup::Found(m) => {
            assert_eq!(m.tag, "gold");
            assert_eq!(m.shininess, 256.0);
            assert_eq!(m.specular, [1.0, 1.0, 1.0].into());
        }
        other => panic!("expected gold, got {other:?}"),
    }
}

#[test]
fn miss_on_non_empty_registry_is_not_empty() {
    let mut materials = MaterialRegistry::new();
    materials
        .define("matte", [0.3, 0.3, 0.4], [0.0, 0.0, 0.0], 0.05)
        .unwrap();

    assert_eq!(materials.lookup("chrome"), MaterialLookup::Missing);
}

#[test]
fn first_definition_of_a_tag_wins() {
    let mut materials = MaterialRegistry::new();
    materials
        .define("glass", [0.1, 0.2, 0.3], [1.0, 1.0, 1.0], 256.0)
        .unwrap();
    materials
        .define("glass", [0.9, 0.9, 0.9], [0.0, 0.0, 0.0], 2.0)
        .unwrap();

    assert_eq!(materials.len(), 2);
    assert_eq!(
        materials.lookup("glass"),
        MaterialLookup::Found(&Material::new(
            "glass",
            [0.1, 0.2, 0.3],
            [1.0, 1.0, 1.0],
            256.0
        ))
    );
}

#[test]
fn shininess_must_be_positive() {
    let mut materials = MaterialRegistry::new();
    for shininess in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let err = materials
            .define("bad", [1.0; 3], [1.0; 3], shininess)
            .unwrap_err();
        assert!(matches!(err, MaterialError::InvalidShininess { .. }));
    }
    assert!(materials.is_empty());
    assert_eq!(materials.lookup("bad"), MaterialLookup::Empty);
}
