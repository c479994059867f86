use scene_ngin::{
    FlowConfig, Material, MeshFlags, MeshKind, SceneDescription, SceneElement, SceneFlow,
    TextureSource,
    flow::Phase,
    light::{Lighting, MAX_POINT_LIGHTS, PointLight, USE_LIGHTING},
    recorder::{Command, Recorder},
    render::{BinderConfig, MaterialMissPolicy, names},
    still_life,
    uniforms::UniformValue,
};

use crate::common::test_utils::{recording_flow, recording_registry};

mod common;

fn small_scene() -> SceneDescription {
    SceneDescription {
        textures: vec![
            TextureSource::new("textures/plane.jpg", "planeTexture"),
            TextureSource::new("textures/red.jpg", "redTexture"),
        ],
        materials: vec![
            Material::new("shinier", [0.4, 0.4, 0.4], [1.0, 1.0, 1.0], 128.0),
            Material::new("matte", [0.3, 0.3, 0.4], [0.0, 0.0, 0.0], 0.05),
        ],
        lighting: Lighting::default(),
        elements: vec![
            SceneElement::new("table", MeshKind::Box)
                .scaled(22.0, 0.5, 15.0)
                .textured("planeTexture")
                .material("shinier"),
            SceneElement::new("cup", MeshKind::Cylinder)
                .at(2.5, -0.6, 7.4)
                .textured("redTexture")
                .material("matte")
                .flags(MeshFlags::new(false, true, true))
                .uv_scale(2.0, 1.0),
            SceneElement::new("crate", MeshKind::Box)
                .colored(0.5, 0.5, 0.5, 1.0)
                .material("matte"),
        ],
    }
}

fn uniform(name: &str, value: UniformValue) -> Command {
    Command::Uniform {
        name: name.to_string(),
        value,
    }
}

#[test]
fn render_before_setup_is_an_error() {
    let (mut flow, recorder) = recording_flow();

    assert!(flow.render().is_err());
    assert_eq!(flow.phase(), Phase::Unprepared);
    assert!(recorder.is_empty());
}

#[test]
fn setup_runs_only_once() {
    let (mut flow, recorder) = recording_flow();
    flow.setup(&small_scene()).unwrap();
    let logged = recorder.len();

    assert!(flow.setup(&small_scene()).is_err());
    assert_eq!(recorder.len(), logged);
    assert_eq!(flow.phase(), Phase::Ready);
}

#[test]
fn setup_loads_binds_lights_and_prepares_in_order() {
    let (mut flow, recorder) = recording_flow();

    let report = flow.setup(&small_scene()).unwrap();

    assert_eq!(report.textures_loaded, 2);
    assert_eq!(report.materials_defined, 2);
    assert_eq!(report.meshes_prepared, vec![MeshKind::Box, MeshKind::Cylinder]);
    assert!(report.texture_failures.is_empty());

    let commands = recorder.commands();
    assert!(matches!(
        commands.as_slice(),
        [
            Command::Upload { handle: 1, .. },
            Command::Upload { handle: 2, .. },
            Command::BindTexture { unit: 0, handle: 1 },
            Command::BindTexture { unit: 1, handle: 2 },
            Command::Uniform { .. },
            Command::Prepare(MeshKind::Box),
            Command::Prepare(MeshKind::Cylinder),
        ]
    ));
    assert_eq!(
        recorder.last_uniform(USE_LIGHTING),
        Some(UniformValue::Bool(false))
    );
    assert_eq!(flow.elements().len(), 3);
    assert_eq!(flow.materials().len(), 2);
}

#[test]
fn each_draw_is_preceded_by_the_full_element_state() {
    let (mut flow, recorder) = recording_flow();
    let scene = small_scene();
    flow.setup(&scene).unwrap();
    recorder.clear();

    let stats = flow.render().unwrap();
    assert_eq!(stats.draws, 3);

    let cup = &scene.elements[1];
    let commands = recorder.commands();
    // Two rebinds, then three uniform blocks each closed by a draw.
    assert_eq!(
        &commands[..2],
        &[
            Command::BindTexture { unit: 0, handle: 1 },
            Command::BindTexture { unit: 1, handle: 2 },
        ]
    );
    let draws: Vec<usize> = commands
        .iter()
        .enumerate()
        .filter(|(_, c)| matches!(c, Command::Draw { .. }))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(draws.len(), 3);

    let cup_block = &commands[draws[0] + 1..=draws[1]];
    assert_eq!(
        cup_block,
        &[
            uniform(
                names::MODEL,
                UniformValue::Mat4(cup.transform.to_matrix().into())
            ),
            uniform(names::USE_TEXTURE, UniformValue::Bool(true)),
            uniform(names::OBJECT_TEXTURE, UniformValue::Int(1)),
            uniform(names::MATERIAL_DIFFUSE, UniformValue::Vec3([0.3, 0.3, 0.4])),
            uniform(names::MATERIAL_SPECULAR, UniformValue::Vec3([0.0, 0.0, 0.0])),
            uniform(names::MATERIAL_SHININESS, UniformValue::Float(0.05)),
            uniform(names::UV_SCALE, UniformValue::Vec2([2.0, 1.0])),
            Command::Draw {
                kind: MeshKind::Cylinder,
                flags: MeshFlags::new(false, true, true),
            },
        ]
    );

    let crate_block = &commands[draws[1] + 1..=draws[2]];
    assert!(crate_block.contains(&uniform(names::USE_TEXTURE, UniformValue::Bool(false))));
    assert!(crate_block.contains(&uniform(
        names::OBJECT_COLOR,
        UniformValue::Vec4([0.5, 0.5, 0.5, 1.0])
    )));
}

#[test]
fn rendering_twice_replays_identically() {
    let (mut flow, recorder) = recording_flow();
    flow.setup(&small_scene()).unwrap();
    recorder.clear();

    flow.render().unwrap();
    let first = recorder.commands();
    let first_bytes = recorder.to_bytes();
    recorder.clear();
    flow.render().unwrap();

    assert_eq!(recorder.commands(), first);
    assert_eq!(recorder.to_bytes(), first_bytes);
}

#[test]
fn failed_texture_does_not_abort_setup() {
    let (mut flow, recorder) = recording_flow();
    let mut scene = small_scene();
    scene.textures[0] = TextureSource::new("textures/missing.jpg", "planeTexture");

    let report = flow.setup(&scene).unwrap();
    assert_eq!(report.textures_loaded, 1);
    assert_eq!(report.texture_failures.len(), 1);
    assert_eq!(report.texture_failures[0].0, "planeTexture");
    // The surviving texture takes the first slot.
    assert_eq!(flow.textures().lookup_slot("redTexture"), Some(0));

    recorder.clear();
    flow.render().unwrap();
    let commands = recorder.commands();
    let table_texture = commands
        .iter()
        .find_map(|c| match c {
            Command::Uniform {
                name,
                value: UniformValue::Int(slot),
            } if name == names::OBJECT_TEXTURE => Some(*slot),
            _ => None,
        })
        .unwrap();
    assert_eq!(table_texture, -1);
    assert_eq!(recorder.draws().len(), 3);
}

#[test]
fn invalid_material_is_reported_and_skipped() {
    let (mut flow, _recorder) = recording_flow();
    let mut scene = small_scene();
    scene.materials[1].shininess = 0.0;

    let report = flow.setup(&scene).unwrap();

    assert_eq!(report.materials_defined, 1);
    assert_eq!(report.material_failures.len(), 1);
    assert_eq!(report.material_failures[0].0, "matte");
    assert_eq!(flow.materials().len(), 1);
}

#[test]
fn reset_policy_reaches_the_binder() {
    let recorder = Recorder::new();
    let config = FlowConfig {
        binder: BinderConfig {
            material_miss: MaterialMissPolicy::ResetToDefault,
        },
    };
    let mut flow = SceneFlow::with_config(
        recording_registry(&recorder),
        recorder.clone(),
        recorder.clone(),
        config,
    );
    let mut scene = small_scene();
    scene.elements.truncate(1);
    scene.elements[0].material = "chrome".to_string();
    flow.setup(&scene).unwrap();
    recorder.clear();

    flow.render().unwrap();

    assert_eq!(
        recorder.last_uniform(names::MATERIAL_SHININESS),
        Some(UniformValue::Float(1.0))
    );
}

#[test]
fn extra_point_lights_are_dropped() {
    let (mut flow, recorder) = recording_flow();
    let mut scene = small_scene();
    scene.lighting = Lighting {
        enabled: true,
        points: (0..7)
            .map(|i| PointLight::new([i as f32, 0.0, 0.0], [0.0; 3], [1.0; 3], [1.0; 3]))
            .collect(),
        ..Lighting::default()
    };

    flow.setup(&scene).unwrap();

    let last = format!("pointLights[{}].position", MAX_POINT_LIGHTS - 1);
    assert_eq!(
        recorder.last_uniform(&last),
        Some(UniformValue::Vec3([4.0, 0.0, 0.0]))
    );
    assert_eq!(recorder.last_uniform("pointLights[5].position"), None);
    assert_eq!(recorder.last_uniform("directionalLight.bActive"), None);
}

#[test]
fn still_life_sets_up_and_renders() {
    let (mut flow, recorder) = recording_flow();
    let scene = still_life::description();

    let report = flow.setup(&scene).unwrap();

    assert_eq!(report.textures_loaded, 14);
    assert_eq!(report.materials_defined, 4);
    assert_eq!(
        report.meshes_prepared,
        vec![
            MeshKind::Box,
            MeshKind::Pyramid4,
            MeshKind::Cylinder,
            MeshKind::TaperedCylinder,
            MeshKind::Cone,
            MeshKind::HalfSphere,
            MeshKind::Plane,
            MeshKind::Sphere,
        ]
    );
    assert_eq!(
        recorder.last_uniform(USE_LIGHTING),
        Some(UniformValue::Bool(true))
    );
    assert_eq!(
        recorder.last_uniform("pointLights[4].bActive"),
        Some(UniformValue::Bool(true))
    );
    let Some(UniformValue::Float(cut_off)) = recorder.last_uniform("spotLight.cutOff") else {
        panic!("spot light cut-off was not pushed");
    };
    assert!((cut_off - 42.5f32.to_radians().cos()).abs() < 1e-6);
    assert_eq!(flow.textures().lookup_slot("wall"), Some(13));

    recorder.clear();
    let stats = flow.render().unwrap();

    assert_eq!(stats.draws, 26);
    let draws = recorder.draws();
    assert_eq!(draws.len(), 26);
    assert_eq!(draws.first(), Some(&(MeshKind::Box, MeshFlags::ALL)));
    assert_eq!(draws.last(), Some(&(MeshKind::Sphere, MeshFlags::ALL)));
    // The glass sphere is the only flat-coloured element and is drawn last.
    assert_eq!(
        recorder.last_uniform(names::OBJECT_COLOR),
        Some(UniformValue::Vec4([0.1, 0.2, 0.3, 0.8]))
    );
    assert_eq!(
        recorder.last_uniform(names::USE_TEXTURE),
        Some(UniformValue::Bool(false))
    );
    assert_eq!(
        recorder.last_uniform(names::MATERIAL_DIFFUSE),
        Some(UniformValue::Vec3([0.1, 0.2, 0.3]))
    );
    // No element of the still life misses its texture.
    assert!(!recorder.commands().contains(&uniform(
        names::OBJECT_TEXTURE,
        UniformValue::Int(-1)
    )));
}
