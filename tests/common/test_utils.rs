#![allow(dead_code)]

use std::path::{Path, PathBuf};

use anyhow::bail;
use scene_ngin::{
    SceneFlow, TextureRegistry,
    cgmath::{Matrix4, Vector4},
    recorder::Recorder,
    resources::{DecodedImage, ImageDecoder},
};

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Decodes nothing from disk: the file name decides the outcome.
///
/// - `missing*` fails to decode
/// - `gray*` is a single-channel image
/// - `rgba*` has four channels
/// - `wide*` is a 4096x4 RGB image
/// - anything else is a 2x2 RGB image
pub(crate) struct StubDecoder;

impl ImageDecoder for StubDecoder {
    fn decode(&self, path: &Path) -> anyhow::Result<DecodedImage> {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        if name.starts_with("missing") {
            bail!("no such file: {}", path.display());
        }
        let channels: u8 = if name.starts_with("gray") {
            1
        } else if name.starts_with("rgba") {
            4
        } else {
            3
        };
        let (width, height) = if name.starts_with("wide") { (4096, 4) } else { (2, 2) };
        Ok(DecodedImage {
            pixels: vec![128; width as usize * height as usize * channels as usize],
            width,
            height,
            channels,
        })
    }
}

pub(crate) fn recording_registry(recorder: &Recorder) -> TextureRegistry<Recorder> {
    TextureRegistry::new(recorder.clone(), StubDecoder)
}

pub(crate) type RecordingFlow = SceneFlow<Recorder, Recorder, Recorder>;

/// A flow whose collaborators all log into the returned recorder.
pub(crate) fn recording_flow() -> (RecordingFlow, Recorder) {
    init_logging();
    let recorder = Recorder::new();
    let flow = SceneFlow::new(
        recording_registry(&recorder),
        recorder.clone(),
        recorder.clone(),
    );
    (flow, recorder)
}

/// Fresh directory under the system temp dir for files a test writes.
pub(crate) fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("scene-ngin-{}-{}", test, std::process::id()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

pub(crate) fn transform_point(m: &Matrix4<f32>, p: [f32; 3]) -> [f32; 3] {
    let v = *m * Vector4::new(p[0], p[1], p[2], 1.0);
    [v.x, v.y, v.z]
}

pub(crate) fn assert_close(actual: [f32; 3], expected: [f32; 3]) {
    for i in 0..3 {
        assert!(
            (actual[i] - expected[i]).abs() < 1e-5,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }
}
