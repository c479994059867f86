use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::GenericImageView;

/**
 * This module contains the collaborators that turn external files into GPU resources
 * (image decoding, GPU texture upload) and the mesh provider seam.
 */
pub mod mesh;
pub mod texture;

/// Raw pixels as they come out of an image decoder.
///
/// `pixels` holds `width * height * channels` bytes, rows bottom-up when the
/// decoder flipped the image on load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}

impl DecodedImage {
    pub fn byte_len(&self) -> usize {
        self.width as usize * self.height as usize * self.channels as usize
    }
}

/// Converts an image file into a raw pixel buffer.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> anyhow::Result<DecodedImage>;
}

/// Decodes images from disk using the `image` crate.
///
/// Relative paths are resolved against `root`. Images are flipped vertically
/// on load by default so that the first row lines up with texture coordinate
/// `v = 0`.
#[derive(Clone, Debug)]
pub struct FileDecoder {
    root: PathBuf,
    flip_vertically: bool,
}

impl FileDecoder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            flip_vertically: true,
        }
    }

    pub fn flip_vertically(mut self, flip: bool) -> Self {
        self.flip_vertically = flip;
        self
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Default for FileDecoder {
    fn default() -> Self {
        Self::new(Path::new("./").join("assets"))
    }
}

impl ImageDecoder for FileDecoder {
    fn decode(&self, path: &Path) -> anyhow::Result<DecodedImage> {
        let full_path = self.resolve(path);
        let img = image::open(&full_path)
            .with_context(|| format!("could not decode image {}", full_path.display()))?;
        let img = if self.flip_vertically { img.flipv() } else { img };

        let (width, height) = img.dimensions();
        let channels = img.color().channel_count();
        // Keep the source channel count so callers can reject what they cannot upload.
        let pixels = match channels {
            3 => img.into_rgb8().into_raw(),
            4 => img.into_rgba8().into_raw(),
            2 => img.into_luma_alpha8().into_raw(),
            _ => img.into_luma8().into_raw(),
        };

        Ok(DecodedImage {
            pixels,
            width,
            height,
            channels,
        })
    }
}
