//! Tag-keyed texture registry.
//!
//! This module provides [`TextureRegistry`], which owns every hardware texture
//! the scene uses and hands out slot indices by tag. The registry is bounded to
//! [`MAX_TEXTURE_SLOTS`] entries because every texture is bound to the texture
//! unit equal to its slot for the whole lifetime of the scene.
//!
//! Hardware access goes through the [`TextureDevice`] trait so that the same
//! registry drives a `wgpu` device ([`crate::resources::texture::GpuTextures`])
//! or a headless [`crate::recorder::Recorder`].

use std::fmt::Debug;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::resources::{DecodedImage, ImageDecoder};

/// Number of texture units available to the shading stage.
pub const MAX_TEXTURE_SLOTS: usize = 16;

/// Sampler index forwarded to the shading stage when a tag does not resolve.
pub const MISSING_SLOT: i32 = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wrap {
    Repeat,
    MirrorRepeat,
    ClampToEdge,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Filter {
    Nearest,
    Linear,
}

/// Sampling state applied to a texture when it is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sampling {
    pub wrap_u: Wrap,
    pub wrap_v: Wrap,
    pub min_filter: Filter,
    pub mag_filter: Filter,
    pub generate_mipmaps: bool,
}

/// Every registered texture repeats on both axes, filters linearly and carries
/// a full mip chain.
pub const TEXTURE_SAMPLING: Sampling = Sampling {
    wrap_u: Wrap::Repeat,
    wrap_v: Wrap::Repeat,
    min_filter: Filter::Linear,
    mag_filter: Filter::Linear,
    generate_mipmaps: true,
};

/// Hardware side of the registry: creates, binds and releases textures.
pub trait TextureDevice {
    type Handle: Clone + Debug;

    /// Creates a texture from decoded pixels. `image.channels` is 3 or 4.
    fn upload(
        &mut self,
        label: &str,
        image: &DecodedImage,
        sampling: &Sampling,
    ) -> anyhow::Result<Self::Handle>;

    /// Makes `handle` the active texture on `unit`.
    fn bind(&mut self, unit: usize, handle: &Self::Handle);

    fn release(&mut self, handle: Self::Handle);
}

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("all {capacity} texture slots are occupied, cannot register '{tag}'")]
    CapacityExhausted { tag: String, capacity: usize },

    #[error("texture tag '{0}' is already registered")]
    DuplicateTag(String),

    #[error("could not load image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("image {path} has {channels} channels, only RGB and RGBA are supported")]
    UnsupportedChannels { path: PathBuf, channels: u8 },

    #[error("could not create texture '{tag}': {source}")]
    Upload {
        tag: String,
        #[source]
        source: anyhow::Error,
    },
}

/// A registered texture.
#[derive(Clone, Debug)]
pub struct TextureEntry<H> {
    pub tag: String,
    pub handle: H,
    pub slot: usize,
}

pub struct TextureRegistry<D: TextureDevice> {
    device: D,
    decoder: Box<dyn ImageDecoder>,
    entries: Vec<TextureEntry<D::Handle>>,
}

impl<D: TextureDevice> TextureRegistry<D> {
    pub fn new(device: D, decoder: impl ImageDecoder + 'static) -> Self {
        Self {
            device,
            decoder: Box::new(decoder),
            entries: Vec::with_capacity(MAX_TEXTURE_SLOTS),
        }
    }

    /// Decode the image at `path`, create a texture from it and register it
    /// under `tag` in the next free slot.
    ///
    /// Returns the slot on success. On failure the error is logged, the
    /// registry is left untouched and `tag` will simply never resolve.
    pub fn register(&mut self, path: impl AsRef<Path>, tag: &str) -> Result<usize, TextureError> {
        let path = path.as_ref();
        let result = self.try_register(path, tag);
        if let Err(e) = &result {
            log::error!("Texture '{}' was not registered: {}", tag, e);
        }
        result
    }

    fn try_register(&mut self, path: &Path, tag: &str) -> Result<usize, TextureError> {
        if self.entries.len() >= MAX_TEXTURE_SLOTS {
            return Err(TextureError::CapacityExhausted {
                tag: tag.to_string(),
                capacity: MAX_TEXTURE_SLOTS,
            });
        }
        if self.entries.iter().any(|entry| entry.tag == tag) {
            return Err(TextureError::DuplicateTag(tag.to_string()));
        }

        let image = self
            .decoder
            .decode(path)
            .map_err(|source| TextureError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!(
            "Loaded image {}, width: {}, height: {}, channels: {}",
            path.display(),
            image.width,
            image.height,
            image.channels
        );
        if !matches!(image.channels, 3 | 4) {
            return Err(TextureError::UnsupportedChannels {
                path: path.to_path_buf(),
                channels: image.channels,
            });
        }

        let handle = self
            .device
            .upload(tag, &image, &TEXTURE_SAMPLING)
            .map_err(|source| TextureError::Upload {
                tag: tag.to_string(),
                source,
            })?;
        // The pixel buffer is not needed once the device holds the texture.
        drop(image);

        let slot = self.entries.len();
        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            handle,
            slot,
        });
        Ok(slot)
    }

    /// Binds every texture to the unit matching its slot, in registration order.
    pub fn bind_all(&mut self) {
        for entry in &self.entries {
            self.device.bind(entry.slot, &entry.handle);
        }
    }

    /// Releases every texture and empties the registry. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        log::debug!("Releasing {} textures", self.entries.len());
        for entry in self.entries.drain(..) {
            self.device.release(entry.handle);
        }
    }

    pub fn lookup_slot(&self, tag: &str) -> Option<usize> {
        self.find(tag).map(|entry| entry.slot)
    }

    pub fn lookup_handle(&self, tag: &str) -> Option<&D::Handle> {
        self.find(tag).map(|entry| &entry.handle)
    }

    fn find(&self, tag: &str) -> Option<&TextureEntry<D::Handle>> {
        self.entries.iter().find(|entry| entry.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TextureEntry<D::Handle>] {
        &self.entries
    }

    pub fn device(&self) -> &D {
        &self.device
    }
}

impl<D: TextureDevice> Drop for TextureRegistry<D> {
    fn drop(&mut self) {
        self.teardown();
    }
}
