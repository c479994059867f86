//! `wgpu` implementation of the texture device.
//!
//! Every registered texture becomes an `Rgba8UnormSrgb` texture with its own
//! sampler and a mip chain built on the CPU. The sixteen texture units are
//! exposed to shaders as one bind group: unit `n` is a texture at binding
//! `2n` and its sampler at binding `2n + 1`. Units nothing was bound to hold a
//! 1x1 white texture so the bind group is always complete.

use anyhow::Context as _;
use image::{RgbaImage, imageops::FilterType};

use crate::{
    context::Context,
    data_structures::texture::{Filter, MAX_TEXTURE_SLOTS, Sampling, TEXTURE_SAMPLING, TextureDevice, Wrap},
    resources::DecodedImage,
};

/// A GPU texture with a view and sampler.
#[derive(Clone, Debug)]
pub struct GpuTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl GpuTexture {
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

    pub fn mip_level_count(&self) -> u32 {
        self.texture.mip_level_count()
    }

    /// Uploads `levels` (largest first) into a new texture.
    fn from_levels(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        levels: &[RgbaImage],
        label: Option<&str>,
        sampling: &Sampling,
    ) -> anyhow::Result<Self> {
        let base = levels.first().context("no image data to upload")?;
        let size = wgpu::Extent3d {
            width: base.width(),
            height: base.height(),
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: levels.len() as u32,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (mip_level, level) in levels.iter().enumerate() {
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    aspect: wgpu::TextureAspect::All,
                    texture: &texture,
                    mip_level: mip_level as u32,
                    origin: wgpu::Origin3d::ZERO,
                },
                level.as_raw(),
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * level.width()),
                    rows_per_image: Some(level.height()),
                },
                wgpu::Extent3d {
                    width: level.width(),
                    height: level.height(),
                    depth_or_array_layers: 1,
                },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = create_sampler(device, sampling);
        Ok(Self {
            texture,
            view,
            sampler,
        })
    }
}

pub fn address_mode(wrap: Wrap) -> wgpu::AddressMode {
    match wrap {
        Wrap::Repeat => wgpu::AddressMode::Repeat,
        Wrap::MirrorRepeat => wgpu::AddressMode::MirrorRepeat,
        Wrap::ClampToEdge => wgpu::AddressMode::ClampToEdge,
    }
}

pub fn filter_mode(filter: Filter) -> wgpu::FilterMode {
    match filter {
        Filter::Nearest => wgpu::FilterMode::Nearest,
        Filter::Linear => wgpu::FilterMode::Linear,
    }
}

/// Sampler for `sampling`.
///
/// `mipmap_filter` is left at wgpu's default (nearest level), so minified
/// textures read the generated mip chain instead of only the base level.
pub fn create_sampler(device: &wgpu::Device, sampling: &Sampling) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        address_mode_u: address_mode(sampling.wrap_u),
        address_mode_v: address_mode(sampling.wrap_v),
        address_mode_w: address_mode(sampling.wrap_u),
        mag_filter: filter_mode(sampling.mag_filter),
        min_filter: filter_mode(sampling.min_filter),
        ..Default::default()
    })
}

/// Rejects images wgpu cannot create a 2D texture for.
pub fn check_dimensions(width: u32, height: u32, max_dimension: u32) -> anyhow::Result<()> {
    if width == 0 || height == 0 {
        anyhow::bail!("image is empty ({}x{})", width, height);
    }
    if width > max_dimension || height > max_dimension {
        anyhow::bail!(
            "image is {}x{}, the device allows at most {} texels per side",
            width,
            height,
            max_dimension
        );
    }
    Ok(())
}

/// Number of levels in a full mip chain for a `width` x `height` image.
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    32 - width.max(height).max(1).leading_zeros()
}

/// Expands `image` to RGBA and, if requested, downsamples it into a full mip chain.
pub fn build_mip_chain(image: &DecodedImage, generate: bool) -> anyhow::Result<Vec<RgbaImage>> {
    let base = match image.channels {
        // wgpu has no 24-bit texture format, so RGB gets an opaque alpha channel.
        3 => image::RgbImage::from_raw(image.width, image.height, image.pixels.clone())
            .map(|rgb| image::DynamicImage::ImageRgb8(rgb).into_rgba8()),
        4 => RgbaImage::from_raw(image.width, image.height, image.pixels.clone()),
        n => anyhow::bail!("cannot upload an image with {} channels", n),
    }
    .with_context(|| {
        format!(
            "pixel buffer of {} bytes does not match {}x{}",
            image.pixels.len(),
            image.width,
            image.height
        )
    })?;

    let count = if generate {
        mip_level_count(base.width(), base.height())
    } else {
        1
    };
    let mut levels = Vec::with_capacity(count as usize);
    for level in 1..count {
        let width = (base.width() >> level).max(1);
        let height = (base.height() >> level).max(1);
        levels.push(image::imageops::resize(&base, width, height, FilterType::Triangle));
    }
    levels.insert(0, base);
    Ok(levels)
}

/// Texture device backed by a `wgpu` device and queue.
pub struct GpuTextures {
    device: wgpu::Device,
    queue: wgpu::Queue,
    fallback: GpuTexture,
    units: [Option<GpuTexture>; MAX_TEXTURE_SLOTS],
}

impl GpuTextures {
    pub fn new(ctx: &Context) -> anyhow::Result<Self> {
        let device = ctx.device.clone();
        let queue = ctx.queue.clone();
        let white = DecodedImage {
            pixels: vec![255; 4],
            width: 1,
            height: 1,
            channels: 4,
        };
        let levels = build_mip_chain(&white, false)?;
        let fallback = GpuTexture::from_levels(
            &device,
            &queue,
            &levels,
            Some("fallback texture"),
            &TEXTURE_SAMPLING,
        )?;
        Ok(Self {
            device,
            queue,
            fallback,
            units: std::array::from_fn(|_| None),
        })
    }

    /// Texture currently bound to `unit`, if any.
    pub fn bound(&self, unit: usize) -> Option<&GpuTexture> {
        self.units.get(unit).and_then(Option::as_ref)
    }

    pub fn bind_group_layout(&self) -> wgpu::BindGroupLayout {
        let entries: Vec<wgpu::BindGroupLayoutEntry> = (0..MAX_TEXTURE_SLOTS as u32)
            .flat_map(|unit| {
                [
                    wgpu::BindGroupLayoutEntry {
                        binding: 2 * unit,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            multisampled: false,
                            view_dimension: wgpu::TextureViewDimension::D2,
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 2 * unit + 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ]
            })
            .collect();
        self.device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &entries,
                label: Some("scene texture units layout"),
            })
    }

    /// Bind group holding the textures currently bound to each unit.
    pub fn bind_group(&self, layout: &wgpu::BindGroupLayout) -> wgpu::BindGroup {
        let entries: Vec<wgpu::BindGroupEntry> = self
            .units
            .iter()
            .enumerate()
            .flat_map(|(unit, bound)| {
                let texture = bound.as_ref().unwrap_or(&self.fallback);
                [
                    wgpu::BindGroupEntry {
                        binding: 2 * unit as u32,
                        resource: wgpu::BindingResource::TextureView(&texture.view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2 * unit as u32 + 1,
                        resource: wgpu::BindingResource::Sampler(&texture.sampler),
                    },
                ]
            })
            .collect();
        self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &entries,
            label: Some("scene texture units"),
        })
    }
}

impl TextureDevice for GpuTextures {
    type Handle = GpuTexture;

    fn upload(
        &mut self,
        label: &str,
        image: &DecodedImage,
        sampling: &Sampling,
    ) -> anyhow::Result<GpuTexture> {
        check_dimensions(
            image.width,
            image.height,
            self.device.limits().max_texture_dimension_2d,
        )?;
        let levels = build_mip_chain(image, sampling.generate_mipmaps)?;
        GpuTexture::from_levels(&self.device, &self.queue, &levels, Some(label), sampling)
    }

    fn bind(&mut self, unit: usize, handle: &GpuTexture) {
        match self.units.get_mut(unit) {
            Some(slot) => *slot = Some(handle.clone()),
            None => log::warn!("There is no texture unit {}", unit),
        }
    }

    fn release(&mut self, handle: GpuTexture) {
        for unit in self.units.iter_mut() {
            if unit.as_ref().is_some_and(|bound| bound.texture == handle.texture) {
                *unit = None;
            }
        }
        handle.texture.destroy();
    }
}
