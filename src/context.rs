use anyhow::Context as _;

/// GPU device and queue the texture device uploads through.
///
/// The viewer that owns the window usually already has a device; hand clones
/// of it to [`Context::from_parts`]. [`Context::new_headless`] creates one
/// without a surface, which is enough for uploading and binding textures.
#[derive(Debug, Clone)]
pub struct Context {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl Context {
    pub fn from_parts(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self { device, queue }
    }

    pub async fn new_headless() -> anyhow::Result<Self> {
        // PRIMARY => Vulkan + Metal + DX12 + Browser WebGPU
        log::info!("WGPU setup");
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..wgpu::InstanceDescriptor::new_without_display_handle()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .context("no compatible GPU adapter")?;
        log::info!("Using adapter {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("scene device"),
                // Sixteen sampled textures and samplers per stage are within these.
                required_limits: wgpu::Limits::downlevel_defaults(),
                ..Default::default()
            })
            .await
            .context("could not create the GPU device")?;

        Ok(Self { device, queue })
    }

    pub fn new_headless_blocking() -> anyhow::Result<Self> {
        futures::executor::block_on(Self::new_headless())
    }
}
