//! Texture loading and upload.

use crate::error::TextureError;
use std::path::Path;

/// An uploaded 2D texture.
pub struct GpuTexture {
    pub view: wgpu::TextureView,
}

impl GpuTexture {
    /// Load an image from disk and upload it.
    ///
    /// Images are flipped vertically on load so that texture coordinates
    /// authored with a bottom-left origin sample correctly.
    pub fn from_path(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
    ) -> Result<Self, TextureError> {
        let bytes = std::fs::read(path).map_err(|source| TextureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = decode_flipped(&bytes, path)?;
        let (width, height) = rgba.dimensions();
        log::info!(
            "loaded texture {} ({}x{})",
            path.display(),
            width,
            height
        );
        Ok(Self::from_rgba(
            device,
            queue,
            &path.display().to_string(),
            &rgba,
            width,
            height,
        ))
    }

    /// A 1x1 white texture, bound for untextured records so the texture
    /// bind group is always valid.
    pub fn white(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        Self::from_rgba(device, queue, "white", &[255, 255, 255, 255], 1, 1)
    }

    fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { view }
    }
}

/// Decode an encoded image and flip it to a bottom-left origin.
fn decode_flipped(bytes: &[u8], path: &Path) -> Result<image::RgbaImage, TextureError> {
    let image = image::load_from_memory(bytes).map_err(|source| TextureError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.flipv().to_rgba8())
}

/// Sampler shared by every texture: repeat wrap, linear filtering, matching
/// how the scene's materials were authored.
pub fn create_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("scene sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}
