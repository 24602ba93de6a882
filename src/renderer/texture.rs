use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::renderer::error::RenderError;

const DEFAULT_SIZE: u32 = 512;

/// The surface texture plus the bind group the mesh pipeline samples it through.
pub struct SurfaceTexture {
    _texture: wgpu::Texture,
    pub bind_group: wgpu::BindGroup,
    pub size: (u32, u32),
}

impl SurfaceTexture {
    pub fn bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Texture Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        })
    }

    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        image: &RgbaImage,
    ) -> Self {
        let (width, height) = image.dimensions();
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Surface Texture"),
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
            image.as_raw(),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Surface Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Texture Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        Self {
            _texture: texture,
            bind_group,
            size: (width, height),
        }
    }
}

/// Loads the texture image, or the built-in pattern when `path` is `None`.
///
/// Rows are flipped so that v = 0 is the bottom of the picture, which is the
/// direction the surface UV functions assume.
pub fn load_image(path: Option<&Path>) -> Result<RgbaImage, RenderError> {
    let image = match path {
        Some(path) => {
            let image = image::open(path).map_err(|source| RenderError::Texture {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), width = image.width(), height = image.height(), "loaded texture");
            image.to_rgba8()
        }
        None => {
            tracing::info!("no texture given, using built-in pattern");
            default_image(DEFAULT_SIZE)
        }
    };

    Ok(image::imageops::flip_vertical(&image))
}

/// Concentric rings crossed by angular sectors around the image center, so both
/// the disk and the annulus mappings show their orientation. Corner texels, which
/// the back of the sphere samples, are a flat slate color.
pub fn default_image(size: u32) -> RgbaImage {
    let half = size as f32 / 2.0;

    RgbaImage::from_fn(size, size, |x, y| {
        let dx = (x as f32 + 0.5 - half) / half;
        let dy = (y as f32 + 0.5 - half) / half;
        let r = (dx * dx + dy * dy).sqrt();

        if r > 1.0 {
            return Rgba([70, 80, 96, 255]);
        }

        let ring = (r * 8.0) as u32 % 2;
        let sector = ((dy.atan2(dx) + std::f32::consts::PI) / std::f32::consts::TAU * 16.0) as u32 % 2;
        let warm = 1.0 - r;

        if ring ^ sector == 0 {
            Rgba([240, (180.0 * warm + 60.0) as u8, 40, 255])
        } else {
            Rgba([30, (120.0 * r + 60.0) as u8, 200, 255])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_image_has_flat_corners() {
        let image = default_image(64);
        assert_eq!(image.dimensions(), (64, 64));
        let corner = *image.get_pixel(0, 0);
        assert_eq!(*image.get_pixel(63, 63), corner);
        assert_eq!(*image.get_pixel(0, 63), corner);
        assert_ne!(*image.get_pixel(32, 20), corner);
    }

    #[test]
    fn builtin_image_is_flipped() {
        let image = load_image(None).unwrap();
        let reference = default_image(DEFAULT_SIZE);
        let last = DEFAULT_SIZE - 1;
        assert_eq!(image.get_pixel(100, 0), reference.get_pixel(100, last));
        assert_eq!(image.get_pixel(7, last), reference.get_pixel(7, 0));
    }

    #[test]
    fn missing_file_is_a_texture_error() {
        let err = load_image(Some(Path::new("does/not/exist.png"))).unwrap_err();
        assert!(matches!(err, RenderError::Texture { .. }));
        assert!(err.to_string().contains("exist.png"));
    }
}
