use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glam::Vec2;

use crate::geometry::{AnnulusRegion, DiskRegion, SphereParams, SurfaceSpec, TorusParams};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SurfaceArg {
    Sphere,
    Torus,
}

/// Textured parametric surface viewer
#[derive(Parser, Debug)]
#[command(name = "meshview")]
#[command(about = "Renders a textured sphere or torus under mouse rotation")]
pub struct Cli {
    /// Surface to generate
    #[arg(long, value_enum, default_value_t = SurfaceArg::Sphere)]
    pub surface: SurfaceArg,

    /// Grid steps along phi
    #[arg(long, default_value_t = 200)]
    pub n_phi: u32,

    /// Grid steps along theta
    #[arg(long, default_value_t = 400)]
    pub n_theta: u32,

    /// Torus tube radius
    #[arg(long, default_value_t = 1.0)]
    pub tube_radius: f32,

    /// Torus center-to-tube distance
    #[arg(long, default_value_t = 2.0)]
    pub ring_radius: f32,

    /// Texture image (png or jpeg). A built-in pattern is used when omitted.
    #[arg(long)]
    pub texture: Option<PathBuf>,

    /// Center of the sampled texture region, u
    #[arg(long, default_value_t = 0.5)]
    pub uv_center_u: f32,

    /// Center of the sampled texture region, v
    #[arg(long, default_value_t = 0.5)]
    pub uv_center_v: f32,

    /// Sphere: radius of the sampled disk
    #[arg(long, default_value_t = 0.5)]
    pub uv_radius: f32,

    /// Torus: inner radius of the sampled annulus
    #[arg(long, default_value_t = 0.0)]
    pub uv_inner_radius: f32,

    /// Torus: outer radius of the sampled annulus
    #[arg(long, default_value_t = 0.5)]
    pub uv_outer_radius: f32,

    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    #[arg(long, default_value_t = 800)]
    pub height: u32,
}

pub struct ViewerConfig {
    pub surface: SurfaceSpec,
    pub texture: Option<PathBuf>,
    pub window_size: (u32, u32),
}

impl From<Cli> for ViewerConfig {
    fn from(cli: Cli) -> Self {
        let center = Vec2::new(cli.uv_center_u, cli.uv_center_v);

        let surface = match cli.surface {
            SurfaceArg::Sphere => SurfaceSpec::Sphere(SphereParams {
                n_phi: cli.n_phi,
                n_theta: cli.n_theta,
                disk: DiskRegion {
                    center,
                    radius: cli.uv_radius,
                },
            }),
            SurfaceArg::Torus => SurfaceSpec::Torus(TorusParams {
                tube_radius: cli.tube_radius,
                ring_radius: cli.ring_radius,
                n_phi: cli.n_phi,
                n_theta: cli.n_theta,
                annulus: AnnulusRegion {
                    center,
                    inner_radius: cli.uv_inner_radius,
                    outer_radius: cli.uv_outer_radius,
                },
            }),
        };

        Self {
            surface,
            texture: cli.texture,
            window_size: (cli.width.max(400), cli.height.max(400)),
        }
    }
}
