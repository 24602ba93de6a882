use glam::Vec2;

use crate::geometry::surface::{SphereParams, SurfaceSpec, TorusParams};
use crate::geometry::uv::{AnnulusRegion, DiskRegion};

pub struct SurfacePreset {
    pub name: &'static str,
    pub description: &'static str,
    pub spec: SurfaceSpec,
}

pub const SURFACE_PRESETS: &[SurfacePreset] = &[
    SurfacePreset {
        name: "Sphere",
        description: "Front hemisphere textured, back flat",
        spec: SurfaceSpec::Sphere(SphereParams {
            n_phi: 200,
            n_theta: 400,
            disk: DiskRegion {
                center: Vec2::new(0.5, 0.5),
                radius: 0.5,
            },
        }),
    },
    SurfacePreset {
        name: "Donut",
        description: "Whole image unrolled around the tube",
        spec: SurfaceSpec::Torus(TorusParams {
            tube_radius: 1.0,
            ring_radius: 2.0,
            n_phi: 200,
            n_theta: 400,
            annulus: AnnulusRegion {
                center: Vec2::new(0.5, 0.5),
                inner_radius: 0.0,
                outer_radius: 0.5,
            },
        }),
    },
    SurfacePreset {
        name: "Faceted Sphere",
        description: "Coarse grid, flat shading is obvious",
        spec: SurfaceSpec::Sphere(SphereParams {
            n_phi: 12,
            n_theta: 24,
            disk: DiskRegion {
                center: Vec2::new(0.5, 0.5),
                radius: 0.5,
            },
        }),
    },
    SurfacePreset {
        name: "Thin Ring",
        description: "Slim tube sampling an outer band",
        spec: SurfaceSpec::Torus(TorusParams {
            tube_radius: 0.35,
            ring_radius: 2.2,
            n_phi: 240,
            n_theta: 48,
            annulus: AnnulusRegion {
                center: Vec2::new(0.5, 0.5),
                inner_radius: 0.3,
                outer_radius: 0.5,
            },
        }),
    },
    SurfacePreset {
        name: "Low Poly Donut",
        description: "8 x 6 grid",
        spec: SurfaceSpec::Torus(TorusParams {
            tube_radius: 1.0,
            ring_radius: 2.0,
            n_phi: 8,
            n_theta: 6,
            annulus: AnnulusRegion {
                center: Vec2::new(0.5, 0.5),
                inner_radius: 0.0,
                outer_radius: 0.5,
            },
        }),
    },
];
