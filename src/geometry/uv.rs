use std::f32::consts::PI;

use glam::Vec2;

/// Ring-shaped texture region sampled by the torus.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnulusRegion {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
}

impl Default for AnnulusRegion {
    fn default() -> Self {
        Self {
            center: Vec2::splat(0.5),
            inner_radius: 0.0,
            outer_radius: 0.5,
        }
    }
}

/// Circular texture region sampled by the front hemisphere of the sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiskRegion {
    pub center: Vec2,
    pub radius: f32,
}

impl Default for DiskRegion {
    fn default() -> Self {
        Self {
            center: Vec2::splat(0.5),
            radius: 0.5,
        }
    }
}

/// Maps tube index `i` of `n` to a texture parameter running 1 -> 0 -> 1
/// around the tube, so the annulus has no seam at its rims.
pub fn texture_theta(i: u32, n: u32) -> f32 {
    let a = n / 2;
    if i < a {
        1.0 - i as f32 / a as f32
    } else {
        (i - a) as f32 / (n - a) as f32
    }
}

/// `t` picks the radial distance between the inner and outer radius, `phi` the
/// angle around the annulus center.
pub fn torus_uv(phi: f32, t: f32, region: &AnnulusRegion) -> Vec2 {
    let dist = region.inner_radius + (region.outer_radius - region.inner_radius) * t;
    Vec2::new(
        region.center.x - dist * phi.cos(),
        region.center.y - dist * phi.sin(),
    )
}

/// Distance from the disk center grows linearly with `phi / PI`; `theta` is the angle.
pub fn sphere_uv(phi: f32, theta: f32, region: &DiskRegion) -> Vec2 {
    let dist = 2.0 * region.radius * (phi / PI);
    Vec2::new(
        region.center.x + dist * theta.cos(),
        region.center.y + dist * theta.sin(),
    )
}
