use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use crate::geometry::mesh::Mesh;
use crate::geometry::uv::{AnnulusRegion, DiskRegion, sphere_uv, texture_theta, torus_uv};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceKind {
    Sphere,
    Torus,
}

impl SurfaceKind {
    pub fn label(self) -> &'static str {
        match self {
            SurfaceKind::Sphere => "Sphere",
            SurfaceKind::Torus => "Torus",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereParams {
    pub n_phi: u32,
    pub n_theta: u32,
    pub disk: DiskRegion,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            n_phi: 200,
            n_theta: 400,
            disk: DiskRegion::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TorusParams {
    /// Radius of the tube, `a`.
    pub tube_radius: f32,
    /// Distance from the torus center to the tube center, `b`.
    pub ring_radius: f32,
    pub n_phi: u32,
    pub n_theta: u32,
    pub annulus: AnnulusRegion,
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            tube_radius: 1.0,
            ring_radius: 2.0,
            n_phi: 200,
            n_theta: 400,
            annulus: AnnulusRegion::default(),
        }
    }
}

/// A surface family together with everything needed to build its mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceSpec {
    Sphere(SphereParams),
    Torus(TorusParams),
}

impl SurfaceSpec {
    pub fn kind(&self) -> SurfaceKind {
        match self {
            SurfaceSpec::Sphere(_) => SurfaceKind::Sphere,
            SurfaceSpec::Torus(_) => SurfaceKind::Torus,
        }
    }

    pub fn resolution(&self) -> (u32, u32) {
        match self {
            SurfaceSpec::Sphere(p) => (p.n_phi, p.n_theta),
            SurfaceSpec::Torus(p) => (p.n_phi, p.n_theta),
        }
    }

    pub fn generate(&self) -> Mesh {
        match self {
            SurfaceSpec::Sphere(p) => make_sphere(p),
            SurfaceSpec::Torus(p) => make_torus(p),
        }
    }
}

impl Default for SurfaceSpec {
    fn default() -> Self {
        SurfaceSpec::Sphere(SphereParams::default())
    }
}

/// Two triangles per grid cell, sharing the `(phi2, theta)`-`(phi, theta2)` diagonal.
/// Corners are given as (position, uv) in the order
/// `(phi, theta)`, `(phi2, theta)`, `(phi, theta2)`, `(phi2, theta2)`.
fn emit_cell(mesh: &mut Mesh, corners: [(Vec3, Vec2); 4]) {
    let [(p11, uv11), (p12, uv12), (p21, uv21), (p22, uv22)] = corners;
    mesh.add_triangle(p11, uv11, p12, uv12, p21, uv21);
    mesh.add_triangle(p12, uv12, p22, uv22, p21, uv21);
}

fn torus_point(a: f32, b: f32, phi: f32, theta: f32) -> Vec3 {
    let c = a * theta.cos() + b;
    Vec3::new(c * phi.cos(), c * phi.sin(), a * theta.sin())
}

fn sphere_point(phi: f32, theta: f32) -> Vec3 {
    Vec3::new(theta.cos() * phi.sin(), theta.sin() * phi.sin(), phi.cos())
}

/// Torus with both axes wrapped, textured from the annulus.
pub fn make_torus(params: &TorusParams) -> Mesh {
    let TorusParams {
        tube_radius: a,
        ring_radius: b,
        n_phi,
        n_theta,
        annulus,
    } = *params;

    let mut mesh = Mesh::with_capacity(2 * n_phi as usize * n_theta as usize);

    for i_phi in 0..n_phi {
        let i_phi2 = (i_phi + 1) % n_phi;
        let phi = i_phi as f32 * TAU / n_phi as f32;
        let phi2 = i_phi2 as f32 * TAU / n_phi as f32;

        for i_theta in 0..n_theta {
            let i_theta2 = (i_theta + 1) % n_theta;
            let theta = i_theta as f32 * TAU / n_theta as f32;
            let theta2 = i_theta2 as f32 * TAU / n_theta as f32;

            let t = texture_theta(i_theta, n_theta);
            let t2 = texture_theta(i_theta2, n_theta);

            emit_cell(
                &mut mesh,
                [
                    (torus_point(a, b, phi, theta), torus_uv(phi, t, &annulus)),
                    (torus_point(a, b, phi2, theta), torus_uv(phi2, t, &annulus)),
                    (torus_point(a, b, phi, theta2), torus_uv(phi, t2, &annulus)),
                    (torus_point(a, b, phi2, theta2), torus_uv(phi2, t2, &annulus)),
                ],
            );
        }
    }

    mesh
}

/// Unit sphere; `phi` runs pole to pole and does not wrap. The back half reads texel (0, 0).
pub fn make_sphere(params: &SphereParams) -> Mesh {
    let SphereParams {
        n_phi,
        n_theta,
        disk,
    } = *params;

    let mut mesh = Mesh::with_capacity(2 * n_phi as usize * n_theta as usize);

    for i_phi in 0..n_phi {
        let i_phi2 = i_phi + 1;
        let phi = i_phi as f32 * PI / n_phi as f32;
        let phi2 = i_phi2 as f32 * PI / n_phi as f32;
        let front = i_phi < n_phi / 2;

        for i_theta in 0..n_theta {
            let i_theta2 = (i_theta + 1) % n_theta;
            let theta = i_theta as f32 * TAU / n_theta as f32;
            let theta2 = i_theta2 as f32 * TAU / n_theta as f32;

            let uv = |phi: f32, theta: f32| {
                if front {
                    sphere_uv(phi, theta, &disk)
                } else {
                    Vec2::ZERO
                }
            };

            emit_cell(
                &mut mesh,
                [
                    (sphere_point(phi, theta), uv(phi, theta)),
                    (sphere_point(phi2, theta), uv(phi2, theta)),
                    (sphere_point(phi, theta2), uv(phi, theta2)),
                    (sphere_point(phi2, theta2), uv(phi2, theta2)),
                ],
            );
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::mesh::Vertex;

    const EPS: f32 = 1e-5;

    fn sphere(n_phi: u32, n_theta: u32) -> SphereParams {
        SphereParams {
            n_phi,
            n_theta,
            disk: DiskRegion {
                center: Vec2::splat(0.5),
                radius: 0.5,
            },
        }
    }

    fn torus(n_phi: u32, n_theta: u32) -> TorusParams {
        TorusParams {
            n_phi,
            n_theta,
            ..TorusParams::default()
        }
    }

    /// The six vertices emitted for cell `(i_phi, i_theta)`.
    fn cell(mesh: &Mesh, n_theta: u32, i_phi: u32, i_theta: u32) -> &[Vertex] {
        let start = ((i_phi * n_theta + i_theta) * 6) as usize;
        &mesh.vertices()[start..start + 6]
    }

    fn close(a: [f32; 3], b: Vec3) -> bool {
        (Vec3::from_array(a) - b).length() < EPS
    }

    #[test]
    fn vertex_count_is_six_per_cell() {
        for (n_phi, n_theta) in [(1, 1), (2, 3), (4, 4), (7, 5), (16, 32)] {
            assert_eq!(
                make_sphere(&sphere(n_phi, n_theta)).vertex_count(),
                (6 * n_phi * n_theta) as usize
            );
            assert_eq!(
                make_torus(&torus(n_phi, n_theta)).vertex_count(),
                (6 * n_phi * n_theta) as usize
            );
        }
    }

    #[test]
    fn zero_resolution_gives_empty_mesh() {
        assert!(make_sphere(&sphere(0, 8)).is_empty());
        assert!(make_sphere(&sphere(8, 0)).is_empty());
        assert!(make_torus(&torus(0, 0)).is_empty());
        assert!(make_torus(&torus(5, 0)).is_empty());
    }

    #[test]
    fn torus_cells_share_the_diagonal() {
        let params = torus(6, 8);
        let mesh = make_torus(&params);

        for i_phi in 0..params.n_phi {
            for i_theta in 0..params.n_theta {
                let v = cell(&mesh, params.n_theta, i_phi, i_theta);
                // A = (c11, c12, c21), B = (c12, c22, c21)
                assert_eq!(v[1].position, v[3].position);
                assert_eq!(v[2].position, v[5].position);
                assert_ne!(v[0].position, v[4].position);

                let phi = i_phi as f32 * TAU / 6.0;
                let phi2 = ((i_phi + 1) % 6) as f32 * TAU / 6.0;
                let theta = i_theta as f32 * TAU / 8.0;
                let theta2 = ((i_theta + 1) % 8) as f32 * TAU / 8.0;
                assert!(close(v[0].position, torus_point(1.0, 2.0, phi, theta)));
                assert!(close(v[1].position, torus_point(1.0, 2.0, phi2, theta)));
                assert!(close(v[2].position, torus_point(1.0, 2.0, phi, theta2)));
                assert!(close(v[4].position, torus_point(1.0, 2.0, phi2, theta2)));
            }
        }
    }

    #[test]
    fn torus_wraps_both_axes() {
        let params = torus(5, 7);
        let mesh = make_torus(&params);

        let last = cell(&mesh, 7, 4, 6);
        let first = cell(&mesh, 7, 0, 0);
        // corner (phi2, theta2) of the last cell is corner (phi, theta) of the first
        assert_eq!(last[4].position, first[0].position);
    }

    #[test]
    fn torus_normals_point_out_of_the_tube() {
        let params = torus(12, 16);
        let mesh = make_torus(&params);

        for tri in mesh.vertices().chunks(3) {
            let centroid = tri
                .iter()
                .map(|v| Vec3::from_array(v.position))
                .sum::<Vec3>()
                / 3.0;
            let ring = Vec3::new(centroid.x, centroid.y, 0.0).normalize() * params.ring_radius;
            let outward = centroid - ring;
            let normal = Vec3::from_array(tri[0].normal);
            assert!((normal.length() - 1.0).abs() < EPS);
            assert!(normal.dot(outward) > 0.0);
        }
    }

    #[test]
    fn torus_uv_uses_remapped_theta() {
        let params = torus(4, 6);
        let mesh = make_torus(&params);
        let annulus = params.annulus;

        // i_theta = 0 maps to t = 1, the outer radius.
        let v = cell(&mesh, 6, 0, 0);
        let uv = Vec2::from_array(v[0].uv);
        assert!(((uv - annulus.center).length() - annulus.outer_radius).abs() < EPS);

        // i_theta = A = 3 maps to t = 0, the inner radius.
        let v = cell(&mesh, 6, 1, 3);
        let uv = Vec2::from_array(v[0].uv);
        assert!(((uv - annulus.center).length() - annulus.inner_radius).abs() < EPS);
    }

    #[test]
    fn sphere_back_half_is_flat_colored() {
        let params = sphere(8, 6);
        let mesh = make_sphere(&params);

        for i_phi in 4..8 {
            for i_theta in 0..6 {
                for v in cell(&mesh, 6, i_phi, i_theta) {
                    assert_eq!(v.uv, [0.0, 0.0]);
                }
            }
        }
    }

    #[test]
    fn sphere_front_half_stays_in_disk() {
        let params = sphere(8, 6);
        let mesh = make_sphere(&params);
        let disk = params.disk;

        for i_phi in 0..4 {
            for i_theta in 0..6 {
                for v in cell(&mesh, 6, i_phi, i_theta) {
                    let uv = Vec2::from_array(v.uv);
                    assert!((uv - disk.center).length() <= 2.0 * disk.radius + EPS);
                }
            }
        }
    }

    /// Corner (phi step, theta step) of each of the six vertices in a cell.
    const CELL_CORNERS: [(u32, u32); 6] = [(0, 0), (1, 0), (0, 1), (1, 0), (1, 1), (0, 1)];

    fn close_uv(a: [f32; 2], b: Vec2) -> bool {
        (Vec2::from_array(a) - b).length() < EPS
    }

    #[test]
    fn sphere_vertices_carry_their_own_corner_uv() {
        let (n_phi, n_theta) = (8, 6);
        let params = SphereParams {
            disk: DiskRegion {
                center: Vec2::new(0.4, 0.55),
                radius: 0.3,
            },
            ..sphere(n_phi, n_theta)
        };
        let mesh = make_sphere(&params);

        for i_phi in 0..n_phi / 2 {
            for i_theta in 0..n_theta {
                let v = cell(&mesh, n_theta, i_phi, i_theta);
                for (vertex, (dp, dt)) in v.iter().zip(CELL_CORNERS) {
                    let phi = (i_phi + dp) as f32 * PI / n_phi as f32;
                    let theta = ((i_theta + dt) % n_theta) as f32 * TAU / n_theta as f32;
                    assert!(close(vertex.position, sphere_point(phi, theta)));
                    assert!(close_uv(vertex.uv, sphere_uv(phi, theta, &params.disk)));
                }
            }
        }
    }

    #[test]
    fn torus_vertices_carry_their_own_corner_uv() {
        let (n_phi, n_theta) = (4, 6);
        let params = TorusParams {
            annulus: AnnulusRegion {
                center: Vec2::new(0.45, 0.5),
                inner_radius: 0.1,
                outer_radius: 0.4,
            },
            ..torus(n_phi, n_theta)
        };
        let mesh = make_torus(&params);

        // Includes the last column, whose theta2 corner wraps to index 0.
        for i_phi in 0..n_phi {
            for i_theta in 0..n_theta {
                let v = cell(&mesh, n_theta, i_phi, i_theta);
                for (vertex, (dp, dt)) in v.iter().zip(CELL_CORNERS) {
                    let j_phi = (i_phi + dp) % n_phi;
                    let j_theta = (i_theta + dt) % n_theta;
                    let phi = j_phi as f32 * TAU / n_phi as f32;
                    let t = texture_theta(j_theta, n_theta);
                    assert!(close_uv(vertex.uv, torus_uv(phi, t, &params.annulus)));
                }
            }
        }
    }

    #[test]
    fn sphere_phi_axis_is_not_wrapped() {
        let params = sphere(4, 4);
        let mesh = make_sphere(&params);

        // The last strip's phi2 corners land on the south pole, not back on index 0.
        let v = cell(&mesh, 4, 3, 0);
        assert!(close(v[1].position, Vec3::new(0.0, 0.0, -1.0)));
        assert!(!close(v[1].position, sphere_point(0.0, 0.0)));
    }

    #[test]
    fn sphere_winding_faces_outward() {
        let mesh = make_sphere(&sphere(8, 8));

        // Upper hemisphere only; the south pole triangles are slivers whose
        // direction is rounding noise.
        for tri in mesh.vertices()[..mesh.vertex_count() / 2].chunks(3) {
            let normal = Vec3::from_array(tri[0].normal);
            if normal == Vec3::ZERO {
                continue;
            }
            let centroid = tri
                .iter()
                .map(|v| Vec3::from_array(v.position))
                .sum::<Vec3>();
            assert!(normal.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn small_sphere_end_to_end() {
        let mesh = make_sphere(&sphere(4, 4));
        assert_eq!(mesh.vertex_count(), 96);
        assert!(mesh.as_floats().iter().all(|f| f.is_finite()));

        let mut degenerate = 0;
        for v in mesh.vertices() {
            let len = Vec3::from_array(v.normal).length();
            if len == 0.0 {
                degenerate += 1;
            } else {
                assert!((len - 1.0).abs() < EPS);
            }
        }
        // One collapsed triangle per north pole cell.
        assert_eq!(degenerate, 3 * 4);
    }

    #[test]
    fn surface_spec_dispatches() {
        let spec = SurfaceSpec::Torus(torus(3, 4));
        assert_eq!(spec.kind(), SurfaceKind::Torus);
        assert_eq!(spec.resolution(), (3, 4));
        assert_eq!(spec.generate().vertex_count(), 72);

        let spec = SurfaceSpec::default();
        assert_eq!(spec.kind(), SurfaceKind::Sphere);
        assert_eq!(spec.resolution(), (200, 400));
    }
}
