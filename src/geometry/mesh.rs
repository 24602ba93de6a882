use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Floats per vertex: position (3), normal (3), uv (2).
pub const VERTEX_DATA_SIZE: usize = 8;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
        }
    }
}

/// Non-indexed triangle list. Every triangle owns its three vertices.
#[derive(Default)]
pub struct Mesh {
    vertices: Vec<Vertex>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangles * 3),
        }
    }

    /// Appends one triangle, all three vertices sharing its face normal.
    pub fn add_triangle(&mut self, v1: Vec3, uv1: Vec2, v2: Vec3, uv2: Vec2, v3: Vec3, uv3: Vec2) {
        let normal = face_normal(v1, v2, v3);
        self.vertices.push(Vertex::new(v1, normal, uv1));
        self.vertices.push(Vertex::new(v2, normal, uv2));
        self.vertices.push(Vertex::new(v3, normal, uv3));
    }

    pub fn vertex_count(&self) -> usize {
        self.as_floats().len() / VERTEX_DATA_SIZE
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Right-handed face normal of `v1 -> v2 -> v3`. Zero-area triangles give `Vec3::ZERO`.
pub fn face_normal(v1: Vec3, v2: Vec3, v3: Vec3) -> Vec3 {
    (v2 - v1).cross(v3 - v1).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_normal_follows_right_hand_rule() {
        let n = face_normal(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert_eq!(n, Vec3::Z);

        let flipped = face_normal(Vec3::ZERO, Vec3::Y, Vec3::X);
        assert_eq!(flipped, -Vec3::Z);
    }

    #[test]
    fn face_normal_is_unit_length() {
        let n = face_normal(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(4.0, -1.0, 0.5),
            Vec3::new(-2.0, 0.0, 7.0),
        );
        assert!((n.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn degenerate_triangle_has_zero_normal() {
        let p = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(face_normal(p, p, Vec3::X), Vec3::ZERO);
        assert_eq!(face_normal(Vec3::ZERO, Vec3::X, Vec3::X * 2.0), Vec3::ZERO);
    }

    #[test]
    fn add_triangle_appends_interleaved_vertices() {
        let mut mesh = Mesh::new();
        assert!(mesh.is_empty());

        mesh.add_triangle(
            Vec3::ZERO,
            Vec2::new(0.1, 0.2),
            Vec3::X,
            Vec2::new(0.3, 0.4),
            Vec3::Y,
            Vec2::new(0.5, 0.6),
        );

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(
            &mesh.as_floats()[..VERTEX_DATA_SIZE],
            &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.1, 0.2]
        );
        assert_eq!(
            &mesh.as_floats()[2 * VERTEX_DATA_SIZE..],
            &[0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.5, 0.6]
        );
        for v in mesh.vertices() {
            assert_eq!(v.normal, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn float_view_is_whole_triangles() {
        let mut mesh = Mesh::with_capacity(4);
        for i in 0..4 {
            let offset = Vec3::splat(i as f32);
            mesh.add_triangle(
                offset,
                Vec2::ZERO,
                offset + Vec3::X,
                Vec2::X,
                offset + Vec3::Z,
                Vec2::Y,
            );
        }
        assert_eq!(mesh.as_floats().len() % (VERTEX_DATA_SIZE * 3), 0);
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(std::mem::size_of::<Vertex>(), VERTEX_DATA_SIZE * 4);
    }
}
