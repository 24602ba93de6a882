pub mod mesh;
pub mod presets;
pub mod surface;
pub mod uv;

pub use mesh::{Mesh, Vertex};
pub use presets::SURFACE_PRESETS;
pub use surface::{SphereParams, SurfaceKind, SurfaceSpec, TorusParams};
pub use uv::{AnnulusRegion, DiskRegion};
