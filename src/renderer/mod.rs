pub mod camera;
pub mod error;
pub mod gpu;
pub mod mesh_buffer;
pub mod mesh_slot;
pub mod texture;

pub use camera::{DragButton, ViewCamera};
pub use gpu::GpuState;
pub use mesh_buffer::MeshBuffer;
pub use mesh_slot::MeshSlot;
pub use texture::load_image;
