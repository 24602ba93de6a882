use crate::geometry::Mesh;

/// The mesh currently shown, and whether its GPU copy exists yet.
pub enum MeshSlot<R> {
    Empty,
    Attached(Mesh),
    Uploaded { mesh: Mesh, resource: R },
}

impl<R> Default for MeshSlot<R> {
    fn default() -> Self {
        MeshSlot::Empty
    }
}

impl<R> MeshSlot<R> {
    /// Replaces the current mesh. The old mesh and its GPU resource are dropped.
    pub fn attach(&mut self, mesh: Mesh) {
        *self = MeshSlot::Attached(mesh);
    }

    pub fn mesh(&self) -> Option<&Mesh> {
        match self {
            MeshSlot::Empty => None,
            MeshSlot::Attached(mesh) | MeshSlot::Uploaded { mesh, .. } => Some(mesh),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, MeshSlot::Attached(_))
    }

    /// Uploads at most once per `attach`.
    pub fn prepare(&mut self, upload: impl FnOnce(&Mesh) -> R) -> Option<&R> {
        if self.is_pending() {
            if let MeshSlot::Attached(mesh) = std::mem::take(self) {
                let resource = upload(&mesh);
                *self = MeshSlot::Uploaded { mesh, resource };
            }
        }

        match self {
            MeshSlot::Uploaded { resource, .. } => Some(resource),
            _ => None,
        }
    }
}
