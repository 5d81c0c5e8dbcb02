//! # Mesh Sink
//!
//! Receiving end of a generation: whatever owns a renderable resource.

use crate::mesh::MeshBuffers;

/// Consumer of freshly generated mesh buffers.
///
/// Every call hands over a newly allocated value; a sink must not assume
/// buffers are reused between calls.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{generate_into, MeshBuffers, ShapeKind, ShapeParameters};
///
/// let mut uploaded = 0;
/// let mut upload = |mesh: MeshBuffers| uploaded += mesh.vertex_count();
/// let cube = ShapeParameters::defaults(ShapeKind::Cube);
/// generate_into(ShapeKind::Cube, &cube, &mut upload).unwrap();
/// assert_eq!(uploaded, 24);
/// ```
pub trait MeshSink {
    /// Called once per successful generation.
    fn on_mesh_ready(&mut self, mesh: MeshBuffers);
}

impl<F> MeshSink for F
where
    F: FnMut(MeshBuffers),
{
    fn on_mesh_ready(&mut self, mesh: MeshBuffers) {
        self(mesh)
    }
}

/// Holds the most recent mesh, dropping the previous one.
impl MeshSink for Option<MeshBuffers> {
    fn on_mesh_ready(&mut self, mesh: MeshBuffers) {
        *self = Some(mesh);
    }
}

/// Keeps every mesh in arrival order.
impl MeshSink for Vec<MeshBuffers> {
    fn on_mesh_ready(&mut self, mesh: MeshBuffers) {
        self.push(mesh);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{CubeParameters, PlaneParameters};
    use crate::shape::GeometryBuilder;

    #[test]
    fn test_option_sink_replaces() {
        let mut latest: Option<MeshBuffers> = None;
        latest.on_mesh_ready(CubeParameters::default().build().unwrap());
        latest.on_mesh_ready(PlaneParameters::default().build().unwrap());
        assert_eq!(latest.map(|m| m.vertex_count()), Some(4));
    }

    #[test]
    fn test_vec_sink_appends() {
        let mut all: Vec<MeshBuffers> = Vec::new();
        all.on_mesh_ready(PlaneParameters::default().build().unwrap());
        all.on_mesh_ready(CubeParameters::default().build().unwrap());
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].vertex_count(), 24);
    }

    #[test]
    fn test_closure_sink() {
        let mut counts = Vec::new();
        let mut sink = |mesh: MeshBuffers| counts.push(mesh.triangle_count());
        sink.on_mesh_ready(PlaneParameters::default().build().unwrap());
        assert_eq!(counts, vec![2]);
    }
}
