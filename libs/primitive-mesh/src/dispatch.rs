//! # Shape Dispatch
//!
//! Maps a shape kind plus its parameter record onto the matching builder.

use crate::error::{MeshError, MeshResult};
use crate::mesh::MeshBuffers;
use crate::shape::{ShapeKind, ShapeParameters};
use crate::sink::MeshSink;
use rayon::prelude::*;
use tracing::debug;

/// Generates the mesh for `kind` from `params`.
///
/// `params` must describe the requested kind; a mismatch is rejected before
/// anything is allocated.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{generate, MeshError, ShapeKind, ShapeParameters};
///
/// let cube = ShapeParameters::defaults(ShapeKind::Cube);
/// assert_eq!(generate(ShapeKind::Cube, &cube).unwrap().triangle_count(), 12);
/// assert!(matches!(
///     generate(ShapeKind::Sphere, &cube),
///     Err(MeshError::ShapeKindMismatch { .. })
/// ));
/// ```
pub fn generate(kind: ShapeKind, params: &ShapeParameters) -> MeshResult<MeshBuffers> {
    let found = params.kind();
    if found != kind {
        return Err(MeshError::ShapeKindMismatch {
            expected: kind,
            found,
        });
    }

    let mesh = params.build()?;
    debug!(
        shape = %kind,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated mesh"
    );
    Ok(mesh)
}

/// Generates a mesh and hands it to `sink`.
///
/// The sink is only called on success.
pub fn generate_into<S>(kind: ShapeKind, params: &ShapeParameters, sink: &mut S) -> MeshResult<()>
where
    S: MeshSink + ?Sized,
{
    let mesh = generate(kind, params)?;
    sink.on_mesh_ready(mesh);
    Ok(())
}

/// Generates one mesh per parameter record in parallel.
///
/// Results keep the input order. Each record is dispatched on its own kind,
/// so one failing record does not affect the others.
pub fn generate_batch(params: &[ShapeParameters]) -> Vec<MeshResult<MeshBuffers>> {
    params
        .par_iter()
        .map(|p| generate(p.kind(), p))
        .collect()
}
