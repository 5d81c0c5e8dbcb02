//! # Primitives
//!
//! Parameter records and mesh builders for plane, cube, sphere and cone.

pub mod cone;
pub mod cube;
pub mod plane;
pub mod sphere;

pub use cone::ConeParameters;
pub use cube::CubeParameters;
pub use plane::PlaneParameters;
pub use sphere::SphereParameters;

use crate::error::{MeshError, MeshResult};
use crate::mesh::MeshBuffers;
use crate::shape::ShapeKind;
use config::constants::{clamp_f32, clamp_u32, MIN_EXTENT};
use std::ops::RangeInclusive;
use tracing::warn;

/// Rejects lengths and radii that are not finite or below `MIN_EXTENT`.
pub(crate) fn require_extent(shape: ShapeKind, name: &'static str, value: f32) -> MeshResult<()> {
    if !value.is_finite() {
        return Err(MeshError::invalid_parameter(shape, name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(MeshError::invalid_parameter(shape, name, value, "must be positive"));
    }
    if value < MIN_EXTENT {
        return Err(MeshError::invalid_parameter(shape, name, value, "below the minimum extent"));
    }
    Ok(())
}

/// Like [`require_extent`], but zero is accepted.
pub(crate) fn require_extent_or_zero(
    shape: ShapeKind,
    name: &'static str,
    value: f32,
) -> MeshResult<()> {
    if value == 0.0 {
        return Ok(());
    }
    if value < 0.0 {
        return Err(MeshError::invalid_parameter(shape, name, value, "must not be negative"));
    }
    require_extent(shape, name, value)
}

/// Rejects counts below a shape's minimum.
pub(crate) fn require_at_least(
    shape: ShapeKind,
    name: &'static str,
    value: u32,
    min: u32,
    reason: &'static str,
) -> MeshResult<()> {
    if value < min {
        return Err(MeshError::invalid_parameter(shape, name, value, reason));
    }
    Ok(())
}

/// Fails when a built mesh still holds a degenerate triangle.
///
/// Sizes above `MIN_EXTENT` can still collapse in `f32` once the
/// tessellation is fine enough; the blamed field is the one that sets
/// the scale.
pub(crate) fn reject_degenerate(
    mesh: MeshBuffers,
    shape: ShapeKind,
    name: &'static str,
    value: f32,
) -> MeshResult<MeshBuffers> {
    match mesh.find_degenerate_triangle() {
        Some(_) => Err(MeshError::invalid_parameter(
            shape,
            name,
            value,
            "too small for the requested tessellation",
        )),
        None => Ok(mesh),
    }
}

/// Clamps a float field, logging when the value moves.
pub(crate) fn clamp_field(
    shape: ShapeKind,
    name: &'static str,
    value: f32,
    range: RangeInclusive<f32>,
) -> f32 {
    let clamped = clamp_f32(value, range);
    if clamped != value {
        warn!("{shape}: {name} {value} outside inspector range, clamping to {clamped}");
    }
    clamped
}

/// Clamps a count field, logging when the value moves.
pub(crate) fn clamp_count(
    shape: ShapeKind,
    name: &'static str,
    value: u32,
    range: RangeInclusive<u32>,
) -> u32 {
    let clamped = clamp_u32(value, range);
    if clamped != value {
        warn!("{shape}: {name} {value} outside inspector range, clamping to {clamped}");
    }
    clamped
}
