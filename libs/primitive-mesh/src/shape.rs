//! # Shapes
//!
//! The closed set of shape kinds, their parameter records and the builder
//! capability every record implements.

use crate::error::MeshResult;
use crate::mesh::MeshBuffers;
use crate::primitives::{ConeParameters, CubeParameters, PlaneParameters, SphereParameters};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag naming one of the supported primitives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    #[default]
    Plane,
    Cube,
    Sphere,
    Cone,
}

impl ShapeKind {
    /// Every shape kind, in inspector order.
    pub const ALL: [ShapeKind; 4] = [Self::Plane, Self::Cube, Self::Sphere, Self::Cone];

    /// Lowercase shape name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Plane => "plane",
            Self::Cube => "cube",
            Self::Sphere => "sphere",
            Self::Cone => "cone",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mesh generation capability of a parameter record.
///
/// Counts are closed-form so buffers are reserved once before any vertex
/// is written. They saturate instead of wrapping; oversized requests are
/// then rejected by the buffer reservation.
pub trait GeometryBuilder: Default {
    /// Shape this record describes.
    const KIND: ShapeKind;

    /// Number of vertices [`build`](Self::build) will emit.
    fn vertex_count(&self) -> u64;

    /// Number of triangles [`build`](Self::build) will emit.
    fn triangle_count(&self) -> u64;

    /// Rejects values outside the shape's domain.
    fn validate(&self) -> MeshResult<()>;

    /// Returns a copy clamped into the inspector ranges.
    fn clamped(&self) -> Self;

    /// Generates fresh buffers for the current values.
    fn build(&self) -> MeshResult<MeshBuffers>;

    /// Restores the default values.
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Parameter record for one shape kind.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{ShapeKind, ShapeParameters, SphereParameters};
///
/// let params = ShapeParameters::from(SphereParameters::new(2.0, 12, 6));
/// assert_eq!(params.kind(), ShapeKind::Sphere);
/// let mesh = params.build().unwrap();
/// assert_eq!(mesh.vertex_count(), 13 * 6 + 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeParameters {
    Plane(PlaneParameters),
    Cube(CubeParameters),
    Sphere(SphereParameters),
    Cone(ConeParameters),
}

impl ShapeParameters {
    /// Default parameters for a shape kind.
    pub fn defaults(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Plane => Self::Plane(PlaneParameters::default()),
            ShapeKind::Cube => Self::Cube(CubeParameters::default()),
            ShapeKind::Sphere => Self::Sphere(SphereParameters::default()),
            ShapeKind::Cone => Self::Cone(ConeParameters::default()),
        }
    }

    /// Shape kind of this record.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Plane(_) => PlaneParameters::KIND,
            Self::Cube(_) => CubeParameters::KIND,
            Self::Sphere(_) => SphereParameters::KIND,
            Self::Cone(_) => ConeParameters::KIND,
        }
    }

    /// See [`GeometryBuilder::vertex_count`].
    pub fn vertex_count(&self) -> u64 {
        match self {
            Self::Plane(p) => p.vertex_count(),
            Self::Cube(p) => p.vertex_count(),
            Self::Sphere(p) => p.vertex_count(),
            Self::Cone(p) => p.vertex_count(),
        }
    }

    /// See [`GeometryBuilder::triangle_count`].
    pub fn triangle_count(&self) -> u64 {
        match self {
            Self::Plane(p) => p.triangle_count(),
            Self::Cube(p) => p.triangle_count(),
            Self::Sphere(p) => p.triangle_count(),
            Self::Cone(p) => p.triangle_count(),
        }
    }

    /// See [`GeometryBuilder::validate`].
    pub fn validate(&self) -> MeshResult<()> {
        match self {
            Self::Plane(p) => p.validate(),
            Self::Cube(p) => p.validate(),
            Self::Sphere(p) => p.validate(),
            Self::Cone(p) => p.validate(),
        }
    }

    /// See [`GeometryBuilder::clamped`].
    pub fn clamped(&self) -> Self {
        match self {
            Self::Plane(p) => Self::Plane(p.clamped()),
            Self::Cube(p) => Self::Cube(p.clamped()),
            Self::Sphere(p) => Self::Sphere(p.clamped()),
            Self::Cone(p) => Self::Cone(p.clamped()),
        }
    }

    /// Restores the defaults of this record's kind.
    pub fn reset(&mut self) {
        *self = Self::defaults(self.kind());
    }

    /// See [`GeometryBuilder::build`].
    pub fn build(&self) -> MeshResult<MeshBuffers> {
        match self {
            Self::Plane(p) => p.build(),
            Self::Cube(p) => p.build(),
            Self::Sphere(p) => p.build(),
            Self::Cone(p) => p.build(),
        }
    }
}

impl From<PlaneParameters> for ShapeParameters {
    fn from(params: PlaneParameters) -> Self {
        Self::Plane(params)
    }
}

impl From<CubeParameters> for ShapeParameters {
    fn from(params: CubeParameters) -> Self {
        Self::Cube(params)
    }
}

impl From<SphereParameters> for ShapeParameters {
    fn from(params: SphereParameters) -> Self {
        Self::Sphere(params)
    }
}

impl From<ConeParameters> for ShapeParameters {
    fn from(params: ConeParameters) -> Self {
        Self::Cone(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(ShapeKind::Plane.to_string(), "plane");
        assert_eq!(ShapeKind::Cone.to_string(), "cone");
    }

    #[test]
    fn test_defaults_match_kind() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeParameters::defaults(kind).kind(), kind);
        }
    }

    #[test]
    fn test_reset_keeps_kind() {
        let mut params = ShapeParameters::from(CubeParameters::new(3.0, 4.0, 5.0));
        params.reset();
        assert_eq!(params, ShapeParameters::Cube(CubeParameters::default()));
    }

    #[test]
    fn test_trait_reset_restores_defaults() {
        let mut sphere = SphereParameters::new(3.0, 5, 5);
        sphere.reset();
        assert_eq!(sphere, SphereParameters::default());
    }

    #[test]
    fn test_counts_match_build() {
        for kind in ShapeKind::ALL {
            let params = ShapeParameters::defaults(kind);
            let mesh = params.build().unwrap();
            assert_eq!(mesh.vertex_count() as u64, params.vertex_count(), "{kind}");
            assert_eq!(mesh.triangle_count() as u64, params.triangle_count(), "{kind}");
        }
    }

    #[test]
    fn test_serde_tagged_roundtrip() {
        let params = ShapeParameters::from(ConeParameters::new(2.0, 1.0, 0.0, 12));
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"kind\":\"cone\""));
        let back: ShapeParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn test_serde_missing_fields_use_defaults() {
        let params: ShapeParameters =
            serde_json::from_str(r#"{"kind":"sphere","radius":2.5}"#).unwrap();
        match params {
            ShapeParameters::Sphere(sphere) => {
                assert_eq!(sphere.radius, 2.5);
                assert_eq!(sphere.longitude, SphereParameters::default().longitude);
                assert_eq!(sphere.latitude, SphereParameters::default().latitude);
            }
            other => panic!("unexpected parameters: {other:?}"),
        }
    }
}
