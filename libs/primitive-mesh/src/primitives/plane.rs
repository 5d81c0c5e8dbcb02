//! # Plane Primitive
//!
//! Generates a flat rectangle on the XZ plane.

use super::{clamp_field, require_extent};
use crate::error::MeshResult;
use crate::mesh::MeshBuffers;
use crate::shape::{GeometryBuilder, ShapeKind};
use config::constants::{
    PLANE_DEFAULT_LENGTH, PLANE_DEFAULT_WIDTH, PLANE_RESOLUTION, PLANE_SIZE_RANGE,
};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Plane dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneParameters {
    /// Extent along Z
    pub length: f32,
    /// Extent along X
    pub width: f32,
}

impl PlaneParameters {
    /// Creates plane parameters.
    pub fn new(length: f32, width: f32) -> Self {
        Self { length, width }
    }
}

impl Default for PlaneParameters {
    fn default() -> Self {
        Self::new(PLANE_DEFAULT_LENGTH, PLANE_DEFAULT_WIDTH)
    }
}

impl GeometryBuilder for PlaneParameters {
    const KIND: ShapeKind = ShapeKind::Plane;

    fn vertex_count(&self) -> u64 {
        u64::from(PLANE_RESOLUTION * PLANE_RESOLUTION)
    }

    fn triangle_count(&self) -> u64 {
        u64::from((PLANE_RESOLUTION - 1) * (PLANE_RESOLUTION - 1) * 2)
    }

    fn validate(&self) -> MeshResult<()> {
        require_extent(Self::KIND, "length", self.length)?;
        require_extent(Self::KIND, "width", self.width)
    }

    fn clamped(&self) -> Self {
        Self {
            length: clamp_field(Self::KIND, "length", self.length, PLANE_SIZE_RANGE),
            width: clamp_field(Self::KIND, "width", self.width, PLANE_SIZE_RANGE),
        }
    }

    /// Builds a `PLANE_RESOLUTION`² lattice centered at the origin.
    ///
    /// Lattice vertex `(x, z)` has index `x + z * res`. UVs span the unit
    /// square whatever the dimensions; every normal is `+Y`.
    fn build(&self) -> MeshResult<MeshBuffers> {
        self.validate()?;
        let mut mesh = MeshBuffers::with_capacity(self.vertex_count(), self.triangle_count())?;

        let res_x = PLANE_RESOLUTION;
        let res_z = PLANE_RESOLUTION;

        for z in 0..res_z {
            let v = z as f32 / (res_z - 1) as f32;
            let z_pos = (v - 0.5) * self.length;

            for x in 0..res_x {
                let u = x as f32 / (res_x - 1) as f32;
                let x_pos = (u - 0.5) * self.width;
                mesh.push_vertex(Vec3::new(x_pos, 0.0, z_pos), Vec3::Y, Vec2::new(u, v));
            }
        }

        let faces = (res_x - 1) * (res_z - 1);
        for face in 0..faces {
            // Lower-left lattice corner of this face
            let i = face % (res_x - 1) + (face / (res_x - 1)) * res_x;

            mesh.push_triangle(i + res_x, i + 1, i);
            mesh.push_triangle(i + res_x, i + res_x + 1, i + 1);
        }

        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;

    #[test]
    fn test_plane_default() {
        let plane = PlaneParameters::default();
        assert_eq!(plane.length, 1.0);
        assert_eq!(plane.width, 1.0);
    }

    #[test]
    fn test_plane_counts() {
        let mesh = PlaneParameters::default().build().unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangles().len(), 6);
    }

    #[test]
    fn test_plane_triangle_order() {
        let mesh = PlaneParameters::default().build().unwrap();
        assert_eq!(mesh.triangles(), &[2, 1, 0, 2, 3, 1]);
    }

    #[test]
    fn test_plane_extents() {
        let mesh = PlaneParameters::new(2.0, 4.0).build().unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, Vec3::new(-2.0, 0.0, -1.0));
        assert_eq!(max, Vec3::new(2.0, 0.0, 1.0));
    }

    #[test]
    fn test_plane_normals_up() {
        let mesh = PlaneParameters::new(3.0, 7.0).build().unwrap();
        assert!(mesh.normals().iter().all(|n| *n == Vec3::Y));
    }

    #[test]
    fn test_plane_uvs_unit_square() {
        let mesh = PlaneParameters::new(9.0, 2.0).build().unwrap();
        assert_eq!(mesh.uvs(), &[Vec2::ZERO, Vec2::X, Vec2::Y, Vec2::ONE]);
    }

    #[test]
    fn test_plane_validates() {
        let mesh = PlaneParameters::new(5.0, 0.5).build().unwrap();
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_plane_invalid_length() {
        let result = PlaneParameters::new(0.0, 1.0).build();
        assert!(matches!(
            result,
            Err(MeshError::InvalidParameter { name: "length", .. })
        ));
    }

    #[test]
    fn test_plane_negative_width() {
        let result = PlaneParameters::new(1.0, -2.0).build();
        assert!(matches!(
            result,
            Err(MeshError::InvalidParameter { name: "width", .. })
        ));
    }

    #[test]
    fn test_plane_tiny_size() {
        let result = PlaneParameters::new(1.0, 1e-20).build();
        assert!(matches!(
            result,
            Err(MeshError::InvalidParameter { name: "width", .. })
        ));
    }

    #[test]
    fn test_plane_clamped() {
        let plane = PlaneParameters::new(0.2, 40.0).clamped();
        assert_eq!(plane, PlaneParameters::new(1.0, 10.0));
    }
}
