//! # Sphere Primitive
//!
//! Generates a UV sphere with explicit pole vertices.
//!
//! ## Layout
//!
//! ```text
//! 0                          north pole (0, r, 0)
//! 1 ..= lon + 1              ring 0, closest to the north pole
//! ...                        `latitude` rings of `longitude + 1` vertices
//! N - 1                      south pole (0, -r, 0)
//! ```
//!
//! The last column of each ring repeats the azimuth of the first so the
//! texture seam gets its own `u = 1` vertex.

use super::{clamp_count, clamp_field, reject_degenerate, require_at_least, require_extent};
use crate::error::MeshResult;
use crate::mesh::MeshBuffers;
use crate::shape::{GeometryBuilder, ShapeKind};
use config::constants::{
    SPHERE_DEFAULT_LATITUDE, SPHERE_DEFAULT_LONGITUDE, SPHERE_DEFAULT_RADIUS,
    SPHERE_LATITUDE_RANGE, SPHERE_LONGITUDE_RANGE, SPHERE_MIN_LATITUDE, SPHERE_MIN_LONGITUDE,
    SPHERE_RADIUS_RANGE,
};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// Sphere radius and tessellation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereParameters {
    pub radius: f32,
    /// Steps around the Y axis
    pub longitude: u32,
    /// Rings between the poles
    pub latitude: u32,
}

impl SphereParameters {
    /// Creates sphere parameters.
    pub fn new(radius: f32, longitude: u32, latitude: u32) -> Self {
        Self {
            radius,
            longitude,
            latitude,
        }
    }
}

impl Default for SphereParameters {
    fn default() -> Self {
        Self::new(
            SPHERE_DEFAULT_RADIUS,
            SPHERE_DEFAULT_LONGITUDE,
            SPHERE_DEFAULT_LATITUDE,
        )
    }
}

impl GeometryBuilder for SphereParameters {
    const KIND: ShapeKind = ShapeKind::Sphere;

    fn vertex_count(&self) -> u64 {
        (u64::from(self.longitude) + 1)
            .saturating_mul(u64::from(self.latitude))
            .saturating_add(2)
    }

    fn triangle_count(&self) -> u64 {
        // Two cap fans of `longitude` triangles plus two per quad in the
        // `latitude - 1` middle bands.
        u64::from(self.longitude)
            .saturating_mul(u64::from(self.latitude))
            .saturating_mul(2)
    }

    fn validate(&self) -> MeshResult<()> {
        require_extent(Self::KIND, "radius", self.radius)?;
        require_at_least(
            Self::KIND,
            "longitude",
            self.longitude,
            SPHERE_MIN_LONGITUDE,
            "must be at least 3 to enclose a volume",
        )?;
        require_at_least(
            Self::KIND,
            "latitude",
            self.latitude,
            SPHERE_MIN_LATITUDE,
            "must be at least 1",
        )
    }

    fn clamped(&self) -> Self {
        Self {
            radius: clamp_field(Self::KIND, "radius", self.radius, SPHERE_RADIUS_RANGE),
            longitude: clamp_count(Self::KIND, "longitude", self.longitude, SPHERE_LONGITUDE_RANGE),
            latitude: clamp_count(Self::KIND, "latitude", self.latitude, SPHERE_LATITUDE_RANGE),
        }
    }

    fn build(&self) -> MeshResult<MeshBuffers> {
        self.validate()?;
        let mut mesh = MeshBuffers::with_capacity(self.vertex_count(), self.triangle_count())?;

        let radius = self.radius;
        let lon = self.longitude;
        let lat = self.latitude;

        let north = mesh.push_vertex(Vec3::Y * radius, Vec3::Y, Vec2::Y);

        for ring in 0..lat {
            let t = (ring + 1) as f32 / (lat + 1) as f32;
            let (sin_polar, cos_polar) = (PI * t).sin_cos();

            for col in 0..=lon {
                let azimuth = if col == lon {
                    0.0
                } else {
                    TAU * col as f32 / lon as f32
                };
                let (sin_az, cos_az) = azimuth.sin_cos();

                let direction = Vec3::new(sin_polar * cos_az, cos_polar, sin_polar * sin_az);
                let uv = Vec2::new(col as f32 / lon as f32, 1.0 - t);
                mesh.push_vertex(direction * radius, direction, uv);
            }
        }

        let south = mesh.push_vertex(Vec3::NEG_Y * radius, Vec3::NEG_Y, Vec2::ZERO);

        // Top cap
        for col in 0..lon {
            mesh.push_triangle(col + 2, col + 1, north);
        }

        // Middle bands
        let stride = lon + 1;
        for ring in 0..lat - 1 {
            for col in 0..lon {
                let current = col + ring * stride + 1;
                let next = current + stride;

                mesh.push_triangle(current, current + 1, next + 1);
                mesh.push_triangle(current, next + 1, next);
            }
        }

        // Bottom cap
        for col in 0..lon {
            mesh.push_triangle(south, south - col - 2, south - col - 1);
        }

        reject_degenerate(mesh, Self::KIND, "radius", radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_default() {
        let sphere = SphereParameters::default();
        assert_eq!(sphere.radius, 1.0);
        assert_eq!(sphere.longitude, 24);
        assert_eq!(sphere.latitude, 16);
    }

    #[test]
    fn test_sphere_counts() {
        let mesh = SphereParameters::new(1.0, 8, 4).build().unwrap();
        assert_eq!(mesh.vertex_count(), 9 * 4 + 2);
        assert_eq!(mesh.triangle_count(), 8 + 8 * 2 * 3 + 8);
    }

    #[test]
    fn test_sphere_poles() {
        let mesh = SphereParameters::new(1.0, 8, 4).build().unwrap();
        let last = mesh.vertex_count() - 1;
        assert_eq!(mesh.vertices()[0], Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(mesh.vertices()[last], Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(mesh.uvs()[0], Vec2::new(0.0, 1.0));
        assert_eq!(mesh.uvs()[last], Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let radius = 2.5;
        let mesh = SphereParameters::new(radius, 12, 7).build().unwrap();
        for v in mesh.vertices() {
            assert_relative_eq!(v.length(), radius, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_sphere_normals_are_radial() {
        let mesh = SphereParameters::new(3.0, 10, 5).build().unwrap();
        for (position, normal) in mesh.vertices().iter().zip(mesh.normals()) {
            assert!(position.normalize().abs_diff_eq(*normal, 1e-6));
        }
    }

    #[test]
    fn test_sphere_seam_duplicates_first_column() {
        let lon = 6;
        let mesh = SphereParameters::new(1.0, lon, 3).build().unwrap();
        let stride = (lon + 1) as usize;
        for ring in 0..3 {
            let first = 1 + ring * stride;
            let seam = first + lon as usize;
            assert_eq!(mesh.vertices()[first], mesh.vertices()[seam]);
            assert_eq!(mesh.uvs()[first].x, 0.0);
            assert_eq!(mesh.uvs()[seam].x, 1.0);
            assert_eq!(mesh.uvs()[first].y, mesh.uvs()[seam].y);
        }
    }

    #[test]
    fn test_sphere_ring_uvs() {
        let mesh = SphereParameters::new(1.0, 4, 3).build().unwrap();
        // Ring 1, column 2
        let uv = mesh.uvs()[1 + 5 + 2];
        assert_relative_eq!(uv.x, 0.5);
        assert_relative_eq!(uv.y, 0.5);
    }

    #[test]
    fn test_sphere_cap_triangles() {
        let mesh = SphereParameters::new(1.0, 4, 2).build().unwrap();
        let last = (mesh.vertex_count() - 1) as u32;
        assert_eq!(mesh.triangle(0), [2, 1, 0]);
        assert_eq!(mesh.triangle(3), [5, 4, 0]);
        let bottom = mesh.triangle_count() - 4;
        assert_eq!(mesh.triangle(bottom), [last, last - 2, last - 1]);
    }

    #[test]
    fn test_sphere_large_radius_keeps_unit_normals() {
        for radius in [1e20, 1e25] {
            let mesh = SphereParameters::new(radius, 8, 4).build().unwrap();
            for normal in mesh.normals() {
                assert_relative_eq!(normal.length(), 1.0, epsilon = 1e-5);
            }
            assert!(mesh.validate().is_ok());
        }
    }

    #[test]
    fn test_sphere_tiny_radius() {
        let result = SphereParameters::new(1e-20, 8, 4).build();
        assert!(matches!(
            result,
            Err(MeshError::InvalidParameter { name: "radius", .. })
        ));
    }

    #[test]
    fn test_sphere_collapsing_tessellation() {
        // Cap triangles at the minimum radius fall under the area epsilon
        let result = SphereParameters::new(1e-4, 100, 100).build();
        assert!(matches!(
            result,
            Err(MeshError::InvalidParameter { name: "radius", .. })
        ));
    }

    #[test]
    fn test_sphere_single_ring() {
        let mesh = SphereParameters::new(1.0, 3, 1).build().unwrap();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 6);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_sphere_validates() {
        let mesh = SphereParameters::default().build().unwrap();
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_sphere_invalid_radius() {
        assert!(SphereParameters::new(0.0, 8, 4).build().is_err());
        assert!(SphereParameters::new(-1.0, 8, 4).build().is_err());
    }

    #[test]
    fn test_sphere_too_few_rings() {
        let result = SphereParameters::new(1.0, 8, 0).build();
        assert!(matches!(
            result,
            Err(MeshError::InvalidParameter { name: "latitude", .. })
        ));
    }

    #[test]
    fn test_sphere_too_few_columns() {
        let result = SphereParameters::new(1.0, 2, 4).build();
        assert!(matches!(
            result,
            Err(MeshError::InvalidParameter { name: "longitude", .. })
        ));
    }

    #[test]
    fn test_sphere_unindexable_resolution() {
        let result = SphereParameters::new(1.0, u32::MAX, u32::MAX).build();
        assert!(matches!(result, Err(MeshError::TooManyVertices { .. })));
    }

    #[test]
    fn test_sphere_clamped() {
        let sphere = SphereParameters::new(9.0, 1, 200).clamped();
        assert_eq!(sphere, SphereParameters::new(5.0, 3, 100));
    }
}
