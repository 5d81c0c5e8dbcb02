//! # Mesh Buffers
//!
//! The four parallel arrays produced by every builder: positions, normals,
//! texture coordinates and triangle indices.
//!
//! ## Winding
//!
//! For each triangle `(a, b, c)` the cross product `(b - a) × (c - a)` points
//! along the outward surface normal. Read in a right-handed Y-up frame this
//! is counter-clockwise seen from outside; in a left-handed Y-up frame the
//! same index order reads clockwise.

use crate::error::{MeshError, MeshResult};
use config::constants::{DEGENERATE_AREA_EPSILON, MAX_INDEXABLE_VERTICES, NORMAL_LENGTH_TOLERANCE};
use glam::{Vec2, Vec3};
use serde::Serialize;

/// Generated mesh data.
///
/// `normals[i]` and `uvs[i]` describe `vertices[i]`. Every consecutive
/// triple of `triangles` is one face. A value is never mutated after the
/// builder returns it; regenerating produces a new value.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{generate, ShapeKind, ShapeParameters};
///
/// let mesh = generate(ShapeKind::Plane, &ShapeParameters::defaults(ShapeKind::Plane)).unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.triangles().len(), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeshBuffers {
    vertices: Vec<Vec3>,
    normals: Vec<Vec3>,
    uvs: Vec<Vec2>,
    /// Flat triangle indices (3 per triangle)
    triangles: Vec<u32>,
}

impl MeshBuffers {
    /// Reserves buffers sized exactly for the given counts.
    ///
    /// Rejects vertex counts a `u32` index cannot address and reports a
    /// failed reservation instead of aborting.
    pub(crate) fn with_capacity(vertex_count: u64, triangle_count: u64) -> MeshResult<Self> {
        let max = MAX_INDEXABLE_VERTICES as u64;
        if vertex_count > max {
            return Err(MeshError::TooManyVertices {
                count: vertex_count,
                max,
            });
        }

        let vertex_len = reservation_len("vertices", vertex_count)?;
        let index_len = reservation_len("triangle indices", triangle_count.saturating_mul(3))?;

        let mut mesh = Self::default();
        reserve(&mut mesh.vertices, vertex_len, "vertices")?;
        reserve(&mut mesh.normals, vertex_len, "normals")?;
        reserve(&mut mesh.uvs, vertex_len, "uvs")?;
        reserve(&mut mesh.triangles, index_len, "triangle indices")?;
        Ok(mesh)
    }

    /// Appends a vertex with its normal and UV, returning its index.
    pub(crate) fn push_vertex(&mut self, position: Vec3, normal: Vec3, uv: Vec2) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        index
    }

    /// Appends one triangle.
    pub(crate) fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.extend_from_slice(&[a, b, c]);
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Unit normals, index-aligned with [`vertices`](Self::vertices).
    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Texture coordinates, index-aligned with [`vertices`](Self::vertices).
    #[inline]
    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    /// Flat triangle indices.
    #[inline]
    pub fn triangles(&self) -> &[u32] {
        &self.triangles
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        let base = index * 3;
        [
            self.triangles[base],
            self.triangles[base + 1],
            self.triangles[base + 2],
        ]
    }

    /// Iterates over triangles as index triples.
    pub fn triangle_iter(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.triangles
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Hands the four arrays over to the caller.
    ///
    /// Returns `(vertices, normals, uvs, triangles)`.
    pub fn into_parts(self) -> (Vec<Vec3>, Vec<Vec3>, Vec<Vec2>, Vec<u32>) {
        (self.vertices, self.normals, self.uvs, self.triangles)
    }

    /// Validates the buffers for correctness.
    ///
    /// Checks:
    /// - Normals and UVs are index-aligned with vertices
    /// - Index count is a multiple of 3 and every index is in range
    /// - All values are finite and every normal has unit length
    /// - No triangle is degenerate (zero area)
    pub fn validate(&self) -> MeshResult<()> {
        let count = self.vertices.len();
        if self.normals.len() != count || self.uvs.len() != count {
            return Err(MeshError::invalid_mesh(format!(
                "buffer lengths differ: {} vertices, {} normals, {} uvs",
                count,
                self.normals.len(),
                self.uvs.len()
            )));
        }

        if self.triangles.len() % 3 != 0 {
            return Err(MeshError::invalid_mesh(format!(
                "index count {} is not a multiple of 3",
                self.triangles.len()
            )));
        }

        if let Some(index) = self.triangles.iter().find(|&&i| i as usize >= count) {
            return Err(MeshError::invalid_mesh(format!(
                "index {index} out of range for {count} vertices"
            )));
        }

        for (i, ((position, normal), uv)) in self
            .vertices
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .enumerate()
        {
            if !position.is_finite() || !normal.is_finite() || !uv.is_finite() {
                return Err(MeshError::invalid_mesh(format!("vertex {i} is not finite")));
            }
            if (normal.length() - 1.0).abs() > NORMAL_LENGTH_TOLERANCE {
                return Err(MeshError::invalid_mesh(format!(
                    "normal {i} has length {}",
                    normal.length()
                )));
            }
        }

        if let Some(t) = self.find_degenerate_triangle() {
            let [a, b, c] = self.triangle(t);
            return Err(MeshError::invalid_mesh(format!(
                "triangle {t} ({a}, {b}, {c}) is degenerate"
            )));
        }

        Ok(())
    }

    /// Index of the first triangle whose doubled area is at most
    /// `DEGENERATE_AREA_EPSILON`.
    ///
    /// Indices must already be in range.
    pub(crate) fn find_degenerate_triangle(&self) -> Option<usize> {
        self.triangle_iter().position(|[a, b, c]| {
            let v0 = self.vertices[a as usize];
            let v1 = self.vertices[b as usize];
            let v2 = self.vertices[c as usize];
            (v1 - v0).cross(v2 - v0).length() <= DEGENERATE_AREA_EPSILON
        })
    }

    /// Exports vertices as a flat f32 array for GPU upload.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.to_array()).collect()
    }

    /// Exports normals as a flat f32 array for GPU upload.
    pub fn normals_f32(&self) -> Vec<f32> {
        self.normals.iter().flat_map(|n| n.to_array()).collect()
    }

    /// Exports UVs as a flat f32 array for GPU upload.
    pub fn uvs_f32(&self) -> Vec<f32> {
        self.uvs.iter().flat_map(|uv| uv.to_array()).collect()
    }
}

fn reservation_len(buffer: &'static str, requested: u64) -> MeshResult<usize> {
    usize::try_from(requested).map_err(|_| MeshError::AllocationFailure { buffer, requested })
}

fn reserve<T>(buffer: &mut Vec<T>, len: usize, name: &'static str) -> MeshResult<()> {
    buffer
        .try_reserve_exact(len)
        .map_err(|_| MeshError::AllocationFailure {
            buffer: name,
            requested: len as u64,
        })
}
