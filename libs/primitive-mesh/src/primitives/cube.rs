//! # Cube Primitive
//!
//! Generates a box with flat-shaded faces. Faces share no vertices, so every
//! face carries its own normal and a full unit-square UV layout.

use super::{clamp_field, require_extent};
use crate::error::MeshResult;
use crate::mesh::MeshBuffers;
use crate::shape::{GeometryBuilder, ShapeKind};
use config::constants::{
    CUBE_DEFAULT_HEIGHT, CUBE_DEFAULT_LENGTH, CUBE_DEFAULT_WIDTH, CUBE_SIZE_RANGE,
};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Corner indices and outward normal of each face, in emission order:
/// bottom, left, front, back, right, top.
const FACES: [([usize; 4], Vec3); 6] = [
    ([0, 1, 2, 3], Vec3::NEG_Y),
    ([7, 4, 0, 3], Vec3::NEG_X),
    ([4, 5, 1, 0], Vec3::Z),
    ([6, 7, 3, 2], Vec3::NEG_Z),
    ([5, 6, 2, 1], Vec3::X),
    ([7, 6, 5, 4], Vec3::Y),
];

/// UV of each face corner, repeated on every face.
const FACE_UVS: [Vec2; 4] = [Vec2::ONE, Vec2::Y, Vec2::ZERO, Vec2::X];

/// Local corner triangles, offset by `4 * face`.
const FACE_TRIANGLES: [[u32; 3]; 2] = [[3, 1, 0], [3, 2, 1]];

/// Box dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeParameters {
    /// Extent along X
    pub length: f32,
    /// Extent along Y
    pub width: f32,
    /// Extent along Z
    pub height: f32,
}

impl CubeParameters {
    /// Creates cube parameters.
    pub fn new(length: f32, width: f32, height: f32) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// The eight box corners, bottom ring (`-Y`) first.
    fn corners(&self) -> [Vec3; 8] {
        let h = Vec3::new(self.length, self.width, self.height) * 0.5;
        [
            Vec3::new(-h.x, -h.y, h.z),
            Vec3::new(h.x, -h.y, h.z),
            Vec3::new(h.x, -h.y, -h.z),
            Vec3::new(-h.x, -h.y, -h.z),
            Vec3::new(-h.x, h.y, h.z),
            Vec3::new(h.x, h.y, h.z),
            Vec3::new(h.x, h.y, -h.z),
            Vec3::new(-h.x, h.y, -h.z),
        ]
    }
}

impl Default for CubeParameters {
    fn default() -> Self {
        Self::new(CUBE_DEFAULT_LENGTH, CUBE_DEFAULT_WIDTH, CUBE_DEFAULT_HEIGHT)
    }
}

impl GeometryBuilder for CubeParameters {
    const KIND: ShapeKind = ShapeKind::Cube;

    fn vertex_count(&self) -> u64 {
        (FACES.len() * 4) as u64
    }

    fn triangle_count(&self) -> u64 {
        (FACES.len() * FACE_TRIANGLES.len()) as u64
    }

    fn validate(&self) -> MeshResult<()> {
        require_extent(Self::KIND, "length", self.length)?;
        require_extent(Self::KIND, "width", self.width)?;
        require_extent(Self::KIND, "height", self.height)
    }

    fn clamped(&self) -> Self {
        Self {
            length: clamp_field(Self::KIND, "length", self.length, CUBE_SIZE_RANGE),
            width: clamp_field(Self::KIND, "width", self.width, CUBE_SIZE_RANGE),
            height: clamp_field(Self::KIND, "height", self.height, CUBE_SIZE_RANGE),
        }
    }

    fn build(&self) -> MeshResult<MeshBuffers> {
        self.validate()?;
        let mut mesh = MeshBuffers::with_capacity(self.vertex_count(), self.triangle_count())?;
        let corners = self.corners();

        for (corner_indices, normal) in FACES {
            for (corner, uv) in corner_indices.into_iter().zip(FACE_UVS) {
                mesh.push_vertex(corners[corner], normal, uv);
            }
        }

        for face in 0..FACES.len() as u32 {
            let base = face * 4;
            for [a, b, c] in FACE_TRIANGLES {
                mesh.push_triangle(base + a, base + b, base + c);
            }
        }

        Ok(mesh)
    }
}
