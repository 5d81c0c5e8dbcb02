//! # Cone Primitive
//!
//! Generates a capped cone or frustum standing on the XZ plane, from
//! `y = 0` (bottom radius) to `y = height` (top radius).
//!
//! ## Layout
//!
//! ```text
//! 0                      bottom center
//! 1 ..= n                bottom ring
//! n + 1                  top center
//! n + 2 ..= 2n + 1       top ring
//! 2n + 2 ..= 4n + 3      side pairs (top, bottom) for k = 0..=n
//! ```
//!
//! Side vertices repeat the ring positions with a radial normal so the
//! seam between caps and sides stays hard. Side pair `n` repeats pair 0 to
//! close the texture seam at `u = 1`.
//!
//! The side normal is `(cos θ, 0, sin θ)` whatever the taper: shading on a
//! strongly tapered cone is approximate.
//!
//! A zero radius collapses its ring onto the axis. The collapsed cap and
//! the side triangles with an edge on that ring are not emitted; the
//! vertices stay so the layout does not depend on the radii.

use super::{
    clamp_count, clamp_field, reject_degenerate, require_at_least, require_extent,
    require_extent_or_zero,
};
use crate::error::{MeshError, MeshResult};
use crate::mesh::MeshBuffers;
use crate::shape::{GeometryBuilder, ShapeKind};
use config::constants::{
    CONE_DEFAULT_BOTTOM_RADIUS, CONE_DEFAULT_HEIGHT, CONE_DEFAULT_SIDES, CONE_DEFAULT_TOP_RADIUS,
    CONE_HEIGHT_RANGE, CONE_MIN_SIDES, CONE_RADIUS_RANGE, CONE_SIDES_RANGE,
};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

const CAP_CENTER_UV: Vec2 = Vec2::splat(0.5);

/// Cone height, radii and side count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeParameters {
    pub height: f32,
    /// Radius of the cap at `y = 0`
    pub bottom_radius: f32,
    /// Radius of the cap at `y = height`
    pub top_radius: f32,
    pub number_of_sides: u32,
}

impl ConeParameters {
    /// Creates cone parameters.
    pub fn new(height: f32, bottom_radius: f32, top_radius: f32, number_of_sides: u32) -> Self {
        Self {
            height,
            bottom_radius,
            top_radius,
            number_of_sides,
        }
    }

    fn has_bottom(&self) -> bool {
        self.bottom_radius > 0.0
    }

    fn has_top(&self) -> bool {
        self.top_radius > 0.0
    }

    /// Smallest non-zero dimension, named.
    fn smallest_extent(&self) -> (&'static str, f32) {
        [
            ("height", self.height),
            ("bottom_radius", self.bottom_radius),
            ("top_radius", self.top_radius),
        ]
        .into_iter()
        .filter(|(_, value)| *value > 0.0)
        .fold(("height", self.height), |smallest, field| {
            if field.1 < smallest.1 {
                field
            } else {
                smallest
            }
        })
    }
}

impl Default for ConeParameters {
    fn default() -> Self {
        Self::new(
            CONE_DEFAULT_HEIGHT,
            CONE_DEFAULT_BOTTOM_RADIUS,
            CONE_DEFAULT_TOP_RADIUS,
            CONE_DEFAULT_SIDES,
        )
    }
}

/// Position on a ring of the given radius at height `y`.
fn ring_point(cos: f32, sin: f32, radius: f32, y: f32) -> Vec3 {
    Vec3::new(cos * radius, y, sin * radius)
}

/// Cap texture coordinate: the unit disk mapped into the unit square.
fn cap_uv(cos: f32, sin: f32) -> Vec2 {
    Vec2::new(cos, sin) * 0.5 + CAP_CENTER_UV
}

impl GeometryBuilder for ConeParameters {
    const KIND: ShapeKind = ShapeKind::Cone;

    fn vertex_count(&self) -> u64 {
        u64::from(self.number_of_sides)
            .saturating_mul(4)
            .saturating_add(4)
    }

    fn triangle_count(&self) -> u64 {
        // Each open ring contributes its cap fan and one triangle per side
        // segment.
        let open_rings = u64::from(self.has_bottom()) + u64::from(self.has_top());
        u64::from(self.number_of_sides).saturating_mul(2 * open_rings)
    }

    fn validate(&self) -> MeshResult<()> {
        require_extent(Self::KIND, "height", self.height)?;
        require_extent_or_zero(Self::KIND, "bottom_radius", self.bottom_radius)?;
        require_extent_or_zero(Self::KIND, "top_radius", self.top_radius)?;
        if !self.has_bottom() && !self.has_top() {
            return Err(MeshError::invalid_parameter(
                Self::KIND,
                "bottom_radius",
                self.bottom_radius,
                "at least one radius must be positive",
            ));
        }
        require_at_least(
            Self::KIND,
            "number_of_sides",
            self.number_of_sides,
            CONE_MIN_SIDES,
            "must be at least 3",
        )
    }

    fn clamped(&self) -> Self {
        Self {
            height: clamp_field(Self::KIND, "height", self.height, CONE_HEIGHT_RANGE),
            bottom_radius: clamp_field(
                Self::KIND,
                "bottom_radius",
                self.bottom_radius,
                CONE_RADIUS_RANGE,
            ),
            top_radius: clamp_field(Self::KIND, "top_radius", self.top_radius, CONE_RADIUS_RANGE),
            number_of_sides: clamp_count(
                Self::KIND,
                "number_of_sides",
                self.number_of_sides,
                CONE_SIDES_RANGE,
            ),
        }
    }

    fn build(&self) -> MeshResult<MeshBuffers> {
        self.validate()?;
        let mut mesh = MeshBuffers::with_capacity(self.vertex_count(), self.triangle_count())?;

        let sides = self.number_of_sides;
        let height = self.height;
        let step = TAU / sides as f32;

        // Bottom cap
        let bottom_center = mesh.push_vertex(Vec3::ZERO, Vec3::NEG_Y, CAP_CENTER_UV);
        for k in 1..=sides {
            let (sin, cos) = (step * k as f32).sin_cos();
            mesh.push_vertex(
                ring_point(cos, sin, self.bottom_radius, 0.0),
                Vec3::NEG_Y,
                cap_uv(cos, sin),
            );
        }

        // Top cap
        let top_center = mesh.push_vertex(Vec3::new(0.0, height, 0.0), Vec3::Y, CAP_CENTER_UV);
        for k in 1..=sides {
            let (sin, cos) = (step * k as f32).sin_cos();
            mesh.push_vertex(
                ring_point(cos, sin, self.top_radius, height),
                Vec3::Y,
                cap_uv(cos, sin),
            );
        }

        // Sides
        let side_start = top_center + sides + 1;
        for k in 0..=sides {
            let angle = if k == sides { 0.0 } else { step * k as f32 };
            let (sin, cos) = angle.sin_cos();
            let normal = Vec3::new(cos, 0.0, sin);
            let u = k as f32 / sides as f32;

            mesh.push_vertex(
                ring_point(cos, sin, self.top_radius, height),
                normal,
                Vec2::new(u, 1.0),
            );
            mesh.push_vertex(
                ring_point(cos, sin, self.bottom_radius, 0.0),
                normal,
                Vec2::new(u, 0.0),
            );
        }

        if self.has_bottom() {
            for k in 0..sides {
                let current = bottom_center + 1 + k;
                let next = bottom_center + 1 + (k + 1) % sides;
                mesh.push_triangle(bottom_center, current, next);
            }
        }

        if self.has_top() {
            // Reversed fan: the top cap faces +Y
            for k in 0..sides {
                let current = top_center + 1 + k;
                let next = top_center + 1 + (k + 1) % sides;
                mesh.push_triangle(next, current, top_center);
            }
        }

        for k in 0..sides {
            let top = side_start + 2 * k;
            let bottom = top + 1;
            let next_top = top + 2;
            let next_bottom = top + 3;

            if self.has_top() {
                mesh.push_triangle(next_top, bottom, top);
            }
            if self.has_bottom() {
                mesh.push_triangle(next_top, next_bottom, bottom);
            }
        }

        let (name, value) = self.smallest_extent();
        reject_degenerate(mesh, Self::KIND, name, value)
    }
}
