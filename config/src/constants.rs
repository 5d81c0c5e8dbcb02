//! # Configuration Constants
//!
//! Centralized constants for primitive mesh generation. Shape defaults,
//! editor clamp ranges, lattice resolution and tolerances are defined here.
//!
//! ## Categories
//!
//! - **Defaults**: Values restored by a parameter reset
//! - **Ranges**: Inclusive bounds mirrored from the parameter inspector sliders
//! - **Precision**: Floating-point comparison tolerances
//! - **Limits**: Hard bounds imposed by the output format

use std::ops::RangeInclusive;

// =============================================================================
// PLANE CONSTANTS
// =============================================================================

/// Default plane extent along Z.
pub const PLANE_DEFAULT_LENGTH: f32 = 1.0;

/// Default plane extent along X.
pub const PLANE_DEFAULT_WIDTH: f32 = 1.0;

/// Vertex count along each plane axis.
///
/// Two is the minimum lattice producing a single quad. The builder is
/// written against this value rather than the literal so the lattice
/// arithmetic stays general.
///
/// # Example
///
/// ```rust
/// use config::constants::PLANE_RESOLUTION;
///
/// let faces = (PLANE_RESOLUTION - 1) * (PLANE_RESOLUTION - 1);
/// assert_eq!(faces, 1);
/// ```
pub const PLANE_RESOLUTION: u32 = 2;

/// Inspector range for plane length and width.
pub const PLANE_SIZE_RANGE: RangeInclusive<f32> = 1.0..=10.0;

// =============================================================================
// CUBE CONSTANTS
// =============================================================================

/// Default cube extent along X.
pub const CUBE_DEFAULT_LENGTH: f32 = 1.0;

/// Default cube extent along Y.
pub const CUBE_DEFAULT_WIDTH: f32 = 1.0;

/// Default cube extent along Z.
pub const CUBE_DEFAULT_HEIGHT: f32 = 1.0;

/// Inspector range for every cube dimension.
pub const CUBE_SIZE_RANGE: RangeInclusive<f32> = 0.1..=10.0;

// =============================================================================
// SPHERE CONSTANTS
// =============================================================================

/// Default sphere radius.
pub const SPHERE_DEFAULT_RADIUS: f32 = 1.0;

/// Default number of longitude steps around the Y axis.
pub const SPHERE_DEFAULT_LONGITUDE: u32 = 24;

/// Default number of latitude rings between the poles.
pub const SPHERE_DEFAULT_LATITUDE: u32 = 16;

/// Inspector range for the sphere radius.
pub const SPHERE_RADIUS_RANGE: RangeInclusive<f32> = 0.1..=5.0;

/// Smallest longitude count that closes a ring around the axis.
pub const SPHERE_MIN_LONGITUDE: u32 = 3;

/// Smallest latitude count (a single ring between the poles).
pub const SPHERE_MIN_LATITUDE: u32 = 1;

/// Inspector range for the sphere longitude count.
///
/// The inspector slider starts at 1, which folds the surface onto itself,
/// so the lower bound is raised to [`SPHERE_MIN_LONGITUDE`].
pub const SPHERE_LONGITUDE_RANGE: RangeInclusive<u32> = SPHERE_MIN_LONGITUDE..=100;

/// Inspector range for the sphere latitude count.
pub const SPHERE_LATITUDE_RANGE: RangeInclusive<u32> = 4..=100;

// =============================================================================
// CONE CONSTANTS
// =============================================================================

/// Default cone height.
pub const CONE_DEFAULT_HEIGHT: f32 = 1.0;

/// Default radius of the cone cap at `y = 0`.
pub const CONE_DEFAULT_BOTTOM_RADIUS: f32 = 0.25;

/// Default radius of the cone cap at `y = height`.
pub const CONE_DEFAULT_TOP_RADIUS: f32 = 0.05;

/// Default number of side segments.
pub const CONE_DEFAULT_SIDES: u32 = 18;

/// Smallest side count that still encloses an area.
pub const CONE_MIN_SIDES: u32 = 3;

/// Inspector range for the cone height.
pub const CONE_HEIGHT_RANGE: RangeInclusive<f32> = 0.1..=10.0;

/// Inspector range for both cone radii.
pub const CONE_RADIUS_RANGE: RangeInclusive<f32> = 0.0..=10.0;

/// Inspector range for the cone side count.
pub const CONE_SIDES_RANGE: RangeInclusive<u32> = 8..=28;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Allowed deviation of a normal's length from 1.
///
/// # Example
///
/// ```rust
/// use config::constants::NORMAL_LENGTH_TOLERANCE;
///
/// let length: f32 = 1.0 + 1e-7;
/// assert!((length - 1.0).abs() <= NORMAL_LENGTH_TOLERANCE);
/// ```
pub const NORMAL_LENGTH_TOLERANCE: f32 = 1e-5;

/// Twice-area below which a triangle counts as degenerate.
pub const DEGENERATE_AREA_EPSILON: f32 = 1e-12;

/// Smallest accepted length, width, height or non-zero radius.
///
/// Below this, cap and face triangles fall under
/// [`DEGENERATE_AREA_EPSILON`] in `f32`.
pub const MIN_EXTENT: f32 = 1e-4;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Largest vertex count addressable by the `u32` index buffer.
pub const MAX_INDEXABLE_VERTICES: usize = u32::MAX as usize;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps a float into an inspector range.
///
/// NaN maps to the lower bound so a clamped value is always finite.
///
/// # Example
///
/// ```rust
/// use config::constants::{clamp_f32, CUBE_SIZE_RANGE};
///
/// assert_eq!(clamp_f32(0.0, CUBE_SIZE_RANGE), 0.1);
/// assert_eq!(clamp_f32(f32::NAN, CUBE_SIZE_RANGE), 0.1);
/// assert_eq!(clamp_f32(3.0, CUBE_SIZE_RANGE), 3.0);
/// ```
#[inline]
pub fn clamp_f32(value: f32, range: RangeInclusive<f32>) -> f32 {
    let (min, max) = range.into_inner();
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Clamps an integer count into an inspector range.
///
/// # Example
///
/// ```rust
/// use config::constants::{clamp_u32, CONE_SIDES_RANGE};
///
/// assert_eq!(clamp_u32(3, CONE_SIDES_RANGE), 8);
/// assert_eq!(clamp_u32(64, CONE_SIDES_RANGE), 28);
/// ```
#[inline]
pub fn clamp_u32(value: u32, range: RangeInclusive<u32>) -> u32 {
    let (min, max) = range.into_inner();
    value.clamp(min, max)
}
