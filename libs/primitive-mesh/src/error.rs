//! # Mesh Errors
//!
//! Error types for primitive mesh generation.
//!
//! ## Error Policy
//!
//! - Invalid parameters are rejected before any buffer is allocated
//! - A failed generation never hands partial buffers to the caller
//! - Errors carry the shape and field that caused them

use crate::shape::ShapeKind;
use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A shape parameter lies outside its domain.
    #[error("Invalid {shape} parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Shape the parameter belongs to
        shape: ShapeKind,
        /// Field name
        name: &'static str,
        /// Offending value
        value: f64,
        /// Rule the value broke
        reason: &'static str,
    },

    /// Dispatch was given parameters for a different shape.
    #[error("Shape kind mismatch: requested {expected}, parameters describe {found}")]
    ShapeKindMismatch {
        /// Kind the caller asked for
        expected: ShapeKind,
        /// Kind of the supplied parameter record
        found: ShapeKind,
    },

    /// Output buffers could not be reserved.
    #[error("Allocation failed: could not reserve {requested} {buffer}")]
    AllocationFailure {
        /// Buffer being reserved
        buffer: &'static str,
        /// Requested element count
        requested: u64,
    },

    /// Vertex count exceeds what a `u32` index buffer can address.
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: u64, max: u64 },

    /// Mesh buffers violate a structural invariant.
    #[error("Invalid mesh: {message}")]
    InvalidMesh { message: String },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(
        shape: ShapeKind,
        name: &'static str,
        value: impl Into<f64>,
        reason: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            shape,
            name,
            value: value.into(),
            reason,
        }
    }

    /// Creates an invalid mesh error.
    pub fn invalid_mesh(message: impl Into<String>) -> Self {
        Self::InvalidMesh {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;
