//! # Primitive Mesh
//!
//! Procedural mesh generation for parametric primitives: plane, cube,
//! sphere and cone. Each generation returns the four parallel arrays a
//! renderer consumes (positions, normals, UVs, triangle indices).
//!
//! ## Architecture
//!
//! ```text
//! ShapeKind + ShapeParameters → generate() → GeometryBuilder → MeshBuffers → MeshSink
//! ```
//!
//! Generation is pure: no caches, no shared state, fresh buffers on every
//! call. Independent calls can run concurrently (see [`generate_batch`]).
//!
//! ## Usage
//!
//! ```rust
//! use primitive_mesh::{generate, ConeParameters, ShapeKind, ShapeParameters};
//!
//! let params = ShapeParameters::from(ConeParameters::new(2.0, 1.0, 0.5, 16));
//! let mesh = generate(ShapeKind::Cone, &params)?;
//! assert_eq!(mesh.normals().len(), mesh.vertices().len());
//! assert_eq!(mesh.triangles().len() % 3, 0);
//! # Ok::<(), primitive_mesh::MeshError>(())
//! ```

pub mod dispatch;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod registry;
pub mod shape;
pub mod sink;

pub use dispatch::{generate, generate_batch, generate_into};
pub use error::{MeshError, MeshResult};
pub use mesh::MeshBuffers;
pub use primitives::{ConeParameters, CubeParameters, PlaneParameters, SphereParameters};
pub use registry::ShapeRegistry;
pub use shape::{GeometryBuilder, ShapeKind, ShapeParameters};
pub use sink::MeshSink;
