//! # Shape Registry
//!
//! Holds one parameter record per shape kind and the currently selected
//! kind, the state an inspector edits between generations.

use crate::dispatch::generate;
use crate::error::MeshResult;
use crate::mesh::MeshBuffers;
use crate::primitives::{ConeParameters, CubeParameters, PlaneParameters, SphereParameters};
use crate::shape::{GeometryBuilder, ShapeKind, ShapeParameters};
use crate::sink::MeshSink;
use serde::{Deserialize, Serialize};

/// Parameter state for every shape kind.
///
/// Editing a record never regenerates anything; callers decide when to
/// call [`generate_selected`](Self::generate_selected) or
/// [`publish`](Self::publish).
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{ShapeKind, ShapeRegistry};
///
/// let mut registry = ShapeRegistry::new();
/// registry.select(ShapeKind::Sphere);
/// registry.sphere_mut().longitude = 8;
/// registry.sphere_mut().latitude = 4;
///
/// let mut latest = None;
/// registry.publish(&mut latest).unwrap();
/// assert_eq!(latest.unwrap().vertex_count(), 38);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeRegistry {
    selected: ShapeKind,
    plane: PlaneParameters,
    cube: CubeParameters,
    sphere: SphereParameters,
    cone: ConeParameters,
}

impl ShapeRegistry {
    /// Creates a registry with default parameters and the plane selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected shape kind.
    pub fn selected(&self) -> ShapeKind {
        self.selected
    }

    /// Selects the shape kind used by [`generate_selected`](Self::generate_selected).
    pub fn select(&mut self, kind: ShapeKind) {
        self.selected = kind;
    }

    /// Returns a copy of the record for `kind`.
    pub fn parameters(&self, kind: ShapeKind) -> ShapeParameters {
        match kind {
            ShapeKind::Plane => self.plane.into(),
            ShapeKind::Cube => self.cube.into(),
            ShapeKind::Sphere => self.sphere.into(),
            ShapeKind::Cone => self.cone.into(),
        }
    }

    /// Replaces the record of the given parameters' kind.
    pub fn set(&mut self, params: impl Into<ShapeParameters>) {
        match params.into() {
            ShapeParameters::Plane(p) => self.plane = p,
            ShapeParameters::Cube(p) => self.cube = p,
            ShapeParameters::Sphere(p) => self.sphere = p,
            ShapeParameters::Cone(p) => self.cone = p,
        }
    }

    /// Mutable access to the stored plane record.
    pub fn plane_mut(&mut self) -> &mut PlaneParameters {
        &mut self.plane
    }

    /// Mutable access to the stored cube record.
    pub fn cube_mut(&mut self) -> &mut CubeParameters {
        &mut self.cube
    }

    /// Mutable access to the stored sphere record.
    pub fn sphere_mut(&mut self) -> &mut SphereParameters {
        &mut self.sphere
    }

    /// Mutable access to the stored cone record.
    pub fn cone_mut(&mut self) -> &mut ConeParameters {
        &mut self.cone
    }

    /// Restores the defaults of one kind.
    pub fn reset(&mut self, kind: ShapeKind) {
        match kind {
            ShapeKind::Plane => self.plane.reset(),
            ShapeKind::Cube => self.cube.reset(),
            ShapeKind::Sphere => self.sphere.reset(),
            ShapeKind::Cone => self.cone.reset(),
        }
    }

    /// Restores the defaults of every kind. The selection is kept.
    pub fn reset_all(&mut self) {
        for kind in ShapeKind::ALL {
            self.reset(kind);
        }
    }

    /// Clamps every record into the inspector ranges.
    pub fn clamp_all(&mut self) {
        self.plane = self.plane.clamped();
        self.cube = self.cube.clamped();
        self.sphere = self.sphere.clamped();
        self.cone = self.cone.clamped();
    }

    /// Generates the mesh for `kind` from its stored record.
    pub fn generate(&self, kind: ShapeKind) -> MeshResult<MeshBuffers> {
        generate(kind, &self.parameters(kind))
    }

    /// Generates the mesh for the selected kind.
    pub fn generate_selected(&self) -> MeshResult<MeshBuffers> {
        self.generate(self.selected)
    }

    /// Generates the selected mesh and hands it to `sink`.
    pub fn publish<S>(&self, sink: &mut S) -> MeshResult<()>
    where
        S: MeshSink + ?Sized,
    {
        let mesh = self.generate_selected()?;
        sink.on_mesh_ready(mesh);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_defaults() {
        let registry = ShapeRegistry::new();
        assert_eq!(registry.selected(), ShapeKind::Plane);
        for kind in ShapeKind::ALL {
            assert_eq!(registry.parameters(kind), ShapeParameters::defaults(kind));
        }
    }

    #[test]
    fn test_registry_set_replaces_matching_kind() {
        let mut registry = ShapeRegistry::new();
        registry.set(CubeParameters::new(2.0, 3.0, 4.0));
        assert_eq!(
            registry.parameters(ShapeKind::Cube),
            ShapeParameters::Cube(CubeParameters::new(2.0, 3.0, 4.0))
        );
        assert_eq!(
            registry.parameters(ShapeKind::Plane),
            ShapeParameters::defaults(ShapeKind::Plane)
        );
    }

    #[test]
    fn test_registry_reset_single_kind() {
        let mut registry = ShapeRegistry::new();
        registry.cone_mut().number_of_sides = 5;
        registry.plane_mut().width = 7.0;
        registry.reset(ShapeKind::Cone);
        assert_eq!(
            registry.parameters(ShapeKind::Cone),
            ShapeParameters::defaults(ShapeKind::Cone)
        );
        assert_eq!(registry.plane_mut().width, 7.0);
    }

    #[test]
    fn test_registry_reset_all_keeps_selection() {
        let mut registry = ShapeRegistry::new();
        registry.select(ShapeKind::Cone);
        registry.plane_mut().length = 3.0;
        registry.cube_mut().height = 3.0;
        registry.sphere_mut().radius = 3.0;
        registry.cone_mut().height = 3.0;
        registry.reset_all();
        assert_eq!(registry.selected(), ShapeKind::Cone);
        assert_eq!(registry, {
            let mut fresh = ShapeRegistry::new();
            fresh.select(ShapeKind::Cone);
            fresh
        });
    }

    #[test]
    fn test_registry_clamp_all() {
        let mut registry = ShapeRegistry::new();
        registry.sphere_mut().latitude = 1;
        registry.cone_mut().number_of_sides = 100;
        registry.clamp_all();
        assert_eq!(registry.sphere_mut().latitude, 4);
        assert_eq!(registry.cone_mut().number_of_sides, 28);
    }

    #[test]
    fn test_registry_generate_selected() {
        let mut registry = ShapeRegistry::new();
        registry.select(ShapeKind::Cube);
        assert_eq!(registry.generate_selected().unwrap().vertex_count(), 24);
    }

    #[test]
    fn test_registry_publish_error_leaves_sink_untouched() {
        let mut registry = ShapeRegistry::new();
        registry.select(ShapeKind::Sphere);
        registry.sphere_mut().radius = -1.0;
        let mut received: Vec<MeshBuffers> = Vec::new();
        assert!(registry.publish(&mut received).is_err());
        assert!(received.is_empty());
    }

    #[test]
    fn test_registry_serde_roundtrip() {
        let mut registry = ShapeRegistry::new();
        registry.select(ShapeKind::Sphere);
        registry.sphere_mut().longitude = 32;
        let json = serde_json::to_string(&registry).unwrap();
        let back: ShapeRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, registry);
    }
}
