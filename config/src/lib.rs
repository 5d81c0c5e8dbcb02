//! # Config Crate
//!
//! Centralized configuration constants for the procedural primitive mesh
//! generator. Shape defaults, the editor clamp ranges and numeric
//! tolerances are defined here so the builders never carry literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{clamp_f32, SPHERE_DEFAULT_RADIUS, SPHERE_RADIUS_RANGE};
//!
//! let radius = clamp_f32(42.0, SPHERE_RADIUS_RANGE);
//! assert_eq!(radius, 5.0);
//! assert!(SPHERE_RADIUS_RANGE.contains(&SPHERE_DEFAULT_RADIUS));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Editor Compatible**: Clamp ranges match the parameter inspector sliders
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
