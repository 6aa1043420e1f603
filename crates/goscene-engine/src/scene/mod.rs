//! Shape model and the scene registry that owns shapes.
//!
//! Responsibilities:
//! - the [`Shape`] sum type and its per-variant payloads under `scene::shapes`
//! - deterministic draw order (insertion order)
//! - arena-style [`ShapeId`] handles that go stale on [`Scene::clear`]

mod id;
mod registry;
mod shape;

pub mod shapes;

pub use id::ShapeId;
pub use registry::Scene;
pub use shape::{Shape, ShapeKind};
