//! goscene engine crate.
//!
//! Shape model (points, colored points, circles), the [`Scene`](scene::Scene)
//! registry that owns and draws them in insertion order, and the factories
//! that build themed shape families into a scene.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Coords` |
//! | [`scene`] | `Scene`, `Shape`, `ShapeKind`, `ShapeId`, payloads under `scene::shapes` |
//! | [`factory`] | `ShapeFactory`, `BwFactory`, `ColorFactory` |
//! | [`error`] | `SceneError` |
//! | [`logging`] | `init_logging`, `LoggingConfig` |

pub mod coords;
pub mod error;
pub mod factory;
pub mod logging;
pub mod scene;

pub use error::SceneError;
