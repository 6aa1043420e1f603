//! Integer grid coordinates shared by every shape.
//!
//! Origin and axis direction are left to whoever draws the output; the
//! library only stores and prints the values.

mod pos;

pub use pos::Coords;
