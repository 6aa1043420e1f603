mod bw_point;
mod circle;
mod point;

pub use bw_point::BwPoint;
pub use circle::Circle;
pub use point::Point;

/// Color used by shapes constructed without an explicit one.
pub const DEFAULT_COLOR: &str = "black";
