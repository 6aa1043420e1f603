use std::fmt;

use crate::coords::Coords;
use crate::scene::{Scene, Shape, ShapeId};

use super::{BwPoint, DEFAULT_COLOR};

/// Colored point: a [`BwPoint`]'s position plus a color name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    base: BwPoint,
    color: String,
}

impl Point {
    /// Point at `(x, y)` painted with [`DEFAULT_COLOR`].
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self::with_color(x, y, DEFAULT_COLOR)
    }

    #[inline]
    pub fn with_color(x: i32, y: i32, color: impl Into<String>) -> Self {
        Self { base: BwPoint::new(x, y), color: color.into() }
    }

    #[inline]
    pub fn coords(&self) -> Coords {
        self.base.coords()
    }

    #[inline]
    pub fn coords_mut(&mut self) -> &mut Coords {
        self.base.coords_mut()
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.base.x()
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.base.y()
    }

    #[inline]
    pub fn set_x(&mut self, x: i32) {
        self.base.set_x(x);
    }

    #[inline]
    pub fn set_y(&mut self, y: i32) {
        self.base.set_y(y);
    }

    #[inline]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[inline]
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Drops the color, keeping only the position.
    #[inline]
    pub fn to_bw(&self) -> BwPoint {
        self.base.clone()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point ({}, {}) {}", self.x(), self.y(), self.color)
    }
}

impl Scene {
    /// Registers a colored point.
    #[inline]
    pub fn add_point(&mut self, x: i32, y: i32, color: impl Into<String>) -> ShapeId {
        self.add(Shape::Point(Point::with_color(x, y, color)))
    }
}
