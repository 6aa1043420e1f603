use std::fmt;

use crate::coords::Coords;
use crate::scene::{Scene, Shape, ShapeId};

use super::DEFAULT_COLOR;

/// Circle with an integer center and radius.
///
/// The radius is stored as given; negative values are not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    center: Coords,
    radius: i32,
    color: String,
}

impl Circle {
    /// Circle painted with [`DEFAULT_COLOR`].
    #[inline]
    pub fn new(x: i32, y: i32, radius: i32) -> Self {
        Self::with_color(x, y, radius, DEFAULT_COLOR)
    }

    #[inline]
    pub fn with_color(x: i32, y: i32, radius: i32, color: impl Into<String>) -> Self {
        Self { center: Coords::new(x, y), radius, color: color.into() }
    }

    #[inline]
    pub fn center(&self) -> Coords {
        self.center
    }

    #[inline]
    pub fn center_mut(&mut self) -> &mut Coords {
        &mut self.center
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.center.x()
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.center.y()
    }

    #[inline]
    pub fn set_x(&mut self, x: i32) {
        self.center.set_x(x);
    }

    #[inline]
    pub fn set_y(&mut self, y: i32) {
        self.center.set_y(y);
    }

    #[inline]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    #[inline]
    pub fn set_radius(&mut self, radius: i32) {
        self.radius = radius;
    }

    #[inline]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[inline]
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle ({}, {}) R: {} {}", self.x(), self.y(), self.radius, self.color)
    }
}

impl Scene {
    /// Registers a circle with an explicit color.
    #[inline]
    pub fn add_circle(&mut self, x: i32, y: i32, radius: i32, color: impl Into<String>) -> ShapeId {
        self.add(Shape::Circle(Circle::with_color(x, y, radius, color)))
    }

    /// Registers a circle painted with [`DEFAULT_COLOR`].
    #[inline]
    pub fn add_default_circle(&mut self, x: i32, y: i32, radius: i32) -> ShapeId {
        self.add_circle(x, y, radius, DEFAULT_COLOR)
    }
}
