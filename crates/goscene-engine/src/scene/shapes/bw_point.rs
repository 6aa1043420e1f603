use std::fmt;

use crate::coords::Coords;
use crate::scene::{Scene, Shape, ShapeId};

/// Colorless point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BwPoint {
    coords: Coords,
}

impl BwPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { coords: Coords::new(x, y) }
    }

    #[inline]
    pub fn coords(&self) -> Coords {
        self.coords
    }

    #[inline]
    pub fn coords_mut(&mut self) -> &mut Coords {
        &mut self.coords
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.coords.x()
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.coords.y()
    }

    #[inline]
    pub fn set_x(&mut self, x: i32) {
        self.coords.set_x(x);
    }

    #[inline]
    pub fn set_y(&mut self, y: i32) {
        self.coords.set_y(y);
    }
}

impl fmt::Display for BwPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BWPoint ({}, {})", self.x(), self.y())
    }
}

impl Scene {
    /// Registers a colorless point at `(x, y)`.
    #[inline]
    pub fn add_bw_point(&mut self, x: i32, y: i32) -> ShapeId {
        self.add(Shape::BwPoint(BwPoint::new(x, y)))
    }
}
