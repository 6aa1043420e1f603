use std::fmt;
use std::io;

use crate::coords::Coords;
use crate::scene::shapes::{BwPoint, Circle, Point};

/// Shape discriminant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    BwPoint,
    Point,
    Circle,
}

impl ShapeKind {
    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::BwPoint => "BWPoint",
            ShapeKind::Point => "Point",
            ShapeKind::Circle => "Circle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any drawable entity held by a [`Scene`](crate::scene::Scene).
///
/// Extending the set of shapes:
/// - add a payload module under `scene::shapes::*`
/// - add a variant here and a matching [`ShapeKind`]
/// - add an `add_*` helper on `Scene` inside that shape module
///
/// `Clone` yields a fully independent value; nothing is shared between a
/// shape and its copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    BwPoint(BwPoint),
    Point(Point),
    Circle(Circle),
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::BwPoint(_) => ShapeKind::BwPoint,
            Shape::Point(_) => ShapeKind::Point,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    /// Position of the shape (the center, for circles).
    #[inline]
    pub fn coords(&self) -> Coords {
        match self {
            Shape::BwPoint(p) => p.coords(),
            Shape::Point(p) => p.coords(),
            Shape::Circle(c) => c.center(),
        }
    }

    #[inline]
    pub fn coords_mut(&mut self) -> &mut Coords {
        match self {
            Shape::BwPoint(p) => p.coords_mut(),
            Shape::Point(p) => p.coords_mut(),
            Shape::Circle(c) => c.center_mut(),
        }
    }

    #[inline]
    pub fn set_x(&mut self, x: i32) {
        self.coords_mut().set_x(x);
    }

    #[inline]
    pub fn set_y(&mut self, y: i32) {
        self.coords_mut().set_y(y);
    }

    /// Color name, or `None` for colorless shapes.
    #[inline]
    pub fn color(&self) -> Option<&str> {
        match self {
            Shape::BwPoint(_) => None,
            Shape::Point(p) => Some(p.color()),
            Shape::Circle(c) => Some(c.color()),
        }
    }

    #[inline]
    pub fn as_bw_point(&self) -> Option<&BwPoint> {
        match self {
            Shape::BwPoint(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bw_point_mut(&mut self) -> Option<&mut BwPoint> {
        match self {
            Shape::BwPoint(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Shape::Point(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn as_point_mut(&mut self) -> Option<&mut Point> {
        match self {
            Shape::Point(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(c) => Some(c),
            _ => None,
        }
    }

    #[inline]
    pub fn as_circle_mut(&mut self) -> Option<&mut Circle> {
        match self {
            Shape::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// Writes a single line describing the shape.
    pub fn draw<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::BwPoint(p) => fmt::Display::fmt(p, f),
            Shape::Point(p) => fmt::Display::fmt(p, f),
            Shape::Circle(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl From<BwPoint> for Shape {
    #[inline]
    fn from(p: BwPoint) -> Self {
        Shape::BwPoint(p)
    }
}

impl From<Point> for Shape {
    #[inline]
    fn from(p: Point) -> Self {
        Shape::Point(p)
    }
}

impl From<Circle> for Shape {
    #[inline]
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_to_string(shape: &Shape) -> String {
        let mut buf = Vec::new();
        shape.draw(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // ── draw ──────────────────────────────────────────────────────────────

    #[test]
    fn draw_bw_point_has_no_color() {
        let s = Shape::from(BwPoint::new(50, 60));
        assert_eq!(draw_to_string(&s), "BWPoint (50, 60)\n");
        assert_eq!(s.color(), None);
    }

    #[test]
    fn draw_point() {
        let s = Shape::from(Point::with_color(10, 20, "red"));
        assert_eq!(draw_to_string(&s), "Point (10, 20) red\n");
    }

    #[test]
    fn draw_circle() {
        let s = Shape::from(Circle::with_color(30, 40, 5, "blue"));
        assert_eq!(draw_to_string(&s), "Circle (30, 40) R: 5 blue\n");
    }

    // ── dispatch ──────────────────────────────────────────────────────────

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Shape::from(BwPoint::new(0, 0)).kind(), ShapeKind::BwPoint);
        assert_eq!(Shape::from(Point::new(0, 0)).kind(), ShapeKind::Point);
        assert_eq!(Shape::from(Circle::new(0, 0, 1)).kind(), ShapeKind::Circle);
    }

    #[test]
    fn set_xy_moves_every_variant() {
        let mut shapes = [
            Shape::from(BwPoint::new(0, 0)),
            Shape::from(Point::new(0, 0)),
            Shape::from(Circle::new(0, 0, 1)),
        ];
        for s in &mut shapes {
            s.set_x(7);
            s.set_y(-8);
            assert_eq!(s.coords(), Coords::new(7, -8));
        }
    }

    #[test]
    fn typed_views_reject_other_kinds() {
        let mut s = Shape::from(Circle::new(0, 0, 1));
        assert!(s.as_point().is_none());
        assert!(s.as_bw_point_mut().is_none());
        s.as_circle_mut().unwrap().set_radius(12);
        assert_eq!(s.as_circle().unwrap().radius(), 12);
    }

    #[test]
    fn shape_clone_is_independent() {
        let original = Shape::from(Point::with_color(1, 1, "green"));
        let mut copy = original.clone();
        copy.as_point_mut().unwrap().set_color("purple");
        copy.set_x(2);
        assert_eq!(original.to_string(), "Point (1, 1) green");
        assert_eq!(copy.to_string(), "Point (2, 1) purple");
    }
}
