use core::num::NonZeroU64;
use std::fmt;
use std::io;

use crate::error::SceneError;
use crate::scene::shapes::{BwPoint, Circle, Point};

use super::{Shape, ShapeId, ShapeKind};

/// Ordered registry of shapes.
///
/// Shapes are owned by value and drawn in insertion order. The scene is an
/// ordinary value: construct one and pass `&mut Scene` to whatever needs to
/// register shapes. It is deliberately not `Clone`.
///
/// ```
/// use goscene_engine::scene::{Scene, shapes::Circle};
///
/// let mut scene = Scene::new();
/// let id = scene.add(Circle::new(0, 0, 1));
/// scene.circle_mut(id).unwrap().set_radius(5);
/// assert_eq!(scene.render(), "Circle (0, 0) R: 5 black\n");
/// ```
#[derive(Debug)]
pub struct Scene {
    shapes: Vec<Shape>,
    generation: NonZeroU64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self { shapes: Vec::new(), generation: NonZeroU64::MIN }
    }

    /// Takes ownership of `shape` and appends it to the draw order.
    pub fn add(&mut self, shape: impl Into<Shape>) -> ShapeId {
        let shape = shape.into();
        let id = ShapeId::new(self.shapes.len(), self.generation);
        log::debug!("scene: added {} as {id}", shape.kind());
        self.shapes.push(shape);
        id
    }

    /// Drops every shape. Handles issued so far become stale.
    ///
    /// The generation saturates at `u64::MAX` rather than wrapping, so an
    /// old handle can only ever match the current generation if the scene
    /// has been cleared more than `u64::MAX - 1` times.
    pub fn clear(&mut self) {
        log::debug!("scene: clearing {} shapes", self.shapes.len());
        self.shapes.clear();
        self.generation = self.generation.saturating_add(1);
    }

    #[cfg(test)]
    fn at_generation(generation: NonZeroU64) -> Self {
        Self { shapes: Vec::new(), generation }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterates shapes in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    #[inline]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.resolve(id).ok().map(|i| &self.shapes[i])
    }

    #[inline]
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.resolve(id).ok().map(|i| &mut self.shapes[i])
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> Result<&mut Shape, SceneError> {
        let index = self.resolve(id)?;
        Ok(&mut self.shapes[index])
    }

    pub fn bw_point_mut(&mut self, id: ShapeId) -> Result<&mut BwPoint, SceneError> {
        let shape = self.shape_mut(id)?;
        let found = shape.kind();
        shape.as_bw_point_mut().ok_or(SceneError::KindMismatch {
            id,
            expected: ShapeKind::BwPoint,
            found,
        })
    }

    pub fn point_mut(&mut self, id: ShapeId) -> Result<&mut Point, SceneError> {
        let shape = self.shape_mut(id)?;
        let found = shape.kind();
        shape.as_point_mut().ok_or(SceneError::KindMismatch {
            id,
            expected: ShapeKind::Point,
            found,
        })
    }

    pub fn circle_mut(&mut self, id: ShapeId) -> Result<&mut Circle, SceneError> {
        let shape = self.shape_mut(id)?;
        let found = shape.kind();
        shape.as_circle_mut().ok_or(SceneError::KindMismatch {
            id,
            expected: ShapeKind::Circle,
            found,
        })
    }

    /// Draws every shape, one line each, in insertion order.
    pub fn draw<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for shape in &self.shapes {
            log::trace!("scene: drawing {}", shape.kind());
            shape.draw(out)?;
        }
        Ok(())
    }

    /// Draws the scene to stdout.
    pub fn draw_stdout(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.draw(&mut lock)
    }

    /// Returns what [`draw`](Self::draw) would write.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn resolve(&self, id: ShapeId) -> Result<usize, SceneError> {
        if id.generation() != self.generation {
            return Err(SceneError::StaleHandle { id });
        }
        let index = id.index();
        if index >= self.shapes.len() {
            return Err(SceneError::OutOfRange { id, len: self.shapes.len() });
        }
        Ok(index)
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for shape in &self.shapes {
            writeln!(f, "{shape}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
