use crate::scene::shapes::Point;
use crate::scene::{Scene, ShapeId};

use super::{create_default_circle, ShapeFactory};

/// Color family: points cloned from a template, default-colored circles.
#[derive(Debug, Clone, Default)]
pub struct ColorFactory {
    template: Point,
}

impl ColorFactory {
    /// Factory whose template is `Point (0, 0)` in the default color.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory that stamps copies of `template`.
    #[inline]
    pub fn with_template(template: Point) -> Self {
        Self { template }
    }

    #[inline]
    pub fn template(&self) -> &Point {
        &self.template
    }
}

impl ShapeFactory for ColorFactory {
    fn create_point(&self, scene: &mut Scene) -> ShapeId {
        let id = scene.add(self.template.clone());
        log::debug!("color factory: point {id} from template");
        id
    }

    fn create_circle(&self, scene: &mut Scene) -> ShapeId {
        let id = create_default_circle(scene);
        log::debug!("color factory: circle {id}");
        id
    }
}
