use crate::scene::{Scene, ShapeId};

use super::{create_default_circle, ShapeFactory};

/// Monochrome family: colorless points, default-colored circles.
#[derive(Debug, Copy, Clone, Default)]
pub struct BwFactory;

impl BwFactory {
    pub const POINT: (i32, i32) = (1, 1);
}

impl ShapeFactory for BwFactory {
    fn create_point(&self, scene: &mut Scene) -> ShapeId {
        let (x, y) = Self::POINT;
        let id = scene.add_bw_point(x, y);
        log::debug!("bw factory: point {id}");
        id
    }

    fn create_circle(&self, scene: &mut Scene) -> ShapeId {
        let id = create_default_circle(scene);
        log::debug!("bw factory: circle {id}");
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_scenario_draws_without_color() {
        let mut scene = Scene::new();
        let id = BwFactory.create_point(&mut scene);
        assert_eq!(scene.render(), "BWPoint (1, 1)\n");

        let p = scene.bw_point_mut(id).unwrap();
        p.set_x(50);
        p.set_y(60);
        assert_eq!(scene.render(), "BWPoint (50, 60)\n");
        assert_eq!(scene.get(id).unwrap().color(), None);
    }
}
