//! Shape factories.
//!
//! A factory builds one themed family of shapes (a point and a circle),
//! registers each new shape into the scene it is handed and returns the
//! handle.
//!
//! ```
//! use goscene_engine::factory::{BwFactory, ShapeFactory};
//! use goscene_engine::scene::Scene;
//!
//! let mut scene = Scene::new();
//! let p = BwFactory.create_point(&mut scene);
//! scene.bw_point_mut(p).unwrap().set_x(50);
//! assert_eq!(scene.render(), "BWPoint (50, 1)\n");
//! ```

mod bw;
mod color;

pub use bw::BwFactory;
pub use color::ColorFactory;

use crate::scene::{Scene, ShapeId};

/// Constructs shapes with factory-specific defaults and registers them.
///
/// Factories never fail.
pub trait ShapeFactory {
    fn create_point(&self, scene: &mut Scene) -> ShapeId;
    fn create_circle(&self, scene: &mut Scene) -> ShapeId;
}

/// Center and radius of the circle every factory starts from.
const DEFAULT_CIRCLE: (i32, i32, i32) = (0, 0, 1);

fn create_default_circle(scene: &mut Scene) -> ShapeId {
    let (x, y, r) = DEFAULT_CIRCLE;
    scene.add_default_circle(x, y, r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ShapeKind;

    fn families() -> Vec<Box<dyn ShapeFactory>> {
        vec![Box::new(BwFactory), Box::new(ColorFactory::new())]
    }

    #[test]
    fn every_factory_registers_what_it_creates() {
        for factory in families() {
            let mut scene = Scene::new();
            let p = factory.create_point(&mut scene);
            let c = factory.create_circle(&mut scene);

            assert_eq!(scene.len(), 2);
            assert_eq!(scene.get(c).unwrap().kind(), ShapeKind::Circle);
            assert_ne!(scene.get(p).unwrap().kind(), ShapeKind::Circle);
        }
    }

    #[test]
    fn both_families_share_the_default_circle() {
        for factory in families() {
            let mut scene = Scene::new();
            factory.create_circle(&mut scene);
            assert_eq!(scene.render(), "Circle (0, 0) R: 1 black\n");
        }
    }

    #[test]
    fn color_factory_circle_scenario() {
        let mut scene = Scene::new();
        let id = ColorFactory::new().create_circle(&mut scene);
        let circle = scene.circle_mut(id).unwrap();
        circle.set_radius(5);
        circle.set_color("blue");

        let out = scene.render();
        assert!(out.contains("R: 5"));
        assert!(out.contains("blue"));
    }

    #[test]
    fn color_then_bw_session() {
        let mut scene = Scene::new();
        let color = ColorFactory::new();
        let p = color.create_point(&mut scene);
        let c = color.create_circle(&mut scene);

        let point = scene.point_mut(p).unwrap();
        point.set_x(10);
        point.set_y(20);
        point.set_color("red");
        let circle = scene.circle_mut(c).unwrap();
        circle.set_x(30);
        circle.set_y(40);
        circle.set_radius(5);
        circle.set_color("blue");
        assert_eq!(scene.render(), "Point (10, 20) red\nCircle (30, 40) R: 5 blue\n");
        scene.clear();

        let p = BwFactory.create_point(&mut scene);
        let c = BwFactory.create_circle(&mut scene);
        let point = scene.bw_point_mut(p).unwrap();
        point.set_x(50);
        point.set_y(60);
        let circle = scene.circle_mut(c).unwrap();
        circle.set_x(70);
        circle.set_y(80);
        circle.set_radius(10);
        assert_eq!(scene.render(), "BWPoint (50, 60)\nCircle (70, 80) R: 10 black\n");
    }
}
