use crate::domain::{Scene, Shape, ShapeKind};
use crate::math::Vec2;

pub const SCENE_ID: &str = "shape_gallery";

pub fn build() -> Scene {
    Scene {
        id: SCENE_ID,
        shapes: vec![
            Shape {
                name: "upper_circle",
                kind: ShapeKind::Circle { radius: 0.5 },
                center: Vec2::new(1.0, 1.0),
            },
            Shape {
                name: "lower_circle",
                kind: ShapeKind::Circle { radius: 0.5 },
                center: Vec2::new(-1.0, -1.0),
            },
            Shape {
                name: "star",
                kind: ShapeKind::Star {
                    radius: 0.5,
                    spoke_ratio: 0.5,
                },
                center: Vec2::new(0.0, 0.0),
            },
            Shape {
                name: "heart",
                kind: ShapeKind::Heart,
                center: Vec2::new(-1.0, 0.5),
            },
            Shape {
                name: "moon",
                kind: ShapeKind::Moon {
                    offset: 0.5,
                    outer_radius: 0.75,
                    inner_radius: 0.6,
                },
                center: Vec2::new(-1.0, -1.0),
            },
        ],
    }
}
