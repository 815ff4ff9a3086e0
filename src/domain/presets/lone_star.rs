use crate::domain::{Scene, Shape, ShapeKind};
use crate::math::Vec2;

pub const SCENE_ID: &str = "lone_star";

pub fn build() -> Scene {
    Scene {
        id: SCENE_ID,
        shapes: vec![Shape {
            name: "star",
            kind: ShapeKind::Star {
                radius: 0.5,
                spoke_ratio: 0.5,
            },
            center: Vec2::new(0.0, 0.0),
        }],
    }
}
