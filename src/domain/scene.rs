use super::Shape;
use crate::math::Vec2;

#[derive(Clone, Debug)]
pub struct Scene {
    pub id: &'static str,
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Signed distance to the closest shape boundary. The union over shapes
    /// is an exact `min`.
    pub fn distance(&self, p: Vec2) -> f32 {
        let mut closest = f32::INFINITY;
        for shape in &self.shapes {
            closest = closest.min(shape.distance(p));
        }
        closest
    }
}
