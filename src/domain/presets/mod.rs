mod lone_star;
mod shape_gallery;

use crate::domain::Scene;
use crate::error::SceneError;

pub const SCENE_IDS: &[&str] = &[shape_gallery::SCENE_ID, lone_star::SCENE_ID];

pub fn build_scene(scene_id: &str) -> Result<Scene, SceneError> {
    if scene_id.eq_ignore_ascii_case(shape_gallery::SCENE_ID) {
        return Ok(shape_gallery::build());
    }
    if scene_id.eq_ignore_ascii_case(lone_star::SCENE_ID) {
        return Ok(lone_star::build());
    }

    Err(SceneError::UnknownScene(scene_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;
    use crate::sdf;

    fn explicit_gallery_distance(p: Vec2) -> f32 {
        let upper_circle = sdf::sd_circle(p - Vec2::new(1.0, 1.0), 0.5);
        let lower_circle = sdf::sd_circle(p - Vec2::new(-1.0, -1.0), 0.5);
        let star = sdf::sd_star5(p, 0.5, 0.5);
        let heart = sdf::sd_heart(p - Vec2::new(-1.0, 0.5));
        let moon = sdf::sd_moon(p - Vec2::new(-1.0, -1.0), 0.5, 0.75, 0.6);
        upper_circle.min(lower_circle).min(star).min(heart).min(moon)
    }

    #[test]
    fn builds_scenes_case_insensitively() {
        let scene = build_scene("Shape_Gallery").unwrap();
        assert_eq!(scene.id, "shape_gallery");
        assert_eq!(scene.shapes.len(), 5);
        assert!(build_scene("LONE_STAR").is_ok());
    }

    #[test]
    fn rejects_unknown_scene_ids() {
        assert!(matches!(
            build_scene("nonexistent"),
            Err(SceneError::UnknownScene(_))
        ));
    }

    #[test]
    fn gallery_distance_is_the_exact_minimum_over_shapes() {
        let scene = build_scene("shape_gallery").unwrap();
        let probes = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, -1.0),
            Vec2::new(-1.0, 0.5),
            Vec2::new(0.3, -0.7),
            Vec2::new(-2.5, 1.5),
        ];
        for p in probes {
            assert_eq!(scene.distance(p), explicit_gallery_distance(p));
        }
    }

    #[test]
    fn upper_circle_center_is_half_a_unit_inside() {
        let scene = build_scene("shape_gallery").unwrap();
        assert_eq!(scene.distance(Vec2::new(1.0, 1.0)), -0.5);
    }

    #[test]
    fn distant_points_report_the_nearest_shape() {
        let scene = build_scene("shape_gallery").unwrap();
        let p = Vec2::new(10.0, 10.0);
        let d = scene.distance(p);
        assert!(d > 0.0);
        assert_eq!(d, sdf::sd_circle(Vec2::new(9.0, 9.0), 0.5));
    }
}
