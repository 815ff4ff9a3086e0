//! 2D distance primitives, adapted from
//! <https://iquilezles.org/articles/distfunctions2d/>.
//!
//! Every function takes a point already translated into the shape's local
//! frame and returns a signed distance: negative inside, zero on the
//! boundary, positive outside.

use crate::math::{sign, Vec2};

fn dot2(v: Vec2) -> f32 {
    v.dot(v)
}

pub fn sd_circle(p: Vec2, radius: f32) -> f32 {
    p.length() - radius
}

pub fn sd_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let pa = p - a;
    let ba = b - a;
    let h = (pa.dot(ba) / ba.dot(ba)).clamp(0.0, 1.0);
    (pa - (ba * h)).length()
}

pub fn sd_star5(p: Vec2, radius: f32, spoke_ratio: f32) -> f32 {
    // Mirror axes of a regular five-point star (cos/sin of +/-54 degrees).
    const K1: Vec2 = Vec2::new(0.809016994375, -0.587785252292);
    const K2: Vec2 = Vec2::new(-K1.x, K1.y);

    let mut p = Vec2::new(p.x.abs(), p.y);
    p = p - (K1 * (2.0 * p.dot(K1).max(0.0)));
    p = p - (K2 * (2.0 * p.dot(K2).max(0.0)));
    p.x = p.x.abs();
    p.y -= radius;

    let ba = (Vec2::new(-K1.y, K1.x) * spoke_ratio) - Vec2::new(0.0, 1.0);
    let h = (p.dot(ba) / ba.dot(ba)).clamp(0.0, radius);
    (p - (ba * h)).length() * sign((p.y * ba.x) - (p.x * ba.y))
}

pub fn sd_heart(p: Vec2) -> f32 {
    let p = Vec2::new(p.x.abs(), p.y);

    if p.y + p.x > 1.0 {
        return dot2(p - Vec2::new(0.25, 0.75)).sqrt() - (std::f32::consts::SQRT_2 / 4.0);
    }
    let upper = dot2(p - Vec2::new(0.0, 1.0));
    let lower = dot2(p - Vec2::splat(0.5 * (p.x + p.y).max(0.0)));
    upper.min(lower).sqrt() * sign(p.x - p.y)
}

pub fn sd_moon(p: Vec2, offset: f32, outer_radius: f32, inner_radius: f32) -> f32 {
    let p = Vec2::new(p.x, p.y.abs());

    // Circle intersection point; keeps the crescent corner an exact distance.
    let a = ((outer_radius * outer_radius) - (inner_radius * inner_radius)
        + (offset * offset))
        / (2.0 * offset);
    let b = ((outer_radius * outer_radius) - (a * a)).max(0.0).sqrt();

    if offset * ((p.x * b) - (p.y * a)) > (offset * offset) * (b - p.y).max(0.0) {
        return (p - Vec2::new(a, b)).length();
    }
    (p.length() - outer_radius).max(-((p - Vec2::new(offset, 0.0)).length() - inner_radius))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_distance_is_length_minus_radius() {
        assert_eq!(sd_circle(Vec2::new(3.0, 4.0), 2.0), 3.0);
        assert_eq!(sd_circle(Vec2::splat(0.0), 0.5), -0.5);
    }

    #[test]
    fn segment_distance_is_zero_on_the_segment() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(2.0, 0.0);
        assert!(sd_segment(Vec2::new(1.0, 0.0), a, b).abs() < 1e-6);
        assert!((sd_segment(Vec2::new(1.0, 0.5), a, b) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn segment_distance_beyond_an_endpoint_is_endpoint_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(2.0, 0.0);
        let expected = std::f32::consts::SQRT_2;
        assert!((sd_segment(Vec2::new(3.0, 1.0), a, b) - expected).abs() < 1e-6);
    }

    #[test]
    fn star_origin_sits_at_the_inner_vertex_depth() {
        // With spoke_ratio 0.5 the inner vertices lie at radius 0.25, so the
        // center is 0.25 inside the boundary.
        let d = sd_star5(Vec2::splat(0.0), 0.5, 0.5);
        assert!((d + 0.25).abs() < 1e-5);
        assert!(sd_star5(Vec2::new(2.0, 0.0), 0.5, 0.5) > 0.0);
    }

    #[test]
    fn heart_is_negative_inside_and_positive_outside() {
        assert!(sd_heart(Vec2::new(0.0, 0.5)) < 0.0);
        assert!(sd_heart(Vec2::new(2.0, 0.0)) > 0.0);
        // Upper-lobe branch: just inside the left lobe.
        assert!(sd_heart(Vec2::new(0.3, 0.8)) < 0.0);
    }

    #[test]
    fn moon_is_negative_in_the_crescent_and_positive_in_the_carve() {
        let inside = sd_moon(Vec2::new(-0.6, 0.0), 0.5, 0.75, 0.6);
        assert!((inside + 0.15).abs() < 1e-6);
        let carved = sd_moon(Vec2::new(0.5, 0.0), 0.5, 0.75, 0.6);
        assert!((carved - 0.6).abs() < 1e-6);
    }
}
