use std::ops::{Add, Div, Mul, Sub};

#[derive(Clone, Copy, Debug)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    pub fn dot(self, rhs: Self) -> f32 {
        (self.x * rhs.x) + (self.y * rhs.y)
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return self;
        }
        self / len
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    pub fn max(self, rhs: Self) -> Self {
        Self::new(self.x.max(rhs.x), self.y.max(rhs.y), self.z.max(rhs.z))
    }

    pub fn clamp01(self) -> Self {
        Self::new(
            self.x.clamp(0.0, 1.0),
            self.y.clamp(0.0, 1.0),
            self.z.clamp(0.0, 1.0),
        )
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

#[derive(Clone, Copy)]
pub struct Ray {
    pub origin: Vec2,
    pub direction: Vec2,
}

impl Ray {
    pub fn at(self, t: f32) -> Vec2 {
        self.origin + (self.direction * t)
    }
}

pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - (2.0 * t))
}

// Shading-language sign: 0.0 at 0.0, unlike f32::signum.
pub fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

pub fn step_gt(v1: f32, v2: f32) -> f32 {
    if v1 >= v2 {
        1.0
    } else {
        0.0
    }
}

pub fn step_lt(v1: f32, v2: f32) -> f32 {
    if v1 <= v2 {
        1.0
    } else {
        0.0
    }
}

pub fn step_between(val: f32, start: f32, end: f32) -> f32 {
    step_gt(val, start) * step_lt(val, end)
}

pub fn step_eq(v1: f32, v2: f32, e: f32) -> f32 {
    step_between(v1, v2 - e, v2 + e)
}

pub fn smooth_gt(v1: f32, v2: f32, e: f32) -> f32 {
    smoothstep(v2 - e, v2 + e, v1)
}

pub fn smooth_lt(v1: f32, v2: f32, e: f32) -> f32 {
    smoothstep(v1 - e, v1 + e, v2)
}

pub fn smooth_between(val: f32, start: f32, end: f32, e: f32) -> f32 {
    smooth_gt(val, start, e) * smooth_lt(val, end, e)
}

pub fn smooth_eq(v1: f32, v2: f32, e: f32, softness: f32) -> f32 {
    smooth_between(v1, v2 - e, v2 + e, softness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_zero_vectors_finite() {
        let v = Vec2::splat(0.0).normalize();
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn sign_is_zero_at_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-3.5), -1.0);
        assert_eq!(sign(0.25), 1.0);
    }

    #[test]
    fn hard_thresholds_are_binary() {
        assert_eq!(step_gt(1.0, 0.5), 1.0);
        assert_eq!(step_gt(0.4, 0.5), 0.0);
        assert_eq!(step_lt(0.4, 0.5), 1.0);
        assert_eq!(step_between(0.5, 0.0, 1.0), 1.0);
        assert_eq!(step_between(1.5, 0.0, 1.0), 0.0);
        assert_eq!(step_eq(0.5, 0.5, 0.01), 1.0);
        assert_eq!(step_eq(0.52, 0.5, 0.01), 0.0);
    }

    #[test]
    fn smooth_thresholds_saturate_away_from_the_edge() {
        assert_eq!(smooth_lt(0.0, 1.0, 0.005), 1.0);
        assert_eq!(smooth_lt(1.0, 0.0, 0.005), 0.0);
        assert_eq!(smooth_gt(1.0, 0.0, 0.005), 1.0);
        assert_eq!(smooth_between(0.5, 0.0, 1.0, 0.005), 1.0);
    }

    #[test]
    fn smooth_lt_is_half_on_the_boundary() {
        let v = smooth_lt(0.0, 0.0, 0.005);
        assert!((v - 0.5).abs() < 1e-6);
    }
}
