use crate::math::Vec2;
use crate::sdf;

#[derive(Clone, Copy, Debug)]
pub enum ShapeKind {
    Circle {
        radius: f32,
    },
    Star {
        radius: f32,
        spoke_ratio: f32,
    },
    Heart,
    Moon {
        offset: f32,
        outer_radius: f32,
        inner_radius: f32,
    },
}

#[derive(Clone, Copy, Debug)]
pub struct Shape {
    pub name: &'static str,
    pub kind: ShapeKind,
    pub center: Vec2,
}

impl Shape {
    pub fn distance(&self, p: Vec2) -> f32 {
        let local = p - self.center;
        match self.kind {
            ShapeKind::Circle { radius } => sdf::sd_circle(local, radius),
            ShapeKind::Star {
                radius,
                spoke_ratio,
            } => sdf::sd_star5(local, radius, spoke_ratio),
            ShapeKind::Heart => sdf::sd_heart(local),
            ShapeKind::Moon {
                offset,
                outer_radius,
                inner_radius,
            } => sdf::sd_moon(local, offset, outer_radius, inner_radius),
        }
    }

    pub fn validate_physical(&self) -> Result<(), String> {
        validate_vec2_finite(self.center, "center")?;
        match self.kind {
            ShapeKind::Circle { radius } => {
                validate_positive(radius, "radius")?;
            }
            ShapeKind::Star {
                radius,
                spoke_ratio,
            } => {
                validate_positive(radius, "radius")?;
                validate_positive(spoke_ratio, "spoke ratio")?;
            }
            ShapeKind::Heart => {}
            ShapeKind::Moon {
                offset,
                outer_radius,
                inner_radius,
            } => {
                validate_positive(offset, "offset")?;
                validate_positive(outer_radius, "outer radius")?;
                validate_positive(inner_radius, "inner radius")?;
            }
        }
        Ok(())
    }
}

fn validate_vec2_finite(value: Vec2, field: &str) -> Result<(), String> {
    if !value.x.is_finite() || !value.y.is_finite() {
        return Err(format!(
            "{field} components must be finite, got ({}, {})",
            value.x, value.y
        ));
    }
    Ok(())
}

fn validate_positive(value: f32, field: &str) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("{field} must be finite and > 0, got {value}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centered_star() -> Shape {
        Shape {
            name: "test_star",
            kind: ShapeKind::Star {
                radius: 0.5,
                spoke_ratio: 0.5,
            },
            center: Vec2::new(0.0, 0.0),
        }
    }

    #[test]
    fn validates_a_plain_star() {
        assert!(centered_star().validate_physical().is_ok());
    }

    #[test]
    fn rejects_non_finite_center() {
        let mut shape = centered_star();
        shape.center = Vec2::new(f32::NAN, 0.0);
        assert!(shape.validate_physical().is_err());
    }

    #[test]
    fn rejects_non_positive_radius() {
        let shape = Shape {
            name: "flat_circle",
            kind: ShapeKind::Circle { radius: 0.0 },
            center: Vec2::new(0.0, 0.0),
        };
        assert!(shape.validate_physical().is_err());
    }

    #[test]
    fn distance_is_evaluated_in_the_shape_frame() {
        let shape = Shape {
            name: "offset_circle",
            kind: ShapeKind::Circle { radius: 0.5 },
            center: Vec2::new(1.0, 1.0),
        };
        assert_eq!(shape.distance(Vec2::new(1.0, 1.0)), -0.5);
    }
}
