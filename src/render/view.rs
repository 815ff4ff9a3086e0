use crate::config::{vec2_from, RenderFrameConfig};
use crate::math::Vec2;

/// Fixed world window: UV [0,1]^2 maps to an 8x8 world square centered on
/// the origin, with the vertical axis scaled by the frame's aspect ratio
/// (height / width) so pixels stay square.
pub const ZOOM: f32 = 8.0;
pub const VIEWPORT_CENTER: Vec2 = Vec2::new(0.5, 0.5);
pub const ZOOM_CENTER: Vec2 = Vec2::new(0.0, 0.0);

#[derive(Clone, Copy, Debug)]
pub struct View {
    pub mouse: Vec2,
    pub current: Vec2,
    pub mouse_click: bool,
    pub aspect: f32,
}

impl View {
    pub fn from_frame(frame: &RenderFrameConfig) -> Self {
        Self {
            mouse: vec2_from(frame.mouse_pos),
            current: vec2_from(frame.current_pos),
            mouse_click: frame.mouse_click,
            aspect: frame.height as f32 / frame.width as f32,
        }
    }

    pub fn world_from_uv(&self, uv: Vec2) -> Vec2 {
        let xy = ((uv - VIEWPORT_CENTER) * ZOOM) + ZOOM_CENTER;
        Vec2::new(xy.x, xy.y * self.aspect)
    }

    pub fn uv_from_world(&self, xy: Vec2) -> Vec2 {
        let flat = Vec2::new(xy.x, xy.y / self.aspect);
        ((flat - ZOOM_CENTER) / ZOOM) + VIEWPORT_CENTER
    }

    /// Pointer inputs share the zoom and aspect scaling of the world mapping
    /// but are never recentered; their input space is [-1, 1] around the
    /// viewport middle.
    pub fn world_from_pointer(&self, pointer: Vec2) -> Vec2 {
        Vec2::new(
            pointer.x * (ZOOM / 2.0),
            pointer.y * (ZOOM / 2.0) * self.aspect,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landscape_view() -> View {
        View {
            mouse: Vec2::new(0.5, 0.5),
            current: Vec2::new(-0.25, -0.25),
            mouse_click: false,
            aspect: 0.75,
        }
    }

    #[test]
    fn uv_center_maps_to_the_world_origin() {
        let view = landscape_view();
        let world = view.world_from_uv(Vec2::new(0.5, 0.5));
        assert_eq!(world.x, 0.0);
        assert_eq!(world.y, 0.0);
    }

    #[test]
    fn uv_to_world_round_trips() {
        let view = landscape_view();
        let uv = Vec2::new(0.3, 0.8);
        let back = view.uv_from_world(view.world_from_uv(uv));
        assert!((back.x - uv.x).abs() < 1e-6);
        assert!((back.y - uv.y).abs() < 1e-6);
    }

    #[test]
    fn pointer_mapping_scales_without_recentering() {
        let view = landscape_view();
        let world = view.world_from_pointer(Vec2::new(1.0, 1.0));
        assert_eq!(world.x, 4.0);
        assert_eq!(world.y, 3.0);

        let world = view.world_from_pointer(Vec2::new(-0.5, 0.25));
        assert_eq!(world.x, -2.0);
        assert_eq!(world.y, 0.75);
    }
}
