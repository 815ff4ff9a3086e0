use crate::domain::presets;

/// Shape slots in the fixed-size uniform arrays the GPU shader consumes.
/// The CPU backend honors the same cap so every whitelisted scene renders
/// identically on both.
pub const GPU_MAX_SHAPES: usize = 16;

#[derive(Clone, Copy, Debug)]
pub struct RendererCapabilities {
    pub max_shapes: usize,
    pub supported_scene_ids: &'static [&'static str],
}

pub fn renderer_capabilities() -> RendererCapabilities {
    RendererCapabilities {
        max_shapes: GPU_MAX_SHAPES,
        supported_scene_ids: presets::SCENE_IDS,
    }
}
