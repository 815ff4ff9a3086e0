use crate::config::RenderFrameConfig;

#[derive(Clone, Copy, Debug)]
pub struct MarchParams {
    pub steps: u32,
    pub max_distance: f32,
    pub epsilon: f32,
}

#[derive(Clone, Debug)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub output_path: String,
    pub march: MarchParams,
}

impl RenderSettings {
    pub fn from_frame(frame: &RenderFrameConfig) -> Self {
        Self {
            width: frame.width,
            height: frame.height,
            output_path: frame.output_path.clone(),
            march: MarchParams {
                steps: frame.steps.max(1),
                max_distance: frame.max_distance,
                epsilon: frame.epsilon,
            },
        }
    }
}
