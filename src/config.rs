use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;
use crate::math::Vec2;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderFrameConfig {
    pub width: u32,
    pub height: u32,
    pub output_path: String,
    pub scene: String,
    pub renderer_mode: String,
    #[serde(default = "default_steps")]
    pub steps: u32,
    #[serde(default = "default_max_distance")]
    pub max_distance: f32,
    #[serde(default = "default_epsilon")]
    pub epsilon: f32,
    pub mouse_pos: [f32; 2],
    pub current_pos: [f32; 2],
    #[serde(default)]
    pub mouse_click: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderBatchConfig {
    pub frames: Vec<RenderFrameConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IncomingConfig {
    Single(RenderFrameConfig),
    Batch(RenderBatchConfig),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    Cpu,
    Gpu,
}

impl RenderMode {
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("gpu") {
            Self::Gpu
        } else {
            Self::Cpu
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Gpu => "GPU",
        }
    }
}

const fn default_steps() -> u32 {
    64
}

const fn default_max_distance() -> f32 {
    16.0
}

const fn default_epsilon() -> f32 {
    0.01
}

pub fn validate_config(config: &RenderFrameConfig) -> Result<(), ConfigError> {
    if config.width == 0 || config.height == 0 {
        return Err(ConfigError::NonPositiveDimensions);
    }

    // An empty parent means the current working directory.
    if let Some(parent) = Path::new(&config.output_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(ConfigError::MissingOutputDirectory(
                parent.display().to_string(),
            ));
        }
    }

    if config.steps == 0 {
        return Err(ConfigError::ZeroSteps);
    }

    if !config.max_distance.is_finite() || config.max_distance <= 0.0 {
        return Err(ConfigError::InvalidMaxDistance(config.max_distance));
    }

    if !config.epsilon.is_finite() || config.epsilon <= 0.0 {
        return Err(ConfigError::InvalidEpsilon(config.epsilon));
    }

    if config.scene.trim().is_empty() {
        return Err(ConfigError::EmptyScene);
    }

    if config.renderer_mode.trim().is_empty() {
        return Err(ConfigError::EmptyRendererMode);
    }

    if !is_finite_vec2(config.mouse_pos) || !is_finite_vec2(config.current_pos) {
        return Err(ConfigError::NonFinitePointer);
    }

    let mouse = vec2_from(config.mouse_pos);
    let current = vec2_from(config.current_pos);
    if (mouse - current).length() < 0.0001 {
        return Err(ConfigError::CoincidentPointers);
    }

    Ok(())
}

pub fn vec2_from(value: [f32; 2]) -> Vec2 {
    Vec2::new(value[0], value[1])
}

fn is_finite_vec2(value: [f32; 2]) -> bool {
    value[0].is_finite() && value[1].is_finite()
}
