use crate::domain::Scene;
use crate::error::SceneError;

use super::RendererCapabilities;

pub fn validate_scene_against_capabilities(
    scene: &Scene,
    capabilities: RendererCapabilities,
) -> Result<(), SceneError> {
    if scene.shapes.is_empty() {
        return Err(SceneError::EmptyScene);
    }

    if scene.shapes.len() > capabilities.max_shapes {
        return Err(SceneError::TooManyShapes {
            count: scene.shapes.len(),
            max: capabilities.max_shapes,
        });
    }

    if !capabilities
        .supported_scene_ids
        .iter()
        .any(|supported| scene.id.eq_ignore_ascii_case(supported))
    {
        return Err(SceneError::UnsupportedScene(scene.id.to_string()));
    }

    for shape in &scene.shapes {
        shape
            .validate_physical()
            .map_err(|message| SceneError::InvalidShape {
                shape: shape.name,
                message,
            })?;
    }

    Ok(())
}
