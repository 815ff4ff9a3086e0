use crate::domain::{Scene, ShapeKind};
use crate::error::SceneError;
use crate::render::capabilities::GPU_MAX_SHAPES;

pub(super) const SHAPE_KIND_CIRCLE: f32 = 0.0;
pub(super) const SHAPE_KIND_STAR: f32 = 1.0;
pub(super) const SHAPE_KIND_HEART: f32 = 2.0;
pub(super) const SHAPE_KIND_MOON: f32 = 3.0;

/// Scene flattened into the fixed-size uniform arrays the shader indexes.
///
/// Layout per slot:
/// - `shape_meta[i]`  = [kind, 0, 0, 0]
/// - `shape_data0[i]` = [center.x, center.y, param0, param1]
/// - `shape_data1[i]` = [param2, 0, 0, 0]
#[derive(Clone, Copy, Debug)]
pub(super) struct CompiledGpuScene {
    pub(super) shape_count: u32,
    pub(super) shape_meta: [[f32; 4]; GPU_MAX_SHAPES],
    pub(super) shape_data0: [[f32; 4]; GPU_MAX_SHAPES],
    pub(super) shape_data1: [[f32; 4]; GPU_MAX_SHAPES],
}

pub(super) fn compile_scene(scene: &Scene) -> Result<CompiledGpuScene, SceneError> {
    if scene.shapes.is_empty() {
        return Err(SceneError::EmptyScene);
    }
    if scene.shapes.len() > GPU_MAX_SHAPES {
        return Err(SceneError::TooManyShapes {
            count: scene.shapes.len(),
            max: GPU_MAX_SHAPES,
        });
    }

    let mut shape_meta = [[0.0; 4]; GPU_MAX_SHAPES];
    let mut shape_data0 = [[0.0; 4]; GPU_MAX_SHAPES];
    let mut shape_data1 = [[0.0; 4]; GPU_MAX_SHAPES];

    for (index, shape) in scene.shapes.iter().enumerate() {
        shape
            .validate_physical()
            .map_err(|message| SceneError::InvalidShape {
                shape: shape.name,
                message,
            })?;

        shape_data0[index][0] = shape.center.x;
        shape_data0[index][1] = shape.center.y;

        match shape.kind {
            ShapeKind::Circle { radius } => {
                shape_meta[index][0] = SHAPE_KIND_CIRCLE;
                shape_data0[index][2] = radius;
            }
            ShapeKind::Star {
                radius,
                spoke_ratio,
            } => {
                shape_meta[index][0] = SHAPE_KIND_STAR;
                shape_data0[index][2] = radius;
                shape_data0[index][3] = spoke_ratio;
            }
            ShapeKind::Heart => {
                shape_meta[index][0] = SHAPE_KIND_HEART;
            }
            ShapeKind::Moon {
                offset,
                outer_radius,
                inner_radius,
            } => {
                shape_meta[index][0] = SHAPE_KIND_MOON;
                shape_data0[index][2] = offset;
                shape_data0[index][3] = outer_radius;
                shape_data1[index][0] = inner_radius;
            }
        }
    }

    Ok(CompiledGpuScene {
        shape_count: scene.shapes.len() as u32,
        shape_meta,
        shape_data0,
        shape_data1,
    })
}
