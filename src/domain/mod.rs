pub mod presets;
pub mod scene;
pub mod shape;

pub use scene::Scene;
pub use shape::{Shape, ShapeKind};
