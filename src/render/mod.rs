pub mod capabilities;
pub mod settings;
pub mod validation;
pub mod view;

pub use capabilities::{renderer_capabilities, RendererCapabilities};
pub use settings::{MarchParams, RenderSettings};
pub use view::View;
