use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("width and height must be positive")]
    NonPositiveDimensions,
    #[error("output directory does not exist: {0}")]
    MissingOutputDirectory(String),
    #[error("steps must be at least 1")]
    ZeroSteps,
    #[error("maxDistance must be finite and > 0, got {0}")]
    InvalidMaxDistance(f32),
    #[error("epsilon must be finite and > 0, got {0}")]
    InvalidEpsilon(f32),
    #[error("scene must be a non-empty identifier")]
    EmptyScene,
    #[error("rendererMode must be a non-empty string")]
    EmptyRendererMode,
    #[error("pointer coordinates must contain finite values")]
    NonFinitePointer,
    #[error("currentPos must differ from mousePos")]
    CoincidentPointers,
}

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("unknown scene identifier: {0}")]
    UnknownScene(String),
    #[error("scene must contain at least one shape")]
    EmptyScene,
    #[error("scene has {count} shapes but renderer supports at most {max}")]
    TooManyShapes { count: usize, max: usize },
    #[error("scene '{0}' is not in renderer whitelist")]
    UnsupportedScene(String),
    #[error("shape '{shape}' is invalid: {message}")]
    InvalidShape {
        shape: &'static str,
        message: String,
    },
}

#[derive(Error, Debug)]
pub enum GpuError {
    #[error("no compatible GPU adapter available")]
    AdapterUnavailable,
    #[error("request_device failed: {0}")]
    DeviceRequest(#[from] wgpu::RequestDeviceError),
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("GPU frame resources are not initialized")]
    FrameResourcesMissing,
    #[error("failed to receive GPU readback status")]
    ReadbackChannelClosed,
    #[error("GPU readback map failed: {0}")]
    ReadbackMap(#[from] wgpu::BufferAsyncError),
}
