use crate::render::capabilities::GPU_MAX_SHAPES;

pub(super) fn build_gpu_shader_wgsl() -> String {
    GPU_SHADER_WGSL_TEMPLATE.replace("__GPU_MAX_SHAPES__", &format!("{GPU_MAX_SHAPES}u"))
}

const GPU_SHADER_WGSL_TEMPLATE: &str = include_str!("../shaders/raymarch.wgsl");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injects_rust_gpu_limits_into_wgsl_template() {
        let shader = build_gpu_shader_wgsl();
        assert!(shader.contains(&format!("const MAX_SHAPES: u32 = {}u;", GPU_MAX_SHAPES)));
        assert!(!shader.contains("__GPU_MAX_"));
    }
}
