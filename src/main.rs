use std::collections::HashMap;
use std::io::{self, Read};
use std::time::Instant;

mod config;
mod cpu;
mod domain;
mod error;
mod gpu;
mod math;
mod render;
mod sdf;

use config::{validate_config, IncomingConfig, RenderMode};
use domain::presets::build_scene;
use gpu::GpuRenderer;
use render::validation::validate_scene_against_capabilities;
use render::{renderer_capabilities, RenderSettings, View};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;

    let incoming: IncomingConfig = serde_json::from_str(&raw)?;
    let frames = match incoming {
        IncomingConfig::Single(frame) => vec![frame],
        IncomingConfig::Batch(batch) => batch.frames,
    };
    if frames.is_empty() {
        return Err("frames array must not be empty".into());
    }

    let total = frames.len();
    let mut prepared_frames = Vec::with_capacity(total);

    for frame in &frames {
        validate_config(frame)?;
        prepared_frames.push((
            RenderSettings::from_frame(frame),
            View::from_frame(frame),
            frame.scene.clone(),
            RenderMode::parse(&frame.renderer_mode),
        ));
    }

    let capabilities = renderer_capabilities();
    let mut scene_cache = HashMap::new();

    let needs_gpu = prepared_frames
        .iter()
        .any(|(_, _, _, mode)| *mode == RenderMode::Gpu);
    let mut gpu_renderer = if needs_gpu {
        log::info!("initializing GPU renderer");
        Some(
            pollster::block_on(GpuRenderer::new())
                .map_err(|error| format!("GPU initialization failed: {error}"))?,
        )
    } else {
        None
    };

    for (index, (settings, view, scene_id, mode)) in prepared_frames.iter().enumerate() {
        let cache_key = scene_id.to_ascii_lowercase();
        if !scene_cache.contains_key(&cache_key) {
            let scene = build_scene(scene_id)
                .map_err(|error| format!("Failed to build scene '{}': {error}", scene_id))?;
            validate_scene_against_capabilities(&scene, capabilities).map_err(|error| {
                format!(
                    "Scene '{}' is not supported by current renderer: {error}",
                    scene.id
                )
            })?;
            log::debug!(
                "cached scene '{}' with {} shapes",
                scene.id,
                scene.shapes.len()
            );
            scene_cache.insert(cache_key.clone(), scene);
        }
        let scene = scene_cache
            .get(&cache_key)
            .ok_or_else(|| format!("internal error: scene cache miss for '{scene_id}'"))?;

        let started = Instant::now();
        let image = match mode {
            RenderMode::Cpu => cpu::render_cpu(settings, view, scene),
            RenderMode::Gpu => {
                let renderer = gpu_renderer
                    .as_mut()
                    .ok_or("internal error: GPU renderer is not initialized")?;
                renderer
                    .render_frame(settings, view, scene)
                    .map_err(|error| format!("GPU render failed: {error}"))?
            }
        };
        let elapsed_ms = started.elapsed().as_millis();
        image.save(&settings.output_path)?;

        println!(
            "[{}/{}] Rendered scene '{}' [{}] in {} ms: {}",
            index + 1,
            total,
            scene.id,
            mode.as_str(),
            elapsed_ms,
            settings.output_path
        );
    }

    // In this CLI workflow the renderer lifetime matches the process lifetime.
    // Some GPU/driver stacks can crash while tearing down WGPU objects on drop.
    if let Some(renderer) = gpu_renderer {
        std::mem::forget(renderer);
    }

    Ok(())
}
