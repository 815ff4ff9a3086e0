use image::{Rgb, RgbImage};
use rayon::prelude::*;

use crate::domain::Scene;
use crate::math::{smooth_between, smooth_lt, Ray, Vec2, Vec3};
use crate::render::{MarchParams, RenderSettings, View};
use crate::sdf;

const CURRENT_MARKER_RADIUS: f32 = 0.1;
const MOUSE_MARKER_RADIUS: f32 = 0.1;
const SAMPLE_MARKER_RADIUS: f32 = 0.025;
const HIT_MARKER_RADIUS: f32 = 0.05;
const RAY_WIDTH: f32 = 0.01;
const RING_THICKNESS: f32 = 0.01;
const EDGE_SOFTNESS: f32 = 0.005;
const FIELD_WAVE_FREQUENCY: f32 = 100.0;
const FIELD_WAVE_GAIN: f32 = 0.2;

#[derive(Clone, Copy, Debug)]
pub struct MarchSample {
    pub point: Vec2,
    pub field: f32,
}

/// Record of one bounded sphere-tracing walk. `end` is the last probed
/// point and `traveled` the accumulated distance; after an exhausted step
/// budget `traveled` still includes the final advance while `end` does not,
/// matching the loop's write order.
#[derive(Clone, Debug)]
pub struct MarchTrace {
    pub samples: Vec<MarchSample>,
    pub end: Vec2,
    pub traveled: f32,
}

pub fn probe_ray(view: &View) -> Ray {
    let origin = view.world_from_pointer(view.current);
    let target = view.world_from_pointer(view.mouse);
    Ray {
        origin,
        direction: (target - origin).normalize(),
    }
}

pub fn march_trace(ray: Ray, scene: &Scene, params: MarchParams) -> MarchTrace {
    let mut samples = Vec::new();
    let mut d = 0.0_f32;
    let mut p = ray.origin;

    for _ in 0..params.steps {
        p = ray.at(d);
        let cd = scene.distance(p);
        if cd < params.epsilon || d > params.max_distance {
            break;
        }
        d += cd;
        samples.push(MarchSample {
            point: p,
            field: cd,
        });
    }

    MarchTrace {
        samples,
        end: p,
        traveled: d,
    }
}

fn filled_disk(p: Vec2, radius: f32) -> f32 {
    smooth_lt(p.length(), radius, EDGE_SOFTNESS)
}

fn hollow_ring(p: Vec2, radius: f32, thickness: f32) -> f32 {
    smooth_between(p.length(), radius - thickness, radius, EDGE_SOFTNESS)
}

fn stroked_segment(p: Vec2, a: Vec2, b: Vec2, width: f32) -> f32 {
    smooth_lt(sdf::sd_segment(p, a, b), width, EDGE_SOFTNESS)
}

/// Additive overlay composite for one surface sample. The march state is
/// frame-constant, so callers march once and share the trace across pixels.
pub fn shade_fragment(
    uv: Vec2,
    scene: &Scene,
    view: &View,
    params: MarchParams,
    trace: &MarchTrace,
) -> Vec3 {
    let xy = view.world_from_uv(uv);
    let mouse = view.world_from_pointer(view.mouse);
    let current = view.world_from_pointer(view.current);

    let mut col = Vec3::splat(0.0);

    col.x += filled_disk(current - xy, CURRENT_MARKER_RADIUS);

    let field = scene.distance(xy);
    col = col + Vec3::splat((field * FIELD_WAVE_FREQUENCY).sin() * FIELD_WAVE_GAIN);
    col = col + Vec3::splat(smooth_lt(field, 0.0, EDGE_SOFTNESS));

    col = col.max(Vec3::splat(0.0));

    for sample in &trace.samples {
        col.y += filled_disk(sample.point - xy, SAMPLE_MARKER_RADIUS);
        col = col + Vec3::splat(hollow_ring(sample.point - xy, sample.field, RING_THICKNESS));
    }

    col.x += stroked_segment(xy, current, trace.end, RAY_WIDTH);

    if trace.traveled < params.max_distance {
        col.z += filled_disk(trace.end - xy, HIT_MARKER_RADIUS);
    }

    col.x += filled_disk(mouse - xy, MOUSE_MARKER_RADIUS);

    col
}

pub fn render_cpu(settings: &RenderSettings, view: &View, scene: &Scene) -> RgbImage {
    let mut image = RgbImage::new(settings.width, settings.height);
    let width = settings.width as usize;
    let height = settings.height as usize;
    let width_f = settings.width.max(1) as f32;
    let height_f = settings.height.max(1) as f32;

    let trace = march_trace(probe_ray(view), scene, settings.march);

    let mut color_buffer = vec![Vec3::splat(0.0); width * height];

    // Minimal parallelism stage: split work by scanlines.
    color_buffer
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let y_u32 = y as u32;
            for (x, color_slot) in row.iter_mut().enumerate() {
                let u = (x as f32 + 0.5) / width_f;
                let v = ((settings.height - 1 - y_u32) as f32 + 0.5) / height_f;
                *color_slot =
                    shade_fragment(Vec2::new(u, v), scene, view, settings.march, &trace);
            }
        });

    for y in 0..height {
        for x in 0..width {
            let color = color_buffer[(y * width) + x];
            image.put_pixel(x as u32, y as u32, to_rgb(color));
        }
    }

    image
}

fn to_rgb(color: Vec3) -> Rgb<u8> {
    let clamped = color.clamp01();
    let r = (clamped.x * 255.999) as u8;
    let g = (clamped.y * 255.999) as u8;
    let b = (clamped.z * 255.999) as u8;
    Rgb([r, g, b])
}
