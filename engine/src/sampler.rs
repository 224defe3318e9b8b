use kurbo::{Point, Vec2};
use rand::Rng;
use std::f64::consts::TAU;
use crate::error::{self, Result};
use crate::types::{Outline, JITTER_SCALE};

/// Places `vertex_count` points around `center` at even angular steps, each
/// pushed in or out along its ray by a uniform draw from
/// `[-amplitude, +amplitude]` where `amplitude = randomness * base_radius * 0.5`.
///
/// One value is drawn from `rng` per vertex even when `randomness` is zero, so
/// a seeded source yields the same sequence of shapes whatever the jitter.
pub fn sample<R: Rng + ?Sized>(
    vertex_count: usize,
    randomness: f64,
    center: Point,
    base_radius: f64,
    rng: &mut R,
) -> Result<Outline> {
    error::ensure_vertex_count("vertexCount", vertex_count)?;
    error::ensure_fraction("randomness", randomness)?;
    error::ensure_positive("baseRadius", base_radius)?;

    let step = TAU / vertex_count as f64;
    let amplitude = randomness * base_radius * JITTER_SCALE;
    let outline: Outline = (0..vertex_count)
        .map(|i| {
            let angle = step * i as f64;
            let radius = base_radius + rng.gen::<f64>() * amplitude * 2.0 - amplitude;
            center + Vec2::from_angle(angle) * radius
        })
        .collect();

    log::debug!("sampled {} points, base radius {:.1}, jitter ±{:.1}", outline.len(), base_radius, amplitude);
    Ok(outline)
}
