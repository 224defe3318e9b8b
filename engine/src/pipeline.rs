use rand::Rng;
use serde::Serialize;
use crate::emitter::{self, CurveEmission};
use crate::error::Result;
use crate::sampler;
use crate::smoother;
use crate::types::{ControlPointPair, Outline, ShapeParameters};

/// Every stage's output from one regeneration.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Blob {
    pub outline: Outline,
    pub controls: Vec<ControlPointPair>,
    pub emission: CurveEmission,
}

pub fn generate_blob<R: Rng + ?Sized>(params: &ShapeParameters, rng: &mut R) -> Result<Blob> {
    params.validate()?;
    let outline = sampler::sample(params.vertex_count, params.randomness, params.center(), params.base_radius(), rng)?;
    let controls = smoother::smooth(&outline, params.smoothness)?;
    let emission = emitter::emit(&outline, &controls, &params.fill_color, params.canvas_width, params.canvas_height)?;
    Ok(Blob { outline, controls, emission })
}

pub fn generate_outline_and_curve<R: Rng + ?Sized>(params: &ShapeParameters, rng: &mut R) -> Result<CurveEmission> {
    generate_blob(params, rng).map(|blob| blob.emission)
}
