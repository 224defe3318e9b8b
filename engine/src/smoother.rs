use kurbo::Point;
use crate::error::{self, Result};
use crate::types::{ControlPointPair, TANGENT_SCALE};

/// Catmull-Rom style control points: the tangent at each vertex is the chord
/// between its two neighbours, scaled by `smoothness * 0.3` on either side.
pub fn smooth(outline: &[Point], smoothness: f64) -> Result<Vec<ControlPointPair>> {
    error::ensure_vertex_count("outline", outline.len())?;
    error::ensure_fraction("smoothness", smoothness)?;

    let n = outline.len();
    let k = smoothness * TANGENT_SCALE;
    let pairs: Vec<ControlPointPair> = (0..n)
        .map(|i| {
            let p0 = outline[(i + n - 1) % n];
            let p1 = outline[i];
            let p2 = outline[(i + 1) % n];
            let d = (p2 - p0) * k;
            ControlPointPair { incoming: p1 - d, outgoing: p1 + d }
        })
        .collect();

    log::debug!("smoothed {} vertices, k = {:.3}", n, k);
    Ok(pairs)
}
