use kurbo::Point;
use serde::{Serialize, Deserialize};
use crate::color;
use crate::error::{self, BlobError, Result};
use crate::svg;
use crate::types::ControlPointPair;

/// One cubic piece of the closed curve.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct Segment {
    pub start: Point,
    pub cp1: Point,
    pub cp2: Point,
    pub end: Point,
}

/// Immediate-mode drawing instruction, in the order a 2D canvas expects them.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawCommand {
    MoveTo { to: Point },
    CurveTo { cp1: Point, cp2: Point, to: Point },
    Close,
    Fill { color: String },
}

/// The finished closed curve. The draw commands, the path data and the SVG
/// text are all projections of `segments`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CurveEmission {
    pub segments: Vec<Segment>,
    pub fill_color: String,
    pub width: f64,
    pub height: f64,
}

pub fn emit(
    outline: &[Point],
    controls: &[ControlPointPair],
    fill_color: &str,
    canvas_width: f64,
    canvas_height: f64,
) -> Result<CurveEmission> {
    error::ensure_vertex_count("outline", outline.len())?;
    if controls.len() != outline.len() {
        return Err(BlobError::invalid(
            "controlPairs",
            format!("{} control pairs for {} outline points", controls.len(), outline.len()),
        ));
    }
    error::ensure_positive("canvasWidth", canvas_width)?;
    error::ensure_positive("canvasHeight", canvas_height)?;
    color::parse_hex(fill_color)?;

    let n = outline.len();
    let segments: Vec<Segment> = (0..n)
        .map(|i| {
            let next = (i + 1) % n;
            Segment {
                start: outline[i],
                cp1: controls[i].outgoing,
                cp2: controls[next].incoming,
                end: outline[next],
            }
        })
        .collect();

    log::debug!("emitted {} segments", segments.len());
    Ok(CurveEmission {
        segments,
        fill_color: fill_color.to_string(),
        width: canvas_width,
        height: canvas_height,
    })
}

pub fn to_draw_commands(emission: &CurveEmission) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(emission.segments.len() + 3);
    if let Some(first) = emission.segments.first() {
        commands.push(DrawCommand::MoveTo { to: first.start });
    }
    for seg in &emission.segments {
        commands.push(DrawCommand::CurveTo { cp1: seg.cp1, cp2: seg.cp2, to: seg.end });
    }
    commands.push(DrawCommand::Close);
    commands.push(DrawCommand::Fill { color: emission.fill_color.clone() });
    commands
}

impl CurveEmission {
    pub fn to_draw_commands(&self) -> Vec<DrawCommand> {
        to_draw_commands(self)
    }

    pub fn to_svg(&self) -> String {
        svg::to_svg_document(self, self.width, self.height, &self.fill_color)
    }

    /// SVG `d` attribute, always derived from the current segments.
    pub fn path_data(&self) -> String {
        svg::format_path_data(&self.segments)
    }

    pub fn is_closed(&self) -> bool {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => first.start == last.end,
            _ => false,
        }
    }
}
