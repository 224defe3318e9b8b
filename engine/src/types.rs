use kurbo::Point;
use serde::{Serialize, Deserialize};
use crate::color;
use crate::error::{self, BlobError, Result};

/// Base radius as a share of the shorter canvas side.
pub const BASE_RADIUS_RATIO: f64 = 0.35;
/// Jitter amplitude as a share of the base radius at randomness 1.
pub const JITTER_SCALE: f64 = 0.5;
/// Control-arm length as a share of the neighbour chord at smoothness 1.
pub const TANGENT_SCALE: f64 = 0.3;

pub const SVG_FILE_NAME: &str = "blob-shape.svg";
pub const PNG_FILE_NAME: &str = "blob-shape.png";

/// Closed polygon skeleton, indices wrap around.
pub type Outline = Vec<Point>;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct ControlPointPair {
    pub incoming: Point,
    pub outgoing: Point,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeParameters {
    pub vertex_count: usize,
    pub smoothness: f64, // 0.0 to 1.0
    pub randomness: f64, // 0.0 to 1.0
    pub fill_color: String,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl Default for ShapeParameters {
    fn default() -> Self {
        ShapeParameters {
            vertex_count: 6,
            smoothness: 0.7,
            randomness: 0.5,
            fill_color: "#ff1b69".to_string(),
            canvas_width: 400.0,
            canvas_height: 400.0,
        }
    }
}

impl ShapeParameters {
    pub fn validate(&self) -> Result<()> {
        error::ensure_vertex_count("vertexCount", self.vertex_count)?;
        error::ensure_fraction("smoothness", self.smoothness)?;
        error::ensure_fraction("randomness", self.randomness)?;
        error::ensure_positive("canvasWidth", self.canvas_width)?;
        error::ensure_positive("canvasHeight", self.canvas_height)?;
        color::parse_hex(&self.fill_color)?;
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let params: ShapeParameters = serde_json::from_str(json)
            .map_err(|e| BlobError::invalid("parameters", e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn center(&self) -> Point {
        Point::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }

    pub fn base_radius(&self) -> f64 {
        self.canvas_width.min(self.canvas_height) * BASE_RADIUS_RATIO
    }
}
