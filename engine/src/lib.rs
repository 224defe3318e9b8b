pub mod error;
pub mod types;
pub mod color;
pub mod controls;
pub mod sampler;
pub mod smoother;
pub mod emitter;
pub mod pipeline;
pub mod svg;
pub mod render;
pub mod raster;
pub mod engine;

pub use engine::BlobEngine;
pub use error::{BlobError, Result};
pub use types::*;
pub use emitter::{emit, to_draw_commands, CurveEmission, DrawCommand, Segment};
pub use pipeline::{generate_blob, generate_outline_and_curve, Blob};
pub use sampler::sample;
pub use smoother::smooth;
pub use svg::{parse_svg_document, to_svg_document, ParsedBlob};
pub use kurbo::Point;
