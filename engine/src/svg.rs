use kurbo::{BezPath, PathEl, Point};
use crate::emitter::{CurveEmission, Segment};
use crate::error::{BlobError, Result};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// A blob read back out of an exported SVG document.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedBlob {
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub segments: Vec<Segment>,
}

fn fmt_point(p: Point) -> String {
    format!("{:.1},{:.1}", p.x, p.y)
}

/// `M{x},{y} C{cp1} {cp2} {end} ... Z` with one fractional digit throughout.
pub fn format_path_data(segments: &[Segment]) -> String {
    let mut parts = Vec::with_capacity(segments.len() + 2);
    if let Some(first) = segments.first() {
        parts.push(format!("M{}", fmt_point(first.start)));
    }
    for seg in segments {
        parts.push(format!("C{} {} {}", fmt_point(seg.cp1), fmt_point(seg.cp2), fmt_point(seg.end)));
    }
    parts.push("Z".to_string());
    parts.join(" ")
}

pub fn to_svg_document(emission: &CurveEmission, width: f64, height: f64, fill_color: &str) -> String {
    format!(
        "<svg viewBox=\"0 0 {} {}\" xmlns=\"{}\">\n<path d=\"{}\" fill=\"{}\"/>\n</svg>",
        width, height, SVG_NS, format_path_data(&emission.segments), fill_color
    )
}

pub fn parse_svg_document(text: &str) -> Result<ParsedBlob> {
    let doc = roxmltree::Document::parse(text).map_err(|e| BlobError::SvgParse(format!("{:?}", e)))?;
    let root = doc.root_element();
    if root.tag_name().name() != "svg" {
        return Err(BlobError::SvgParse(format!("root element is <{}>", root.tag_name().name())));
    }
    let viewbox = root
        .attribute("viewBox")
        .ok_or_else(|| BlobError::SvgParse("missing viewBox".to_string()))?;
    let parts: Vec<f64> = viewbox.split_whitespace().filter_map(|s| s.parse::<f64>().ok()).collect();
    if parts.len() != 4 {
        return Err(BlobError::SvgParse(format!("malformed viewBox '{}'", viewbox)));
    }
    let (width, height) = (parts[2], parts[3]);

    let path = root
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name() == "path")
        .ok_or_else(|| BlobError::SvgParse("no <path> element".to_string()))?;
    let d = path.attribute("d").unwrap_or("");
    let fill = path.attribute("fill").unwrap_or("#000000").to_string();
    let bez = BezPath::from_svg(d).map_err(|e| BlobError::SvgParse(format!("bad path data: {:?}", e)))?;
    let segments = closed_cubic_loop(&bez)?;

    Ok(ParsedBlob { width, height, fill, segments })
}

fn closed_cubic_loop(bez: &BezPath) -> Result<Vec<Segment>> {
    let mut elements = bez.elements().iter();
    let start = match elements.next() {
        Some(PathEl::MoveTo(p)) => *p,
        _ => return Err(BlobError::SvgParse("path must begin with M".to_string())),
    };
    let mut segments = Vec::new();
    let mut current = start;
    let mut closed = false;
    for el in elements {
        match el {
            PathEl::CurveTo(p1, p2, p3) if !closed => {
                segments.push(Segment { start: current, cp1: *p1, cp2: *p2, end: *p3 });
                current = *p3;
            }
            PathEl::ClosePath if !closed => closed = true,
            // kurbo re-opens a subpath at the start point after Z
            PathEl::MoveTo(p) if closed && *p == start => {}
            other => return Err(BlobError::SvgParse(format!("unexpected path element {:?}", other))),
        }
    }
    if !closed || segments.is_empty() {
        return Err(BlobError::SvgParse("path is not a closed cubic loop".to_string()));
    }
    Ok(segments)
}
