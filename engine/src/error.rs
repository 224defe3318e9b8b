use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlobError {
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("failed to parse SVG: {0}")]
    SvgParse(String),
    #[error("failed to encode image: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, BlobError>;

impl BlobError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        BlobError::InvalidParameter { name, reason: reason.into() }
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, BlobError::InvalidParameter { .. })
    }
}

impl From<BlobError> for JsValue {
    fn from(err: BlobError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// Fractions (smoothness, randomness) live in `[0, 1]`.
pub(crate) fn ensure_fraction(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(BlobError::invalid(name, "must be finite"));
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(BlobError::invalid(name, format!("{} is outside [0, 1]", value)));
    }
    Ok(())
}

pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(BlobError::invalid(name, format!("{} must be a positive number", value)));
    }
    Ok(())
}

pub(crate) fn ensure_vertex_count(name: &'static str, count: usize) -> Result<()> {
    if count < 3 {
        return Err(BlobError::invalid(name, format!("need at least 3 vertices, got {}", count)));
    }
    Ok(())
}
