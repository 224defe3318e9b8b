use crate::error::{BlobError, Result};

/// Parses `#rgb` or `#rrggbb` into straight RGBA bytes (alpha always 255).
pub fn parse_hex(color: &str) -> Result<[u8; 4]> {
    let hex = color
        .strip_prefix('#')
        .ok_or_else(|| BlobError::invalid("fillColor", format!("'{}' must start with '#'", color)))?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(BlobError::invalid("fillColor", format!("'{}' is not a hex color", color)));
    }
    let value = u32::from_str_radix(hex, 16)
        .map_err(|_| BlobError::invalid("fillColor", format!("'{}' is not a hex color", color)))?;
    match hex.len() {
        6 => {
            let r = ((value >> 16) & 0xff) as u8; let g = ((value >> 8) & 0xff) as u8; let b = (value & 0xff) as u8;
            Ok([r, g, b, 255])
        }
        3 => {
            let r = ((value >> 8) & 0xf) as u8; let g = ((value >> 4) & 0xf) as u8; let b = (value & 0xf) as u8;
            Ok([r * 17, g * 17, b * 17, 255])
        }
        _ => Err(BlobError::invalid("fillColor", format!("'{}' must be #rgb or #rrggbb", color))),
    }
}
