use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Range,
    Color,
}

/// Describes one control the shell exposes (slider or color picker).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ParameterSpec {
    pub name: String,
    pub key: String,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
    pub kind: ParameterKind,
}

pub const COMPLEXITY_MIN: u32 = 3;
pub const COMPLEXITY_MAX: u32 = 20;
pub const PERCENT_MAX: f64 = 100.0;

pub fn parameter_specs() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec { name: "Complexity".to_string(), key: "complexity".to_string(), min: COMPLEXITY_MIN as f64, max: COMPLEXITY_MAX as f64, default: 6.0, step: 1.0, kind: ParameterKind::Range },
        ParameterSpec { name: "Smoothness".to_string(), key: "smoothness".to_string(), min: 0.0, max: PERCENT_MAX, default: 70.0, step: 1.0, kind: ParameterKind::Range },
        ParameterSpec { name: "Randomness".to_string(), key: "randomness".to_string(), min: 0.0, max: PERCENT_MAX, default: 50.0, step: 1.0, kind: ParameterKind::Range },
        ParameterSpec { name: "Color".to_string(), key: "color".to_string(), min: 0.0, max: 0.0, default: 0.0, step: 0.0, kind: ParameterKind::Color },
    ]
}

pub fn get_spec_by_key(key: &str) -> Option<ParameterSpec> {
    parameter_specs().into_iter().find(|s| s.key == key)
}

pub fn parameter_specs_json() -> String {
    serde_json::to_string(&parameter_specs()).unwrap_or_else(|_| "[]".to_string())
}

/// Clamps a slider value into its control's range. Returns the value and
/// whether clamping happened.
pub fn clamp_to_spec(key: &str, value: f64) -> (f64, bool) {
    match get_spec_by_key(key) {
        Some(spec) if spec.kind == ParameterKind::Range => {
            let clamped = value.clamp(spec.min, spec.max);
            (clamped, clamped != value)
        }
        _ => (value, false),
    }
}
