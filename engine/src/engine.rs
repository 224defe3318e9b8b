use wasm_bindgen::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys::CanvasRenderingContext2d;
use crate::controls::{self, COMPLEXITY_MAX, COMPLEXITY_MIN, PERCENT_MAX};
use crate::emitter::{self, CurveEmission, DrawCommand};
use crate::error::{BlobError, Result};
use crate::pipeline;
use crate::raster::PixelSurface;
use crate::render::{self, CanvasSurface, DrawSurface};
use crate::sampler;
use crate::smoother;
use crate::svg;
use crate::types::{ControlPointPair, Outline, ShapeParameters, PNG_FILE_NAME, SVG_FILE_NAME};

/// Holds the shell's current blob. Each setter re-runs only the stages its
/// parameter feeds: complexity/randomness resample, smoothness re-smooths the
/// existing outline, color re-emits.
#[wasm_bindgen]
pub struct BlobEngine {
    pub(crate) params: ShapeParameters,
    pub(crate) seed: u64,
    pub(crate) outline: Outline,
    pub(crate) controls: Vec<ControlPointPair>,
    pub(crate) emission: CurveEmission,
}

fn init_logging() {
    console_error_panic_hook::set_once();
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            // already set when a second engine is constructed
            let _ = console_log::init_with_level(log::Level::Warn);
        }
    }
}

impl BlobEngine {
    pub fn with_seed(params: ShapeParameters, seed: u64) -> Result<BlobEngine> {
        let blob = pipeline::generate_blob(&params, &mut StdRng::seed_from_u64(seed))?;
        Ok(BlobEngine { params, seed, outline: blob.outline, controls: blob.controls, emission: blob.emission })
    }

    pub fn parameters(&self) -> &ShapeParameters { &self.params }
    pub fn seed(&self) -> u64 { self.seed }
    pub fn outline(&self) -> &[kurbo::Point] { &self.outline }
    pub fn controls(&self) -> &[ControlPointPair] { &self.controls }
    pub fn emission(&self) -> &CurveEmission { &self.emission }

    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        self.emission.to_draw_commands()
    }

    fn resample(&mut self) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.outline = sampler::sample(
            self.params.vertex_count,
            self.params.randomness,
            self.params.center(),
            self.params.base_radius(),
            &mut rng,
        )?;
        log::info!("regenerated {} vertices from seed {}", self.outline.len(), self.seed);
        self.resmooth()
    }

    fn resmooth(&mut self) -> Result<()> {
        self.controls = smoother::smooth(&self.outline, self.params.smoothness)?;
        self.reemit()
    }

    fn reemit(&mut self) -> Result<()> {
        self.emission = emitter::emit(
            &self.outline,
            &self.controls,
            &self.params.fill_color,
            self.params.canvas_width,
            self.params.canvas_height,
        )?;
        Ok(())
    }

    fn percent_to_fraction(key: &'static str, percent: f64) -> Result<f64> {
        if !percent.is_finite() {
            return Err(BlobError::invalid(key, "must be finite"));
        }
        let (value, clamped) = controls::clamp_to_spec(key, percent);
        if clamped {
            log::warn!("{} {} clamped to {}", key, percent, value);
        }
        Ok(value / PERCENT_MAX)
    }

    pub fn set_complexity(&mut self, vertex_count: u32) -> Result<()> {
        let clamped = vertex_count.clamp(COMPLEXITY_MIN, COMPLEXITY_MAX);
        if clamped != vertex_count {
            log::warn!("complexity {} clamped to {}", vertex_count, clamped);
        }
        self.params.vertex_count = clamped as usize;
        self.resample()
    }

    pub fn set_randomness(&mut self, percent: f64) -> Result<()> {
        self.params.randomness = Self::percent_to_fraction("randomness", percent)?;
        self.resample()
    }

    /// Keeps the current outline; only the control points move.
    pub fn set_smoothness(&mut self, percent: f64) -> Result<()> {
        self.params.smoothness = Self::percent_to_fraction("smoothness", percent)?;
        self.resmooth()
    }

    pub fn set_color(&mut self, color: &str) -> Result<()> {
        crate::color::parse_hex(color)?;
        self.params.fill_color = color.to_string();
        self.reemit()
    }

    /// Replaces every parameter at once and resamples with the current seed.
    pub fn set_parameters(&mut self, params: ShapeParameters) -> Result<()> {
        params.validate()?;
        self.params = params;
        self.resample()
    }

    pub fn set_parameters_json(&mut self, json: &str) -> Result<()> {
        self.set_parameters(ShapeParameters::from_json(json)?)
    }

    /// Rebuilds every stage from the current seed.
    pub fn regenerate(&mut self) -> Result<()> {
        self.resample()
    }

    pub fn reseed(&mut self, seed: u64) -> Result<()> {
        self.seed = seed;
        self.resample()
    }

    pub fn randomize(&mut self) -> Result<()> {
        self.reseed(rand::random())?;
        log::info!("new blob from seed {}", self.seed);
        Ok(())
    }

    pub fn export_svg(&self) -> String {
        let document = svg::to_svg_document(&self.emission, self.params.canvas_width, self.params.canvas_height, &self.params.fill_color);
        log::info!("exported {} ({} bytes)", SVG_FILE_NAME, document.len());
        document
    }

    pub fn rasterize(&self) -> Result<PixelSurface> {
        let mut surface = PixelSurface::for_canvas(self.params.canvas_width, self.params.canvas_height)?;
        surface.clear();
        render::replay(&self.draw_commands(), &mut surface)?;
        Ok(surface)
    }

    pub fn export_png(&self) -> Result<Vec<u8>> {
        let png = self.rasterize()?.encode_png()?;
        log::info!("exported {} ({} bytes)", PNG_FILE_NAME, png.len());
        Ok(png)
    }

    pub fn export_png_data_url(&self) -> Result<String> {
        self.rasterize()?.png_data_url()
    }

    pub fn render_to<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        surface.clear();
        render::replay(&self.draw_commands(), surface)
    }
}

#[wasm_bindgen]
impl BlobEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> std::result::Result<BlobEngine, JsValue> {
        init_logging();
        let params = ShapeParameters { canvas_width: width, canvas_height: height, ..ShapeParameters::default() };
        Ok(BlobEngine::with_seed(params, rand::random())?)
    }

    pub fn render(&self, ctx: &CanvasRenderingContext2d) -> std::result::Result<(), JsValue> {
        let mut surface = CanvasSurface::new(ctx, self.params.canvas_width, self.params.canvas_height);
        Ok(self.render_to(&mut surface)?)
    }

    #[wasm_bindgen(js_name = setComplexity)]
    pub fn js_set_complexity(&mut self, vertex_count: u32) -> std::result::Result<(), JsValue> {
        Ok(self.set_complexity(vertex_count)?)
    }

    #[wasm_bindgen(js_name = setSmoothness)]
    pub fn js_set_smoothness(&mut self, percent: f64) -> std::result::Result<(), JsValue> {
        Ok(self.set_smoothness(percent)?)
    }

    #[wasm_bindgen(js_name = setRandomness)]
    pub fn js_set_randomness(&mut self, percent: f64) -> std::result::Result<(), JsValue> {
        Ok(self.set_randomness(percent)?)
    }

    #[wasm_bindgen(js_name = setColor)]
    pub fn js_set_color(&mut self, color: &str) -> std::result::Result<(), JsValue> {
        Ok(self.set_color(color)?)
    }

    #[wasm_bindgen(js_name = randomize)]
    pub fn js_randomize(&mut self) -> std::result::Result<(), JsValue> {
        Ok(self.randomize()?)
    }

    #[wasm_bindgen(js_name = regenerate)]
    pub fn js_regenerate(&mut self) -> std::result::Result<(), JsValue> {
        Ok(self.regenerate()?)
    }

    #[wasm_bindgen(js_name = getParameters)]
    pub fn js_parameters(&self) -> std::result::Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.params)?)
    }

    #[wasm_bindgen(js_name = setParameters)]
    pub fn js_set_parameters(&mut self, value: JsValue) -> std::result::Result<(), JsValue> {
        let params: ShapeParameters = serde_wasm_bindgen::from_value(value)?;
        Ok(self.set_parameters(params)?)
    }

    #[wasm_bindgen(js_name = getParametersJson)]
    pub fn parameters_json(&self) -> String {
        self.params.to_json()
    }

    #[wasm_bindgen(js_name = getParameterSpecs)]
    pub fn parameter_specs_json() -> String {
        controls::parameter_specs_json()
    }

    #[wasm_bindgen(js_name = getDrawCommands)]
    pub fn draw_commands_json(&self) -> String {
        serde_json::to_string(&self.draw_commands()).unwrap_or_else(|_| "[]".to_string())
    }

    #[wasm_bindgen(js_name = getPathData)]
    pub fn path_data(&self) -> String {
        self.emission.path_data()
    }

    #[wasm_bindgen(js_name = exportSvg)]
    pub fn js_export_svg(&self) -> String {
        self.export_svg()
    }

    #[wasm_bindgen(js_name = exportPng)]
    pub fn js_export_png(&self) -> std::result::Result<Vec<u8>, JsValue> {
        Ok(self.export_png()?)
    }

    #[wasm_bindgen(js_name = exportPngDataUrl)]
    pub fn js_export_png_data_url(&self) -> std::result::Result<String, JsValue> {
        Ok(self.export_png_data_url()?)
    }

    #[wasm_bindgen(js_name = svgFileName)]
    pub fn svg_file_name() -> String { SVG_FILE_NAME.to_string() }

    #[wasm_bindgen(js_name = pngFileName)]
    pub fn png_file_name() -> String { PNG_FILE_NAME.to_string() }
}
