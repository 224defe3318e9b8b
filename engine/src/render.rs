use kurbo::Point;
use web_sys::CanvasRenderingContext2d;
use crate::emitter::DrawCommand;
use crate::error::Result;

/// Anything that can consume immediate-mode path instructions.
pub trait DrawSurface {
    fn clear(&mut self);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn curve_to(&mut self, cp1: Point, cp2: Point, to: Point);
    fn close_path(&mut self);
    fn fill(&mut self, color: &str) -> Result<()>;
}

pub fn replay<S: DrawSurface + ?Sized>(commands: &[DrawCommand], surface: &mut S) -> Result<()> {
    surface.begin_path();
    for cmd in commands {
        match cmd {
            DrawCommand::MoveTo { to } => surface.move_to(*to),
            DrawCommand::CurveTo { cp1, cp2, to } => surface.curve_to(*cp1, *cp2, *to),
            DrawCommand::Close => surface.close_path(),
            DrawCommand::Fill { color } => surface.fill(color)?,
        }
    }
    Ok(())
}

pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        CanvasSurface { ctx, width, height }
    }
}

impl DrawSurface for CanvasSurface<'_> {
    fn clear(&mut self) { self.ctx.clear_rect(0.0, 0.0, self.width, self.height); }
    fn begin_path(&mut self) { self.ctx.begin_path(); }
    fn move_to(&mut self, p: Point) { self.ctx.move_to(p.x, p.y); }
    fn curve_to(&mut self, cp1: Point, cp2: Point, to: Point) {
        self.ctx.bezier_curve_to(cp1.x, cp1.y, cp2.x, cp2.y, to.x, to.y);
    }
    fn close_path(&mut self) { self.ctx.close_path(); }
    fn fill(&mut self, color: &str) -> Result<()> {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        Ok(())
    }
}
