use kurbo::Shape as _;

use crate::assets::resample::PremulRaster;
use crate::effects::composite::{over_at, over_in_place};
use crate::foundation::error::{LogomarkError, LogomarkResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;
use crate::layout::geometry::CircleRegion;

const FLATTEN_TOLERANCE: f64 = 0.1;

/// Square premultiplied RGBA8 surface the logo is composited into.
///
/// Starts fully transparent; every drawing call source-overs onto the existing pixels.
pub struct Canvas {
    pixmap: vello_cpu::Pixmap,
}

impl Canvas {
    /// Allocate a transparent `size x size` canvas.
    pub fn new(size: u32) -> LogomarkResult<Self> {
        if size == 0 {
            return Err(LogomarkError::geometry("canvas size must be > 0"));
        }
        let side: u16 = size
            .try_into()
            .map_err(|_| LogomarkError::geometry("canvas size exceeds u16"))?;
        let mut pixmap = vello_cpu::Pixmap::new(side, side);
        pixmap.data_as_u8_slice_mut().fill(0);
        Ok(Self { pixmap })
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        u32::from(self.pixmap.width())
    }

    /// Fill an antialiased opaque white disk inscribed in the circle's bounding square.
    pub fn fill_disk(&mut self, circle: &CircleRegion) -> LogomarkResult<()> {
        if circle.diameter == 0 {
            return Ok(());
        }

        let path = ellipse_to_cpu_path(&circle.ellipse());
        let (w, h) = (self.pixmap.width(), self.pixmap.height());
        let mut layer = vello_cpu::Pixmap::new(w, h);
        {
            let mut ctx = vello_cpu::RenderContext::new(w, h);
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
            ctx.fill_path(&path);
            ctx.flush();
            ctx.render_to_pixmap(&mut layer);
        }

        over_in_place(self.pixmap.data_as_u8_slice_mut(), layer.data_as_u8_slice())
    }

    /// Source-over a premultiplied raster with its top-left corner at `(x, y)`.
    pub fn draw_raster(&mut self, src: &PremulRaster, x: i64, y: i64) -> LogomarkResult<()> {
        let size = self.size();
        over_at(self.pixmap.data_as_u8_slice_mut(), size, size, src, x, y)
    }

    /// Premultiplied RGBA8 pixels, row-major.
    pub fn as_premul_rgba8(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Straight RGBA8 copy of the canvas, ready for encoding.
    pub fn to_rgba_image(&self) -> LogomarkResult<image::RgbaImage> {
        let mut straight = self.as_premul_rgba8().to_vec();
        unpremultiply_rgba8_in_place(&mut straight);
        let size = self.size();
        image::RgbaImage::from_raw(size, size, straight)
            .ok_or_else(|| LogomarkError::geometry("canvas buffer does not match its size"))
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas").field("size", &self.size()).finish()
    }
}

fn ellipse_to_cpu_path(ellipse: &kurbo::Ellipse) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in ellipse.path_elements(FLATTEN_TOLERANCE) {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
