use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{LogomarkError, LogomarkResult};
use crate::foundation::math::half_floor;

/// Largest canvas side the CPU rasterizer can allocate.
pub const MAX_CANVAS_SIZE: u32 = u16::MAX as u32;

/// Largest circle diameter or logo side, as a multiple of the canvas side.
pub const MAX_REGION_SCALE: u32 = 4;

/// Sizing parameters for one compositing run.
///
/// `circle_ratio` is a fraction of the canvas side and `logo_ratio` a fraction of the circle
/// diameter. Values in `(0, 1]` keep the logo inside the circle; other finite values are
/// accepted and produce clipped or empty regions, as long as neither region grows past
/// [`MAX_REGION_SCALE`] times the canvas side.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LogoSpec {
    /// Side of the square output canvas, in pixels.
    pub canvas_size: u32,
    /// Circle diameter as a fraction of `canvas_size`.
    pub circle_ratio: f64,
    /// Logo side as a fraction of the circle diameter.
    pub logo_ratio: f64,
}

impl LogoSpec {
    /// Parameters of the default command-line run.
    pub const DEFAULT: Self = Self {
        canvas_size: 200,
        circle_ratio: 0.90,
        logo_ratio: 0.75,
    };

    /// Tighter parameters sized for a document header.
    pub const HEADER: Self = Self {
        canvas_size: 150,
        circle_ratio: 0.85,
        logo_ratio: 0.80,
    };

    /// Parse a spec from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> LogomarkResult<Self> {
        let spec: Self = serde_json::from_reader(r).context("parse logo spec JSON")?;
        Ok(spec)
    }

    /// Parse a spec from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> LogomarkResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open logo spec JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject parameters the rasterizer cannot honor.
    ///
    /// Ratios are only checked for finiteness; their range is the caller's responsibility.
    pub fn validate(&self) -> LogomarkResult<()> {
        if self.canvas_size == 0 {
            return Err(LogomarkError::geometry("canvas_size must be > 0"));
        }
        if self.canvas_size > MAX_CANVAS_SIZE {
            return Err(LogomarkError::geometry(format!(
                "canvas_size {} exceeds {MAX_CANVAS_SIZE}",
                self.canvas_size
            )));
        }
        if !self.circle_ratio.is_finite() {
            return Err(LogomarkError::geometry("circle_ratio must be finite"));
        }
        if !self.logo_ratio.is_finite() {
            return Err(LogomarkError::geometry("logo_ratio must be finite"));
        }
        Ok(())
    }
}

impl Default for LogoSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The white disk, as the square it is inscribed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircleRegion {
    /// Disk diameter in pixels.
    pub diameter: u32,
    /// Top-left offset on both axes.
    pub offset: i64,
}

impl CircleRegion {
    /// Bounding square in canvas coordinates.
    pub fn rect(&self) -> kurbo::Rect {
        let x0 = self.offset as f64;
        let x1 = x0 + f64::from(self.diameter);
        kurbo::Rect::new(x0, x0, x1, x1)
    }

    /// Disk outline inscribed in [`CircleRegion::rect`].
    pub fn ellipse(&self) -> kurbo::Ellipse {
        kurbo::Ellipse::from_rect(self.rect())
    }

    /// Disk radius in pixels.
    pub fn radius(&self) -> f64 {
        f64::from(self.diameter) / 2.0
    }
}

/// Square the resampled logo is placed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogoRegion {
    /// Side of the resampled logo in pixels.
    pub side: u32,
    /// Top-left offset on both axes, relative to the canvas.
    pub offset: i64,
}

impl LogoRegion {
    /// Footprint in canvas coordinates.
    pub fn rect(&self) -> kurbo::Rect {
        let x0 = self.offset as f64;
        let x1 = x0 + f64::from(self.side);
        kurbo::Rect::new(x0, x0, x1, x1)
    }
}

/// Nested regions derived from a [`LogoSpec`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogoLayout {
    /// Canvas side in pixels.
    pub canvas_size: u32,
    /// The white disk.
    pub circle: CircleRegion,
    /// The logo footprint.
    pub logo: LogoRegion,
}

impl LogoLayout {
    /// Compute both regions.
    ///
    /// Sizes truncate toward zero and both offsets are centred on the canvas. The logo offset is
    /// derived from the canvas side, not from the circle origin, which fixes rounding at odd
    /// pixel counts.
    pub fn compute(spec: &LogoSpec) -> LogomarkResult<Self> {
        spec.validate()?;

        let canvas = i64::from(spec.canvas_size);
        let diameter = scale_px(spec.canvas_size, spec.circle_ratio);
        let side = scale_px(diameter, spec.logo_ratio);

        let limit = spec
            .canvas_size
            .saturating_mul(MAX_REGION_SCALE)
            .min(MAX_CANVAS_SIZE);
        if diameter > limit {
            return Err(LogomarkError::geometry(format!(
                "circle diameter {diameter} exceeds {limit}"
            )));
        }
        if side > limit {
            return Err(LogomarkError::geometry(format!(
                "logo side {side} exceeds {limit}"
            )));
        }

        Ok(Self {
            canvas_size: spec.canvas_size,
            circle: CircleRegion {
                diameter,
                offset: half_floor(canvas - i64::from(diameter)),
            },
            logo: LogoRegion {
                side,
                offset: half_floor(canvas - i64::from(side)),
            },
        })
    }

    /// Centre of the canvas. The disk centre sits up to half a pixel above-left of it.
    pub fn center(&self) -> kurbo::Point {
        let c = f64::from(self.canvas_size) / 2.0;
        kurbo::Point::new(c, c)
    }
}

// Float-to-int `as` saturates: negative ratios give 0.
fn scale_px(len: u32, ratio: f64) -> u32 {
    (f64::from(len) * ratio).floor() as u32
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
