use std::path::Path;

use crate::assets::decode::{SourceImage, load_image};
use crate::assets::resample::resample_square_premul;
use crate::encode::png::save_png;
use crate::foundation::error::LogomarkResult;
use crate::layout::geometry::{LogoLayout, LogoSpec};
use crate::render::canvas::Canvas;

/// Composite `source` onto a white disk on a transparent canvas, in memory.
pub fn composite_logo(source: &SourceImage, spec: &LogoSpec) -> LogomarkResult<Canvas> {
    let layout = LogoLayout::compute(spec)?;
    composite_with_layout(source, &layout)
}

fn composite_with_layout(source: &SourceImage, layout: &LogoLayout) -> LogomarkResult<Canvas> {
    let mut canvas = Canvas::new(layout.canvas_size)?;

    tracing::debug!(
        diameter = layout.circle.diameter,
        offset = layout.circle.offset,
        "white disk"
    );
    canvas.fill_disk(&layout.circle)?;

    tracing::debug!(
        side = layout.logo.side,
        offset = layout.logo.offset,
        "logo placement"
    );
    let logo = resample_square_premul(source, layout.logo.side);
    canvas.draw_raster(&logo, layout.logo.offset, layout.logo.offset)?;

    Ok(canvas)
}

/// Load `input`, centre it on a white disk and write the result to `output` as PNG.
///
/// Geometry is checked before any file is touched. On failure nothing is written at `output`.
/// Returns the layout that was rendered.
#[tracing::instrument(skip_all, fields(
    input = %input.as_ref().display(),
    output = %output.as_ref().display(),
    canvas_size = spec.canvas_size,
))]
pub fn process_logo(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    spec: &LogoSpec,
) -> LogomarkResult<LogoLayout> {
    let layout = LogoLayout::compute(spec)?;

    let source = load_image(input.as_ref())?;
    tracing::info!(
        width = source.width(),
        height = source.height(),
        "source logo loaded"
    );

    let canvas = composite_with_layout(&source, &layout)?;
    save_png(&canvas, output.as_ref())?;

    tracing::info!("logo processed");
    Ok(layout)
}

/// [`process_logo`] with [`LogoSpec::HEADER`].
pub fn process_logo_with_preset(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> LogomarkResult<LogoLayout> {
    process_logo(input, output, &LogoSpec::HEADER)
}
