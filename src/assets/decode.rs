use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{LogomarkError, LogomarkResult};

/// A decoded source raster with straight (non-premultiplied) RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct SourceImage {
    rgba: image::RgbaImage,
}

impl SourceImage {
    /// Wrap tightly packed straight RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> LogomarkResult<Self> {
        let rgba = image::RgbaImage::from_raw(width, height, data).ok_or_else(|| {
            LogomarkError::Other(anyhow::anyhow!(
                "rgba8 buffer does not match {width}x{height}"
            ))
        })?;
        Ok(Self { rgba })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.rgba.height()
    }

    /// Straight RGBA8 pixels, row-major.
    pub fn as_rgba8(&self) -> &[u8] {
        self.rgba.as_raw()
    }

    pub(crate) fn as_image(&self) -> &image::RgbaImage {
        &self.rgba
    }
}

/// Read and decode the image at `path`, keeping its alpha channel.
///
/// Missing files, read failures and undecodable bytes all map to [`LogomarkError::Load`].
pub fn load_image(path: impl AsRef<Path>) -> LogomarkResult<SourceImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .context("read source image")
        .map_err(|e| LogomarkError::load(path, e))?;
    let img = decode_rgba8(&bytes).map_err(|e| LogomarkError::load(path, e))?;
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "loaded source image"
    );
    Ok(img)
}

/// Decode an in-memory encoded image (PNG, JPEG, ...).
pub fn decode_image(bytes: &[u8]) -> LogomarkResult<SourceImage> {
    Ok(decode_rgba8(bytes)?)
}

fn decode_rgba8(bytes: &[u8]) -> anyhow::Result<SourceImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(SourceImage {
        rgba: dyn_img.to_rgba8(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
