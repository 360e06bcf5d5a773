use image::imageops::FilterType;

use crate::assets::decode::SourceImage;
use crate::foundation::math::premultiply_rgba8_in_place;

/// Premultiplied RGBA8 raster produced by [`resample_square_premul`].
#[derive(Clone, Debug)]
pub struct PremulRaster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8, row-major, tightly packed.
    pub data: Vec<u8>,
}

/// Resample `src` to exactly `side x side` with bilinear filtering.
///
/// Filtering runs on premultiplied pixels so color under fully transparent texels does not
/// bleed into the edges, and the alpha channel is carried through untouched.
pub fn resample_square_premul(src: &SourceImage, side: u32) -> PremulRaster {
    if side == 0 || src.width() == 0 || src.height() == 0 {
        return PremulRaster {
            width: side,
            height: side,
            data: vec![0; (side as usize) * (side as usize) * 4],
        };
    }

    let mut premul = src.as_image().clone();
    premultiply_rgba8_in_place(&mut premul);

    let resized = image::imageops::resize(&premul, side, side, FilterType::Triangle);
    tracing::debug!(
        src_w = src.width(),
        src_h = src.height(),
        side,
        "resampled logo"
    );

    PremulRaster {
        width: side,
        height: side,
        data: resized.into_raw(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/resample.rs"]
mod tests;
