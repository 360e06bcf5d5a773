use crate::assets::resample::PremulRaster;
use crate::foundation::error::{LogomarkError, LogomarkResult};
use crate::foundation::math::mul_div255_u8;

pub type PremulRgba8 = [u8; 4];

/// Porter-Duff source-over on premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// Source-over two equal-length premultiplied buffers, writing into `dst`.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> LogomarkResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(LogomarkError::geometry(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Source-over `src` onto a `dst_width x dst_height` premultiplied buffer with its top-left
/// corner at `(x, y)`. Parts of `src` outside the destination are clipped.
pub fn over_at(
    dst: &mut [u8],
    dst_width: u32,
    dst_height: u32,
    src: &PremulRaster,
    x: i64,
    y: i64,
) -> LogomarkResult<()> {
    let expected = (dst_width as usize)
        .checked_mul(dst_height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| LogomarkError::geometry("composite buffer size overflow"))?;
    if dst.len() != expected {
        return Err(LogomarkError::geometry(
            "over_at expects a buffer matching width*height*4",
        ));
    }
    if src.data.len() != (src.width as usize) * (src.height as usize) * 4 {
        return Err(LogomarkError::geometry(
            "over_at source buffer does not match its dimensions",
        ));
    }

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + i64::from(src.width)).min(i64::from(dst_width));
    let y1 = (y + i64::from(src.height)).min(i64::from(dst_height));
    if x0 >= x1 || y0 >= y1 {
        return Ok(());
    }

    let dst_stride = dst_width as usize * 4;
    let src_stride = src.width as usize * 4;
    let run = (x1 - x0) as usize * 4;
    for dy in y0..y1 {
        let sy = (dy - y) as usize;
        let sx = (x0 - x) as usize;
        let d_start = dy as usize * dst_stride + x0 as usize * 4;
        let s_start = sy * src_stride + sx * 4;
        let d_row = &mut dst[d_start..d_start + run];
        let s_row = &src.data[s_start..s_start + run];
        for (d, s) in d_row.chunks_exact_mut(4).zip(s_row.chunks_exact(4)) {
            let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
            d.copy_from_slice(&out);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
