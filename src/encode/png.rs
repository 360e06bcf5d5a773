use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::ImageEncoder as _;

use crate::foundation::error::{LogomarkError, LogomarkResult};
use crate::render::canvas::Canvas;

/// Encode `canvas` as RGBA8 PNG and move it into place at `path`.
///
/// The bytes go to a sibling temporary file first and are renamed over `path` only once fully
/// written, so a failed save never leaves a truncated PNG at the destination.
pub fn save_png(canvas: &Canvas, path: impl AsRef<Path>) -> LogomarkResult<()> {
    let path = path.as_ref();
    write_atomic(canvas, path).map_err(|e| LogomarkError::save(path, e))?;
    tracing::debug!(path = %path.display(), size = canvas.size(), "wrote png");
    Ok(())
}

/// Encode `canvas` as RGBA8 PNG bytes.
pub fn encode_png(canvas: &Canvas) -> LogomarkResult<Vec<u8>> {
    let mut buf = Vec::new();
    encode_into(canvas, &mut buf)?;
    Ok(buf)
}

fn encode_into<W: std::io::Write>(canvas: &Canvas, w: W) -> anyhow::Result<()> {
    let img = canvas.to_rgba_image()?;
    image::codecs::png::PngEncoder::new(w)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgba8,
        )
        .context("encode png")?;
    Ok(())
}

fn write_atomic(canvas: &Canvas, path: &Path) -> anyhow::Result<()> {
    let tmp = TempPath::sibling_of(path)?;
    {
        let f = File::create(&tmp.path)
            .with_context(|| format!("create temp file '{}'", tmp.path.display()))?;
        let mut w = BufWriter::new(f);
        encode_into(canvas, &mut w)?;
        w.flush().context("flush png")?;
    }
    std::fs::rename(&tmp.path, path)
        .with_context(|| format!("rename into '{}'", path.display()))?;
    tmp.persist();
    Ok(())
}

/// Temporary file removed on drop unless persisted.
struct TempPath {
    path: PathBuf,
    keep: bool,
}

impl TempPath {
    fn sibling_of(path: &Path) -> anyhow::Result<Self> {
        let name = path
            .file_name()
            .with_context(|| format!("output path '{}' has no file name", path.display()))?;
        let mut tmp_name = std::ffi::OsString::from(".");
        tmp_name.push(name);
        tmp_name.push(format!(".tmp-{}", std::process::id()));
        Ok(Self {
            path: path.with_file_name(tmp_name),
            keep: false,
        })
    }

    fn persist(mut self) {
        self.keep = true;
    }
}

impl Drop for TempPath {
    fn drop(&mut self) {
        if !self.keep {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
