use std::path::PathBuf;

use super::*;
use crate::assets::resample::PremulRaster;

fn sample_canvas() -> Canvas {
    let mut canvas = Canvas::new(8).unwrap();
    let dot = PremulRaster {
        width: 2,
        height: 2,
        data: vec![255, 0, 0, 255].repeat(4),
    };
    canvas.draw_raster(&dot, 3, 3).unwrap();
    canvas
}

fn out_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_png").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn encode_png_decodes_back_to_same_pixels() {
    let canvas = sample_canvas();
    let bytes = encode_png(&canvas).unwrap();
    let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (8, 8));
    assert_eq!(img.get_pixel(3, 3).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
}

#[test]
fn save_png_overwrites_and_leaves_no_temp_file() {
    let dir = out_dir("overwrite");
    let path = dir.join("out.png");
    std::fs::write(&path, b"stale").unwrap();

    save_png(&sample_canvas(), &path).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (8, 8));
    let leftovers: Vec<_> = std::fs::read_dir(&dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().contains(".tmp-"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn save_png_into_missing_dir_is_save_error() {
    let path = PathBuf::from("target")
        .join("unit_png")
        .join("no-such-dir")
        .join("out.png");
    let err = save_png(&sample_canvas(), &path).unwrap_err();
    assert!(matches!(err, LogomarkError::Save { .. }));
    assert!(!path.exists());
}

#[test]
fn encode_png_is_deterministic() {
    let canvas = sample_canvas();
    assert_eq!(encode_png(&canvas).unwrap(), encode_png(&canvas).unwrap());
}
