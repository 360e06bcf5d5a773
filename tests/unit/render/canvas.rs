use super::*;

fn px(canvas: &Canvas, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * canvas.size() + x) * 4) as usize;
    let d = canvas.as_premul_rgba8();
    [d[i], d[i + 1], d[i + 2], d[i + 3]]
}

#[test]
fn new_canvas_is_fully_transparent() {
    let canvas = Canvas::new(16).unwrap();
    assert_eq!(canvas.size(), 16);
    assert_eq!(canvas.as_premul_rgba8().len(), 16 * 16 * 4);
    assert!(canvas.as_premul_rgba8().iter().all(|&b| b == 0));
}

#[test]
fn new_canvas_rejects_zero_and_oversized() {
    assert!(matches!(Canvas::new(0), Err(LogomarkError::Geometry(_))));
    assert!(matches!(
        Canvas::new(u32::from(u16::MAX) + 1),
        Err(LogomarkError::Geometry(_))
    ));
}

#[test]
fn disk_is_white_inside_and_transparent_outside() {
    let mut canvas = Canvas::new(64).unwrap();
    let circle = CircleRegion {
        diameter: 48,
        offset: 8,
    };
    canvas.fill_disk(&circle).unwrap();

    let r = circle.radius();
    for y in 0..64u32 {
        for x in 0..64u32 {
            let dx = f64::from(x) + 0.5 - 32.0;
            let dy = f64::from(y) + 0.5 - 32.0;
            let d = (dx * dx + dy * dy).sqrt();
            let p = px(&canvas, x, y);
            if d > r + 1.0 {
                assert_eq!(p[3], 0, "outside pixel ({x}, {y})");
            } else if d < r - 1.0 {
                assert_eq!(p, [255, 255, 255, 255], "inside pixel ({x}, {y})");
            }
        }
    }
}

#[test]
fn disk_edge_is_antialiased() {
    let mut canvas = Canvas::new(64).unwrap();
    canvas
        .fill_disk(&CircleRegion {
            diameter: 47,
            offset: 8,
        })
        .unwrap();
    let partial = canvas
        .as_premul_rgba8()
        .chunks_exact(4)
        .filter(|p| p[3] > 0 && p[3] < 255)
        .count();
    assert!(partial > 0);
}

#[test]
fn zero_diameter_disk_draws_nothing() {
    let mut canvas = Canvas::new(8).unwrap();
    canvas
        .fill_disk(&CircleRegion {
            diameter: 0,
            offset: 4,
        })
        .unwrap();
    assert!(canvas.as_premul_rgba8().iter().all(|&b| b == 0));
}

#[test]
fn draw_raster_blends_over_disk() {
    let mut canvas = Canvas::new(32).unwrap();
    canvas
        .fill_disk(&CircleRegion {
            diameter: 32,
            offset: 0,
        })
        .unwrap();
    let logo = PremulRaster {
        width: 2,
        height: 2,
        data: vec![0, 0, 0, 128].repeat(4),
    };
    canvas.draw_raster(&logo, 15, 15).unwrap();
    assert_eq!(px(&canvas, 15, 15), [127, 127, 127, 255]);
    assert_eq!(px(&canvas, 17, 17), [255, 255, 255, 255]);
}

#[test]
fn to_rgba_image_unpremultiplies() {
    let mut canvas = Canvas::new(4).unwrap();
    let half = PremulRaster {
        width: 1,
        height: 1,
        data: vec![128, 128, 128, 128],
    };
    canvas.draw_raster(&half, 0, 0).unwrap();
    let img = canvas.to_rgba_image().unwrap();
    assert_eq!(img.dimensions(), (4, 4));
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 128]);
    assert_eq!(img.get_pixel(3, 3).0, [0, 0, 0, 0]);
}
