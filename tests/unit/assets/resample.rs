use super::*;

fn solid(width: u32, height: u32, px: [u8; 4]) -> SourceImage {
    let data = px
        .iter()
        .copied()
        .cycle()
        .take((width * height * 4) as usize)
        .collect();
    SourceImage::from_rgba8(width, height, data).unwrap()
}

#[test]
fn resample_hits_exact_side() {
    let src = solid(37, 11, [255, 0, 0, 255]);
    let out = resample_square_premul(&src, 9);
    assert_eq!(out.width, 9);
    assert_eq!(out.height, 9);
    assert_eq!(out.data.len(), 9 * 9 * 4);
    for px in out.data.chunks_exact(4) {
        assert_eq!(px, &[255, 0, 0, 255]);
    }
}

#[test]
fn resample_keeps_full_transparency() {
    let src = solid(8, 8, [12, 34, 56, 0]);
    let out = resample_square_premul(&src, 4);
    assert!(out.data.iter().all(|&b| b == 0));
}

#[test]
fn resample_does_not_bleed_hidden_color() {
    // Left column opaque red, right column transparent green.
    let data = vec![
        255, 0, 0, 255, 0, 255, 0, 0, //
        255, 0, 0, 255, 0, 255, 0, 0,
    ];
    let src = SourceImage::from_rgba8(2, 2, data).unwrap();
    let out = resample_square_premul(&src, 1);
    let px = &out.data[..4];
    assert_eq!(px[1], 0);
    assert_eq!(px[0], px[3]);
    assert!(px[3] > 0 && px[3] < 255);
}

#[test]
fn resample_to_zero_side_is_empty() {
    let src = solid(4, 4, [255, 255, 255, 255]);
    let out = resample_square_premul(&src, 0);
    assert_eq!(out.width, 0);
    assert!(out.data.is_empty());
}
