use super::*;

#[test]
fn mul_div255_rounds_and_hits_endpoints() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(0, 255), 0);
    assert_eq!(mul_div255_u8(255, 128), 128);
    assert_eq!(mul_div255_u16(100, 128), 50);
}

#[test]
fn premultiply_zeroes_color_under_transparent_alpha() {
    let mut px = vec![200, 100, 50, 0, 200, 100, 50, 255];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![0, 0, 0, 0, 200, 100, 50, 255]);
}

#[test]
fn unpremultiply_recovers_straight_color_for_white() {
    let mut px = vec![128, 128, 128, 128];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![255, 255, 255, 128]);
}

#[test]
fn half_floor_rounds_toward_negative_infinity() {
    assert_eq!(half_floor(65), 32);
    assert_eq!(half_floor(20), 10);
    assert_eq!(half_floor(-3), -2);
}
