//! Integration tests for alpha compositing.

use quickcheck_macros::quickcheck;
use swatch_color::{Color, blend};

fn alpha_from(byte: u8) -> f64 {
    f64::from(byte) / 255.0
}

#[test]
fn test_blend_half_blue_over_white_rounds_half_up() {
    // Red and green: (0 * 0.5 + 255 * 1 * 0.5) / 1 = 127.5 -> 128
    assert_eq!(
        blend(Color::rgba(0, 0, 255, 0.5), Color::WHITE),
        Color {
            r: 128,
            g: 128,
            b: 255,
            a: 1.0
        }
    );
}

#[test]
fn test_blend_opaque_top_occludes() {
    let red = Color::rgb(255, 0, 0);
    assert_eq!(blend(red, Color::rgba(0, 255, 0, 0.3)), red);
    assert_eq!(blend(red, Color::TRANSPARENT), red);
}

#[test]
fn test_blend_two_transparent_layers() {
    assert_eq!(
        blend(Color::rgba(9, 9, 9, 0.0), Color::rgba(200, 100, 50, 0.0)),
        Color::TRANSPARENT
    );
}

#[test]
fn test_blend_two_translucent_layers() {
    // a = 0.5 + 0.5 * 0.5 = 0.75
    // r = (255 * 0.5 + 0 * 0.5 * 0.5) / 0.75 = 170
    // b = (0 * 0.5 + 255 * 0.5 * 0.5) / 0.75 = 85
    let result = blend(Color::rgba(255, 0, 0, 0.5), Color::rgba(0, 0, 255, 0.5));
    assert_eq!(result, Color::rgba(170, 0, 85, 0.75));
}

#[test]
fn test_blend_is_not_commutative() {
    let a = Color::rgba(255, 0, 0, 0.5);
    let b = Color::rgb(0, 0, 255);
    assert_ne!(blend(a, b), blend(b, a));
    assert_eq!(a.over(b), blend(a, b));
}

#[quickcheck]
fn prop_transparent_top_keeps_opaque_bottom(r: u8, g: u8, b: u8) -> bool {
    let bottom = Color::rgb(r, g, b);
    blend(Color::TRANSPARENT, bottom) == bottom
}

#[quickcheck]
fn prop_transparent_top_keeps_bottom_alpha(r: u8, g: u8, b: u8, a: u8) -> bool {
    let bottom = Color::rgba(r, g, b, alpha_from(a));
    blend(Color::TRANSPARENT, bottom).a.to_bits() == bottom.a.to_bits()
}

#[quickcheck]
fn prop_opaque_top_wins(top: (u8, u8, u8), bottom: (u8, u8, u8), a: u8) -> bool {
    let top = Color::rgb(top.0, top.1, top.2);
    blend(top, Color::rgba(bottom.0, bottom.1, bottom.2, alpha_from(a))) == top
}

#[quickcheck]
fn prop_blend_over_opaque_is_opaque(top: (u8, u8, u8, u8), bottom: (u8, u8, u8)) -> bool {
    let top = Color::rgba(top.0, top.1, top.2, alpha_from(top.3));
    let result = blend(top, Color::rgb(bottom.0, bottom.1, bottom.2));
    (result.a - 1.0).abs() < 1e-12
}
