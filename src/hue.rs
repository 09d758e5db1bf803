//! RGB → HSV hue extraction.
//!
//! The stream carries only the hue angle; saturation and value are
//! reconstructed device-side at fixed settings.

/// Hue angle of an 8-bit RGB value, in whole degrees `[0, 359]`.
///
/// Channels are normalized to `[0, 1]` and run through the canonical HSV
/// hue formula. Achromatic pixels (`r == g == b`) map to hue 0. The
/// angle is truncated toward zero, then reduced mod 360 to absorb the
/// floating-point edge case at exactly 360.0.
pub fn hue_degrees(r: u8, g: u8, b: u8) -> u16 {
    let r = f32::from(r) / 255.0;
    let g = f32::from(g) / 255.0;
    let b = f32::from(b) / 255.0;

    let max_c = r.max(g).max(b);
    let min_c = r.min(g).min(b);
    if min_c == max_c {
        return 0;
    }
    let delta = max_c - min_c;

    let rc = (max_c - r) / delta;
    let gc = (max_c - g) / delta;
    let bc = (max_c - b) / delta;

    let h = if r == max_c {
        bc - gc
    } else if g == max_c {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    // h lies in [-1, 5], so h/6 lies in (-1, 1) and a single wrap
    // lands it in [0, 1)
    let h = h / 6.0;
    let h = if h < 0.0 { h + 1.0 } else { h };

    ((h * 360.0) as u16) % 360
}
