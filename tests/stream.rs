//! Byte-exact RES stream invariants: header, record layout, ordering,
//! validation and failure policy.

use enough::Unstoppable;
use zenres::*;

fn rgba_raster(pixels: &[u8], w: u32, h: u32) -> Raster<'_> {
    Raster::new(pixels, w, h, PixelLayout::Rgba8).unwrap()
}

#[test]
fn header_is_little_endian() {
    let w = 258usize; // 0x0102, so byte order is observable
    let h = 3usize;
    let pixels = vec![0u8; w * h * 4];
    let raster = rgba_raster(&pixels, w as u32, h as u32);

    let out = encode_threshold(&raster, Unstoppable).unwrap();
    assert_eq!(u16::from_le_bytes([out[0], out[1]]), 258);
    assert_eq!(u16::from_le_bytes([out[2], out[3]]), 3);
    assert_eq!(&out[0..2], &[2, 1]);
}

#[test]
fn body_is_six_bytes_per_pixel() {
    let (w, h) = (7usize, 5usize);
    let pixels = vec![9u8; w * h * 4];
    let raster = rgba_raster(&pixels, w as u32, h as u32);

    let out = encode_fused(&raster, &raster, Unstoppable).unwrap();
    assert_eq!(out.len(), HEADER_LEN + RECORD_LEN * w * h);
}

#[test]
fn zero_extent_is_header_only() {
    let raster = rgba_raster(&[], 0, 0);
    let out = encode_threshold(&raster, Unstoppable).unwrap();
    assert_eq!(out, vec![0, 0, 0, 0]);
}

#[test]
fn mask_channels_are_reversed() {
    let mask_pixels = vec![
        0, 0, 0, 0, // all zero
        255, 255, 255, 255, // all max
        1, 2, 3, 4, // distinct channels
    ];
    let color_pixels = vec![0u8; 3 * 4];
    let mask = rgba_raster(&mask_pixels, 3, 1);
    let color = rgba_raster(&color_pixels, 3, 1);

    let out = encode_fused(&color, &mask, Unstoppable).unwrap();
    assert_eq!(&out[4..8], &[0, 0, 0, 0]);
    assert_eq!(&out[10..14], &[255, 255, 255, 255]);
    assert_eq!(&out[16..20], &[4, 3, 2, 1]);
}

#[test]
fn records_are_row_major() {
    // R channel encodes the pixel's position as y * 2 + x
    let mut mask_pixels = vec![0u8; 2 * 2 * 4];
    for y in 0..2usize {
        for x in 0..2usize {
            mask_pixels[(y * 2 + x) * 4] = (y * 2 + x) as u8;
        }
    }
    let color_pixels = vec![0u8; 2 * 2 * 4];
    let mask = rgba_raster(&mask_pixels, 2, 2);
    let color = rgba_raster(&color_pixels, 2, 2);

    let out = encode_fused(&color, &mask, Unstoppable).unwrap();
    for record in 0..4 {
        // Byte 3 of each record is the R channel
        assert_eq!(out[HEADER_LEN + record * RECORD_LEN + 3], record as u8);
    }
}

#[test]
fn dimension_mismatch_is_rejected() {
    let color_pixels = vec![0u8; 10 * 10 * 4];
    let mask_pixels = vec![0u8; 10 * 11 * 4];
    let color = rgba_raster(&color_pixels, 10, 10);
    let mask = rgba_raster(&mask_pixels, 10, 11);

    let result = encode_fused(&color, &mask, Unstoppable);
    match result.unwrap_err() {
        ResourceError::DimensionMismatch {
            color_height,
            mask_height,
            ..
        } => {
            assert_eq!(color_height, 10);
            assert_eq!(mask_height, 11);
        }
        other => panic!("expected DimensionMismatch, got {other:?}"),
    }
}

#[test]
fn threshold_boundary_is_strict() {
    let pixels = vec![
        100, 100, 99, 0, // sum 299: set
        100, 100, 100, 0, // sum 300: unset
        255, 255, 255, 255, // sum 1020: unset
        0, 0, 0, 0, // sum 0: set
    ];
    let raster = rgba_raster(&pixels, 4, 1);

    let out = encode_threshold(&raster, Unstoppable).unwrap();
    assert_eq!(&out[4..8], &[255, 255, 255, 255]);
    assert_eq!(&out[10..14], &[0, 0, 0, 0]);
    assert_eq!(&out[16..20], &[0, 0, 0, 0]);
    assert_eq!(&out[22..26], &[255, 255, 255, 255]);
}

#[test]
fn threshold_keeps_pre_threshold_hue() {
    let pixels = vec![
        100, 100, 99, 0, // set, but hue still comes from (100,100,99)
        100, 100, 100, 0, // unset, achromatic
    ];
    let raster = rgba_raster(&pixels, 2, 1);

    let out = encode_threshold(&raster, Unstoppable).unwrap();
    assert_eq!(&out[8..10], &hue_degrees(100, 100, 99).to_be_bytes());
    assert_eq!(&out[14..16], &0u16.to_be_bytes());
}

#[test]
fn color_alpha_is_discarded() {
    let mask_pixels = vec![10u8, 20, 30, 40];
    let opaque = vec![200u8, 50, 25, 255];
    let transparent = vec![200u8, 50, 25, 0];

    let mask = rgba_raster(&mask_pixels, 1, 1);
    let a = encode_fused(&rgba_raster(&opaque, 1, 1), &mask, Unstoppable).unwrap();
    let b = encode_fused(&rgba_raster(&transparent, 1, 1), &mask, Unstoppable).unwrap();
    assert_eq!(a, b);
}

#[test]
fn fused_hue_is_big_endian() {
    // Pure green: hue 120, observable byte order in the record
    let color_pixels = vec![0u8, 255, 0, 255];
    let mask_pixels = vec![0u8; 4];
    let out = encode_fused(
        &rgba_raster(&color_pixels, 1, 1),
        &rgba_raster(&mask_pixels, 1, 1),
        Unstoppable,
    )
    .unwrap();
    assert_eq!(&out[8..10], &[0, 120]);
}

#[test]
fn bgra_mask_resolves_before_reversal() {
    // Logical RGBA (1,2,3,4) stored as BGRA bytes
    let mask_pixels = vec![3u8, 2, 1, 4];
    let mask = Raster::new(&mask_pixels, 1, 1, PixelLayout::Bgra8).unwrap();
    let color = rgba_raster(&[0, 0, 0, 0], 1, 1);

    let out = encode_fused(&color, &mask, Unstoppable).unwrap();
    assert_eq!(&out[4..8], &[4, 3, 2, 1]);
}

#[test]
fn gray_and_rgb_masks_report_opaque_alpha() {
    let gray = Raster::new(&[7u8], 1, 1, PixelLayout::Gray8).unwrap();
    let color = rgba_raster(&[0, 0, 0, 0], 1, 1);
    let out = encode_fused(&color, &gray, Unstoppable).unwrap();
    assert_eq!(&out[4..8], &[255, 7, 7, 7]);

    let rgb = Raster::new(&[1u8, 2, 3], 1, 1, PixelLayout::Rgb8).unwrap();
    let out = encode_fused(&color, &rgb, Unstoppable).unwrap();
    assert_eq!(&out[4..8], &[255, 3, 2, 1]);
}

#[test]
fn limits_reject_large_output() {
    let pixels = vec![0u8; 2 * 2 * 4];
    let raster = rgba_raster(&pixels, 2, 2);

    let limits = Limits {
        max_pixels: Some(1),
        ..Default::default()
    };
    let result = EncodeRequest::new()
        .with_limits(&limits)
        .encode_threshold(&raster, Unstoppable);
    match result.unwrap_err() {
        ResourceError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let limits = Limits {
        max_memory_bytes: Some(8),
        ..Default::default()
    };
    let result = EncodeRequest::new()
        .with_limits(&limits)
        .encode_threshold(&raster, Unstoppable);
    assert!(matches!(
        result.unwrap_err(),
        ResourceError::LimitExceeded(_)
    ));
}

#[test]
fn dimensions_must_fit_u16_header() {
    let width = u32::from(u16::MAX) + 1;
    let pixels = vec![0u8; width as usize]; // Gray8, one row
    let raster = Raster::new(&pixels, width, 1, PixelLayout::Gray8).unwrap();

    let result = encode_threshold(&raster, Unstoppable);
    match result.unwrap_err() {
        ResourceError::DimensionsTooLarge { width: w, .. } => assert_eq!(w, width),
        other => panic!("expected DimensionsTooLarge, got {other:?}"),
    }
}

#[test]
fn short_buffer_is_rejected() {
    let pixels = vec![0u8; 11]; // 3 RGBA pixels need 12
    let result = Raster::new(&pixels, 3, 1, PixelLayout::Rgba8);
    match result.unwrap_err() {
        ResourceError::BufferTooSmall { needed, actual } => {
            assert_eq!(needed, 12);
            assert_eq!(actual, 11);
        }
        other => panic!("expected BufferTooSmall, got {other:?}"),
    }
}
