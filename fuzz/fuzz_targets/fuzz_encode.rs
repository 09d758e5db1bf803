#![no_main]
use libfuzzer_sys::fuzz_target;
use zenres::*;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let width = u32::from(data[0] % 64);
    let height = u32::from(data[1] % 64);
    let layout = match data[2] % 5 {
        0 => PixelLayout::Gray8,
        1 => PixelLayout::Rgb8,
        2 => PixelLayout::Bgr8,
        3 => PixelLayout::Rgba8,
        _ => PixelLayout::Bgra8,
    };

    let Ok(raster) = Raster::new(&data[3..], width, height, layout) else {
        return;
    };

    // Both modes must succeed on any valid raster and uphold the
    // fixed-size output invariant
    let expected = HEADER_LEN + RECORD_LEN * (width * height) as usize;

    let thresholded = encode_threshold(&raster, enough::Unstoppable).unwrap();
    assert_eq!(thresholded.len(), expected);

    let fused = encode_fused(&raster, &raster, enough::Unstoppable).unwrap();
    assert_eq!(fused.len(), expected);

    // Every hue in the body must decode below 360
    for record in fused[HEADER_LEN..].chunks_exact(RECORD_LEN) {
        let hue = u16::from_be_bytes([record[4], record[5]]);
        assert!(hue < 360);
    }
});
