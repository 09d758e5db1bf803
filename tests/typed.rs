//! Typed pixel sources: rgb slices and imgref buffers.

#![cfg(feature = "imgref")]

use enough::Unstoppable;
use rgb::RGBA8;
use zenres::*;

#[test]
fn rgba_slice_source() {
    let pixels = [RGBA8::new(1, 2, 3, 4)];
    let mask = Raster::from_rgba(&pixels, 1, 1).unwrap();
    let color = Raster::from_rgba(&pixels, 1, 1).unwrap();

    let out = encode_fused(&color, &mask, Unstoppable).unwrap();
    assert_eq!(&out[4..8], &[4, 3, 2, 1]);
}

#[test]
fn imgref_source() {
    let buf = vec![RGBA8::new(10, 20, 30, 40); 6];
    let img = imgref::ImgVec::new(buf, 3, 2);

    let raster = Raster::from_imgref(img.as_ref()).unwrap();
    assert_eq!(raster.width, 3);
    assert_eq!(raster.height, 2);
    assert_eq!(raster.rgba(2, 1), (10, 20, 30, 40));
}

#[test]
fn padded_imgref_is_rejected() {
    let buf = vec![RGBA8::new(0, 0, 0, 0); 4];
    let img = imgref::ImgVec::new(buf, 2, 2);
    let sub = img.as_ref().sub_image(0, 0, 1, 2); // stride 2, width 1

    let result = Raster::from_imgref(sub);
    assert!(matches!(
        result.unwrap_err(),
        ResourceError::PaddedRows { stride: 2, width: 1 }
    ));
}
