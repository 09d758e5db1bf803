use alloc::borrow::Cow;
use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::ComponentBytes as _;

use crate::error::ResourceError;
use crate::pixel::PixelLayout;

/// An immutable source raster: a row-major pixel buffer plus dimensions.
///
/// Pixels may be borrowed (zero-copy from the caller's buffer) or owned.
/// The constructor validates that the buffer covers `width * height`
/// pixels; extra trailing bytes are ignored.
#[derive(Clone, Debug)]
pub struct Raster<'a> {
    pixels: Cow<'a, [u8]>,
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
}

impl<'a> Raster<'a> {
    /// Borrow a pixel buffer as a raster.
    pub fn new(
        pixels: &'a [u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> Result<Self, ResourceError> {
        check_buffer(pixels.len(), width, height, layout)?;
        Ok(Self {
            pixels: Cow::Borrowed(pixels),
            width,
            height,
            layout,
        })
    }

    /// Take ownership of a pixel buffer.
    pub fn from_vec(
        pixels: Vec<u8>,
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> Result<Raster<'static>, ResourceError> {
        check_buffer(pixels.len(), width, height, layout)?;
        Ok(Raster {
            pixels: Cow::Owned(pixels),
            width,
            height,
            layout,
        })
    }

    /// Borrow a typed RGBA8 slice as a raster.
    #[cfg(feature = "rgb")]
    pub fn from_rgba(
        pixels: &'a [rgb::RGBA8],
        width: u32,
        height: u32,
    ) -> Result<Self, ResourceError> {
        Self::new(pixels.as_bytes(), width, height, PixelLayout::Rgba8)
    }

    /// Borrow an [`imgref::ImgRef`] of RGBA8 pixels as a raster.
    ///
    /// The buffer must be contiguous; returns
    /// [`ResourceError::PaddedRows`] if the stride exceeds the width.
    #[cfg(feature = "imgref")]
    pub fn from_imgref(img: imgref::ImgRef<'a, rgb::RGBA8>) -> Result<Self, ResourceError> {
        let (width, height, stride) = (img.width(), img.height(), img.stride());
        if stride != width {
            return Err(ResourceError::PaddedRows { stride, width });
        }
        Self::new(
            img.into_buf().as_bytes(),
            width as u32,
            height as u32,
            PixelLayout::Rgba8,
        )
    }

    /// Access the raw pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Whether the pixel data is borrowed (zero-copy from the caller).
    pub fn is_borrowed(&self) -> bool {
        matches!(self.pixels, Cow::Borrowed(_))
    }

    /// Read the pixel at `(x, y)` as an RGBA tuple.
    ///
    /// 3- and 1-channel layouts report alpha 255.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the raster.
    pub fn rgba(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        assert!(x < self.width && y < self.height);
        let idx = y as usize * self.width as usize + x as usize;
        let pixels = self.pixels();
        match self.layout {
            PixelLayout::Rgba8 => {
                let off = idx * 4;
                (
                    pixels[off],
                    pixels[off + 1],
                    pixels[off + 2],
                    pixels[off + 3],
                )
            }
            PixelLayout::Bgra8 => {
                let off = idx * 4;
                (
                    pixels[off + 2],
                    pixels[off + 1],
                    pixels[off],
                    pixels[off + 3],
                )
            }
            PixelLayout::Rgb8 => {
                let off = idx * 3;
                (pixels[off], pixels[off + 1], pixels[off + 2], 255)
            }
            PixelLayout::Bgr8 => {
                let off = idx * 3;
                (pixels[off + 2], pixels[off + 1], pixels[off], 255)
            }
            PixelLayout::Gray8 => {
                let g = pixels[idx];
                (g, g, g, 255)
            }
        }
    }

    /// Read the pixel at `(x, y)` as an RGB tuple, discarding alpha.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the raster.
    pub fn rgb(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let (r, g, b, _) = self.rgba(x, y);
        (r, g, b)
    }
}

fn check_buffer(
    len: usize,
    width: u32,
    height: u32,
    layout: PixelLayout,
) -> Result<(), ResourceError> {
    let needed = (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(layout.bytes_per_pixel()))
        .ok_or(ResourceError::DimensionsTooLarge { width, height })?;
    if len < needed {
        return Err(ResourceError::BufferTooSmall {
            needed,
            actual: len,
        });
    }
    Ok(())
}
