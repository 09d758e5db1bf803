//! # zenres
//!
//! Encoder for the RES packed raster resource format consumed by
//! hue-indexed signage displays.
//!
//! ## The RES Stream
//!
//! A RES stream is a tiny write-only container: a 4-byte header (`u16`
//! little-endian width, then height) followed by one 6-byte record per
//! pixel in row-major order. Each record carries the mask pixel's RGBA
//! channels reversed to `A,B,G,R`, then the color pixel's hue angle as a
//! big-endian `u16` in `[0,360)`. There is no magic number and no
//! checksum: the consuming device expects exactly this absence of
//! metadata.
//!
//! ## Modes
//!
//! - **Fused**: a color raster supplies the hue, a same-size mask raster
//!   supplies the RGBA snapshot. Rasters of differing size are rejected
//!   before any output exists.
//! - **Threshold**: a single raster is binarized by channel sum
//!   (see [`THRESHOLD_CUTOFF`]); its original RGB still supplies the hue.
//!
//! ## Non-Goals
//!
//! - No decoder — the stream is write-only from this crate's perspective
//! - No compression, no extra color-space modes, no format versioning
//! - No image loading or text rendering (bring your own pixel buffers)
//!
//! ## Usage
//!
//! ```no_run
//! use zenres::{EncodeRequest, PixelLayout, Raster};
//! use enough::Unstoppable;
//!
//! let color_pixels: &[u8] = &[]; // RGBA bytes from your image source
//! let mask_pixels: &[u8] = &[];
//!
//! let color = Raster::new(color_pixels, 1920, 1080, PixelLayout::Rgba8)?;
//! let mask = Raster::new(mask_pixels, 1920, 1080, PixelLayout::Rgba8)?;
//!
//! let stream = EncodeRequest::new().encode_fused(&color, &mask, Unstoppable)?;
//!
//! // Threshold mode needs only one raster
//! let binarized = zenres::encode_threshold(&mask, Unstoppable)?;
//! # Ok::<(), zenres::ResourceError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod hue;
mod limits;
mod pixel;
mod raster;

pub mod res;

mod encode;

// Re-exports
pub use encode::{EncodeRequest, encode_fused, encode_threshold};
#[cfg(feature = "std")]
pub use encode::{write_fused_to_path, write_threshold_to_path};
pub use enough::{Stop, Unstoppable};
pub use error::ResourceError;
pub use hue::hue_degrees;
pub use limits::Limits;
pub use pixel::PixelLayout;
pub use raster::Raster;
pub use res::{HEADER_LEN, RECORD_LEN, THRESHOLD_CUTOFF};
