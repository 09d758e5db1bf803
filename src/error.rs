use alloc::string::String;
use enough::StopReason;

/// Errors from RES resource encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ResourceError {
    #[error(
        "raster dimensions differ: color {color_width}x{color_height}, mask {mask_width}x{mask_height}"
    )]
    DimensionMismatch {
        color_width: u32,
        color_height: u32,
        mask_width: u32,
        mask_height: u32,
    },

    /// The stream header stores width and height as `u16`, so anything
    /// larger cannot be represented.
    #[error("dimensions too large for a u16 header: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("pixel buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("padded pixel rows are not supported: stride {stride} != width {width}")]
    PaddedRows { stride: usize, width: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StopReason> for ResourceError {
    fn from(r: StopReason) -> Self {
        ResourceError::Cancelled(r)
    }
}
