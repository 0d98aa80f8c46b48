use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
/// Possible `libpat` errors
pub enum Error {
    /// Error returned if a pattern holds more colors than the format's
    /// single-byte palette planes can address
    #[error("pattern has {count} channels, the .PAT palette holds at most 256")]
    TooManyChannels {
        /// number of channels requested
        count: usize,
    },
    /// Error returned if a buffer is too short for the fixed header region
    /// plus the raster its width/height fields declare
    #[error("truncated .PAT data: need {expected} bytes, got {actual}")]
    TruncatedFormat {
        /// bytes required by the declared dimensions
        expected: usize,
        /// bytes actually provided
        actual: usize,
    },
    /// Error returned if width/height do not match
    /// the length of the bitmap
    #[error("width/height does not match bitmap length. width/height: {width_height:?}, bitmap length: {bitmap_length}")]
    MismatchedBitmap {
        /// pattern width/height
        width_height: (u16, u16),
        /// bitmap length
        bitmap_length: usize,
    },
    /// Error returned if a bitmap byte refers to a palette slot the pattern
    /// does not have
    #[error("bitmap index {index} is out of range for a palette of {channels} channels")]
    InvalidPaletteIndex {
        /// the offending bitmap byte
        index: u8,
        /// number of channels in the pattern
        channels: usize,
    },
    /// Error returned when physical sizing is requested but the quality code
    /// does not encode a known vertical resolution
    #[error("quality code {qual} does not encode a known vertical resolution")]
    UnknownResolution {
        /// the pattern's quality code
        qual: u16,
    },
    /// Error returned if an image is too large for the format's 16-bit
    /// dimension fields
    #[error("image of {width}x{height} exceeds the format's 16-bit dimensions")]
    OversizedImage {
        /// image width in pixels
        width: u32,
        /// image height in pixels
        height: u32,
    },
    /// Error returned if a full repeat is requested with a zero drop
    #[error("cannot tile a full repeat with drop = 0")]
    InvalidDrop,
    /// I/O error from the file helpers
    #[error("i/o error")]
    Io(#[from] std::io::Error),
}
