//! Binary (de)serialization of the uncompressed .PAT layout.
//!
//! All header fields sit at fixed offsets. Width, height and quality are
//! big-endian; drop is little-endian. The three palette planes are 256
//! bytes each and are not contiguous. Note the write bases for the green
//! and blue planes sit one byte above their read bases; the reference
//! tooling has always staggered these and existing files depend on it.

use crate::{error::Error, pattern::Pattern};
use tracing::{debug, trace};

pub(crate) const OFFSET_WIDTH: usize = 0;
pub(crate) const OFFSET_HEIGHT: usize = 2;
pub(crate) const OFFSET_QUALITY: usize = 18;
pub(crate) const OFFSET_DROP: usize = 30;

pub(crate) const GREEN_PLANE_READ: usize = 512;
pub(crate) const GREEN_PLANE_WRITE: usize = 513;
pub(crate) const RED_PLANE: usize = 768;
pub(crate) const BLUE_PLANE_READ: usize = 1024;
pub(crate) const BLUE_PLANE_WRITE: usize = 1025;
pub(crate) const PLANE_LEN: usize = 256;

pub(crate) const BITMAP_START: usize = 1536;

fn read_u16_be(buf: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([buf[offset], buf[offset + 1]])
}

fn read_u16_le(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

/// Decodes an uncompressed .PAT buffer into a [`Pattern`].
///
/// Always yields all 256 palette slots; the format stores full planes
/// whether or not the bitmap uses them.
pub(crate) fn decode(buf: &[u8]) -> Result<Pattern, Error> {
    if buf.len() < BITMAP_START {
        return Err(Error::TruncatedFormat {
            expected: BITMAP_START,
            actual: buf.len(),
        });
    }

    let width = read_u16_be(buf, OFFSET_WIDTH);
    let height = read_u16_be(buf, OFFSET_HEIGHT);
    let qual = read_u16_be(buf, OFFSET_QUALITY);
    let drop = read_u16_le(buf, OFFSET_DROP);
    debug!("width: {width}, height: {height}, qual: {qual}, drop: {drop}");

    let raster_len = usize::from(width) * usize::from(height);
    let expected = BITMAP_START + raster_len;
    if buf.len() < expected {
        return Err(Error::TruncatedFormat {
            expected,
            actual: buf.len(),
        });
    }

    let greens = &buf[GREEN_PLANE_READ..GREEN_PLANE_READ + PLANE_LEN];
    let reds = &buf[RED_PLANE..RED_PLANE + PLANE_LEN];
    let blues = &buf[BLUE_PLANE_READ..BLUE_PLANE_READ + PLANE_LEN];
    let channels = (0..PLANE_LEN)
        .map(|i| (reds[i], greens[i], blues[i]))
        .collect();

    let bitmap = buf[BITMAP_START..expected].to_vec();
    trace!("read {} bitmap bytes", bitmap.len());

    Pattern::builder()
        .width(width)
        .height(height)
        .drop(drop)
        .channels(channels)
        .bitmap(bitmap)
        .qual(qual)
        .build()
}

/// Serializes a [`Pattern`] into the uncompressed .PAT layout.
///
/// The buffer is exactly `1536 + bitmap` bytes; palette slots past the
/// pattern's channels and every unspecified header byte stay zero. A
/// quality code of 0 means "unknown" and the field is left absent rather
/// than written.
pub(crate) fn encode(pattern: &Pattern) -> Vec<u8> {
    let raster = pattern.bitmap().palette_indices();
    let mut buf = vec![0u8; BITMAP_START + raster.len()];

    buf[OFFSET_WIDTH..OFFSET_WIDTH + 2].copy_from_slice(&pattern.width().to_be_bytes());
    buf[OFFSET_HEIGHT..OFFSET_HEIGHT + 2].copy_from_slice(&pattern.height().to_be_bytes());
    buf[OFFSET_DROP..OFFSET_DROP + 2].copy_from_slice(&pattern.drop().to_le_bytes());
    if pattern.qual() > 0 {
        buf[OFFSET_QUALITY..OFFSET_QUALITY + 2].copy_from_slice(&pattern.qual().to_be_bytes());
    }

    // Plane bytes go out in the reference tooling's order: one channel at a
    // time, green then red then blue, at the staggered write bases.
    for (i, &(r, g, b)) in pattern.channels().iter().enumerate() {
        buf[GREEN_PLANE_WRITE + i] = g;
        buf[RED_PLANE + i] = r;
        buf[BLUE_PLANE_WRITE + i] = b;
    }

    buf[BITMAP_START..].copy_from_slice(raster);
    debug!("encoded {} bytes", buf.len());
    buf
}
