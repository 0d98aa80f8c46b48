/// Raster of palette indices backing a pattern, row-major, top-to-bottom
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord)]
pub struct BitMap {
    /// The width of the pattern in columns
    width: u16,
    /// The height of the pattern in rows
    height: u16,
    /// Palette index per pixel
    indices: Vec<u8>,
}

impl BitMap {
    pub(crate) fn new(width: u16, height: u16, indices: Vec<u8>) -> Self {
        debug_assert_eq!(usize::from(width) * usize::from(height), indices.len());
        Self {
            width,
            height,
            indices,
        }
    }

    /// Returns the width of the pattern
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Returns the height of the pattern
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Returns the palette indices of the pattern
    #[must_use]
    pub fn palette_indices(&self) -> &[u8] {
        &self.indices
    }
}
