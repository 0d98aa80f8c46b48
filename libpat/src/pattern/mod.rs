#![allow(clippy::module_name_repetitions)]

pub(crate) mod bitmap;
pub(crate) mod quality;

use crate::{error::Error, raster, serde};
use bitmap::BitMap;
use bon::bon;
use image::RgbImage;
use quality::{rows_per_inch, COLUMNS_PER_INCH, INCHES_PER_METRE};
use std::{fs, path::Path};
use tracing::{debug, info};

/// Most channels a .PAT palette can address: one byte per slot per plane
pub const MAX_CHANNELS: usize = 256;

/// A typed representation of a .PAT pattern file
///
/// Holds the raster of palette indices, the ordered color palette the
/// indices refer to, the vertical repeat offset (`drop`) and the legacy
/// quality code. Derived physical sizing is exposed through pure accessors;
/// nothing mutates a [`Pattern`] after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    bitmap: BitMap,
    drop: u16,
    channels: Vec<(u8, u8, u8)>,
    qual: u16,
}

#[bon]
impl Pattern {
    /// Creates a new [`Pattern`]
    ///
    /// # Errors
    ///
    /// Errors with [`Error::TooManyChannels`] if more than 256 channels are
    /// provided, and with [`Error::MismatchedBitmap`] if the bitmap length
    /// is not `width * height`.
    #[builder]
    pub fn new(
        width: u16,
        height: u16,
        drop: u16,
        channels: Vec<(u8, u8, u8)>,
        bitmap: Vec<u8>,
        #[builder(default)] qual: u16,
    ) -> Result<Self, Error> {
        if channels.len() > MAX_CHANNELS {
            return Err(Error::TooManyChannels {
                count: channels.len(),
            });
        }
        if bitmap.len() != usize::from(width) * usize::from(height) {
            return Err(Error::MismatchedBitmap {
                width_height: (width, height),
                bitmap_length: bitmap.len(),
            });
        }
        Ok(Self {
            bitmap: BitMap::new(width, height, bitmap),
            drop,
            channels,
            qual,
        })
    }
}

impl Pattern {
    /// Tries to decode a [`Self`] from an uncompressed .PAT buffer
    ///
    /// The decoded pattern always carries all 256 palette slots, used or
    /// not; the format stores full planes.
    ///
    /// # Errors
    ///
    /// Errors with [`Error::TruncatedFormat`] if the buffer is shorter than
    /// the fixed header region plus the raster its width/height declare.
    /// Compressed .PAT files are not supported and surface the same way,
    /// since their payload is shorter than the declared raster.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, Error> {
        serde::decode(buf)
    }

    /// Serializes [`Self`] into the .PAT wire layout
    ///
    /// The output is exactly `1536 + width * height` bytes.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        serde::encode(self)
    }

    /// Tries to read [`Self`] from a provided file path
    ///
    /// # Errors
    ///
    /// This function will error if the file cannot be read or holds invalid
    /// data. See [`Self::from_bytes`] for decode errors.
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self, Error> {
        let buf = fs::read(filename)?;
        debug!("read {} bytes", buf.len());
        Self::from_bytes(&buf)
    }

    /// Attempts to serialize and save [`Self`] as a file at the provided path
    ///
    /// # Errors
    ///
    /// This will error if unable to open and/or write to the provided filename
    pub fn into_file(self, filename: impl AsRef<Path>) -> Result<(), Error> {
        fs::write(filename, self.to_bytes())?;
        info!("Finished writing to file");
        Ok(())
    }

    /// Renders the pattern as an RGB image; see [`raster::to_image`]
    ///
    /// # Errors
    ///
    /// Errors with [`Error::InvalidPaletteIndex`] if a bitmap byte has no
    /// channel, and with [`Error::InvalidDrop`] if a full repeat is
    /// requested while `drop` is 0.
    pub fn to_image(&self, full_repeat: bool) -> Result<RgbImage, Error> {
        raster::to_image(self, full_repeat)
    }

    /// Builds a pattern from an RGB image; see [`raster::from_image`]
    ///
    /// # Errors
    ///
    /// Errors with [`Error::TooManyChannels`] if the image holds more than
    /// 256 distinct colors.
    pub fn from_image(img: &RgbImage, drop: Option<u16>) -> Result<Self, Error> {
        raster::from_image(img, drop)
    }

    /// Returns a reference to the pattern's [`BitMap`]
    #[must_use]
    pub const fn bitmap(&self) -> &BitMap {
        &self.bitmap
    }

    /// Returns the pattern width
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.bitmap.width()
    }

    /// Returns the pattern height
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.bitmap.height()
    }

    /// Returns the vertical repeat offset
    #[must_use]
    pub const fn drop(&self) -> u16 {
        self.drop
    }

    /// Returns the ordered color palette
    #[must_use]
    pub fn channels(&self) -> &[(u8, u8, u8)] {
        &self.channels
    }

    /// Returns the raw quality code (0 = unknown)
    #[must_use]
    pub const fn qual(&self) -> u16 {
        self.qual
    }

    /// Returns the loom's horizontal resolution in columns per inch
    #[must_use]
    pub const fn columns_per_inch(&self) -> u16 {
        COLUMNS_PER_INCH
    }

    /// Returns the loom's horizontal resolution in columns per metre
    #[must_use]
    pub fn columns_per_metre(&self) -> f64 {
        f64::from(COLUMNS_PER_INCH) * INCHES_PER_METRE
    }

    /// Returns the vertical resolution in rows per inch decoded from the
    /// quality code, or 0 if the code encodes no known resolution
    #[must_use]
    pub const fn rows_per_inch(&self) -> u16 {
        rows_per_inch(self.qual)
    }

    /// Returns the vertical resolution in rows per metre, or 0 if unknown
    #[must_use]
    pub fn rows_per_metre(&self) -> f64 {
        f64::from(self.rows_per_inch()) * INCHES_PER_METRE
    }

    /// Returns the woven size of the pattern in inches, `(width, height)`
    ///
    /// # Errors
    ///
    /// Errors with [`Error::UnknownResolution`] if the quality code encodes
    /// no vertical resolution; the height is undefined in that case.
    pub fn size_inches(&self) -> Result<(f64, f64), Error> {
        let rows = self.rows_per_inch();
        if rows == 0 {
            return Err(Error::UnknownResolution { qual: self.qual });
        }
        Ok((
            f64::from(self.width()) / f64::from(COLUMNS_PER_INCH),
            f64::from(self.height()) / f64::from(rows),
        ))
    }

    /// Returns the woven size of the pattern in metres, `(width, height)`
    ///
    /// # Errors
    ///
    /// Errors with [`Error::UnknownResolution`]; see [`Self::size_inches`]
    pub fn size_metres(&self) -> Result<(f64, f64), Error> {
        let (w, h) = self.size_inches()?;
        Ok((w / INCHES_PER_METRE, h / INCHES_PER_METRE))
    }
}
