//! Conversions between [`Pattern`] and RGB pixel buffers.
//!
//! Rendering expands each palette index to its channel color. A "full
//! repeat" render additionally tiles the base raster horizontally, shifting
//! each tile down by one more `drop`, which flattens the loom's diagonal
//! repeat into a rectangular image.

use crate::{error::Error, pattern::Pattern, pattern::MAX_CHANNELS};
use image::{Rgb, RgbImage};
use std::collections::HashMap;
use tracing::debug;

pub(crate) fn to_image(pattern: &Pattern, full_repeat: bool) -> Result<RgbImage, Error> {
    let width = u32::from(pattern.width());
    let height = u32::from(pattern.height());
    let repeats = if full_repeat {
        if pattern.drop() == 0 {
            return Err(Error::InvalidDrop);
        }
        u32::from(pattern.height()) / u32::from(pattern.drop())
    } else {
        1
    };
    debug!("rendering {repeats} repeat(s) of {width}x{height} pattern");

    let channels = pattern.channels();
    let indices = pattern.bitmap().palette_indices();
    let mut img = RgbImage::new(width * repeats, height);
    if width == 0 || height == 0 {
        return Ok(img);
    }
    for repeat in 0..repeats {
        // tile `repeat` is the base raster cyclically shifted down by
        // `repeat * drop` rows
        let shift = (repeat * u32::from(pattern.drop())) % height;
        for y in 0..height {
            let src_y = (y + height - shift) % height;
            let row_start = src_y as usize * width as usize;
            let row = &indices[row_start..row_start + width as usize];
            for (x, &index) in row.iter().enumerate() {
                let Some(&(r, g, b)) = channels.get(usize::from(index)) else {
                    return Err(Error::InvalidPaletteIndex {
                        index,
                        channels: channels.len(),
                    });
                };
                img.put_pixel(width * repeat + x as u32, y, Rgb([r, g, b]));
            }
        }
    }
    Ok(img)
}

pub(crate) fn from_image(img: &RgbImage, drop: Option<u16>) -> Result<Pattern, Error> {
    let (Ok(width), Ok(height)) = (u16::try_from(img.width()), u16::try_from(img.height())) else {
        return Err(Error::OversizedImage {
            width: img.width(),
            height: img.height(),
        });
    };

    let mut seen: HashMap<[u8; 3], usize> = HashMap::new();
    let mut channels: Vec<(u8, u8, u8)> = Vec::new();
    let mut bitmap = Vec::with_capacity(usize::from(width) * usize::from(height));
    // `pixels` iterates row-major, matching the bitmap layout
    for p in img.pixels() {
        let next = channels.len();
        let index = *seen.entry(p.0).or_insert(next);
        if index == next {
            channels.push((p[0], p[1], p[2]));
            if channels.len() > MAX_CHANNELS {
                return Err(Error::TooManyChannels {
                    count: channels.len(),
                });
            }
        }
        bitmap.push(index as u8);
    }
    debug!("extracted {} distinct colors", channels.len());

    Pattern::builder()
        .width(width)
        .height(height)
        // no drop means a full drop, one repeat per height
        .drop(drop.unwrap_or(height))
        .channels(channels)
        .bitmap(bitmap)
        .build()
}
