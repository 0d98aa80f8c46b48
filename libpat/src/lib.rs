//! # libpat
//!
//!
//! This library provides datatypes and i/o functionality for the Ned Graphics
//! `.PAT` file format, a proprietary format used by carpet-loom tooling (such
//! as the Brintons design pipeline) to describe woven patterns.
//!
//! A `.PAT` file is a fixed-layout binary: a header with the pattern's
//! dimensions, vertical repeat offset ("drop") and a legacy "quality" code,
//! followed by three 256-byte palette planes (green, red, blue) and a
//! row-major bitmap of one palette index per pixel.
//!
//! ### History
//!
//! No public specification for the format exists; the layout implemented here
//! was recovered from the vendor tooling's own read/write behavior. Two
//! long-standing quirks are preserved deliberately: the green and blue
//! palette planes are written one byte above the offsets they are read from,
//! and the quality field is simply absent (left zero) when the resolution is
//! unknown. Existing files and tools depend on both.
//!
//! ### Limitations
//!
//! Only the uncompressed variant of the format is supported. Compressed
//! `.PAT` files carry less data than the raster their header declares and are
//! rejected at decode as truncated input.
//!
//! ### Usage
//!
//! The primary use case for this library is to allow conversions from and to
//! the `.PAT` pattern file format.
//!
//! #### Encoding and decoding a pattern
//!
//! ```rust
//! use libpat::Pattern;
//!
//! fn main() -> anyhow::Result<()> {
//!     // a 2x2 pattern with a two-color palette and a known quality code
//!     let pattern = Pattern::builder()
//!         .width(2)
//!         .height(2)
//!         .drop(1)
//!         .channels(vec![(255, 0, 0), (0, 0, 255)])
//!         .bitmap(vec![0, 1, 1, 0])
//!         .qual(75)
//!         .build()?;
//!
//!     let bytes = pattern.to_bytes();
//!     assert_eq!(bytes.len(), 1536 + 4);
//!
//!     let decoded = Pattern::from_bytes(&bytes)?;
//!     assert_eq!((decoded.width(), decoded.height()), (2, 2));
//!     assert_eq!(decoded.drop(), 1);
//!     assert_eq!(decoded.rows_per_inch(), 5);
//!     Ok(())
//! }
//! ```
//!
//! #### Rendering a pattern as an image
//!
//! Rendering expands every palette index to its RGB channel. Passing
//! `full_repeat = true` instead tiles the pattern horizontally with each tile
//! shifted down by one more `drop`, which visualizes the diagonal repeat the
//! loom actually weaves.
//!
//! ```rust
//! use libpat::Pattern;
//!
//! fn main() -> anyhow::Result<()> {
//!     let pattern = Pattern::builder()
//!         .width(4)
//!         .height(4)
//!         .drop(2)
//!         .channels(vec![(0, 0, 0), (255, 255, 255)])
//!         .bitmap(vec![0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0])
//!         .build()?;
//!
//!     let single = pattern.to_image(false)?;
//!     assert_eq!((single.width(), single.height()), (4, 4));
//!
//!     // height / drop = 2 tiles side by side
//!     let repeat = pattern.to_image(true)?;
//!     assert_eq!((repeat.width(), repeat.height()), (8, 4));
//!
//!     let back = Pattern::from_image(&single, None)?;
//!     assert_eq!(back.channels().len(), 2);
//!     assert_eq!(back.drop(), 4);
//!     Ok(())
//! }
//! ```
//!

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    missing_docs
)]

mod error;
/// Module containing types for .PAT pattern files
pub mod pattern;
mod raster;
mod serde;

pub use error::Error;
pub use pattern::bitmap::BitMap;
pub use pattern::quality::{rows_per_inch, COLUMNS_PER_INCH};
pub use pattern::{Pattern, MAX_CHANNELS};
