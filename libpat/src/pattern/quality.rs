//! Interpretation of the legacy "quality" code.
//!
//! The quality field encodes the loom's vertical resolution (rows per inch)
//! through one of two disjoint numeric ranges that were used in different
//! eras of the tooling:
//!
//! - old era: `71..=79`, rows per inch is the final digit
//! - new era: `501..=1099` where the last two digits fall in `3..=24`,
//!   rows per inch is those last two digits
//!
//! Anything else (including `0`, which stands for "field absent") carries no
//! resolution information.

/// Columns per inch woven by the target looms. A fixed mechanical property
/// of the hardware, not a per-file field.
pub const COLUMNS_PER_INCH: u16 = 7;

/// Inches per metre, for the derived metric accessors
pub(crate) const INCHES_PER_METRE: f64 = 1000.0 / 25.4;

/// Decodes a quality code into rows per inch, or `0` if the code falls
/// outside both historical encodings
#[must_use]
pub const fn rows_per_inch(qual: u16) -> u16 {
    match qual {
        71..=79 => qual % 10,
        501..=1099 if 3 <= qual % 100 && qual % 100 <= 24 => qual % 100,
        _ => 0,
    }
}
