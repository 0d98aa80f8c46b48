/// Demonstrates how to create a `.PAT` pattern file from an image
/// using the [`image`] crate
///
///
use image::{Rgb, RgbImage};
use libpat::Pattern;

fn main() -> anyhow::Result<()> {
    // diagonal two-color stripes; real images come from `image::open`
    let img = RgbImage::from_fn(14, 28, |x, y| {
        if (x + y) % 7 < 3 {
            Rgb([180, 40, 40])
        } else {
            Rgb([240, 230, 210])
        }
    });

    // drop of 14 gives a half-height diagonal repeat
    let pattern = Pattern::from_image(&img, Some(14))?;
    assert!(pattern.channels().len() <= 2);

    pattern.into_file("png_to_pat_example.pat")?;
    std::fs::remove_file("png_to_pat_example.pat")?;
    Ok(())
}
