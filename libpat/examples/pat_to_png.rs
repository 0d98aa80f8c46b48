/// Demonstrates how to render a `.PAT` pattern as a png file
/// using the [`image`] crate
///
///
use image::{codecs::png::PngEncoder, ImageEncoder};
use libpat::Pattern;

fn main() -> anyhow::Result<()> {
    // a small two-color motif; real files come from `Pattern::from_file`
    let pattern = Pattern::builder()
        .width(8)
        .height(8)
        .drop(4)
        .channels(vec![(120, 20, 20), (230, 220, 200)])
        .bitmap(
            (0..64)
                .map(|i| u8::from((i / 8 + i % 8) % 2 == 0))
                .collect(),
        )
        .qual(75)
        .build()?;
    let bytes = pattern.to_bytes();
    let pattern = Pattern::from_bytes(&bytes)?;

    // render the full diagonal repeat, not just one tile
    let rendered = pattern.to_image(true)?;

    let output = std::fs::File::options()
        .create(true)
        .write(true)
        .truncate(true)
        .open("pat_to_png_example.png")?;

    let encoder = PngEncoder::new(output);
    encoder.write_image(
        rendered.as_raw(),
        rendered.width(),
        rendered.height(),
        image::ExtendedColorType::Rgb8,
    )?;
    std::fs::remove_file("pat_to_png_example.png")?;
    Ok(())
}
