use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use image::{codecs::png::PngEncoder, ImageEncoder};
use libpat::Pattern;
use tracing::{debug, info, instrument};

#[instrument]
pub fn pat_to_image(pat_file: &Path, output_name: &Path, full_repeat: bool) -> Result<()> {
    let pattern = Pattern::from_file(pat_file)?;
    debug!("Read pattern from file");

    let rendered = pattern.to_image(full_repeat)?;
    debug!(
        "Rendered pattern to {}x{} image",
        rendered.width(),
        rendered.height()
    );

    let output = File::options()
        .create(true)
        .write(true)
        .truncate(true)
        .open(output_name)?;

    info!("Writing rendered pattern to {}", output_name.display());
    let encoder = PngEncoder::new(output);
    encoder.write_image(
        rendered.as_raw(),
        rendered.width(),
        rendered.height(),
        image::ExtendedColorType::Rgb8,
    )?;
    info!(
        "Successfully wrote rendered pattern to {}",
        output_name.display()
    );
    Ok(())
}

#[instrument]
pub fn image_to_pat(image_file: &Path, output_name: &Path, drop: Option<u16>) -> Result<()> {
    let img = image::open(image_file)
        .context("Failed to open image")?
        .into_rgb8();
    debug!("Read {}x{} image", img.width(), img.height());

    let pattern = Pattern::from_image(&img, drop)?;
    debug!(
        "Built pattern with {} channels, drop {}",
        pattern.channels().len(),
        pattern.drop()
    );

    info!("Writing pattern to {}", output_name.display());
    pattern.into_file(output_name)?;
    info!(
        "Successfully wrote pattern to {}",
        output_name.display()
    );
    Ok(())
}
