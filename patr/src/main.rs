use patr::{image_to_pat, pat_to_image};
use std::path::PathBuf;
use tracing::{info, Level};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

#[cfg(not(debug_assertions))]
const DEFAULT_DEBUG_LEVEL: u8 = 1;
#[cfg(debug_assertions)]
const DEFAULT_DEBUG_LEVEL: u8 = 99;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long, default_value_t = DEFAULT_DEBUG_LEVEL, action = clap::ArgAction::Count)]
    verbosity: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// converts a .PAT pattern to a different image format
    #[command(name = "patimg")]
    PatToImage {
        /// The pattern file
        pat_file: PathBuf,

        /// Tile the image into a full repeat based on the pattern's drop
        #[arg(short, long)]
        full_repeat: bool,

        /// The output file name
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// converts a PNG image to a .PAT pattern file
    #[command(name = "imgpat")]
    ImageToPat {
        /// The image
        img_file: PathBuf,

        /// The drop (vertical repeat offset); defaults to the image height
        #[arg(short, long)]
        drop: Option<u16>,

        /// The output file name
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(true)
        .with_line_number(true)
        .init();

    match cli.command {
        Commands::PatToImage {
            pat_file,
            full_repeat,
            output,
        } => {
            let output = match output {
                Some(o) => o,
                None => {
                    let mut output = PathBuf::new();
                    let Some(dir) = pat_file.parent() else {
                        bail!("Invalid pat file");
                    };
                    let Some(Some(filename)) = pat_file.file_stem().map(|os| os.to_str()) else {
                        bail!("Invalid pat file");
                    };
                    let suffix = "png";
                    output.push(dir);
                    output.push(format!("{}.{}", filename, suffix));
                    info!("output name: {}", output.display());
                    output
                }
            };
            pat_to_image(&pat_file, &output, full_repeat)?;
        }
        Commands::ImageToPat {
            img_file,
            drop,
            output,
        } => {
            let output = match output {
                Some(o) => o,
                None => {
                    let mut output = PathBuf::new();
                    let Some(dir) = img_file.parent() else {
                        bail!("Invalid img file");
                    };
                    let Some(Some(filename)) = img_file.file_stem().map(|os| os.to_str()) else {
                        bail!("Invalid img file");
                    };
                    let suffix = "pat";
                    output.push(dir);
                    output.push(format!("{}.{}", filename, suffix));
                    info!("output name: {}", output.display());
                    output
                }
            };
            image_to_pat(&img_file, &output, drop)?;
        }
    }
    Ok(())
}
