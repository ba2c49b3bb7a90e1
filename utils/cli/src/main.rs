use std::{io::stdout, path::PathBuf};

use clap::Parser;
use pixbake_core::{emit_image, open_image, AssetName};

/// Image asset converter for the webradio display firmware
///
/// Decodes a raster image and prints the C declaration of its pixel colors,
/// reduced to the 6-bit channels the display controller takes.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the image asset
    #[arg(value_name = "FILE")]
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let name = AssetName::from_path(&cli.path)?;
    let image = open_image(&cli.path)?;
    log::info!(
        "Converting image {:?} [{}x{}] to the asset img_{}",
        cli.path,
        image.width(),
        image.height(),
        name
    );

    emit_image(&mut stdout().lock(), &name, &image)?;

    Ok(())
}
