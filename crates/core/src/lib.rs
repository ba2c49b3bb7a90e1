pub use crate::{asset::AssetName, color::Rgb666, emitter::emit_image};

pub mod asset;
pub mod color;
pub mod emitter;

use std::path::Path;

use image::{io::Reader, RgbImage};

/// Decodes the image at the given path into an 8-bit RGB pixel grid.
///
/// An alpha channel in the source file, if any, is dropped by the
/// conversion.
pub fn open_image(path: impl AsRef<Path>) -> anyhow::Result<RgbImage> {
    let image = Reader::open(path)?.decode()?.to_rgb8();
    log::debug!("Decoded image [{}x{}]", image.width(), image.height());

    Ok(image)
}
