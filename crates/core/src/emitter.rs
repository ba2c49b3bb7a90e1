use std::io::Write;

use image::RgbImage;

use crate::{asset::AssetName, color::Rgb666};

/// Display driver header that defines `struct image` and the `RGB_` packing
/// macro consumed by the emitted declaration.
pub const DISPLAY_HEADER: &str = "mi0283qt.h";

/// Writes the C declaration of an image asset to the given sink.
///
/// The declaration is a `const struct image img_<name>` literal with one
/// `RGB_(r, g, b)` entry per pixel in row-major order and a `// line <y>`
/// comment in front of every row. The layout is fixed by the firmware
/// sources that include the generated assets, do not change it here.
pub fn emit_image(
    out: &mut impl Write,
    name: &AssetName,
    image: &RgbImage,
) -> std::io::Result<()> {
    writeln!(out, "#include \"{DISPLAY_HEADER}\"")?;
    writeln!(out)?;

    writeln!(out, "const struct image img_{name} = {{")?;
    writeln!(out, "  .width = {},", image.width())?;
    writeln!(out, "  .height = {},", image.height())?;
    writeln!(out, "  .pixels = {{")?;
    for (y, row) in image.rows().enumerate() {
        writeln!(out, "    // line {y}")?;
        for pixel in row {
            let Rgb666 { r, g, b } = Rgb666::from(*pixel);
            writeln!(out, "    RGB_({r}, {g}, {b}),")?;
        }
    }
    writeln!(out, "}}}};")
}
