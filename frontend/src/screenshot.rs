//! Dumps the current RGB24 framebuffer to a PNG file on demand.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub fn save(path: &Path, framebuffer: &[u8], width: u32, height: u32) -> std::io::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder
        .write_header()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    writer
        .write_image_data(framebuffer)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(())
}
