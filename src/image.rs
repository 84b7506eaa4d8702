use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use radiometry::color::Color;

/// Linear radiance values of a rendered image. Rows are stored bottom to top, the order in which
/// the camera's `y` coordinate grows; writers flip them so that files start with the top row.
#[derive(Debug, Clone)]
pub struct Image {
    width: u32,
    height: u32,
    data: Vec<Color>,
}

impl Image {
    pub fn new(width: u32, height: u32, data: Vec<Color>) -> Self {
        assert_eq!(data.len(), (width * height) as usize);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn data(&self) -> &[Color] {
        &self.data
    }

    /// Pixel at column `col` of row `row`, row 0 being the bottom row.
    pub fn pixel(&self, col: u32, row: u32) -> Color {
        self.data[(row * self.width + col) as usize]
    }

    /// Pixel at `(x, y)` in file order, `y = 0` being the top row.
    fn pixel_top_down(&self, x: u32, y: u32) -> Color {
        self.pixel(x, self.height - 1 - y)
    }

    /// Quantized RGB bytes, top row first.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 3);
        for row in self.data.chunks(self.width as usize).rev() {
            for color in row.iter() {
                bytes.extend_from_slice(&color.to_u8());
            }
        }
        bytes
    }

    /// Writes the image to `path`; the format is chosen from the extension (`.png` or `.exr`).
    pub fn write(&self, path: &Path) -> Result<(), String> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("png") => self.write_png(path),
            Some("exr") => self.write_exr(path),
            _ => Err(format!("Unsupported image format: {}", path.display())),
        }
    }

    pub fn write_png(&self, path: &Path) -> Result<(), String> {
        let file = File::create(path)
            .map_err(|e| format!("Can't create {}: {}", path.display(), e))?;
        let w = BufWriter::new(file);

        let mut encoder = png::Encoder::new(w, self.width, self.height);
        encoder.set_color(png::ColorType::RGB);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| format!("Can't write PNG header to {}: {}", path.display(), e))?;
        writer
            .write_image_data(&self.to_rgb8())
            .map_err(|e| format!("Can't write PNG data to {}: {}", path.display(), e))
    }

    /// Writes linear `f32` channels, without quantization or clamping.
    pub fn write_exr(&self, path: &Path) -> Result<(), String> {
        exr::prelude::write_rgb_file(
            path,
            self.width as usize,
            self.height as usize,
            |x, y| {
                let c = self.pixel_top_down(x as u32, y as u32);
                (c.r, c.g, c.b)
            },
        )
        .map_err(|e| format!("Can't write EXR to {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rows() -> Image {
        // Bottom row red, top row blue.
        let red = Color::new(1.0, 0.0, 0.0);
        let blue = Color::new(0.0, 0.0, 1.0);
        Image::new(2, 2, vec![red, red, blue, blue])
    }

    #[test]
    fn bytes_start_with_the_top_row() {
        let bytes = two_rows().to_rgb8();
        assert_eq!(bytes.len(), 12);
        assert_eq!(&bytes[..6], &[0, 0, 255, 0, 0, 255]);
        assert_eq!(&bytes[6..], &[255, 0, 0, 255, 0, 0]);
    }

    #[test]
    fn top_down_lookup_flips_rows() {
        let image = two_rows();
        assert_eq!(image.pixel_top_down(0, 0), image.pixel(0, 1));
        assert_eq!(image.pixel_top_down(1, 1), image.pixel(1, 0));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = two_rows().write(Path::new("picture.bmp")).unwrap_err();
        assert!(err.contains("picture.bmp"));
    }
}
