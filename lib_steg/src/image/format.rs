use image::{DynamicImage, RgbaImage};
use thiserror::Error;

/// One RGBA pixel.
pub type Pixel = [u8; 4];

#[derive(Error, Debug)]
pub enum PixelDataError {
    #[error("invalid pixel data length: expected {expected} bytes for the image, got {actual}")]
    InvalidPixelDataLength { expected: usize, actual: usize },
}

/// An RGBA8 pixel grid stored row-major, four bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    rgba_data: Vec<u8>,
}

impl Image {
    pub const CHANNELS: usize = 4;

    pub fn new(width: u32, height: u32, rgba_data: Vec<u8>) -> Result<Self, PixelDataError> {
        let expected = width as usize * height as usize * Self::CHANNELS;
        if rgba_data.len() != expected {
            return Err(PixelDataError::InvalidPixelDataLength {
                expected,
                actual: rgba_data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            rgba_data,
        })
    }

    /// An image where every pixel has the same colour.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        let rgba_data = pixel.repeat(width as usize * height as usize);
        Self {
            width,
            height,
            rgba_data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba_data(&self) -> &[u8] {
        &self.rgba_data
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize * self.width as usize + x as usize) * Self::CHANNELS
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Pixel {
        let i = self.offset(x, y);
        [
            self.rgba_data[i],
            self.rgba_data[i + 1],
            self.rgba_data[i + 2],
            self.rgba_data[i + 3],
        ]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        let i = self.offset(x, y);
        self.rgba_data[i..i + Self::CHANNELS].copy_from_slice(&pixel);
    }

    /// Pixel at a raster index (`y * width + x`).
    pub fn pixel_at(&self, index: usize) -> Option<Pixel> {
        let i = index.checked_mul(Self::CHANNELS)?;
        let bytes = self.rgba_data.get(i..i + Self::CHANNELS)?;
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    pub fn into_rgba_image(self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.rgba_data)
    }
}

/// Widens any colour mode to RGBA8. Missing alpha becomes fully opaque.
impl From<DynamicImage> for Image {
    fn from(image: DynamicImage) -> Self {
        let rgba = image.into_rgba8();
        Self {
            width: rgba.width(),
            height: rgba.height(),
            rgba_data: rgba.into_raw(),
        }
    }
}
