use crate::color::Rgba;
use crate::constants::{MAX_IMAGE_SIZE, MIN_IMAGE_SIZE};
use crate::error::DotError;

/// A cell that was written by a paint operation, with its new color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellChange {
    pub row: usize,
    pub col: usize,
    pub color: Rgba,
}

/// The edited image: a row-major RGBA buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelGrid {
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Builds a grid from raw RGBA bytes, checking the size bounds and the
    /// buffer length.
    pub fn from_rgba(width: u32, height: u32, data: &[u8]) -> Result<Self, DotError> {
        if !Self::size_supported(width, height) {
            return Err(DotError::UnsupportedImageSize { height, width });
        }

        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(DotError::BufferSize {
                expected,
                actual: data.len(),
            });
        }

        let pixels = data
            .chunks_exact(4)
            .map(|p| [p[0], p[1], p[2], p[3]])
            .collect();

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn size_supported(width: u32, height: u32) -> bool {
        let bounds = MIN_IMAGE_SIZE..=MAX_IMAGE_SIZE;
        bounds.contains(&width) && bounds.contains(&height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height as usize && col < self.width as usize)
            .then(|| row * self.width as usize + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Rgba> {
        self.index(row, col).map(|i| self.pixels[i])
    }

    /// Writes one cell. Returns false when the indices are outside the grid.
    pub fn set(&mut self, row: usize, col: usize, color: Rgba) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Flattened RGBA bytes, row-major.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }
}
