//! Canvas module - the intensity/color grid frames are made of
//!
//! Row-major flat storage for cache locality. Coordinates: (x, y) with x
//! ranging left to right and y top to bottom. All writes are clipped to the
//! canvas bounds and never panic.

use std::error::Error;
use std::fmt;

/// A single canvas pixel: brightness plus an optional ANSI-256 palette index.
///
/// `color: None` means "terminal default", matching the original engine's
/// uncolored cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub intensity: u8,
    pub color: Option<u8>,
}

impl Pixel {
    pub const fn new(intensity: u8, color: Option<u8>) -> Self {
        Self { intensity, color }
    }

    /// Uncolored pixel.
    pub const fn gray(intensity: u8) -> Self {
        Self {
            intensity,
            color: None,
        }
    }
}

/// Error returned when a bulk frame load does not match the canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMismatch {
    pub expected: (u16, u16),
    pub got: (u16, u16),
}

impl fmt::Display for SizeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frame dimensions {}x{} do not match canvas dimensions {}x{}",
            self.got.0, self.got.1, self.expected.0, self.expected.1
        )
    }
}

impl Error for SizeMismatch {}

/// 2D grid of pixels using flat row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    pixels: Vec<Pixel>,
}

impl Canvas {
    /// Create a new canvas filled with default pixels.
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![Pixel::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get pixel at (x, y). Returns None if out of bounds.
    pub fn get(&self, x: u16, y: u16) -> Option<Pixel> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set pixel at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: u16, y: u16, pixel: Pixel) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = pixel;
                true
            }
            None => false,
        }
    }

    /// Reset every pixel to the default (intensity 0, no color).
    pub fn clear(&mut self) {
        self.pixels.fill(Pixel::default());
    }

    /// Fill a rectangle, clipped to the canvas.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, pixel: Pixel) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x.saturating_add(dx), y.saturating_add(dy), pixel);
            }
        }
    }

    /// Fill an entire row. Out-of-range rows are ignored.
    pub fn fill_row(&mut self, y: u16, pixel: Pixel) {
        if y >= self.height {
            return;
        }
        let start = (y as usize) * (self.width as usize);
        let end = start + self.width as usize;
        self.pixels[start..end].fill(pixel);
    }

    /// Bulk-load a full frame from rows of pixels.
    ///
    /// The dimensions must match the canvas exactly.
    pub fn load(&mut self, rows: &[Vec<Pixel>]) -> Result<(), SizeMismatch> {
        let got_h = rows.len() as u16;
        let got_w = rows.first().map(|r| r.len() as u16).unwrap_or(0);
        if got_h != self.height || rows.iter().any(|r| r.len() as u16 != self.width) {
            return Err(SizeMismatch {
                expected: (self.width, self.height),
                got: (got_w, got_h),
            });
        }

        for (y, row) in rows.iter().enumerate() {
            let start = y * self.width as usize;
            self.pixels[start..start + self.width as usize].copy_from_slice(row);
        }
        Ok(())
    }

    /// Get a reference to the internal pixel array.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
}
