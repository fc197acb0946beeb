#![forbid(unsafe_code)]

//! Pixel surface storage.
//!
//! A [`Surface`] is a borrowed, per-frame view over a packed-RGB pixel slice
//! owned by the platform layer. It is the only mutable state the renderer
//! touches, and every write goes through [`Surface::set_pixel`].
//!
//! # Layout
//!
//! Pixels are stored in row-major order: `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `pixels.len() >= width * height` (checked at construction)
//! 2. Width and height are fixed for the lifetime of a view; a new frame
//!    builds a new view with whatever dimensions the platform reports
//! 3. Writes outside `[0, width) × [0, height)` are dropped

use std::fmt;

use bitpaint_core::geometry::PixelRect;

use crate::color::{CompositeMode, Rgb};

/// Error building a [`Surface`] from platform-supplied storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    /// The pixel slice cannot hold `width × height` pixels.
    TooSmall {
        width: usize,
        height: usize,
        len: usize,
    },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { width, height, len } => write!(
                f,
                "pixel slice of length {len} is too small for a {width}x{height} surface"
            ),
        }
    }
}

impl std::error::Error for SurfaceError {}

/// A mutable view over a frame's pixels.
///
/// # Example
///
/// ```
/// use bitpaint_render::{CompositeMode, Rgb, Surface};
///
/// let mut pixels = vec![0u32; 16 * 8];
/// let mut surface = Surface::new(&mut pixels, 16, 8).unwrap();
/// surface.set_pixel(3, 2, CompositeMode::Set, Rgb::WHITE);
/// assert_eq!(surface.get(3, 2), Some(Rgb::WHITE));
/// ```
#[derive(Debug)]
pub struct Surface<'a> {
    pixels: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Surface<'a> {
    /// Wrap a pixel slice with the current frame dimensions.
    ///
    /// Zero-sized surfaces are allowed; every draw on them is a no-op.
    pub fn new(pixels: &'a mut [u32], width: usize, height: usize) -> Result<Self, SurfaceError> {
        let fits = width
            .checked_mul(height)
            .is_some_and(|needed| needed <= pixels.len());
        if !fits {
            return Err(SurfaceError::TooSmall {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Surface width in pixels.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Surface height in pixels.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Bounds of the whole surface.
    #[inline]
    pub const fn bounds(&self) -> PixelRect {
        PixelRect::from_size(self.width, self.height)
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64 {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    /// Read the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<Rgb> {
        self.index(x, y).map(|i| Rgb(self.pixels[i]))
    }

    /// Write one pixel with the given compositing mode.
    ///
    /// Does nothing if coordinates are out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: i64, y: i64, mode: CompositeMode, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = mode.apply(self.pixels[i], color.0);
        }
    }

    /// Overwrite every pixel with `color`.
    pub fn clear(&mut self, color: Rgb) {
        let len = self.width * self.height;
        self.pixels[..len].fill(color.0);
    }

    /// The frame's pixels, row-major, exactly `width * height` long.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels[..self.width * self.height]
    }

    /// The pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[u32] {
        assert!(y < self.height, "row {y} out of range for height {}", self.height);
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }
}

/// An owned pixel buffer that hands out per-frame [`Surface`] views.
///
/// Stands in for the platform layer in tests, benches, and the demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Create a black buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    /// Buffer width in pixels.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in pixels.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Change dimensions. Contents are reset to black.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width * height, 0);
    }

    /// Raw pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Read the pixel at (x, y).
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<Rgb> {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            Some(Rgb(self.pixels[y as usize * self.width + x as usize]))
        } else {
            None
        }
    }

    /// Borrow the buffer as a drawable surface for one frame.
    #[inline]
    pub fn surface(&mut self) -> Surface<'_> {
        Surface {
            pixels: &mut self.pixels,
            width: self.width,
            height: self.height,
        }
    }
}
