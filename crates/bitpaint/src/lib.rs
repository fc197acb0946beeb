#![forbid(unsafe_code)]

//! bitpaint public facade crate.
//!
//! Software drawing onto a caller-owned buffer of packed `0x00RRGGBB`
//! pixels: filled rectangles, triangles, ellipses and thick lines, plus
//! text in a built-in bitmap font with caret and selection overlays.
//!
//! # Example
//! ```
//! use bitpaint::prelude::*;
//!
//! # fn main() -> bitpaint::Result<()> {
//! let mut storage = vec![0u32; 32 * 16];
//! let mut surface = Surface::new(&mut storage, 32, 16)?;
//! surface.fill_rectangle(CompositeMode::Set, Rgb::BLUE, RectF::new(0.0, 0.0, 32.0, 16.0));
//! let label: Vec<char> = "ok".chars().collect();
//! surface.draw_text_area(Rgb::WHITE, RectF::new(2.0, 2.0, 28.0, 12.0), Scale::uniform(2.0), &label);
//! # Ok(())
//! # }
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use bitpaint_core::geometry::{PixelRect, RectF, round_half_up};

// --- Render re-exports -----------------------------------------------------

pub use bitpaint_render::color::{CompositeMode, Rgb, rgb_from_unit};
pub use bitpaint_render::raster::Raster;
pub use bitpaint_render::surface::{PixelBuffer, Surface, SurfaceError};

// --- Text re-exports -------------------------------------------------------

pub use bitpaint_text::draw::{DrawText, OverlayRects, selection_rects};
pub use bitpaint_text::layout::{
    Scale, cursor_rows, cursor_x, fit_scale, measure_columns, measure_rows,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for bitpaint apps.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while exporting a frame.
    Io(std::io::Error),
    /// Pixel storage could not back a surface.
    Surface(SurfaceError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Surface(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Surface(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<SurfaceError> for Error {
    fn from(err: SurfaceError) -> Self {
        Self::Surface(err)
    }
}

/// Standard result type for bitpaint APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CompositeMode, DrawText, Error, PixelBuffer, Raster, RectF, Result, Rgb, Scale, Surface,
    };

    pub use bitpaint_core as core;
    pub use bitpaint_render as render;
    pub use bitpaint_text as text;
}
