#![forbid(unsafe_code)]

//! Text for bitpaint surfaces.
//!
//! A single built-in 6×7 bitmap font covers codes 32 through 127. Text is
//! passed as a run of `char`s; the length of the slice is the length of the
//! run, so embedded NULs are ordinary control codes.
//!
//! - [`glyph`] - font table queries, glyph widths, inter-glyph spacing
//! - [`layout`] - cursor positions, text extents, auto-fit scale
//! - [`draw`] - glyph blitting plus caret and selection overlays
//!
//! # Example
//! ```
//! use bitpaint_core::RectF;
//! use bitpaint_render::{PixelBuffer, Rgb};
//! use bitpaint_text::{DrawText, Scale, measure_columns, measure_rows};
//!
//! let run: Vec<char> = "Hi!".chars().collect();
//! assert_eq!((measure_columns(&run), measure_rows(&run)), (10, 7));
//!
//! let mut buf = PixelBuffer::new(64, 32);
//! let area = RectF::new(0.0, 0.0, 64.0, 32.0);
//! let mut surface = buf.surface();
//! surface.draw_text_area(Rgb::WHITE, area, Scale::uniform(3.0), &run);
//! surface.draw_selection_cursor(Rgb::WHITE, area, Scale::uniform(3.0), 3, 0, &run);
//! assert!(buf.pixels().iter().any(|&p| p != 0));
//! ```

pub mod draw;
pub mod glyph;
pub mod layout;

pub use draw::{DrawText, OverlayRects, selection_rects};
pub use glyph::{GLYPH_COLS, GLYPH_ROWS, glyph_bit, glyph_width, spacing};
pub use layout::{
    LINE_ADVANCE, Scale, cursor_rows, cursor_x, fit_scale, measure_columns, measure_rows,
};
