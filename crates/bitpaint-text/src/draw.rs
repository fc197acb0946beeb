#![forbid(unsafe_code)]

//! Text drawing on a [`Surface`].
//!
//! The renderer replays the layout pen in pixel space and blits each glyph's
//! bit grid onto the pixel rectangle it covers, picking source bits by
//! nearest-neighbor lookup. Caret and selection overlays are XOR rectangles:
//! drawing the same overlay twice restores the frame, so callers can redraw
//! it every frame without an erase pass. An odd number of draws between two
//! clears leaves it visible; an even number hides it.

use bitpaint_core::geometry::{PixelRect, RectF, round_half_up};
use bitpaint_render::{CompositeMode, Raster, Rgb, Surface};
use smallvec::SmallVec;

use crate::glyph::{GLYPH_ROWS, glyph_bit};
use crate::layout::{
    LINE_ADVANCE, Scale, Step, cursor_rows, cursor_x, fit_scale, measure_columns, steps,
};

/// Rectangles making up a caret or selection overlay.
///
/// Selections spanning more than two middle lines spill to the heap.
pub type OverlayRects = SmallVec<[RectF; 4]>;

/// Extension trait for drawing text on a surface.
pub trait DrawText {
    /// Draw `run` with its first line's top-left at `origin`.
    ///
    /// Each glyph column is `scale.x` pixels wide and each row `scale.y`
    /// pixels tall. Set bits overwrite pixels; pixels off the surface are
    /// skipped.
    fn draw_text(&mut self, color: Rgb, origin: (f64, f64), scale: Scale, run: &[char]);

    /// Draw `run` at the largest scale that fits `area`.
    ///
    /// # Panics
    ///
    /// Panics if either axis of `max_scale` is not greater than `1e-6`.
    fn draw_text_area(&mut self, color: Rgb, area: RectF, max_scale: Scale, run: &[char]);

    /// XOR the caret or selection for `run` laid out as by [`draw_text_area`].
    ///
    /// With `selection == 0` a half-column caret is drawn before `cursor`.
    /// Otherwise the span between `cursor` and `cursor + selection` is
    /// highlighted line by line. Indices are clamped into the run.
    ///
    /// # Panics
    ///
    /// Panics if either axis of `max_scale` is not greater than `1e-6`.
    ///
    /// [`draw_text_area`]: DrawText::draw_text_area
    fn draw_selection_cursor(
        &mut self,
        color: Rgb,
        area: RectF,
        max_scale: Scale,
        cursor: usize,
        selection: isize,
        run: &[char],
    );
}

impl DrawText for Surface<'_> {
    fn draw_text(&mut self, color: Rgb, origin: (f64, f64), scale: Scale, run: &[char]) {
        let x0 = origin.0;
        let (mut x, mut y) = origin;
        let glyph_h = scale.y * GLYPH_ROWS as f64;

        for step in steps(run) {
            match step {
                Step::Newline => {
                    x = x0;
                    y += scale.y * LINE_ADVANCE as f64;
                }
                Step::Return => x = x0,
                Step::Back(n) => x -= scale.x * n as f64,
                Step::Blank(n) => x += scale.x * n as f64,
                Step::Glyph { ch, width, advance } => {
                    let dest = PixelRect::new(
                        round_half_up(x),
                        round_half_up(y),
                        round_half_up(x + scale.x * width as f64),
                        round_half_up(y + glyph_h),
                    );
                    blit_glyph(self, color, ch, width, dest);
                    x += scale.x * advance as f64;
                }
            }
        }
    }

    fn draw_text_area(&mut self, color: Rgb, area: RectF, max_scale: Scale, run: &[char]) {
        let scale = fit_scale(area.width, area.height, run, max_scale.x, max_scale.y);
        self.draw_text(color, (area.x, area.y), scale, run);
    }

    fn draw_selection_cursor(
        &mut self,
        color: Rgb,
        area: RectF,
        max_scale: Scale,
        cursor: usize,
        selection: isize,
        run: &[char],
    ) {
        for rect in selection_rects(area, max_scale, cursor, selection, run) {
            self.fill_rectangle(CompositeMode::Xor, color, rect);
        }
    }
}

/// Map a glyph's bit grid onto `dest`, nearest-neighbor.
///
/// Index math runs in `i128`: snapped edges may sit near the ends of the
/// `i64` range while the visible pixels are near zero.
fn blit_glyph(surface: &mut Surface<'_>, color: Rgb, ch: char, columns: i64, dest: PixelRect) {
    let visible = dest.intersection(&surface.bounds());
    if visible.is_empty() {
        return;
    }
    let dw = i128::from(dest.x1) - i128::from(dest.x0);
    let dh = i128::from(dest.y1) - i128::from(dest.y0);
    for (i, j) in visible.pixels() {
        let column = (i128::from(i) - i128::from(dest.x0)) * i128::from(columns) / dw;
        let row = (i128::from(j) - i128::from(dest.y0)) * i128::from(GLYPH_ROWS) / dh;
        // Both quotients are within the glyph cell since i < x1 and j < y1.
        let (column, row) = (column as i64, row as i64);
        if glyph_bit(ch, column, row) {
            surface.set_pixel(i, j, CompositeMode::Set, color);
        }
    }
}

/// Pen position of index `at`: (column, bottom row of its line).
#[inline]
fn pen(run: &[char], at: usize) -> (i64, i64) {
    (cursor_x(run, at), cursor_rows(run, at))
}

/// Rectangles that [`DrawText::draw_selection_cursor`] XORs, in pixels.
///
/// The run is fitted into `area` exactly as for text drawing. Line
/// rectangles are [`LINE_ADVANCE`] rows tall and end at the line's bottom
/// row; the caret is half a column wide and one row shorter than a glyph.
///
/// # Panics
///
/// Panics if either axis of `max_scale` is not greater than `1e-6`.
pub fn selection_rects(
    area: RectF,
    max_scale: Scale,
    cursor: usize,
    selection: isize,
    run: &[char],
) -> OverlayRects {
    let scale = fit_scale(area.width, area.height, run, max_scale.x, max_scale.y);
    let (kx, ky) = (scale.x, scale.y);
    let cursor = cursor.min(run.len());
    let end = cursor.saturating_add_signed(selection).min(run.len());

    let mut rects = OverlayRects::new();

    if selection == 0 {
        let (cx, cy) = pen(run, cursor);
        rects.push(RectF::new(
            area.x + kx * cx as f64,
            area.y + ky * (cy - GLYPH_ROWS) as f64,
            kx * 0.5,
            ky * (GLYPH_ROWS - 1) as f64,
        ));
        return rects;
    }

    let (start, stop) = if selection > 0 {
        (cursor, end)
    } else {
        tracing::debug!(cursor, selection, "selection runs backwards; normalizing");
        (end, cursor)
    };
    let (cx, cy) = pen(run, start);
    let (sx, sy) = pen(run, stop);

    let line_h = ky * LINE_ADVANCE as f64;
    let line_top = |bottom: i64| area.y + ky * bottom as f64 - line_h;

    if cy == sy {
        rects.push(RectF::new(
            area.x + kx * cx as f64,
            line_top(cy),
            kx * (sx - cx) as f64,
            line_h,
        ));
        return rects;
    }

    let columns = measure_columns(run);
    rects.push(RectF::new(
        area.x + kx * cx as f64,
        line_top(cy),
        kx * (columns - cx) as f64,
        line_h,
    ));
    let mut bottom = cy + LINE_ADVANCE;
    while bottom < sy {
        rects.push(RectF::new(area.x, line_top(bottom), kx * columns as f64, line_h));
        bottom += LINE_ADVANCE;
    }
    rects.push(RectF::new(area.x, line_top(sy), kx * sx as f64, line_h));
    rects
}
