#![forbid(unsafe_code)]

//! Text layout: cursor positions, bounding boxes, and auto-fit scale.
//!
//! Layout is a pure scan of the run. Nothing is cached between calls; every
//! position is recomputed from index 0. Positions are in glyph units
//! (columns horizontally, rows vertically); callers multiply by a [`Scale`]
//! to get pixels.
//!
//! Four codes steer the pen:
//!
//! | Code | Effect |
//! |------|--------|
//! | `\n` | back to column 0, down one line |
//! | `\r` | back to column 0 |
//! | `\b` | back by the previous character's advance (not at index 0) |
//! | other `<= ' '` | forward by a space |

use crate::glyph::{BLANK_WIDTH, GLYPH_ROWS, advance, glyph_width, spacing};

/// Vertical distance between line tops, in rows: one glyph plus a separator row.
pub const LINE_ADVANCE: i64 = GLYPH_ROWS + 1;

/// Per-axis pixel size of one glyph cell unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    /// Create a scale.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Same scale on both axes.
    #[inline]
    pub const fn uniform(s: f64) -> Self {
        Self { x: s, y: s }
    }
}

/// What one character of a run does to the pen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `\n`: column 0, next line.
    Newline,
    /// `\r`: column 0, same line.
    Return,
    /// `\b`: move back this many columns.
    Back(i64),
    /// Control code or space: move forward without drawing.
    Blank(i64),
    /// Drawable character `width` columns wide, then move forward `advance`.
    Glyph { ch: char, width: i64, advance: i64 },
}

/// Classify each character of `run`.
///
/// Spacing looks one character ahead, so the same character can step
/// differently in a prefix of the run than in the whole run.
pub fn steps(run: &[char]) -> impl Iterator<Item = Step> + '_ {
    run.iter().enumerate().map(move |(i, &ch)| match ch {
        '\n' => Step::Newline,
        '\r' => Step::Return,
        '\u{8}' if i > 0 => Step::Back(advance(run, i - 1)),
        c if c <= ' ' => Step::Blank(BLANK_WIDTH + spacing(run, i)),
        c => Step::Glyph {
            ch: c,
            width: glyph_width(c),
            advance: advance(run, i),
        },
    })
}

/// Horizontal pen position after laying out `run[..upto]`, in columns.
///
/// The prefix is treated as a complete run, so its last character gets no
/// spacing. `upto` past the end is clamped.
pub fn cursor_x(run: &[char], upto: usize) -> i64 {
    let prefix = &run[..upto.min(run.len())];
    steps(prefix).fold(0, |x, step| match step {
        Step::Newline | Step::Return => 0,
        Step::Back(n) => x - n,
        Step::Blank(n) | Step::Glyph { advance: n, .. } => x + n,
    })
}

/// Bottom edge, in rows, of the line holding index `upto`.
///
/// Equal to [`measure_rows`] of the prefix `run[..upto]`.
pub fn cursor_rows(run: &[char], upto: usize) -> i64 {
    measure_rows(&run[..upto.min(run.len())])
}

/// Widest line of `run`, in columns.
///
/// A line's width is sampled whenever the pen moves back (`\n`, `\r`, `\b`)
/// and once at the end.
pub fn measure_columns(run: &[char]) -> i64 {
    let mut widest = 0;
    let mut x = 0;
    for step in steps(run) {
        match step {
            Step::Newline | Step::Return => {
                widest = widest.max(x);
                x = 0;
            }
            Step::Back(n) => {
                widest = widest.max(x);
                x -= n;
            }
            Step::Blank(n) | Step::Glyph { advance: n, .. } => x += n,
        }
    }
    widest.max(x)
}

/// Height of `run`, in rows.
///
/// The first line is [`GLYPH_ROWS`] tall and every `\n` adds a separator
/// row plus another line, so an empty run still measures one line.
pub fn measure_rows(run: &[char]) -> i64 {
    let newlines = run.iter().filter(|&&c| c == '\n').count() as i64;
    GLYPH_ROWS + newlines * LINE_ADVANCE
}

/// Largest scale that fits `run` inside `target_w × target_h`.
///
/// The result keeps the ratio of `max_scale_x` to `max_scale_y` and never
/// exceeds either maximum. Non-positive targets give a zero scale.
///
/// # Panics
///
/// Panics if either maximum is not greater than `1e-6`.
pub fn fit_scale(
    target_w: f64,
    target_h: f64,
    run: &[char],
    max_scale_x: f64,
    max_scale_y: f64,
) -> Scale {
    assert!(
        max_scale_x > 1e-6,
        "max_scale_x must be > 1e-6, got {max_scale_x}"
    );
    assert!(
        max_scale_y > 1e-6,
        "max_scale_y must be > 1e-6, got {max_scale_y}"
    );

    let columns = measure_columns(run);
    let rows = measure_rows(run);

    // An empty line has no horizontal constraint: target_w / 0 is +inf.
    let kx = target_w / columns as f64 / max_scale_x;
    let ky = target_h / rows as f64 / max_scale_y;
    let k = kx.min(ky).min(1.0).max(0.0);

    let scale = Scale::new(k * max_scale_x, k * max_scale_y);
    tracing::trace!(
        columns,
        rows,
        scale_x = scale.x,
        scale_y = scale.y,
        "fit_scale"
    );
    scale
}
