#![forbid(unsafe_code)]

//! The bundled bitmap font.
//!
//! Glyphs cover character codes `32..=127`. Each glyph is a grid of
//! [`GLYPH_COLS`] × [`GLYPH_ROWS`] bits stored column-major in one packed
//! table: the bit for `(code, column, row)` lives at index
//! `(code - 32) * GLYPH_COLS * GLYPH_ROWS + column * GLYPH_ROWS + row`.
//!
//! Everything here is a pure query. Out-of-range codes, columns, and rows
//! read as unset bits rather than failing.

/// Columns in a glyph cell.
pub const GLYPH_COLS: i64 = 6;
/// Rows in a glyph cell.
pub const GLYPH_ROWS: i64 = 7;
/// Bits per glyph.
pub const GLYPH_BITS: i64 = GLYPH_COLS * GLYPH_ROWS;
/// First code with a glyph.
pub const FIRST_GLYPH: u32 = 32;
/// Last code with a glyph.
pub const LAST_GLYPH: u32 = 127;
/// Advance, in columns, of a space and of any code past [`LAST_GLYPH`].
pub const BLANK_WIDTH: i64 = 4;

#[rustfmt::skip]
const BITFONT: [u64; 63] = [
    0x0000bc0000000000, 0x0000000c00300000, 0x5fd5040093f24fc9, 0xa00a2c2a1a280105,
    0x000000c000415e6f, 0x0400000020be0000, 0x1c38a8400000007d, 0x40002043e1020215,
    0x0408102000000010, 0x9800000000020002, 0x000f913e00000033, 0x53200000207c8800,
    0x0003654880000099, 0x54b800000f840e00, 0x0000e953c000001a, 0x953e000000674080,
    0x00001e54b800000f, 0x0490000000000240, 0x0000088a08000000, 0x20a220050a142850,
    0x0000006520800000, 0x0912f801eab260be, 0x800034952bf0001f, 0xc850bf0000921427,
    0xf00010a54afc0003, 0xd29427800002142b, 0x840007e1023f0000, 0x007d09100000217e,
    0x3f000188a08fc000, 0xc30c0cfc00000810, 0x27803f101013f00f, 0x00c244bf0000f214,
    0x4bf0002f21427800, 0x00c254a480006c24, 0x407c00102fc08100, 0x0f208080f0000fa0,
    0x0531007d81c607c0, 0x00c208288c031141, 0x083fc00046954b10, 0x0000180e03000000,
    0x041040000000ff04, 0x8102040810000404, 0x2a54600000000101, 0x0000309123e0000e,
    0xc912180000a22447, 0x8000062a54700007, 0xe52a4300000029f0, 0xa0000602043e0001,
    0x0001d48000002074, 0x1f000003610f8000, 0x013e04f800000010, 0x470000780813e00f,
    0x0184893e0000e224, 0x23e0001f12243000, 0x0082a54100000008, 0x40780000009f0200,
    0x0e208080e0001f20, 0x0a22007981860780, 0x0082082888022282, 0x16c200004ca95320,
    0x000000007f000004, 0x0408200000086d04, 0x0000000000008204,
];

/// Bit offset of a glyph column within [`BITFONT`], or `None` when out of range.
#[inline]
fn column_offset(ch: char, column: i64) -> Option<i64> {
    let code = ch as u32;
    if !(FIRST_GLYPH..=LAST_GLYPH).contains(&code) || !(0..GLYPH_COLS).contains(&column) {
        return None;
    }
    Some((code - FIRST_GLYPH) as i64 * GLYPH_BITS + column * GLYPH_ROWS)
}

/// Whether the glyph bit at `(column, row)` is set.
///
/// Returns `false` for codes without a glyph and for out-of-range cells.
#[inline]
pub fn glyph_bit(ch: char, column: i64, row: i64) -> bool {
    if !(0..GLYPH_ROWS).contains(&row) {
        return false;
    }
    let Some(offset) = column_offset(ch, column) else {
        return false;
    };
    let bit = (offset + row) as usize;
    BITFONT
        .get(bit / 64)
        .is_some_and(|word| word & (1u64 << (bit % 64)) != 0)
}

/// Whether every row of a glyph column is unset.
///
/// Columns outside the cell count as empty.
#[inline]
pub fn glyph_column_empty(ch: char, column: i64) -> bool {
    (0..GLYPH_ROWS).all(|row| !glyph_bit(ch, column, row))
}

/// Visible width of a glyph, in columns.
///
/// Control codes are zero-width; a space and codes past the table are
/// [`BLANK_WIDTH`]. Otherwise the width is the first column that starts a run
/// of two empty columns, so a single hollow column inside a glyph survives.
pub fn glyph_width(ch: char) -> i64 {
    let code = ch as u32;
    if code < FIRST_GLYPH {
        return 0;
    }
    if ch == ' ' || code > LAST_GLYPH {
        return BLANK_WIDTH;
    }
    (0..GLYPH_COLS)
        .find(|&c| glyph_column_empty(ch, c) && glyph_column_empty(ch, c + 1))
        .unwrap_or(GLYPH_COLS)
}

/// A glyph column as a row mask dilated one row downwards.
///
/// Each set row `r` marks bits `r` and `r + 1`. Two adjacent columns whose
/// masks intersect have strokes that touch or nearly touch.
#[inline]
pub fn glyph_column_convolved(ch: char, column: i64) -> u16 {
    (0..GLYPH_ROWS)
        .filter(|&row| glyph_bit(ch, column, row))
        .fold(0, |mask, row| mask | (0b11 << row))
}

/// Extra columns to insert after `run[index]`: 1 when its last visible
/// column would touch the first column of `run[index + 1]`, otherwise 0.
///
/// The last character (and any index past it) never gets spacing.
pub fn spacing(run: &[char], index: usize) -> i64 {
    let (Some(&cur), Some(&next)) = (run.get(index), run.get(index.wrapping_add(1))) else {
        return 0;
    };
    let tail = glyph_column_convolved(cur, glyph_width(cur) - 1);
    let head = glyph_column_convolved(next, 0);
    i64::from(tail & head != 0)
}

/// Horizontal advance of `run[index]`: its width plus spacing.
#[inline]
pub fn advance(run: &[char], index: usize) -> i64 {
    run.get(index)
        .map_or(0, |&ch| glyph_width(ch) + spacing(run, index))
}
