#![forbid(unsafe_code)]

//! Test harness for bitpaint surfaces.
//!
//! # Features
//!
//! - **Snapshot testing**: captures a [`Surface`] as ASCII art and compares it
//!   against a stored `.snap` file.
//! - **Checksums**: a deterministic hash of the pixels, for frames too large
//!   to store as text.
//! - **PPM export**: writes a surface as a binary `P6` image so a frame can be
//!   inspected with any image viewer.
//!
//! # Example
//! ```ignore
//! use bitpaint_harness::assert_surface_snapshot;
//!
//! #[test]
//! fn label_renders() {
//!     let mut buf = PixelBuffer::new(20, 9);
//!     // ... draw ...
//!     assert_surface_snapshot("label", &buf.surface(), env!("CARGO_MANIFEST_DIR"));
//! }
//! ```
//!
//! # Updating Snapshots
//!
//! Run tests with `BLESS=1` to create or update snapshot files:
//!
//! ```sh
//! BLESS=1 cargo test
//! ```
//!
//! Snapshot files are stored under `tests/snapshots/` relative to the
//! `base_dir` passed in (usually `env!("CARGO_MANIFEST_DIR")`).

pub mod cli;
pub mod scene;

use std::fmt::Write as FmtWrite;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bitpaint_render::{Rgb, Surface};

/// Prefix for checksum strings.
pub const CHECKSUM_PREFIX: &str = "hash:";

// ============================================================================
// Surface → Text Conversion
// ============================================================================

/// Convert a surface to ASCII art.
///
/// Each pixel row becomes one line: `.` where the pixel equals `background`,
/// `#` anywhere else.
pub fn surface_to_text(surface: &Surface<'_>, background: Rgb) -> String {
    let (w, h) = (surface.width(), surface.height());
    let mut out = String::with_capacity((w + 1) * h);

    for y in 0..h {
        if y > 0 {
            out.push('\n');
        }
        out.extend(
            surface
                .row(y)
                .iter()
                .map(|&p| if p == background.0 { '.' } else { '#' }),
        );
    }
    out
}

/// Row-by-row diff of two surface texts.
///
/// Only rows that differ are listed, each with the stored and rendered
/// pixels and a `^` under every differing column. Returns an empty string
/// when the inputs are identical.
pub fn diff_rows(expected: &str, actual: &str) -> String {
    let expected: Vec<&str> = expected.lines().collect();
    let actual: Vec<&str> = actual.lines().collect();
    let mut out = String::new();

    for row in 0..expected.len().max(actual.len()) {
        let (stored, rendered) = (expected.get(row).copied(), actual.get(row).copied());
        if stored == rendered {
            continue;
        }
        let _ = writeln!(out, "row {row}:");
        let _ = writeln!(out, "  stored   {}", stored.unwrap_or("<missing>"));
        let _ = writeln!(out, "  rendered {}", rendered.unwrap_or("<missing>"));
        if let (Some(e), Some(a)) = (stored, rendered) {
            let (e, a) = (e.as_bytes(), a.as_bytes());
            let marks: String = (0..e.len().max(a.len()))
                .map(|x| if e.get(x) == a.get(x) { ' ' } else { '^' })
                .collect();
            let _ = writeln!(out, "           {}", marks.trim_end());
        }
    }
    out
}

// ============================================================================
// Snapshot Assertion
// ============================================================================

/// `{base_dir}/tests/snapshots/{name}.snap`
fn snapshot_file(base_dir: &Path, name: &str) -> PathBuf {
    base_dir.join("tests/snapshots").join(format!("{name}.snap"))
}

/// `BLESS=1` (or `true`) records rendered surfaces instead of comparing.
fn bless_requested() -> bool {
    std::env::var("BLESS").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Assert that a surface's ASCII art matches a stored snapshot.
///
/// Black pixels are background. Trailing whitespace on each line and at the
/// end of the file is ignored.
///
/// # Panics
///
/// * If the snapshot file does not exist and `BLESS=1` is **not** set.
/// * If the surface output does not match the stored snapshot.
/// * If the snapshot cannot be read or (with `BLESS=1`) written.
pub fn assert_surface_snapshot(name: &str, surface: &Surface<'_>, base_dir: &str) {
    let path = snapshot_file(Path::new(base_dir), name);
    let actual = surface_to_text(surface, Rgb::BLACK);
    let (w, h) = (surface.width(), surface.height());

    if bless_requested() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create snapshot directory");
        }
        std::fs::write(&path, format!("{actual}\n")).expect("failed to write snapshot");
        tracing::info!(
            snapshot = name,
            width = w,
            height = h,
            path = %path.display(),
            "recorded surface"
        );
        return;
    }

    match std::fs::read_to_string(&path) {
        Ok(expected) => {
            let expected = normalize(&expected);
            let actual = normalize(&actual);
            if expected != actual {
                panic!(
                    "surface '{name}' ({w}x{h} px) does not match {}\n\
                     rerun with BLESS=1 to accept the rendered pixels\n\n{}",
                    path.display(),
                    diff_rows(&expected, &actual),
                );
            }
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            panic!(
                "no stored surface '{name}' at {}\n\
                 rerun with BLESS=1 to record this {w}x{h} px surface:\n\n{actual}",
                path.display(),
            );
        }
        Err(e) => panic!("cannot read stored surface '{name}' at {}: {e}", path.display()),
    }
}

fn normalize(text: &str) -> String {
    text.trim_end()
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Checksum Computation
// ============================================================================

/// Deterministic checksum of a surface's dimensions and pixels.
///
/// Returns a hex string prefixed with [`CHECKSUM_PREFIX`].
pub fn surface_checksum(surface: &Surface<'_>) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    surface.width().hash(&mut hasher);
    surface.height().hash(&mut hasher);
    surface.pixels().hash(&mut hasher);

    format!("{CHECKSUM_PREFIX}{:016x}", hasher.finish())
}

// ============================================================================
// PPM Export
// ============================================================================

/// Write a surface as a binary PPM (`P6`) image.
///
/// The header is `P6\n{width} {height}\n255\n`, followed by three bytes per
/// pixel in row-major order.
pub fn write_ppm<W: Write>(mut writer: W, surface: &Surface<'_>) -> io::Result<()> {
    write!(writer, "P6\n{} {}\n255\n", surface.width(), surface.height())?;
    let mut row = Vec::with_capacity(surface.width() * 3);
    for y in 0..surface.height() {
        row.clear();
        for &p in surface.row(y) {
            let c = Rgb(p);
            row.extend_from_slice(&[c.r(), c.g(), c.b()]);
        }
        writer.write_all(&row)?;
    }
    writer.flush()
}
