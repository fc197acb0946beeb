#![forbid(unsafe_code)]

//! Core: pixel-space geometry shared by the rasterizer and the text engine.

pub mod geometry;

pub use geometry::{PixelRect, RectF, round_half_up};
