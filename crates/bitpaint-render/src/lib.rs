#![forbid(unsafe_code)]

//! Render kernel: packed colors, pixel surfaces, and shape fills.

pub mod color;
pub mod raster;
pub mod surface;

pub use color::{CompositeMode, Rgb, rgb_from_unit};
pub use raster::Raster;
pub use surface::{PixelBuffer, Surface, SurfaceError};
