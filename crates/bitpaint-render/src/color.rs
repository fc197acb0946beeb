#![forbid(unsafe_code)]

//! Packed colors and compositing.
//!
//! Pixels are 24-bit RGB packed into a `u32` as `(red << 16) | (green << 8) | blue`.
//! The top byte is unused and never written by [`Rgb`] constructors, though XOR
//! compositing with a caller-supplied raw value may touch it.

/// A packed 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Black (all channels zero).
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Red.
    pub const RED: Self = Self::new(255, 0, 0);
    /// Green.
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Blue.
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Pack three 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Pack three unit-range channels.
    ///
    /// Each channel becomes `floor(c * 255)` clamped to `[0, 255]`, so values
    /// outside `[0, 1]` saturate and `NaN` maps to zero.
    #[inline]
    pub fn from_unit(red: f32, green: f32, blue: f32) -> Self {
        Self::new(unit_channel(red), unit_channel(green), unit_channel(blue))
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

impl From<Rgb> for u32 {
    #[inline]
    fn from(c: Rgb) -> Self {
        c.0
    }
}

impl From<u32> for Rgb {
    #[inline]
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[inline]
fn unit_channel(c: f32) -> u8 {
    // `as i32` saturates and maps NaN to 0.
    ((c * 255.0).floor() as i32).clamp(0, 255) as u8
}

/// Pack unit-range channels into a raw pixel value.
///
/// Same as [`Rgb::from_unit`], returned as the packed integer.
#[inline]
pub fn rgb_from_unit(red: f32, green: f32, blue: f32) -> u32 {
    Rgb::from_unit(red, green, blue).0
}

/// How a source color combines with the pixel already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CompositeMode {
    /// Overwrite the pixel.
    #[default]
    Set,
    /// Toggle the pixel's bits: applying the same color twice restores it.
    Xor,
}

impl CompositeMode {
    /// Combine `src` with the existing pixel `dst`.
    #[inline]
    pub const fn apply(self, dst: u32, src: u32) -> u32 {
        match self {
            CompositeMode::Set => src,
            CompositeMode::Xor => dst ^ src,
        }
    }
}
