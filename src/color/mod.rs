// MIT/Apache2 License

//! Immutable RGBA colors and their string forms.
//!
//! A [`Color`] is the value that ends up inside `addColorStop` calls and solid fills. Every transform
//! (alpha variants, `brighter`, `darker`) returns a new instance. The string formatters produce the CSS
//! notations understood by a 2D drawing context, and [`parse`](Color::parse) reads them back.

mod hsl;
mod parse;

pub use hsl::Hsl;

use crate::{
    error::{ErrorKind, Result},
    intensity::Intensity,
};
use num_traits::clamp;
use std::fmt;

/// Factor applied per channel by [`Color::brighter`] and [`Color::darker`].
const FACTOR: f64 = 0.7;

/// A four-element color: three 8-bit channels and an alpha between zero and one.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: Intensity,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: Intensity::ZERO,
    };

    /// Create an opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color {
            r,
            g,
            b,
            a: Intensity::ONE,
        }
    }

    /// Create an opaque color from a `0xRRGGBB` value. Bits above the lower 24 are ignored.
    #[inline]
    pub const fn from_hex(hex: u32) -> Self {
        Color::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Create a color with the given alpha. Fails if the alpha is not between zero and one.
    #[inline]
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Result<Self> {
        Ok(Color {
            r,
            g,
            b,
            a: Intensity::alpha(alpha)?,
        })
    }

    /// Create a color from unchecked integer channels, validating every channel against `[0, 255]` and the
    /// alpha against `[0, 1]`.
    pub fn new(r: i64, g: i64, b: i64, alpha: f64) -> Result<Self> {
        Color::rgba(channel(r)?, channel(g)?, channel(b)?, alpha)
    }

    /// Gets the red channel.
    #[inline]
    pub fn red(self) -> u8 {
        self.r
    }

    /// Gets the green channel.
    #[inline]
    pub fn green(self) -> u8 {
        self.g
    }

    /// Gets the blue channel.
    #[inline]
    pub fn blue(self) -> u8 {
        self.b
    }

    /// Gets the alpha element.
    #[inline]
    pub fn alpha(self) -> f64 {
        self.a.into_inner()
    }

    /// Gets the alpha element as an `Intensity`.
    #[inline]
    pub fn alpha_intensity(self) -> Intensity {
        self.a
    }

    /// Returns the same color with a different alpha.
    #[inline]
    pub fn with_alpha(self, alpha: f64) -> Result<Self> {
        Color::rgba(self.r, self.g, self.b, alpha)
    }

    /// Returns a brighter version of this color, keeping its alpha.
    ///
    /// Each channel is divided by `0.7`. Pure black has nothing to scale, so it becomes a dark gray instead,
    /// and channels below that gray are raised to it before scaling.
    #[inline]
    pub fn brighter(self) -> Self {
        self.brighten(self.a)
    }

    /// Same as [`brighter`](Color::brighter), with a new alpha.
    #[inline]
    pub fn brighter_with_alpha(self, alpha: f64) -> Result<Self> {
        Ok(self.brighten(Intensity::alpha(alpha)?))
    }

    /// Returns a darker version of this color, keeping its alpha. Each channel is multiplied by `0.7`.
    #[inline]
    pub fn darker(self) -> Self {
        self.darken(self.a)
    }

    /// Same as [`darker`](Color::darker), with a new alpha.
    #[inline]
    pub fn darker_with_alpha(self, alpha: f64) -> Result<Self> {
        Ok(self.darken(Intensity::alpha(alpha)?))
    }

    fn brighten(self, a: Intensity) -> Self {
        let floor = (1.0 / (1.0 - FACTOR)) as u8;
        if self.r == 0 && self.g == 0 && self.b == 0 {
            return Color {
                r: floor,
                g: floor,
                b: floor,
                a,
            };
        }

        let scale = |c: u8| {
            let c = if c > 0 && c < floor { floor } else { c };
            clamp((c as f64 / FACTOR) as i64, 0, 255) as u8
        };

        Color {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a,
        }
    }

    fn darken(self, a: Intensity) -> Self {
        let scale = |c: u8| clamp((c as f64 * FACTOR) as i64, 0, 255) as u8;
        Color {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a,
        }
    }

    /// Get the hue, saturation and lightness of this color.
    #[inline]
    pub fn hsl(self) -> Hsl {
        Hsl::from_rgb(self.r, self.g, self.b)
    }

    /// Formats as `rgb(r,g,b)`.
    pub fn to_rgb(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Formats as `rgba(r,g,b,a)`.
    pub fn to_rgba(self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }

    /// Formats as `#rrggbb`, dropping the alpha.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Formats as `hsl(h,s%,l%)`.
    pub fn to_hsl(self) -> String {
        format!("hsl({})", self.hsl())
    }

    /// Formats as `hsla(h,s%,l%,a)`.
    pub fn to_hsla(self) -> String {
        format!("hsla({},{})", self.hsl(), self.a)
    }

    /// Pack into a `0xAARRGGBB` integer, the alpha being rounded to 8 bits.
    #[inline]
    pub fn to_argb(self) -> u32 {
        (self.a.round_u8() as u32) << 24
            | (self.r as u32) << 16
            | (self.g as u32) << 8
            | self.b as u32
    }
}

impl fmt::Display for Color {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rgba())
    }
}

/// Validate a single color channel.
#[inline]
pub(crate) fn channel(value: i64) -> Result<u8> {
    if (0..=255).contains(&value) {
        Ok(value as u8)
    } else {
        Err(ErrorKind::ChannelOutOfBounds(value).into())
    }
}
