// MIT/Apache2 License

use crate::error::{ErrorKind, Result};
use std::fmt;

/// Hue, saturation and lightness, rounded to whole degrees and percents.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Hsl {
    /// Hue in degrees, `0..=360`.
    pub hue: u16,
    /// Saturation in percent, `0..=100`.
    pub saturation: u8,
    /// Lightness in percent, `0..=100`.
    pub lightness: u8,
}

impl Hsl {
    /// Create a new `Hsl`, checking every component against its range.
    pub fn new(hue: i64, saturation: i64, lightness: i64) -> Result<Hsl> {
        Ok(Hsl {
            hue: component("Hue", hue, 360)? as u16,
            saturation: component("Saturation", saturation, 100)? as u8,
            lightness: component("Lightness", lightness, 100)? as u8,
        })
    }

    /// Convert 8-bit RGB channels.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Hsl {
        let r = red as f64 / 255.0;
        let g = green as f64 / 255.0;
        let b = blue as f64 / 255.0;

        let min = r.min(g.min(b));
        let max = r.max(g.max(b));
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            ((60.0 * (g - b) / delta) + 360.0) % 360.0
        } else if max == g {
            (60.0 * (b - r) / delta) + 120.0
        } else {
            (60.0 * (r - g) / delta) + 240.0
        };

        let lightness = (max + min) / 2.0;
        let saturation = if delta == 0.0 {
            0.0
        } else if lightness <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        Hsl {
            hue: hue.round() as u16,
            saturation: (saturation * 100.0).round() as u8,
            lightness: (lightness * 100.0).round() as u8,
        }
    }

    /// Convert back to 8-bit RGB channels.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        let h = (self.hue as f64 % 360.0) / 360.0;
        let s = self.saturation as f64 / 100.0;
        let l = self.lightness as f64 / 100.0;

        let t1 = if l < 0.5 { l * (1.0 + s) } else { (l + s) - (s * l) };
        let t2 = 2.0 * l - t1;

        let to_u8 = |c: f64| (c.max(0.0).min(1.0) * 255.0).round() as u8;
        (
            to_u8(hue_to_rgb(t2, t1, h + 1.0 / 3.0)),
            to_u8(hue_to_rgb(t2, t1, h)),
            to_u8(hue_to_rgb(t2, t1, h - 1.0 / 3.0)),
        )
    }
}

impl fmt::Display for Hsl {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}%,{}%", self.hue, self.saturation, self.lightness)
    }
}

fn hue_to_rgb(t2: f64, t1: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if 6.0 * t < 1.0 {
        t2 + (t1 - t2) * 6.0 * t
    } else if 2.0 * t < 1.0 {
        t1
    } else if 3.0 * t < 2.0 {
        t2 + (t1 - t2) * 6.0 * ((2.0 / 3.0) - t)
    } else {
        t2
    }
}

#[inline]
fn component(name: &'static str, value: i64, max: i64) -> Result<i64> {
    if (0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ErrorKind::ComponentOutOfBounds(name, value).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries() {
        assert_eq!(
            Hsl::from_rgb(255, 0, 0),
            Hsl {
                hue: 0,
                saturation: 100,
                lightness: 50
            }
        );
        assert_eq!(Hsl::from_rgb(0, 0, 255).hue, 240);
        assert_eq!(Hsl::from_rgb(0, 255, 0).hue, 120);
        assert_eq!(Hsl::new(0, 100, 50).unwrap().to_rgb(), (255, 0, 0));
    }

    #[test]
    fn test_grays_have_no_saturation() {
        let hsl = Hsl::from_rgb(128, 128, 128);
        assert_eq!(hsl.hue, 0);
        assert_eq!(hsl.saturation, 0);
        assert_eq!(hsl.lightness, 50);
        assert_eq!(Hsl::new(0, 0, 100).unwrap().to_rgb(), (255, 255, 255));
        assert_eq!(Hsl::new(0, 0, 0).unwrap().to_rgb(), (0, 0, 0));
    }

    #[test]
    fn test_ranges() {
        assert!(Hsl::new(360, 100, 100).is_ok());
        assert_eq!(
            Hsl::new(361, 0, 0).unwrap_err().kind(),
            &ErrorKind::ComponentOutOfBounds("Hue", 361)
        );
        assert!(Hsl::new(0, 101, 0).is_err());
        assert!(Hsl::new(0, 0, -1).is_err());
    }
}
