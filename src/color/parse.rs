// MIT/Apache2 License

//! Reading colors back from their CSS notations.

use super::{Color, Hsl};
use crate::error::{Error, ErrorKind, Result};
use std::str::FromStr;

const HEX_PREFIX: char = '#';
const RGBA_PREFIX: &str = "rgba";
const RGB_PREFIX: &str = "rgb";
const HSLA_PREFIX: &str = "hsla";
const HSL_PREFIX: &str = "hsl";

impl Color {
    /// Parse a color from `#rgb`, `#rrggbb`, `rgb(r,g,b)`, `rgba(r,g,b,a)`, `hsl(h,s%,l%)` or
    /// `hsla(h,s%,l%,a)`. Surrounding whitespace is ignored, and so is whitespace around the components.
    pub fn parse(value: &str) -> Result<Color> {
        let value = value.trim();
        let malformed = || Error::from(ErrorKind::MalformedColor(value.to_string()));

        // longer prefixes must be tested first
        if value.starts_with(HEX_PREFIX) {
            parse_hex(&value[1..]).ok_or_else(malformed)
        } else if let Some(args) = arguments(value, RGBA_PREFIX) {
            match *args.as_slice() {
                [r, g, b, a] => Color::new(
                    number(r).ok_or_else(malformed)?,
                    number(g).ok_or_else(malformed)?,
                    number(b).ok_or_else(malformed)?,
                    decimal(a).ok_or_else(malformed)?,
                ),
                _ => Err(malformed()),
            }
        } else if let Some(args) = arguments(value, RGB_PREFIX) {
            match *args.as_slice() {
                [r, g, b] => Color::new(
                    number(r).ok_or_else(malformed)?,
                    number(g).ok_or_else(malformed)?,
                    number(b).ok_or_else(malformed)?,
                    1.0,
                ),
                _ => Err(malformed()),
            }
        } else if let Some(args) = arguments(value, HSLA_PREFIX) {
            match *args.as_slice() {
                [h, s, l, a] => {
                    let hsl = hsl(h, s, l).ok_or_else(malformed)??;
                    let (r, g, b) = hsl.to_rgb();
                    Color::rgba(r, g, b, decimal(a).ok_or_else(malformed)?)
                }
                _ => Err(malformed()),
            }
        } else if let Some(args) = arguments(value, HSL_PREFIX) {
            match *args.as_slice() {
                [h, s, l] => {
                    let hsl = hsl(h, s, l).ok_or_else(malformed)??;
                    let (r, g, b) = hsl.to_rgb();
                    Ok(Color::rgb(r, g, b))
                }
                _ => Err(malformed()),
            }
        } else {
            Err(malformed())
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Color> {
        Color::parse(s)
    }
}

/// Parse the digits after the pound sign, in either the short or the long form.
fn parse_hex(digits: &str) -> Option<Color> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let digit = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok();
    let pair = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

    match digits.len() {
        3 => Some(Color::rgb(
            digit(0)? * 0x11,
            digit(1)? * 0x11,
            digit(2)? * 0x11,
        )),
        6 => Some(Color::rgb(pair(0)?, pair(2)?, pair(4)?)),
        _ => None,
    }
}

/// Split `prefix(a, b, c)` into its trimmed components.
fn arguments<'a>(value: &'a str, prefix: &str) -> Option<Vec<&'a str>> {
    let inner = value
        .strip_prefix(prefix)?
        .strip_prefix('(')?
        .strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}

/// An unsigned integer of at most three digits.
fn number(s: &str) -> Option<i64> {
    if s.is_empty() || s.len() > 3 || !s.chars().all(|c| c.is_ascii_digit()) {
        None
    } else {
        s.parse().ok()
    }
}

/// A plain decimal such as `1`, `0.5` or `.25`.
fn decimal(s: &str) -> Option<f64> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit() || c == '.') {
        None
    } else {
        s.parse().ok()
    }
}

fn percent(s: &str) -> Option<i64> {
    number(s.strip_suffix('%')?.trim_end())
}

fn hsl(h: &str, s: &str, l: &str) -> Option<Result<Hsl>> {
    Some(Hsl::new(number(h)?, percent(s)?, percent(l)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Color::parse("#ff8000").unwrap(), Color::rgb(255, 128, 0));
        assert_eq!(Color::parse("  #F80 ").unwrap(), Color::rgb(255, 136, 0));
        assert_eq!(Color::parse("#000").unwrap(), Color::BLACK);
        assert!(Color::parse("#ff80").is_err());
        assert!(Color::parse("#gg0000").is_err());
        assert!(Color::parse("#+f0000").is_err());
    }

    #[test]
    fn test_rgb_and_rgba() {
        assert_eq!(
            "rgb( 1, 2 ,3 )".parse::<Color>().unwrap(),
            Color::rgb(1, 2, 3)
        );
        assert_eq!(
            "rgba(10,20,30,0.25)".parse::<Color>().unwrap(),
            Color::rgba(10, 20, 30, 0.25).unwrap()
        );
        assert_eq!(
            "rgba(10,20,30,.5)".parse::<Color>().unwrap().alpha(),
            0.5
        );
        assert_eq!(
            Color::parse("rgb(256,0,0)").unwrap_err().kind(),
            &ErrorKind::ChannelOutOfBounds(256)
        );
        assert_eq!(
            Color::parse("rgba(0,0,0,2)").unwrap_err().kind(),
            &ErrorKind::AlphaOutOfBounds(2.0)
        );
        assert!(Color::parse("rgb(1,2)").is_err());
        assert!(Color::parse("rgb(1,2,3").is_err());
        assert!(Color::parse("rgb(-1,2,3)").is_err());
    }

    #[test]
    fn test_hsl_and_hsla() {
        assert_eq!(
            Color::parse("hsl(0, 100%, 50%)").unwrap(),
            Color::rgb(255, 0, 0)
        );
        let c = Color::parse("hsla(0,0%,100%,0.5)").unwrap();
        assert_eq!((c.red(), c.green(), c.blue(), c.alpha()), (255, 255, 255, 0.5));
        assert!(Color::parse("hsl(0,100,50)").is_err());
        assert_eq!(
            Color::parse("hsl(0,100%,150%)").unwrap_err().kind(),
            &ErrorKind::ComponentOutOfBounds("Lightness", 150)
        );
    }

    #[test]
    fn test_unknown_format() {
        assert_eq!(
            Color::parse("papayawhip").unwrap_err().kind(),
            &ErrorKind::MalformedColor("papayawhip".to_string())
        );
        assert!(Color::parse("").is_err());
    }

    #[test]
    fn test_rgba_round_trip() {
        let alphas = [-0.0, 0.0, 0.1, 0.25, 1.0 / 3.0, 0.5, 0.999, 1.0];
        for &r in &[0u8, 1, 127, 254, 255] {
            for &g in &[0u8, 64, 255] {
                for &b in &[0u8, 200] {
                    for &a in &alphas {
                        let color = Color::rgba(r, g, b, a).unwrap();
                        let parsed = Color::parse(&color.to_rgba()).unwrap();
                        assert_eq!(parsed, color);
                    }
                }
            }
        }
    }

    #[test]
    fn test_formatters_parse_back() {
        let color = Color::rgb(18, 52, 86);
        assert_eq!(Color::parse(&color.to_hex()).unwrap(), color);
        assert_eq!(Color::parse(&color.to_rgb()).unwrap(), color);
    }
}
