// MIT/Apache2 License

//! Declarative gradients.
//!
//! A [`Gradient`] only describes a color transition: its type, orientation, scope and color stops. It knows
//! nothing about where it will be drawn. The [`CanvasObjectFactory`](crate::CanvasObjectFactory) turns it into
//! a platform gradient once the geometry of a chart is known.

mod builder;
mod orientation;
mod preset;

pub use builder::GradientBuilder;
pub use orientation::{GradientType, Orientation, Scope};
pub use preset::Preset;

use crate::{
    color::Color,
    error::{ErrorKind, Result},
    intensity::Intensity,
};
use num_traits::clamp;
use std::fmt::Write;
use tinyvec::TinyVec;

const EXPECTED_CSTOPS: usize = 3;

/// A color stop in a color gradient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorStop {
    pub offset: Intensity,
    pub color: Color,
}

/// A gradient of colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gradient {
    id: String,
    kind: GradientType,
    orientation: Orientation,
    scope: Scope,
    // invariant: contains at least 1 element, sorted by offset
    stops: TinyVec<[ColorStop; EXPECTED_CSTOPS]>,
}

impl Gradient {
    /// Assemble a gradient from its parts.
    ///
    /// If `orientation` does not belong to `kind`, the type wins and the default orientation of that type is
    /// used instead. The stops are sorted by offset; stops sharing an offset keep the order they were given in.
    pub(crate) fn new<I: IntoIterator<Item = ColorStop>>(
        kind: GradientType,
        orientation: Orientation,
        scope: Scope,
        stops: I,
    ) -> Result<Gradient> {
        let mut stops: TinyVec<[ColorStop; EXPECTED_CSTOPS]> = stops.into_iter().collect();
        if stops.is_empty() {
            return Err(ErrorKind::MissingColors.into());
        }
        stops.sort_by_key(|stop| stop.offset);

        let orientation = if orientation.gradient_type() == kind {
            orientation
        } else {
            let fallback = Orientation::default_for(kind);
            log::debug!(
                "Orientation {} does not apply to {} gradients, using {}",
                orientation,
                kind,
                fallback
            );
            fallback
        };

        let id = generate_id(kind, orientation, scope, &stops);
        Ok(Gradient {
            id,
            kind,
            orientation,
            scope,
            stops,
        })
    }

    /// The identifier of this gradient. Gradients with the same type, orientation, scope and stops share it.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn gradient_type(&self) -> GradientType {
        self.kind
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// The color stops, sorted by offset.
    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Compute the color this gradient shows at `offset`.
    ///
    /// A stop sitting exactly on `offset` is returned as is. Between two stops, the channels are interpolated
    /// in linear light and converted back to sRGB; the alpha is interpolated linearly. Past the last stop the
    /// last color is used. An offset before the first stop is an error.
    ///
    /// The interpolation factor is the position of `offset` between the two bracketing stops, not `offset`
    /// itself: with stops at `0.5` and `1.0`, the color at `0.75` is halfway between them.
    pub fn color_at(&self, offset: f64) -> Result<Color> {
        let offset = Intensity::offset(offset)?;

        let mut start: Option<&ColorStop> = None;
        let mut end: Option<&ColorStop> = None;
        for stop in self.stops.iter() {
            if stop.offset == offset {
                return Ok(stop.color);
            }
            if stop.offset < offset {
                start = Some(stop);
            } else if end.is_none() {
                end = Some(stop);
            }
        }

        match (start, end) {
            (None, _) => Err(ErrorKind::OffsetBeforeFirstStop(offset.into_inner()).into()),
            (Some(start), None) => Ok(start.color),
            (Some(start), Some(end)) => {
                let from = start.offset.into_inner();
                let t = (offset.into_inner() - from) / (end.offset.into_inner() - from);
                Ok(interpolate(start.color, end.color, t))
            }
        }
    }
}

fn interpolate(start: Color, end: Color, t: f64) -> Color {
    let channel = |a: u8, b: u8| {
        let a = srgb_to_linear(a as f64 / 255.0);
        let b = srgb_to_linear(b as f64 / 255.0);
        clamp((linear_to_srgb(a + t * (b - a)) * 255.0).round(), 0.0, 255.0) as u8
    };
    let alpha = clamp(
        start.alpha() + t * (end.alpha() - start.alpha()),
        0.0,
        1.0,
    );

    let (r, g, b) = (
        channel(start.red(), end.red()),
        channel(start.green(), end.green()),
        channel(start.blue(), end.blue()),
    );
    Color::rgba(r, g, b, alpha).unwrap_or_else(|_| Color::rgb(r, g, b))
}

// IEC 61966-2-1:1999
#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        c.powf(1.0 / 2.4) * 1.055 - 0.055
    }
}

fn generate_id(kind: GradientType, orientation: Orientation, scope: Scope, stops: &[ColorStop]) -> String {
    let mut id = format!("{}-{}-{}-[", kind, orientation, scope);
    for (i, stop) in stops.iter().enumerate() {
        if i > 0 {
            id.push(',');
        }
        // writing into a String cannot fail
        let _ = write!(id, "{}:{}", stop.offset, stop.color);
    }
    id.push(']');
    id
}
