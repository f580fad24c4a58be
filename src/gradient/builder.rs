// MIT/Apache2 License

use super::{ColorStop, Gradient, GradientType, Orientation, Scope};
use crate::{
    color::Color,
    error::{ErrorKind, Result},
    intensity::Intensity,
};

/// Collects the parts of a [`Gradient`] before it is assembled.
///
/// Offsets are only checked by [`build`](GradientBuilder::build), so a builder can be filled without handling
/// errors at every step.
#[derive(Debug, Clone, Default)]
pub struct GradientBuilder {
    kind: GradientType,
    orientation: Option<Orientation>,
    scope: Scope,
    colors: Vec<(f64, Color)>,
}

impl GradientBuilder {
    #[inline]
    pub fn new(kind: GradientType) -> Self {
        GradientBuilder {
            kind,
            ..Default::default()
        }
    }

    #[inline]
    pub fn linear() -> Self {
        Self::new(GradientType::Linear)
    }

    #[inline]
    pub fn radial() -> Self {
        Self::new(GradientType::Radial)
    }

    /// Set the orientation. When never called, the default orientation of the gradient type is used.
    #[inline]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    #[inline]
    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Append a color stop.
    #[inline]
    pub fn add_color_stop(mut self, offset: f64, color: Color) -> Self {
        self.colors.push((offset, color));
        self
    }

    /// Replace every stop with `start` at offset `0` and `stop` at offset `1`.
    #[inline]
    pub fn add_colors_start_stop(mut self, start: Color, stop: Color) -> Self {
        self.colors.clear();
        self.colors.push((0.0, start));
        self.colors.push((1.0, stop));
        self
    }

    /// Assemble the gradient. Fails if no color was added or if an offset is outside of `[0, 1]`.
    pub fn build(self) -> Result<Gradient> {
        let GradientBuilder {
            kind,
            orientation,
            scope,
            colors,
        } = self;
        if colors.is_empty() {
            return Err(ErrorKind::MissingColors.into());
        }

        let stops = colors
            .into_iter()
            .map(|(offset, color)| {
                Ok(ColorStop {
                    offset: Intensity::offset(offset)?,
                    color,
                })
            })
            .collect::<Result<Vec<ColorStop>>>()?;

        let orientation = orientation.unwrap_or_else(|| Orientation::default_for(kind));
        Gradient::new(kind, orientation, scope, stops)
    }
}
