// MIT/Apache2 License

use crate::{image::Image, pattern::Repetition};
use std::fmt;

/// The 2D drawing context of a canvas.
///
/// A chart draws through one of these, and the [`CanvasObjectFactory`] uses it to create gradients and
/// patterns. Implementations wrap whatever actually renders: a browser canvas, a software rasterizer, or the
/// [`RecordingContext`] used for headless work.
///
/// The handles returned here are opaque to this crate. They are cloned into caches and handed back to
/// callers, so cloning should be cheap and should keep referring to the same platform object.
///
/// [`CanvasObjectFactory`]: crate::CanvasObjectFactory
/// [`RecordingContext`]: crate::recording::RecordingContext
pub trait Context2d {
    /// A gradient created by this context.
    type Gradient: CanvasGradient + Clone + fmt::Debug;
    /// A pattern created by this context.
    type Pattern: Clone + fmt::Debug;
    /// An image this context can draw.
    type Image: Image + Clone + fmt::Debug;

    /// Create a gradient along the line from `(x0, y0)` to `(x1, y1)`.
    fn create_linear_gradient(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> Self::Gradient;

    /// Create a gradient between the circle at `(x0, y0)` with radius `r0` and the circle at `(x1, y1)` with
    /// radius `r1`.
    #[allow(clippy::too_many_arguments)]
    fn create_radial_gradient(
        &mut self,
        x0: f64,
        y0: f64,
        r0: f64,
        x1: f64,
        y1: f64,
        r1: f64,
    ) -> Self::Gradient;

    /// Create a pattern that repeats `image`. Returns `None` if the context refuses, for instance because the
    /// image has not finished loading.
    fn create_pattern(&mut self, image: &Self::Image, repetition: Repetition) -> Option<Self::Pattern>;
}

/// A gradient handle owned by a [`Context2d`].
pub trait CanvasGradient {
    /// Add a color stop. `color` is a CSS color string, such as the one produced by [`Color::to_rgba`].
    ///
    /// [`Color::to_rgba`]: crate::Color::to_rgba
    fn add_color_stop(&mut self, offset: f64, color: &str);
}
