// MIT/Apache2 License

use crate::{color::Color, context::Context2d, gradient::Gradient, pattern::Pattern};
use std::fmt;

/// Defines how a particular space is filled.
pub enum Fill<C: Context2d> {
    Color(Color),
    Gradient(Gradient),
    Pattern(Pattern<C>),
}

/// A [`Fill`] resolved against a chart: what the drawing context is actually given.
pub enum FillStyle<C: Context2d> {
    /// A CSS color string.
    Color(String),
    Gradient(C::Gradient),
    Pattern(C::Pattern),
}

impl<C: Context2d> From<Color> for Fill<C> {
    #[inline]
    fn from(color: Color) -> Self {
        Fill::Color(color)
    }
}

impl<C: Context2d> From<Gradient> for Fill<C> {
    #[inline]
    fn from(gradient: Gradient) -> Self {
        Fill::Gradient(gradient)
    }
}

impl<C: Context2d> From<Pattern<C>> for Fill<C> {
    #[inline]
    fn from(pattern: Pattern<C>) -> Self {
        Fill::Pattern(pattern)
    }
}

impl<C: Context2d> Clone for Fill<C> {
    fn clone(&self) -> Self {
        match self {
            Fill::Color(c) => Fill::Color(*c),
            Fill::Gradient(g) => Fill::Gradient(g.clone()),
            Fill::Pattern(p) => Fill::Pattern(p.clone()),
        }
    }
}

impl<C: Context2d> fmt::Debug for Fill<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fill::Color(c) => f.debug_tuple("Color").field(c).finish(),
            Fill::Gradient(g) => f.debug_tuple("Gradient").field(g).finish(),
            Fill::Pattern(p) => f.debug_tuple("Pattern").field(p).finish(),
        }
    }
}

impl<C: Context2d> Clone for FillStyle<C> {
    fn clone(&self) -> Self {
        match self {
            FillStyle::Color(c) => FillStyle::Color(c.clone()),
            FillStyle::Gradient(g) => FillStyle::Gradient(g.clone()),
            FillStyle::Pattern(p) => FillStyle::Pattern(p.clone()),
        }
    }
}

impl<C: Context2d> fmt::Debug for FillStyle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillStyle::Color(c) => f.debug_tuple("Color").field(c).finish(),
            FillStyle::Gradient(g) => f.debug_tuple("Gradient").field(g).finish(),
            FillStyle::Pattern(p) => f.debug_tuple("Pattern").field(p).finish(),
        }
    }
}
