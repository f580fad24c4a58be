// MIT/Apache2 License

//! Colors, gradients and patterns for charts drawn on a 2D canvas.
//!
//! Gradients and patterns are described declaratively, independently of any chart. A
//! [`CanvasObjectFactory`] resolves them against the live layout of a chart into objects of the chart's
//! [`Context2d`], and caches the result per chart until the chart is resized or destroyed.

#[macro_use]
mod util;

mod error;

pub mod chart;
pub mod color;
pub mod context;
pub mod factory;
pub mod fill;
pub mod geometry;
pub mod gradient;
pub mod image;
pub mod intensity;
pub mod pattern;

#[cfg(feature = "recording")]
pub mod recording;

pub use chart::*;
pub use color::*;
pub use context::*;
pub use error::*;
pub use factory::*;
pub use fill::*;
pub use geometry::*;
pub use gradient::*;
pub use image::*;
pub use intensity::*;
pub use pattern::*;
