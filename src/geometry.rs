// MIT/Apache2 License

//! Where gradients are laid out.
//!
//! The [`CanvasObjectFactory`](crate::CanvasObjectFactory) does not know how a chart is laid out; it asks a
//! [`GeometryProvider`] for the rectangle of a linear gradient and for the center and radii of a radial one.

use crate::{
    chart::Layout,
    gradient::{Gradient, Scope},
};
use lyon_geom::{point, Point, Size};

/// A rectangle, in canvas pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Area {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Area {
    #[inline]
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Area {
        Area {
            top,
            bottom,
            left,
            right,
        }
    }

    /// The rectangle at the origin with the given size.
    #[inline]
    pub fn from_size(size: Size<f64>) -> Area {
        Area::new(0.0, size.height, 0.0, size.width)
    }

    /// Whether every side is finite and the rectangle is not inverted.
    #[inline]
    pub fn is_consistent(&self) -> bool {
        [self.top, self.bottom, self.left, self.right]
            .iter()
            .all(|v| v.is_finite())
            && self.right >= self.left
            && self.bottom >= self.top
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center(&self) -> Point<f64> {
        point(
            self.left + self.width() / 2.0,
            self.top + self.height() / 2.0,
        )
    }
}

/// The inner and outer radius of a radial gradient.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Radius {
    pub inner: f64,
    pub outer: f64,
}

impl Radius {
    #[inline]
    pub fn new(inner: f64, outer: f64) -> Radius {
        Radius { inner, outer }
    }
}

/// Supplies the numbers a gradient is computed from, out of a chart's layout.
pub trait GeometryProvider {
    /// The rectangle a linear gradient spans.
    fn area(&self, layout: &dyn Layout, gradient: &Gradient) -> Area;

    /// The center of a radial gradient, for the element at `index` of the dataset at `dataset_index`.
    fn center(
        &self,
        layout: &dyn Layout,
        gradient: &Gradient,
        dataset_index: usize,
        index: usize,
    ) -> Point<f64>;

    /// The radii of a radial gradient, for the element at `index` of the dataset at `dataset_index`.
    fn radius(&self, layout: &dyn Layout, gradient: &Gradient, dataset_index: usize, index: usize) -> Radius;
}

impl<G: GeometryProvider + ?Sized> GeometryProvider for &G {
    #[inline]
    fn area(&self, layout: &dyn Layout, gradient: &Gradient) -> Area {
        (**self).area(layout, gradient)
    }
    #[inline]
    fn center(&self, layout: &dyn Layout, gradient: &Gradient, dataset_index: usize, index: usize) -> Point<f64> {
        (**self).center(layout, gradient, dataset_index, index)
    }
    #[inline]
    fn radius(&self, layout: &dyn Layout, gradient: &Gradient, dataset_index: usize, index: usize) -> Radius {
        (**self).radius(layout, gradient, dataset_index, index)
    }
}

/// Lays every gradient over the whole canvas, whatever its scope. Used for chart backgrounds.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct CanvasGeometry;

impl GeometryProvider for CanvasGeometry {
    #[inline]
    fn area(&self, layout: &dyn Layout, _gradient: &Gradient) -> Area {
        Area::from_size(layout.canvas_size())
    }

    #[inline]
    fn center(&self, layout: &dyn Layout, gradient: &Gradient, _: usize, _: usize) -> Point<f64> {
        self.area(layout, gradient).center()
    }

    #[inline]
    fn radius(&self, layout: &dyn Layout, _gradient: &Gradient, _: usize, _: usize) -> Radius {
        let size = layout.canvas_size();
        Radius::new(0.0, size.width.max(size.height) / 2.0)
    }
}

/// Lays gradients used by datasets.
///
/// Gradients scoped to the chart use the chart area, as long as the layout has a consistent one. Radial
/// gradients follow the radii of the element being drawn when the layout knows them (arcs of a pie chart),
/// otherwise they fit inside the chart area. Everything else falls back to [`CanvasGeometry`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct DatasetGeometry;

impl DatasetGeometry {
    fn chart_area(layout: &dyn Layout, gradient: &Gradient) -> Option<Area> {
        match gradient.scope() {
            Scope::Canvas => None,
            Scope::Chart => layout.chart_area().filter(Area::is_consistent),
        }
    }
}

impl GeometryProvider for DatasetGeometry {
    fn area(&self, layout: &dyn Layout, gradient: &Gradient) -> Area {
        match Self::chart_area(layout, gradient) {
            Some(area) => area,
            None => CanvasGeometry.area(layout, gradient),
        }
    }

    fn center(&self, layout: &dyn Layout, gradient: &Gradient, dataset_index: usize, index: usize) -> Point<f64> {
        match Self::chart_area(layout, gradient) {
            Some(area) => area.center(),
            None => CanvasGeometry.center(layout, gradient, dataset_index, index),
        }
    }

    fn radius(&self, layout: &dyn Layout, gradient: &Gradient, dataset_index: usize, index: usize) -> Radius {
        if let Some(radius) = layout.dataset_radius(dataset_index, index) {
            return radius;
        }

        match Self::chart_area(layout, gradient) {
            Some(area) => Radius::new(0.0, area.width().min(area.height()) / 2.0),
            None => CanvasGeometry.radius(layout, gradient, dataset_index, index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Color, gradient::GradientBuilder};
    use approx::assert_relative_eq;

    struct FixedLayout {
        area: Option<Area>,
        radius: Option<Radius>,
    }

    impl Layout for FixedLayout {
        fn canvas_size(&self) -> Size<f64> {
            Size::new(400.0, 300.0)
        }
        fn chart_area(&self) -> Option<Area> {
            self.area
        }
        fn dataset_radius(&self, _: usize, _: usize) -> Option<Radius> {
            self.radius
        }
    }

    fn gradient(scope: Scope) -> Gradient {
        GradientBuilder::radial()
            .scope(scope)
            .add_colors_start_stop(Color::BLACK, Color::WHITE)
            .build()
            .unwrap()
    }

    #[test]
    fn test_area_helpers() {
        let area = Area::new(10.0, 110.0, 20.0, 220.0);
        assert!(area.is_consistent());
        assert_relative_eq!(area.width(), 200.0);
        assert_relative_eq!(area.height(), 100.0);
        assert_eq!(area.center(), point(120.0, 60.0));

        assert!(!Area::new(10.0, 0.0, 0.0, 10.0).is_consistent());
        assert!(!Area::new(0.0, f64::NAN, 0.0, 10.0).is_consistent());
        assert!(!Area::new(0.0, 10.0, 0.0, f64::INFINITY).is_consistent());
    }

    #[test]
    fn test_canvas_geometry() {
        let layout = FixedLayout {
            area: Some(Area::new(10.0, 110.0, 20.0, 220.0)),
            radius: Some(Radius::new(1.0, 2.0)),
        };
        let g = gradient(Scope::Chart);
        assert_eq!(CanvasGeometry.area(&layout, &g), Area::new(0.0, 300.0, 0.0, 400.0));
        assert_eq!(CanvasGeometry.center(&layout, &g, 0, 0), point(200.0, 150.0));
        assert_eq!(CanvasGeometry.radius(&layout, &g, 0, 0), Radius::new(0.0, 200.0));
    }

    #[test]
    fn test_dataset_geometry_uses_chart_area() {
        let layout = FixedLayout {
            area: Some(Area::new(10.0, 110.0, 20.0, 220.0)),
            radius: None,
        };
        let g = gradient(Scope::Chart);
        assert_eq!(DatasetGeometry.area(&layout, &g), Area::new(10.0, 110.0, 20.0, 220.0));
        assert_eq!(DatasetGeometry.center(&layout, &g, 0, 0), point(120.0, 60.0));
        assert_eq!(DatasetGeometry.radius(&layout, &g, 0, 0), Radius::new(0.0, 50.0));
    }

    #[test]
    fn test_dataset_geometry_prefers_element_radius() {
        let layout = FixedLayout {
            area: Some(Area::new(10.0, 110.0, 20.0, 220.0)),
            radius: Some(Radius::new(12.0, 48.0)),
        };
        assert_eq!(
            DatasetGeometry.radius(&layout, &gradient(Scope::Chart), 1, 3),
            Radius::new(12.0, 48.0)
        );
        assert_eq!(
            DatasetGeometry.radius(&layout, &gradient(Scope::Canvas), 1, 3),
            Radius::new(12.0, 48.0)
        );
    }

    #[test]
    fn test_dataset_geometry_falls_back_to_canvas() {
        let canvas_scope = FixedLayout {
            area: Some(Area::new(10.0, 110.0, 20.0, 220.0)),
            radius: None,
        };
        let g = gradient(Scope::Canvas);
        assert_eq!(DatasetGeometry.area(&canvas_scope, &g), Area::new(0.0, 300.0, 0.0, 400.0));
        assert_eq!(DatasetGeometry.radius(&canvas_scope, &g, 0, 0), Radius::new(0.0, 200.0));

        let inverted = FixedLayout {
            area: Some(Area::new(110.0, 10.0, 20.0, 220.0)),
            radius: None,
        };
        let g = gradient(Scope::Chart);
        assert_eq!(DatasetGeometry.center(&inverted, &g, 0, 0), point(200.0, 150.0));

        let missing = FixedLayout {
            area: None,
            radius: None,
        };
        assert_eq!(DatasetGeometry.area(&missing, &g), Area::new(0.0, 300.0, 0.0, 400.0));
    }
}
