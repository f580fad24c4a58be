// MIT/Apache2 License

//! Turning gradient and pattern descriptors into platform objects.
//!
//! A [`CanvasObjectFactory`] owns two caches, one for gradients and one for patterns. Both are keyed first by
//! chart identifier and then by descriptor identifier, so at most one platform object exists for a given
//! chart and descriptor. Gradients depend on the chart's geometry and must be dropped with
//! [`reset_gradients`](CanvasObjectFactory::reset_gradients) when the chart is resized; patterns do not, and
//! only go away with [`clear`](CanvasObjectFactory::clear) when the chart is destroyed.

use crate::{
    chart::Chart,
    color::Color,
    context::{CanvasGradient, Context2d},
    error::{ErrorKind, Result},
    fill::{Fill, FillStyle},
    geometry::{Area, GeometryProvider, Radius},
    gradient::{Gradient, GradientType, Orientation},
    pattern::Pattern,
};
use lyon_geom::Point;
use std::collections::HashMap;

type Cache<T> = HashMap<String, HashMap<String, T>>;

/// Creates and caches gradients and patterns for charts drawn through `C`, laying gradients out with `G`.
pub struct CanvasObjectFactory<C: Context2d, G> {
    scope: String,
    geometry: G,
    gradients: Cache<C::Gradient>,
    patterns: Cache<C::Pattern>,
}

impl<C: Context2d, G: GeometryProvider> CanvasObjectFactory<C, G> {
    /// Create a factory. `scope` is appended to gradient identifiers in the cache, so that factories laying
    /// out the same gradient differently (a dataset fill and a chart background, say) never share an entry.
    #[inline]
    pub fn new(scope: impl Into<String>, geometry: G) -> Self {
        CanvasObjectFactory {
            scope: scope.into(),
            geometry,
            gradients: HashMap::new(),
            patterns: HashMap::new(),
        }
    }

    #[inline]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    #[inline]
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Get the platform pattern for `pattern` on `chart`, creating and caching it if needed.
    ///
    /// A handle already carried by the descriptor is cached and returned as is. Otherwise the chart's context
    /// is asked for one; if it refuses (the image is still loading, for instance), `None` is returned and
    /// nothing is cached, so a later call tries again.
    pub fn create_pattern<Ch>(&mut self, chart: &mut Ch, pattern: &mut Pattern<C>) -> Result<Option<C::Pattern>>
    where
        Ch: Chart<Context = C>,
    {
        check_chart(chart)?;

        if let Some(handle) = self.cached_pattern(chart.id(), pattern) {
            log::trace!("Pattern cache hit for {} on chart {}", pattern.id(), chart.id());
            return Ok(Some(handle.clone()));
        }

        let handle = match pattern.handle() {
            Some(handle) => handle.clone(),
            None => {
                let created = match pattern.image() {
                    Some(image) => chart.context().create_pattern(image, pattern.repetition()),
                    None => None,
                };
                match created {
                    Some(handle) => {
                        pattern.set_handle(handle.clone());
                        handle
                    }
                    None => {
                        log::warn!(
                            "Context refused to create pattern {} for chart {}",
                            pattern.id(),
                            chart.id()
                        );
                        return Ok(None);
                    }
                }
            }
        };

        log::debug!("Caching pattern {} for chart {}", pattern.id(), chart.id());
        self.patterns
            .entry(chart.id().to_string())
            .or_default()
            .insert(pattern.id().to_string(), handle.clone());
        Ok(Some(handle))
    }

    /// Get the platform gradient for `gradient` on `chart`, creating and caching it if needed.
    ///
    /// `dataset_index` and `index` identify the element being filled; they only matter to radial gradients,
    /// whose center and radii may follow the element.
    pub fn create_gradient<Ch>(
        &mut self,
        chart: &mut Ch,
        gradient: &Gradient,
        dataset_index: usize,
        index: usize,
    ) -> Result<C::Gradient>
    where
        Ch: Chart<Context = C>,
    {
        check_chart(chart)?;

        let key = self.gradient_key(gradient);
        if let Some(handle) = self.gradients.get(chart.id()).and_then(|g| g.get(&key)) {
            log::trace!("Gradient cache hit for {} on chart {}", key, chart.id());
            return Ok(handle.clone());
        }

        if !chart.is_initialized() {
            return Err(ErrorKind::ChartNotInitialized.into());
        }

        let mut handle = match gradient.gradient_type() {
            GradientType::Linear => {
                let area = self.geometry.area(&*chart, gradient);
                if !area.is_consistent() {
                    return Err(ErrorKind::InconsistentArea(area).into());
                }
                let [x0, y0, x1, y1] = linear_coordinates(gradient.orientation(), &area)?;
                chart.context().create_linear_gradient(x0, y0, x1, y1)
            }
            GradientType::Radial => {
                let center = self.geometry.center(&*chart, gradient, dataset_index, index);
                let radius = self.geometry.radius(&*chart, gradient, dataset_index, index);
                let [x0, y0, r0, x1, y1, r1] = radial_coordinates(gradient.orientation(), center, radius)?;
                chart.context().create_radial_gradient(x0, y0, r0, x1, y1, r1)
            }
        };

        for stop in gradient.stops() {
            handle.add_color_stop(stop.offset.into_inner(), &stop.color.to_rgba());
        }

        log::debug!("Caching gradient {} for chart {}", key, chart.id());
        self.gradients
            .entry(chart.id().to_string())
            .or_default()
            .insert(key, handle.clone());
        Ok(handle)
    }

    /// Resolve a fill into what the drawing context takes. Colors become their RGBA string; gradients and
    /// patterns go through [`create_gradient`](Self::create_gradient) and
    /// [`create_pattern`](Self::create_pattern). `None` means the pattern could not be created yet.
    pub fn resolve_fill<Ch>(
        &mut self,
        chart: &mut Ch,
        fill: &mut Fill<C>,
        dataset_index: usize,
        index: usize,
    ) -> Result<Option<FillStyle<C>>>
    where
        Ch: Chart<Context = C>,
    {
        Ok(match fill {
            Fill::Color(color) => Some(color_style(*color)),
            Fill::Gradient(gradient) => Some(FillStyle::Gradient(self.create_gradient(
                chart,
                gradient,
                dataset_index,
                index,
            )?)),
            Fill::Pattern(pattern) => self.create_pattern(chart, pattern)?.map(FillStyle::Pattern),
        })
    }

    /// Drop the gradients cached for `chart`. Call this when the chart is resized. Patterns are kept.
    pub fn reset_gradients<Ch: Chart>(&mut self, chart: &Ch) {
        if !chart.is_valid() {
            return;
        }
        if self.gradients.remove(chart.id()).is_some() {
            log::debug!("Dropped cached gradients of chart {}", chart.id());
        }
    }

    /// Drop everything cached for `chart`. Call this when the chart is destroyed.
    pub fn clear<Ch: Chart>(&mut self, chart: &Ch) {
        if !chart.is_valid() {
            return;
        }
        self.reset_gradients(chart);
        if self.patterns.remove(chart.id()).is_some() {
            log::debug!("Dropped cached patterns of chart {}", chart.id());
        }
    }

    /// The gradient cached for `gradient` on the chart with identifier `chart_id`, if any.
    #[inline]
    pub fn cached_gradient(&self, chart_id: &str, gradient: &Gradient) -> Option<&C::Gradient> {
        self.gradients
            .get(chart_id)
            .and_then(|g| g.get(&self.gradient_key(gradient)))
    }

    /// The pattern cached for `pattern` on the chart with identifier `chart_id`, if any.
    #[inline]
    pub fn cached_pattern(&self, chart_id: &str, pattern: &Pattern<C>) -> Option<&C::Pattern> {
        self.patterns.get(chart_id).and_then(|p| p.get(pattern.id()))
    }

    #[inline]
    fn gradient_key(&self, gradient: &Gradient) -> String {
        format!("{}-{}", gradient.id(), self.scope)
    }
}

#[inline]
fn check_chart<Ch: Chart>(chart: &Ch) -> Result {
    if chart.is_valid() {
        Ok(())
    } else {
        Err(ErrorKind::InvalidChart.into())
    }
}

#[inline]
fn color_style<C: Context2d>(color: Color) -> FillStyle<C> {
    FillStyle::Color(color.to_rgba())
}

/// The start and end points, `[x0, y0, x1, y1]`, of a linear gradient with `orientation` over `area`.
///
/// Fails with [`ErrorKind::WrongOrientation`] for the orientations of radial gradients.
pub fn linear_coordinates(orientation: Orientation, area: &Area) -> Result<[f64; 4]> {
    let Area {
        top,
        bottom,
        left,
        right,
    } = *area;

    Ok(match orientation {
        Orientation::TopDown => [left, top, left, bottom],
        Orientation::BottomUp => [left, bottom, left, top],
        Orientation::LeftRight => [left, top, right, top],
        Orientation::RightLeft => [right, top, left, top],
        Orientation::TopRight => [left, top, right, bottom],
        Orientation::BottomLeft => [right, bottom, left, top],
        Orientation::TopLeft => [right, top, left, bottom],
        Orientation::BottomRight => [left, bottom, right, top],
        Orientation::InOut | Orientation::OutIn => {
            return Err(ErrorKind::WrongOrientation(orientation).into())
        }
    })
}

/// The two circles, `[x0, y0, r0, x1, y1, r1]`, of a radial gradient with `orientation` around `center`.
///
/// Fails with [`ErrorKind::WrongOrientation`] for the orientations of linear gradients.
pub fn radial_coordinates(orientation: Orientation, center: Point<f64>, radius: Radius) -> Result<[f64; 6]> {
    let (cx, cy) = (center.x, center.y);

    Ok(match orientation {
        Orientation::InOut => [cx, cy, radius.inner, cx, cy, radius.outer],
        Orientation::OutIn => [cx, cy, radius.outer, cx, cy, radius.inner],
        Orientation::TopDown
        | Orientation::BottomUp
        | Orientation::LeftRight
        | Orientation::RightLeft
        | Orientation::TopRight
        | Orientation::BottomLeft
        | Orientation::TopLeft
        | Orientation::BottomRight => return Err(ErrorKind::WrongOrientation(orientation).into()),
    })
}

#[cfg(test)]
mod coordinate_tests {
    use super::*;
    use lyon_geom::point;

    #[test]
    fn test_linear_table() {
        let area = Area::new(0.0, 100.0, 0.0, 200.0);
        let expected = [
            (Orientation::TopDown, [0.0, 0.0, 0.0, 100.0]),
            (Orientation::BottomUp, [0.0, 100.0, 0.0, 0.0]),
            (Orientation::LeftRight, [0.0, 0.0, 200.0, 0.0]),
            (Orientation::RightLeft, [200.0, 0.0, 0.0, 0.0]),
            (Orientation::TopRight, [0.0, 0.0, 200.0, 100.0]),
            (Orientation::BottomLeft, [200.0, 100.0, 0.0, 0.0]),
            (Orientation::TopLeft, [200.0, 0.0, 0.0, 100.0]),
            (Orientation::BottomRight, [0.0, 100.0, 200.0, 0.0]),
        ];
        for (orientation, coords) in expected.iter() {
            assert_eq!(
                linear_coordinates(*orientation, &area).unwrap(),
                *coords,
                "{}",
                orientation
            );
        }
    }

    #[test]
    fn test_radial_table() {
        let center = point(50.0, 50.0);
        let radius = Radius::new(10.0, 40.0);
        assert_eq!(
            radial_coordinates(Orientation::InOut, center, radius).unwrap(),
            [50.0, 50.0, 10.0, 50.0, 50.0, 40.0]
        );
        assert_eq!(
            radial_coordinates(Orientation::OutIn, center, radius).unwrap(),
            [50.0, 50.0, 40.0, 50.0, 50.0, 10.0]
        );
    }

    #[test]
    fn test_wrong_orientations() {
        let area = Area::new(0.0, 100.0, 0.0, 200.0);
        for &o in Orientation::ALL {
            match o.gradient_type() {
                GradientType::Linear => {
                    assert_eq!(
                        radial_coordinates(o, point(0.0, 0.0), Radius::default())
                            .unwrap_err()
                            .kind(),
                        &ErrorKind::WrongOrientation(o)
                    );
                }
                GradientType::Radial => {
                    assert_eq!(
                        linear_coordinates(o, &area).unwrap_err().kind(),
                        &ErrorKind::WrongOrientation(o)
                    );
                }
            }
        }
    }
}
