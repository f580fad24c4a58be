// MIT/Apache2 License

//! A headless backend.
//!
//! [`RecordingContext`] draws nothing; it remembers every gradient and pattern it was asked to create. The
//! handles it returns share their state with the records, so a cached handle can be told apart from a freshly
//! created one with [`RecordedGradient::same_as`]. [`RecordingChart`] pairs the context with a layout that can
//! be changed at will, which makes it usable for tests and for computing fills without a real canvas.

use crate::{
    chart::{Chart, Layout},
    context::{CanvasGradient, Context2d},
    geometry::{Area, Radius},
    image::{Image, ImageId},
    pattern::Repetition,
};
use lyon_geom::Size;
use std::{cell::RefCell, collections::HashMap, num::NonZeroUsize, rc::Rc};

/// The geometry a gradient was created with.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GradientShape {
    /// `x0, y0, x1, y1`
    Linear([f64; 4]),
    /// `x0, y0, r0, x1, y1, r1`
    Radial([f64; 6]),
}

/// A call made on a [`RecordingContext`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateGradient(GradientShape),
    CreatePattern {
        image: ImageId,
        repetition: Repetition,
        created: bool,
    },
}

#[derive(Debug)]
struct GradientRecord {
    shape: GradientShape,
    stops: RefCell<Vec<(f64, String)>>,
}

/// A gradient handle returned by [`RecordingContext`].
#[derive(Debug, Clone)]
pub struct RecordedGradient {
    inner: Rc<GradientRecord>,
}

impl RecordedGradient {
    #[inline]
    pub fn shape(&self) -> GradientShape {
        self.inner.shape
    }

    /// The color stops added so far, in call order.
    #[inline]
    pub fn stops(&self) -> Vec<(f64, String)> {
        self.inner.stops.borrow().clone()
    }

    /// Whether both handles come from the same creation call.
    #[inline]
    pub fn same_as(&self, other: &RecordedGradient) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl CanvasGradient for RecordedGradient {
    #[inline]
    fn add_color_stop(&mut self, offset: f64, color: &str) {
        self.inner.stops.borrow_mut().push((offset, color.to_string()));
    }
}

#[derive(Debug)]
struct PatternRecord {
    image: ImageId,
    repetition: Repetition,
}

/// A pattern handle returned by [`RecordingContext`].
#[derive(Debug, Clone)]
pub struct RecordedPattern {
    inner: Rc<PatternRecord>,
}

impl RecordedPattern {
    #[inline]
    pub fn image(&self) -> ImageId {
        self.inner.image
    }

    #[inline]
    pub fn repetition(&self) -> Repetition {
        self.inner.repetition
    }

    /// Whether both handles come from the same creation call.
    #[inline]
    pub fn same_as(&self, other: &RecordedPattern) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// A [`Context2d`] that records calls instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingContext {
    calls: Vec<Call>,
    images: usize,
}

impl RecordingContext {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new image that is ready to be drawn.
    pub fn load_image(&mut self, width: u32, height: u32) -> ImageId {
        self.images += 1;
        // SAFETY: `images` was just incremented from a non-negative value
        let raw = unsafe { NonZeroUsize::new_unchecked(self.images) };
        ImageId::from_raw(raw, width, height)
    }

    /// Register a new image whose data has not arrived yet. Patterns cannot be made from it.
    #[inline]
    pub fn pending_image(&mut self, width: u32, height: u32) -> ImageId {
        self.load_image(width, height).unloaded()
    }

    /// Every call made so far, oldest first.
    #[inline]
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Drain the recorded calls.
    #[inline]
    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    /// The number of gradients created so far.
    pub fn gradients_created(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::CreateGradient(_)))
            .count()
    }

    /// The number of patterns successfully created so far.
    pub fn patterns_created(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::CreatePattern { created: true, .. }))
            .count()
    }

    fn gradient(&mut self, shape: GradientShape) -> RecordedGradient {
        log::trace!("Recording gradient {:?}", shape);
        self.calls.push(Call::CreateGradient(shape));
        RecordedGradient {
            inner: Rc::new(GradientRecord {
                shape,
                stops: RefCell::new(Vec::new()),
            }),
        }
    }
}

impl Context2d for RecordingContext {
    type Gradient = RecordedGradient;
    type Pattern = RecordedPattern;
    type Image = ImageId;

    #[inline]
    fn create_linear_gradient(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> RecordedGradient {
        self.gradient(GradientShape::Linear([x0, y0, x1, y1]))
    }

    #[inline]
    fn create_radial_gradient(
        &mut self,
        x0: f64,
        y0: f64,
        r0: f64,
        x1: f64,
        y1: f64,
        r1: f64,
    ) -> RecordedGradient {
        self.gradient(GradientShape::Radial([x0, y0, r0, x1, y1, r1]))
    }

    fn create_pattern(&mut self, image: &ImageId, repetition: Repetition) -> Option<RecordedPattern> {
        let created = image.is_loaded();
        self.calls.push(Call::CreatePattern {
            image: *image,
            repetition,
            created,
        });

        if created {
            Some(RecordedPattern {
                inner: Rc::new(PatternRecord {
                    image: *image,
                    repetition,
                }),
            })
        } else {
            None
        }
    }
}

/// A chart backed by a [`RecordingContext`], with a layout set by hand.
#[derive(Debug)]
pub struct RecordingChart {
    id: String,
    initialized: bool,
    canvas: Size<f64>,
    chart_area: Option<Area>,
    radii: HashMap<(usize, usize), Radius>,
    context: RecordingContext,
}

impl RecordingChart {
    /// Create an initialized chart with a canvas of the given size and no chart area.
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        RecordingChart {
            id: id.into(),
            initialized: true,
            canvas: Size::new(width, height),
            chart_area: None,
            radii: HashMap::new(),
            context: RecordingContext::new(),
        }
    }

    #[inline]
    pub fn with_chart_area(mut self, area: Area) -> Self {
        self.chart_area = Some(area);
        self
    }

    #[inline]
    pub fn set_initialized(&mut self, initialized: bool) {
        self.initialized = initialized;
    }

    /// Change the canvas size. The chart area is left as is, since only a new layout pass can compute it.
    #[inline]
    pub fn resize(&mut self, width: f64, height: f64) {
        self.canvas = Size::new(width, height);
    }

    #[inline]
    pub fn set_chart_area(&mut self, area: Option<Area>) {
        self.chart_area = area;
    }

    #[inline]
    pub fn set_dataset_radius(&mut self, dataset_index: usize, index: usize, radius: Radius) {
        self.radii.insert((dataset_index, index), radius);
    }

    /// The context, for inspecting recorded calls.
    #[inline]
    pub fn recorder(&self) -> &RecordingContext {
        &self.context
    }
}

impl Layout for RecordingChart {
    #[inline]
    fn canvas_size(&self) -> Size<f64> {
        self.canvas
    }

    #[inline]
    fn chart_area(&self) -> Option<Area> {
        self.chart_area
    }

    #[inline]
    fn dataset_radius(&self, dataset_index: usize, index: usize) -> Option<Radius> {
        self.radii.get(&(dataset_index, index)).copied()
    }
}

impl Chart for RecordingChart {
    type Context = RecordingContext;

    #[inline]
    fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[inline]
    fn context(&mut self) -> &mut RecordingContext {
        &mut self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_share_state() {
        let mut ctx = RecordingContext::new();
        let g = ctx.create_linear_gradient(0.0, 0.0, 10.0, 0.0);
        let mut clone = g.clone();
        clone.add_color_stop(0.0, "rgba(0,0,0,1)");

        assert!(g.same_as(&clone));
        assert_eq!(g.stops(), vec![(0.0, "rgba(0,0,0,1)".to_string())]);
        assert_eq!(g.shape(), GradientShape::Linear([0.0, 0.0, 10.0, 0.0]));

        let other = ctx.create_radial_gradient(1.0, 1.0, 0.0, 1.0, 1.0, 5.0);
        assert!(!g.same_as(&other));
        assert_eq!(ctx.gradients_created(), 2);
    }

    #[test]
    fn test_pending_images_are_refused() {
        let mut ctx = RecordingContext::new();
        let ready = ctx.load_image(2, 2);
        let pending = ctx.pending_image(2, 2);
        assert_ne!(ready.into_raw(), pending.into_raw());

        let pattern = ctx.create_pattern(&ready, Repetition::RepeatY).unwrap();
        assert_eq!(pattern.image(), ready);
        assert_eq!(pattern.repetition(), Repetition::RepeatY);
        assert!(ctx.create_pattern(&pending, Repetition::Repeat).is_none());

        assert_eq!(ctx.patterns_created(), 1);
        assert_eq!(ctx.take_calls().len(), 2);
        assert!(ctx.calls().is_empty());
    }

    #[test]
    fn test_chart_layout() {
        let mut chart = RecordingChart::new("chart-1", 300.0, 150.0)
            .with_chart_area(Area::new(10.0, 140.0, 30.0, 290.0));
        chart.set_dataset_radius(0, 2, Radius::new(5.0, 60.0));

        assert!(chart.is_valid());
        assert!(chart.is_initialized());
        assert_eq!(chart.canvas_size(), Size::new(300.0, 150.0));
        assert_eq!(chart.dataset_radius(0, 2), Some(Radius::new(5.0, 60.0)));
        assert_eq!(chart.dataset_radius(0, 1), None);

        chart.resize(600.0, 300.0);
        assert_eq!(chart.canvas_size(), Size::new(600.0, 300.0));
        assert!(!RecordingChart::new("", 1.0, 1.0).is_valid());
    }
}
