// MIT/Apache2 License

use crate::{
    context::Context2d,
    geometry::{Area, Radius},
};
use lyon_geom::Size;

/// The numbers a chart's layout pass has already computed.
pub trait Layout {
    /// The size of the whole canvas.
    fn canvas_size(&self) -> Size<f64>;

    /// The plotting area, if the chart has been laid out.
    fn chart_area(&self) -> Option<Area>;

    /// The radii of the element at `index` of the dataset at `dataset_index`, for charts whose elements are
    /// arcs. `None` when unknown.
    #[inline]
    fn dataset_radius(&self, _dataset_index: usize, _index: usize) -> Option<Radius> {
        None
    }
}

/// A chart drawn on a canvas.
///
/// The [`CanvasObjectFactory`](crate::CanvasObjectFactory) keys its caches on [`id`](Chart::id). A chart
/// whose identifier is empty is not valid.
pub trait Chart: Layout {
    /// The drawing context of the chart's canvas.
    type Context: Context2d;

    fn id(&self) -> &str;

    /// Whether the chart has been created on its canvas yet.
    fn is_initialized(&self) -> bool;

    fn context(&mut self) -> &mut Self::Context;

    #[inline]
    fn is_valid(&self) -> bool {
        !self.id().is_empty()
    }
}
