// MIT/Apache2 License

//! Image patterns.

use crate::{context::Context2d, image::Image};
use std::{
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{Hash, Hasher},
    sync::atomic::{AtomicU64, Ordering},
};

/// Tile size assumed for patterns wrapping an existing platform pattern.
const DEFAULT_TILE_SIZE: u32 = 20;

static NEXT_CANVAS_PATTERN: AtomicU64 = AtomicU64::new(1);

keyed_enum! {
    /// How a pattern image repeats over the filled area.
    pub enum Repetition ("pattern repetition") {
        /// Both directions.
        Repeat => "repeat",
        /// Horizontally only.
        RepeatX => "repeat-x",
        /// Vertically only.
        RepeatY => "repeat-y",
        /// Drawn once.
        NoRepeat => "no-repeat",
    }
}

impl Default for Repetition {
    #[inline]
    fn default() -> Self {
        Repetition::Repeat
    }
}

/// A repeating image fill.
///
/// A pattern either describes an image to hand to [`Context2d::create_pattern`], or wraps a platform pattern
/// that already exists. In both cases the platform handle is kept on the pattern once it is known, so later
/// requests do not go back to the context.
pub struct Pattern<C: Context2d> {
    id: String,
    image: Option<C::Image>,
    repetition: Repetition,
    width: u32,
    height: u32,
    // invariant: Some if `image` is None
    handle: Option<C::Pattern>,
}

impl<C: Context2d> Pattern<C> {
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The image this pattern repeats, if it was built from one.
    #[inline]
    pub fn image(&self) -> Option<&C::Image> {
        self.image.as_ref()
    }

    #[inline]
    pub fn repetition(&self) -> Repetition {
        self.repetition
    }

    /// Width of one tile, in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of one tile, in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The platform pattern, once one has been created or supplied.
    #[inline]
    pub fn handle(&self) -> Option<&C::Pattern> {
        self.handle.as_ref()
    }

    #[inline]
    pub(crate) fn set_handle(&mut self, handle: C::Pattern) {
        self.handle = Some(handle);
    }
}

impl<C: Context2d> Clone for Pattern<C> {
    fn clone(&self) -> Self {
        Pattern {
            id: self.id.clone(),
            image: self.image.clone(),
            repetition: self.repetition,
            width: self.width,
            height: self.height,
            handle: self.handle.clone(),
        }
    }
}

impl<C: Context2d> fmt::Debug for Pattern<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("id", &self.id)
            .field("image", &self.image)
            .field("repetition", &self.repetition)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("handle", &self.handle)
            .finish()
    }
}

/// Builds a [`Pattern`].
pub struct PatternBuilder<C: Context2d> {
    image: Option<C::Image>,
    handle: Option<C::Pattern>,
    repetition: Repetition,
    width: u32,
    height: u32,
}

impl<C: Context2d> PatternBuilder<C> {
    /// Start a pattern repeating `image`. The tile takes the size of the image.
    #[inline]
    pub fn image(image: C::Image) -> Self {
        PatternBuilder {
            width: image.width(),
            height: image.height(),
            image: Some(image),
            handle: None,
            repetition: Repetition::default(),
        }
    }

    /// Start a pattern around a platform pattern that was created elsewhere. The tile is 20 by 20 pixels
    /// unless [`size`](PatternBuilder::size) says otherwise.
    #[inline]
    pub fn canvas_pattern(handle: C::Pattern) -> Self {
        PatternBuilder {
            image: None,
            handle: Some(handle),
            repetition: Repetition::default(),
            width: DEFAULT_TILE_SIZE,
            height: DEFAULT_TILE_SIZE,
        }
    }

    #[inline]
    pub fn repetition(mut self, repetition: Repetition) -> Self {
        self.repetition = repetition;
        self
    }

    #[inline]
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn build(self) -> Pattern<C> {
        let id = match self.image {
            Some(ref image) => {
                let mut hasher = DefaultHasher::new();
                image.hash(&mut hasher);
                format!(
                    "image-{:x}-{}-{}-{}",
                    hasher.finish(),
                    self.repetition,
                    self.width,
                    self.height
                )
            }
            None => format!(
                "canvas-pattern-{}-{}-{}",
                NEXT_CANVAS_PATTERN.fetch_add(1, Ordering::Relaxed),
                self.width,
                self.height
            ),
        };

        Pattern {
            id,
            image: self.image,
            repetition: self.repetition,
            width: self.width,
            height: self.height,
            handle: self.handle,
        }
    }
}

#[cfg(all(test, feature = "recording"))]
mod tests {
    use super::*;
    use crate::recording::RecordingContext;

    #[test]
    fn test_image_pattern_ids() {
        let mut ctx = RecordingContext::new();
        let image = ctx.load_image(32, 16);
        let a = PatternBuilder::<RecordingContext>::image(image).build();
        let b = PatternBuilder::<RecordingContext>::image(image).build();
        let c = PatternBuilder::<RecordingContext>::image(image)
            .repetition(Repetition::RepeatX)
            .build();

        assert_eq!(a.id(), b.id());
        assert_ne!(a.id(), c.id());
        assert!(a.id().starts_with("image-"));
        assert!(c.id().ends_with("-repeat-x-32-16"));
        assert_eq!((a.width(), a.height()), (32, 16));
        assert!(a.handle().is_none());
    }

    #[test]
    fn test_canvas_pattern_defaults() {
        let mut ctx = RecordingContext::new();
        let image = ctx.load_image(4, 4);
        let handle = ctx.create_pattern(&image, Repetition::NoRepeat).unwrap();

        let a = PatternBuilder::<RecordingContext>::canvas_pattern(handle.clone()).build();
        let b = PatternBuilder::<RecordingContext>::canvas_pattern(handle)
            .size(8, 6)
            .build();

        assert_eq!((a.width(), a.height()), (20, 20));
        assert!(a.id().starts_with("canvas-pattern-"));
        assert!(b.id().ends_with("-8-6"));
        assert_ne!(a.id(), b.id());
        assert!(a.handle().is_some());
        assert!(a.image().is_none());
    }

    #[test]
    fn test_repetition_keys() {
        assert_eq!(Repetition::default(), Repetition::Repeat);
        assert_eq!("no-repeat".parse::<Repetition>().unwrap(), Repetition::NoRepeat);
        assert!("tile".parse::<Repetition>().is_err());
    }
}
