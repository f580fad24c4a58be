// MIT/Apache2 License

use std::{hash::Hash, num::NonZeroUsize};

/// An image that a drawing context can turn into a pattern.
///
/// The image itself is owned by whatever does the rendering; this trait only exposes what a [`Pattern`] needs
/// to describe it. The `Hash` bound is used to derive the identifier of patterns built from the image, so two
/// handles to the same image should hash the same.
///
/// [`Pattern`]: crate::Pattern
pub trait Image: Hash {
    /// The width of the image, in pixels.
    fn width(&self) -> u32;

    /// The height of the image, in pixels.
    fn height(&self) -> u32;

    /// Whether the image is ready to be drawn. Contexts usually refuse to build patterns from images that are
    /// still loading.
    #[inline]
    fn is_loaded(&self) -> bool {
        true
    }
}

/// Represents a server-side image.
///
/// The rendering side controls the pixels; this is just the number it uses to identify the image, along with
/// its size and whether its data has arrived yet. There is no automatic management or cleanup of the image's
/// resources.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImageId {
    inner: NonZeroUsize,
    width: u32,
    height: u32,
    loaded: bool,
}

impl ImageId {
    /// Create a new `ImageId` for a loaded image from a `NonZeroUsize` representing a server-side image.
    #[inline]
    pub fn from_raw(raw: NonZeroUsize, width: u32, height: u32) -> ImageId {
        ImageId {
            inner: raw,
            width,
            height,
            loaded: true,
        }
    }

    /// Get the `NonZeroUsize` backing this `ImageId`.
    #[inline]
    pub fn into_raw(self) -> NonZeroUsize {
        self.inner
    }

    /// The same image, flagged as still loading.
    #[inline]
    pub fn unloaded(self) -> ImageId {
        ImageId {
            loaded: false,
            ..self
        }
    }
}

impl Image for ImageId {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }
    #[inline]
    fn height(&self) -> u32 {
        self.height
    }
    #[inline]
    fn is_loaded(&self) -> bool {
        self.loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_id() {
        let raw = NonZeroUsize::new(7).unwrap();
        let image = ImageId::from_raw(raw, 16, 8);
        assert_eq!((image.width(), image.height()), (16, 8));
        assert!(image.is_loaded());

        let pending = image.unloaded();
        assert!(!pending.is_loaded());
        assert_eq!(pending.into_raw(), raw);
        assert_ne!(pending, image);
    }
}
