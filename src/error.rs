// MIT/Apache2 License

use crate::{geometry::Area, gradient::Orientation};
use std::fmt;

/// Sum error type for chartpaint operations.
///
/// Every failure in this crate is an invalid argument: a misconfigured chart, a descriptor that cannot be
/// resolved, or a color value that is out of range. None of them are transient, so nothing is retried.
pub struct Error {
    kind: ErrorKind,
}

/// The reason an argument was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// The chart has no usable identifier.
    InvalidChart,
    /// The chart has not been laid out yet.
    ChartNotInitialized,
    /// The orientation does not belong to the gradient type being resolved.
    WrongOrientation(Orientation),
    /// The area for a linear gradient is not consistent.
    InconsistentArea(Area),
    /// A gradient was built without any color.
    MissingColors,
    /// A color stop offset is outside of `[0, 1]`.
    OffsetOutOfBounds(f64),
    /// An offset lies before the first color stop of a gradient.
    OffsetBeforeFirstStop(f64),
    /// A color channel is outside of `[0, 255]`.
    ChannelOutOfBounds(i64),
    /// An alpha value is outside of `[0, 1]`.
    AlphaOutOfBounds(f64),
    /// An HSL component is outside of its range.
    ComponentOutOfBounds(&'static str, i64),
    /// A color string could not be parsed.
    MalformedColor(String),
    /// A string key does not name any known value.
    UnknownKey(&'static str, String),
}

impl Error {
    /// Get the kind of this error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Error { kind }
    }
}

impl std::error::Error for Error {}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Error").field(&self.kind).finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::InvalidChart => f.write_str("Chart argument is not valid"),
            ErrorKind::ChartNotInitialized => f.write_str("Chart is not initialized"),
            ErrorKind::WrongOrientation(o) => write!(f, "Gradient orientation is wrong [{}]", o),
            ErrorKind::InconsistentArea(ref a) => {
                write!(f, "Area for linear gradient is not consistent: {:?}", a)
            }
            ErrorKind::MissingColors => f.write_str("Gradient does not contain any color"),
            ErrorKind::OffsetOutOfBounds(o) => {
                write!(f, "Offset {} is not between 0 and 1", o)
            }
            ErrorKind::OffsetBeforeFirstStop(o) => write!(
                f,
                "Unable to get the start and stop color based on passed offset {}",
                o
            ),
            ErrorKind::ChannelOutOfBounds(c) => {
                write!(f, "Channel value {} is not between 0 and 255", c)
            }
            ErrorKind::AlphaOutOfBounds(a) => write!(f, "Alpha value {} is not between 0 and 1", a),
            ErrorKind::ComponentOutOfBounds(name, v) => {
                write!(f, "{} value {} is out of range", name, v)
            }
            ErrorKind::MalformedColor(ref s) => write!(f, "Invalid format for a color: {}", s),
            ErrorKind::UnknownKey(what, ref s) => write!(f, "Unknown {} \"{}\"", what, s),
        }
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
