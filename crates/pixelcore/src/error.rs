//! Error taxonomy for pixelcore operations.
//!
//! Every failure produced anywhere in pixelcore (and in crates built on it)
//! is a [`PixelcoreError`]. The hierarchy is deliberately flat:
//!
//! ```text
//! PixelcoreError
//! ├── ValidationError            the data itself is wrong
//! │   ├── InvalidImage
//! │   ├── InvalidColor
//! │   └── InvalidMask
//! └── UnsupportedOperationError  the data is fine, the capability is missing
//!     ├── UnsupportedColorSpace
//!     └── UnsupportedInterpolation
//! ```
//!
//! # Matching
//!
//! Callers pick the granularity they need. Catch everything:
//!
//! ```rust
//! use pixelcore::{Color, ColorSpace, PixelcoreError};
//!
//! let err: PixelcoreError = Color::new(ColorSpace::Rgb, vec![0.0f32, 0.5]).unwrap_err();
//! println!("pixelcore failed: {err}");
//! ```
//!
//! Catch a branch or a single leaf:
//!
//! ```rust
//! use pixelcore::{Color, ColorSpace, PixelcoreError, ValidationError};
//!
//! match Color::new(ColorSpace::Gray, vec![2.0f32]) {
//!     Err(PixelcoreError::Validation(ValidationError::InvalidColor(_))) => {}
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```
//!
//! # Stability
//!
//! The *type* of an error is public API; its message is not. Do not parse
//! messages. None of the enums is `#[non_exhaustive]`: a new leaf is a
//! breaking change and must show up as a match error at every call site.
//! New leaves go under one of the two existing branches.
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`PixelcoreError`] as the error type.
pub type Result<T> = std::result::Result<T, PixelcoreError>;

/// Root of every pixelcore failure.
///
/// Holds exactly one of the two branches. Both branch enums convert into
/// this type with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelcoreError {
    /// The input data violates a required constraint and can never succeed as given.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The input is valid but the requested capability is not implemented.
    #[error(transparent)]
    Unsupported(#[from] UnsupportedOperationError),
}

/// Input data is invalid, malformed, or incompatible.
///
/// Permanent for that input: retrying with the same data fails again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Image has invalid dimensions, channel layout, or buffer size,
    /// or is incompatible with another image.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// Color has the wrong channel count, an out-of-range or non-finite
    /// component, or the wrong color space.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Mask shape does not match its image, or its values violate the
    /// declared [`MaskType`](crate::MaskType).
    #[error("invalid mask: {0}")]
    InvalidMask(String),
}

/// Request is valid in theory but not supported by the current build.
///
/// May succeed with different parameters or a future version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnsupportedOperationError {
    /// Color space identifier is unknown, or no conversion exists for the
    /// requested pair of spaces.
    #[error("unsupported color space: {0}")]
    UnsupportedColorSpace(String),

    /// Interpolation or resampling method is not implemented.
    #[error("unsupported interpolation: {0}")]
    UnsupportedInterpolation(String),
}

/// Fieldless name of a leaf failure kind.
///
/// Lets callers branch on the leaf without destructuring the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// [`ValidationError::InvalidImage`]
    InvalidImage,
    /// [`ValidationError::InvalidColor`]
    InvalidColor,
    /// [`ValidationError::InvalidMask`]
    InvalidMask,
    /// [`UnsupportedOperationError::UnsupportedColorSpace`]
    UnsupportedColorSpace,
    /// [`UnsupportedOperationError::UnsupportedInterpolation`]
    UnsupportedInterpolation,
}

impl ErrorKind {
    /// Every leaf kind, validation leaves first.
    pub const ALL: [ErrorKind; 5] = [
        Self::InvalidImage,
        Self::InvalidColor,
        Self::InvalidMask,
        Self::UnsupportedColorSpace,
        Self::UnsupportedInterpolation,
    ];

    /// Returns `true` for leaves under [`ValidationError`].
    #[inline]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidImage | Self::InvalidColor | Self::InvalidMask
        )
    }

    /// Returns `true` for leaves under [`UnsupportedOperationError`].
    #[inline]
    pub const fn is_unsupported(&self) -> bool {
        !self.is_validation()
    }
}

impl ValidationError {
    /// Leaf kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidImage(_) => ErrorKind::InvalidImage,
            Self::InvalidColor(_) => ErrorKind::InvalidColor,
            Self::InvalidMask(_) => ErrorKind::InvalidMask,
        }
    }

    /// Human-readable detail, without the leaf prefix.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidImage(msg) | Self::InvalidColor(msg) | Self::InvalidMask(msg) => msg,
        }
    }
}

impl UnsupportedOperationError {
    /// Leaf kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedColorSpace(_) => ErrorKind::UnsupportedColorSpace,
            Self::UnsupportedInterpolation(_) => ErrorKind::UnsupportedInterpolation,
        }
    }

    /// Human-readable detail, without the leaf prefix.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Self::UnsupportedColorSpace(msg) | Self::UnsupportedInterpolation(msg) => msg,
        }
    }
}

impl PixelcoreError {
    /// Creates a [`ValidationError::InvalidImage`] error.
    #[inline]
    pub fn invalid_image(msg: impl Into<String>) -> Self {
        Self::Validation(ValidationError::InvalidImage(msg.into()))
    }

    /// Creates a [`ValidationError::InvalidColor`] error.
    #[inline]
    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::Validation(ValidationError::InvalidColor(msg.into()))
    }

    /// Creates a [`ValidationError::InvalidMask`] error.
    #[inline]
    pub fn invalid_mask(msg: impl Into<String>) -> Self {
        Self::Validation(ValidationError::InvalidMask(msg.into()))
    }

    /// Creates an [`UnsupportedOperationError::UnsupportedColorSpace`] error.
    #[inline]
    pub fn unsupported_color_space(msg: impl Into<String>) -> Self {
        Self::Unsupported(UnsupportedOperationError::UnsupportedColorSpace(msg.into()))
    }

    /// Creates an [`UnsupportedOperationError::UnsupportedInterpolation`] error.
    #[inline]
    pub fn unsupported_interpolation(msg: impl Into<String>) -> Self {
        Self::Unsupported(UnsupportedOperationError::UnsupportedInterpolation(msg.into()))
    }

    /// Leaf kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(e) => e.kind(),
            Self::Unsupported(e) => e.kind(),
        }
    }

    /// Human-readable detail, without the leaf prefix.
    ///
    /// Not covered by any stability guarantee.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(e) => e.message(),
            Self::Unsupported(e) => e.message(),
        }
    }

    /// Returns `true` if the input data itself was rejected.
    #[inline]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` if the requested capability is missing.
    #[inline]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }

    /// Borrows the validation branch, if this is one.
    #[inline]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Unsupported(_) => None,
        }
    }

    /// Borrows the unsupported-operation branch, if this is one.
    #[inline]
    pub fn as_unsupported(&self) -> Option<&UnsupportedOperationError> {
        match self {
            Self::Unsupported(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_of_each() -> Vec<PixelcoreError> {
        vec![
            PixelcoreError::invalid_image("zero width"),
            PixelcoreError::invalid_color("2 channels"),
            PixelcoreError::invalid_mask("value 0.5"),
            PixelcoreError::unsupported_color_space("XYZ"),
            PixelcoreError::unsupported_interpolation("SINC"),
        ]
    }

    #[test]
    fn test_kinds_are_distinct() {
        let kinds: Vec<ErrorKind> = one_of_each().iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, ErrorKind::ALL.to_vec());
    }

    #[test]
    fn test_branch_membership() {
        for err in one_of_each() {
            assert_ne!(err.is_validation(), err.is_unsupported());
            assert_eq!(err.is_validation(), err.kind().is_validation());
            assert_eq!(err.as_validation().is_some(), err.is_validation());
            assert_eq!(err.as_unsupported().is_some(), err.is_unsupported());
        }
    }

    #[test]
    fn test_validation_leaves() {
        for kind in [ErrorKind::InvalidImage, ErrorKind::InvalidColor, ErrorKind::InvalidMask] {
            assert!(kind.is_validation());
            assert!(!kind.is_unsupported());
        }
    }

    #[test]
    fn test_unsupported_leaves() {
        for kind in [ErrorKind::UnsupportedColorSpace, ErrorKind::UnsupportedInterpolation] {
            assert!(kind.is_unsupported());
            assert!(!kind.is_validation());
        }
    }

    #[test]
    fn test_branch_lifts_into_root() {
        fn fails() -> Result<()> {
            Err(ValidationError::InvalidMask("bad".into()))?
        }
        let err = fails().unwrap_err();
        assert_eq!(err, PixelcoreError::invalid_mask("bad"));
    }

    #[test]
    fn test_display_and_message() {
        let err = PixelcoreError::unsupported_color_space("no conversion RGB -> XYZ");
        assert_eq!(err.message(), "no conversion RGB -> XYZ");
        assert!(err.to_string().contains("unsupported color space"));
        assert!(err.to_string().contains("XYZ"));
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<PixelcoreError>();
        assert_error::<ValidationError>();
        assert_error::<UnsupportedOperationError>();
    }
}
