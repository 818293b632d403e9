//! Color conversion entry point.
//!
//! pixelcore ships no conversion math. It owns the *front door*: every
//! conversion request is validated here, in a fixed order, before any
//! [`Converter`] runs.
//!
//! 1. The source components must form a valid [`Color`], otherwise
//!    [`InvalidColor`](crate::ValidationError::InvalidColor).
//! 2. The target identifier must name a [`ColorSpace`], otherwise
//!    [`UnsupportedColorSpace`](crate::UnsupportedOperationError::UnsupportedColorSpace).
//! 3. The converter must support the pair, otherwise
//!    [`UnsupportedColorSpace`](crate::UnsupportedOperationError::UnsupportedColorSpace).
//!
//! Crates that implement real conversions plug in through [`Converter`].
//!
//! # Usage
//!
//! ```rust
//! use pixelcore::{convert, ColorSpace, ErrorKind};
//!
//! let same = convert(ColorSpace::Rgb, &[0.2, 0.4, 0.6], "RGB")?;
//! assert_eq!(same.components(), &[0.2, 0.4, 0.6]);
//!
//! let err = convert(ColorSpace::Rgb, &[0.2, 0.4, 0.6], "XYZ").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnsupportedColorSpace);
//!
//! let err = convert(ColorSpace::Rgb, &[0.2, 0.4], "LAB").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidColor);
//! # Ok::<(), pixelcore::PixelcoreError>(())
//! ```

use tracing::debug;

use crate::{Color, ColorSpace, PixelcoreError, Result};

/// A color conversion implementation.
///
/// Implementors only ever see validated input: `color` satisfies its space
/// and `supports(color.space(), to)` has returned `true`.
pub trait Converter {
    /// Whether this converter implements `from -> to`.
    fn supports(&self, from: ColorSpace, to: ColorSpace) -> bool;

    /// Converts a validated color into `to`.
    ///
    /// The result must itself be a valid [`Color`], so implementations
    /// build it with [`Color::new`] and propagate its error.
    fn apply(&self, color: &Color, to: ColorSpace) -> Result<Color>;
}

/// Converter that supports only same-space requests and returns the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityConverter;

impl Converter for IdentityConverter {
    #[inline]
    fn supports(&self, from: ColorSpace, to: ColorSpace) -> bool {
        from == to
    }

    fn apply(&self, color: &Color, to: ColorSpace) -> Result<Color> {
        color.expect_space(to).cloned()
    }
}

/// Validates and runs a conversion with `converter`.
///
/// # Errors
///
/// See the [module documentation](self) for the order of checks. Errors
/// from [`Converter::apply`] are passed through.
pub fn convert_with<C: Converter + ?Sized>(
    converter: &C,
    source: ColorSpace,
    components: &[f32],
    target: &str,
) -> Result<Color> {
    let color = Color::new(source, components)?;
    let to: ColorSpace = target.parse()?;

    if !converter.supports(source, to) {
        return Err(PixelcoreError::unsupported_color_space(format!(
            "no conversion from {source} to {to}"
        )));
    }
    debug!(from = %source, %to, "converting color");
    converter.apply(&color, to)
}

/// Validates and runs a conversion with the built-in [`IdentityConverter`].
///
/// # Errors
///
/// Same as [`convert_with`]; every cross-space pair is unsupported.
#[inline]
pub fn convert(source: ColorSpace, components: &[f32], target: &str) -> Result<Color> {
    convert_with(&IdentityConverter, source, components, target)
}
