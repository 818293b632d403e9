//! Color values tagged with an explicit color space.
//!
//! A [`Color`] is validated once, at construction: the component count must
//! match [`ColorSpace::channels`] and every component must lie in the
//! space's range. An invalid color is never partially built.
//!
//! ```rust
//! use pixelcore::{Color, ColorSpace};
//!
//! let teal = Color::rgb(0.0, 0.5, 0.5)?;
//! assert_eq!(teal.space(), ColorSpace::Rgb);
//!
//! // Wrong channel count for the declared space
//! assert!(Color::new(ColorSpace::Lab, vec![50.0f32, 0.0]).is_err());
//! # Ok::<(), pixelcore::PixelcoreError>(())
//! ```

use std::fmt;

use tracing::trace;

use crate::{ColorSpace, PixelcoreError, Result};

/// Validated color in a specific [`ColorSpace`].
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    space: ColorSpace,
    components: Vec<f32>,
}

impl Color {
    /// Creates a color from raw components.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColor`](crate::ValidationError::InvalidColor) if the
    /// component count does not match the space, or a component is
    /// non-finite or outside its channel range.
    pub fn new(space: ColorSpace, components: impl Into<Vec<f32>>) -> Result<Self> {
        let components = components.into();
        trace!(%space, len = components.len(), "Color::new");

        if components.len() != space.channels() {
            return Err(PixelcoreError::invalid_color(format!(
                "{space} color needs {} components, got {}",
                space.channels(),
                components.len()
            )));
        }
        for (index, &value) in components.iter().enumerate() {
            if !space.is_valid_component(index, value) {
                // component_range is Some for every index below channels()
                let range = space.component_range(index).unwrap_or(0.0..=0.0);
                let close = if space.wraps(index) { ')' } else { ']' };
                return Err(PixelcoreError::invalid_color(format!(
                    "{space} channel {} = {value} is outside [{}, {}{close}",
                    space.channel_names()[index],
                    range.start(),
                    range.end()
                )));
            }
        }
        Ok(Self { space, components })
    }

    /// RGB color, components in [0, 1].
    #[inline]
    pub fn rgb(r: f32, g: f32, b: f32) -> Result<Self> {
        Self::new(ColorSpace::Rgb, [r, g, b])
    }

    /// CIE L*a*b* color.
    #[inline]
    pub fn lab(l: f32, a: f32, b: f32) -> Result<Self> {
        Self::new(ColorSpace::Lab, [l, a, b])
    }

    /// HSV color, hue in degrees.
    #[inline]
    pub fn hsv(h: f32, s: f32, v: f32) -> Result<Self> {
        Self::new(ColorSpace::Hsv, [h, s, v])
    }

    /// Grayscale color.
    #[inline]
    pub fn gray(y: f32) -> Result<Self> {
        Self::new(ColorSpace::Gray, [y])
    }

    /// Color space of the components.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Components in channel order.
    #[inline]
    pub fn components(&self) -> &[f32] {
        &self.components
    }

    /// Consumes the color, returning its components.
    #[inline]
    pub fn into_components(self) -> Vec<f32> {
        self.components
    }

    /// Checks that this color is in `space`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColor`](crate::ValidationError::InvalidColor) on a
    /// color-space mismatch. Colors are never coerced between spaces.
    pub fn expect_space(&self, space: ColorSpace) -> Result<&Self> {
        if self.space != space {
            return Err(PixelcoreError::invalid_color(format!(
                "expected a {space} color, got {}",
                self.space
            )));
        }
        Ok(self)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.space)?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_valid_colors() {
        assert!(Color::rgb(1.0, 0.0, 0.25).is_ok());
        assert!(Color::lab(53.2, 80.1, 67.2).is_ok());
        assert!(Color::hsv(359.0, 1.0, 1.0).is_ok());
        assert!(Color::gray(0.0).is_ok());
    }

    #[test]
    fn test_wrong_channel_count() {
        let err = Color::new(ColorSpace::Rgb, vec![0.1f32, 0.2]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidColor);
        assert!(err.message().contains("3 components"));

        let err = Color::new(ColorSpace::Gray, vec![0.1f32, 0.2, 0.3]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidColor);
    }

    #[test]
    fn test_out_of_range() {
        for err in [
            Color::rgb(1.5, 0.0, 0.0).unwrap_err(),
            Color::lab(-1.0, 0.0, 0.0).unwrap_err(),
            Color::hsv(360.0, 0.5, 0.5).unwrap_err(),
            Color::gray(f32::NAN).unwrap_err(),
        ] {
            assert_eq!(err.kind(), ErrorKind::InvalidColor);
        }
    }

    #[test]
    fn test_error_names_channel() {
        let err = Color::lab(50.0, 0.0, 200.0).unwrap_err();
        assert!(err.message().contains("channel b"));
    }

    #[test]
    fn test_hue_message_uses_half_open_range() {
        let err = Color::hsv(360.0, 0.5, 0.5).unwrap_err();
        assert!(err.message().contains("[0, 360)"), "{}", err.message());
        let err = Color::hsv(0.0, 1.5, 0.5).unwrap_err();
        assert!(err.message().contains("[0, 1]"), "{}", err.message());
    }

    #[test]
    fn test_expect_space() {
        let c = Color::gray(0.5).unwrap();
        assert!(c.expect_space(ColorSpace::Gray).is_ok());
        let err = c.expect_space(ColorSpace::Rgb).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidColor);
    }

    #[test]
    fn test_display() {
        let c = Color::rgb(1.0, 0.5, 0.0).unwrap();
        assert_eq!(c.to_string(), "RGB(1, 0.5, 0)");
    }
}
