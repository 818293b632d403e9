//! Canonical enumerations used across pixelcore.
//!
//! This module is the single source of truth for the color-space and
//! mask-type vocabularies. No other part of the library may invent values
//! outside these sets.
//!
//! # Rules
//!
//! - Closed sets. Consumers match exhaustively; adding a member is a
//!   deliberate breaking change, which is why neither enum is
//!   `#[non_exhaustive]`.
//! - No aliases. Each member has exactly one canonical identifier.
//! - No implicit conversions. Members never compare equal to strings or to
//!   members of the other enum:
//!
//! ```compile_fail
//! use pixelcore::{ColorSpace, MaskType};
//!
//! let _ = ColorSpace::Rgb == "RGB";
//! ```
//!
//! ```compile_fail
//! use pixelcore::{ColorSpace, MaskType};
//!
//! let _ = ColorSpace::Gray == MaskType::Binary;
//! ```
//!
//! - Color space is always explicit. There is no `Default` for
//!   [`ColorSpace`] and no "unknown" member.
//!
//! # Usage
//!
//! ```rust
//! use pixelcore::{ColorSpace, MaskType};
//!
//! let space: ColorSpace = "LAB".parse()?;
//! assert_eq!(space, ColorSpace::Lab);
//! assert_eq!(space.channels(), 3);
//!
//! let mask: MaskType = "BINARY".parse()?;
//! assert!(mask.accepts(1.0));
//! assert!(!mask.accepts(0.5));
//! # Ok::<(), pixelcore::PixelcoreError>(())
//! ```

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{UnsupportedOperationError, ValidationError};

/// Supported color spaces.
///
/// Each space fixes its channel count and per-channel value range, see
/// [`ColorSpace::component_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorSpace {
    /// Red, green, blue; each in [0, 1].
    #[cfg_attr(feature = "serde", serde(rename = "RGB"))]
    Rgb,
    /// CIE L*a*b*; L in [0, 100], a and b in [-128, 127].
    #[cfg_attr(feature = "serde", serde(rename = "LAB"))]
    Lab,
    /// Hue in degrees [0, 360), saturation and value in [0, 1].
    #[cfg_attr(feature = "serde", serde(rename = "HSV"))]
    Hsv,
    /// Single luminance channel in [0, 1].
    #[cfg_attr(feature = "serde", serde(rename = "GRAY"))]
    Gray,
}

impl ColorSpace {
    /// All members, in declaration order.
    pub const ALL: [ColorSpace; 4] = [Self::Rgb, Self::Lab, Self::Hsv, Self::Gray];

    /// Canonical identifier, also used as the serialized tag.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Lab => "LAB",
            Self::Hsv => "HSV",
            Self::Gray => "GRAY",
        }
    }

    /// Number of color channels (alpha excluded).
    #[inline]
    pub const fn channels(&self) -> usize {
        match self {
            Self::Rgb | Self::Lab | Self::Hsv => 3,
            Self::Gray => 1,
        }
    }

    /// Short channel names, in storage order.
    #[inline]
    pub const fn channel_names(&self) -> &'static [&'static str] {
        match self {
            Self::Rgb => &["R", "G", "B"],
            Self::Lab => &["L", "a", "b"],
            Self::Hsv => &["H", "S", "V"],
            Self::Gray => &["Y"],
        }
    }

    /// Inclusive value range of channel `index`, or `None` past the last channel.
    ///
    /// Hue is reported as `0.0..=360.0`, but its upper bound is excluded: see
    /// [`wraps`](Self::wraps).
    pub fn component_range(&self, index: usize) -> Option<RangeInclusive<f32>> {
        if index >= self.channels() {
            return None;
        }
        let range = match (self, index) {
            (Self::Lab, 0) => 0.0..=100.0,
            (Self::Lab, _) => -128.0..=127.0,
            (Self::Hsv, 0) => 0.0..=360.0,
            _ => 0.0..=1.0,
        };
        Some(range)
    }

    /// Whether `value` is a legal component for channel `index`.
    ///
    /// Non-finite values are never legal.
    pub fn is_valid_component(&self, index: usize, value: f32) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self.component_range(index) {
            Some(range) if self.wraps(index) => *range.start() <= value && value < *range.end(),
            Some(range) => range.contains(&value),
            None => false,
        }
    }

    /// Whether channel `index` is periodic, so its upper bound is excluded (hue).
    #[inline]
    pub const fn wraps(&self, index: usize) -> bool {
        matches!((self, index), (Self::Hsv, 0))
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorSpace {
    type Err = UnsupportedOperationError;

    /// Looks up a color space by canonical identifier.
    ///
    /// Matching is exact: no case folding, no trimming, no aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|space| space.as_str() == s)
            .ok_or_else(|| {
                UnsupportedOperationError::UnsupportedColorSpace(format!("unknown color space {s:?}"))
            })
    }
}

/// Supported mask types.
///
/// The tag fixes the legal value range of a mask buffer; it holds no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaskType {
    /// Values are exactly 0 or 1.
    #[cfg_attr(feature = "serde", serde(rename = "BINARY"))]
    Binary,
    /// Values are continuous in the closed interval [0, 1].
    #[cfg_attr(feature = "serde", serde(rename = "WEIGHTED"))]
    Weighted,
}

impl MaskType {
    /// All members, in declaration order.
    pub const ALL: [MaskType; 2] = [Self::Binary, Self::Weighted];

    /// Canonical identifier, also used as the serialized tag.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Binary => "BINARY",
            Self::Weighted => "WEIGHTED",
        }
    }

    /// Whether `value` is legal for this mask type. NaN never is.
    #[inline]
    pub fn accepts(&self, value: f32) -> bool {
        match self {
            Self::Binary => value == 0.0 || value == 1.0,
            Self::Weighted => (0.0..=1.0).contains(&value),
        }
    }

    /// Checks every value, reporting the first offending index.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidMask`] if any value is outside the range.
    pub fn validate(&self, values: &[f32]) -> Result<(), ValidationError> {
        match self.first_rejected(values) {
            None => Ok(()),
            Some(index) => Err(ValidationError::InvalidMask(format!(
                "value {} at index {} is outside the {} range {}",
                values[index],
                index,
                self,
                self.range_description()
            ))),
        }
    }

    #[cfg(feature = "parallel")]
    fn first_rejected(&self, values: &[f32]) -> Option<usize> {
        values.par_iter().position_first(|&v| !self.accepts(v))
    }

    #[cfg(not(feature = "parallel"))]
    fn first_rejected(&self, values: &[f32]) -> Option<usize> {
        values.iter().position(|&v| !self.accepts(v))
    }

    fn range_description(&self) -> &'static str {
        match self {
            Self::Binary => "{0, 1}",
            Self::Weighted => "[0, 1]",
        }
    }
}

impl fmt::Display for MaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaskType {
    type Err = ValidationError;

    /// Looks up a mask type by canonical identifier (exact match).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mask_type| mask_type.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidMask(format!("unknown mask type {s:?}")))
    }
}
