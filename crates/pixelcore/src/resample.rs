//! Resampling vocabulary and request validation.
//!
//! Provides the closed set of interpolation method names and
//! [`ResamplePlan`], which validates a resize request at the boundary.
//! pixelcore implements no resampling; the crates that do report which
//! methods they implement through [`Resampler`].
//!
//! # Methods
//!
//! - [`Interpolation::Nearest`] - No interpolation (blocky)
//! - [`Interpolation::Bilinear`] - Linear interpolation (smooth but blurry)
//! - [`Interpolation::Bicubic`] - Cubic interpolation (sharper than bilinear)
//! - [`Interpolation::Lanczos3`] - Sinc-based (best for downscaling)
//!
//! A name outside this set is an unknown method. A name inside it is only a
//! request: it is unsupported until a [`Resampler`] claims it.
//!
//! # Example
//!
//! ```rust
//! use pixelcore::{ColorSpace, ErrorKind, ImageSpec, Interpolation, ResamplePlan, Resampler};
//!
//! struct NearestOnly;
//!
//! impl Resampler for NearestOnly {
//!     fn supports(&self, method: Interpolation) -> bool {
//!         method == Interpolation::Nearest
//!     }
//! }
//!
//! let src = ImageSpec::new(64, 64, ColorSpace::Rgb, true)?;
//! let plan = ResamplePlan::new(&src, 32, 32, Interpolation::Lanczos3)?;
//! let err = plan.check_supported(&NearestOnly).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnsupportedInterpolation);
//!
//! assert!(ResamplePlan::parse(&src, 32, 32, "SINC").is_err());
//! # Ok::<(), pixelcore::PixelcoreError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::UnsupportedOperationError;
use crate::{ImageSpec, PixelcoreError, Result};

/// Resampling filter for resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interpolation {
    /// Nearest-neighbor.
    #[cfg_attr(feature = "serde", serde(rename = "NEAREST"))]
    Nearest,
    /// Bilinear (triangle) filter.
    #[cfg_attr(feature = "serde", serde(rename = "BILINEAR"))]
    Bilinear,
    /// Bicubic (Mitchell-Netravali) filter.
    #[cfg_attr(feature = "serde", serde(rename = "BICUBIC"))]
    Bicubic,
    /// Lanczos with a = 3.
    #[cfg_attr(feature = "serde", serde(rename = "LANCZOS3"))]
    Lanczos3,
}

impl Interpolation {
    /// All methods, cheapest first.
    pub const ALL: [Interpolation; 4] = [
        Self::Nearest,
        Self::Bilinear,
        Self::Bicubic,
        Self::Lanczos3,
    ];

    /// Canonical identifier.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Nearest => "NEAREST",
            Self::Bilinear => "BILINEAR",
            Self::Bicubic => "BICUBIC",
            Self::Lanczos3 => "LANCZOS3",
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interpolation {
    type Err = UnsupportedOperationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| {
                UnsupportedOperationError::UnsupportedInterpolation(format!("unknown interpolation method {s:?}"))
            })
    }
}

/// A resampling implementation, as seen by request validation.
pub trait Resampler {
    /// Whether this resampler implements `method`.
    fn supports(&self, method: Interpolation) -> bool;
}

/// Validated resize request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResamplePlan {
    source: ImageSpec,
    target: ImageSpec,
    method: Interpolation,
}

impl ResamplePlan {
    /// Plans a resize of `source` to `dst_width x dst_height`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidImage`](crate::ValidationError::InvalidImage) if a
    /// destination dimension is zero.
    pub fn new(
        source: &ImageSpec,
        dst_width: u32,
        dst_height: u32,
        method: Interpolation,
    ) -> Result<Self> {
        // Destination gets the same checks as any image
        let target = ImageSpec::new(dst_width, dst_height, source.color_space(), source.has_alpha())
            .map_err(|e| PixelcoreError::invalid_image(format!("resize target: {}", e.message())))?;

        debug!(
            src_width = source.width(),
            src_height = source.height(),
            dst_width,
            dst_height,
            %method,
            "planned resample"
        );
        Ok(Self {
            source: *source,
            target,
            method,
        })
    }

    /// Like [`ResamplePlan::new`], with the method given by identifier.
    ///
    /// The destination size is checked before the method name.
    ///
    /// # Errors
    ///
    /// [`InvalidImage`](crate::ValidationError::InvalidImage) for a zero
    /// destination, then
    /// [`UnsupportedInterpolation`](crate::UnsupportedOperationError::UnsupportedInterpolation)
    /// for an unknown method.
    pub fn parse(source: &ImageSpec, dst_width: u32, dst_height: u32, method: &str) -> Result<Self> {
        if dst_width == 0 || dst_height == 0 {
            return Err(PixelcoreError::invalid_image(format!(
                "resize target: dimensions must be non-zero, got {dst_width}x{dst_height}"
            )));
        }
        Self::new(source, dst_width, dst_height, method.parse()?)
    }

    /// Source image spec.
    #[inline]
    pub fn source(&self) -> &ImageSpec {
        &self.source
    }

    /// Destination spec: source layout at the new size.
    #[inline]
    pub fn target(&self) -> &ImageSpec {
        &self.target
    }

    /// Interpolation method.
    #[inline]
    pub fn method(&self) -> Interpolation {
        self.method
    }

    /// Checks that `resampler` implements the requested method.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedInterpolation`](crate::UnsupportedOperationError::UnsupportedInterpolation)
    /// if it does not.
    pub fn check_supported<R: Resampler + ?Sized>(&self, resampler: &R) -> Result<&Self> {
        if !resampler.supports(self.method) {
            return Err(PixelcoreError::unsupported_interpolation(format!(
                "{} is not implemented by this resampler",
                self.method
            )));
        }
        Ok(self)
    }
}
