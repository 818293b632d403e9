//! Image specification and its validation rules.
//!
//! [`ImageSpec`] describes an image without owning pixels: dimensions, the
//! explicit [`ColorSpace`], and whether an alpha channel follows the color
//! channels. Pixel storage belongs to higher-level crates; they validate
//! their buffers against a spec with [`ImageSpec::validate_buffer`].
//!
//! A spec can only be obtained through its constructors, so every
//! `ImageSpec` in circulation is valid.
//!
//! # Usage
//!
//! ```rust
//! use pixelcore::{ColorSpace, ImageSpec};
//!
//! let spec = ImageSpec::new(1920, 1080, ColorSpace::Rgb, true)?;
//! assert_eq!(spec.channels(), 4);
//! spec.validate_buffer(1920 * 1080 * 4)?;
//!
//! assert!(ImageSpec::new(0, 1080, ColorSpace::Rgb, false).is_err());
//! # Ok::<(), pixelcore::PixelcoreError>(())
//! ```

use tracing::trace;

use crate::{ColorSpace, PixelcoreError, Result};

/// Validated image metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageSpec {
    width: u32,
    height: u32,
    color_space: ColorSpace,
    has_alpha: bool,
}

impl ImageSpec {
    /// Creates a spec for an image in `color_space`, with an optional
    /// trailing alpha channel.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidImage`](crate::ValidationError::InvalidImage) if
    /// either dimension is zero or the total sample count overflows `usize`.
    pub fn new(width: u32, height: u32, color_space: ColorSpace, has_alpha: bool) -> Result<Self> {
        trace!(width, height, %color_space, has_alpha, "ImageSpec::new");

        if width == 0 || height == 0 {
            return Err(PixelcoreError::invalid_image(format!(
                "dimensions must be non-zero, got {width}x{height}"
            )));
        }
        let spec = Self {
            width,
            height,
            color_space,
            has_alpha,
        };
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(spec.channels()))
            .ok_or_else(|| {
                PixelcoreError::invalid_image(format!(
                    "{width}x{height}x{} samples overflow the address space",
                    spec.channels()
                ))
            })?;
        Ok(spec)
    }

    /// Creates a spec from a raw channel count, inferring the alpha channel.
    ///
    /// `channels` must be the color space's channel count, or one more
    /// (color plus alpha).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidImage`](crate::ValidationError::InvalidImage) for any
    /// other channel count, or for invalid dimensions.
    pub fn with_channels(
        width: u32,
        height: u32,
        color_space: ColorSpace,
        channels: usize,
    ) -> Result<Self> {
        let color = color_space.channels();
        let has_alpha = match channels {
            c if c == color => false,
            c if c == color + 1 => true,
            _ => {
                return Err(PixelcoreError::invalid_image(format!(
                    "{color_space} image needs {color} or {} channels, got {channels}",
                    color + 1
                )));
            }
        };
        Self::new(width, height, color_space, has_alpha)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Color space of the color channels.
    #[inline]
    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    /// Whether an alpha channel follows the color channels.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    /// Channels per pixel, alpha included.
    #[inline]
    pub fn channels(&self) -> usize {
        self.color_space.channels() + usize::from(self.has_alpha)
    }

    /// Index of the alpha channel, if present.
    #[inline]
    pub fn alpha_channel(&self) -> Option<usize> {
        self.has_alpha.then(|| self.color_space.channels())
    }

    /// Number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of samples (`pixels * channels`); never overflows for a constructed spec.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.pixel_count() * self.channels()
    }

    /// Checks that an interleaved buffer of `len` samples fits this spec exactly.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidImage`](crate::ValidationError::InvalidImage) on a
    /// length mismatch.
    pub fn validate_buffer(&self, len: usize) -> Result<()> {
        let expected = self.sample_count();
        if len != expected {
            return Err(PixelcoreError::invalid_image(format!(
                "buffer has {len} samples, {}x{}x{} image needs {expected}",
                self.width,
                self.height,
                self.channels()
            )));
        }
        Ok(())
    }

    /// Checks that `other` has the same dimensions (e.g. before compositing).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidImage`](crate::ValidationError::InvalidImage) on
    /// mismatched dimensions.
    pub fn check_same_size(&self, other: &ImageSpec) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(PixelcoreError::invalid_image(format!(
                "dimension mismatch: {}x{} vs {}x{}",
                self.width, self.height, other.width, other.height
            )));
        }
        Ok(())
    }
}
