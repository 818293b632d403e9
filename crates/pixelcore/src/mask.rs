//! Per-pixel masks with an explicit [`MaskType`].
//!
//! A [`Mask`] is a single-channel, row-major buffer of `width * height`
//! weights. Its [`MaskType`] fixes which values are legal, and construction
//! rejects anything else, so a mask in hand always satisfies its type.
//!
//! ```rust
//! use pixelcore::{ColorSpace, ImageSpec, Mask, MaskType};
//!
//! let image = ImageSpec::new(2, 2, ColorSpace::Rgb, false)?;
//! let mask = Mask::new(2, 2, MaskType::Binary, vec![0.0, 1.0, 1.0, 0.0])?;
//! mask.check_fits(&image)?;
//!
//! // 0.5 is not a binary value
//! assert!(Mask::new(1, 1, MaskType::Binary, vec![0.5]).is_err());
//! # Ok::<(), pixelcore::PixelcoreError>(())
//! ```

use tracing::trace;

use crate::{ImageSpec, MaskType, PixelcoreError, Result};

/// Validated mask buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    width: u32,
    height: u32,
    mask_type: MaskType,
    values: Vec<f32>,
}

impl Mask {
    /// Creates a mask from row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMask`](crate::ValidationError::InvalidMask) if a
    /// dimension is zero, `values.len() != width * height`, or any value is
    /// outside the range of `mask_type`.
    pub fn new(width: u32, height: u32, mask_type: MaskType, values: Vec<f32>) -> Result<Self> {
        trace!(width, height, %mask_type, len = values.len(), "Mask::new");

        if width == 0 || height == 0 {
            return Err(PixelcoreError::invalid_mask(format!(
                "dimensions must be non-zero, got {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize;
        if values.len() != expected {
            return Err(PixelcoreError::invalid_mask(format!(
                "{width}x{height} mask needs {expected} values, got {}",
                values.len()
            )));
        }
        mask_type.validate(&values)?;

        Ok(Self {
            width,
            height,
            mask_type,
            values,
        })
    }

    /// Creates a mask with every value set to `value`.
    ///
    /// # Errors
    ///
    /// Same as [`Mask::new`], plus [`InvalidMask`](crate::ValidationError::InvalidMask)
    /// when the buffer for `width * height` values cannot be allocated.
    pub fn filled(width: u32, height: u32, mask_type: MaskType, value: f32) -> Result<Self> {
        if !mask_type.accepts(value) {
            return Err(PixelcoreError::invalid_mask(format!(
                "fill value {value} is not a legal {mask_type} value"
            )));
        }
        let too_large = || PixelcoreError::invalid_mask(format!("{width}x{height} mask is too large"));
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(too_large)?;

        // Byte-size overflow and allocation failure both surface here.
        let mut values = Vec::new();
        values.try_reserve_exact(len).map_err(|_| too_large())?;
        values.resize(len, value);
        Self::new(width, height, mask_type, values)
    }

    /// Mask width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Declared mask type.
    #[inline]
    pub fn mask_type(&self) -> MaskType {
        self.mask_type
    }

    /// Row-major values.
    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Value at `(x, y)`, or `None` outside the mask.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.values
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Checks that this mask covers `image` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMask`](crate::ValidationError::InvalidMask) if the
    /// mask and image dimensions differ.
    pub fn check_fits(&self, image: &ImageSpec) -> Result<()> {
        if self.dimensions() != image.dimensions() {
            return Err(PixelcoreError::invalid_mask(format!(
                "{}x{} mask does not match {}x{} image",
                self.width,
                self.height,
                image.width(),
                image.height()
            )));
        }
        Ok(())
    }

    /// Checks that this mask was declared as `mask_type`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMask`](crate::ValidationError::InvalidMask) on a
    /// mismatch. A binary mask is not silently treated as weighted, nor the
    /// reverse.
    pub fn expect_type(&self, mask_type: MaskType) -> Result<&Self> {
        if self.mask_type != mask_type {
            return Err(PixelcoreError::invalid_mask(format!(
                "expected a {mask_type} mask, got {}",
                self.mask_type
            )));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorSpace, ErrorKind};

    #[test]
    fn test_binary_mask() {
        let mask = Mask::new(2, 1, MaskType::Binary, vec![0.0, 1.0]).unwrap();
        assert_eq!(mask.mask_type(), MaskType::Binary);
        assert_eq!(mask.get(1, 0), Some(1.0));
        assert_eq!(mask.get(2, 0), None);
    }

    #[test]
    fn test_binary_rejects_half() {
        let err = Mask::new(1, 1, MaskType::Binary, vec![0.5]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMask);
    }

    #[test]
    fn test_weighted_range() {
        assert!(Mask::new(3, 1, MaskType::Weighted, vec![0.0, 0.5, 1.0]).is_ok());
        for bad in [-0.1, 1.01, f32::NAN, f32::INFINITY] {
            let err = Mask::new(1, 1, MaskType::Weighted, vec![bad]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidMask);
        }
    }

    #[test]
    fn test_length_mismatch() {
        let err = Mask::new(2, 2, MaskType::Weighted, vec![0.0; 3]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMask);
        let err = Mask::new(0, 2, MaskType::Weighted, vec![]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMask);
    }

    #[test]
    fn test_filled() {
        let mask = Mask::filled(4, 3, MaskType::Weighted, 0.25).unwrap();
        assert_eq!(mask.values().len(), 12);
        assert!(mask.values().iter().all(|&v| v == 0.25));
        assert!(Mask::filled(4, 3, MaskType::Binary, 0.25).is_err());
    }

    #[test]
    fn test_filled_huge_dimensions() {
        let err = Mask::filled(u32::MAX, u32::MAX, MaskType::Weighted, 0.5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMask);
        assert!(err.message().contains("too large"));
    }

    #[test]
    fn test_check_fits() {
        let mask = Mask::filled(4, 4, MaskType::Binary, 1.0).unwrap();
        let same = ImageSpec::new(4, 4, ColorSpace::Rgb, true).unwrap();
        let other = ImageSpec::new(4, 5, ColorSpace::Rgb, true).unwrap();
        assert!(mask.check_fits(&same).is_ok());
        let err = mask.check_fits(&other).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMask);
    }

    #[test]
    fn test_expect_type() {
        let mask = Mask::filled(1, 1, MaskType::Binary, 0.0).unwrap();
        assert!(mask.expect_type(MaskType::Binary).is_ok());
        let err = mask.expect_type(MaskType::Weighted).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMask);
    }
}
