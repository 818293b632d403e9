//! # pixelcore
//!
//! Canonical vocabulary and validation contract for image processing.
//!
//! This crate provides the foundational types every pixelcore operation is
//! built on:
//!
//! - [`ColorSpace`], [`MaskType`] - Closed enumerations; no other values exist
//! - [`PixelcoreError`] - The single error type, split into
//!   [`ValidationError`] and [`UnsupportedOperationError`]
//! - [`ImageSpec`], [`Color`], [`Mask`] - Domain values validated at construction
//! - [`convert`], [`Converter`] - Validated entry point for color conversion
//! - [`Interpolation`], [`ResamplePlan`], [`Resampler`] - Validated entry point for resampling
//!
//! ## Design Philosophy
//!
//! Color space and mask semantics are never implicit. Every value carries
//! its [`ColorSpace`] or [`MaskType`], and nothing coerces between them.
//! Validation runs at the earliest boundary and fails immediately with a
//! typed error; no invalid object is ever partially built.
//!
//! ```rust
//! use pixelcore::prelude::*;
//!
//! let err = Mask::new(1, 1, MaskType::Binary, vec![0.5]).unwrap_err();
//! assert!(err.is_validation());
//! assert_eq!(err.kind(), ErrorKind::InvalidMask);
//! ```
//!
//! The two error branches mean different things to callers. A
//! [`ValidationError`] is permanent for that input. An
//! [`UnsupportedOperationError`] means the input is fine but the capability
//! is missing, so different parameters or a later version may succeed.
//! pixelcore never retries either.
//!
//! ## Crate Structure
//!
//! pixelcore has no internal dependencies. Conversion math, resampling
//! kernels, pixel storage and I/O live in the crates built on top of it and
//! report failures through [`PixelcoreError`].
//!
//! ## Feature Flags
//!
//! - `parallel` - Scan mask values with rayon (enabled by default)
//! - `serde` - Serialize [`ColorSpace`], [`MaskType`] and [`Interpolation`]
//!   as their canonical identifiers

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod convert;
pub mod enums;
pub mod error;
pub mod image;
pub mod mask;
pub mod resample;

// Re-exports for convenience
pub use color::Color;
pub use convert::{convert, convert_with, Converter, IdentityConverter};
pub use enums::{ColorSpace, MaskType};
pub use error::{ErrorKind, PixelcoreError, Result, UnsupportedOperationError, ValidationError};
pub use image::ImageSpec;
pub use mask::Mask;
pub use resample::{Interpolation, ResamplePlan, Resampler};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pixelcore::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::convert::{convert, convert_with, Converter, IdentityConverter};
    pub use crate::enums::{ColorSpace, MaskType};
    pub use crate::error::{
        ErrorKind, PixelcoreError, Result, UnsupportedOperationError, ValidationError,
    };
    pub use crate::image::ImageSpec;
    pub use crate::mask::Mask;
    pub use crate::resample::{Interpolation, ResamplePlan, Resampler};
}
