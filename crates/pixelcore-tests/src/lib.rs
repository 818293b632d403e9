//! Integration tests for pixelcore.
//!
//! End-to-end scenarios that cross module boundaries (enum lookup feeding
//! validation, validation feeding the error taxonomy), property tests over
//! the identifier vocabulary and mask ranges, and persistence of the tags
//! through serde.


#[cfg(test)]
mod properties {
    use pixelcore::prelude::*;
    use proptest::prelude::*;

    const COLOR_SPACE_IDS: [&str; 4] = ["RGB", "LAB", "HSV", "GRAY"];
    const MASK_TYPE_IDS: [&str; 2] = ["BINARY", "WEIGHTED"];

    proptest! {
        #[test]
        fn unknown_color_space_ids_rejected(id in "\\PC{0,12}") {
            prop_assume!(!COLOR_SPACE_IDS.contains(&id.as_str()));
            let err = id.parse::<ColorSpace>().unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::UnsupportedColorSpace);
        }

        #[test]
        fn unknown_mask_type_ids_rejected(id in "\\PC{0,12}") {
            prop_assume!(!MASK_TYPE_IDS.contains(&id.as_str()));
            let err = id.parse::<MaskType>().unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::InvalidMask);
        }

        #[test]
        fn lookup_is_idempotent(index in 0usize..4) {
            let id = COLOR_SPACE_IDS[index];
            let first: ColorSpace = id.parse().unwrap();
            let second: ColorSpace = id.parse().unwrap();
            prop_assert_eq!(first, second);
            prop_assert_eq!(first.as_str(), id);
        }

        #[test]
        fn weighted_accepts_unit_interval(v in 0.0f32..=1.0) {
            prop_assert!(Mask::new(1, 1, MaskType::Weighted, vec![v]).is_ok());
        }

        #[test]
        fn weighted_rejects_outside_unit_interval(
            v in prop_oneof![-1.0e6f32..-1.0e-3, 1.001f32..1.0e6]
        ) {
            let err = Mask::new(1, 1, MaskType::Weighted, vec![v]).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::InvalidMask);
        }

        #[test]
        fn binary_rejects_fractions(v in 0.001f32..0.999) {
            let err = Mask::new(1, 1, MaskType::Binary, vec![v]).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::InvalidMask);
        }

        #[test]
        fn wrong_channel_count_is_invalid_color(len in 0usize..8, index in 0usize..4) {
            let space = ColorSpace::ALL[index];
            prop_assume!(len != space.channels());
            let err = Color::new(space, vec![0.0f32; len]).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::InvalidColor);
        }

        #[test]
        fn image_buffer_must_match(w in 1u32..64, h in 1u32..64, extra in 1usize..16) {
            let spec = ImageSpec::new(w, h, ColorSpace::Hsv, false).unwrap();
            prop_assert!(spec.validate_buffer(spec.sample_count()).is_ok());
            prop_assert!(spec.validate_buffer(spec.sample_count() + extra).is_err());
        }
    }
}

#[cfg(test)]
mod persistence {
    use pixelcore::{ColorSpace, Interpolation, MaskType};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct LayerRecord {
        space: ColorSpace,
        mask: MaskType,
        filter: Interpolation,
    }

    #[test]
    fn test_tags_serialize_as_identifiers() {
        for space in ColorSpace::ALL {
            let json = serde_json::to_string(&space).unwrap();
            assert_eq!(json, format!("\"{}\"", space.as_str()));
        }
        for mask in MaskType::ALL {
            let json = serde_json::to_string(&mask).unwrap();
            assert_eq!(json, format!("\"{}\"", mask.as_str()));
        }
    }

    #[test]
    fn test_record_round_trip() {
        let record = LayerRecord {
            space: ColorSpace::Lab,
            mask: MaskType::Weighted,
            filter: Interpolation::Lanczos3,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"space":"LAB","mask":"WEIGHTED","filter":"LANCZOS3"}"#);
        let back: LayerRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_unknown_tags_rejected() {
        assert!(serde_json::from_str::<ColorSpace>("\"XYZ\"").is_err());
        assert!(serde_json::from_str::<ColorSpace>("\"Rgb\"").is_err());
        assert!(serde_json::from_str::<MaskType>("\"binary\"").is_err());
    }
}
