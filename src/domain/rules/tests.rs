// Unit tests for validation rules

use super::*;
use crate::domain::errors::ErrorCode;

fn vbr() -> BitrateSettings {
    BitrateSettings {
        mode: Some(BitrateMode::Vbr),
        ..BitrateSettings::default()
    }
}

#[test]
fn test_require_text_rejects_blank() {
    assert!(require_text(None, "missing").is_err());
    assert!(require_text(Some("   ".to_string()), "missing").is_err());
    assert_eq!(require_text(Some("a".to_string()), "missing").unwrap(), "a");
}

#[test]
fn test_is_blank() {
    assert!(is_blank(None));
    assert!(is_blank(Some(" \t")));
    assert!(!is_blank(Some("webvtt")));
}

#[test]
fn test_require_items_rejects_empty() {
    let err = require_items::<u8>(Some(vec![]), "The 'files' field is required.").unwrap_err();
    assert_eq!(err.code(), ErrorCode::MissingRequiredValue);
    assert_eq!(err.detail(), Some("The 'files' field is required."));
    assert!(require_items(Some(vec![1]), "x").is_ok());
}

#[test]
fn test_require_even() {
    assert!(require_even(1080, "even").is_ok());
    let err = require_even(1081, "even").unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidValue);
}

#[test]
fn test_cbr_requires_bitrate() {
    let settings = BitrateSettings::default();
    let err = BitratePolicy::validate(&settings).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MissingRequiredValue);

    let settings = BitrateSettings {
        mode: Some(BitrateMode::Cbr),
        bitrate: Some(5000),
        crf: Some(23),
        ..BitrateSettings::default()
    };
    assert!(BitratePolicy::validate(&settings).is_ok());
}

#[test]
fn test_vbr_shapes() {
    let bitrate_only = BitrateSettings {
        bitrate: Some(4000),
        ..vbr()
    };
    assert_eq!(bitrate_only.vbr_shape(), Some(VbrShape::Bitrate));
    assert!(BitratePolicy::validate(&bitrate_only).is_ok());

    let range_only = BitrateSettings {
        min_bitrate: Some(640),
        max_bitrate: Some(1280),
        ..vbr()
    };
    assert_eq!(range_only.vbr_shape(), Some(VbrShape::Range));
    assert!(BitratePolicy::validate(&range_only).is_ok());

    let crf_only = BitrateSettings {
        crf: Some(23),
        ..vbr()
    };
    assert_eq!(crf_only.vbr_shape(), Some(VbrShape::Crf));
    assert!(BitratePolicy::validate(&crf_only).is_ok());
}

#[test]
fn test_vbr_elimination_order() {
    // Lone bound reported before anything else, even with a bitrate present
    let lone_min_with_bitrate = BitrateSettings {
        bitrate: Some(1000),
        min_bitrate: Some(500),
        ..vbr()
    };
    let err = BitratePolicy::validate(&lone_min_with_bitrate).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidValue);
    assert!(err.detail().unwrap().contains("must be set together"));

    let nothing = vbr();
    let err = BitratePolicy::validate(&nothing).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MissingRequiredValue);

    // crf with a full range: neither lone bound nor empty, so too many shapes
    let range_and_crf = BitrateSettings {
        min_bitrate: Some(640),
        max_bitrate: Some(1280),
        crf: Some(23),
        ..vbr()
    };
    let err = BitratePolicy::validate(&range_and_crf).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidValue);
    assert!(err.detail().unwrap().contains("only one of the following"));

    let bitrate_and_crf = BitrateSettings {
        bitrate: Some(1000),
        crf: Some(23),
        ..vbr()
    };
    let err = BitratePolicy::validate(&bitrate_and_crf).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidValue);
    assert!(err.detail().unwrap().contains("only one of the following"));
}
