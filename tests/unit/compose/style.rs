use super::*;
use serde_json::json;

#[test]
fn defaults_match_the_reference_ui() {
    let s = StyleOptions::default();
    assert!(s.show_borders);
    assert_eq!(s.border_width, 2.0);
    assert_eq!(s.border_color, Rgba8::WHITE);
    assert_eq!(s.quality, 0.9);
    assert_eq!(s.output_format, OutputFormat::Jpeg);
    assert_eq!(s.fit, FitPolicy::Cover);
    assert!(s.validate().is_ok());
}

#[test]
fn partial_json_fills_defaults() {
    let s: StyleOptions = serde_json::from_value(json!({
        "show_borders": false,
        "border_color": "#000",
        "output_format": "png",
        "fit": "contain"
    }))
    .unwrap();
    assert!(!s.show_borders);
    assert_eq!(s.border_color, Rgba8::BLACK);
    assert_eq!(s.output_format, OutputFormat::Png);
    assert_eq!(s.fit, FitPolicy::Contain);
    assert_eq!(s.quality, 0.9);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_value::<StyleOptions>(json!({ "shadow": true })).is_err());
}

#[test]
fn invalid_values_are_configuration_errors() {
    let bad_quality = StyleOptions {
        quality: 1.5,
        ..StyleOptions::default()
    };
    assert!(bad_quality.validate().unwrap_err().is_configuration());

    let bad_border = StyleOptions {
        border_width: -1.0,
        ..StyleOptions::default()
    };
    assert!(bad_border.validate().unwrap_err().is_configuration());
}

#[test]
fn canvas_size_bounds() {
    assert!(validate_canvas_size(0).unwrap_err().is_configuration());
    assert!(validate_canvas_size(1).is_ok());
    assert!(validate_canvas_size(DEFAULT_CANVAS_SIZE).is_ok());
    assert!(validate_canvas_size(MAX_CANVAS_SIZE + 1).is_err());
}
