use super::*;

#[test]
fn minimal_job_uses_defaults() {
    let job = CompositeJob::from_reader(
        r#"{ "template": "triangle", "inputs": ["a.png"] }"#.as_bytes(),
    )
    .unwrap();
    assert_eq!(job.template, TemplateId::Triangle);
    assert_eq!(job.canvas_size, DEFAULT_CANVAS_SIZE);
    assert_eq!(job.style, StyleOptions::default());
    assert_eq!(job.output, None);
    assert!(job.validate().is_ok());
}

#[test]
fn unknown_template_is_configuration_error() {
    let err = CompositeJob::from_reader(r#"{ "template": "grid-16", "inputs": [] }"#.as_bytes())
        .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn unknown_keys_are_rejected() {
    let err = CompositeJob::from_reader(
        r#"{ "template": "grid-4", "inputs": ["a.png"], "shadow": 3 }"#.as_bytes(),
    )
    .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn validate_catches_bad_values() {
    let base = CompositeJob {
        template: TemplateId::Grid4,
        canvas_size: 800,
        inputs: vec!["a.png".into()],
        style: StyleOptions::default(),
        output: Some("out.jpg".into()),
    };
    assert!(base.validate().is_ok());

    let zero = CompositeJob {
        canvas_size: 0,
        ..base.clone()
    };
    assert!(zero.validate().unwrap_err().is_configuration());

    let empty = CompositeJob {
        inputs: vec![],
        ..base.clone()
    };
    assert!(empty.validate().unwrap_err().is_configuration());

    let mismatched = CompositeJob {
        output: Some("out.png".into()),
        ..base.clone()
    };
    assert!(mismatched.validate().unwrap_err().is_configuration());

    let bad_quality = CompositeJob {
        style: StyleOptions {
            quality: 3.0,
            ..StyleOptions::default()
        },
        ..base
    };
    assert!(bad_quality.validate().unwrap_err().is_configuration());
}

#[test]
fn missing_file_is_io_error() {
    let err = CompositeJob::from_path("target/definitely/missing/job.json").unwrap_err();
    assert!(matches!(err, CollageError::Io(_)));
}
