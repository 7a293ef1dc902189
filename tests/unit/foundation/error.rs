use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CollageError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        CollageError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        CollageError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(CollageError::io("x").to_string().contains("io error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CollageError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert!(!err.is_configuration());
}

#[test]
fn configuration_is_classified() {
    assert!(CollageError::configuration("bad size").is_configuration());
    assert!(!CollageError::decode("bad bytes").is_configuration());
}
