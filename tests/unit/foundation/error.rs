use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LayeredError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        LayeredError::surface("x")
            .to_string()
            .contains("surface error:")
    );
    assert!(
        LayeredError::platform("x")
            .to_string()
            .contains("platform error:")
    );
    assert!(LayeredError::text("x").to_string().contains("text error:"));
    assert!(
        LayeredError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LayeredError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
