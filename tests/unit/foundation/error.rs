use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PlatenError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PlatenError::image_load("x")
            .to_string()
            .contains("image load error:")
    );
    assert!(
        PlatenError::surface("x")
            .to_string()
            .contains("surface error:")
    );
    assert!(
        PlatenError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PlatenError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
