use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WeaveError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(WeaveError::decode("x").to_string().contains("decode error:"));
    assert!(WeaveError::config("x").to_string().contains("config error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WeaveError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
