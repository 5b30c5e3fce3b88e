use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FacadeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(FacadeError::asset("x").to_string().contains("asset error:"));
    assert!(FacadeError::render("x").to_string().contains("render error:"));
    assert!(
        FacadeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FacadeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
