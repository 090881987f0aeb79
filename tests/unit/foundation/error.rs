use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FibTreeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FibTreeError::layout("x")
            .to_string()
            .contains("layout error:")
    );
    assert!(
        FibTreeError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        FibTreeError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        FibTreeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn input_too_large_names_the_bound() {
    let err = FibTreeError::InputTooLarge { n: 40, max: 20 };
    let s = err.to_string();
    assert!(s.contains("input too large:"));
    assert!(s.contains("n=40"));
    assert!(s.contains("20"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FibTreeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
