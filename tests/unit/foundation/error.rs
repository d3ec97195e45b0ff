use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        IconError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(IconError::raster("x").to_string().contains("raster error:"));
    assert!(IconError::encode("x").to_string().contains("encode error:"));
}

#[test]
fn io_names_the_path_and_keeps_source() {
    let err = IconError::io(
        "out/icon-512.png",
        std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    );
    let msg = err.to_string();
    assert!(msg.contains("icon-512.png"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = IconError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
