use std::fs;

use tabkit_patterns::{BackplateConfig, FrustumPattern};
use tabkit_render::{save_drawing, RenderSettings};
use tempfile::TempDir;

#[test]
fn test_bellows_sheets_written_to_directory() {
    let dir = TempDir::new().unwrap();
    let settings = RenderSettings::default();

    let drawings = FrustumPattern::bellows().build().unwrap();
    let paths: Vec<_> = drawings
        .iter()
        .map(|d| save_drawing(d, dir.path(), &settings).unwrap())
        .collect();

    for (i, path) in paths.iter().enumerate() {
        assert_eq!(path, &dir.path().join(format!("bellows_{i}.svg")));
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("<svg"));
        assert!(content.contains(r#"viewBox="0 0 240 240""#));
        assert_eq!(
            content.matches("<line").count(),
            drawings[i].segment_count()
        );
    }

    let front = fs::read_to_string(&paths[0]).unwrap();
    assert_eq!(front.matches("<circle").count(), 1);
    assert!(front.contains(r#"cx="52""#));
}

#[test]
fn test_backplate_sheet_size() {
    let dir = TempDir::new().unwrap();
    let drawing = &BackplateConfig::default().build().unwrap()[0];
    let path = save_drawing(drawing, dir.path(), &RenderSettings::default()).unwrap();

    let content = fs::read_to_string(path).unwrap();
    assert!(content.contains(r#"width="300mm""#));
    assert!(content.contains(r#"height="260mm""#));
    assert!(!content.contains("<circle"));
}

#[test]
fn test_missing_directory_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let drawing = &BackplateConfig::default().build().unwrap()[0];
    let result = save_drawing(
        drawing,
        dir.path().join("does/not/exist"),
        &RenderSettings::default(),
    );
    assert!(matches!(result, Err(tabkit_render::RenderError::Io(_))));
}
