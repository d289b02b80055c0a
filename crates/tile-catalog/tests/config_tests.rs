use std::path::PathBuf;
use tile_catalog::*;

#[cfg(feature = "serde")]
#[test]
fn test_entries_parse_both_shapes() {
    let json = r#"{
        "title": "Parking Tiles",
        "image_path": "./images",
        "output_pdf": "./out/catalog.pdf",
        "pages": [
            ["plain.jpg", { "file": "fancy.jpg", "title": "Fancy Tile" }],
            [{ "file": "untitled.jpg" }]
        ]
    }"#;

    let config: CatalogConfig = serde_json::from_str(json).unwrap();
    assert!(config.validate().is_ok());

    let first = &config.pages[0];
    assert_eq!(first[0].file(), "plain.jpg");
    assert_eq!(first[0].caption(), "plain");
    assert_eq!(first[1].file(), "fancy.jpg");
    assert_eq!(first[1].caption(), "Fancy Tile");

    // A titled entry without a title falls back to the file stem.
    assert_eq!(config.pages[1][0].caption(), "untitled");
}

#[test]
fn test_validation_rejects_empty() {
    let config = CatalogConfig {
        title: "Empty".to_string(),
        image_path: PathBuf::from("."),
        output_pdf: PathBuf::from("out.pdf"),
        pages: vec![],
    };
    assert!(matches!(config.validate(), Err(CatalogError::NoPages)));

    let config = CatalogConfig {
        pages: vec![vec![]],
        ..config
    };
    assert!(matches!(config.validate(), Err(CatalogError::Config(_))));
}

#[tokio::test]
async fn test_from_image_dir_sorts_and_chunks() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["c.jpg", "a.jpg", "b.png", "d.jpeg", "notes.txt"] {
        std::fs::write(dir.path().join(name), b"stub").unwrap();
    }

    let config = CatalogConfig::from_image_dir(dir.path(), "Scan", "out.pdf", 3)
        .await
        .unwrap();

    assert_eq!(config.pages.len(), 2);
    let names: Vec<&str> = config.pages[0].iter().map(|e| e.file()).collect();
    assert_eq!(names, vec!["a.jpg", "b.png", "c.jpg"]);
    assert_eq!(config.pages[1][0].file(), "d.jpeg");
}

#[tokio::test]
async fn test_from_image_dir_rejects_empty_dir() {
    let dir = tempfile::tempdir().unwrap();
    let result = CatalogConfig::from_image_dir(dir.path(), "Scan", "out.pdf", 9).await;
    assert!(result.is_err());
}
