use std::path::PathBuf;

use super::*;
use crate::template::registry::TemplateId;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_select").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn mime_detection_by_extension() {
    assert_eq!(image_mime_type(Path::new("a.JPG")), Some("image/jpeg"));
    assert_eq!(image_mime_type(Path::new("dir/b.png")), Some("image/png"));
    assert_eq!(image_mime_type(Path::new("c.gif")), Some("image/gif"));
    assert_eq!(image_mime_type(Path::new("notes.txt")), None);
    assert_eq!(image_mime_type(Path::new("no_extension")), None);
}

#[test]
fn selection_filters_non_images_then_caps() {
    let paths = ["a.png", "readme.md", "b.jpg", "c.jpeg", "d.png", "e.webp"];
    let sel = select_inputs(&paths, TemplateId::Triangle.template());

    assert_eq!(
        sel.accepted,
        vec![
            PathBuf::from("a.png"),
            PathBuf::from("b.jpg"),
            PathBuf::from("c.jpeg")
        ]
    );
    assert_eq!(sel.rejected.len(), 3);
    assert_eq!(sel.rejected[0].path, PathBuf::from("readme.md"));
    assert_eq!(sel.rejected[0].reason, RejectReason::NotAnImage);
    assert_eq!(sel.rejected[1].reason, RejectReason::TemplateFull);
    assert_eq!(sel.rejected[2].reason, RejectReason::TemplateFull);
}

#[test]
fn load_images_reports_failures_and_keeps_order() {
    let dir = scratch_dir("load");
    let a = dir.join("a.png");
    let b = dir.join("b.png");
    let broken = dir.join("broken.png");
    let missing = dir.join("missing.png");

    image::RgbaImage::from_pixel(4, 2, image::Rgba([1, 2, 3, 255]))
        .save(&a)
        .unwrap();
    image::RgbaImage::from_pixel(2, 6, image::Rgba([4, 5, 6, 255]))
        .save(&b)
        .unwrap();
    std::fs::write(&broken, b"nope").unwrap();

    let loaded = load_images(&[a, broken.clone(), missing.clone(), b]);
    assert_eq!(loaded.images.len(), 2);
    assert_eq!(loaded.images[0].dimensions(), (4, 2));
    assert_eq!(loaded.images[1].dimensions(), (2, 6));

    assert_eq!(loaded.rejected.len(), 2);
    assert_eq!(loaded.rejected[0].path, broken);
    assert!(matches!(loaded.rejected[0].reason, RejectReason::Undecodable(_)));
    assert_eq!(loaded.rejected[1].path, missing);
    assert!(matches!(loaded.rejected[1].reason, RejectReason::Unreadable(_)));
}
