use super::*;
use crate::assets::select::RejectReason;
use crate::compose::style::StyleOptions;
use crate::encode::raster::OutputFormat;
use crate::encode::sink::InMemorySink;
use crate::template::registry::TemplateId;

fn fixture_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_job").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    for (file, px) in [("a.png", [255, 0, 0, 255]), ("b.png", [0, 0, 255, 255])] {
        image::RgbaImage::from_pixel(30, 20, image::Rgba(px))
            .save(dir.join(file))
            .unwrap();
    }
    std::fs::write(dir.join("notes.txt"), "hello").unwrap();
    std::fs::write(dir.join("broken.png"), "not a png").unwrap();
    dir
}

fn job(template: TemplateId, inputs: &[&str]) -> CompositeJob {
    CompositeJob {
        template,
        canvas_size: 120,
        inputs: inputs.iter().map(PathBuf::from).collect(),
        style: StyleOptions {
            output_format: OutputFormat::Png,
            ..StyleOptions::default()
        },
        output: Some("merged.png".into()),
    }
}

#[test]
fn run_job_composites_and_reports_rejections() {
    let dir = fixture_dir("report");
    let mut sink = InMemorySink::new();
    let report = run_job(
        &job(TemplateId::Horizontal, &["a.png", "notes.txt", "broken.png", "b.png"]),
        &dir,
        &mut sink,
    )
    .unwrap();

    assert_eq!(report.placed, 2);
    assert_eq!(report.dropped, 0);
    assert_eq!(report.file_name, "merged.png");
    assert_eq!(report.output, None);
    assert_eq!(report.rejected.len(), 2);
    assert_eq!(report.rejected[0].reason, RejectReason::NotAnImage);
    assert!(matches!(report.rejected[1].reason, RejectReason::Undecodable(_)));

    let (name, img) = &sink.images()[0];
    assert_eq!(name, "merged.png");
    let px = image::load_from_memory(&img.bytes).unwrap().to_rgba8();
    assert_eq!(px.get_pixel(10, 60).0, [255, 0, 0, 255]);
    assert_eq!(px.get_pixel(110, 60).0, [0, 0, 255, 255]);
}

#[test]
fn template_capacity_limits_inputs() {
    let dir = fixture_dir("capacity");
    let mut sink = InMemorySink::new();
    let inputs = ["a.png", "b.png", "a.png", "b.png", "a.png"];
    let report = run_job(&job(TemplateId::Triangle, &inputs), &dir, &mut sink).unwrap();
    assert_eq!(report.placed, 3);
    assert_eq!(
        report
            .rejected
            .iter()
            .filter(|r| r.reason == RejectReason::TemplateFull)
            .count(),
        2
    );
}

#[test]
fn job_without_valid_images_fails() {
    let dir = fixture_dir("empty");
    let mut sink = InMemorySink::new();
    let err = run_job(&job(TemplateId::Grid4, &["notes.txt", "broken.png"]), &dir, &mut sink)
        .unwrap_err();
    assert!(err.is_configuration());
    assert!(sink.images().is_empty());
}

#[test]
fn default_output_name_follows_download_convention() {
    let dir = fixture_dir("naming");
    let mut sink = InMemorySink::new();
    let mut j = job(TemplateId::Grid9, &["a.png"]);
    j.output = None;
    let report = run_job(&j, &dir, &mut sink).unwrap();
    assert!(report.file_name.starts_with("merged-grid-9-"));
    assert!(report.file_name.ends_with(".png"));
}
