use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use sha2::{Digest as _, Sha256};

use collage::{
    CollageResult, CompositeJob, DEFAULT_CANVAS_SIZE, EncodedImage, FileSink, FitPolicy,
    ImageSink, OutputFormat, ResampleFilter, Rgba8, StyleOptions, Template, TemplateId,
};

#[derive(Parser, Debug)]
#[command(name = "collage", version, about = "Merge images into a square collage")]
struct Cli {
    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite input images with a template.
    Compose(ComposeArgs),
    /// Run a JSON job file.
    Job(JobArgs),
    /// List the built-in templates.
    Templates(TemplatesArgs),
    /// Render a template thumbnail as a PNG.
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Template id (triangle, grid-4, grid-9, horizontal, vertical).
    #[arg(short, long)]
    template: TemplateId,

    /// Input images, in slot order.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output path. Defaults to `merged-<template>-<millis>.<ext>` in the current directory.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Canvas side length in pixels.
    #[arg(long, default_value_t = DEFAULT_CANVAS_SIZE)]
    size: u32,

    /// Output format. Defaults to the `--out` extension, then JPEG.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Encoder quality in [0, 1].
    #[arg(long, default_value_t = 0.9)]
    quality: f32,

    /// Disable slot gaps and outlines.
    #[arg(long, default_value_t = false)]
    no_borders: bool,

    /// Outline width in pixels.
    #[arg(long, default_value_t = 2.0)]
    border_width: f64,

    /// Outline color (#rgb, #rrggbb or #rrggbbaa).
    #[arg(long, default_value = "#ffffff")]
    border_color: Rgba8,

    /// Canvas background color.
    #[arg(long, default_value = "#ffffff")]
    background: Rgba8,

    /// How images are scaled into slots.
    #[arg(long, value_enum, default_value_t = FitArg::Cover)]
    fit: FitArg,

    /// Resampling kernel.
    #[arg(long, value_enum, default_value_t = FilterArg::CatmullRom)]
    filter: FilterArg,

    /// Refuse to replace an existing output file.
    #[arg(long, default_value_t = false)]
    no_overwrite: bool,
}

#[derive(Parser, Debug)]
struct JobArgs {
    /// Input job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Write outputs here instead of next to the job file.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Print the job report as JSON on stdout.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct TemplatesArgs {
    /// Print as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Template id.
    #[arg(short, long)]
    template: TemplateId,

    /// Thumbnail side length in pixels.
    #[arg(long, default_value_t = 128)]
    size: u32,

    /// Output PNG path.
    #[arg(short, long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Jpeg,
    Png,
}

impl From<FormatArg> for OutputFormat {
    fn from(v: FormatArg) -> Self {
        match v {
            FormatArg::Jpeg => OutputFormat::Jpeg,
            FormatArg::Png => OutputFormat::Png,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FitArg {
    Cover,
    Contain,
}

impl From<FitArg> for FitPolicy {
    fn from(v: FitArg) -> Self {
        match v {
            FitArg::Cover => FitPolicy::Cover,
            FitArg::Contain => FitPolicy::Contain,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterArg {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<FilterArg> for ResampleFilter {
    fn from(v: FilterArg) -> Self {
        match v {
            FilterArg::Nearest => ResampleFilter::Nearest,
            FilterArg::Triangle => ResampleFilter::Triangle,
            FilterArg::CatmullRom => ResampleFilter::CatmullRom,
            FilterArg::Gaussian => ResampleFilter::Gaussian,
            FilterArg::Lanczos3 => ResampleFilter::Lanczos3,
        }
    }
}

/// File sink that remembers the digest of the last image written.
struct DigestSink {
    inner: FileSink,
    last: Option<(usize, String)>,
}

impl DigestSink {
    fn new(inner: FileSink) -> Self {
        Self { inner, last: None }
    }
}

impl ImageSink for DigestSink {
    fn write(&mut self, name: &str, image: &EncodedImage) -> CollageResult<Option<PathBuf>> {
        let out = self.inner.write(name, image)?;
        self.last = Some((image.len(), format!("{:x}", Sha256::digest(&image.bytes))));
        Ok(out)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Job(args) => cmd_job(args),
        Command::Templates(args) => cmd_templates(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let output_format = args
        .format
        .map(OutputFormat::from)
        .or_else(|| args.out.as_deref().and_then(OutputFormat::from_path))
        .unwrap_or_default();

    let job = CompositeJob {
        template: args.template,
        canvas_size: args.size,
        inputs: args.inputs,
        style: StyleOptions {
            show_borders: !args.no_borders,
            border_width: args.border_width,
            border_color: args.border_color,
            quality: args.quality,
            output_format,
            fit: args.fit.into(),
            background: args.background,
            filter: args.filter.into(),
        },
        output: args.out,
    };

    let sink = FileSink::new(".").with_overwrite(!args.no_overwrite);
    run(&job, Path::new("."), sink, false)
}

fn cmd_job(args: JobArgs) -> anyhow::Result<()> {
    let job = CompositeJob::from_path(&args.in_path)?;
    let root = args
        .in_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    let out_dir = args.out_dir.unwrap_or_else(|| root.clone());
    run(&job, &root, FileSink::new(out_dir), args.json)
}

fn run(job: &CompositeJob, root: &Path, sink: FileSink, json: bool) -> anyhow::Result<()> {
    let mut sink = DigestSink::new(sink);
    let report = collage::run_job(job, root, &mut sink)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    for r in &report.rejected {
        eprintln!("skipped {}: {}", r.path.display(), r.reason);
    }
    print_written(report.output.as_deref(), &sink);
    Ok(())
}

fn print_written(path: Option<&Path>, sink: &DigestSink) {
    if let (Some(path), Some((len, digest))) = (path, &sink.last) {
        println!("wrote {} ({len} bytes, sha256 {digest})", path.display());
    }
}

fn cmd_templates(args: TemplatesArgs) -> anyhow::Result<()> {
    let all = Template::all();
    if args.json {
        println!("{}", serde_json::to_string_pretty(all)?);
        return Ok(());
    }
    for t in all {
        println!(
            "{:<12} {:<12} max {:>2}  {}",
            t.id.as_str(),
            t.name,
            t.max_images,
            t.description
        );
    }
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let img = collage::render_preview(args.template, args.size)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    println!("wrote {}", args.out.display());
    Ok(())
}
