//! Collage is a square image-collage layout engine.
//!
//! A call takes a template, an ordered list of decoded images, a canvas size and style options,
//! and returns one encoded raster image:
//!
//! - Pick a [`TemplateId`] (triangle, 2x2 grid, 3x3 grid, horizontal or vertical strip)
//! - Decode inputs with [`decode_image`] / [`load_images`]
//! - Call [`composite`] and hand the [`EncodedImage`] to an [`ImageSink`]
//!
//! Layout is pure geometry ([`plan_layout`]); drawing happens on a [`CompositeCanvas`]. JSON job
//! files ([`CompositeJob`]) drive the same pipeline from disk.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Input decoding and file selection.
pub mod assets;
/// Composite entry points and style options.
pub mod compose;
/// Raster encoding and output sinks.
pub mod encode;
/// JSON job files.
pub mod job;
/// Slot geometry and image fitting.
pub mod layout;
/// Canvas drawing and template previews.
pub mod render;
/// Built-in templates.
pub mod template;

pub use crate::foundation::core::{Point, Rect, Rgba8, Size};
pub use crate::foundation::error::{CollageError, CollageResult};

pub use crate::assets::decode::{DecodedImage, decode_all, decode_image};
pub use crate::assets::select::{
    LoadedImages, RejectReason, Rejected, Selection, load_images, select_inputs,
};
pub use crate::compose::engine::{
    composite, composite_named, composite_planned, plan_for, render_composite,
};
pub use crate::compose::style::{DEFAULT_CANVAS_SIZE, MAX_CANVAS_SIZE, StyleOptions};
pub use crate::encode::raster::{EncodedImage, OutputFormat, encode_rgba};
pub use crate::encode::sink::{FileSink, ImageSink, InMemorySink, download_file_name};
pub use crate::job::config::CompositeJob;
pub use crate::job::runner::{JobReport, run_job};
pub use crate::layout::fit::{FitPolicy, fit_rect};
pub use crate::layout::plan::{LayoutPlan, SlotPlacement, plan_layout};
pub use crate::layout::slots::{GAP_PX, gap_for, slot_rects};
pub use crate::render::canvas::{CompositeCanvas, ResampleFilter};
pub use crate::render::preview::render_preview;
pub use crate::template::registry::{SlotGeometry, Template, TemplateId};
