use image::RgbaImage;

use crate::assets::decode::DecodedImage;
use crate::compose::style::{StyleOptions, validate_canvas_size};
use crate::encode::raster::{EncodedImage, encode_rgba};
use crate::foundation::error::CollageResult;
use crate::layout::plan::{LayoutPlan, plan_layout};
use crate::render::canvas::CompositeCanvas;
use crate::template::registry::TemplateId;

/// Layout plan for `images` without drawing anything.
pub fn plan_for(
    template: TemplateId,
    images: &[DecodedImage],
    canvas_size: u32,
    style: &StyleOptions,
) -> LayoutPlan {
    let sizes: Vec<(u32, u32)> = images.iter().map(DecodedImage::dimensions).collect();
    plan_layout(template, &sizes, canvas_size, style.show_borders, style.fit)
}

/// Draw `images` into a fresh `canvas_size x canvas_size` canvas and return its pixels.
///
/// Configuration is checked before anything is allocated. Images past the template's capacity
/// are ignored; slots without an image keep the background color.
pub fn render_composite(
    template: TemplateId,
    images: &[DecodedImage],
    canvas_size: u32,
    style: &StyleOptions,
) -> CollageResult<RgbaImage> {
    render_planned(template, images, canvas_size, style).map(|(_, pixels)| pixels)
}

/// Composite `images` with `template` and encode the result.
///
/// Pure: identical inputs produce identical bytes, and nothing outlives the call.
pub fn composite(
    template: TemplateId,
    images: &[DecodedImage],
    canvas_size: u32,
    style: &StyleOptions,
) -> CollageResult<EncodedImage> {
    composite_planned(template, images, canvas_size, style).map(|(_, encoded)| encoded)
}

/// [`composite`] that also returns the layout plan it drew.
pub fn composite_planned(
    template: TemplateId,
    images: &[DecodedImage],
    canvas_size: u32,
    style: &StyleOptions,
) -> CollageResult<(LayoutPlan, EncodedImage)> {
    let (plan, pixels) = render_planned(template, images, canvas_size, style)?;
    let encoded = encode_rgba(&pixels, style.output_format, style.quality)?;
    Ok((plan, encoded))
}

#[tracing::instrument(skip(images, style), fields(images = images.len()))]
fn render_planned(
    template: TemplateId,
    images: &[DecodedImage],
    canvas_size: u32,
    style: &StyleOptions,
) -> CollageResult<(LayoutPlan, RgbaImage)> {
    validate_canvas_size(canvas_size)?;
    style.validate()?;

    let plan = plan_for(template, images, canvas_size, style);
    if plan.dropped > 0 {
        tracing::debug!(
            dropped = plan.dropped,
            max = template.template().max_images,
            "ignoring images beyond template capacity"
        );
    }

    let mut canvas = CompositeCanvas::new(canvas_size, style.background);
    for placement in &plan.placements {
        canvas.draw_image(&images[placement.index], placement, style.filter);
        if style.show_borders {
            canvas.stroke_rect(placement.slot, style.border_width, style.border_color);
        }
    }
    Ok((plan, canvas.into_image()))
}

/// [`composite`] keyed by a template id string.
///
/// Unknown ids are configuration errors, not a blank canvas.
pub fn composite_named(
    template_id: &str,
    images: &[DecodedImage],
    canvas_size: u32,
    style: &StyleOptions,
) -> CollageResult<EncodedImage> {
    let template: TemplateId = template_id.parse()?;
    composite(template, images, canvas_size, style)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/engine.rs"]
mod tests;
