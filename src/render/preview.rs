use image::RgbaImage;

use crate::compose::style::validate_canvas_size;
use crate::foundation::core::Rgba8;
use crate::foundation::error::CollageResult;
use crate::layout::slots::slot_rects;
use crate::render::canvas::CompositeCanvas;
use crate::template::registry::{SlotGeometry, TemplateId};

/// Tile shades, cycled per slot.
pub const PREVIEW_SHADES: [Rgba8; 4] = [
    Rgba8::rgb(0x93, 0xc5, 0xfd),
    Rgba8::rgb(0x60, 0xa5, 0xfa),
    Rgba8::rgb(0x3b, 0x82, 0xf6),
    Rgba8::rgb(0x25, 0x63, 0xeb),
];

/// Strip templates show this many tiles in their thumbnail.
const STRIP_PREVIEW_TILES: usize = 4;

/// Thumbnail of a template: its slots as colored tiles on a transparent square.
pub fn render_preview(template: TemplateId, size: u32) -> CollageResult<RgbaImage> {
    validate_canvas_size(size)?;
    let tpl = template.template();
    let tiles = match tpl.geometry {
        SlotGeometry::Row | SlotGeometry::Column => STRIP_PREVIEW_TILES,
        SlotGeometry::Triangle | SlotGeometry::Grid { .. } => tpl.max_images,
    };
    // gap scales with the thumbnail, never under one pixel
    let gap = (f64::from(size) / 16.0).max(1.0);

    let mut canvas = CompositeCanvas::new(size, Rgba8::TRANSPARENT);
    for (i, slot) in slot_rects(tpl, tiles, size, gap).into_iter().enumerate() {
        canvas.fill_rect(slot, PREVIEW_SHADES[i % PREVIEW_SHADES.len()]);
    }
    Ok(canvas.into_image())
}

#[cfg(test)]
#[path = "../../tests/unit/render/preview.rs"]
mod tests;
