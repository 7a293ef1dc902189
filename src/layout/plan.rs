use serde::Serialize;

use crate::foundation::core::Rect;
use crate::layout::fit::{FitPolicy, fit_rect};
use crate::layout::slots::{gap_for, slot_rects};
use crate::template::registry::TemplateId;

/// One image assigned to one slot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SlotPlacement {
    /// Index of the image in the caller's input order (also the slot index).
    pub index: usize,
    /// Slot rectangle; drawing is clipped to it.
    pub slot: Rect,
    /// Where the scaled image lands before clipping.
    pub draw: Rect,
}

/// Deterministic geometry for one composite.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayoutPlan {
    /// Template the plan was built for.
    pub template: TemplateId,
    /// Canvas side length in pixels.
    pub canvas_size: u32,
    /// Spacing between slots.
    pub gap: f64,
    /// All candidate slots, including those left empty.
    pub slots: Vec<Rect>,
    /// One entry per consumed image, in input order.
    pub placements: Vec<SlotPlacement>,
    /// Inputs ignored because the template was already full.
    pub dropped: usize,
}

impl LayoutPlan {
    /// Slots that received no image.
    pub fn empty_slots(&self) -> impl Iterator<Item = &Rect> {
        self.slots.iter().skip(self.placements.len())
    }
}

/// Build the layout plan for images of the given pixel sizes, in input order.
///
/// Inputs beyond the template capacity are counted in [`LayoutPlan::dropped`], never placed.
pub fn plan_layout(
    template: TemplateId,
    image_sizes: &[(u32, u32)],
    canvas_size: u32,
    show_borders: bool,
    fit: FitPolicy,
) -> LayoutPlan {
    let tpl = template.template();
    let gap = gap_for(show_borders);
    let slots = slot_rects(tpl, image_sizes.len(), canvas_size, gap);

    let used = tpl.capacity_for(image_sizes.len()).min(slots.len());
    let placements = image_sizes
        .iter()
        .zip(&slots)
        .take(used)
        .enumerate()
        .map(|(index, (&(w, h), &slot))| SlotPlacement {
            index,
            slot,
            draw: fit_rect(w, h, slot, fit),
        })
        .collect();

    LayoutPlan {
        template,
        canvas_size,
        gap,
        slots,
        placements,
        dropped: image_sizes.len().saturating_sub(used),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/plan.rs"]
mod tests;
