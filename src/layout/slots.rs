use crate::foundation::core::Rect;
use crate::template::registry::{SlotGeometry, Template};

/// Spacing between slots when borders are enabled.
pub const GAP_PX: f64 = 4.0;

/// Gap used by every layout for a given border setting.
pub fn gap_for(show_borders: bool) -> f64 {
    if show_borders { GAP_PX } else { 0.0 }
}

/// Candidate slot rectangles for `template` on a square canvas of side `canvas_size`.
///
/// Triangle and grid templates always yield their full set of slots; slots without an image stay
/// background-colored. Row/column templates yield one slot per consumed image, so zero images
/// produce no slots. Gaps are spacing only and never belong to a slot.
pub fn slot_rects(template: &Template, image_count: usize, canvas_size: u32, gap: f64) -> Vec<Rect> {
    let size = f64::from(canvas_size);
    match template.geometry {
        SlotGeometry::Triangle => triangle_slots(size, gap),
        SlotGeometry::Grid { rows, cols } => grid_slots(size, gap, rows, cols),
        SlotGeometry::Row => {
            let n = template.capacity_for(image_count);
            strip_slots(size, gap, n, Axis::X)
        }
        SlotGeometry::Column => {
            let n = template.capacity_for(image_count);
            strip_slots(size, gap, n, Axis::Y)
        }
    }
}

fn triangle_slots(size: f64, gap: f64) -> Vec<Rect> {
    let half = size / 2.0;
    let w = half - gap;
    let h = half - gap;
    vec![
        // top, centered horizontally
        Rect::new(size / 4.0 + gap / 2.0, gap, size / 4.0 + gap / 2.0 + w, gap + h),
        // bottom-left
        Rect::new(gap, half + gap / 2.0, gap + w, half + gap / 2.0 + h),
        // bottom-right
        Rect::new(half + gap / 2.0, half + gap / 2.0, half + gap / 2.0 + w, half + gap / 2.0 + h),
    ]
}

fn grid_slots(size: f64, gap: f64, rows: u32, cols: u32) -> Vec<Rect> {
    let cols = cols.max(1);
    let rows = rows.max(1);
    let cell_w = cell_extent(size, gap, cols as usize);
    let cell_h = cell_extent(size, gap, rows as usize);

    let mut out = Vec::with_capacity((rows * cols) as usize);
    for idx in 0..(rows * cols) {
        let row = idx / cols;
        let col = idx % cols;
        let x = f64::from(col) * (cell_w + gap);
        let y = f64::from(row) * (cell_h + gap);
        out.push(Rect::new(x, y, x + cell_w, y + cell_h));
    }
    out
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

fn strip_slots(size: f64, gap: f64, n: usize, axis: Axis) -> Vec<Rect> {
    if n == 0 {
        return Vec::new();
    }
    let extent = cell_extent(size, gap, n);
    (0..n)
        .map(|i| {
            let start = (i as f64) * (extent + gap);
            match axis {
                Axis::X => Rect::new(start, 0.0, start + extent, size),
                Axis::Y => Rect::new(0.0, start, size, start + extent),
            }
        })
        .collect()
}

/// `(size - gap*(n-1)) / n`
fn cell_extent(size: f64, gap: f64, n: usize) -> f64 {
    let n = n.max(1) as f64;
    ((size - gap * (n - 1.0)) / n).max(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/slots.rs"]
mod tests;
