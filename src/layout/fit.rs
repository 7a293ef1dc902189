use serde::{Deserialize, Serialize};

use crate::foundation::core::{Point, Rect};

/// How an image is scaled into its slot. Aspect ratio is preserved by every policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitPolicy {
    /// Scale to cover the slot, center the overflow and clip it. The slot is always full.
    #[default]
    Cover,
    /// Scale to fit inside the slot and center it. Nothing is cropped; the slot may show
    /// background on one axis.
    Contain,
}

/// Destination rectangle for an `img_w x img_h` image placed in `slot` under `policy`.
///
/// With [`FitPolicy::Cover`] the result may extend past `slot`; callers clip to the slot.
/// A zero-sized image or slot yields an empty rectangle at the slot center.
pub fn fit_rect(img_w: u32, img_h: u32, slot: Rect, policy: FitPolicy) -> Rect {
    let slot_w = slot.width();
    let slot_h = slot.height();
    if img_w == 0 || img_h == 0 || slot_w <= 0.0 || slot_h <= 0.0 {
        return Rect::from_center_size(slot.center(), (0.0, 0.0));
    }

    let img_aspect = f64::from(img_w) / f64::from(img_h);
    let slot_aspect = slot_w / slot_h;
    let wider = img_aspect > slot_aspect;

    let (draw_w, draw_h) = match (policy, wider) {
        // cover: match the shorter relative axis, overflow the other
        (FitPolicy::Cover, true) => (slot_h * img_aspect, slot_h),
        (FitPolicy::Cover, false) => (slot_w, slot_w / img_aspect),
        // contain: match the longer relative axis, letterbox the other
        (FitPolicy::Contain, true) => (slot_w, slot_w / img_aspect),
        (FitPolicy::Contain, false) => (slot_h * img_aspect, slot_h),
    };

    let x = slot.x0 + (slot_w - draw_w) / 2.0;
    let y = slot.y0 + (slot_h - draw_h) / 2.0;
    Rect::from_origin_size(Point::new(x, y), (draw_w, draw_h))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;
