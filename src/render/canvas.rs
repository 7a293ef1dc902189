use image::{RgbaImage, imageops};
use serde::{Deserialize, Serialize};

use crate::assets::decode::DecodedImage;
use crate::foundation::core::{Rect, Rgba8};
use crate::foundation::math::{blend_over, round_clamp};
use crate::layout::plan::SlotPlacement;

/// Resampling kernel used when scaling images into slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResampleFilter {
    /// Nearest neighbor.
    Nearest,
    /// Bilinear.
    Triangle,
    /// Bicubic (Catmull-Rom).
    #[default]
    CatmullRom,
    /// Gaussian.
    Gaussian,
    /// Lanczos, window 3.
    Lanczos3,
}

impl ResampleFilter {
    fn to_filter_type(self) -> imageops::FilterType {
        match self {
            ResampleFilter::Nearest => imageops::FilterType::Nearest,
            ResampleFilter::Triangle => imageops::FilterType::Triangle,
            ResampleFilter::CatmullRom => imageops::FilterType::CatmullRom,
            ResampleFilter::Gaussian => imageops::FilterType::Gaussian,
            ResampleFilter::Lanczos3 => imageops::FilterType::Lanczos3,
        }
    }
}

/// Square straight-alpha RGBA8 drawing surface owned by a single composite call.
#[derive(Debug)]
pub struct CompositeCanvas {
    image: RgbaImage,
}

impl CompositeCanvas {
    /// New `size x size` canvas filled with `background`.
    pub fn new(size: u32, background: Rgba8) -> Self {
        Self {
            image: RgbaImage::from_pixel(size, size, background.into()),
        }
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Borrow the pixels drawn so far.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Give up the canvas and return its pixels.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Draw `img` at `placement.draw`, clipped to `placement.slot`.
    ///
    /// Only the visible part of the source is resampled, so cover-fit overflow costs nothing.
    pub fn draw_image(&mut self, img: &DecodedImage, placement: &SlotPlacement, filter: ResampleFilter) {
        let draw = placement.draw;
        let visible = draw.intersect(placement.slot);
        if draw.area() <= 0.0 || visible.area() <= 0.0 {
            return;
        }

        let Some(dst) = self.pixel_bounds(visible) else {
            return;
        };
        let (dx0, dy0, dw, dh) = dst;

        let (img_w, img_h) = img.dimensions();
        let scale_x = f64::from(img_w) / draw.width();
        let scale_y = f64::from(img_h) / draw.height();
        let sx0 = round_clamp((visible.x0 - draw.x0) * scale_x, 0, i64::from(img_w) - 1);
        let sy0 = round_clamp((visible.y0 - draw.y0) * scale_y, 0, i64::from(img_h) - 1);
        let sx1 = round_clamp((visible.x1 - draw.x0) * scale_x, sx0 + 1, i64::from(img_w));
        let sy1 = round_clamp((visible.y1 - draw.y0) * scale_y, sy0 + 1, i64::from(img_h));

        let crop = imageops::crop_imm(
            img.pixels(),
            sx0 as u32,
            sy0 as u32,
            (sx1 - sx0) as u32,
            (sy1 - sy0) as u32,
        )
        .to_image();
        let scaled = if crop.dimensions() == (dw, dh) {
            crop
        } else {
            imageops::resize(&crop, dw, dh, filter.to_filter_type())
        };
        for (x, y, src) in scaled.enumerate_pixels() {
            let dst = self.image.get_pixel_mut(dx0 + x, dy0 + y);
            dst.0 = blend_over(dst.0, src.0);
        }
    }

    /// Fill `rect` (pixel-center sampling) with `color`.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.paint(rect, None, color);
    }

    /// Stroke the outline of `rect` with a line of `width` centered on its edges.
    pub fn stroke_rect(&mut self, rect: Rect, width: f64, color: Rgba8) {
        if width.is_nan() || width <= 0.0 {
            return;
        }
        let half = width / 2.0;
        let outer = rect.inflate(half, half);
        let inner = rect.inflate(-half, -half);
        let hole = (inner.width() > 0.0 && inner.height() > 0.0).then_some(inner);
        self.paint(outer, hole, color);
    }

    fn paint(&mut self, area: Rect, hole: Option<Rect>, color: Rgba8) {
        if color.a == 0 {
            return;
        }
        let size = i64::from(self.size());
        let x0 = round_clamp(area.x0.floor(), 0, size);
        let y0 = round_clamp(area.y0.floor(), 0, size);
        let x1 = round_clamp(area.x1.ceil(), 0, size);
        let y1 = round_clamp(area.y1.ceil(), 0, size);
        let src = color.to_array();

        for py in y0..y1 {
            let cy = py as f64 + 0.5;
            for px in x0..x1 {
                let cx = px as f64 + 0.5;
                if !covers(area, cx, cy) || hole.is_some_and(|h| covers(h, cx, cy)) {
                    continue;
                }
                let p = self.image.get_pixel_mut(px as u32, py as u32);
                p.0 = blend_over(p.0, src);
            }
        }
    }

    /// Rounded destination rectangle `(x, y, w, h)` clamped to the canvas, if non-empty.
    fn pixel_bounds(&self, r: Rect) -> Option<(u32, u32, u32, u32)> {
        let size = i64::from(self.size());
        let x0 = round_clamp(r.x0, 0, size);
        let y0 = round_clamp(r.y0, 0, size);
        let x1 = round_clamp(r.x1, 0, size);
        let y1 = round_clamp(r.y1, 0, size);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some((x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32))
    }
}

fn covers(r: Rect, x: f64, y: f64) -> bool {
    r.x0 <= x && x < r.x1 && r.y0 <= y && y < r.y1
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
