pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Source-over for straight-alpha RGBA8 pixels.
pub(crate) fn blend_over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = u16::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255 - sa;
    let da = mul_div255_u16(u16::from(dst[3]), inv);
    let out_a = sa + da;
    if out_a == 0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    for i in 0..3 {
        let num = u32::from(src[i]) * u32::from(sa) + u32::from(dst[i]) * u32::from(da);
        out[i] = ((num + u32::from(out_a) / 2) / u32::from(out_a)).min(255) as u8;
    }
    out[3] = out_a.min(255) as u8;
    out
}

/// Round half away from zero, clamped into `[lo, hi]`.
pub(crate) fn round_clamp(v: f64, lo: i64, hi: i64) -> i64 {
    if !v.is_finite() {
        return lo;
    }
    (v.round() as i64).clamp(lo, hi)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
