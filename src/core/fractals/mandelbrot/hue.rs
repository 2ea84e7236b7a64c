//! HSV to RGB conversion on the unit cube.

/// Converts `(h, s, v)` to RGB, all channels in `[0, 1]`. Hue wraps, so any
/// real `h` is accepted.
#[must_use]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
    let channel = |offset: f64| {
        let p = (fract(h + offset) * 6.0 - 3.0).abs();
        let pure = (p - 1.0).clamp(0.0, 1.0);
        v * (1.0 + (pure - 1.0) * s)
    };

    [channel(1.0), channel(2.0 / 3.0), channel(1.0 / 3.0)]
}

/// Fully saturated, full-value colour for a hue in turns.
#[must_use]
pub fn hue_to_rgb(h: f64) -> [f64; 3] {
    hsv_to_rgb(h, 1.0, 1.0)
}

#[must_use]
pub fn lerp_rgb(from: [f64; 3], to: [f64; 3], t: f64) -> [f64; 3] {
    [
        from[0] + (to[0] - from[0]) * t,
        from[1] + (to[1] - from[1]) * t,
        from[2] + (to[2] - from[2]) * t,
    ]
}

pub(crate) fn fract(x: f64) -> f64 {
    x - x.floor()
}
