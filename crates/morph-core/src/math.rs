use glam::Vec2;

/// Exponential smoothing step: `alpha * raw + (1 - alpha) * prev`.
#[inline]
pub fn smooth(prev: f32, raw: f32, alpha: f32) -> f32 {
    alpha * raw + (1.0 - alpha) * prev
}

/// Vector form of [`smooth`], applied per component.
#[inline]
pub fn smooth_vec2(prev: Vec2, raw: Vec2, alpha: f32) -> Vec2 {
    raw * alpha + prev * (1.0 - alpha)
}

/// Wrap into `[0, 1)`, also for negative input.
#[inline]
pub fn wrap01(x: f32) -> f32 {
    let r = x.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if r >= 1.0 {
        0.0
    } else {
        r
    }
}

fn hue_to_channel(low: f32, high: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        low + (high - low) * 6.0 * t
    } else if t < 0.5 {
        high
    } else if t < 2.0 / 3.0 {
        low + (high - low) * 6.0 * (2.0 / 3.0 - t)
    } else {
        low
    }
}

/// HSL to RGB, all components in `[0, 1]`. Hue wraps, saturation and
/// lightness are clamped.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = wrap01(h);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return [l, l, l];
    }

    let high = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let low = 2.0 * l - high;

    [
        hue_to_channel(low, high, h + 1.0 / 3.0),
        hue_to_channel(low, high, h),
        hue_to_channel(low, high, h - 1.0 / 3.0),
    ]
}
