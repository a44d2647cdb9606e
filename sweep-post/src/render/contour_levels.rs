/// step multipliers tried, per power of ten, when choosing level boundaries
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// level boundaries for a filled contour plot of values in [min, max]: at most
/// `n_levels` bands of equal "nice" width (1, 2, 2.5 or 5 times a power of ten)
/// whose outer boundaries enclose the data. always returns at least two
/// boundaries.
pub fn nice_levels(min: f64, max: f64, n_levels: usize) -> Vec<f64> {
    let n_levels = n_levels.max(1);
    let (min, max) = if max > min {
        (min, max)
    } else {
        let pad = if min == 0.0 { 0.5 } else { min.abs() * 0.1 };
        (min - pad, max + pad)
    };
    let raw_step = (max - min) / n_levels as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let mut chosen = (min, max, max - min);
    for multiplier in NICE_STEPS {
        let step = multiplier * magnitude;
        let lo = (min / step).floor() * step;
        let hi = (max / step).ceil() * step;
        if ((hi - lo) / step).round() as usize <= n_levels {
            chosen = (lo, hi, step);
            break;
        }
    }
    let (lo, hi, step) = chosen;
    let n_bands = (((hi - lo) / step).round() as usize).max(1);
    (0..=n_bands).map(|i| lo + i as f64 * step).collect()
}

/// index of the band [levels[i], levels[i+1]] containing `value`, clamped to the outer bands
pub fn band_index(value: f64, levels: &[f64]) -> usize {
    let n_bands = levels.len().saturating_sub(1).max(1);
    levels
        .partition_point(|l| *l <= value)
        .saturating_sub(1)
        .min(n_bands - 1)
}
