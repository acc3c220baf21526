// File: crates/heatmap-core/src/grid.rs
// Summary: Evenly spaced stops and quantiles used by the legend.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// p-quantile of an ascending-sorted sample with linear interpolation (R-7).
/// Returns `None` for an empty sample.
pub fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 { return None; }
    let p = p.clamp(0.0, 1.0);
    if n == 1 || p == 0.0 { return Some(sorted[0]); }
    if p == 1.0 { return Some(sorted[n - 1]); }
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let v0 = sorted[lo];
    let v1 = sorted[lo + 1];
    Some(v0 + (v1 - v0) * (h - lo as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        let v = linspace(1.0, 2.0, 5);
        assert_eq!(v, vec![1.0, 1.25, 1.5, 1.75, 2.0]);
    }

    #[test]
    fn quantile_of_pair_is_lerp() {
        let pair = [2.0, 12.0];
        assert_eq!(quantile(&pair, 0.0), Some(2.0));
        assert_eq!(quantile(&pair, 0.25), Some(4.5));
        assert_eq!(quantile(&pair, 1.0), Some(12.0));
        assert_eq!(quantile(&[], 0.5), None);
        assert_eq!(quantile(&[1.0, 2.0, 4.0], 0.75), Some(3.0));
    }
}
