// File: crates/chart-core/src/grid.rs
// Summary: Grid level and label-thinning helpers.

use crate::scale::ValueScale;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// A horizontal grid level: pixel row and the value it represents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLevel {
    pub y_px: f32,
    pub value: f64,
}

/// `ticks + 1` evenly spaced levels from the top (max) to the bottom (min) of `scale`.
pub fn grid_levels(scale: &ValueScale, ticks: usize) -> Vec<GridLevel> {
    let ticks = ticks.max(1);
    let rows = linspace(scale.top_px as f64, scale.bottom_px as f64, ticks + 1);
    let values = linspace(scale.vmax, scale.vmin, ticks + 1);
    rows.into_iter()
        .zip(values)
        .map(|(y, value)| GridLevel { y_px: y as f32, value })
        .collect()
}

/// Stride that keeps roughly `max_labels` labels visible for `n` entries (never below 1).
pub fn label_stride(n: usize, max_labels: usize) -> usize {
    (n / max_labels.max(1)).max(1)
}

/// Indices of the labels to draw for `n` entries at the given stride.
pub fn thinned_indices(n: usize, stride: usize) -> impl Iterator<Item = usize> {
    (0..n).step_by(stride.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_caps_label_count() {
        assert_eq!(label_stride(3, 6), 1);
        assert_eq!(label_stride(12, 6), 2);
        assert_eq!(label_stride(30, 6), 5);
        assert_eq!(thinned_indices(30, 5).count(), 6);
    }

    #[test]
    fn grid_levels_run_top_to_bottom() {
        let s = ValueScale::new_linear(20.0, 200.0, 0.0, 100.0);
        let levels = grid_levels(&s, 4);
        assert_eq!(levels.len(), 5);
        assert_eq!(levels[0].value, 100.0);
        assert_eq!(levels[0].y_px, 20.0);
        assert_eq!(levels[4].value, 0.0);
        assert_eq!(levels[4].y_px, 200.0);
    }
}
