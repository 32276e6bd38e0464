//! Content density of a group of objects.

use crate::geometry::{bounding_region, Bounded};

/// Sum of the objects' areas.
pub fn total_area<B: Bounded>(items: &[B]) -> f64 {
    items.iter().map(|item| item.bbox().area()).sum()
}

/// Fraction of the group's bounding region covered by its objects, in `[0, 1]`.
///
/// Returns `1.0` for an empty group or a region without area.
pub fn density_ratio<B: Bounded>(items: &[B]) -> f64 {
    let Some(region) = bounding_region(items) else {
        return 1.0;
    };

    let region_area = region.width() * region.height();
    if region_area <= 0.0 || !region_area.is_finite() {
        return 1.0;
    }

    (total_area(items) / region_area).min(1.0)
}

/// Whether a density ratio favours horizontal-first splitting.
pub fn prefers_horizontal_first(density_ratio: f64, density_threshold: f64) -> bool {
    density_ratio > density_threshold
}
