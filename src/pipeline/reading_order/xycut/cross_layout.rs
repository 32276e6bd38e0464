//! Cross-layout detection.
//!
//! A cross-layout object spans several logical columns (page titles,
//! full-width headers and footers). Such objects are masked out before
//! segmentation, since a column cut cannot pass through them, and merged
//! back afterwards.

use crate::geometry::{horizontal_overlap_ratio, Bounded};

/// Minimum horizontal overlap ratio to count as overlapping.
pub const OVERLAP_THRESHOLD: f64 = 0.1;

/// Minimum number of overlapped objects for cross-layout classification.
pub const MIN_OVERLAP_COUNT: usize = 2;

/// Groups smaller than this never contain cross-layout objects.
pub const MIN_GROUP_SIZE: usize = 3;

/// Indices of the cross-layout objects in `items`, ascending.
///
/// An object qualifies when:
/// 1. its width is at least `beta * max_width`, `max_width` being the widest
///    object of the group, and
/// 2. it horizontally overlaps at least [`MIN_OVERLAP_COUNT`] other objects
///    with a ratio of at least [`OVERLAP_THRESHOLD`].
///
/// Width alone is not enough: a wide object with nothing below or above it
/// spans nothing.
pub fn identify_cross_layout<B: Bounded>(items: &[B], beta: f64) -> Vec<usize> {
    if items.len() < MIN_GROUP_SIZE {
        return Vec::new();
    }

    let max_width = items
        .iter()
        .map(|item| item.bbox().width())
        .fold(0.0_f64, f64::max);
    let threshold = beta * max_width;

    (0..items.len())
        .filter(|&index| items[index].bbox().width() >= threshold)
        .filter(|&index| has_minimum_overlaps(items, index, MIN_OVERLAP_COUNT))
        .collect()
}

/// Whether `items[index]` horizontally overlaps at least `min_count` of the
/// other items.
pub fn has_minimum_overlaps<B: Bounded>(items: &[B], index: usize, min_count: usize) -> bool {
    let Some(element) = items.get(index) else {
        return false;
    };
    let element = element.bbox();

    let overlapping = items
        .iter()
        .enumerate()
        .filter(|&(other, _)| other != index)
        .filter(|(_, item)| horizontal_overlap_ratio(element, item.bbox()) >= OVERLAP_THRESHOLD)
        .take(min_count)
        .count();

    overlapping >= min_count
}

/// Split `items` into `(main, cross_layout)`.
///
/// Both halves are new vectors and keep the input's relative order. Objects
/// are identified by position, so identical boxes are never confused.
pub fn partition_cross_layout<B: Bounded>(items: Vec<B>, beta: f64) -> (Vec<B>, Vec<B>) {
    let cross_indices = identify_cross_layout(&items, beta);
    if cross_indices.is_empty() {
        return (items, Vec::new());
    }

    let mut main = Vec::with_capacity(items.len() - cross_indices.len());
    let mut cross = Vec::with_capacity(cross_indices.len());
    let mut next_cross = cross_indices.iter().peekable();

    for (index, item) in items.into_iter().enumerate() {
        if next_cross.next_if(|&&cross_index| cross_index == index).is_some() {
            cross.push(item);
        } else {
            main.push(item);
        }
    }

    (main, cross)
}
