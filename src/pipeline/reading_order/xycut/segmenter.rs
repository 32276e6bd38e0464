//! Recursive XY segmentation driven by an explicit work stack.
//!
//! Each pending group is cut along the axis with the wider projection gap,
//! split by object centers, and its two halves pushed back so the first half
//! (left, or above) is finished before the second. Groups without a gap are
//! flat-sorted. The stack replaces host recursion, so deep layouts cannot
//! overflow the call stack.

use crate::pipeline::ordered_object::ReadingOrderSource;
use crate::pipeline::reading_order::simple::sort_by_reading_order;
use crate::pipeline::reading_order::Placed;

use super::projection::{find_best_cut, Axis, CutCandidate};

/// Counters collected while segmenting one page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentStats {
    /// Groups split by a vertical line (columns).
    pub vertical_cuts: usize,
    /// Groups split by a horizontal line (rows).
    pub horizontal_cuts: usize,
    /// Groups with no gap, flat-sorted.
    pub fallback_groups: usize,
    /// Groups flat-sorted because a cut made no progress or the depth cap hit.
    pub forced_fallbacks: usize,
    /// Deepest level reached.
    pub max_depth_reached: usize,
}

/// Pick the cut to apply, if any.
///
/// The wider gap wins; on an exact tie the vertical cut is used.
pub fn choose_cut(vertical: CutCandidate, horizontal: CutCandidate) -> Option<CutCandidate> {
    match (vertical.is_cut(), horizontal.is_cut()) {
        (true, true) if horizontal.gap > vertical.gap => Some(horizontal),
        (true, _) => Some(vertical),
        (false, true) => Some(horizontal),
        (false, false) => None,
    }
}

/// Split a group at `cut` by object centers, in reading order.
///
/// Vertical: `center_x < position` goes left. Horizontal: `center_y > position`
/// goes above. Relative order inside each half is kept.
pub(crate) fn split_at_cut<T>(
    group: Vec<Placed<T>>,
    cut: &CutCandidate,
) -> (Vec<Placed<T>>, Vec<Placed<T>>) {
    match cut.axis {
        Axis::Vertical => group
            .into_iter()
            .partition(|p| p.bbox.center_x() < cut.position),
        Axis::Horizontal => group
            .into_iter()
            .partition(|p| p.bbox.center_y() > cut.position),
    }
}

/// Order a group of objects.
///
/// `max_depth` bounds the number of nested cuts; deeper groups are
/// flat-sorted.
pub(crate) fn segment<T>(
    group: Vec<Placed<T>>,
    max_depth: usize,
    stats: &mut SegmentStats,
) -> Vec<Placed<T>> {
    let mut output = Vec::with_capacity(group.len());
    let mut pending = vec![(group, 0usize)];

    while let Some((mut group, depth)) = pending.pop() {
        stats.max_depth_reached = stats.max_depth_reached.max(depth);

        if group.len() <= 1 {
            output.append(&mut group);
            continue;
        }

        if depth >= max_depth {
            log::warn!(
                "Segmentation depth cap {} reached with {} objects left, using flat order",
                max_depth,
                group.len()
            );
            stats.forced_fallbacks += 1;
            flat_order(group, &mut output);
            continue;
        }

        let vertical = find_best_cut(&group, Axis::Vertical);
        let horizontal = find_best_cut(&group, Axis::Horizontal);
        let Some(cut) = choose_cut(vertical, horizontal) else {
            log::trace!("No gap in group of {}, using flat order", group.len());
            stats.fallback_groups += 1;
            flat_order(group, &mut output);
            continue;
        };

        let group_len = group.len();
        let (first, second) = split_at_cut(group, &cut);
        if first.is_empty() || second.is_empty() {
            log::debug!(
                "{} cut at {:.2} left all {} objects on one side, using flat order",
                cut.axis.name(),
                cut.position,
                group_len
            );
            stats.forced_fallbacks += 1;
            let group = if first.is_empty() { second } else { first };
            flat_order(group, &mut output);
            continue;
        }

        log::trace!(
            "{} cut at {:.2} (gap {:.2}): {} | {}",
            cut.axis.name(),
            cut.position,
            cut.gap,
            first.len(),
            second.len()
        );
        match cut.axis {
            Axis::Vertical => stats.vertical_cuts += 1,
            Axis::Horizontal => stats.horizontal_cuts += 1,
        }

        // LIFO: push the second half first so the first half is emitted first
        pending.push((second, depth + 1));
        pending.push((first, depth + 1));
    }

    output
}

/// Sort a group top-to-bottom, left-to-right and append it as fallback output.
fn flat_order<T>(mut group: Vec<Placed<T>>, output: &mut Vec<Placed<T>>) {
    sort_by_reading_order(&mut group);
    output.extend(
        group
            .into_iter()
            .map(|p| p.with_source(ReadingOrderSource::Fallback)),
    );
}
