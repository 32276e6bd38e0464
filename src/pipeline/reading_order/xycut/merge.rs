//! Merging cross-layout objects back into the segmented order.

use crate::geometry::Bounded;
use crate::pipeline::reading_order::simple::sort_by_reading_order;

/// Interleave `cross_layout` objects into `main_order` by vertical position.
///
/// `main_order` is already in reading order and is never reordered. The
/// cross-layout objects are sorted top-to-bottom, left-to-right, then a
/// two-pointer walk emits whichever comes first by top edge; on equal top
/// edges the cross-layout object goes first (headers precede body content
/// at the same level).
pub fn merge_cross_layout<B: Bounded>(main_order: Vec<B>, mut cross_layout: Vec<B>) -> Vec<B> {
    if cross_layout.is_empty() {
        return main_order;
    }
    sort_by_reading_order(&mut cross_layout);

    let mut merged = Vec::with_capacity(main_order.len() + cross_layout.len());
    let mut main = main_order.into_iter().peekable();
    let mut cross = cross_layout.into_iter().peekable();

    loop {
        let take_cross = match (main.peek(), cross.peek()) {
            (Some(m), Some(c)) => c.bbox().top_y >= m.bbox().top_y,
            (None, Some(_)) => true,
            (Some(_), None) => false,
            (None, None) => break,
        };
        let next = if take_cross { cross.next() } else { main.next() };
        merged.extend(next);
    }

    merged
}
