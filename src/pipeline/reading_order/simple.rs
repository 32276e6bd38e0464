//! Simple top-to-bottom, left-to-right reading order strategy.

use std::cmp::Ordering;

use crate::error::Result;
use crate::geometry::{Bounded, BoundingBox};
use crate::object::Positioned;
use crate::pipeline::ordered_object::{number_in_order, OrderedObject, ReadingOrderSource};

use super::{place_valid, ReadingOrderContext, ReadingOrderStrategy};

/// Reading order comparator: higher `top_y` first, then smaller `left_x`.
///
/// Uses a total order on floats so sorting never panics.
pub fn reading_order_cmp(a: &BoundingBox, b: &BoundingBox) -> Ordering {
    b.top_y
        .total_cmp(&a.top_y)
        .then_with(|| a.left_x.total_cmp(&b.left_x))
}

/// Stable in-place sort by [`reading_order_cmp`].
pub fn sort_by_reading_order<B: Bounded>(items: &mut [B]) {
    items.sort_by(|a, b| reading_order_cmp(a.bbox(), b.bbox()));
}

/// Simple top-to-bottom, left-to-right reading order.
///
/// This strategy sorts objects by top edge (descending, so top comes first)
/// then by left edge (ascending, so left comes first).
///
/// This is the simplest strategy and works well for single-column pages.
pub struct SimpleStrategy;

impl<T: Positioned> ReadingOrderStrategy<T> for SimpleStrategy {
    fn apply(
        &self,
        objects: Vec<T>,
        context: &ReadingOrderContext,
    ) -> Result<Vec<OrderedObject<T>>> {
        let (mut placed, _) = place_valid(objects);
        context.check_pages(&placed);
        sort_by_reading_order(&mut placed);

        Ok(number_in_order(
            placed
                .into_iter()
                .map(|p| (p.item, ReadingOrderSource::Simple)),
        ))
    }

    fn name(&self) -> &'static str {
        "SimpleStrategy"
    }
}
