//! Reading order disabled: the caller's order is kept.

use crate::error::Result;
use crate::object::Positioned;
use crate::pipeline::ordered_object::{number_in_order, OrderedObject, ReadingOrderSource};

use super::{place_valid, ReadingOrderContext, ReadingOrderStrategy};

/// Keeps objects in the order they were extracted.
///
/// Objects without a valid bounding box are still dropped so every strategy
/// yields the same set of objects.
pub struct PreserveOrderStrategy;

impl<T: Positioned> ReadingOrderStrategy<T> for PreserveOrderStrategy {
    fn apply(
        &self,
        objects: Vec<T>,
        context: &ReadingOrderContext,
    ) -> Result<Vec<OrderedObject<T>>> {
        let (placed, _) = place_valid(objects);
        context.check_pages(&placed);

        Ok(number_in_order(
            placed
                .into_iter()
                .map(|p| (p.item, ReadingOrderSource::Preserved)),
        ))
    }

    fn name(&self) -> &'static str {
        "PreserveOrderStrategy"
    }
}
