//! Reading order strategies for page content.
//!
//! This module provides pluggable strategies for determining the reading
//! order of positioned objects on a page.
//!
//! # Available Strategies
//!
//! - [`XYCutPlusPlus`]: Cross-layout aware recursive XY-Cut (multi-column pages with spanning titles)
//! - [`SimpleStrategy`]: Simple top-to-bottom, left-to-right ordering
//! - [`PreserveOrderStrategy`]: Keep the caller's order

mod preserve;
mod simple;
pub mod xycut;

pub use preserve::PreserveOrderStrategy;
pub use simple::{reading_order_cmp, sort_by_reading_order, SimpleStrategy};
pub use xycut::{SortReport, XYCutPlusPlus};

use crate::error::Result;
use crate::geometry::{Bounded, BoundingBox};
use crate::object::Positioned;
use crate::pipeline::config::{ReadingOrderConfig, ReadingOrderStrategyType};
use crate::pipeline::ordered_object::{OrderedObject, ReadingOrderSource};

/// Trait for determining reading order of page objects.
///
/// Implementations decide how to order objects for reading. Objects without
/// a valid bounding box are dropped by every strategy.
pub trait ReadingOrderStrategy<T>: Send + Sync {
    /// Apply reading order to the objects of one page.
    ///
    /// # Arguments
    ///
    /// * `objects` - Unordered objects extracted from the page
    /// * `context` - Page information
    ///
    /// # Returns
    ///
    /// Objects with assigned reading order indices, in reading order.
    fn apply(&self, objects: Vec<T>, context: &ReadingOrderContext)
        -> Result<Vec<OrderedObject<T>>>;

    /// Return the name of this strategy for debugging.
    fn name(&self) -> &'static str;
}

/// Context information for reading order determination.
#[derive(Debug, Clone, Default)]
pub struct ReadingOrderContext {
    /// Page being ordered, if known.
    pub page_number: Option<u32>,
}

impl ReadingOrderContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number.
    pub fn with_page(mut self, page_number: u32) -> Self {
        self.page_number = Some(page_number);
        self
    }

    /// Warn about objects whose box claims a different page.
    pub(crate) fn check_pages<T>(&self, placed: &[Placed<T>]) {
        let Some(page) = self.page_number else {
            return;
        };
        let foreign = placed.iter().filter(|p| p.bbox.page_number != page).count();
        if foreign > 0 {
            log::warn!(
                "{} of {} objects ordered as page {} carry another page number",
                foreign,
                placed.len(),
                page
            );
        }
    }
}

/// An object paired with its (validated) bounding box.
///
/// Strategies work on these so the box is read once and the object itself
/// is only ever moved.
#[derive(Debug, Clone)]
pub(crate) struct Placed<T> {
    pub(crate) bbox: BoundingBox,
    pub(crate) item: T,
    pub(crate) source: ReadingOrderSource,
}

impl<T> Placed<T> {
    pub(crate) fn new(bbox: BoundingBox, item: T) -> Self {
        Self {
            bbox,
            item,
            source: ReadingOrderSource::default(),
        }
    }

    pub(crate) fn with_source(mut self, source: ReadingOrderSource) -> Self {
        self.source = source;
        self
    }
}

impl<T> Bounded for Placed<T> {
    fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }
}

/// Pair each object with its box, dropping objects without a valid one.
///
/// Returns the placed objects (input order kept) and the number dropped.
pub(crate) fn place_valid<T: Positioned>(objects: Vec<T>) -> (Vec<Placed<T>>, usize) {
    let total = objects.len();
    let mut invalid = 0usize;
    let placed: Vec<Placed<T>> = objects
        .into_iter()
        .filter_map(|object| {
            let bbox = *object.bounding_box()?;
            if bbox.is_valid() {
                Some(Placed::new(bbox, object))
            } else {
                invalid += 1;
                None
            }
        })
        .collect();

    let dropped = total - placed.len();
    if invalid > 0 {
        log::warn!(
            "Dropped {} objects with non-finite or inverted bounding boxes",
            invalid
        );
    }
    if dropped > invalid {
        log::debug!("Dropped {} objects without a bounding box", dropped - invalid);
    }
    (placed, dropped)
}

/// Create a reading order strategy based on configuration.
pub fn create_strategy<T: Positioned + 'static>(
    config: &ReadingOrderConfig,
) -> Box<dyn ReadingOrderStrategy<T>> {
    match config.strategy {
        ReadingOrderStrategyType::XYCutPlusPlus => {
            Box::new(XYCutPlusPlus::with_config(config.xycut.clone()))
        },
        ReadingOrderStrategyType::Simple => Box::new(SimpleStrategy),
        ReadingOrderStrategyType::Off => Box::new(PreserveOrderStrategy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{ContentKind, ContentObject};

    #[test]
    fn test_place_valid_drops_missing_and_invalid_boxes() {
        let objects = vec![
            ContentObject::new(1, ContentKind::TextLine, BoundingBox::new(0, 0.0, 0.0, 10.0, 10.0)),
            ContentObject::unplaced(2, ContentKind::Image),
            ContentObject::new(3, ContentKind::TextLine, BoundingBox::new(0, f64::NAN, 0.0, 10.0, 10.0)),
            ContentObject::new(4, ContentKind::TextLine, BoundingBox::new(0, 20.0, 0.0, 10.0, 10.0)),
            ContentObject::new(5, ContentKind::Table, BoundingBox::new(0, 5.0, 5.0, 5.0, 5.0)),
        ];

        let (placed, dropped) = place_valid(objects);
        let ids: Vec<u64> = placed.iter().map(|p| p.item.id).collect();
        assert_eq!(ids, vec![1, 5]);
        assert_eq!(dropped, 3);
    }

    #[test]
    fn test_create_strategy_names() {
        let config = ReadingOrderConfig::default();
        assert_eq!(create_strategy::<ContentObject>(&config).name(), "XYCutPlusPlus");

        let config = config.with_strategy(ReadingOrderStrategyType::Simple);
        assert_eq!(create_strategy::<ContentObject>(&config).name(), "SimpleStrategy");

        let config = config.with_strategy(ReadingOrderStrategyType::Off);
        assert_eq!(create_strategy::<ContentObject>(&config).name(), "PreserveOrderStrategy");
    }

    #[test]
    fn test_context_builder() {
        let context = ReadingOrderContext::new().with_page(4);
        assert_eq!(context.page_number, Some(4));
        assert_eq!(ReadingOrderContext::default().page_number, None);
    }
}
