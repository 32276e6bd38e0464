//! Reading order pipeline with clean abstraction layers.
//!
//! ```text
//! Positioned objects (any T: Positioned)
//!     ↓
//! [group by page] (objects without a box are dropped)
//!     ↓
//! [ReadingOrderStrategy] (pluggable ordering, one page at a time)
//!     ↓
//! OrderedObject<T>[] per page
//! ```
//!
//! # Key Design Principles
//!
//! 1. **Geometry only**: ordering reads bounding boxes and nothing else; the
//!    payload is moved through untouched.
//!
//! 2. **Pluggable Strategies**: reading order is trait-based, selected by
//!    [`ReadingOrderStrategyType`].
//!
//! 3. **Pages are independent**: no state is shared between pages, so a
//!    document can be ordered page-parallel.

pub mod config;
pub mod ordered_object;
pub mod reading_order;

// Re-export main types
pub use config::{ReadingOrderConfig, ReadingOrderStrategyType, XYCutConfig};
pub use ordered_object::{OrderedObject, OrderedObjects, ReadingOrderInfo, ReadingOrderSource};
pub use reading_order::{
    create_strategy, PreserveOrderStrategy, ReadingOrderContext, ReadingOrderStrategy,
    SimpleStrategy, SortReport, XYCutPlusPlus,
};

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::error::Result;
use crate::object::Positioned;

/// The ordered objects of one page.
#[derive(Debug, Clone)]
pub struct PageOrder<T> {
    /// Page the objects belong to.
    pub page_number: u32,
    /// Objects in reading order.
    pub objects: Vec<OrderedObject<T>>,
}

impl<T> PageOrder<T> {
    /// Number of ordered objects on the page.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the page has no ordered objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Drop the ordering metadata, keeping the reading order.
    pub fn into_objects(self) -> Vec<T> {
        OrderedObjects::new(self.objects).into_objects()
    }
}

/// The reading order pipeline - orchestrates page and document ordering.
///
/// This is the main entry point for callers that want strategy selection
/// and per-page grouping rather than the bare [`XYCutPlusPlus`] sort.
pub struct ReadingOrderPipeline<T> {
    config: ReadingOrderConfig,
    strategy: Box<dyn ReadingOrderStrategy<T>>,
}

impl<T: Positioned + 'static> ReadingOrderPipeline<T> {
    /// Create a new pipeline with default configuration.
    pub fn new() -> Self {
        let config = ReadingOrderConfig::default();
        let strategy = create_strategy(&config);
        Self { config, strategy }
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: ReadingOrderConfig) -> Result<Self> {
        config.validate()?;
        let strategy = create_strategy(&config);
        Ok(Self { config, strategy })
    }

    /// Order the objects of a single page.
    pub fn process_page(
        &self,
        objects: Vec<T>,
        context: ReadingOrderContext,
    ) -> Result<Vec<OrderedObject<T>>> {
        self.strategy.apply(objects, &context)
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ReadingOrderConfig {
        &self.config
    }

    /// Name of the active strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

impl<T: Positioned + Send + 'static> ReadingOrderPipeline<T> {
    /// Order every page of a document.
    ///
    /// Objects are grouped by the page number of their bounding box and the
    /// pages returned in ascending order. Objects without a bounding box
    /// belong to no page and are dropped.
    pub fn process_document(&self, objects: Vec<T>) -> Result<Vec<PageOrder<T>>> {
        let total = objects.len();
        let mut pages: BTreeMap<u32, Vec<T>> = BTreeMap::new();
        for object in objects {
            let Some(page_number) = object.bounding_box().map(|b| b.page_number) else {
                continue;
            };
            pages.entry(page_number).or_default().push(object);
        }

        let grouped: usize = pages.values().map(Vec::len).sum();
        if grouped < total {
            log::debug!(
                "Dropped {} objects without a bounding box before page grouping",
                total - grouped
            );
        }
        log::debug!(
            "Ordering {} objects on {} pages with {}",
            grouped,
            pages.len(),
            self.strategy.name()
        );

        let pages: Vec<(u32, Vec<T>)> = pages.into_iter().collect();
        if self.config.parallel_pages {
            pages
                .into_par_iter()
                .map(|(page_number, objects)| self.order_page(page_number, objects))
                .collect()
        } else {
            pages
                .into_iter()
                .map(|(page_number, objects)| self.order_page(page_number, objects))
                .collect()
        }
    }

    fn order_page(&self, page_number: u32, objects: Vec<T>) -> Result<PageOrder<T>> {
        let context = ReadingOrderContext::new().with_page(page_number);
        let objects = self.strategy.apply(objects, &context)?;
        log::trace!("Page {}: {} objects ordered", page_number, objects.len());
        Ok(PageOrder {
            page_number,
            objects,
        })
    }
}

impl<T: Positioned + 'static> Default for ReadingOrderPipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
