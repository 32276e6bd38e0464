//! # PDF Reading Order
//!
//! Reading order for positioned page content, using the XY-Cut++ algorithm.
//!
//! Given the objects of a page (text lines, images, tables, figures), each
//! reduced to a page number and an axis-aligned bounding box, determine the
//! order a human reads them in.
//!
//! ## Core Features
//!
//! - **XY-Cut++**: recursive projection cuts with cross-layout masking, so
//!   titles and full-width headers spanning several columns land where they
//!   are read instead of blocking the column cut
//! - **Pluggable Strategies**: XY-Cut++, simple top-to-bottom, or the
//!   caller's order, behind one [`ReadingOrderStrategy`] trait
//! - **Generic Objects**: anything implementing [`Positioned`] can be
//!   ordered; objects are moved, never cloned or modified
//! - **Documents**: per-page grouping with optional page-parallel ordering
//! - **Provenance**: every ordered object records which step placed it
//!
//! ## Quick Start
//!
//! ```
//! use pdf_reading_order::{BoundingBox, ContentKind, ContentObject, XYCutPlusPlus};
//!
//! let title = ContentObject::new(1, ContentKind::Heading, BoundingBox::new(1, 10.0, 85.0, 190.0, 95.0));
//! let left = ContentObject::new(2, ContentKind::TextLine, BoundingBox::new(1, 10.0, 65.0, 50.0, 75.0));
//! let left_2 = ContentObject::new(3, ContentKind::TextLine, BoundingBox::new(1, 10.0, 45.0, 50.0, 55.0));
//! let right = ContentObject::new(4, ContentKind::TextLine, BoundingBox::new(1, 100.0, 65.0, 140.0, 75.0));
//! let right_2 = ContentObject::new(5, ContentKind::TextLine, BoundingBox::new(1, 100.0, 45.0, 140.0, 55.0));
//!
//! let sorter = XYCutPlusPlus::new().with_beta(0.7);
//! let ordered = sorter.sort(vec![right_2, left, title, left_2, right]);
//!
//! let ids: Vec<u64> = ordered.iter().map(|o| o.id).collect();
//! assert_eq!(ids, vec![1, 2, 3, 4, 5]);
//! ```
//!
//! ## Coordinates
//!
//! PDF user space: the origin is the bottom-left corner and Y grows upward,
//! so the top of the page has the largest Y.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Geometry and page content
pub mod geometry;
pub mod object;

// Reading order
pub mod pipeline;

pub use error::{Error, Result};
pub use geometry::{Bounded, BoundingBox, Point};
pub use object::{ContentKind, ContentObject, Positioned};
pub use pipeline::{
    OrderedObject, PageOrder, ReadingOrderConfig, ReadingOrderContext, ReadingOrderPipeline,
    ReadingOrderSource, ReadingOrderStrategy, ReadingOrderStrategyType, SortReport, XYCutConfig,
    XYCutPlusPlus,
};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
