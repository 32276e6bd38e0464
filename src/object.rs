//! Positioned page content.
//!
//! The ordering engine never looks inside page content; it only needs a
//! bounding box per item. [`Positioned`] is that seam. [`ContentObject`] is a
//! ready-made implementation for callers (and the CLI) that only carry an
//! identifier and a content kind.

use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;

/// Page content that can be placed on the page.
///
/// Items returning `None` (or a box failing [`BoundingBox::is_valid`]) are
/// dropped by the ordering strategies before any geometry is computed.
pub trait Positioned {
    /// The item's bounding box, if it has one.
    fn bounding_box(&self) -> Option<&BoundingBox>;
}

impl Positioned for BoundingBox {
    fn bounding_box(&self) -> Option<&BoundingBox> {
        Some(self)
    }
}

impl<T: Positioned + ?Sized> Positioned for &T {
    fn bounding_box(&self) -> Option<&BoundingBox> {
        (**self).bounding_box()
    }
}

impl<T: Positioned + ?Sized> Positioned for Box<T> {
    fn bounding_box(&self) -> Option<&BoundingBox> {
        (**self).bounding_box()
    }
}

/// What a content object is.
///
/// Carried through for callers; ordering never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// A single line of text
    #[default]
    TextLine,
    /// A block of text lines
    Paragraph,
    /// A heading or title
    Heading,
    /// A raster or vector image
    Image,
    /// A table
    Table,
    /// A figure (chart, diagram)
    Figure,
    /// A figure or table caption
    Caption,
    /// Running page header
    Header,
    /// Running page footer
    Footer,
    /// Anything else
    Other,
}

/// A content object identified by a caller-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentObject {
    /// Caller-assigned identifier
    pub id: u64,
    /// Content kind
    #[serde(default)]
    pub kind: ContentKind,
    /// Position on the page, if known
    #[serde(default)]
    pub bbox: Option<BoundingBox>,
}

impl ContentObject {
    /// Create a positioned content object.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_reading_order::geometry::BoundingBox;
    /// use pdf_reading_order::object::{ContentKind, ContentObject, Positioned};
    ///
    /// let obj = ContentObject::new(7, ContentKind::Heading, BoundingBox::new(1, 10.0, 85.0, 190.0, 95.0));
    /// assert_eq!(obj.bounding_box().map(|b| b.width()), Some(180.0));
    /// ```
    pub fn new(id: u64, kind: ContentKind, bbox: BoundingBox) -> Self {
        Self {
            id,
            kind,
            bbox: Some(bbox),
        }
    }

    /// Create an object with no known position.
    pub fn unplaced(id: u64, kind: ContentKind) -> Self {
        Self {
            id,
            kind,
            bbox: None,
        }
    }

    /// Page number of the object, if it is placed.
    pub fn page_number(&self) -> Option<u32> {
        self.bbox.map(|b| b.page_number)
    }
}

impl Positioned for ContentObject {
    fn bounding_box(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}
