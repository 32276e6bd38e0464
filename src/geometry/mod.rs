//! Geometric primitives for reading order analysis.
//!
//! Coordinates follow PDF user space: X grows to the right and Y grows
//! toward the top of the page, so "above" means a larger `top_y`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 2D point in page space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_reading_order::geometry::Point;
    ///
    /// let point = Point::new(10.0, 20.0);
    /// assert_eq!(point.x, 10.0);
    /// assert_eq!(point.y, 20.0);
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding box on a single page.
///
/// Invariant for a valid box: `left_x <= right_x` and `bottom_y <= top_y`,
/// all coordinates finite. See [`BoundingBox::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Page the box belongs to
    pub page_number: u32,
    /// Left edge
    pub left_x: f64,
    /// Bottom edge (smaller Y)
    pub bottom_y: f64,
    /// Right edge
    pub right_x: f64,
    /// Top edge (larger Y)
    pub top_y: f64,
}

impl BoundingBox {
    /// Create a box from its extents, in PDF `(left, bottom, right, top)` order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_reading_order::geometry::BoundingBox;
    ///
    /// let bbox = BoundingBox::new(1, 10.0, 60.0, 100.0, 70.0);
    /// assert_eq!(bbox.width(), 90.0);
    /// assert_eq!(bbox.height(), 10.0);
    /// ```
    pub fn new(page_number: u32, left_x: f64, bottom_y: f64, right_x: f64, top_y: f64) -> Self {
        Self {
            page_number,
            left_x,
            bottom_y,
            right_x,
            top_y,
        }
    }

    /// Create a box, rejecting non-finite or inverted extents.
    pub fn try_new(
        page_number: u32,
        left_x: f64,
        bottom_y: f64,
        right_x: f64,
        top_y: f64,
    ) -> Result<Self> {
        let bbox = Self::new(page_number, left_x, bottom_y, right_x, top_y);
        bbox.validate()?;
        Ok(bbox)
    }

    /// Check the box invariant, describing the first violation found.
    pub fn validate(&self) -> Result<()> {
        let coords = [self.left_x, self.bottom_y, self.right_x, self.top_y];
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(Error::InvalidBoundingBox(format!(
                "non-finite coordinate in {:?}",
                coords
            )));
        }
        if self.left_x > self.right_x {
            return Err(Error::InvalidBoundingBox(format!(
                "left_x {} > right_x {}",
                self.left_x, self.right_x
            )));
        }
        if self.bottom_y > self.top_y {
            return Err(Error::InvalidBoundingBox(format!(
                "bottom_y {} > top_y {}",
                self.bottom_y, self.top_y
            )));
        }
        Ok(())
    }

    /// Whether the box satisfies its invariant.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.right_x - self.left_x
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.top_y - self.bottom_y
    }

    /// Area of the box, `0.0` for degenerate boxes.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_reading_order::geometry::BoundingBox;
    ///
    /// assert_eq!(BoundingBox::new(0, 10.0, 60.0, 60.0, 70.0).area(), 500.0);
    /// assert_eq!(BoundingBox::new(0, 10.0, 60.0, 10.0, 70.0).area(), 0.0);
    /// ```
    pub fn area(&self) -> f64 {
        let (width, height) = (self.width(), self.height());
        if width <= 0.0 || height <= 0.0 {
            0.0
        } else {
            width * height
        }
    }

    /// Horizontal center.
    pub fn center_x(&self) -> f64 {
        (self.left_x + self.right_x) / 2.0
    }

    /// Vertical center.
    pub fn center_y(&self) -> f64 {
        (self.bottom_y + self.top_y) / 2.0
    }

    /// Center point of the box.
    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    /// Compute the union of this box with another.
    ///
    /// The result keeps `other`'s page number.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            page_number: other.page_number,
            left_x: self.left_x.min(other.left_x),
            bottom_y: self.bottom_y.min(other.bottom_y),
            right_x: self.right_x.max(other.right_x),
            top_y: self.top_y.max(other.top_y),
        }
    }
}

/// Anything the layout algorithms can read a bounding box from.
///
/// Implemented for [`BoundingBox`] itself so every analysis function can be
/// driven directly with plain boxes.
pub trait Bounded {
    /// The item's bounding box.
    fn bbox(&self) -> &BoundingBox;
}

impl Bounded for BoundingBox {
    fn bbox(&self) -> &BoundingBox {
        self
    }
}

impl<B: Bounded + ?Sized> Bounded for &B {
    fn bbox(&self) -> &BoundingBox {
        (**self).bbox()
    }
}

/// Horizontal overlap of two boxes relative to the narrower one.
///
/// Returns `0.0` when the boxes do not overlap or the narrower box has no
/// width.
///
/// # Examples
///
/// ```
/// use pdf_reading_order::geometry::{horizontal_overlap_ratio, BoundingBox};
///
/// let wide = BoundingBox::new(0, 0.0, 0.0, 100.0, 10.0);
/// let narrow = BoundingBox::new(0, 40.0, 20.0, 60.0, 30.0);
/// assert_eq!(horizontal_overlap_ratio(&wide, &narrow), 1.0);
/// ```
pub fn horizontal_overlap_ratio(a: &BoundingBox, b: &BoundingBox) -> f64 {
    let overlap = (a.right_x.min(b.right_x) - a.left_x.max(b.left_x)).max(0.0);
    if overlap <= 0.0 {
        return 0.0;
    }

    let smaller_width = a.width().min(b.width());
    if smaller_width > 0.0 {
        overlap / smaller_width
    } else {
        0.0
    }
}

/// Smallest box enclosing every item, or `None` for an empty slice.
pub fn bounding_region<B: Bounded>(items: &[B]) -> Option<BoundingBox> {
    let mut iter = items.iter().map(Bounded::bbox);
    let first = *iter.next()?;
    Some(iter.fold(first, |region, bbox| region.union(bbox)))
}
