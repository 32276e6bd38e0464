//! Ordered content objects.
//!
//! This module provides the [`OrderedObject`] type which wraps a content
//! object with its reading order position and where that position came from.

/// Source of reading order assignment.
///
/// Tracks which step of which strategy placed an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReadingOrderSource {
    /// Placed by an XY-Cut++ projection cut.
    ///
    /// Confidence: 0.90 (robust for multi-column layouts).
    #[default]
    XYCut,
    /// Spanning object merged back by vertical position.
    ///
    /// Confidence: 0.85 (titles, full-width headers and footers).
    CrossLayout,
    /// Group with no separating gap, flat-sorted top-to-bottom, left-to-right.
    ///
    /// Confidence: 0.70 (no geometric structure found).
    Fallback,
    /// Order from the simple top-to-bottom, left-to-right strategy.
    ///
    /// Confidence: 0.75 (basic, works for single-column).
    Simple,
    /// Caller's order kept as-is.
    ///
    /// Confidence: 1.0 (explicit assignment).
    Preserved,
}

impl ReadingOrderSource {
    /// Get the default confidence for this source type.
    pub fn default_confidence(&self) -> f32 {
        match self {
            ReadingOrderSource::XYCut => 0.90,
            ReadingOrderSource::CrossLayout => 0.85,
            ReadingOrderSource::Fallback => 0.70,
            ReadingOrderSource::Simple => 0.75,
            ReadingOrderSource::Preserved => 1.0,
        }
    }

    /// Get source name for debugging.
    pub fn name(&self) -> &'static str {
        match self {
            ReadingOrderSource::XYCut => "XYCut",
            ReadingOrderSource::CrossLayout => "CrossLayout",
            ReadingOrderSource::Fallback => "Fallback",
            ReadingOrderSource::Simple => "Simple",
            ReadingOrderSource::Preserved => "Preserved",
        }
    }
}

/// Reading order metadata for an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingOrderInfo {
    /// Which step assigned this reading order.
    pub source: ReadingOrderSource,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
}

impl Default for ReadingOrderInfo {
    fn default() -> Self {
        Self::from_source(ReadingOrderSource::default())
    }
}

impl ReadingOrderInfo {
    /// Create with source and default confidence.
    pub fn from_source(source: ReadingOrderSource) -> Self {
        Self {
            confidence: source.default_confidence(),
            source,
        }
    }

    /// Create with explicit confidence.
    pub fn with_confidence(source: ReadingOrderSource, confidence: f32) -> Self {
        Self {
            source,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

/// A content object with an assigned reading order index.
///
/// `reading_order` is the position in the page's output (0 = read first).
#[derive(Debug, Clone)]
pub struct OrderedObject<T> {
    /// The underlying content object.
    pub object: T,

    /// Index in reading order (0 = first to be read).
    pub reading_order: usize,

    /// Reading order source and confidence information.
    pub order_info: ReadingOrderInfo,
}

impl<T> OrderedObject<T> {
    /// Create with explicit source info.
    pub fn with_info(object: T, reading_order: usize, order_info: ReadingOrderInfo) -> Self {
        Self {
            object,
            reading_order,
            order_info,
        }
    }

    /// Get the reading order source.
    pub fn source(&self) -> ReadingOrderSource {
        self.order_info.source
    }

    /// Get the reading order confidence.
    pub fn confidence(&self) -> f32 {
        self.order_info.confidence
    }

    /// Unwrap the content object.
    pub fn into_object(self) -> T {
        self.object
    }
}

/// Number a sequence already in reading order.
pub(crate) fn number_in_order<T, I>(items: I) -> Vec<OrderedObject<T>>
where
    I: IntoIterator<Item = (T, ReadingOrderSource)>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(order, (object, source))| {
            OrderedObject::with_info(object, order, ReadingOrderInfo::from_source(source))
        })
        .collect()
}

/// A page's worth of ordered objects with helper methods.
#[derive(Debug, Clone)]
pub struct OrderedObjects<T> {
    objects: Vec<OrderedObject<T>>,
}

impl<T> OrderedObjects<T> {
    /// Create a new collection from a vector of ordered objects.
    pub fn new(objects: Vec<OrderedObject<T>>) -> Self {
        Self { objects }
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Get objects sorted by reading order.
    pub fn in_reading_order(&self) -> Vec<&OrderedObject<T>> {
        let mut sorted: Vec<_> = self.objects.iter().collect();
        sorted.sort_by_key(|o| o.reading_order);
        sorted
    }

    /// Count the objects placed by a given source.
    pub fn count_by_source(&self, source: ReadingOrderSource) -> usize {
        self.objects.iter().filter(|o| o.source() == source).count()
    }

    /// Get the underlying ordered objects.
    pub fn objects(&self) -> &[OrderedObject<T>] {
        &self.objects
    }

    /// Drop the ordering metadata, keeping the reading order.
    pub fn into_objects(self) -> Vec<T> {
        let mut objects = self.objects;
        objects.sort_by_key(|o| o.reading_order);
        objects.into_iter().map(OrderedObject::into_object).collect()
    }
}

impl<T> From<Vec<OrderedObject<T>>> for OrderedObjects<T> {
    fn from(objects: Vec<OrderedObject<T>>) -> Self {
        Self::new(objects)
    }
}

impl<T> IntoIterator for OrderedObjects<T> {
    type Item = OrderedObject<T>;
    type IntoIter = std::vec::IntoIter<OrderedObject<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.into_iter()
    }
}
