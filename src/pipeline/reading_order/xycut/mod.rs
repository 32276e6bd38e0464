//! XY-Cut++ reading order.
//!
//! An enhanced recursive XY-Cut for multi-column pages:
//!
//! 1. Objects spanning several columns (titles, full-width headers and
//!    footers) are masked out, see [`cross_layout`].
//! 2. The remaining objects are split recursively at the widest whitespace
//!    gap along either axis, see [`projection`]; groups without a gap fall
//!    back to a top-to-bottom, left-to-right sort.
//! 3. The masked objects are merged back by vertical position, see [`merge`].
//!
//! Coordinates follow PDF conventions: Y grows upward, so "above" means a
//! larger Y.

pub mod cross_layout;
pub mod density;
pub mod merge;
pub mod projection;
mod segmenter;

pub use segmenter::choose_cut;

use log::debug;

use crate::error::Result;
use crate::object::Positioned;
use crate::pipeline::config::XYCutConfig;
use crate::pipeline::ordered_object::{number_in_order, OrderedObject, ReadingOrderSource};

use super::simple::sort_by_reading_order;
use super::{place_valid, Placed, ReadingOrderContext, ReadingOrderStrategy};
use cross_layout::partition_cross_layout;
use density::{density_ratio, prefers_horizontal_first};
use merge::merge_cross_layout;
use segmenter::{segment, SegmentStats};

/// Default cross-layout width multiplier.
pub const DEFAULT_BETA: f64 = 2.0;

/// Default density ratio above which horizontal-first splitting is preferred.
pub const DEFAULT_DENSITY_THRESHOLD: f64 = 0.9;

/// What happened while ordering one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortReport {
    /// Objects handed to the sort.
    pub input_count: usize,
    /// Objects dropped for a missing or invalid bounding box.
    pub dropped_count: usize,
    /// Objects masked out as cross-layout and merged back.
    pub cross_layout_count: usize,
    /// Content density of the segmented objects.
    pub density_ratio: f64,
    /// Whether the density favours horizontal-first splitting.
    pub prefer_horizontal_first: bool,
    /// Column cuts applied.
    pub vertical_cuts: usize,
    /// Row cuts applied.
    pub horizontal_cuts: usize,
    /// Groups without a gap, flat-sorted.
    pub fallback_groups: usize,
    /// Groups flat-sorted because a cut made no progress or the depth cap hit.
    pub forced_fallbacks: usize,
    /// Deepest segmentation level reached.
    pub max_depth_reached: usize,
}

impl SortReport {
    fn new(input_count: usize, dropped_count: usize) -> Self {
        Self {
            input_count,
            dropped_count,
            cross_layout_count: 0,
            density_ratio: 1.0,
            prefer_horizontal_first: false,
            vertical_cuts: 0,
            horizontal_cuts: 0,
            fallback_groups: 0,
            forced_fallbacks: 0,
            max_depth_reached: 0,
        }
    }

    /// Objects present in the output.
    pub fn output_count(&self) -> usize {
        self.input_count - self.dropped_count
    }

    fn record(&mut self, stats: &SegmentStats) {
        self.vertical_cuts = stats.vertical_cuts;
        self.horizontal_cuts = stats.horizontal_cuts;
        self.fallback_groups = stats.fallback_groups;
        self.forced_fallbacks = stats.forced_fallbacks;
        self.max_depth_reached = stats.max_depth_reached;
    }
}

/// XY-Cut++ reading order.
///
/// The sort is a pure function of its input: it never fails, never mutates
/// geometry and returns a permutation of the objects that have a valid
/// bounding box.
///
/// # Example
///
/// ```
/// use pdf_reading_order::geometry::BoundingBox;
/// use pdf_reading_order::pipeline::reading_order::XYCutPlusPlus;
///
/// let left_top = BoundingBox::new(1, 10.0, 80.0, 40.0, 90.0);
/// let right_top = BoundingBox::new(1, 80.0, 80.0, 110.0, 90.0);
/// let left_bottom = BoundingBox::new(1, 10.0, 60.0, 40.0, 70.0);
/// let right_bottom = BoundingBox::new(1, 80.0, 60.0, 110.0, 70.0);
///
/// let ordered = XYCutPlusPlus::new().sort(vec![right_bottom, left_top, right_top, left_bottom]);
/// assert_eq!(ordered, vec![left_top, left_bottom, right_top, right_bottom]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct XYCutPlusPlus {
    config: XYCutConfig,
}

impl XYCutPlusPlus {
    /// Create with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an explicit configuration.
    pub fn with_config(config: XYCutConfig) -> Self {
        Self { config }
    }

    /// Set the cross-layout width multiplier.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.config.beta = beta;
        self
    }

    /// Set the density threshold.
    pub fn with_density_threshold(mut self, threshold: f64) -> Self {
        self.config.density_threshold = threshold;
        self
    }

    /// Cap the segmentation depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = Some(max_depth);
        self
    }

    /// Current parameters.
    pub fn config(&self) -> &XYCutConfig {
        &self.config
    }

    /// Sort objects into reading order.
    ///
    /// Objects without a valid bounding box are left out of the result.
    pub fn sort<T: Positioned>(&self, objects: Vec<T>) -> Vec<T> {
        let (placed, report) = self.prepare(objects);
        let (ordered, _) = self.order(placed, report);
        ordered.into_iter().map(|p| p.item).collect()
    }

    /// Sort an optional sequence; `None` yields an empty result.
    pub fn sort_optional<T: Positioned>(&self, objects: Option<Vec<T>>) -> Vec<T> {
        objects.map(|objects| self.sort(objects)).unwrap_or_default()
    }

    /// Sort and report how each object was placed.
    pub fn sort_with_report<T: Positioned>(
        &self,
        objects: Vec<T>,
    ) -> (Vec<OrderedObject<T>>, SortReport) {
        let (placed, report) = self.prepare(objects);
        let (ordered, report) = self.order(placed, report);
        (
            number_in_order(ordered.into_iter().map(|p| (p.item, p.source))),
            report,
        )
    }

    fn prepare<T: Positioned>(&self, objects: Vec<T>) -> (Vec<Placed<T>>, SortReport) {
        let input_count = objects.len();
        let (placed, dropped) = place_valid(objects);
        (placed, SortReport::new(input_count, dropped))
    }

    fn order<T>(
        &self,
        placed: Vec<Placed<T>>,
        mut report: SortReport,
    ) -> (Vec<Placed<T>>, SortReport) {
        if placed.len() <= 1 {
            return (placed, report);
        }

        let (main, cross) = partition_cross_layout(placed, self.config.beta);
        let cross: Vec<Placed<T>> = cross
            .into_iter()
            .map(|p| p.with_source(ReadingOrderSource::CrossLayout))
            .collect();
        report.cross_layout_count = cross.len();

        if main.is_empty() {
            let mut all = cross;
            sort_by_reading_order(&mut all);
            return (all, report);
        }

        report.density_ratio = density_ratio(&main);
        report.prefer_horizontal_first =
            prefers_horizontal_first(report.density_ratio, self.config.density_threshold);
        debug!(
            "XY-Cut++: {} objects, {} cross-layout, density {:.3} (horizontal first: {})",
            main.len() + cross.len(),
            cross.len(),
            report.density_ratio,
            report.prefer_horizontal_first
        );

        let max_depth = self.config.max_depth.unwrap_or(main.len()).max(1);
        let mut stats = SegmentStats::default();
        let ordered = segment(main, max_depth, &mut stats);
        report.record(&stats);

        (merge_cross_layout(ordered, cross), report)
    }
}

impl<T: Positioned> ReadingOrderStrategy<T> for XYCutPlusPlus {
    fn apply(
        &self,
        objects: Vec<T>,
        context: &ReadingOrderContext,
    ) -> Result<Vec<OrderedObject<T>>> {
        self.config.validate()?;

        let (placed, report) = self.prepare(objects);
        context.check_pages(&placed);
        let (ordered, report) = self.order(placed, report);
        debug!(
            "Ordered {} objects ({} dropped, {} vertical / {} horizontal cuts, {} fallback groups)",
            report.output_count(),
            report.dropped_count,
            report.vertical_cuts,
            report.horizontal_cuts,
            report.fallback_groups + report.forced_fallbacks
        );

        Ok(number_in_order(
            ordered.into_iter().map(|p| (p.item, p.source)),
        ))
    }

    fn name(&self) -> &'static str {
        "XYCutPlusPlus"
    }
}
