//! Projection gap finding.
//!
//! Objects are projected onto one axis and swept in order; the widest band
//! of the axis that no object covers is the best cut along that axis. Only
//! 1-D extents are needed.

use crate::geometry::{Bounded, BoundingBox};

/// Direction of a cut line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// A horizontal line, separating content above from content below.
    Horizontal,
    /// A vertical line, separating left content from right content.
    Vertical,
}

impl Axis {
    /// Axis name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

/// The widest gap found along one axis of a group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutCandidate {
    /// Direction of the cut line.
    pub axis: Axis,
    /// Coordinate of the cut line (x for vertical, y for horizontal).
    pub position: f64,
    /// Width of the empty band; `0.0` when there is none.
    pub gap: f64,
}

impl CutCandidate {
    /// A candidate with no gap.
    pub fn none(axis: Axis) -> Self {
        Self {
            axis,
            position: 0.0,
            gap: 0.0,
        }
    }

    /// Whether the candidate separates anything.
    pub fn is_cut(&self) -> bool {
        self.gap > 0.0
    }
}

/// Find the widest empty band along `axis`.
///
/// Groups with fewer than two objects have no cut. On equal gaps the first
/// one in sweep order wins.
pub fn find_best_cut<B: Bounded>(items: &[B], axis: Axis) -> CutCandidate {
    if items.len() < 2 {
        return CutCandidate::none(axis);
    }

    let mut boxes: Vec<&BoundingBox> = items.iter().map(Bounded::bbox).collect();
    match axis {
        Axis::Vertical => best_vertical_cut(&mut boxes),
        Axis::Horizontal => best_horizontal_cut(&mut boxes),
    }
}

/// Sweep left to right tracking the furthest right edge seen so far.
fn best_vertical_cut(boxes: &mut [&BoundingBox]) -> CutCandidate {
    boxes.sort_by(|a, b| {
        a.left_x
            .total_cmp(&b.left_x)
            .then_with(|| a.right_x.total_cmp(&b.right_x))
    });

    let mut best = CutCandidate::none(Axis::Vertical);
    let mut prev_right = boxes[0].right_x;

    for bbox in &boxes[1..] {
        if bbox.left_x > prev_right {
            let gap = bbox.left_x - prev_right;
            if gap > best.gap {
                best.gap = gap;
                best.position = (prev_right + bbox.left_x) / 2.0;
            }
        }
        prev_right = prev_right.max(bbox.right_x);
    }

    best
}

/// Sweep top to bottom tracking the lowest bottom edge seen so far.
fn best_horizontal_cut(boxes: &mut [&BoundingBox]) -> CutCandidate {
    boxes.sort_by(|a, b| {
        b.top_y
            .total_cmp(&a.top_y)
            .then_with(|| b.bottom_y.total_cmp(&a.bottom_y))
    });

    let mut best = CutCandidate::none(Axis::Horizontal);
    let mut prev_bottom = boxes[0].bottom_y;

    for bbox in &boxes[1..] {
        if bbox.top_y < prev_bottom {
            let gap = prev_bottom - bbox.top_y;
            if gap > best.gap {
                best.gap = gap;
                best.position = (prev_bottom + bbox.top_y) / 2.0;
            }
        }
        prev_bottom = prev_bottom.min(bbox.bottom_y);
    }

    best
}
