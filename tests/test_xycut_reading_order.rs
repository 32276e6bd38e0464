//! Integration tests for XY-Cut++ reading order.
//!
//! Layouts are given in PDF coordinates `(left, bottom, right, top)` with Y
//! growing upward. The real-world pages use bounding boxes measured on
//! published papers.

use std::time::{Duration, Instant};

use pdf_reading_order::pipeline::reading_order::xycut::cross_layout::identify_cross_layout;
use pdf_reading_order::{
    BoundingBox, ContentKind, ContentObject, ReadingOrderSource, XYCutPlusPlus,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn line(id: u64, left: f64, bottom: f64, right: f64, top: f64) -> ContentObject {
    ContentObject::new(
        id,
        ContentKind::TextLine,
        BoundingBox::new(0, left, bottom, right, top),
    )
}

fn ids(objects: &[ContentObject]) -> Vec<u64> {
    objects.iter().map(|o| o.id).collect()
}

fn position(order: &[u64], id: u64) -> usize {
    order
        .iter()
        .position(|&o| o == id)
        .unwrap_or_else(|| panic!("object {} missing from {:?}", id, order))
}

fn sort_within(limit: Duration, objects: Vec<ContentObject>) -> Vec<ContentObject> {
    let start = Instant::now();
    let sorted = XYCutPlusPlus::new().sort(objects);
    assert!(start.elapsed() < limit, "sort took {:?}", start.elapsed());
    sorted
}

// ============================================================================
// Basic Layouts
// ============================================================================

#[test]
fn test_single_column_top_to_bottom() {
    let sorted = XYCutPlusPlus::new().sort(vec![
        line(3, 10.0, 60.0, 100.0, 70.0),
        line(1, 10.0, 80.0, 100.0, 90.0),
        line(2, 10.0, 70.0, 100.0, 80.0),
    ]);
    assert_eq!(ids(&sorted), vec![1, 2, 3]);
}

#[test]
fn test_two_columns_left_column_first() {
    let sorted = XYCutPlusPlus::new().sort(vec![
        line(1, 10.0, 80.0, 40.0, 90.0),
        line(3, 80.0, 80.0, 110.0, 90.0),
        line(2, 10.0, 60.0, 40.0, 70.0),
        line(4, 80.0, 60.0, 110.0, 70.0),
    ]);
    assert_eq!(ids(&sorted), vec![1, 2, 3, 4]);
}

#[test]
fn test_wide_header_detected_with_low_beta() {
    let objects = vec![
        line(1, 10.0, 85.0, 190.0, 95.0),
        line(2, 10.0, 65.0, 50.0, 75.0),
        line(3, 10.0, 45.0, 50.0, 55.0),
        line(4, 100.0, 65.0, 140.0, 75.0),
        line(5, 100.0, 45.0, 140.0, 55.0),
    ];
    let boxes: Vec<BoundingBox> = objects.iter().filter_map(|o| o.bbox).collect();
    assert_eq!(identify_cross_layout(&boxes, 0.7), vec![0]);

    let (ordered, report) = XYCutPlusPlus::new().with_beta(0.7).sort_with_report(objects);
    let order: Vec<u64> = ordered.iter().map(|o| o.object.id).collect();
    assert_eq!(order, vec![1, 2, 3, 4, 5]);
    assert_eq!(ordered[0].source(), ReadingOrderSource::CrossLayout);
    assert_eq!(report.cross_layout_count, 1);
}

#[test]
fn test_header_first_with_default_beta() {
    // no cross-layout at beta 2.0: the header is split off by a row cut
    let (ordered, report) = XYCutPlusPlus::new().sort_with_report(vec![
        line(1, 10.0, 85.0, 190.0, 95.0),
        line(2, 10.0, 65.0, 50.0, 75.0),
        line(3, 10.0, 45.0, 50.0, 55.0),
        line(4, 100.0, 65.0, 140.0, 75.0),
        line(5, 100.0, 45.0, 140.0, 55.0),
    ]);
    let order: Vec<u64> = ordered.iter().map(|o| o.object.id).collect();
    assert_eq!(order, vec![1, 2, 3, 4, 5]);
    assert_eq!(report.cross_layout_count, 0);
}

#[test]
fn test_header_and_footer_around_columns() {
    let sorted = XYCutPlusPlus::new().sort(vec![
        line(4, 10.0, 5.0, 190.0, 15.0),
        line(3, 100.0, 65.0, 140.0, 75.0),
        line(1, 10.0, 85.0, 190.0, 95.0),
        line(2, 10.0, 65.0, 50.0, 75.0),
    ]);
    assert_eq!(ids(&sorted), vec![1, 2, 3, 4]);
}

#[test]
fn test_header_and_footer_as_cross_layout() {
    let (ordered, report) = XYCutPlusPlus::new().with_beta(0.7).sort_with_report(vec![
        line(10, 10.0, 5.0, 190.0, 15.0),
        line(1, 10.0, 85.0, 190.0, 95.0),
        line(2, 10.0, 65.0, 50.0, 75.0),
        line(3, 10.0, 45.0, 50.0, 55.0),
        line(4, 100.0, 65.0, 140.0, 75.0),
        line(5, 100.0, 45.0, 140.0, 55.0),
    ]);
    let order: Vec<u64> = ordered.iter().map(|o| o.object.id).collect();
    assert_eq!(order, vec![1, 2, 3, 4, 5, 10]);
    assert_eq!(report.cross_layout_count, 2);
    assert_eq!(ordered[5].source(), ReadingOrderSource::CrossLayout);
}

#[test]
fn test_larger_row_gap_reads_row_by_row() {
    let sorted = XYCutPlusPlus::new().sort(vec![
        line(1, 10.0, 80.0, 30.0, 90.0),
        line(2, 40.0, 80.0, 60.0, 90.0),
        line(3, 10.0, 30.0, 30.0, 40.0),
        line(4, 40.0, 30.0, 60.0, 40.0),
    ]);
    assert_eq!(ids(&sorted), vec![1, 2, 3, 4]);
}

#[test]
fn test_columns_with_overlapping_rows() {
    // column gap 10 equals row gap 10: the column cut wins the tie
    let sorted = XYCutPlusPlus::new().sort(vec![
        line(1, 50.0, 500.0, 300.0, 600.0),
        line(2, 50.0, 400.0, 300.0, 490.0),
        line(3, 50.0, 300.0, 300.0, 390.0),
        line(4, 310.0, 500.0, 560.0, 600.0),
        line(5, 310.0, 400.0, 560.0, 490.0),
        line(6, 310.0, 300.0, 560.0, 390.0),
    ]);
    assert_eq!(ids(&sorted), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_high_beta_keeps_every_object() {
    let sorted = XYCutPlusPlus::new()
        .with_beta(10.0)
        .with_density_threshold(0.9)
        .sort(vec![
            line(1, 10.0, 85.0, 190.0, 95.0),
            line(2, 10.0, 65.0, 50.0, 75.0),
            line(3, 100.0, 65.0, 140.0, 75.0),
        ]);
    assert_eq!(sorted.len(), 3);
}

#[test]
fn test_empty_single_and_absent_input() {
    let sorter = XYCutPlusPlus::new();
    assert!(sorter.sort(Vec::<ContentObject>::new()).is_empty());
    assert!(sorter.sort_optional::<ContentObject>(None).is_empty());
    assert_eq!(ids(&sorter.sort(vec![line(1, 10.0, 80.0, 20.0, 90.0)])), vec![1]);
}

#[test]
fn test_unplaced_objects_are_dropped() {
    let sorted = XYCutPlusPlus::new().sort(vec![
        line(2, 10.0, 60.0, 100.0, 70.0),
        ContentObject::unplaced(7, ContentKind::Figure),
        line(1, 10.0, 80.0, 100.0, 90.0),
    ]);
    assert_eq!(ids(&sorted), vec![1, 2]);
}

#[test]
fn test_identical_boxes_all_kept() {
    let sorted = XYCutPlusPlus::new()
        .with_beta(0.5)
        .sort((1..=4).map(|id| line(id, 0.0, 0.0, 50.0, 10.0)).collect());
    assert_eq!(ids(&sorted), vec![1, 2, 3, 4]);
}

#[test]
fn test_zero_size_boxes() {
    let sorted = XYCutPlusPlus::new().sort(vec![
        line(2, 15.0, 15.0, 15.0, 15.0),
        line(1, 5.0, 25.0, 5.0, 25.0),
        line(3, 5.0, 5.0, 5.0, 5.0),
    ]);
    let mut order = ids(&sorted);
    order.sort_unstable();
    assert_eq!(order, vec![1, 2, 3]);
}

// ============================================================================
// Real-World Pages
// ============================================================================

/// Academic paper, first page: title and authors across the page, abstract
/// and introduction in the left column, four paragraphs in the right column,
/// and a narrow arXiv stamp in the left margin (its position is not checked).
#[test]
fn test_academic_paper_two_column() {
    let objects = vec![
        line(95, 119.725, 679.722, 492.279, 697.936),  // title
        line(96, 129.831, 609.655, 482.17, 653.915),   // authors
        line(97, 53.397, 322.175, 298.579, 598.418),   // abstract
        line(98, 54.0, 295.283, 134.124, 310.895),     // "1. Introduction"
        line(99, 53.75, 116.696, 298.663, 285.545),    // intro paragraph
        line(100, 53.64, 71.733, 298.66, 117.383),     // continuation
        line(101, 314.64, 474.932, 559.748, 598.982),  // right column
        line(102, 315.0, 323.607, 559.662, 470.417),
        line(103, 315.0, 223.058, 559.657, 324.708),
        line(104, 314.64, 71.733, 559.657, 218.543),
        line(105, 14.04, 237.0, 36.36, 579.2),         // arXiv stamp
    ];

    let order = ids(&XYCutPlusPlus::new().sort(objects));
    assert_eq!(order.len(), 11);

    let pos = |id| position(&order, id);
    assert!(pos(95) < pos(96), "title before authors: {:?}", order);
    assert!(pos(96) < pos(97), "authors before abstract: {:?}", order);
    for left in [97, 98, 99, 100] {
        assert!(pos(left) < pos(101), "left column before right: {:?}", order);
    }
    assert!(pos(97) < pos(98) && pos(98) < pos(99) && pos(99) < pos(100));
    assert!(pos(101) < pos(102) && pos(102) < pos(103) && pos(103) < pos(104));
}

/// Paper with a 3x3 image grid in the right column: the images must be read
/// as one block between the keywords and the figure caption.
#[test]
fn test_image_grid_read_as_block() {
    let objects = vec![
        line(667, 14.04, 232.0, 36.36, 577.52), // arXiv stamp
        line(646, 130.151, 652.242, 465.077, 688.839), // title
        line(647, 82.271, 567.65, 516.716, 630.323), // authors
        line(648, 145.995, 528.628, 190.48, 544.182), // "Abstract"
        line(649, 50.112, 173.942, 286.362, 512.148), // abstract
        line(650, 50.112, 129.636, 286.359, 156.766), // keywords
        line(653, 315.944, 496.162, 386.808, 538.682),
        line(654, 315.945, 452.648, 386.807, 495.167),
        line(655, 315.945, 409.132, 386.808, 451.652),
        line(657, 392.918, 496.162, 463.783, 538.682),
        line(658, 392.918, 452.646, 463.783, 495.166),
        line(659, 392.918, 409.13, 463.783, 451.65),
        line(660, 469.89, 496.163, 540.76, 538.683),
        line(661, 469.889, 452.647, 540.76, 495.167),
        line(662, 469.89, 409.131, 540.759, 451.652),
        line(656, 308.862, 360.946, 545.115, 410.306), // caption
        line(663, 308.862, 328.315, 385.698, 343.869), // "1. Introduction"
        line(664, 308.862, 200.233, 545.109, 321.771),
        line(665, 308.862, 105.211, 545.109, 199.651),
        line(666, 308.862, 77.935, 545.109, 104.629),
    ];

    let order = ids(&XYCutPlusPlus::new().sort(objects));
    assert_eq!(order.len(), 20);

    let pos = |id| position(&order, id);
    let images: Vec<usize> = [653, 654, 655, 657, 658, 659, 660, 661, 662]
        .into_iter()
        .map(pos)
        .collect();
    let first_image = images.iter().copied().min().unwrap_or_default();
    let last_image = images.iter().copied().max().unwrap_or_default();

    assert!(pos(646) < pos(647));
    assert!(pos(647) < pos(648));
    assert!(pos(648) < pos(649));
    assert!(pos(649) < pos(650));
    assert_eq!(last_image - first_image, 8, "images not consecutive: {:?}", order);
    assert!(pos(650) < first_image);
    assert!(last_image < pos(656));
    assert!(pos(656) < pos(663));
    assert!(pos(663) < pos(664));
    assert!(pos(664) < pos(665));
    assert!(pos(665) < pos(666));
}

// ============================================================================
// Termination
// ============================================================================

#[test]
fn test_forty_line_two_column_layout() {
    let mut objects = Vec::new();
    for i in 0..20u64 {
        let top = 700.0 - i as f64 * 30.0;
        objects.push(line(i, 50.0, top - 10.0, 250.0, top));
        objects.push(line(100 + i, 260.0, top - 10.0, 450.0, top));
    }

    // row gap 20 beats column gap 10, so the page is read row by row
    let sorted = sort_within(Duration::from_secs(5), objects);
    let order = ids(&sorted);
    assert_eq!(order.len(), 40);
    let expected: Vec<u64> = (0..20).flat_map(|i| [i, 100 + i]).collect();
    assert_eq!(order, expected);
}

#[test]
fn test_wide_and_narrow_objects() {
    let sorted = sort_within(
        Duration::from_secs(2),
        vec![line(1, 0.0, 90.0, 100.0, 100.0), line(2, 101.0, 90.0, 102.0, 100.0)],
    );
    assert_eq!(ids(&sorted), vec![1, 2]);
}

#[test]
fn test_many_small_gaps() {
    let objects: Vec<ContentObject> = (0..10u64)
        .rev()
        .map(|i| {
            let x = i as f64 * 12.0;
            line(i, x, 90.0, x + 10.0, 100.0)
        })
        .collect();
    let sorted = sort_within(Duration::from_secs(2), objects);
    assert_eq!(ids(&sorted), (0..10).collect::<Vec<u64>>());
}

#[test]
fn test_tall_and_short_objects() {
    let sorted = sort_within(
        Duration::from_secs(2),
        vec![
            line(1, 50.0, 100.0, 150.0, 200.0),
            line(2, 50.0, 80.0, 150.0, 90.0),
            line(3, 200.0, 100.0, 300.0, 200.0),
        ],
    );
    assert_eq!(ids(&sorted), vec![1, 2, 3]);
}

#[test]
fn test_grid_with_header_and_footer() {
    let mut objects = Vec::new();
    for row in 0..5u64 {
        for col in 0..3u64 {
            let x = 50.0 + col as f64 * 180.0;
            let y = 700.0 - row as f64 * 100.0;
            let width = 50.0 + col as f64 * 30.0;
            objects.push(line(row * 3 + col, x, y - 20.0, x + width, y));
        }
    }
    objects.push(line(100, 50.0, 730.0, 500.0, 750.0));
    objects.push(line(200, 50.0, 30.0, 500.0, 50.0));

    let sorted = sort_within(Duration::from_secs(5), objects);
    let order = ids(&sorted);
    assert_eq!(order.len(), 17);
    assert_eq!(order.first(), Some(&100));
    assert_eq!(order.last(), Some(&200));
}
