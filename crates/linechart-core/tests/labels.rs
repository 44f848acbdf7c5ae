// File: crates/linechart-core/tests/labels.rs
// Purpose: Label formatting and derivation from the data range.

use linechart_core::axis::{format_time, format_value, value_range, x_labels, y_labels};
use linechart_core::types::Sample;
use linechart_core::view::ViewTransform;

#[test]
fn time_labels_are_hh_mm_ss() {
    // 1970-01-01 00:16:40 UTC
    assert_eq!(format_time(1_000_000), "00:16:40");
    assert_eq!(format_time(0), "00:00:00");
}

#[test]
fn value_labels_have_two_decimals() {
    assert_eq!(format_value(26.0), "26.00");
    assert_eq!(format_value(3.14159), "3.14");
}

#[test]
fn value_range_widens_degenerate_data() {
    assert_eq!(value_range(&[]), None);

    let flat = [Sample::new(0, 5.0), Sample::new(1, 5.0)];
    let (min, max) = value_range(&flat).unwrap();
    assert_eq!(min, 5.0);
    assert_eq!(max, 6.0);

    let mixed = [Sample::new(0, 26.0), Sample::new(1, 88.0), Sample::new(2, 30.0)];
    assert_eq!(value_range(&mixed), Some((26.0, 88.0)));
}

#[test]
fn x_labels_follow_canonical_projection() {
    let samples = [
        Sample::new(0, 26.0),
        Sample::new(1_000, 30.0),
        Sample::new(2_000, 35.0),
    ];
    let labels = x_labels(&samples, &ViewTransform::default());
    assert_eq!(labels.len(), 3);
    assert_eq!(labels[0].0, 50.0);
    assert_eq!(labels[1].0, 100.0);
    assert_eq!(labels[2].0, 150.0);
    assert_eq!(labels[1].1, "00:00:01");
}

#[test]
fn y_labels_span_data_range() {
    let view = ViewTransform::default();
    let labels = y_labels(0.0, 100.0, &view);
    assert_eq!(labels.first().unwrap().1, "0.00");
    assert_eq!(labels.last().unwrap().1, "100.00");
    // Higher values sit higher on screen (smaller y).
    assert!(labels.last().unwrap().0 < labels.first().unwrap().0);
}
