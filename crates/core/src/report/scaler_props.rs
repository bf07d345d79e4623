//! Property-based tests for image placement geometry.

#![allow(clippy::float_arithmetic)]

use proptest::prelude::*;

use super::scaler::{self, CellBox, ATTACHMENT_CELL};
use super::types::ImageQuality;

/// Strategy for natural image dimensions (1 to 10000 pixels a side).
fn dimension() -> impl Strategy<Value = f64> {
    (1u32..10_000).prop_map(f64::from)
}

fn quality() -> impl Strategy<Value = ImageQuality> {
    prop_oneof![
        Just(ImageQuality::Low),
        Just(ImageQuality::Medium),
        Just(ImageQuality::High),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Placement is a pure function of its inputs.
    #[test]
    fn prop_placement_deterministic(
        width in dimension(),
        height in dimension(),
        quality in quality(),
    ) {
        let a = scaler::place(width, height, quality, ATTACHMENT_CELL);
        let b = scaler::place(width, height, quality, ATTACHMENT_CELL);
        prop_assert_eq!(a, b);
    }

    /// Display size never exceeds the cell's usable area.
    #[test]
    fn prop_display_fits_cell(
        width in dimension(),
        height in dimension(),
        quality in quality(),
    ) {
        let placement = scaler::place(width, height, quality, ATTACHMENT_CELL);
        prop_assert!(placement.width <= ATTACHMENT_CELL.width - 8.0 + 1e-9);
        // Rows grow to fit tall images, so height is bounded by the
        // grown cell, not the minimum.
        let cell_height = ATTACHMENT_CELL.min_height.max(placement.height + 10.0);
        prop_assert!(placement.height <= cell_height - 8.0 + 1e-9);
    }

    /// Target size stays inside the quality tier's box once past the
    /// legibility floor.
    #[test]
    fn prop_target_within_box_or_floor(
        width in dimension(),
        height in dimension(),
        quality in quality(),
    ) {
        let (w, h) = scaler::target_size(width, height, quality);
        let (bw, bh) = quality.bounding_box();
        prop_assert!(w <= bw.max(80.0) + 1e-9, "width {} exceeds box {}", w, bw);
        prop_assert!(h <= bh.max(60.0) + 1e-9, "height {} exceeds box {}", h, bh);
        prop_assert!(w >= 80.0);
        prop_assert!(h >= 60.0);
    }

    /// Offsets always leave the minimum margin.
    #[test]
    fn prop_offsets_floor(
        width in dimension(),
        height in dimension(),
        quality in quality(),
        cell_width in 50u32..1000,
        min_height in 30u32..500,
    ) {
        let cell = CellBox {
            width: f64::from(cell_width),
            min_height: f64::from(min_height),
        };
        let placement = scaler::place(width, height, quality, cell);
        prop_assert!(placement.x_offset >= 4);
        prop_assert!(placement.y_offset >= 4);
    }
}
