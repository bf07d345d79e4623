//! Receipt image geometry for spreadsheet cells.
//!
//! Pure pixel math, no decoding. Given a receipt's natural dimensions,
//! a quality tier and a cell, compute how large to display the image
//! and where to anchor it so it sits centered with a small margin.

// Pixel geometry, not money.
#![allow(clippy::float_arithmetic)]

use super::types::ImageQuality;

/// Display size never drops below this, even for tiny receipts.
const MIN_WIDTH: f64 = 80.0;
const MIN_HEIGHT: f64 = 60.0;

/// Margin kept clear inside the cell.
const CELL_PADDING: f64 = 8.0;

/// Minimum offset from the cell corner.
const MIN_OFFSET: f64 = 4.0;

/// Aspect ratios above this count as wide (landscape photos).
const WIDE_ASPECT: f64 = 1.5;
/// Aspect ratios below this count as tall (portrait photos).
const TALL_ASPECT: f64 = 0.75;

/// The cell an image is placed into.
#[derive(Debug, Clone, Copy)]
pub struct CellBox {
    /// Cell width in pixels
    pub width: f64,
    /// Minimum cell height in pixels; the row grows beyond this for
    /// large images
    pub min_height: f64,
}

/// Attachment column geometry: 30 character widths, roughly 210px.
pub const ATTACHMENT_CELL: CellBox = CellBox {
    width: 210.0,
    min_height: 90.0,
};

/// Where and how large an image lands in its cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Display width in pixels
    pub width: f64,
    /// Display height in pixels
    pub height: f64,
    /// Shrink factor applied to fit the cell, at most 1.0
    pub scale: f64,
    /// Horizontal offset from the cell's left edge
    pub x_offset: u32,
    /// Vertical offset from the cell's top edge
    pub y_offset: u32,
}

/// Size an image for the given quality tier, preserving aspect ratio.
///
/// Wide images pin to the box width, tall images to the box height,
/// near-square images fit inside a square of the box's smaller side.
/// Either way the result is clamped back inside the box and floored at
/// 80x60 so thumbnails stay legible.
#[must_use]
pub fn target_size(natural_width: f64, natural_height: f64, quality: ImageQuality) -> (f64, f64) {
    let (box_width, box_height) = quality.bounding_box();
    let aspect = natural_width / natural_height;

    let (mut width, mut height) = if aspect > WIDE_ASPECT {
        let mut w = box_width;
        let mut h = box_width / aspect;
        if h > box_height {
            h = box_height;
            w = box_height * aspect;
        }
        (w, h)
    } else if aspect < TALL_ASPECT {
        let mut h = box_height;
        let mut w = box_height * aspect;
        if w > box_width {
            w = box_width;
            h = box_width / aspect;
        }
        (w, h)
    } else {
        let side = box_width.min(box_height);
        if aspect >= 1.0 {
            (side, side / aspect)
        } else {
            (side * aspect, side)
        }
    };

    width = width.max(MIN_WIDTH);
    height = height.max(MIN_HEIGHT);
    (width, height)
}

/// Fit a sized image into a cell, shrinking only, and center it.
#[must_use]
pub fn fit(image_width: f64, image_height: f64, cell: CellBox) -> Placement {
    let available_width = cell.width - CELL_PADDING;
    let cell_height = cell.min_height.max(image_height + 10.0);
    let available_height = cell_height - CELL_PADDING;

    let scale_x = if image_width > available_width {
        available_width / image_width
    } else {
        1.0
    };
    let scale_y = if image_height > available_height {
        available_height / image_height
    } else {
        1.0
    };
    let scale = scale_x.min(scale_y).min(1.0);

    let width = image_width * scale;
    let height = image_height * scale;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let x_offset = MIN_OFFSET.max((cell.width - width) / 2.0) as u32;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let y_offset = MIN_OFFSET.max((cell_height - height) / 2.0) as u32;

    Placement {
        width,
        height,
        scale,
        x_offset,
        y_offset,
    }
}

/// Convenience: size for the quality tier, then fit into the cell.
#[must_use]
pub fn place(
    natural_width: f64,
    natural_height: f64,
    quality: ImageQuality,
    cell: CellBox,
) -> Placement {
    let (width, height) = target_size(natural_width, natural_height, quality);
    fit(width, height, cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_image_pins_to_box_width() {
        // 4:1 panorama at medium quality (200x150 box)
        let (w, h) = target_size(2000.0, 500.0, ImageQuality::Medium);
        assert!((w - 200.0).abs() < f64::EPSILON);
        assert!((h - 60.0).abs() < f64::EPSILON); // 50 floored to 60
    }

    #[test]
    fn test_tall_image_pins_to_box_height() {
        let (w, h) = target_size(500.0, 2000.0, ImageQuality::Medium);
        assert!((h - 150.0).abs() < f64::EPSILON);
        assert!((w - 80.0).abs() < f64::EPSILON); // 37.5 floored to 80
    }

    #[test]
    fn test_square_image_uses_smaller_side() {
        let (w, h) = target_size(1000.0, 1000.0, ImageQuality::High);
        // High box is 300x200, square fits a 200x200 box
        assert!((w - 200.0).abs() < f64::EPSILON);
        assert!((h - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fit_never_upscales() {
        let placement = fit(100.0, 60.0, ATTACHMENT_CELL);
        assert!((placement.width - 100.0).abs() < f64::EPSILON);
        assert!((placement.height - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fit_shrinks_oversized_image() {
        let placement = fit(400.0, 100.0, ATTACHMENT_CELL);
        assert!(placement.scale < 1.0);
        assert!(placement.width <= ATTACHMENT_CELL.width - CELL_PADDING);
        // Aspect preserved
        let aspect = placement.width / placement.height;
        assert!((aspect - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_offsets_have_floor() {
        let placement = fit(205.0, 85.0, ATTACHMENT_CELL);
        assert!(placement.x_offset >= 4);
        assert!(placement.y_offset >= 4);
    }
}
