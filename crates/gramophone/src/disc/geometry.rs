use super::{NEEDLE_PARTS, SMALL_HUB_RADIUS};
use derive_more::Display;

/// Pixel rectangle in picture coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{width}x{height}+{x}+{y}")]
pub struct CropRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl CropRect {
    /// The centred square of side `2 * picture_radius`. May extend past the
    /// picture when it is smaller than the diameter.
    pub fn centered(picture_width: i32, picture_height: i32, picture_radius: i32) -> Self {
        let side = picture_radius * 2;
        Self {
            x: (picture_width - side) / 2,
            y: (picture_height - side) / 2,
            width: side,
            height: side,
        }
    }

    pub fn fits_within(&self, width: i32, height: i32) -> bool {
        self.width > 0
            && self.height > 0
            && self.x >= 0
            && self.y >= 0
            && self.x + self.width <= width
            && self.y + self.height <= height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Size requirement imposed by the host on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeConstraint {
    Exactly(i32),
    AtMost(i32),
    Unspecified,
}

/// Geometry derived once from the picture radius.
///
/// The disc is a picture of radius `picture_radius` surrounded by a ring half
/// as wide. The tonearm is four segments in an 8:4:2:1 ratio whose lengths add
/// up to the disc radius, and the gap between the top of the ring and the arm
/// pivot equals the long arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub picture_radius: i32,
    pub ring_width: i32,
    pub long_arm: i32,
    pub short_arm: i32,
    pub long_head: i32,
    pub short_head: i32,
    pub big_hub_radius: i32,
    pub small_hub_radius: i32,
}

impl Layout {
    pub fn new(picture_radius: i32) -> Self {
        let ring_width = picture_radius >> 1;
        let short_head = (picture_radius + ring_width) / NEEDLE_PARTS;
        let long_head = short_head << 1;
        let short_arm = long_head << 1;
        let long_arm = short_arm << 1;

        Self {
            picture_radius,
            ring_width,
            long_arm,
            short_arm,
            long_head,
            short_head,
            big_hub_radius: SMALL_HUB_RADIUS << 1,
            small_hub_radius: SMALL_HUB_RADIUS,
        }
    }

    pub fn needle_length(&self) -> i32 {
        self.long_arm + self.short_arm + self.long_head + self.short_head
    }

    /// Square the picture is scaled into, centred on the disc origin.
    pub fn destination(&self) -> CropRect {
        CropRect {
            x: -self.picture_radius,
            y: -self.picture_radius,
            width: self.picture_radius * 2,
            height: self.picture_radius * 2,
        }
    }

    /// Width fits the whole disc; height adds the long arm above it.
    pub fn preferred_size(&self, picture_radius: i32, axis: Axis) -> i32 {
        let diameter = (picture_radius + self.ring_width) * 2;
        match axis {
            Axis::Horizontal => diameter,
            Axis::Vertical => diameter + self.long_arm,
        }
    }

    pub fn measure(&self, picture_radius: i32, axis: Axis, constraint: SizeConstraint) -> i32 {
        match constraint {
            SizeConstraint::Exactly(size) => size,
            SizeConstraint::AtMost(size) => self.preferred_size(picture_radius, axis).min(size),
            SizeConstraint::Unspecified => self.preferred_size(picture_radius, axis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::MAX_PICTURE_RADIUS;

    #[test]
    fn test_default_radius_layout() {
        let layout = Layout::new(400);
        assert_eq!(layout.ring_width, 200);
        assert_eq!(
            (layout.long_arm, layout.short_arm, layout.long_head, layout.short_head),
            (320, 160, 80, 40)
        );
        assert_eq!(layout.needle_length(), 600);
        assert_eq!((layout.big_hub_radius, layout.small_hub_radius), (40, 20));
    }

    #[test]
    fn test_layout_ratios_hold_for_all_radii() {
        for radius in (1..=2000).chain([MAX_PICTURE_RADIUS - 1, MAX_PICTURE_RADIUS]) {
            let layout = Layout::new(radius);
            assert_eq!(layout.ring_width, radius / 2);
            assert_eq!(layout.long_head, layout.short_head * 2);
            assert_eq!(layout.short_arm, layout.short_head * 4);
            assert_eq!(layout.long_arm, layout.short_head * 8);

            let total = radius + layout.ring_width;
            assert_eq!(layout.needle_length(), NEEDLE_PARTS * (total / NEEDLE_PARTS));
            if total % NEEDLE_PARTS == 0 {
                assert_eq!(layout.needle_length(), total);
            }
        }
    }

    #[test]
    fn test_crop_is_centered_square() {
        let crop = CropRect::centered(1000, 900, 400);
        assert_eq!(
            crop,
            CropRect {
                x: 100,
                y: 50,
                width: 800,
                height: 800
            }
        );
        assert!(crop.fits_within(1000, 900));
    }

    #[test]
    fn test_crop_outside_small_picture() {
        let crop = CropRect::centered(500, 500, 400);
        assert!(crop.x < 0);
        assert!(!crop.fits_within(500, 500));
        assert_eq!(crop.to_string(), "800x800+-150+-150");
    }

    #[test]
    fn test_empty_or_inverted_crop_never_fits() {
        let inverted = CropRect::centered(0, 0, -5);
        assert_eq!((inverted.x, inverted.width), (5, -10));
        assert!(!inverted.fits_within(1, 1));
        assert!(!CropRect::centered(10, 10, 0).fits_within(10, 10));
    }

    #[test]
    fn test_largest_radius_layout_does_not_overflow() {
        let layout = Layout::new(MAX_PICTURE_RADIUS);
        assert_eq!(layout.ring_width, MAX_PICTURE_RADIUS / 2);
        assert_eq!(
            layout.measure(MAX_PICTURE_RADIUS, Axis::Vertical, SizeConstraint::Unspecified),
            (MAX_PICTURE_RADIUS + layout.ring_width) * 2 + layout.long_arm
        );
    }

    #[test]
    fn test_destination_square() {
        let dst = Layout::new(30).destination();
        assert_eq!((dst.x, dst.y, dst.width, dst.height), (-30, -30, 60, 60));
    }

    #[test]
    fn test_measure_constraints() {
        let layout = Layout::new(400);
        assert_eq!(layout.measure(400, Axis::Horizontal, SizeConstraint::Unspecified), 1200);
        assert_eq!(layout.measure(400, Axis::Vertical, SizeConstraint::Unspecified), 1520);
        assert_eq!(layout.measure(400, Axis::Vertical, SizeConstraint::AtMost(1000)), 1000);
        assert_eq!(layout.measure(400, Axis::Horizontal, SizeConstraint::AtMost(5000)), 1200);
        assert_eq!(layout.measure(400, Axis::Horizontal, SizeConstraint::Exactly(77)), 77);
    }

    #[test]
    fn test_measure_uses_live_radius_with_frozen_ring() {
        let layout = Layout::new(400);
        // ring width and long arm stay at their radius-400 values
        assert_eq!(layout.measure(100, Axis::Horizontal, SizeConstraint::Unspecified), 600);
        assert_eq!(layout.measure(100, Axis::Vertical, SizeConstraint::Unspecified), 920);
    }
}
