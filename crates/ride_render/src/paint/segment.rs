//! Tile occlusion segments
//!
//! Each tile is carved into nine segments for support/occlusion bookkeeping:
//! the centre, the four corners and the four sides. The outer eight are
//! bit-ordered clockwise so that rotating the view by one step is a
//! rotate-left-by-two of the low byte; the centre never moves.

use bitflags::bitflags;

bitflags! {
    /// Bitmask over the nine occlusion segments of a tile.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Segments: u16 {
        /// Corner nearest the top of the screen.
        const TOP_CORNER = 1 << 0;
        /// Side between the top and right corners.
        const TOP_RIGHT_SIDE = 1 << 1;
        /// Corner nearest the right of the screen.
        const RIGHT_CORNER = 1 << 2;
        /// Side between the right and bottom corners.
        const BOTTOM_RIGHT_SIDE = 1 << 3;
        /// Corner nearest the bottom of the screen.
        const BOTTOM_CORNER = 1 << 4;
        /// Side between the bottom and left corners.
        const BOTTOM_LEFT_SIDE = 1 << 5;
        /// Corner nearest the left of the screen.
        const LEFT_CORNER = 1 << 6;
        /// Side between the left and top corners.
        const TOP_LEFT_SIDE = 1 << 7;
        /// Centre of the tile.
        const CENTRE = 1 << 8;
    }
}

impl Segments {
    /// All nine segments.
    pub const ALL: Self = Self::all();

    /// Rotate the mask by the given viewing rotation (0..=3).
    ///
    /// The outer ring shifts by two positions per rotation step; the centre
    /// segment is invariant.
    #[must_use]
    pub const fn rotated(self, rotation: u8) -> Self {
        let ring = (self.bits() & 0xFF) as u8;
        let ring = ring.rotate_left(((rotation & 3) as u32) * 2);
        Self::from_bits_retain((self.bits() & 0x100) | ring as u16)
    }
}

/// Segment masks blocked by common straight pieces.
pub mod blocked_segments {
    use super::Segments;

    /// Straight flat-ish track at rotation 0: the centre plus the two sides
    /// the trough crosses.
    pub const STRAIGHT_FLAT: Segments = Segments::CENTRE
        .union(Segments::TOP_RIGHT_SIDE)
        .union(Segments::BOTTOM_LEFT_SIDE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_rotation_invariant() {
        for rotation in 0..4 {
            assert_eq!(Segments::CENTRE.rotated(rotation), Segments::CENTRE);
        }
    }

    #[test]
    fn full_mask_is_rotation_invariant() {
        for rotation in 0..4 {
            assert_eq!(Segments::ALL.rotated(rotation), Segments::ALL);
        }
    }

    #[test]
    fn quarter_turn_moves_corners_one_place() {
        assert_eq!(Segments::TOP_CORNER.rotated(1), Segments::RIGHT_CORNER);
        assert_eq!(Segments::RIGHT_CORNER.rotated(1), Segments::BOTTOM_CORNER);
        assert_eq!(Segments::TOP_LEFT_SIDE.rotated(1), Segments::TOP_RIGHT_SIDE);
        assert_eq!(Segments::TOP_CORNER.rotated(4), Segments::TOP_CORNER);
    }

    #[test]
    fn straight_flat_swaps_sides_on_odd_rotations() {
        let rotated = blocked_segments::STRAIGHT_FLAT.rotated(1);
        assert_eq!(
            rotated,
            Segments::CENTRE | Segments::BOTTOM_RIGHT_SIDE | Segments::TOP_LEFT_SIDE
        );
        assert_eq!(
            blocked_segments::STRAIGHT_FLAT.rotated(2),
            blocked_segments::STRAIGHT_FLAT
        );
    }
}
