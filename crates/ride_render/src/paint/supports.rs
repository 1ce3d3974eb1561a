//! Metal support placement recording
//!
//! Track painters request a support pole with a literal placement and
//! height-offset; the actual beam layout (crossbeams, bases, joins against
//! neighbouring tiles) is the support renderer's job elsewhere in the
//! engine. This module records the requests and applies the alternating-tile
//! rule straight flat pieces use.

use crate::foundation::coords::CoordsXY;

use super::{ImageId, PaintSession};

/// Visual style of metal support pole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetalSupportType {
    /// Round tube poles (bobsleigh, steel twister).
    Tubes,
    /// Square-section poles.
    Boxed,
    /// Lattice struts.
    Truss,
}

/// Where on the tile a support pole stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetalSupportPlace {
    /// Middle of the tile.
    Centre,
    /// Top corner of the tile.
    TopCorner,
    /// Top-right tile edge.
    TopRightSide,
    /// Right corner of the tile.
    RightCorner,
    /// Bottom-right tile edge.
    BottomRightSide,
    /// Bottom corner of the tile.
    BottomCorner,
    /// Bottom-left tile edge.
    BottomLeftSide,
    /// Left corner of the tile.
    LeftCorner,
    /// Top-left tile edge.
    TopLeftSide,
}

/// One recorded support pole request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportPlacement {
    /// Pole style.
    pub kind: MetalSupportType,
    /// Position on the tile.
    pub place: MetalSupportPlace,
    /// Style-specific tweak the beam renderer applies (crossbeam variant or
    /// vertical nudge), passed through verbatim from the track data.
    pub special: i32,
    /// Track height the pole must reach.
    pub height: i32,
    /// Remap colours for the pole sprites.
    pub colours: ImageId,
}

/// Request a type-A metal support at `place`.
pub fn metal_a_supports_paint_setup(
    session: &mut PaintSession,
    kind: MetalSupportType,
    place: MetalSupportPlace,
    special: i32,
    height: i32,
    colours: ImageId,
) {
    session.record_support(SupportPlacement {
        kind,
        place,
        special,
        height,
        colours,
    });
}

/// Request the pair of poles flanking a station platform.
pub fn draw_supports_side_by_side(
    session: &mut PaintSession,
    direction: u8,
    height: i32,
    colours: ImageId,
    kind: MetalSupportType,
) {
    let (a, b) = if direction & 1 == 0 {
        (MetalSupportPlace::TopLeftSide, MetalSupportPlace::BottomRightSide)
    } else {
        (MetalSupportPlace::TopRightSide, MetalSupportPlace::BottomLeftSide)
    };
    metal_a_supports_paint_setup(session, kind, a, 0, height, colours);
    metal_a_supports_paint_setup(session, kind, b, 0, height, colours);
}

/// Supports under straight flat pieces go on alternating tiles only.
///
/// A tile qualifies when bit 5 of its x and y positions agree, which yields
/// a checkerboard with two-tile pitch.
#[must_use]
pub fn should_paint_supports(position: CoordsXY) -> bool {
    (position.x & (1 << 5)) == (position.y & (1 << 5))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternating_tile_rule() {
        assert!(should_paint_supports(CoordsXY::new(0, 0)));
        assert!(should_paint_supports(CoordsXY::new(32, 32)));
        assert!(!should_paint_supports(CoordsXY::new(32, 0)));
        assert!(!should_paint_supports(CoordsXY::new(0, 32)));
        assert!(should_paint_supports(CoordsXY::new(64, 0)));
    }

    #[test]
    fn side_by_side_pair_straddles_the_platform() {
        let mut session = PaintSession::new(CoordsXY::new(0, 0));
        draw_supports_side_by_side(&mut session, 1, 16, ImageId::default(), MetalSupportType::Tubes);

        let placements = session.support_placements();
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].place, MetalSupportPlace::TopRightSide);
        assert_eq!(placements[1].place, MetalSupportPlace::BottomLeftSide);
    }
}
