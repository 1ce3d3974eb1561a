//! Shared station and on-ride-photo painting utilities
//!
//! Every coaster painter draws its stations and photo sections through these
//! helpers; only the track sprite on top differs per style.
//!
//! Fence visibility against neighbouring tiles is resolved by the map layer,
//! which is outside this subsystem; the helpers here paint both platform
//! edges unconditionally.

use crate::foundation::coords::{BoundBoxXYZ, CoordsXYZ};
use crate::ride::{Ride, TrackElement};

use super::supports::{draw_supports_side_by_side, MetalSupportType};
use super::{ImageId, PaintSession, Segments, TunnelGroup, TunnelSubType, SEGMENT_HEIGHT_BLOCKED};

/// Generic station platform slab, drawn under the style's track sprite.
pub const SPR_STATION_BASE_B_SW_NE: u32 = 22428;
/// North-west/south-east orientation of [`SPR_STATION_BASE_B_SW_NE`].
pub const SPR_STATION_BASE_B_NW_SE: u32 = 22429;
/// Full-tile platform slab used by photo sections.
pub const SPR_STATION_BASE_D: u32 = 22432;

const SPR_STATION_FENCE_SW_NE: u32 = 22370;
const SPR_STATION_FENCE_NW_SE: u32 = 22371;
const SPR_STATION_NARROW_EDGE_SE: u32 = 22412;
const SPR_STATION_NARROW_EDGE_NE: u32 = 22417;

const SPR_ON_RIDE_PHOTO_CAMERA_N: u32 = 25615;
const SPR_ON_RIDE_PHOTO_CAMERA_E: u32 = 25616;
const SPR_ON_RIDE_PHOTO_CAMERA_S: u32 = 25617;
const SPR_ON_RIDE_PHOTO_CAMERA_W: u32 = 25618;
const SPR_ON_RIDE_PHOTO_CAMERA_FLASH_N: u32 = 25619;
const SPR_ON_RIDE_PHOTO_CAMERA_FLASH_E: u32 = 25620;
const SPR_ON_RIDE_PHOTO_CAMERA_FLASH_S: u32 = 25621;
const SPR_ON_RIDE_PHOTO_CAMERA_FLASH_W: u32 = 25622;
const SPR_ON_RIDE_PHOTO_SIGN_SW_NE: u32 = 25623;
const SPR_ON_RIDE_PHOTO_SIGN_NW_SE: u32 = 25624;
const SPR_ON_RIDE_PHOTO_SIGN_NE_SW: u32 = 25625;
const SPR_ON_RIDE_PHOTO_SIGN_SE_NW: u32 = 25626;

/// Sign, camera, flash triple per direction.
const ONRIDE_PHOTO_IMAGES: [[u32; 3]; 4] = [
    [SPR_ON_RIDE_PHOTO_SIGN_SW_NE, SPR_ON_RIDE_PHOTO_CAMERA_S, SPR_ON_RIDE_PHOTO_CAMERA_FLASH_S],
    [SPR_ON_RIDE_PHOTO_SIGN_NW_SE, SPR_ON_RIDE_PHOTO_CAMERA_W, SPR_ON_RIDE_PHOTO_CAMERA_FLASH_W],
    [SPR_ON_RIDE_PHOTO_SIGN_NE_SW, SPR_ON_RIDE_PHOTO_CAMERA_N, SPR_ON_RIDE_PHOTO_CAMERA_FLASH_N],
    [SPR_ON_RIDE_PHOTO_SIGN_SE_NW, SPR_ON_RIDE_PHOTO_CAMERA_E, SPR_ON_RIDE_PHOTO_CAMERA_FLASH_E],
];

/// Platform-edge heights relative to the station base.
const FENCE_OFFSET_A: i32 = 5;
const FENCE_OFFSET_B: i32 = 7;

/// Colour scheme stations are tinted with.
///
/// Stations use the miscellaneous scheme rather than the track colours so
/// repaints of the ride do not recolour the platform.
#[must_use]
pub fn station_colour_scheme(session: &PaintSession, _element: &TrackElement) -> ImageId {
    session.misc_colours()
}

/// Paint the platform edge details of a station tile.
pub fn draw_station(session: &mut PaintSession, _ride: &Ride, direction: u8, height: i32) {
    let misc = session.misc_colours();

    let fence = misc.with_index(if direction & 1 == 0 {
        SPR_STATION_FENCE_SW_NE
    } else {
        SPR_STATION_FENCE_NW_SE
    });
    session.add_image_as_parent_rotated(
        direction,
        fence,
        CoordsXYZ::new(0, 0, height + FENCE_OFFSET_B),
        BoundBoxXYZ::new(
            CoordsXYZ::new(0, 1, height + FENCE_OFFSET_B),
            CoordsXYZ::new(32, 1, 7),
        ),
    );

    let edge = misc.with_index(if direction & 1 == 0 {
        SPR_STATION_NARROW_EDGE_SE
    } else {
        SPR_STATION_NARROW_EDGE_NE
    });
    session.add_image_as_child_rotated(
        direction,
        edge,
        CoordsXYZ::new(0, 31, height + FENCE_OFFSET_A),
        BoundBoxXYZ::new(
            CoordsXYZ::new(0, 30, height + FENCE_OFFSET_A),
            CoordsXYZ::new(32, 1, 2),
        ),
    );
}

/// Cut the square station portal into the approach edge.
pub fn draw_station_tunnel(session: &mut PaintSession, direction: u8, height: i32) {
    session.push_tunnel_rotated(direction, height, TunnelGroup::Square, TunnelSubType::Flat);
}

/// Paint the flat platform a photo section sits on.
///
/// Blocks all nine segments and reserves extra clearance for the camera
/// gantry; the style's own track sprites go on top.
pub fn onride_photo_platform_paint(
    session: &mut PaintSession,
    direction: u8,
    height: i32,
    support_kind: MetalSupportType,
) {
    let misc = session.misc_colours();
    session.add_image_as_parent_rotated(
        direction,
        misc.with_index(SPR_STATION_BASE_D),
        CoordsXYZ::new(0, 0, height),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, height), CoordsXYZ::new(32, 32, 1)),
    );
    let support_colours = session.support_colours();
    draw_supports_side_by_side(session, direction, height, support_colours, support_kind);
    session.set_segment_support_height(Segments::ALL, SEGMENT_HEIGHT_BLOCKED, 0);
    session.set_general_support_height(height + 48);
}

/// Paint the photo sign posts and camera.
///
/// The camera swaps to its flash frame while the element reports a photo in
/// progress. Tunnel handling is left to the caller since portal shape is a
/// per-style decision.
pub fn onride_photo_paint(
    session: &mut PaintSession,
    direction: u8,
    element: &TrackElement,
    height: i32,
) {
    let misc = session.misc_colours();
    let images = &ONRIDE_PHOTO_IMAGES[(direction & 3) as usize];
    let sign = misc.with_index(images[0]);
    let camera = misc.with_index(if element.is_taking_photo() {
        images[2]
    } else {
        images[1]
    });

    let post_length = CoordsXYZ::new(1, 1, 19);
    let (post_a, post_b, cam) = match direction & 3 {
        0 => (
            CoordsXYZ::new(26, 0, height),
            CoordsXYZ::new(26, 31, height),
            CoordsXYZ::new(6, 0, height),
        ),
        1 => (
            CoordsXYZ::new(0, 6, height),
            CoordsXYZ::new(31, 6, height),
            CoordsXYZ::new(0, 26, height),
        ),
        2 => (
            CoordsXYZ::new(6, 0, height),
            CoordsXYZ::new(6, 31, height),
            CoordsXYZ::new(26, 31, height),
        ),
        _ => (
            CoordsXYZ::new(0, 26, height),
            CoordsXYZ::new(31, 26, height),
            CoordsXYZ::new(31, 6, height),
        ),
    };

    session.add_image_as_parent(sign, post_a, BoundBoxXYZ::new(post_a, post_length));
    session.add_image_as_parent(sign, post_b, BoundBoxXYZ::new(post_b, post_length));
    session.add_image_as_parent(camera, cam, BoundBoxXYZ::new(cam, post_length));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::coords::CoordsXY;
    use crate::ride::TrackElementFlags;

    #[test]
    fn photo_platform_blocks_every_segment() {
        let mut session = PaintSession::new(CoordsXY::new(0, 0));
        onride_photo_platform_paint(&mut session, 0, 16, MetalSupportType::Tubes);

        assert!(session
            .segment_supports()
            .iter()
            .all(|s| s.height == SEGMENT_HEIGHT_BLOCKED));
        assert_eq!(session.general_support_height(), 16 + 48);
        assert_eq!(session.support_placements().len(), 2);
    }

    #[test]
    fn camera_uses_flash_frame_while_taking_photo() {
        let mut idle = PaintSession::new(CoordsXY::new(0, 0));
        onride_photo_paint(&mut idle, 0, &TrackElement::default(), 16);

        let mut flashing = PaintSession::new(CoordsXY::new(0, 0));
        let element = TrackElement::new(TrackElementFlags::TAKING_PHOTO);
        onride_photo_paint(&mut flashing, 0, &element, 16);

        assert_eq!(idle.paint_structs()[2].image.index(), SPR_ON_RIDE_PHOTO_CAMERA_S);
        assert_eq!(
            flashing.paint_structs()[2].image.index(),
            SPR_ON_RIDE_PHOTO_CAMERA_FLASH_S
        );
    }

    #[test]
    fn station_tunnel_is_square_flat() {
        let mut session = PaintSession::new(CoordsXY::new(0, 0));
        draw_station_tunnel(&mut session, 2, 16);

        let tunnel = session.tunnels()[0];
        assert_eq!(tunnel.group, TunnelGroup::Square);
        assert_eq!(tunnel.sub_type, TunnelSubType::Flat);
    }
}
