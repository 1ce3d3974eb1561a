//! # Bobsleigh coaster track painter
//!
//! Sprite tables and render functions for every track piece the bobsleigh
//! style supports. Straight pieces paint a trough sprite plus a thin front
//! wall that occludes cars behind the near rail; multi-tile pieces carry one
//! sprite pair per viewing rotation and sequence tile.
//!
//! The sprite set only contains the left-handed curves and the up slopes.
//! Right-handed curves remap their sequence index and rotate the view onto
//! the left tables, and the down-slope pieces paint their up-slope mirror at
//! the opposite rotation.

use crate::foundation::coords::{BoundBoxXYZ, CoordsXYZ};
use crate::paint::supports::{
    draw_supports_side_by_side, metal_a_supports_paint_setup, should_paint_supports,
    MetalSupportPlace,
};
use crate::paint::track_util::{
    draw_station, draw_station_tunnel, onride_photo_paint, onride_photo_platform_paint,
    station_colour_scheme, SPR_STATION_BASE_B_NW_SE, SPR_STATION_BASE_B_SW_NE,
};
use crate::paint::{
    blocked_segments, PaintSession, Segments, TunnelGroup, TunnelSubType,
    DEFAULT_GENERAL_SUPPORT_HEIGHT, SEGMENT_HEIGHT_BLOCKED,
};
use crate::ride::{Ride, SupportType, TrackElemType, TrackElement};
use crate::track::{track_paint_function_dummy, TrackPaintFunction};

/// Portal shape cut by every non-station bobsleigh piece.
const TUNNEL_GROUP: TunnelGroup = TunnelGroup::Standard;

/// Right-handed three-tile turns drawn with the left-handed sprite table.
const TURN_3_SEQUENCE_MAP: [u8; 4] = [3, 1, 2, 0];

/// Right-handed five-tile turns drawn with the left-handed sprite table.
const TURN_5_SEQUENCE_MAP: [u8; 7] = [6, 4, 5, 3, 1, 2, 0];

/// One rotation's sprite pair for a curved piece tile.
///
/// `base` is the trough, `front` the wall floating at `height + 27` in the
/// same footprint. A handful of helix tiles raise the trough's bounding box
/// by [`Self::lifted`], and one five-tile turn tile widens the wall's box
/// with [`Self::front_length`].
#[derive(Clone, Copy)]
struct CurveSprite {
    base: u32,
    front: u32,
    offset: (i32, i32),
    bb_offset: (i32, i32),
    bb_length: (i32, i32),
    base_lift: i32,
    front_length: (i32, i32),
}

impl CurveSprite {
    const fn new(
        base: u32,
        front: u32,
        offset: (i32, i32),
        bb_offset: (i32, i32),
        bb_length: (i32, i32),
    ) -> Self {
        Self {
            base,
            front,
            offset,
            bb_offset,
            bb_length,
            base_lift: 0,
            front_length: bb_length,
        }
    }

    const fn lifted(mut self, dz: i32) -> Self {
        self.base_lift = dz;
        self
    }

    const fn front_length(mut self, length: (i32, i32)) -> Self {
        self.front_length = length;
        self
    }
}

/// Paint a straight piece's trough and front wall.
fn paint_straight(
    session: &mut PaintSession,
    direction: u8,
    height: i32,
    base: u32,
    front: u32,
    front_height: i32,
) {
    let colours = session.track_colours();
    session.add_image_as_parent_rotated(
        direction,
        colours.with_index(base),
        CoordsXYZ::new(0, 0, height),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, height), CoordsXYZ::new(32, 20, 2)),
    );
    session.add_image_as_parent_rotated(
        direction,
        colours.with_index(front),
        CoordsXYZ::new(0, 0, height),
        BoundBoxXYZ::new(
            CoordsXYZ::new(0, 27, height),
            CoordsXYZ::new(32, 1, front_height),
        ),
    );
}

/// Paint one curved tile's trough and front wall.
fn paint_curve(session: &mut PaintSession, direction: u8, height: i32, sprite: &CurveSprite) {
    let colours = session.track_colours();
    let (ox, oy) = sprite.offset;
    let (bx, by) = sprite.bb_offset;
    let (lx, ly) = sprite.bb_length;
    session.add_image_as_parent_rotated(
        direction,
        colours.with_index(sprite.base),
        CoordsXYZ::new(ox, oy, height),
        BoundBoxXYZ::new(
            CoordsXYZ::new(bx, by, height + sprite.base_lift),
            CoordsXYZ::new(lx, ly, 2),
        ),
    );
    let (fx, fy) = sprite.front_length;
    session.add_image_as_parent_rotated(
        direction,
        colours.with_index(sprite.front),
        CoordsXYZ::new(ox, oy, height),
        BoundBoxXYZ::new(CoordsXYZ::new(bx, by, height + 27), CoordsXYZ::new(fx, fy, 0)),
    );
}

fn metal_support(
    session: &mut PaintSession,
    support_type: SupportType,
    place: MetalSupportPlace,
    special: i32,
    height: i32,
) {
    let colours = session.support_colours();
    metal_a_supports_paint_setup(session, support_type.metal, place, special, height, colours);
}

fn centre_support(session: &mut PaintSession, support_type: SupportType, special: i32, height: i32) {
    metal_support(session, support_type, MetalSupportPlace::Centre, special, height);
}

/// Centre pole on the alternating-tile checkerboard, used by straight pieces.
fn alternating_centre_support(
    session: &mut PaintSession,
    support_type: SupportType,
    special: i32,
    height: i32,
) {
    if should_paint_supports(session.map_position()) {
        centre_support(session, support_type, special, height);
    }
}

/// Block the piece's segments, rotated into the current view.
fn block_segments(session: &mut PaintSession, direction: u8, segments: Segments) {
    session.set_segment_support_height(segments.rotated(direction), SEGMENT_HEIGHT_BLOCKED, 0);
}

fn flat(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    const PLAIN: [[u32; 2]; 2] = [[14572, 14574], [14573, 14575]];
    const CHAIN: [[u32; 2]; 2] = [[14576, 14578], [14577, 14579]];

    let images = if track_element.has_chain() { CHAIN } else { PLAIN };
    let [base, front] = images[(direction & 1) as usize];
    paint_straight(session, direction, height, base, front, 26);
    alternating_centre_support(session, support_type, 0, height);
    session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
    block_segments(session, direction, blocked_segments::STRAIGHT_FLAT);
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

fn station(
    session: &mut PaintSession,
    ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    const IMAGES: [[u32; 2]; 2] = [
        [14580, SPR_STATION_BASE_B_SW_NE],
        [14581, SPR_STATION_BASE_B_NW_SE],
    ];

    let [track_image, base_image] = IMAGES[(direction & 1) as usize];
    let track = session.track_colours().with_index(track_image);
    let base = station_colour_scheme(session, track_element).with_index(base_image);
    session.add_image_as_parent_rotated(
        direction,
        track,
        CoordsXYZ::new(0, 0, height),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, height + 3), CoordsXYZ::new(32, 20, 1)),
    );
    session.add_image_as_parent_rotated(
        direction,
        base,
        CoordsXYZ::new(0, 0, height),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, height), CoordsXYZ::new(32, 32, 1)),
    );
    let support_colours = session.support_colours();
    draw_supports_side_by_side(session, direction, height, support_colours, support_type.metal);
    draw_station(session, ride, direction, height);
    draw_station_tunnel(session, direction, height);
    session.set_segment_support_height(Segments::ALL, SEGMENT_HEIGHT_BLOCKED, 0);
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

fn up_25(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    const PLAIN: [[u32; 2]; 4] = [
        [14610, 14614],
        [14611, 14615],
        [14612, 14616],
        [14613, 14617],
    ];
    const CHAIN: [[u32; 2]; 4] = [
        [14634, 14638],
        [14635, 14639],
        [14636, 14640],
        [14637, 14641],
    ];

    let images = if track_element.has_chain() { CHAIN } else { PLAIN };
    let [base, front] = images[(direction & 3) as usize];
    paint_straight(session, direction, height, base, front, 50);
    alternating_centre_support(session, support_type, 8, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, TUNNEL_GROUP, TunnelSubType::SlopeStart);
    } else {
        session.push_tunnel_rotated(direction, height + 8, TUNNEL_GROUP, TunnelSubType::SlopeEnd);
    }
    block_segments(session, direction, blocked_segments::STRAIGHT_FLAT);
    session.set_general_support_height(height + 56);
}

fn flat_to_up_25(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    const PLAIN: [[u32; 2]; 4] = [
        [14594, 14598],
        [14595, 14599],
        [14596, 14600],
        [14597, 14601],
    ];
    const CHAIN: [[u32; 2]; 4] = [
        [14618, 14622],
        [14619, 14623],
        [14620, 14624],
        [14621, 14625],
    ];

    let images = if track_element.has_chain() { CHAIN } else { PLAIN };
    let [base, front] = images[(direction & 3) as usize];
    paint_straight(session, direction, height, base, front, 42);
    alternating_centre_support(session, support_type, 3, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
    } else {
        session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::SlopeEnd);
    }
    block_segments(session, direction, blocked_segments::STRAIGHT_FLAT);
    session.set_general_support_height(height + 48);
}

fn up_25_to_flat(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    const PLAIN: [[u32; 2]; 4] = [
        [14602, 14606],
        [14603, 14607],
        [14604, 14608],
        [14605, 14609],
    ];
    const CHAIN: [[u32; 2]; 4] = [
        [14626, 14630],
        [14627, 14631],
        [14628, 14632],
        [14629, 14633],
    ];

    let images = if track_element.has_chain() { CHAIN } else { PLAIN };
    let [base, front] = images[(direction & 3) as usize];
    paint_straight(session, direction, height, base, front, 34);
    alternating_centre_support(session, support_type, 6, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, TUNNEL_GROUP, TunnelSubType::Flat);
    } else {
        session.push_tunnel_rotated(direction, height + 8, TUNNEL_GROUP, TunnelSubType::FlatTo25Deg);
    }
    block_segments(session, direction, blocked_segments::STRAIGHT_FLAT);
    session.set_general_support_height(height + 40);
}

fn down_25(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    up_25(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        track_element,
        support_type,
    );
}

fn flat_to_down_25(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    up_25_to_flat(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        track_element,
        support_type,
    );
}

fn down_25_to_flat(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    flat_to_up_25(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        track_element,
        support_type,
    );
}

#[allow(clippy::too_many_lines)]
fn left_quarter_turn_5(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: SupportType,
) {
    let d = (direction & 3) as usize;
    match track_sequence {
        0 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14707, 14727, (0, 2), (0, 6), (32, 20)),
                CurveSprite::new(14712, 14732, (0, 2), (0, 6), (32, 20)),
                CurveSprite::new(14717, 14737, (0, 2), (0, 6), (32, 20)),
                CurveSprite::new(14702, 14722, (0, 2), (0, 6), (32, 20)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 0, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
            }
            block_segments(
                session,
                direction,
                Segments::TOP_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE,
            );
        }
        2 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14706, 14726, (0, 0), (0, 0), (32, 16)),
                CurveSprite::new(14711, 14731, (0, 0), (0, 0), (32, 16)),
                CurveSprite::new(14716, 14736, (0, 16), (0, 16), (32, 16)),
                CurveSprite::new(14701, 14721, (0, 16), (0, 16), (32, 16)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::TOP_CORNER
                    | Segments::LEFT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE,
            );
        }
        3 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14705, 14725, (0, 16), (0, 16), (16, 16)),
                CurveSprite::new(14710, 14730, (16, 16), (16, 16), (16, 16)),
                CurveSprite::new(14715, 14735, (16, 0), (16, 0), (16, 16)),
                CurveSprite::new(14700, 14720, (0, 0), (0, 0), (16, 16)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::RIGHT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        5 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14704, 14724, (16, 0), (16, 0), (16, 34)),
                CurveSprite::new(14709, 14729, (0, 0), (0, 0), (16, 32)),
                CurveSprite::new(14714, 14734, (0, 0), (0, 0), (16, 32)),
                CurveSprite::new(14699, 14719, (16, 0), (16, 0), (16, 32)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::LEFT_CORNER
                    | Segments::BOTTOM_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        6 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14703, 14723, (2, 0), (6, 0), (20, 32)),
                CurveSprite::new(14708, 14728, (2, 0), (6, 0), (20, 32)),
                CurveSprite::new(14713, 14733, (2, 0), (6, 0), (20, 32)),
                CurveSprite::new(14698, 14718, (2, 0), (6, 0), (20, 32)).front_length((30, 32)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 0, height);
            match direction {
                2 => session.push_tunnel_right(height, TUNNEL_GROUP, TunnelSubType::Flat),
                3 => session.push_tunnel_left(height, TUNNEL_GROUP, TunnelSubType::Flat),
                _ => {}
            }
            block_segments(
                session,
                direction,
                Segments::BOTTOM_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        _ => {}
    }
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

fn right_quarter_turn_5(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    let Some(&remapped) = TURN_5_SEQUENCE_MAP.get(track_sequence as usize) else {
        return;
    };
    left_quarter_turn_5(
        session,
        ride,
        remapped,
        direction.wrapping_sub(1) & 3,
        height,
        track_element,
        support_type,
    );
}

/// Shared body of the eight flat/bank straight transitions.
fn paint_flat_bank_transition(
    session: &mut PaintSession,
    direction: u8,
    height: i32,
    images: [[u32; 2]; 4],
    support_type: SupportType,
) {
    let [base, front] = images[(direction & 3) as usize];
    paint_straight(session, direction, height, base, front, 26);
    alternating_centre_support(session, support_type, 0, height);
    session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
    block_segments(session, direction, blocked_segments::STRAIGHT_FLAT);
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

fn flat_to_left_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: SupportType,
) {
    const IMAGES: [[u32; 2]; 4] = [
        [14642, 14646],
        [14643, 14647],
        [14644, 14648],
        [14645, 14649],
    ];
    paint_flat_bank_transition(session, direction, height, IMAGES, support_type);
}

fn flat_to_right_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: SupportType,
) {
    const IMAGES: [[u32; 2]; 4] = [
        [14650, 14654],
        [14651, 14655],
        [14652, 14656],
        [14653, 14657],
    ];
    paint_flat_bank_transition(session, direction, height, IMAGES, support_type);
}

fn left_bank_to_flat(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: SupportType,
) {
    const IMAGES: [[u32; 2]; 4] = [
        [14652, 14656],
        [14653, 14657],
        [14650, 14654],
        [14651, 14655],
    ];
    paint_flat_bank_transition(session, direction, height, IMAGES, support_type);
}

fn right_bank_to_flat(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: SupportType,
) {
    const IMAGES: [[u32; 2]; 4] = [
        [14644, 14648],
        [14645, 14649],
        [14642, 14646],
        [14643, 14647],
    ];
    paint_flat_bank_transition(session, direction, height, IMAGES, support_type);
}

#[allow(clippy::too_many_lines)]
fn banked_left_quarter_turn_5(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: SupportType,
) {
    let d = (direction & 3) as usize;
    match track_sequence {
        0 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14747, 14767, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14752, 14772, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14757, 14777, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14742, 14762, (0, 0), (0, 6), (32, 20)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 0, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
            }
            block_segments(
                session,
                direction,
                Segments::TOP_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE,
            );
        }
        2 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14746, 14766, (0, 0), (0, 0), (32, 16)),
                CurveSprite::new(14751, 14771, (0, 0), (0, 0), (32, 16)),
                CurveSprite::new(14756, 14776, (0, 0), (0, 16), (32, 16)),
                CurveSprite::new(14741, 14761, (0, 0), (0, 16), (32, 16)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::TOP_CORNER
                    | Segments::LEFT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE,
            );
        }
        3 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14745, 14765, (0, 0), (0, 16), (16, 16)),
                CurveSprite::new(14750, 14770, (0, 0), (16, 16), (16, 16)),
                CurveSprite::new(14755, 14775, (0, 0), (16, 0), (16, 16)),
                CurveSprite::new(14740, 14760, (0, 0), (0, 0), (16, 16)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::RIGHT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        5 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14744, 14764, (0, 0), (16, 0), (16, 32)),
                CurveSprite::new(14749, 14769, (0, 0), (0, 0), (16, 32)),
                CurveSprite::new(14754, 14774, (0, 0), (0, 0), (16, 32)),
                CurveSprite::new(14739, 14759, (0, 0), (16, 0), (16, 32)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::LEFT_CORNER
                    | Segments::BOTTOM_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        6 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14743, 14763, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14748, 14768, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14753, 14773, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14738, 14758, (0, 0), (6, 0), (20, 32)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 0, height);
            match direction {
                2 => session.push_tunnel_right(height, TUNNEL_GROUP, TunnelSubType::Flat),
                3 => session.push_tunnel_left(height, TUNNEL_GROUP, TunnelSubType::Flat),
                _ => {}
            }
            block_segments(
                session,
                direction,
                Segments::BOTTOM_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        _ => {}
    }
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

fn banked_right_quarter_turn_5(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    let Some(&remapped) = TURN_5_SEQUENCE_MAP.get(track_sequence as usize) else {
        return;
    };
    banked_left_quarter_turn_5(
        session,
        ride,
        remapped,
        direction.wrapping_sub(1) & 3,
        height,
        track_element,
        support_type,
    );
}

/// Shared body of the four bank/25-degree entry transitions.
fn paint_bank_to_up_25(
    session: &mut PaintSession,
    direction: u8,
    height: i32,
    images: [[u32; 2]; 4],
    support_type: SupportType,
) {
    let [base, front] = images[(direction & 3) as usize];
    paint_straight(session, direction, height, base, front, 26);
    alternating_centre_support(session, support_type, 3, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
    } else {
        session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::SlopeEnd);
    }
    block_segments(session, direction, blocked_segments::STRAIGHT_FLAT);
    session.set_general_support_height(height + 48);
}

/// Shared body of the four 25-degree/bank exit transitions.
fn paint_up_25_to_bank(
    session: &mut PaintSession,
    direction: u8,
    height: i32,
    images: [[u32; 2]; 4],
    support_type: SupportType,
) {
    let [base, front] = images[(direction & 3) as usize];
    paint_straight(session, direction, height, base, front, 26);
    alternating_centre_support(session, support_type, 6, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, TUNNEL_GROUP, TunnelSubType::Flat);
    } else {
        session.push_tunnel_rotated(direction, height + 8, TUNNEL_GROUP, TunnelSubType::FlatTo25Deg);
    }
    block_segments(session, direction, blocked_segments::STRAIGHT_FLAT);
    session.set_general_support_height(height + 40);
}

const LEFT_BANK_TO_UP_25_IMAGES: [[u32; 2]; 4] = [
    [14674, 14678],
    [14675, 14679],
    [14676, 14680],
    [14677, 14681],
];

const RIGHT_BANK_TO_UP_25_IMAGES: [[u32; 2]; 4] = [
    [14682, 14686],
    [14683, 14687],
    [14684, 14688],
    [14685, 14689],
];

const UP_25_TO_LEFT_BANK_IMAGES: [[u32; 2]; 4] = [
    [14658, 14662],
    [14659, 14663],
    [14660, 14664],
    [14661, 14665],
];

const UP_25_TO_RIGHT_BANK_IMAGES: [[u32; 2]; 4] = [
    [14666, 14670],
    [14667, 14671],
    [14668, 14672],
    [14669, 14673],
];

fn left_bank_to_up_25(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: SupportType,
) {
    paint_bank_to_up_25(session, direction, height, LEFT_BANK_TO_UP_25_IMAGES, support_type);
}

fn right_bank_to_up_25(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: SupportType,
) {
    paint_bank_to_up_25(session, direction, height, RIGHT_BANK_TO_UP_25_IMAGES, support_type);
}

fn up_25_to_left_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: SupportType,
) {
    paint_up_25_to_bank(session, direction, height, UP_25_TO_LEFT_BANK_IMAGES, support_type);
}

fn up_25_to_right_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: SupportType,
) {
    paint_up_25_to_bank(session, direction, height, UP_25_TO_RIGHT_BANK_IMAGES, support_type);
}

fn left_bank_to_down_25(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    up_25_to_right_bank(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        track_element,
        support_type,
    );
}

fn right_bank_to_down_25(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    up_25_to_left_bank(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        track_element,
        support_type,
    );
}

fn down_25_to_left_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    right_bank_to_up_25(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        track_element,
        support_type,
    );
}

fn down_25_to_right_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    left_bank_to_up_25(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        track_element,
        support_type,
    );
}

fn left_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: SupportType,
) {
    const IMAGES: [[u32; 2]; 4] = [
        [14690, 14694],
        [14691, 14695],
        [14692, 14696],
        [14693, 14697],
    ];
    paint_flat_bank_transition(session, direction, height, IMAGES, support_type);
}

fn right_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    left_bank(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        track_element,
        support_type,
    );
}

#[allow(clippy::too_many_lines)]
fn s_bend_left(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: SupportType,
) {
    let d = (direction & 3) as usize;
    match track_sequence {
        0 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14826, 14842, (0, 0), (0, 2), (32, 27)),
                CurveSprite::new(14830, 14846, (0, 0), (0, 2), (32, 27)),
                CurveSprite::new(14829, 14845, (0, 0), (0, 2), (32, 27)),
                CurveSprite::new(14833, 14849, (0, 0), (0, 2), (32, 27)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 0, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
            }
            block_segments(
                session,
                direction,
                Segments::TOP_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE,
            );
        }
        1 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14827, 14843, (0, 0), (0, 0), (32, 26)),
                CurveSprite::new(14831, 14847, (0, 0), (0, 0), (32, 26)),
                CurveSprite::new(14828, 14844, (0, 0), (0, 6), (32, 26)),
                CurveSprite::new(14832, 14848, (0, 0), (0, 6), (32, 26)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            match direction {
                0 => metal_support(session, support_type, MetalSupportPlace::TopLeftSide, 0, height),
                1 => {
                    metal_support(session, support_type, MetalSupportPlace::TopRightSide, 1, height);
                }
                _ => {}
            }
            block_segments(
                session,
                direction,
                Segments::TOP_CORNER
                    | Segments::LEFT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE,
            );
        }
        2 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14828, 14844, (0, 0), (0, 6), (32, 26)),
                CurveSprite::new(14832, 14848, (0, 0), (0, 6), (32, 26)),
                CurveSprite::new(14827, 14843, (0, 0), (0, 0), (32, 26)),
                CurveSprite::new(14831, 14847, (0, 0), (0, 0), (32, 26)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            match direction {
                2 => metal_support(session, support_type, MetalSupportPlace::TopLeftSide, 0, height),
                3 => {
                    metal_support(session, support_type, MetalSupportPlace::TopRightSide, 1, height);
                }
                _ => {}
            }
            block_segments(
                session,
                direction,
                Segments::RIGHT_CORNER
                    | Segments::BOTTOM_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        3 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14829, 14845, (0, 0), (0, 2), (32, 27)),
                CurveSprite::new(14833, 14849, (0, 0), (0, 2), (32, 27)),
                CurveSprite::new(14826, 14842, (0, 0), (0, 2), (32, 27)),
                CurveSprite::new(14830, 14846, (0, 0), (0, 2), (32, 27)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 0, height);
            match direction {
                1 => session.push_tunnel_right(height, TUNNEL_GROUP, TunnelSubType::Flat),
                2 => session.push_tunnel_left(height, TUNNEL_GROUP, TunnelSubType::Flat),
                _ => {}
            }
            block_segments(
                session,
                direction,
                Segments::BOTTOM_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE,
            );
        }
        _ => {}
    }
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

#[allow(clippy::too_many_lines)]
fn s_bend_right(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: SupportType,
) {
    let d = (direction & 3) as usize;
    match track_sequence {
        0 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14834, 14850, (0, 0), (0, 2), (32, 27)),
                CurveSprite::new(14838, 14854, (0, 0), (0, 2), (32, 27)),
                CurveSprite::new(14837, 14853, (0, 0), (0, 2), (32, 27)),
                CurveSprite::new(14841, 14857, (0, 0), (0, 2), (32, 27)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 0, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
            }
            block_segments(
                session,
                direction,
                Segments::RIGHT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE,
            );
        }
        1 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14835, 14851, (0, 0), (0, 6), (32, 26)),
                CurveSprite::new(14839, 14855, (0, 0), (0, 6), (32, 26)),
                CurveSprite::new(14836, 14852, (0, 0), (0, 0), (32, 26)),
                CurveSprite::new(14840, 14856, (0, 0), (0, 0), (32, 26)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            match direction {
                0 => metal_support(
                    session,
                    support_type,
                    MetalSupportPlace::BottomRightSide,
                    0,
                    height,
                ),
                1 => metal_support(
                    session,
                    support_type,
                    MetalSupportPlace::BottomLeftSide,
                    0,
                    height,
                ),
                _ => {}
            }
            block_segments(
                session,
                direction,
                Segments::RIGHT_CORNER
                    | Segments::BOTTOM_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        2 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14836, 14852, (0, 0), (0, 0), (32, 26)),
                CurveSprite::new(14840, 14856, (0, 0), (0, 0), (32, 26)),
                CurveSprite::new(14835, 14851, (0, 0), (0, 6), (32, 26)),
                CurveSprite::new(14839, 14855, (0, 0), (0, 6), (32, 26)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            match direction {
                2 => metal_support(
                    session,
                    support_type,
                    MetalSupportPlace::BottomRightSide,
                    0,
                    height,
                ),
                3 => metal_support(
                    session,
                    support_type,
                    MetalSupportPlace::BottomLeftSide,
                    0,
                    height,
                ),
                _ => {}
            }
            block_segments(
                session,
                direction,
                Segments::TOP_CORNER
                    | Segments::LEFT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE,
            );
        }
        3 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14837, 14853, (0, 0), (0, 2), (32, 27)),
                CurveSprite::new(14841, 14857, (0, 0), (0, 2), (32, 27)),
                CurveSprite::new(14834, 14850, (0, 0), (0, 2), (32, 27)),
                CurveSprite::new(14838, 14854, (0, 0), (0, 2), (32, 27)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 0, height);
            match direction {
                1 => session.push_tunnel_right(height, TUNNEL_GROUP, TunnelSubType::Flat),
                2 => session.push_tunnel_left(height, TUNNEL_GROUP, TunnelSubType::Flat),
                _ => {}
            }
            block_segments(
                session,
                direction,
                Segments::LEFT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE,
            );
        }
        _ => {}
    }
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

/// Paint one tile of a three-tile turn from its per-sequence sprite table.
///
/// The unbanked and banked turns share everything but sprite indices, so the
/// table is passed in as `[sequence 0, 2, 3][direction]`.
fn paint_quarter_turn_3(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: u8,
    height: i32,
    sprites: &[[CurveSprite; 4]; 3],
    support_type: SupportType,
) {
    let d = (direction & 3) as usize;
    match track_sequence {
        0 => {
            paint_curve(session, direction, height, &sprites[0][d]);
            centre_support(session, support_type, 0, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
            }
            block_segments(
                session,
                direction,
                Segments::TOP_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE,
            );
        }
        2 => {
            paint_curve(session, direction, height, &sprites[1][d]);
            block_segments(
                session,
                direction,
                Segments::LEFT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE,
            );
        }
        3 => {
            paint_curve(session, direction, height, &sprites[2][d]);
            centre_support(session, support_type, 0, height);
            match direction {
                2 => session.push_tunnel_right(height, TUNNEL_GROUP, TunnelSubType::Flat),
                3 => session.push_tunnel_left(height, TUNNEL_GROUP, TunnelSubType::Flat),
                _ => {}
            }
            block_segments(
                session,
                direction,
                Segments::BOTTOM_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        _ => {}
    }
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

const LEFT_QUARTER_TURN_3_SPRITES: [[CurveSprite; 4]; 3] = [
    [
        CurveSprite::new(14783, 14795, (0, 0), (0, 6), (32, 20)),
        CurveSprite::new(14786, 14798, (0, 0), (0, 6), (32, 20)),
        CurveSprite::new(14789, 14801, (0, 0), (0, 6), (32, 20)),
        CurveSprite::new(14780, 14792, (0, 0), (0, 6), (32, 20)),
    ],
    [
        CurveSprite::new(14782, 14794, (0, 0), (16, 0), (16, 16)),
        CurveSprite::new(14785, 14797, (0, 0), (0, 0), (16, 16)),
        CurveSprite::new(14788, 14800, (0, 0), (0, 16), (16, 16)),
        CurveSprite::new(14779, 14791, (0, 0), (16, 16), (16, 16)),
    ],
    [
        CurveSprite::new(14781, 14793, (0, 0), (6, 0), (20, 32)),
        CurveSprite::new(14784, 14796, (0, 0), (6, 0), (20, 32)),
        CurveSprite::new(14787, 14799, (0, 0), (6, 0), (20, 32)),
        CurveSprite::new(14778, 14790, (0, 0), (6, 0), (20, 32)),
    ],
];

const LEFT_BANKED_QUARTER_TURN_3_SPRITES: [[CurveSprite; 4]; 3] = [
    [
        CurveSprite::new(14807, 14819, (0, 0), (0, 6), (32, 20)),
        CurveSprite::new(14810, 14822, (0, 0), (0, 6), (32, 20)),
        CurveSprite::new(14813, 14825, (0, 0), (0, 6), (32, 20)),
        CurveSprite::new(14804, 14816, (0, 0), (0, 6), (32, 20)),
    ],
    [
        CurveSprite::new(14806, 14818, (0, 0), (16, 0), (16, 16)),
        CurveSprite::new(14809, 14821, (0, 0), (0, 0), (16, 16)),
        CurveSprite::new(14812, 14824, (0, 0), (0, 16), (16, 16)),
        CurveSprite::new(14803, 14815, (0, 0), (16, 16), (16, 16)),
    ],
    [
        CurveSprite::new(14805, 14817, (0, 0), (6, 0), (20, 32)),
        CurveSprite::new(14808, 14820, (0, 0), (6, 0), (20, 32)),
        CurveSprite::new(14811, 14823, (0, 0), (6, 0), (20, 32)),
        CurveSprite::new(14802, 14814, (0, 0), (6, 0), (20, 32)),
    ],
];

fn left_quarter_turn_3(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: SupportType,
) {
    paint_quarter_turn_3(
        session,
        track_sequence,
        direction,
        height,
        &LEFT_QUARTER_TURN_3_SPRITES,
        support_type,
    );
}

fn right_quarter_turn_3(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    let Some(&remapped) = TURN_3_SEQUENCE_MAP.get(track_sequence as usize) else {
        return;
    };
    left_quarter_turn_3(
        session,
        ride,
        remapped,
        direction.wrapping_sub(1) & 3,
        height,
        track_element,
        support_type,
    );
}

fn left_banked_quarter_turn_3(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: SupportType,
) {
    paint_quarter_turn_3(
        session,
        track_sequence,
        direction,
        height,
        &LEFT_BANKED_QUARTER_TURN_3_SPRITES,
        support_type,
    );
}

fn right_banked_quarter_turn_3(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    let Some(&remapped) = TURN_3_SEQUENCE_MAP.get(track_sequence as usize) else {
        return;
    };
    left_banked_quarter_turn_3(
        session,
        ride,
        remapped,
        direction.wrapping_sub(1) & 3,
        height,
        track_element,
        support_type,
    );
}

#[allow(clippy::too_many_lines)]
fn left_half_banked_helix_up_small(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: SupportType,
) {
    let d = (direction & 3) as usize;
    match track_sequence {
        0 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14887, 14899, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14890, 14902, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14893, 14905, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14884, 14896, (0, 0), (0, 6), (32, 20)).lifted(8),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 2, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
            }
            block_segments(
                session,
                direction,
                Segments::TOP_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE,
            );
        }
        2 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14886, 14898, (0, 0), (16, 0), (16, 16)),
                CurveSprite::new(14889, 14901, (0, 0), (0, 0), (16, 16)),
                CurveSprite::new(14892, 14904, (0, 0), (0, 16), (16, 16)),
                CurveSprite::new(14883, 14895, (0, 0), (16, 16), (16, 16)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::LEFT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE,
            );
        }
        3 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14885, 14897, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14888, 14900, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14891, 14903, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14882, 14894, (0, 0), (6, 0), (20, 32)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 6, height);
            match direction {
                2 => session.push_tunnel_right(height + 8, TUNNEL_GROUP, TunnelSubType::Flat),
                3 => session.push_tunnel_left(height + 8, TUNNEL_GROUP, TunnelSubType::Flat),
                _ => {}
            }
            block_segments(
                session,
                direction,
                Segments::BOTTOM_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        4 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14884, 14896, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14887, 14899, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14890, 14902, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14893, 14905, (0, 0), (6, 0), (20, 32)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 2, height);
            match direction {
                0 => session.push_tunnel_right(height, TUNNEL_GROUP, TunnelSubType::Flat),
                1 => session.push_tunnel_left(height, TUNNEL_GROUP, TunnelSubType::Flat),
                _ => {}
            }
            block_segments(
                session,
                direction,
                Segments::LEFT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        6 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14883, 14895, (0, 0), (16, 16), (16, 16)),
                CurveSprite::new(14886, 14898, (0, 0), (0, 16), (16, 16)),
                CurveSprite::new(14889, 14901, (0, 0), (0, 0), (16, 16)),
                CurveSprite::new(14892, 14904, (0, 0), (16, 0), (16, 16)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::BOTTOM_CORNER
                    | Segments::CENTRE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        7 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14882, 14894, (0, 0), (0, 6), (32, 20)).lifted(8),
                CurveSprite::new(14885, 14897, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14888, 14900, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14891, 14903, (0, 0), (0, 6), (32, 20)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 6, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height + 8, TUNNEL_GROUP, TunnelSubType::Flat);
            }
            block_segments(
                session,
                direction,
                Segments::RIGHT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        _ => {}
    }
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

#[allow(clippy::too_many_lines)]
fn right_half_banked_helix_up_small(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: SupportType,
) {
    let d = (direction & 3) as usize;
    match track_sequence {
        0 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14858, 14870, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14861, 14873, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14864, 14876, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14867, 14879, (0, 0), (0, 6), (32, 20)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 2, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
            }
            block_segments(
                session,
                direction,
                Segments::RIGHT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        2 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14859, 14871, (0, 0), (16, 16), (16, 16)),
                CurveSprite::new(14862, 14874, (0, 0), (0, 16), (16, 16)),
                CurveSprite::new(14865, 14877, (0, 0), (0, 0), (16, 16)),
                CurveSprite::new(14868, 14880, (0, 0), (16, 0), (16, 16)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::BOTTOM_CORNER
                    | Segments::CENTRE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        3 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14860, 14872, (0, 0), (6, 0), (20, 32)).lifted(8),
                CurveSprite::new(14863, 14875, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14866, 14878, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14869, 14881, (0, 0), (6, 0), (20, 32)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 6, height);
            match direction {
                0 => session.push_tunnel_right(height + 8, TUNNEL_GROUP, TunnelSubType::Flat),
                1 => session.push_tunnel_left(height + 8, TUNNEL_GROUP, TunnelSubType::Flat),
                _ => {}
            }
            block_segments(
                session,
                direction,
                Segments::LEFT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        4 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14861, 14873, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14864, 14876, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14867, 14879, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14858, 14870, (0, 0), (6, 0), (20, 32)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 2, height);
            match direction {
                2 => session.push_tunnel_right(height, TUNNEL_GROUP, TunnelSubType::Flat),
                3 => session.push_tunnel_left(height, TUNNEL_GROUP, TunnelSubType::Flat),
                _ => {}
            }
            block_segments(
                session,
                direction,
                Segments::BOTTOM_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        6 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14862, 14874, (0, 0), (16, 0), (16, 16)),
                CurveSprite::new(14865, 14877, (0, 0), (0, 0), (16, 16)),
                CurveSprite::new(14868, 14880, (0, 0), (0, 16), (16, 16)),
                CurveSprite::new(14859, 14871, (0, 0), (16, 16), (16, 16)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::LEFT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE,
            );
        }
        7 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14863, 14875, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14866, 14878, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14869, 14881, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14860, 14872, (0, 0), (0, 6), (32, 20)).lifted(8),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 6, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height + 8, TUNNEL_GROUP, TunnelSubType::Flat);
            }
            block_segments(
                session,
                direction,
                Segments::TOP_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE,
            );
        }
        _ => {}
    }
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

fn left_half_banked_helix_down_small(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    let (mut track_sequence, mut direction) = (track_sequence, direction);
    if track_sequence >= 4 {
        track_sequence -= 4;
        direction = direction.wrapping_sub(1) & 3;
    }
    let Some(&remapped) = TURN_3_SEQUENCE_MAP.get(track_sequence as usize) else {
        return;
    };
    right_half_banked_helix_up_small(
        session,
        ride,
        remapped,
        (direction + 1) & 3,
        height,
        track_element,
        support_type,
    );
}

fn right_half_banked_helix_down_small(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    let (mut track_sequence, mut direction) = (track_sequence, direction);
    if track_sequence >= 4 {
        track_sequence -= 4;
        direction = (direction + 1) & 3;
    }
    let Some(&remapped) = TURN_3_SEQUENCE_MAP.get(track_sequence as usize) else {
        return;
    };
    left_half_banked_helix_up_small(
        session,
        ride,
        remapped,
        direction.wrapping_sub(1) & 3,
        height,
        track_element,
        support_type,
    );
}

#[allow(clippy::too_many_lines)]
fn left_half_banked_helix_up_large(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: SupportType,
) {
    let d = (direction & 3) as usize;
    match track_sequence {
        0 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14955, 14975, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14960, 14980, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14965, 14985, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14950, 14970, (0, 0), (0, 6), (32, 20)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 1, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
            }
            block_segments(
                session,
                direction,
                Segments::TOP_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE,
            );
        }
        2 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14954, 14974, (0, 0), (0, 0), (32, 16)),
                CurveSprite::new(14959, 14979, (0, 0), (0, 0), (32, 16)),
                CurveSprite::new(14964, 14984, (0, 0), (0, 16), (32, 16)),
                CurveSprite::new(14949, 14969, (0, 0), (0, 16), (32, 16)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::TOP_CORNER
                    | Segments::LEFT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE,
            );
        }
        3 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14953, 14973, (0, 0), (0, 16), (16, 16)),
                CurveSprite::new(14958, 14978, (0, 0), (16, 16), (16, 16)),
                CurveSprite::new(14963, 14983, (0, 0), (16, 0), (16, 16)),
                CurveSprite::new(14948, 14968, (0, 0), (0, 0), (16, 16)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::RIGHT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        5 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14952, 14972, (0, 0), (16, 0), (16, 32)),
                CurveSprite::new(14957, 14977, (0, 0), (0, 0), (16, 32)),
                CurveSprite::new(14962, 14982, (0, 0), (0, 0), (16, 32)),
                CurveSprite::new(14947, 14967, (0, 0), (16, 0), (16, 32)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::LEFT_CORNER
                    | Segments::BOTTOM_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        6 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14951, 14971, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14956, 14976, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14961, 14981, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14946, 14966, (0, 0), (6, 0), (20, 32)).lifted(8),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 7, height);
            match direction {
                2 => session.push_tunnel_right(height + 8, TUNNEL_GROUP, TunnelSubType::Flat),
                3 => session.push_tunnel_left(height + 8, TUNNEL_GROUP, TunnelSubType::Flat),
                _ => {}
            }
            block_segments(
                session,
                direction,
                Segments::BOTTOM_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        7 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14950, 14970, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14955, 14975, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14960, 14980, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14965, 14985, (0, 0), (6, 0), (20, 32)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 1, height);
            match direction {
                0 => session.push_tunnel_right(height, TUNNEL_GROUP, TunnelSubType::Flat),
                1 => session.push_tunnel_left(height, TUNNEL_GROUP, TunnelSubType::Flat),
                _ => {}
            }
            block_segments(
                session,
                direction,
                Segments::LEFT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        9 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14949, 14969, (0, 0), (16, 0), (16, 32)),
                CurveSprite::new(14954, 14974, (0, 0), (0, 0), (16, 32)),
                CurveSprite::new(14959, 14979, (0, 0), (0, 0), (16, 32)),
                CurveSprite::new(14964, 14984, (0, 0), (16, 0), (16, 32)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::LEFT_CORNER
                    | Segments::BOTTOM_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        10 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14948, 14968, (0, 0), (0, 0), (16, 16)),
                CurveSprite::new(14953, 14973, (0, 0), (16, 0), (16, 16)),
                CurveSprite::new(14958, 14978, (0, 0), (16, 16), (16, 16)),
                CurveSprite::new(14963, 14983, (0, 0), (0, 16), (16, 16)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::TOP_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::TOP_RIGHT_SIDE,
            );
        }
        12 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14947, 14967, (0, 0), (0, 16), (32, 16)),
                CurveSprite::new(14952, 14972, (0, 0), (0, 16), (32, 16)),
                CurveSprite::new(14957, 14977, (0, 0), (0, 0), (32, 16)),
                CurveSprite::new(14962, 14982, (0, 0), (0, 0), (32, 16)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::RIGHT_CORNER
                    | Segments::BOTTOM_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        13 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14946, 14966, (0, 0), (0, 6), (32, 20)).lifted(8),
                CurveSprite::new(14951, 14971, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14956, 14976, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14961, 14981, (0, 0), (0, 6), (32, 20)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 7, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height + 8, TUNNEL_GROUP, TunnelSubType::Flat);
            }
            block_segments(
                session,
                direction,
                Segments::RIGHT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        _ => {}
    }
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

#[allow(clippy::too_many_lines)]
fn right_half_banked_helix_up_large(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: SupportType,
) {
    let d = (direction & 3) as usize;
    match track_sequence {
        0 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14906, 14926, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14911, 14931, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14916, 14936, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14921, 14941, (0, 0), (0, 6), (32, 20)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 1, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
            }
            block_segments(
                session,
                direction,
                Segments::RIGHT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        2 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14907, 14927, (0, 0), (0, 16), (32, 16)),
                CurveSprite::new(14912, 14932, (0, 0), (0, 16), (32, 16)),
                CurveSprite::new(14917, 14937, (0, 0), (0, 0), (32, 16)),
                CurveSprite::new(14922, 14942, (0, 0), (0, 0), (32, 16)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::RIGHT_CORNER
                    | Segments::BOTTOM_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        3 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14908, 14928, (0, 0), (0, 0), (16, 16)),
                CurveSprite::new(14913, 14933, (0, 0), (16, 0), (16, 16)),
                CurveSprite::new(14918, 14938, (0, 0), (16, 16), (16, 16)),
                CurveSprite::new(14923, 14943, (0, 0), (0, 16), (16, 16)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::TOP_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::TOP_RIGHT_SIDE,
            );
        }
        5 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14909, 14929, (0, 0), (16, 0), (16, 32)),
                CurveSprite::new(14914, 14934, (0, 0), (0, 0), (16, 32)),
                CurveSprite::new(14919, 14939, (0, 0), (0, 0), (16, 32)),
                CurveSprite::new(14924, 14944, (0, 0), (16, 0), (16, 32)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::LEFT_CORNER
                    | Segments::BOTTOM_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        6 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14910, 14930, (0, 0), (6, 0), (20, 32)).lifted(8),
                CurveSprite::new(14915, 14935, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14920, 14940, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14925, 14945, (0, 0), (6, 0), (20, 32)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 7, height);
            match direction {
                0 => session.push_tunnel_right(height + 8, TUNNEL_GROUP, TunnelSubType::Flat),
                1 => session.push_tunnel_left(height + 8, TUNNEL_GROUP, TunnelSubType::Flat),
                _ => {}
            }
            block_segments(
                session,
                direction,
                Segments::LEFT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        7 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14911, 14931, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14916, 14936, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14921, 14941, (0, 0), (6, 0), (20, 32)),
                CurveSprite::new(14906, 14926, (0, 0), (6, 0), (20, 32)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 1, height);
            match direction {
                2 => session.push_tunnel_right(height, TUNNEL_GROUP, TunnelSubType::Flat),
                3 => session.push_tunnel_left(height, TUNNEL_GROUP, TunnelSubType::Flat),
                _ => {}
            }
            block_segments(
                session,
                direction,
                Segments::BOTTOM_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        9 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14912, 14932, (0, 0), (16, 0), (16, 32)),
                CurveSprite::new(14917, 14937, (0, 0), (0, 0), (16, 32)),
                CurveSprite::new(14922, 14942, (0, 0), (0, 0), (16, 32)),
                CurveSprite::new(14907, 14927, (0, 0), (16, 0), (16, 32)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::LEFT_CORNER
                    | Segments::BOTTOM_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        10 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14913, 14933, (0, 0), (0, 16), (16, 16)),
                CurveSprite::new(14918, 14938, (0, 0), (16, 16), (16, 16)),
                CurveSprite::new(14923, 14943, (0, 0), (16, 0), (16, 16)),
                CurveSprite::new(14908, 14928, (0, 0), (0, 0), (16, 16)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::RIGHT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_RIGHT_SIDE,
            );
        }
        12 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14914, 14934, (0, 0), (0, 0), (32, 16)),
                CurveSprite::new(14919, 14939, (0, 0), (0, 0), (32, 16)),
                CurveSprite::new(14924, 14944, (0, 0), (0, 16), (32, 16)),
                CurveSprite::new(14909, 14929, (0, 0), (0, 16), (32, 16)),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            block_segments(
                session,
                direction,
                Segments::TOP_CORNER
                    | Segments::LEFT_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE,
            );
        }
        13 => {
            const SPRITES: [CurveSprite; 4] = [
                CurveSprite::new(14915, 14935, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14920, 14940, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14925, 14945, (0, 0), (0, 6), (32, 20)),
                CurveSprite::new(14910, 14930, (0, 0), (0, 6), (32, 20)).lifted(8),
            ];
            paint_curve(session, direction, height, &SPRITES[d]);
            centre_support(session, support_type, 7, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height + 8, TUNNEL_GROUP, TunnelSubType::Flat);
            }
            block_segments(
                session,
                direction,
                Segments::TOP_CORNER
                    | Segments::CENTRE
                    | Segments::TOP_LEFT_SIDE
                    | Segments::TOP_RIGHT_SIDE
                    | Segments::BOTTOM_LEFT_SIDE,
            );
        }
        _ => {}
    }
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

fn left_half_banked_helix_down_large(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    let (mut track_sequence, mut direction) = (track_sequence, direction);
    if track_sequence >= 7 {
        track_sequence -= 7;
        direction = direction.wrapping_sub(1) & 3;
    }
    let Some(&remapped) = TURN_5_SEQUENCE_MAP.get(track_sequence as usize) else {
        return;
    };
    right_half_banked_helix_up_large(
        session,
        ride,
        remapped,
        (direction + 1) & 3,
        height,
        track_element,
        support_type,
    );
}

fn right_half_banked_helix_down_large(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    let (mut track_sequence, mut direction) = (track_sequence, direction);
    if track_sequence >= 7 {
        track_sequence -= 7;
        direction = (direction + 1) & 3;
    }
    let Some(&remapped) = TURN_5_SEQUENCE_MAP.get(track_sequence as usize) else {
        return;
    };
    left_half_banked_helix_up_large(
        session,
        ride,
        remapped,
        direction.wrapping_sub(1) & 3,
        height,
        track_element,
        support_type,
    );
}

fn brakes(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: SupportType,
) {
    const IMAGES: [[u32; 2]; 2] = [[14582, 14584], [14583, 14585]];

    let [base, front] = IMAGES[(direction & 1) as usize];
    paint_straight(session, direction, height, base, front, 26);
    alternating_centre_support(session, support_type, 0, height);
    session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
    block_segments(session, direction, blocked_segments::STRAIGHT_FLAT);
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

fn block_brakes(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    /// Trough sprites indexed by `[direction][brake closed]`.
    const BASES: [[u32; 2]; 4] = [
        [14586, 14588],
        [14587, 14589],
        [14586, 14588],
        [14587, 14589],
    ];
    const FRONTS: [u32; 2] = [14590, 14591];

    let base = BASES[(direction & 3) as usize][usize::from(track_element.is_brake_closed())];
    let front = FRONTS[(direction & 1) as usize];
    paint_straight(session, direction, height, base, front, 26);
    alternating_centre_support(session, support_type, 0, height);
    session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
    block_segments(session, direction, blocked_segments::STRAIGHT_FLAT);
    session.set_general_support_height(height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

fn on_ride_photo(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: SupportType,
) {
    const TRACK_IMAGES: [[u32; 2]; 2] = [[14572, 14574], [14573, 14575]];

    onride_photo_platform_paint(session, direction, height, support_type.metal);
    let colours = session.track_colours();
    for image in TRACK_IMAGES[(direction & 1) as usize] {
        session.add_image_as_parent_rotated(
            direction,
            colours.with_index(image),
            CoordsXYZ::new(0, 0, height),
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, height + 3), CoordsXYZ::new(32, 20, 0)),
        );
    }
    onride_photo_paint(session, direction, track_element, height);
    session.push_tunnel_rotated(direction, height, TunnelGroup::Square, TunnelSubType::Flat);
}

/// Resolve the painter for `track_type`.
///
/// Unsupported piece types resolve to [`track_paint_function_dummy`].
#[must_use]
pub fn paint_function(track_type: TrackElemType) -> TrackPaintFunction {
    match track_type {
        TrackElemType::Flat => flat,
        TrackElemType::EndStation | TrackElemType::BeginStation | TrackElemType::MiddleStation => {
            station
        }
        TrackElemType::Up25 => up_25,
        TrackElemType::FlatToUp25 => flat_to_up_25,
        TrackElemType::Up25ToFlat => up_25_to_flat,
        TrackElemType::Down25 => down_25,
        TrackElemType::FlatToDown25 => flat_to_down_25,
        TrackElemType::Down25ToFlat => down_25_to_flat,
        TrackElemType::LeftQuarterTurn5Tiles => left_quarter_turn_5,
        TrackElemType::RightQuarterTurn5Tiles => right_quarter_turn_5,
        TrackElemType::FlatToLeftBank => flat_to_left_bank,
        TrackElemType::FlatToRightBank => flat_to_right_bank,
        TrackElemType::LeftBankToFlat => left_bank_to_flat,
        TrackElemType::RightBankToFlat => right_bank_to_flat,
        TrackElemType::BankedLeftQuarterTurn5Tiles => banked_left_quarter_turn_5,
        TrackElemType::BankedRightQuarterTurn5Tiles => banked_right_quarter_turn_5,
        TrackElemType::LeftBankToUp25 => left_bank_to_up_25,
        TrackElemType::RightBankToUp25 => right_bank_to_up_25,
        TrackElemType::Up25ToLeftBank => up_25_to_left_bank,
        TrackElemType::Up25ToRightBank => up_25_to_right_bank,
        TrackElemType::LeftBankToDown25 => left_bank_to_down_25,
        TrackElemType::RightBankToDown25 => right_bank_to_down_25,
        TrackElemType::Down25ToLeftBank => down_25_to_left_bank,
        TrackElemType::Down25ToRightBank => down_25_to_right_bank,
        TrackElemType::LeftBank => left_bank,
        TrackElemType::RightBank => right_bank,
        TrackElemType::SBendLeft => s_bend_left,
        TrackElemType::SBendRight => s_bend_right,
        TrackElemType::LeftQuarterTurn3Tiles => left_quarter_turn_3,
        TrackElemType::RightQuarterTurn3Tiles => right_quarter_turn_3,
        TrackElemType::LeftBankedQuarterTurn3Tiles => left_banked_quarter_turn_3,
        TrackElemType::RightBankedQuarterTurn3Tiles => right_banked_quarter_turn_3,
        TrackElemType::LeftHalfBankedHelixUpSmall => left_half_banked_helix_up_small,
        TrackElemType::RightHalfBankedHelixUpSmall => right_half_banked_helix_up_small,
        TrackElemType::LeftHalfBankedHelixDownSmall => left_half_banked_helix_down_small,
        TrackElemType::RightHalfBankedHelixDownSmall => right_half_banked_helix_down_small,
        TrackElemType::LeftHalfBankedHelixUpLarge => left_half_banked_helix_up_large,
        TrackElemType::RightHalfBankedHelixUpLarge => right_half_banked_helix_up_large,
        TrackElemType::LeftHalfBankedHelixDownLarge => left_half_banked_helix_down_large,
        TrackElemType::RightHalfBankedHelixDownLarge => right_half_banked_helix_down_large,
        TrackElemType::Brakes => brakes,
        TrackElemType::OnRidePhoto => on_ride_photo,
        TrackElemType::BlockBrakes => block_brakes,
        _ => track_paint_function_dummy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::coords::CoordsXY;
    use crate::paint::{PaintStruct, TunnelSide};

    fn paint_at(
        track_type: TrackElemType,
        track_sequence: u8,
        direction: u8,
        element: TrackElement,
    ) -> PaintSession {
        let mut session = PaintSession::new(CoordsXY::new(0, 0));
        let ride = Ride::default();
        paint_function(track_type)(
            &mut session,
            &ride,
            track_sequence,
            direction,
            16,
            &element,
            SupportType::TUBES,
        );
        session
    }

    fn paint(track_type: TrackElemType, track_sequence: u8, direction: u8) -> PaintSession {
        paint_at(track_type, track_sequence, direction, TrackElement::default())
    }

    fn images(session: &PaintSession) -> Vec<u32> {
        session.paint_structs().iter().map(|p| p.image.index()).collect()
    }

    #[test]
    fn flat_paints_trough_and_front_wall() {
        let session = paint(TrackElemType::Flat, 0, 0);
        assert_eq!(images(&session), vec![14572, 14574]);

        let front = &session.paint_structs()[1];
        assert_eq!(front.bound_box.offset.y, 27);
        assert_eq!(front.bound_box.length, CoordsXYZ::new(32, 1, 26));

        let session = paint(TrackElemType::Flat, 0, 1);
        assert_eq!(images(&session), vec![14573, 14575]);
    }

    #[test]
    fn flat_swaps_to_chain_sprites() {
        let session = paint_at(
            TrackElemType::Flat,
            0,
            0,
            TrackElement::default().with_chain(),
        );
        assert_eq!(images(&session), vec![14576, 14578]);
    }

    #[test]
    fn up_25_tunnels_follow_slope_ends() {
        let session = paint(TrackElemType::Up25, 0, 0);
        let tunnel = session.tunnels()[0];
        assert_eq!(tunnel.side, TunnelSide::Left);
        assert_eq!(tunnel.height, 16 - 8);
        assert_eq!(tunnel.sub_type, TunnelSubType::SlopeStart);
        assert_eq!(session.general_support_height(), 16 + 56);

        let session = paint(TrackElemType::Up25, 0, 1);
        let tunnel = session.tunnels()[0];
        assert_eq!(tunnel.side, TunnelSide::Right);
        assert_eq!(tunnel.height, 16 + 8);
        assert_eq!(tunnel.sub_type, TunnelSubType::SlopeEnd);
    }

    #[test]
    fn down_slopes_mirror_their_up_pieces() {
        let down = paint(TrackElemType::Down25, 0, 0);
        let up = paint(TrackElemType::Up25, 0, 2);
        assert_eq!(down.paint_structs(), up.paint_structs());
        assert_eq!(down.tunnels(), up.tunnels());

        let down = paint(TrackElemType::FlatToDown25, 0, 3);
        let up = paint(TrackElemType::Up25ToFlat, 0, 1);
        assert_eq!(down.paint_structs(), up.paint_structs());
    }

    #[test]
    fn right_turn_5_remaps_onto_left_table() {
        let right = paint(TrackElemType::RightQuarterTurn5Tiles, 6, 1);
        let left = paint(TrackElemType::LeftQuarterTurn5Tiles, 0, 0);
        assert_eq!(right.paint_structs(), left.paint_structs());
        assert_eq!(right.tunnels(), left.tunnels());
        assert_eq!(right.segment_supports(), left.segment_supports());
    }

    #[test]
    fn helix_entry_tiles_raise_the_trough_box() {
        let session = paint(TrackElemType::LeftHalfBankedHelixUpSmall, 0, 3);
        let trough = &session.paint_structs()[0];
        assert_eq!(trough.image.index(), 14884);
        // Rotation 3 swaps x/y; the lift keeps the box 8 above track height.
        assert_eq!(trough.bound_box.offset, CoordsXYZ::new(6, 0, 16 + 8));
    }

    #[test]
    fn helix_down_remaps_onto_opposite_up_helix() {
        let down = paint(TrackElemType::LeftHalfBankedHelixDownSmall, 0, 2);
        let up = paint(TrackElemType::RightHalfBankedHelixUpSmall, 3, 3);
        assert_eq!(down.paint_structs(), up.paint_structs());
        assert_eq!(down.tunnels(), up.tunnels());

        let down = paint(TrackElemType::RightHalfBankedHelixDownLarge, 7, 0);
        let up = paint(TrackElemType::LeftHalfBankedHelixUpLarge, 6, 0);
        assert_eq!(down.paint_structs(), up.paint_structs());
    }

    #[test]
    fn turn_5_mid_tiles_anchor_sprites_at_their_box_corners() {
        let session = paint(TrackElemType::LeftQuarterTurn5Tiles, 3, 0);
        let trough = &session.paint_structs()[0];
        assert_eq!(trough.image.index(), 14705);
        assert_eq!(trough.offset, CoordsXYZ::new(0, 16, 16));
        assert_eq!(trough.bound_box.offset, CoordsXYZ::new(0, 16, 16));

        let session = paint(TrackElemType::LeftQuarterTurn5Tiles, 5, 0);
        let trough = &session.paint_structs()[0];
        assert_eq!(trough.image.index(), 14704);
        assert_eq!(trough.offset, CoordsXYZ::new(16, 0, 16));

        // The mirrored right turn lands on the same anchors.
        let right = paint(TrackElemType::RightQuarterTurn5Tiles, 3, 1);
        assert_eq!(right.paint_structs()[0].offset, CoordsXYZ::new(0, 16, 16));
    }

    #[test]
    fn left_turn_5_exit_tile_widens_front_box_facing_north() {
        let session = paint(TrackElemType::LeftQuarterTurn5Tiles, 6, 3);
        let front = &session.paint_structs()[1];
        // Rotation 3 swaps x/y, so the widened 30x32 box reads as 32x30.
        assert_eq!(front.bound_box.length, CoordsXYZ::new(32, 30, 0));
        assert_eq!(session.tunnels()[0].side, TunnelSide::Left);
    }

    #[test]
    fn station_blocks_every_segment_and_cuts_square_portal() {
        let session = paint(TrackElemType::BeginStation, 0, 0);
        assert!(session
            .segment_supports()
            .iter()
            .all(|s| s.height == SEGMENT_HEIGHT_BLOCKED));
        assert_eq!(session.tunnels()[0].group, TunnelGroup::Square);
        assert_eq!(session.support_placements().len(), 2);
    }

    #[test]
    fn block_brake_sprite_tracks_closed_state() {
        let open = paint(TrackElemType::BlockBrakes, 0, 0);
        assert_eq!(images(&open)[0], 14586);

        let closed = paint_at(
            TrackElemType::BlockBrakes,
            0,
            0,
            TrackElement::default().with_brake_closed(),
        );
        assert_eq!(images(&closed)[0], 14588);
    }

    #[test]
    fn photo_section_layers_platform_track_and_camera() {
        let session = paint(TrackElemType::OnRidePhoto, 0, 0);
        let indices = images(&session);
        // Platform slab, two track sprites, two sign posts, camera.
        assert_eq!(indices.len(), 6);
        assert_eq!(indices[1], 14572);
        assert_eq!(indices[2], 14574);
        assert_eq!(session.tunnels()[0].group, TunnelGroup::Square);
        assert_eq!(session.general_support_height(), 16 + 48);
    }

    #[test]
    fn s_bend_middle_tiles_lean_on_edge_supports() {
        let session = paint(TrackElemType::SBendLeft, 1, 0);
        let support = session.support_placements()[0];
        assert_eq!(support.place, MetalSupportPlace::TopLeftSide);
        assert_eq!(support.special, 0);

        let session = paint(TrackElemType::SBendRight, 2, 3);
        let support = session.support_placements()[0];
        assert_eq!(support.place, MetalSupportPlace::BottomLeftSide);
    }

    #[test]
    fn unsupported_pieces_resolve_to_dummy() {
        for track_type in [
            TrackElemType::LeftVerticalLoop,
            TrackElemType::HalfLoopUp,
            TrackElemType::DiagFlat,
            TrackElemType::Up60,
        ] {
            let session = paint(track_type, 0, 0);
            assert!(session.paint_structs().is_empty());
            assert!(session.tunnels().is_empty());
            assert_eq!(session.general_support_height(), 0);
        }
    }

    #[test]
    fn every_supported_piece_reserves_clearance() {
        let supported = [
            TrackElemType::Flat,
            TrackElemType::EndStation,
            TrackElemType::Up25,
            TrackElemType::FlatToUp25,
            TrackElemType::Up25ToFlat,
            TrackElemType::Down25,
            TrackElemType::FlatToDown25,
            TrackElemType::Down25ToFlat,
            TrackElemType::LeftQuarterTurn5Tiles,
            TrackElemType::RightQuarterTurn5Tiles,
            TrackElemType::FlatToLeftBank,
            TrackElemType::FlatToRightBank,
            TrackElemType::LeftBankToFlat,
            TrackElemType::RightBankToFlat,
            TrackElemType::BankedLeftQuarterTurn5Tiles,
            TrackElemType::BankedRightQuarterTurn5Tiles,
            TrackElemType::LeftBankToUp25,
            TrackElemType::RightBankToUp25,
            TrackElemType::Up25ToLeftBank,
            TrackElemType::Up25ToRightBank,
            TrackElemType::LeftBankToDown25,
            TrackElemType::RightBankToDown25,
            TrackElemType::Down25ToLeftBank,
            TrackElemType::Down25ToRightBank,
            TrackElemType::LeftBank,
            TrackElemType::RightBank,
            TrackElemType::SBendLeft,
            TrackElemType::SBendRight,
            TrackElemType::LeftQuarterTurn3Tiles,
            TrackElemType::RightQuarterTurn3Tiles,
            TrackElemType::LeftBankedQuarterTurn3Tiles,
            TrackElemType::RightBankedQuarterTurn3Tiles,
            TrackElemType::LeftHalfBankedHelixUpSmall,
            TrackElemType::RightHalfBankedHelixUpSmall,
            TrackElemType::LeftHalfBankedHelixDownSmall,
            TrackElemType::RightHalfBankedHelixDownSmall,
            TrackElemType::LeftHalfBankedHelixUpLarge,
            TrackElemType::RightHalfBankedHelixUpLarge,
            TrackElemType::LeftHalfBankedHelixDownLarge,
            TrackElemType::RightHalfBankedHelixDownLarge,
            TrackElemType::Brakes,
            TrackElemType::OnRidePhoto,
            TrackElemType::BlockBrakes,
        ];
        for track_type in supported {
            let session = paint(track_type, 0, 0);
            assert!(
                session.general_support_height() > 0,
                "{track_type:?} left no clearance"
            );
            assert!(
                !session.paint_structs().is_empty(),
                "{track_type:?} painted nothing"
            );
        }
    }

    #[test]
    fn curve_tiles_between_painted_sequences_only_reserve_clearance() {
        let session = paint(TrackElemType::LeftQuarterTurn5Tiles, 1, 0);
        assert!(session.paint_structs().is_empty());
        assert_eq!(
            session.general_support_height(),
            16 + DEFAULT_GENERAL_SUPPORT_HEIGHT
        );
    }

    #[test]
    fn straight_supports_respect_alternating_tiles() {
        let mut session = PaintSession::new(CoordsXY::new(32, 0));
        let ride = Ride::default();
        paint_function(TrackElemType::Flat)(
            &mut session,
            &ride,
            0,
            0,
            16,
            &TrackElement::default(),
            SupportType::TUBES,
        );
        assert!(session.support_placements().is_empty());
    }

    #[allow(clippy::needless_pass_by_value)]
    fn assert_same_draw(a: PaintSession, b: PaintSession) {
        let to_tuple = |p: &PaintStruct| (p.image, p.offset, p.bound_box);
        assert_eq!(
            a.paint_structs().iter().map(to_tuple).collect::<Vec<_>>(),
            b.paint_structs().iter().map(to_tuple).collect::<Vec<_>>()
        );
    }

    #[test]
    fn right_bank_reuses_left_bank_sprites() {
        assert_same_draw(
            paint(TrackElemType::RightBank, 0, 1),
            paint(TrackElemType::LeftBank, 0, 3),
        );
    }
}
