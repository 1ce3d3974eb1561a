//! # Paint session
//!
//! Per-tile recording surface for the isometric painter. Track painters call
//! into a [`PaintSession`] with literal sprite offsets and bounding boxes;
//! the session records draw calls, tunnel cutaways, per-segment support
//! ceilings and the general support clearance for the tile.
//!
//! The session deliberately does not rasterise, sort or clip anything. The
//! generic painter that owns the frame consumes the recorded lists; tests
//! inspect them directly.

pub mod segment;
pub mod supports;
pub mod track_util;

pub use segment::{blocked_segments, Segments};

use crate::foundation::coords::{BoundBoxXYZ, CoordsXY, CoordsXYZ};
use supports::SupportPlacement;

/// Clearance the painter reserves above an ordinary piece of track.
pub const DEFAULT_GENERAL_SUPPORT_HEIGHT: i32 = 32;

/// Per-segment support height meaning "blocked, nothing may be built here".
pub const SEGMENT_HEIGHT_BLOCKED: u16 = 0xFFFF;

/// A sprite reference combined with its remap colours.
///
/// Track sprites are recoloured at draw time by palette remap; the painter
/// keeps one base `ImageId` per colour scheme and rebinds the sprite index
/// per draw call via [`ImageId::with_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageId {
    index: u32,
    primary: u8,
    secondary: u8,
}

impl ImageId {
    /// Create an image reference with explicit remap colours.
    #[must_use]
    pub const fn new(index: u32, primary: u8, secondary: u8) -> Self {
        Self {
            index,
            primary,
            secondary,
        }
    }

    /// The same colours bound to a different sprite index.
    #[must_use]
    pub const fn with_index(self, index: u32) -> Self {
        Self { index, ..self }
    }

    /// Sprite index into the loaded graphics.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Primary remap colour.
    #[must_use]
    pub const fn primary(self) -> u8 {
        self.primary
    }

    /// Secondary remap colour.
    #[must_use]
    pub const fn secondary(self) -> u8 {
        self.secondary
    }
}

impl Default for ImageId {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

/// How a recorded sprite participates in occlusion sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStructKind {
    /// Sorted independently against neighbouring tiles.
    Parent,
    /// Attached to the most recent parent and drawn with it.
    Child,
}

/// One recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintStruct {
    /// Sprite plus remap colours.
    pub image: ImageId,
    /// Offset of the sprite within the tile.
    pub offset: CoordsXYZ,
    /// Occlusion volume registered for the sprite.
    pub bound_box: BoundBoxXYZ,
    /// Parent or child in the occlusion tree.
    pub kind: PaintStructKind,
}

/// Family of tunnel portal graphics a ride style uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TunnelGroup {
    /// Round portal used by most tracked rides.
    Standard,
    /// Square portal used by flat-bottomed troughs and stations.
    Square,
}

/// Which slope of portal to cut into the terrain edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TunnelSubType {
    /// Level track meeting the tile edge.
    Flat,
    /// Uphill track leaving through the edge low side.
    SlopeStart,
    /// Uphill track leaving through the edge high side.
    SlopeEnd,
    /// Transition piece meeting the edge between flat and sloped.
    FlatTo25Deg,
    /// Extra-tall portal for steep or stacked track.
    Tall,
}

/// Screen-relative tile edge a tunnel portal is cut into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TunnelSide {
    /// North-east edge as seen at rotation 0.
    Left,
    /// North-west edge as seen at rotation 0.
    Right,
}

/// One recorded tunnel cutaway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tunnel {
    /// Edge the portal is cut into.
    pub side: TunnelSide,
    /// Base height of the portal in game units.
    pub height: i32,
    /// Portal graphic family.
    pub group: TunnelGroup,
    /// Portal slope variant.
    pub sub_type: TunnelSubType,
}

/// Support ceiling recorded for one occlusion segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentSupport {
    /// Height limit, or [`SEGMENT_HEIGHT_BLOCKED`].
    pub height: u16,
    /// Slope flags below the limit.
    pub slope: u8,
}

impl Default for SegmentSupport {
    fn default() -> Self {
        Self { height: 0, slope: 0 }
    }
}

/// Recording surface for painting a single tile of a ride.
///
/// Owned by the caller for the duration of one tile visit; every recorded
/// list is reset by constructing a fresh session.
#[derive(Debug, Clone)]
pub struct PaintSession {
    map_position: CoordsXY,
    track_colours: ImageId,
    support_colours: ImageId,
    misc_colours: ImageId,
    paint_structs: Vec<PaintStruct>,
    tunnels: Vec<Tunnel>,
    support_placements: Vec<SupportPlacement>,
    segment_supports: [SegmentSupport; 9],
    general_support_height: i32,
}

impl PaintSession {
    /// Create a session for the tile at `map_position` with default colours.
    #[must_use]
    pub fn new(map_position: CoordsXY) -> Self {
        Self {
            map_position,
            track_colours: ImageId::default(),
            support_colours: ImageId::default(),
            misc_colours: ImageId::default(),
            paint_structs: Vec::new(),
            tunnels: Vec::new(),
            support_placements: Vec::new(),
            segment_supports: [SegmentSupport::default(); 9],
            general_support_height: 0,
        }
    }

    /// Replace the three colour schemes used for recolouring sprites.
    pub fn set_colours(&mut self, track: ImageId, support: ImageId, misc: ImageId) {
        self.track_colours = track;
        self.support_colours = support;
        self.misc_colours = misc;
    }

    /// Map position of the tile being painted.
    #[must_use]
    pub const fn map_position(&self) -> CoordsXY {
        self.map_position
    }

    /// Base colours for track sprites.
    #[must_use]
    pub const fn track_colours(&self) -> ImageId {
        self.track_colours
    }

    /// Base colours for support sprites.
    #[must_use]
    pub const fn support_colours(&self) -> ImageId {
        self.support_colours
    }

    /// Base colours for miscellaneous sprites (signs, fences, cameras).
    #[must_use]
    pub const fn misc_colours(&self) -> ImageId {
        self.misc_colours
    }

    /// Draw calls recorded so far, in submission order.
    #[must_use]
    pub fn paint_structs(&self) -> &[PaintStruct] {
        &self.paint_structs
    }

    /// Tunnel cutaways recorded so far.
    #[must_use]
    pub fn tunnels(&self) -> &[Tunnel] {
        &self.tunnels
    }

    /// Support placements recorded so far.
    #[must_use]
    pub fn support_placements(&self) -> &[SupportPlacement] {
        &self.support_placements
    }

    /// Support ceilings per occlusion segment, in ring-bit order.
    #[must_use]
    pub const fn segment_supports(&self) -> &[SegmentSupport; 9] {
        &self.segment_supports
    }

    /// Clearance currently reserved above the tile.
    #[must_use]
    pub const fn general_support_height(&self) -> i32 {
        self.general_support_height
    }

    /// Record a sprite sorted independently against its neighbours.
    pub fn add_image_as_parent(
        &mut self,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) {
        self.paint_structs.push(PaintStruct {
            image,
            offset,
            bound_box,
            kind: PaintStructKind::Parent,
        });
    }

    /// Record a sprite attached to the most recent parent.
    pub fn add_image_as_child(
        &mut self,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) {
        self.paint_structs.push(PaintStruct {
            image,
            offset,
            bound_box,
            kind: PaintStructKind::Child,
        });
    }

    /// Record a parent sprite whose offsets were authored at rotation 0 or 2.
    ///
    /// Odd rotations mirror the tile across its diagonal, so offset and
    /// bounding box swap their x/y components.
    pub fn add_image_as_parent_rotated(
        &mut self,
        direction: u8,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) {
        if direction & 1 == 0 {
            self.add_image_as_parent(image, offset, bound_box);
        } else {
            self.add_image_as_parent(image, offset.swapped_xy(), bound_box.swapped_xy());
        }
    }

    /// Child-sprite counterpart of [`Self::add_image_as_parent_rotated`].
    pub fn add_image_as_child_rotated(
        &mut self,
        direction: u8,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) {
        if direction & 1 == 0 {
            self.add_image_as_child(image, offset, bound_box);
        } else {
            self.add_image_as_child(image, offset.swapped_xy(), bound_box.swapped_xy());
        }
    }

    /// Cut a tunnel portal into the screen-left tile edge.
    pub fn push_tunnel_left(&mut self, height: i32, group: TunnelGroup, sub_type: TunnelSubType) {
        self.tunnels.push(Tunnel {
            side: TunnelSide::Left,
            height,
            group,
            sub_type,
        });
    }

    /// Cut a tunnel portal into the screen-right tile edge.
    pub fn push_tunnel_right(&mut self, height: i32, group: TunnelGroup, sub_type: TunnelSubType) {
        self.tunnels.push(Tunnel {
            side: TunnelSide::Right,
            height,
            group,
            sub_type,
        });
    }

    /// Cut a tunnel on the edge a straight piece crosses at this rotation.
    pub fn push_tunnel_rotated(
        &mut self,
        direction: u8,
        height: i32,
        group: TunnelGroup,
        sub_type: TunnelSubType,
    ) {
        if direction & 1 == 0 {
            self.push_tunnel_left(height, group, sub_type);
        } else {
            self.push_tunnel_right(height, group, sub_type);
        }
    }

    /// Set the support ceiling for every segment in `segments`.
    ///
    /// A height of [`SEGMENT_HEIGHT_BLOCKED`] marks the segment blocked and
    /// leaves its recorded slope untouched.
    pub fn set_segment_support_height(&mut self, segments: Segments, height: u16, slope: u8) {
        for (bit, entry) in self.segment_supports.iter_mut().enumerate() {
            if segments.bits() & (1 << bit) != 0 {
                entry.height = height;
                if height != SEGMENT_HEIGHT_BLOCKED {
                    entry.slope = slope;
                }
            }
        }
    }

    /// Raise the clearance reserved above the tile to `height`.
    pub fn set_general_support_height(&mut self, height: i32) {
        self.general_support_height = height;
    }

    pub(crate) fn record_support(&mut self, placement: SupportPlacement) {
        self.support_placements.push(placement);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> PaintSession {
        PaintSession::new(CoordsXY::new(0, 0))
    }

    #[test]
    fn rotated_parent_swaps_offsets_for_odd_directions() {
        let mut s = session();
        let image = ImageId::new(14572, 0, 0);
        let offset = CoordsXYZ::new(0, 0, 16);
        let bb = BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 16), CoordsXYZ::new(32, 20, 2));

        s.add_image_as_parent_rotated(0, image, offset, bb);
        s.add_image_as_parent_rotated(1, image, offset, bb);

        assert_eq!(s.paint_structs()[0].bound_box, bb);
        assert_eq!(s.paint_structs()[1].bound_box, bb.swapped_xy());
        assert_eq!(s.paint_structs()[1].kind, PaintStructKind::Parent);
    }

    #[test]
    fn rotated_tunnel_picks_edge_by_parity() {
        let mut s = session();
        s.push_tunnel_rotated(0, 16, TunnelGroup::Standard, TunnelSubType::Flat);
        s.push_tunnel_rotated(3, 16, TunnelGroup::Standard, TunnelSubType::Flat);

        assert_eq!(s.tunnels()[0].side, TunnelSide::Left);
        assert_eq!(s.tunnels()[1].side, TunnelSide::Right);
    }

    #[test]
    fn blocked_height_preserves_slope() {
        let mut s = session();
        s.set_segment_support_height(Segments::CENTRE, 48, 0x20);
        s.set_segment_support_height(Segments::CENTRE, SEGMENT_HEIGHT_BLOCKED, 0);

        let centre = s.segment_supports()[8];
        assert_eq!(centre.height, SEGMENT_HEIGHT_BLOCKED);
        assert_eq!(centre.slope, 0x20);
    }

    #[test]
    fn with_index_keeps_colours() {
        let base = ImageId::new(0, 3, 7);
        let bound = base.with_index(14584);
        assert_eq!(bound.index(), 14584);
        assert_eq!(bound.primary(), 3);
        assert_eq!(bound.secondary(), 7);
    }
}
