//! # Ride model
//!
//! The slice of ride state the track painters consult: the track-piece
//! enumerators, per-placed-element flags, the owning ride descriptor and the
//! support style threaded through the dispatch.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::paint::supports::MetalSupportType;

/// Number of viewing rotations of the isometric map.
pub const NUM_ORTHOGONAL_DIRECTIONS: u8 = 4;

/// Enumerated identifier for one piece of track geometry.
///
/// The catalogue is shared by every ride style; each style's painter
/// supports a subset and resolves the rest to the dummy painter. Names are
/// used verbatim in layout files via serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum TrackElemType {
    Flat,
    EndStation,
    BeginStation,
    MiddleStation,
    Up25,
    Up60,
    FlatToUp25,
    Up25ToUp60,
    Up60ToUp25,
    Up25ToFlat,
    Down25,
    Down60,
    FlatToDown25,
    Down25ToDown60,
    Down60ToDown25,
    Down25ToFlat,
    LeftQuarterTurn5Tiles,
    RightQuarterTurn5Tiles,
    FlatToLeftBank,
    FlatToRightBank,
    LeftBankToFlat,
    RightBankToFlat,
    BankedLeftQuarterTurn5Tiles,
    BankedRightQuarterTurn5Tiles,
    LeftBankToUp25,
    RightBankToUp25,
    Up25ToLeftBank,
    Up25ToRightBank,
    LeftBankToDown25,
    RightBankToDown25,
    Down25ToLeftBank,
    Down25ToRightBank,
    LeftBank,
    RightBank,
    LeftQuarterTurn5TilesUp25,
    RightQuarterTurn5TilesUp25,
    LeftQuarterTurn5TilesDown25,
    RightQuarterTurn5TilesDown25,
    SBendLeft,
    SBendRight,
    LeftVerticalLoop,
    RightVerticalLoop,
    LeftQuarterTurn3Tiles,
    RightQuarterTurn3Tiles,
    LeftBankedQuarterTurn3Tiles,
    RightBankedQuarterTurn3Tiles,
    LeftQuarterTurn3TilesUp25,
    RightQuarterTurn3TilesUp25,
    LeftQuarterTurn3TilesDown25,
    RightQuarterTurn3TilesDown25,
    LeftQuarterTurn1Tile,
    RightQuarterTurn1Tile,
    LeftTwistDownToUp,
    RightTwistDownToUp,
    LeftTwistUpToDown,
    RightTwistUpToDown,
    HalfLoopUp,
    HalfLoopDown,
    LeftCorkscrewUp,
    RightCorkscrewUp,
    LeftCorkscrewDown,
    RightCorkscrewDown,
    FlatToUp60,
    Up60ToFlat,
    FlatToDown60,
    Down60ToFlat,
    TowerBase,
    TowerSection,
    LeftHalfBankedHelixUpSmall,
    RightHalfBankedHelixUpSmall,
    LeftHalfBankedHelixDownSmall,
    RightHalfBankedHelixDownSmall,
    LeftHalfBankedHelixUpLarge,
    RightHalfBankedHelixUpLarge,
    LeftHalfBankedHelixDownLarge,
    RightHalfBankedHelixDownLarge,
    LeftQuarterTurn1TileUp60,
    RightQuarterTurn1TileUp60,
    LeftQuarterTurn1TileDown60,
    RightQuarterTurn1TileDown60,
    Brakes,
    Booster,
    Maze,
    LeftQuarterBankedHelixLargeUp,
    RightQuarterBankedHelixLargeUp,
    LeftQuarterBankedHelixLargeDown,
    RightQuarterBankedHelixLargeDown,
    LeftQuarterHelixLargeUp,
    RightQuarterHelixLargeUp,
    LeftQuarterHelixLargeDown,
    RightQuarterHelixLargeDown,
    Up25LeftBanked,
    Up25RightBanked,
    Waterfall,
    Rapids,
    OnRidePhoto,
    Down25LeftBanked,
    Down25RightBanked,
    Watersplash,
    FlatToUp60LongBase,
    Up60ToFlatLongBase,
    Whirlpool,
    Down60ToFlatLongBase,
    FlatToDown60LongBase,
    CableLiftHill,
    ReverseFreefallSlope,
    ReverseFreefallVertical,
    Up90,
    Down90,
    Up60ToUp90,
    Down90ToDown60,
    Up90ToUp60,
    Down60ToDown90,
    BrakeForDrop,
    LeftEighthToDiag,
    RightEighthToDiag,
    LeftEighthToOrthogonal,
    RightEighthToOrthogonal,
    LeftEighthBankToDiag,
    RightEighthBankToDiag,
    LeftEighthBankToOrthogonal,
    RightEighthBankToOrthogonal,
    DiagFlat,
    DiagUp25,
    DiagUp60,
    DiagFlatToUp25,
    DiagUp25ToUp60,
    DiagUp60ToUp25,
    DiagUp25ToFlat,
    DiagDown25,
    DiagDown60,
    DiagFlatToDown25,
    DiagDown25ToDown60,
    DiagDown60ToDown25,
    DiagDown25ToFlat,
    DiagFlatToLeftBank,
    DiagFlatToRightBank,
    DiagLeftBankToFlat,
    DiagRightBankToFlat,
    DiagLeftBankToUp25,
    DiagRightBankToUp25,
    DiagUp25ToLeftBank,
    DiagUp25ToRightBank,
    DiagLeftBankToDown25,
    DiagRightBankToDown25,
    DiagDown25ToLeftBank,
    DiagDown25ToRightBank,
    DiagLeftBank,
    DiagRightBank,
    LogFlumeReverser,
    SpinningTunnel,
    BlockBrakes,
    DiagBrakes,
    DiagBlockBrakes,
}

bitflags! {
    /// Per-placed-element state flags the painters read.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TrackElementFlags: u8 {
        /// The piece carries a chain lift.
        const CHAIN_LIFT = 1 << 0;
        /// Brake piece currently closed.
        const BRAKE_CLOSED = 1 << 1;
        /// On-ride photo camera currently flashing.
        const TAKING_PHOTO = 1 << 2;
    }
}

/// State of one placed track element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackElement {
    flags: TrackElementFlags,
}

impl TrackElement {
    /// Element with the given flags.
    #[must_use]
    pub const fn new(flags: TrackElementFlags) -> Self {
        Self { flags }
    }

    /// Same element with a chain lift fitted.
    #[must_use]
    pub const fn with_chain(self) -> Self {
        Self {
            flags: self.flags.union(TrackElementFlags::CHAIN_LIFT),
        }
    }

    /// Same element with the brake closed.
    #[must_use]
    pub const fn with_brake_closed(self) -> Self {
        Self {
            flags: self.flags.union(TrackElementFlags::BRAKE_CLOSED),
        }
    }

    /// Whether the piece carries a chain lift.
    #[must_use]
    pub const fn has_chain(self) -> bool {
        self.flags.contains(TrackElementFlags::CHAIN_LIFT)
    }

    /// Whether a brake piece is currently closed.
    #[must_use]
    pub const fn is_brake_closed(self) -> bool {
        self.flags.contains(TrackElementFlags::BRAKE_CLOSED)
    }

    /// Whether the on-ride camera is mid-flash.
    #[must_use]
    pub const fn is_taking_photo(self) -> bool {
        self.flags.contains(TrackElementFlags::TAKING_PHOTO)
    }
}

/// Minimal descriptor of the ride that owns the painted element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ride {
    /// Engine-wide ride identifier.
    pub id: u16,
}

/// Support style descriptor handed through the dispatch to every painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportType {
    /// Metal pole style the ride uses.
    pub metal: MetalSupportType,
}

impl SupportType {
    /// Round tube supports, the bobsleigh default.
    pub const TUBES: Self = Self {
        metal: MetalSupportType::Tubes,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_flag_builders() {
        let e = TrackElement::default().with_chain();
        assert!(e.has_chain());
        assert!(!e.is_brake_closed());

        let e = e.with_brake_closed();
        assert!(e.is_brake_closed());
    }

    #[test]
    fn elem_type_names_round_trip_through_serde() {
        let ron = ron::to_string(&TrackElemType::LeftHalfBankedHelixUpSmall).unwrap();
        assert_eq!(ron, "LeftHalfBankedHelixUpSmall");
        let back: TrackElemType = ron::from_str(&ron).unwrap();
        assert_eq!(back, TrackElemType::LeftHalfBankedHelixUpSmall);
    }
}
