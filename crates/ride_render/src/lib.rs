//! # Ride Render
//!
//! Isometric ride-rendering subsystem for a theme-park simulation.
//!
//! The crate is the sprite-plumbing layer between track data and the
//! isometric painter: given a placed track element, a viewing rotation and a
//! height, it records exactly which pre-rendered sprites to draw, with which
//! 3D bounding boxes, which support poles to place, which tunnel cutaways to
//! open and which occlusion segments the piece blocks.
//!
//! ## Architecture
//!
//! - **Paint session**: a per-tile recorder for draw calls and occlusion /
//!   support / tunnel bookkeeping. It does not rasterise; the generic painter
//!   that consumes the recorded list lives elsewhere in the engine.
//! - **Ride model**: track element enumerators and the per-piece state the
//!   painters consult (chain lift, brake state, photo trigger).
//! - **Track painters**: per-style data modules, one render function per
//!   supported track element, resolved through a dispatch table.
//!
//! ## Quick Start
//!
//! ```rust
//! use ride_render::prelude::*;
//!
//! let mut session = PaintSession::new(CoordsXY::new(0, 0));
//! let ride = Ride::default();
//! let element = TrackElement::default();
//!
//! let paint = bobsleigh::paint_function(TrackElemType::Flat);
//! paint(&mut session, &ride, 0, 0, 16, &element, SupportType::TUBES);
//!
//! assert!(!session.paint_structs().is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod paint;
pub mod ride;
pub mod track;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        foundation::coords::{BoundBoxXYZ, CoordsXY, CoordsXYZ},
        paint::{
            supports::{MetalSupportPlace, MetalSupportType},
            ImageId, PaintSession, TunnelGroup, TunnelSubType,
        },
        ride::{Ride, SupportType, TrackElement, TrackElemType},
        track::{bobsleigh, TrackPaintFunction},
    };
}
