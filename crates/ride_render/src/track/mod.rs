//! # Track painters
//!
//! Per-style data modules mapping track element types to render functions.
//! Each style exposes a `paint_function` factory; the generic ride-painting
//! driver resolves the function once per element and calls it with the
//! sequence index, viewing rotation and height.

pub mod bobsleigh;

use crate::paint::PaintSession;
use crate::ride::{Ride, SupportType, TrackElement};

/// Render function signature shared by every track painter.
///
/// Arguments: session, ride, sequence index (which tile of a multi-tile
/// piece), viewing rotation (0..=3), base height, placed element state,
/// support style.
pub type TrackPaintFunction =
    fn(&mut PaintSession, &Ride, u8, u8, i32, &TrackElement, SupportType);

/// No-op painter every unsupported element type resolves to.
pub fn track_paint_function_dummy(
    _session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    _direction: u8,
    _height: i32,
    _track_element: &TrackElement,
    _support_type: SupportType,
) {
    log::trace!("dummy track painter invoked");
}
