//! Foundation types shared across the rendering subsystem.

pub mod coords;

pub use coords::{BoundBoxXYZ, CoordsXY, CoordsXYZ};
