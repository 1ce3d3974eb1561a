//! Integer tile-space geometry
//!
//! Everything the sprite tables need is whole game units: a tile is 32 units
//! on a side and one height step is 8 units. Constructors are `const fn` so
//! per-rotation offset and bounding-box tables can live in statics.

/// Side length of one map tile in game units.
pub const TILE_SIZE: i32 = 32;

/// One height step in game units.
pub const COORDS_Z_STEP: i32 = 8;

/// 2D tile-space coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoordsXY {
    /// Distance along the x axis in game units.
    pub x: i32,
    /// Distance along the y axis in game units.
    pub y: i32,
}

impl CoordsXY {
    /// Create a coordinate from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// 3D tile-space coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoordsXYZ {
    /// Distance along the x axis in game units.
    pub x: i32,
    /// Distance along the y axis in game units.
    pub y: i32,
    /// Height in game units.
    pub z: i32,
}

impl CoordsXYZ {
    /// Create a coordinate from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The same point with x and y exchanged, z untouched.
    ///
    /// Odd viewing rotations mirror the paint offsets across the tile
    /// diagonal; the painter applies this swap rather than a full rotation.
    #[must_use]
    pub const fn swapped_xy(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
            z: self.z,
        }
    }
}

/// Occlusion volume of a drawn sprite: an offset within the tile plus the
/// length of the box along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundBoxXYZ {
    /// Corner of the box closest to the map origin.
    pub offset: CoordsXYZ,
    /// Extent of the box along each axis.
    pub length: CoordsXYZ,
}

impl BoundBoxXYZ {
    /// Create a bounding box from its corner and extents.
    #[must_use]
    pub const fn new(offset: CoordsXYZ, length: CoordsXYZ) -> Self {
        Self { offset, length }
    }

    /// The same box mirrored across the tile diagonal.
    #[must_use]
    pub const fn swapped_xy(self) -> Self {
        Self {
            offset: self.offset.swapped_xy(),
            length: self.length.swapped_xy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swapped_xy_mirrors_across_diagonal() {
        let c = CoordsXYZ::new(0, 27, 48);
        assert_eq!(c.swapped_xy(), CoordsXYZ::new(27, 0, 48));

        let bb = BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 48), CoordsXYZ::new(32, 20, 2));
        let swapped = bb.swapped_xy();
        assert_eq!(swapped.offset, CoordsXYZ::new(6, 0, 48));
        assert_eq!(swapped.length, CoordsXYZ::new(20, 32, 2));
    }

    #[test]
    fn swap_is_an_involution() {
        let bb = BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3));
        assert_eq!(bb.swapped_xy().swapped_xy(), bb);
    }
}
