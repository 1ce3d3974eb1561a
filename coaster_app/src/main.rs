//! Bobsleigh painting demo
//!
//! Loads a coaster layout from a RON file, paints every placed element at
//! all four viewing rotations and reports what the painters recorded. Useful
//! for eyeballing sprite/tunnel/support output without a display backend.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use ride_render::prelude::*;

const DEFAULT_LAYOUT: &str = "coaster_app/layouts/figure_eight.ron";

#[derive(Debug, Error)]
enum AppError {
    #[error("failed to read layout {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse layout {path}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// One placed track element of a layout file.
#[derive(Debug, Deserialize)]
struct PlacedElement {
    track_type: TrackElemType,
    #[serde(default)]
    sequence: u8,
    /// Tile position in map units.
    position: (i32, i32),
    /// Base height in game z units.
    height: i32,
    #[serde(default)]
    chain: bool,
}

/// A named list of placed elements.
#[derive(Debug, Deserialize)]
struct Layout {
    name: String,
    elements: Vec<PlacedElement>,
}

impl Layout {
    fn load(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&text).map_err(|source| AppError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Tallies accumulated over one full-rotation paint pass.
#[derive(Debug, Default)]
struct PaintStats {
    sprites: usize,
    tunnels: usize,
    supports: usize,
    max_clearance: i32,
    dummy_elements: usize,
}

fn paint_layout(layout: &Layout, rotation: u8) -> PaintStats {
    let ride = Ride { id: 0 };
    let mut stats = PaintStats::default();

    for element in &layout.elements {
        let mut track_element = TrackElement::default();
        if element.chain {
            track_element = track_element.with_chain();
        }

        let mut session = PaintSession::new(CoordsXY::new(element.position.0, element.position.1));
        session.set_colours(
            ImageId::new(0, 2, 6),
            ImageId::new(0, 1, 1),
            ImageId::new(0, 0, 0),
        );

        let paint = bobsleigh::paint_function(element.track_type);
        paint(
            &mut session,
            &ride,
            element.sequence,
            rotation,
            element.height,
            &track_element,
            SupportType::TUBES,
        );

        if session.paint_structs().is_empty() && session.general_support_height() == 0 {
            stats.dummy_elements += 1;
            log::warn!(
                "element {:?} is not supported by the bobsleigh painter",
                element.track_type
            );
        }
        stats.sprites += session.paint_structs().len();
        stats.tunnels += session.tunnels().len();
        stats.supports += session.support_placements().len();
        stats.max_clearance = stats.max_clearance.max(session.general_support_height());
    }
    stats
}

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_LAYOUT.to_string());
    let layout = Layout::load(Path::new(&path))?;

    log::info!(
        "painting layout '{}' ({} elements)",
        layout.name,
        layout.elements.len()
    );

    for rotation in 0..4 {
        let stats = paint_layout(&layout, rotation);
        log::info!(
            "rotation {rotation}: {} sprites, {} tunnels, {} supports, max clearance {}",
            stats.sprites,
            stats.tunnels,
            stats.supports,
            stats.max_clearance
        );
        if stats.dummy_elements > 0 {
            log::warn!("{} elements painted nothing", stats.dummy_elements);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_layout_parses_and_paints() {
        let layout: Layout = ron::from_str(include_str!("../layouts/figure_eight.ron"))
            .expect("bundled layout must parse");
        assert!(!layout.elements.is_empty());

        let stats = paint_layout(&layout, 0);
        assert_eq!(stats.dummy_elements, 0);
        assert!(stats.sprites > 0);
        assert!(stats.tunnels > 0);
    }
}
