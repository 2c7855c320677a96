//! Territory classification
//!
//! Assigns each finite Voronoi cell to the team of the player nearest to the
//! cell's vertex centroid.

use glam::Vec2;

use crate::geometry::{point_in_polygon, signed_area, vertex_centroid};
use crate::marker::{Marker, Team};
use crate::tessellation::Tessellation;

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;

/// Cells whose absolute area is at or below this are not shaded
const MIN_REGION_AREA: f32 = 1.0e-3;

/// A classified, shadeable cell
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Site index of the underlying cell
    pub site: usize,
    /// Team owning the player nearest to the centroid
    pub team: Team,
    /// Cell boundary in canvas coordinates
    pub polygon: Vec<Vec2>,
    /// Arithmetic mean of the polygon's vertices
    pub centroid: Vec2,
}

impl Region {
    /// Check if a point lies inside this region (even-odd rule)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point_in_polygon(point, &self.polygon)
    }
}

/// All classified regions of one frame
#[derive(Debug, Clone, Default)]
pub struct Territory {
    regions: Vec<Region>,
}

impl Territory {
    /// Classify every finite cell of `tessellation` against `players`
    ///
    /// Markers that are not players (the ball) are ignored. Anchors never
    /// appear here since they are not markers.
    pub fn classify(tessellation: &Tessellation, players: &[Marker]) -> Self {
        Self {
            regions: classify_regions(tessellation, players),
        }
    }

    /// Get all regions
    #[inline]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Number of regions owned by `team`
    pub fn count(&self, team: Team) -> usize {
        self.regions.iter().filter(|r| r.team == team).count()
    }

    /// First region whose polygon contains `point`
    pub fn region_containing(&self, point: Vec2) -> Option<&Region> {
        self.regions.iter().find(|r| r.contains(point))
    }
}

/// Classify each finite, non-degenerate cell by nearest player
///
/// Ties between equidistant players are resolved by the lookup structure.
/// Without `spatial-index` the first player in marker order wins, so home
/// beats away. The default build asks the KD-tree, whose answer depends on
/// the tree layout and may pick an away player instead. Either result is
/// stable for the same input but must not be relied upon.
pub fn classify_regions(tessellation: &Tessellation, players: &[Marker]) -> Vec<Region> {
    let players: Vec<&Marker> = players.iter().filter(|m| m.is_player()).collect();
    let positions: Vec<Vec2> = players.iter().map(|m| m.position).collect();
    let lookup = NearestPlayer::new(&positions);

    tessellation
        .finite_cells()
        .filter_map(|cell| {
            let polygon = tessellation.polygon(cell);
            if polygon.len() < 3 || signed_area(&polygon).abs() <= MIN_REGION_AREA {
                return None;
            }
            let centroid = vertex_centroid(&polygon)?;
            let nearest = lookup.find(centroid)?;

            Some(Region {
                site: cell.site,
                team: players[nearest].team,
                polygon,
                centroid,
            })
        })
        .collect()
}

/// Linear scan for the position nearest to `point`
///
/// Strict comparison keeps the first of several equidistant positions.
pub fn nearest_position(positions: &[Vec2], point: Vec2) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, p) in positions.iter().enumerate() {
        let d = p.distance_squared(point);
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// Nearest-player lookup backed by the KD-tree
#[cfg(feature = "spatial-index")]
struct NearestPlayer(SpatialIndex);

#[cfg(feature = "spatial-index")]
impl NearestPlayer {
    fn new(positions: &[Vec2]) -> Self {
        Self(SpatialIndex::new(positions))
    }

    fn find(&self, point: Vec2) -> Option<usize> {
        self.0.find_nearest(point)
    }
}

/// Nearest-player lookup by linear scan
#[cfg(not(feature = "spatial-index"))]
struct NearestPlayer<'a>(&'a [Vec2]);

#[cfg(not(feature = "spatial-index"))]
impl<'a> NearestPlayer<'a> {
    fn new(positions: &'a [Vec2]) -> Self {
        Self(positions)
    }

    fn find(&self, point: Vec2) -> Option<usize> {
        nearest_position(self.0, point)
    }
}
