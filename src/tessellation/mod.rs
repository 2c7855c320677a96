//! Planar Voronoi tessellation
//!
//! Computes the Voronoi diagram of the board's sites (player positions plus
//! boundary anchors) via its dual Delaunay triangulation. The diagram is
//! rebuilt from scratch every frame; nothing is cached between calls.

mod delaunay;
mod voronoi;

use std::time::Instant;

use glam::Vec2;

use crate::error::{BoardError, Result};
use crate::geometry::clip_half_plane;

/// Voronoi cell of one input site
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Index of the site this cell belongs to
    pub site: usize,

    /// Indices into [`Tessellation::vertices`]
    ///
    /// Ordered counter-clockwise around the site in a y-up frame (clockwise on
    /// screen). For infinite cells only the finite vertices are listed, with
    /// the open side between the last and the first.
    pub vertices: Vec<usize>,

    /// Sites whose cells share a ridge with this one, sorted
    pub neighbors: Vec<usize>,

    /// `false` when the cell is unbounded (site on the convex hull) or
    /// degenerate (fewer than 3 vertices, e.g. a duplicate site)
    pub finite: bool,
}

impl Cell {
    /// Get the vertex count (polygon complexity)
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Check if this cell borders another site's cell
    #[inline]
    pub fn is_neighbor_of(&self, site: usize) -> bool {
        self.neighbors.binary_search(&site).is_ok()
    }
}

/// Edge shared by two adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ridge {
    /// The two sites separated by this ridge
    pub sites: [usize; 2],
    /// Endpoint vertex indices; `None` is a point at infinity
    pub vertices: [Option<usize>; 2],
}

impl Ridge {
    /// Both endpoints if the ridge is a finite segment
    #[inline]
    pub fn finite_endpoints(&self) -> Option<(usize, usize)> {
        match self.vertices {
            [Some(a), Some(b)] => Some((a, b)),
            _ => None,
        }
    }
}

/// A Voronoi diagram over a set of sites
#[derive(Debug, Clone)]
pub struct Tessellation {
    sites: Vec<Vec2>,
    vertices: Vec<Vec2>,
    cells: Vec<Cell>,
    ridges: Vec<Ridge>,
}

impl Tessellation {
    /// Input sites, in the order given to [`tessellate`]
    #[inline]
    pub fn sites(&self) -> &[Vec2] {
        &self.sites
    }

    /// All Voronoi vertices
    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// One cell per input site, indexed by site
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All ridges, finite and infinite
    #[inline]
    pub fn ridges(&self) -> &[Ridge] {
        &self.ridges
    }

    /// Get the cell of a site
    #[inline]
    pub fn cell(&self, site: usize) -> Option<&Cell> {
        self.cells.get(site)
    }

    /// Iterate over bounded cells only
    pub fn finite_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().filter(|c| c.finite)
    }

    /// Resolve a cell's vertex indices to positions
    pub fn polygon(&self, cell: &Cell) -> Vec<Vec2> {
        cell.vertices.iter().map(|&v| self.vertices[v]).collect()
    }

    /// A cell clipped to the axis-aligned box `[min, max]`
    ///
    /// Bounded and unbounded cells alike: the box is cut by the bisector of
    /// every ridge the cell takes part in, so together the clipped cells
    /// cover the box without overlap. Sites left out of the triangulation
    /// (exact duplicates) and unknown sites give an empty polygon.
    pub fn clip_cell(&self, site: usize, min: Vec2, max: Vec2) -> Vec<Vec2> {
        let Some(cell) = self.cells.get(site) else {
            return Vec::new();
        };
        if cell.vertices.is_empty() {
            return Vec::new();
        }

        let own = self.sites[site];
        let mut polygon = vec![min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)];

        for ridge in &self.ridges {
            let other = match ridge.sites {
                [a, b] if a == site => b,
                [a, b] if b == site => a,
                _ => continue,
            };
            let other = self.sites[other];
            polygon = clip_half_plane(&polygon, (own + other) * 0.5, other - own);
            if polygon.is_empty() {
                break;
            }
        }

        polygon
    }

    /// Segments of every ridge whose endpoints are both finite
    pub fn finite_ridge_segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.ridges
            .iter()
            .filter_map(|r| r.finite_endpoints())
            .map(|(a, b)| (self.vertices[a], self.vertices[b]))
    }
}

/// Compute the Voronoi diagram of `sites`
///
/// Site order is preserved: `cells()[i]` is the cell of `sites[i]`.
///
/// # Errors
///
/// Returns `DegenerateSites` when there are fewer than 3 distinct sites, any
/// site is not finite, or all sites are collinear. Callers skip the territory
/// pass for that frame.
///
/// # Example
///
/// ```
/// use glam::Vec2;
/// use tactics_board::tessellation::tessellate;
///
/// let sites = [
///     Vec2::new(0.0, 0.0),
///     Vec2::new(100.0, 0.0),
///     Vec2::new(100.0, 100.0),
///     Vec2::new(0.0, 100.0),
///     Vec2::new(50.0, 50.0),
/// ];
/// let tessellation = tessellate(&sites).unwrap();
///
/// // Only the centre site is enclosed by the others
/// let finite: Vec<usize> = tessellation.finite_cells().map(|c| c.site).collect();
/// assert_eq!(finite, vec![4]);
/// ```
pub fn tessellate(sites: &[Vec2]) -> Result<Tessellation> {
    let start = Instant::now();

    let distinct = delaunay::count_distinct(sites);
    if distinct < 3 || sites.iter().any(|p| !p.is_finite()) {
        return Err(BoardError::DegenerateSites { distinct });
    }

    let triangulation = delaunay::compute_delaunay(sites);
    if triangulation.triangles.is_empty() {
        // Every site on one line
        return Err(BoardError::DegenerateSites { distinct });
    }

    let tessellation = voronoi::build_tessellation(sites, &triangulation);

    log::debug!(
        "tessellated {} sites: {} vertices, {} ridges, {} finite cells in {:?}",
        sites.len(),
        tessellation.vertices.len(),
        tessellation.ridges.len(),
        tessellation.finite_cells().count(),
        start.elapsed()
    );

    Ok(tessellation)
}
