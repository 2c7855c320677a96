//! Voronoi cell construction from Delaunay triangulation
//!
//! Voronoi vertices are the circumcenters of the Delaunay triangles; each
//! site's cell is the ring of circumcenters of the triangles around it.

use std::collections::{BTreeSet, HashMap};
use std::f32::consts::TAU;

use delaunator::{next_halfedge, Triangulation, EMPTY};
use glam::Vec2;

use super::delaunay::circumcenter;
use super::{Cell, Ridge, Tessellation};

/// Circumcenters closer than this are the same Voronoi vertex
///
/// Cocircular sites (the four boundary anchors, regular formations) produce
/// several triangles sharing one circumcenter.
const WELD_EPSILON: f32 = 1.0e-3;

/// Type alias for site-triangle adjacency map
type SiteTriangleMap = HashMap<usize, Vec<usize>>;

/// Assemble the Voronoi diagram dual to `triangulation`
pub(crate) fn build_tessellation(sites: &[Vec2], triangulation: &Triangulation) -> Tessellation {
    let (vertices, triangle_vertex) = weld_circumcenters(sites, &triangulation.triangles);
    let site_triangle_map = build_site_triangle_map(&triangulation.triangles);
    let hull: BTreeSet<usize> = triangulation.hull.iter().copied().collect();

    let cells = (0..sites.len())
        .map(|site| {
            let on_hull = hull.contains(&site);

            let ring: BTreeSet<usize> = site_triangle_map
                .get(&site)
                .map(|tris| tris.iter().map(|&t| triangle_vertex[t]).collect())
                .unwrap_or_default();

            let ordered = order_cell_vertices(ring, sites[site], &vertices, on_hull);
            let neighbors = find_cell_neighbors(site, &site_triangle_map, &triangulation.triangles);
            let finite = !on_hull && ordered.len() >= 3;

            Cell {
                site,
                vertices: ordered,
                neighbors,
                finite,
            }
        })
        .collect();

    let ridges = build_ridges(triangulation, &triangle_vertex);

    Tessellation {
        sites: sites.to_vec(),
        vertices,
        cells,
        ridges,
    }
}

/// Compute one circumcenter per triangle and merge coincident ones
///
/// Returns the vertex list and, per triangle, the index of its vertex.
fn weld_circumcenters(sites: &[Vec2], triangles: &[usize]) -> (Vec<Vec2>, Vec<usize>) {
    let mut vertices: Vec<Vec2> = Vec::new();
    let triangle_vertex = triangles
        .chunks_exact(3)
        .map(|tri| {
            let center = circumcenter(sites, [tri[0], tri[1], tri[2]]);
            match vertices
                .iter()
                .position(|v| v.distance_squared(center) <= WELD_EPSILON * WELD_EPSILON)
            {
                Some(existing) => existing,
                None => {
                    vertices.push(center);
                    vertices.len() - 1
                }
            }
        })
        .collect();

    (vertices, triangle_vertex)
}

/// Build map from site index to all triangles that include it
fn build_site_triangle_map(triangles: &[usize]) -> SiteTriangleMap {
    let mut map: SiteTriangleMap = HashMap::new();

    for (tri_idx, tri) in triangles.chunks_exact(3).enumerate() {
        for &site in tri {
            map.entry(site).or_default().push(tri_idx);
        }
    }

    map
}

/// Order cell vertices counter-clockwise (y-up) around the site
///
/// For hull sites the ring is open; it is rotated so the widest angular gap,
/// the side facing infinity, sits between the last and first vertex.
fn order_cell_vertices(
    ring: BTreeSet<usize>,
    site: Vec2,
    vertices: &[Vec2],
    open: bool,
) -> Vec<usize> {
    let mut with_angles: Vec<(usize, f32)> = ring
        .into_iter()
        .map(|v| {
            let to_vertex = vertices[v] - site;
            (v, to_vertex.y.atan2(to_vertex.x))
        })
        .collect();

    with_angles.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let n = with_angles.len();
    if open && n >= 2 {
        let last = n - 1;
        let mut widest = (last, with_angles[0].1 + TAU - with_angles[last].1);
        for i in 0..last {
            let gap = with_angles[i + 1].1 - with_angles[i].1;
            if gap > widest.1 {
                widest = (i, gap);
            }
        }
        with_angles.rotate_left((widest.0 + 1) % n);
    }

    with_angles.into_iter().map(|(v, _)| v).collect()
}

/// Sites sharing a Delaunay triangle with `site`, sorted
fn find_cell_neighbors(
    site: usize,
    site_triangle_map: &SiteTriangleMap,
    triangles: &[usize],
) -> Vec<usize> {
    let mut neighbors = BTreeSet::new();

    if let Some(tris) = site_triangle_map.get(&site) {
        for &tri_idx in tris {
            for &other in &triangles[tri_idx * 3..tri_idx * 3 + 3] {
                if other != site {
                    neighbors.insert(other);
                }
            }
        }
    }

    neighbors.into_iter().collect()
}

/// One ridge per Delaunay edge
///
/// Interior edges join the circumcenters of both adjacent triangles. Hull
/// edges have a single adjacent triangle, so their ridge runs to infinity.
fn build_ridges(triangulation: &Triangulation, triangle_vertex: &[usize]) -> Vec<Ridge> {
    let triangles = &triangulation.triangles;
    let mut ridges = Vec::new();

    for (edge, &opposite) in triangulation.halfedges.iter().enumerate() {
        let sites = [triangles[edge], triangles[next_halfedge(edge)]];
        let here = triangle_vertex[edge / 3];

        if opposite == EMPTY {
            ridges.push(Ridge {
                sites,
                vertices: [Some(here), None],
            });
        } else if edge < opposite {
            let there = triangle_vertex[opposite / 3];
            // Zero-length ridge between two welded circumcenters
            if here == there {
                continue;
            }
            ridges.push(Ridge {
                sites,
                vertices: [Some(here), Some(there)],
            });
        }
    }

    ridges
}
