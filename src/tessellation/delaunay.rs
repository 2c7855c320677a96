//! Delaunay triangulation of the board's sites
//!
//! Thin wrapper around `delaunator`. The Voronoi diagram is the dual of this
//! triangulation: every triangle contributes its circumcenter as a Voronoi
//! vertex, every interior edge a finite ridge.

use delaunator::{Point, Triangulation};
use glam::{DVec2, Vec2};

/// Triangulate sites in f64 to keep circumcenters stable at canvas scale
pub(crate) fn compute_delaunay(sites: &[Vec2]) -> Triangulation {
    let points: Vec<Point> = sites
        .iter()
        .map(|p| Point {
            x: p.x as f64,
            y: p.y as f64,
        })
        .collect();

    delaunator::triangulate(&points)
}

/// Number of pairwise-distinct, finite sites
pub(crate) fn count_distinct(sites: &[Vec2]) -> usize {
    let mut distinct: Vec<Vec2> = Vec::with_capacity(sites.len());
    for &site in sites.iter().filter(|p| p.is_finite()) {
        if !distinct.contains(&site) {
            distinct.push(site);
        }
    }
    distinct.len()
}

/// Circumcenter of triangle `tri` (three site indices)
///
/// Computed relative to the first corner to limit cancellation. A
/// zero-area triangle falls back to its vertex mean instead of dividing by zero.
pub(crate) fn circumcenter(sites: &[Vec2], tri: [usize; 3]) -> Vec2 {
    let a = sites[tri[0]].as_dvec2();
    let b = sites[tri[1]].as_dvec2() - a;
    let c = sites[tri[2]].as_dvec2() - a;

    let d = 2.0 * b.perp_dot(c);
    if d == 0.0 {
        return ((a * 3.0 + b + c) / 3.0).as_vec2();
    }

    let b2 = b.length_squared();
    let c2 = c.length_squared();
    let offset = DVec2::new(c.y * b2 - b.y * c2, b.x * c2 - c.x * b2) / d;
    (a + offset).as_vec2()
}
