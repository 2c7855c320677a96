//! Planar geometry helpers
//!
//! Small primitives shared by the controller, the tessellation pipeline
//! and the renderer.

use glam::Vec2;

/// Check whether `point` lies within `radius` of `center`
///
/// The boundary is inclusive: a point at exactly `radius` is a hit.
#[inline]
pub fn within_radius(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance_squared(center) <= radius * radius
}

/// Even-odd ray casting test
///
/// Casts a horizontal ray from `point` towards +x and counts crossed edges;
/// the closing edge from the last vertex back to the first is included.
/// Horizontal edges never toggle. Points exactly on an edge get a
/// deterministic but unspecified answer.
///
/// ```
/// use glam::Vec2;
/// use tactics_board::geometry::point_in_polygon;
///
/// let square = [
///     Vec2::new(0.0, 0.0),
///     Vec2::new(0.0, 10.0),
///     Vec2::new(10.0, 10.0),
///     Vec2::new(10.0, 0.0),
/// ];
/// assert!(point_in_polygon(Vec2::new(5.0, 5.0), &square));
/// assert!(!point_in_polygon(Vec2::new(15.0, 5.0), &square));
/// ```
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[j];
        // Strict/non-strict split keeps horizontal edges out and counts
        // a shared vertex only once.
        if (a.y > point.y) != (b.y > point.y) {
            let intersect_x = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if point.x < intersect_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Arithmetic mean of the polygon's vertices (not area weighted)
///
/// Returns `None` for an empty polygon.
pub fn vertex_centroid(polygon: &[Vec2]) -> Option<Vec2> {
    if polygon.is_empty() {
        return None;
    }
    let sum: Vec2 = polygon.iter().copied().sum();
    Some(sum / polygon.len() as f32)
}

/// Signed area via the shoelace formula
///
/// Positive for counter-clockwise winding in a y-up frame.
pub fn signed_area(polygon: &[Vec2]) -> f32 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for (i, a) in polygon.iter().enumerate() {
        let b = polygon[(i + 1) % polygon.len()];
        twice_area += a.perp_dot(b);
    }
    twice_area * 0.5
}

/// Axis-aligned bounds as `(min, max)`
///
/// Returns `None` for an empty polygon.
pub fn bounds(polygon: &[Vec2]) -> Option<(Vec2, Vec2)> {
    let first = *polygon.first()?;
    Some(
        polygon
            .iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p))),
    )
}

/// Sutherland-Hodgman clip of `polygon` against one half-plane
///
/// Keeps the side of the line through `origin` that `normal` points away
/// from, i.e. points with `(p - origin) · normal <= 0`. Winding is
/// preserved and convex input stays convex.
pub fn clip_half_plane(polygon: &[Vec2], origin: Vec2, normal: Vec2) -> Vec<Vec2> {
    let mut clipped = Vec::with_capacity(polygon.len() + 1);

    for (i, &a) in polygon.iter().enumerate() {
        let b = polygon[(i + 1) % polygon.len()];
        let da = (a - origin).dot(normal);
        let db = (b - origin).dot(normal);

        if da <= 0.0 {
            clipped.push(a);
        }
        if (da < 0.0 && db > 0.0) || (da > 0.0 && db < 0.0) {
            clipped.push(a + (b - a) * (da / (da - db)));
        }
    }

    clipped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 0.0),
        ]
    }

    #[test]
    fn test_within_radius_is_inclusive() {
        let center = Vec2::new(100.0, 100.0);
        assert!(within_radius(center, center, 15.0));
        assert!(within_radius(Vec2::new(115.0, 100.0), center, 15.0));
        assert!(within_radius(Vec2::new(109.0, 112.0), center, 15.0));
        assert!(!within_radius(Vec2::new(115.1, 100.0), center, 15.0));
    }

    #[test]
    fn test_point_in_square() {
        let square = square();
        assert!(point_in_polygon(Vec2::new(5.0, 5.0), &square));
        assert!(point_in_polygon(Vec2::new(0.5, 9.5), &square));
        assert!(!point_in_polygon(Vec2::new(-1.0, 5.0), &square));
        assert!(!point_in_polygon(Vec2::new(5.0, 11.0), &square));
        assert!(!point_in_polygon(Vec2::new(20.0, 20.0), &square));
    }

    #[test]
    fn test_point_on_edge_is_stable() {
        let square = square();
        for edge_point in [Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0), Vec2::new(5.0, 0.0)] {
            let first = point_in_polygon(edge_point, &square);
            for _ in 0..10 {
                assert_eq!(point_in_polygon(edge_point, &square), first);
            }
        }
    }

    #[test]
    fn test_point_in_concave_polygon() {
        // U shape opening upwards
        let polygon = [
            Vec2::new(0.0, 0.0),
            Vec2::new(30.0, 0.0),
            Vec2::new(30.0, 30.0),
            Vec2::new(20.0, 30.0),
            Vec2::new(20.0, 10.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 30.0),
            Vec2::new(0.0, 30.0),
        ];
        assert!(point_in_polygon(Vec2::new(5.0, 20.0), &polygon));
        assert!(point_in_polygon(Vec2::new(25.0, 20.0), &polygon));
        assert!(!point_in_polygon(Vec2::new(15.0, 20.0), &polygon));
        // Ray passes exactly through the horizontal notch edge's endpoints
        assert!(point_in_polygon(Vec2::new(5.0, 10.0), &polygon));
    }

    #[test]
    fn test_degenerate_polygons_contain_nothing() {
        assert!(!point_in_polygon(Vec2::ZERO, &[]));
        assert!(!point_in_polygon(Vec2::ZERO, &[Vec2::ZERO, Vec2::ONE]));
    }

    #[test]
    fn test_vertex_centroid() {
        assert_eq!(vertex_centroid(&square()), Some(Vec2::new(5.0, 5.0)));
        assert_eq!(vertex_centroid(&[]), None);

        // Mean of vertices, not area centroid
        let skewed = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 0.1),
            Vec2::new(10.0, 0.2),
        ];
        let centroid = vertex_centroid(&skewed).unwrap();
        assert!(centroid.abs_diff_eq(Vec2::new(7.5, 0.075), 1e-6));
    }

    #[test]
    fn test_signed_area() {
        let mut square = square();
        // (0,0) -> (0,10) -> (10,10) -> (10,0) is clockwise in a y-up frame
        assert_eq!(signed_area(&square), -100.0);
        square.reverse();
        assert_eq!(signed_area(&square), 100.0);

        let collinear = [Vec2::ZERO, Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0)];
        assert_eq!(signed_area(&collinear), 0.0);
    }

    #[test]
    fn test_bounds() {
        let (min, max) = bounds(&square()).unwrap();
        assert_eq!(min, Vec2::ZERO);
        assert_eq!(max, Vec2::new(10.0, 10.0));
        assert!(bounds(&[]).is_none());
    }

    #[test]
    fn test_clip_half_plane() {
        // Keep x <= 5
        let half = clip_half_plane(&square(), Vec2::new(5.0, 0.0), Vec2::X);
        assert_eq!(half.len(), 4);
        assert!((signed_area(&half).abs() - 50.0).abs() < 1e-4);
        assert!(half.iter().all(|p| p.x <= 5.0));

        // Whole square on the kept side
        let all = clip_half_plane(&square(), Vec2::new(20.0, 0.0), Vec2::X);
        assert_eq!(all, square());

        // Whole square on the dropped side
        assert!(clip_half_plane(&square(), Vec2::new(-1.0, 0.0), Vec2::X).is_empty());
    }
}
