//! Spatial indexing for fast nearest-player lookups
//!
//! This module is only available with the `spatial-index` feature.

use kiddo::immutable::float::kdtree::ImmutableKdTree;
use kiddo::SquaredEuclidean;
use glam::Vec2;

/// Wrapper around a 2D KD-tree of player positions
///
/// Rebuilt every frame from the current scene; queries map a cell centroid
/// to the index of the nearest player.
#[derive(Clone)]
pub struct SpatialIndex {
    tree: Option<ImmutableKdTree<f32, usize, 2, 32>>,
    len: usize,
}

impl SpatialIndex {
    /// Build spatial index from player positions
    ///
    /// # Example
    ///
    /// ```
    /// use glam::Vec2;
    /// use tactics_board::SpatialIndex;
    ///
    /// let players = vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)];
    ///
    /// let index = SpatialIndex::new(&players);
    /// assert_eq!(index.find_nearest(Vec2::new(10.0, 0.0)), Some(0));
    /// ```
    pub fn new(positions: &[Vec2]) -> Self {
        let points: Vec<[f32; 2]> = positions.iter().map(|p| [p.x, p.y]).collect();

        let tree = if points.is_empty() {
            None
        } else {
            Some(ImmutableKdTree::new_from_slice(&points))
        };

        Self {
            tree,
            len: points.len(),
        }
    }

    /// Index of the position nearest to `query`, `None` if the index is empty
    ///
    /// Exact ties are resolved by the tree layout: stable for a given input,
    /// but not necessarily the lowest index.
    pub fn find_nearest(&self, query: Vec2) -> Option<usize> {
        let tree = self.tree.as_ref()?;
        let result = tree.nearest_one::<SquaredEuclidean>(&[query.x, query.y]);
        Some(result.item as usize)
    }

    /// Number of indexed positions
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no positions are indexed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spatial_index_basic() {
        let players = vec![
            Vec2::new(76.0, 400.0),
            Vec2::new(375.0, 667.0),
            Vec2::new(975.0, 400.0),
            Vec2::new(1124.0, 400.0),
        ];

        let index = SpatialIndex::new(&players);
        assert_eq!(index.len(), 4);

        assert_eq!(index.find_nearest(Vec2::new(90.0, 410.0)), Some(0));
        assert_eq!(index.find_nearest(Vec2::new(380.0, 600.0)), Some(1));
        assert_eq!(index.find_nearest(Vec2::new(1000.0, 390.0)), Some(2));
        assert_eq!(index.find_nearest(Vec2::new(1150.0, 400.0)), Some(3));
    }

    #[test]
    fn test_spatial_index_exact_match() {
        let players = vec![Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)];

        let index = SpatialIndex::new(&players);

        assert_eq!(index.find_nearest(players[0]), Some(0));
        assert_eq!(index.find_nearest(players[1]), Some(1));
    }

    #[test]
    fn test_empty_index() {
        let index = SpatialIndex::new(&[]);

        assert!(index.is_empty());
        assert_eq!(index.find_nearest(Vec2::ZERO), None);
    }
}
