//! Marker Structure
//!
//! Represents a single draggable piece on the board: a numbered player or the ball.

use glam::Vec2;

use crate::geometry::within_radius;

/// Which side a marker belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    /// First team (drawn blue)
    Home,
    /// Second team (drawn red)
    Away,
    /// The ball; owns no territory
    Ball,
}

impl Team {
    /// Check if this is one of the two playing sides
    #[inline]
    pub fn is_player_side(self) -> bool {
        !matches!(self, Team::Ball)
    }
}

/// A marker on the board
///
/// Markers are created once when the scene is set up and never destroyed.
/// Only `position` changes afterwards, through the interaction controller.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Centre of the marker on the canvas
    pub position: Vec2,

    /// Side this marker belongs to
    pub team: Team,

    /// Jersey number, `None` for the ball
    pub number: Option<u8>,
}

impl Marker {
    /// Create a numbered player marker
    pub fn player(team: Team, number: u8, position: Vec2) -> Self {
        debug_assert!(team.is_player_side(), "players need a playing side");
        Self {
            position,
            team,
            number: Some(number),
        }
    }

    /// Create the ball marker
    pub fn ball(position: Vec2) -> Self {
        Self {
            position,
            team: Team::Ball,
            number: None,
        }
    }

    /// Check if this marker is a player
    #[inline]
    pub fn is_player(&self) -> bool {
        self.team.is_player_side()
    }

    /// Check if a pointer at `point` touches this marker (inclusive radius)
    #[inline]
    pub fn hit(&self, point: Vec2, radius: f32) -> bool {
        within_radius(point, self.position, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let marker = Marker::player(Team::Home, 9, Vec2::new(975.0, 400.0));

        assert!(marker.is_player());
        assert_eq!(marker.number, Some(9));
        assert_eq!(marker.team, Team::Home);
    }

    #[test]
    fn test_ball_has_no_number() {
        let ball = Marker::ball(Vec2::new(600.0, 400.0));

        assert!(!ball.is_player());
        assert_eq!(ball.number, None);
        assert!(!Team::Ball.is_player_side());
    }

    #[test]
    fn test_hit() {
        let marker = Marker::player(Team::Away, 1, Vec2::new(100.0, 100.0));

        assert!(marker.hit(Vec2::new(100.0, 100.0), 15.0));
        assert!(marker.hit(Vec2::new(100.0, 115.0), 15.0));
        assert!(!marker.hit(Vec2::new(100.0, 116.0), 15.0));
    }
}
