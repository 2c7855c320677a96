//! Scene model: the markers on the board and the fixed boundary anchors

use glam::Vec2;

use crate::config::{BoardConfig, BoardVariant};
use crate::error::{BoardError, Result};
use crate::marker::{Marker, Team};
use crate::tessellation::{tessellate, Tessellation};
use crate::territory::Territory;

/// Kickoff positions `(x, y, number)` of the classic board, 800x600
const CLASSIC_HOME: [(f32, f32, u8); 11] = [
    (100.0, 100.0, 1),
    (150.0, 150.0, 2),
    (200.0, 200.0, 3),
    (250.0, 250.0, 4),
    (300.0, 300.0, 5),
    (350.0, 350.0, 6),
    (400.0, 400.0, 7),
    (450.0, 450.0, 8),
    (500.0, 500.0, 9),
    (550.0, 550.0, 10),
    (600.0, 100.0, 11),
];

const CLASSIC_AWAY: [(f32, f32, u8); 11] = [
    (100.0, 500.0, 1),
    (150.0, 450.0, 2),
    (200.0, 400.0, 3),
    (250.0, 350.0, 4),
    (300.0, 300.0, 5),
    (350.0, 250.0, 6),
    (400.0, 200.0, 7),
    (450.0, 150.0, 8),
    (500.0, 100.0, 9),
    (550.0, 50.0, 10),
    (600.0, 500.0, 11),
];

/// Kickoff positions of the territory board, 1200x800
const TERRITORY_HOME: [(f32, f32, u8); 11] = [
    (76.0, 400.0, 1),
    (375.0, 667.0, 2),
    (375.0, 133.0, 3),
    (225.0, 267.0, 4),
    (225.0, 533.0, 5),
    (450.0, 400.0, 6),
    (900.0, 133.0, 7),
    (675.0, 267.0, 8),
    (975.0, 400.0, 9),
    (675.0, 533.0, 10),
    (900.0, 667.0, 11),
];

const TERRITORY_AWAY: [(f32, f32, u8); 11] = [
    (1124.0, 400.0, 1),
    (825.0, 667.0, 2),
    (825.0, 133.0, 3),
    (900.0, 267.0, 4),
    (900.0, 533.0, 5),
    (750.0, 400.0, 6),
    (600.0, 133.0, 7),
    (600.0, 267.0, 8),
    (225.0, 400.0, 9),
    (600.0, 533.0, 10),
    (450.0, 600.0, 11),
];

/// Everything placed on the board
///
/// Holds 22 players (home then away, in jersey order) followed by the ball.
/// Marker IDs are indices into this list and never change.
///
/// # Examples
///
/// ```
/// use tactics_board::*;
///
/// let config = BoardConfigBuilder::new()
///     .variant(BoardVariant::Territory)
///     .build()
///     .unwrap();
/// let scene = Scene::new(config);
///
/// assert_eq!(scene.players().count(), 22);
/// let territory = scene.territory().unwrap();
/// assert_eq!(territory.regions().len(), 22);
/// ```
#[derive(Debug, Clone)]
pub struct Scene {
    /// Configuration the scene was laid out for
    config: BoardConfig,

    /// All markers, indexed by marker ID
    markers: Vec<Marker>,

    /// Corners of the inset pitch rectangle; bound the edge cells
    anchors: [Vec2; 4],
}

impl Scene {
    /// Create a scene in the kickoff formation of the config's variant
    ///
    /// Formations are scaled when the canvas differs from the variant's
    /// preset size. The ball starts on the centre spot.
    pub fn new(config: BoardConfig) -> Self {
        let (home, away) = match config.variant {
            BoardVariant::Classic => (&CLASSIC_HOME, &CLASSIC_AWAY),
            BoardVariant::Territory => (&TERRITORY_HOME, &TERRITORY_AWAY),
        };
        let (preset_w, preset_h) = config.variant.canvas_size();
        let scale = Vec2::new(config.width / preset_w, config.height / preset_h);

        let players = |team: Team, formation: &[(f32, f32, u8); 11]| -> Vec<Marker> {
            formation
                .iter()
                .map(|&(x, y, number)| Marker::player(team, number, Vec2::new(x, y) * scale))
                .collect()
        };

        let mut markers = players(Team::Home, home);
        markers.extend(players(Team::Away, away));
        let (cx, cy) = config.center();
        markers.push(Marker::ball(Vec2::new(cx, cy)));

        Self::with_markers(config, markers)
    }

    /// Create a scene from explicit markers
    pub fn with_markers(config: BoardConfig, markers: Vec<Marker>) -> Self {
        let inset = config.anchor_inset;
        let anchors = [
            Vec2::new(inset, inset),
            Vec2::new(config.width - inset, inset),
            Vec2::new(config.width - inset, config.height - inset),
            Vec2::new(inset, config.height - inset),
        ];

        Self {
            config,
            markers,
            anchors,
        }
    }

    /// Get the configuration used to lay out this scene
    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Get all markers, indexed by marker ID
    #[inline]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Get a marker by ID
    #[inline]
    pub fn marker(&self, id: usize) -> Option<&Marker> {
        self.markers.get(id)
    }

    /// Iterate over player markers
    pub fn players(&self) -> impl Iterator<Item = &Marker> + '_ {
        self.markers.iter().filter(|m| m.is_player())
    }

    /// Get the ball marker, if the scene has one
    pub fn ball(&self) -> Option<&Marker> {
        self.markers.iter().find(|m| m.team == Team::Ball)
    }

    /// Get the boundary anchors
    #[inline]
    pub fn anchors(&self) -> &[Vec2; 4] {
        &self.anchors
    }

    /// Selection radius of a marker
    #[inline]
    pub fn radius_of(&self, marker: &Marker) -> f32 {
        if marker.is_player() {
            self.config.player_radius
        } else {
            self.config.ball_radius
        }
    }

    /// Find the marker under a pointer position
    ///
    /// Considers every marker whose own radius contains `point` (inclusive)
    /// and returns the one whose centre is nearest; among equally near
    /// markers the lowest ID wins.
    pub fn marker_at(&self, point: Vec2) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (id, marker) in self.markers.iter().enumerate() {
            if !marker.hit(point, self.radius_of(marker)) {
                continue;
            }
            let d = marker.position.distance_squared(point);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((id, d));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Move a marker to a new position
    ///
    /// # Errors
    ///
    /// Returns `MarkerNotFound` if `id` is out of bounds
    pub fn move_marker(&mut self, id: usize, position: Vec2) -> Result<()> {
        let marker = self
            .markers
            .get_mut(id)
            .ok_or(BoardError::MarkerNotFound(id))?;
        marker.position = position;
        Ok(())
    }

    /// Tessellation input: player positions followed by the anchors
    ///
    /// Site `i` for `i < players().count()` is the `i`-th player.
    pub fn sites(&self) -> Vec<Vec2> {
        self.players()
            .map(|m| m.position)
            .chain(self.anchors.iter().copied())
            .collect()
    }

    /// Voronoi diagram of the current positions
    ///
    /// # Errors
    ///
    /// Returns `DegenerateSites` if the positions cannot be tessellated
    pub fn tessellate(&self) -> Result<Tessellation> {
        tessellate(&self.sites())
    }

    /// Classified territory of the current positions
    ///
    /// # Errors
    ///
    /// Returns `DegenerateSites` if the positions cannot be tessellated
    pub fn territory(&self) -> Result<Territory> {
        let tessellation = self.tessellate()?;
        let players: Vec<Marker> = self.players().cloned().collect();
        Ok(Territory::classify(&tessellation, &players))
    }
}
