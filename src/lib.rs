//! Interactive soccer tactics board with Voronoi territory shading
//!
//! Places 22 players and a ball on a pitch, lets them be dragged around and,
//! on the territory board, shades each player's Voronoi region in the team
//! color. Drawing goes through the [`Canvas`] trait so any 2D backend works;
//! the `window` feature ships a macroquad front end.
//!
//! # Quick Start
//!
//! ```rust
//! use tactics_board::*;
//!
//! let config = BoardConfigBuilder::new()
//!     .variant(BoardVariant::Territory)
//!     .build()
//!     .unwrap();
//! let mut scene = Scene::new(config);
//!
//! // Drag the ball to the left wing
//! let mut controller = Controller::new();
//! controller
//!     .handle_all(
//!         &mut scene,
//!         [
//!             PointerEvent::Down(Vec2::new(600.0, 400.0)),
//!             PointerEvent::Move(Vec2::new(200.0, 150.0)),
//!             PointerEvent::Up,
//!         ],
//!     )
//!     .unwrap();
//!
//! let territory = scene.territory().unwrap();
//! println!("home controls {} regions", territory.count(Team::Home));
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): KD-tree nearest-player lookups when classifying regions
//! - `window` (default): macroquad front end and the `board` / `voronoi_board` binaries
//! - `serde`: Serialization support for the board configuration

// Modules
pub mod error;
pub mod config;
pub mod geometry;
pub mod marker;
pub mod tessellation;
pub mod territory;
pub mod shading;
pub mod scene;
pub mod controller;
pub mod render;

#[cfg(feature = "spatial-index")]
pub mod spatial;

#[cfg(feature = "window")]
pub mod window;

// Re-export core types for convenience
pub use error::{BoardError, Result};
pub use config::{BoardConfig, BoardConfigBuilder, BoardVariant};
pub use marker::{Marker, Team};
pub use tessellation::{tessellate, Cell, Ridge, Tessellation};
pub use territory::{Region, Territory};
pub use shading::{
    shade_regions, BasicTeamColors, CustomTeamColors, Rgba, Segment, ShadingData,
    TeamColorMapper,
};
pub use scene::Scene;
pub use controller::{Controller, LoopControl, PointerEvent};
pub use render::{Canvas, FieldPalette, FrameStats, Renderer};

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

// Re-export glam::Vec2 for convenience
pub use glam::Vec2;
