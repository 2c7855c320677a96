//! Board Configuration and Builder
//!
//! This module provides the configuration types for both board variants.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

/// Board variant presets
///
/// Each variant maps to a canvas size, a player marker radius and whether the
/// Voronoi territory overlay is drawn.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardVariant {
    /// Plain whiteboard: 800x600 canvas, markers only
    #[default]
    Classic,
    /// Territory board: 1200x800 canvas with Voronoi shading
    Territory,
}

impl BoardVariant {
    /// Default canvas size `(width, height)` for this variant
    pub fn canvas_size(self) -> (f32, f32) {
        match self {
            BoardVariant::Classic => (800.0, 600.0),
            BoardVariant::Territory => (1200.0, 800.0),
        }
    }

    /// Default player marker radius for this variant
    pub fn player_radius(self) -> f32 {
        match self {
            BoardVariant::Classic => 15.0,
            BoardVariant::Territory => 17.0,
        }
    }

    /// Whether this variant draws the territory overlay by default
    pub fn shows_territory(self) -> bool {
        matches!(self, BoardVariant::Territory)
    }

    /// Get a human-readable name for this variant
    pub fn name(self) -> &'static str {
        match self {
            BoardVariant::Classic => "Classic",
            BoardVariant::Territory => "Territory",
        }
    }
}

/// Configuration for a tactics board
///
/// All lengths are in canvas units (pixels for the window front end).
///
/// # Example
///
/// ```rust
/// use tactics_board::*;
///
/// let config = BoardConfigBuilder::new()
///     .variant(BoardVariant::Territory)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.width, 1200.0);
/// assert!(config.show_territory);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardConfig {
    /// Variant the remaining defaults were taken from
    pub variant: BoardVariant,
    /// Canvas width
    pub width: f32,
    /// Canvas height
    pub height: f32,
    /// Radius of player markers, also their selection radius
    pub player_radius: f32,
    /// Radius of the ball marker, also its selection radius
    pub ball_radius: f32,
    /// Distance between stripes in shaded regions
    pub stripe_spacing: f32,
    /// Distance of the pitch lines and boundary anchors from the canvas edge
    pub anchor_inset: f32,
    /// Draw the Voronoi territory overlay
    pub show_territory: bool,
}

impl BoardConfig {
    /// Centre of the canvas (the centre spot)
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfigBuilder::new().into_config()
    }
}

/// Builder for creating BoardConfig with validation
///
/// # Example
///
/// ```rust
/// use tactics_board::*;
///
/// let config = BoardConfigBuilder::new()
///     .variant(BoardVariant::Classic)
///     .stripe_spacing(12.0)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.stripe_spacing, 12.0);
/// ```
#[derive(Debug, Clone)]
pub struct BoardConfigBuilder {
    variant: BoardVariant,
    canvas_size: Option<(f32, f32)>,
    player_radius: Option<f32>,
    ball_radius: f32,
    stripe_spacing: f32,
    anchor_inset: f32,
    show_territory: Option<bool>,
}

impl BoardConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - variant: Classic (canvas and player radius follow the variant)
    /// - ball_radius: 10
    /// - stripe_spacing: 20
    /// - anchor_inset: 50
    pub fn new() -> Self {
        Self {
            variant: BoardVariant::default(),
            canvas_size: None,
            player_radius: None,
            ball_radius: 10.0,
            stripe_spacing: 20.0,
            anchor_inset: 50.0,
            show_territory: None,
        }
    }

    /// Set the board variant
    ///
    /// Canvas size, player radius and the territory overlay fall back to the
    /// variant's presets unless set explicitly.
    pub fn variant(mut self, variant: BoardVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Override the canvas size
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if either dimension is not positive
    pub fn canvas_size(mut self, width: f32, height: f32) -> Result<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(BoardError::InvalidConfig(format!(
                "canvas size must be positive (got {}x{})",
                width, height
            )));
        }
        self.canvas_size = Some((width, height));
        Ok(self)
    }

    /// Override the player marker radius
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if radius <= 0.0
    pub fn player_radius(mut self, radius: f32) -> Result<Self> {
        self.player_radius = Some(positive("player radius", radius)?);
        Ok(self)
    }

    /// Set the ball marker radius
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if radius <= 0.0
    pub fn ball_radius(mut self, radius: f32) -> Result<Self> {
        self.ball_radius = positive("ball radius", radius)?;
        Ok(self)
    }

    /// Set the stripe spacing used when shading regions
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if spacing <= 0.0
    pub fn stripe_spacing(mut self, spacing: f32) -> Result<Self> {
        self.stripe_spacing = positive("stripe spacing", spacing)?;
        Ok(self)
    }

    /// Set the inset of pitch lines and boundary anchors
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if inset is negative
    pub fn anchor_inset(mut self, inset: f32) -> Result<Self> {
        if !(inset >= 0.0) {
            return Err(BoardError::InvalidConfig(format!(
                "anchor inset must be >= 0 (got {})",
                inset
            )));
        }
        self.anchor_inset = inset;
        Ok(self)
    }

    /// Force the territory overlay on or off
    pub fn show_territory(mut self, show: bool) -> Self {
        self.show_territory = Some(show);
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the inset leaves no pitch inside the canvas
    pub fn build(self) -> Result<BoardConfig> {
        let config = self.into_config();
        if config.anchor_inset * 2.0 >= config.width.min(config.height) {
            return Err(BoardError::InvalidConfig(format!(
                "anchor inset {} leaves no pitch inside a {}x{} canvas",
                config.anchor_inset, config.width, config.height
            )));
        }
        Ok(config)
    }

    fn into_config(self) -> BoardConfig {
        let (width, height) = self
            .canvas_size
            .unwrap_or_else(|| self.variant.canvas_size());

        BoardConfig {
            variant: self.variant,
            width,
            height,
            player_radius: self
                .player_radius
                .unwrap_or_else(|| self.variant.player_radius()),
            ball_radius: self.ball_radius,
            stripe_spacing: self.stripe_spacing,
            anchor_inset: self.anchor_inset,
            show_territory: self
                .show_territory
                .unwrap_or_else(|| self.variant.shows_territory()),
        }
    }
}

impl Default for BoardConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn positive(what: &str, value: f32) -> Result<f32> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(BoardError::InvalidConfig(format!(
            "{} must be positive (got {})",
            what, value
        )))
    }
}
