//! Frame rendering
//!
//! Draws a scene onto any [`Canvas`]. Drawing order per frame: field,
//! shaded territory, ridges, drag highlight, players, ball.

use glam::Vec2;

use crate::config::BoardVariant;
use crate::marker::Marker;
use crate::scene::Scene;
use crate::shading::{shade_regions, BasicTeamColors, Rgba, TeamColorMapper};

const LINE_WIDTH: f32 = 2.0;
const RIDGE_WIDTH: f32 = 1.0;
const STRIPE_WIDTH: f32 = 1.0;
const CENTER_CIRCLE_RADIUS: f32 = 100.0;
const GOAL_AREA: Vec2 = Vec2::new(20.0, 100.0);
const ANCHOR_RADIUS: f32 = 5.0;

/// Drawing primitives a render surface has to provide
pub trait Canvas {
    /// Fill the whole surface
    fn clear(&mut self, color: Rgba);

    /// Axis-aligned rectangle outline with its top-left corner at `min`
    fn rect_outline(&mut self, min: Vec2, size: Vec2, thickness: f32, color: Rgba);

    /// Filled circle
    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Circle outline
    fn circle_outline(&mut self, center: Vec2, radius: f32, thickness: f32, color: Rgba);

    /// Line segment
    fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Rgba);

    /// Text centred on `center`
    fn text_centered(&mut self, text: &str, center: Vec2, size: f32, color: Rgba);
}

/// Colors of everything that is not a team
#[derive(Debug, Clone)]
pub struct FieldPalette {
    pub grass: Rgba,
    pub lines: Rgba,
    pub anchors: Rgba,
    pub ridges: Rgba,
    pub numbers: Rgba,
    pub highlight: Rgba,
}

impl Default for FieldPalette {
    fn default() -> Self {
        Self {
            grass: rgb(34, 177, 76),
            lines: rgb(255, 255, 255),
            anchors: rgb(150, 150, 150),
            ridges: rgb(0, 0, 0),
            numbers: rgb(255, 255, 255),
            highlight: rgb(255, 255, 255),
        }
    }
}

fn rgb(r: u8, g: u8, b: u8) -> Rgba {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// What a frame contained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Shaded regions
    pub regions: usize,
    /// Stripe segments drawn
    pub stripes: usize,
    /// Finite ridges drawn
    pub ridges: usize,
    /// The territory pass was enabled but the positions were degenerate
    pub territory_skipped: bool,
}

/// Draws scenes; stateless between frames
#[derive(Debug, Clone, Default)]
pub struct Renderer<C = BasicTeamColors> {
    colors: C,
    palette: FieldPalette,
}

impl Renderer<BasicTeamColors> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: TeamColorMapper> Renderer<C> {
    /// Renderer with custom team and field colors
    pub fn with_colors(colors: C, palette: FieldPalette) -> Self {
        Self { colors, palette }
    }

    /// Draw one complete frame
    ///
    /// `selected` is the marker being dragged, if any; on the territory board
    /// its current region is outlined.
    pub fn draw_frame<K: Canvas>(
        &self,
        scene: &Scene,
        selected: Option<usize>,
        canvas: &mut K,
    ) -> FrameStats {
        let config = scene.config();
        let mut stats = FrameStats::default();

        self.draw_field(scene, canvas);

        if config.show_territory {
            match scene.tessellate() {
                Ok(tessellation) => {
                    let players: Vec<Marker> = scene.players().cloned().collect();
                    let territory =
                        crate::territory::Territory::classify(&tessellation, &players);

                    let view = (Vec2::ZERO, Vec2::new(config.width, config.height));
                    let shading = shade_regions(
                        territory.regions(),
                        &self.colors,
                        config.stripe_spacing,
                        view,
                    );
                    for (segment, color) in shading.iter() {
                        canvas.line(segment.start, segment.end, STRIPE_WIDTH, *color);
                    }

                    for (from, to) in tessellation.finite_ridge_segments() {
                        canvas.line(from, to, RIDGE_WIDTH, self.palette.ridges);
                        stats.ridges += 1;
                    }

                    let dragged = selected.and_then(|id| scene.marker(id));
                    if let Some(region) =
                        dragged.and_then(|m| territory.region_containing(m.position))
                    {
                        let n = region.polygon.len();
                        for i in 0..n {
                            canvas.line(
                                region.polygon[i],
                                region.polygon[(i + 1) % n],
                                LINE_WIDTH,
                                self.palette.highlight,
                            );
                        }
                    }

                    stats.regions = territory.regions().len();
                    stats.stripes = shading.segment_count();
                }
                Err(err) => {
                    log::debug!("skipping territory this frame: {}", err);
                    stats.territory_skipped = true;
                }
            }
        }

        self.draw_markers(scene, canvas);

        stats
    }

    /// Grass, pitch lines and, on the territory board, the anchors
    fn draw_field<K: Canvas>(&self, scene: &Scene, canvas: &mut K) {
        let config = scene.config();
        let inset = config.anchor_inset;
        let size = Vec2::new(config.width, config.height);
        let center = size / 2.0;
        let lines = self.palette.lines;

        canvas.clear(self.palette.grass);

        // Touchlines and goal lines
        canvas.rect_outline(Vec2::splat(inset), size - 2.0 * inset, LINE_WIDTH, lines);
        canvas.circle_outline(center, CENTER_CIRCLE_RADIUS, LINE_WIDTH, lines);
        canvas.line(
            Vec2::new(center.x, inset),
            Vec2::new(center.x, size.y - inset),
            LINE_WIDTH,
            lines,
        );

        let goal_top = center.y - GOAL_AREA.y / 2.0;
        canvas.rect_outline(Vec2::new(inset, goal_top), GOAL_AREA, LINE_WIDTH, lines);
        canvas.rect_outline(
            Vec2::new(size.x - inset - GOAL_AREA.x, goal_top),
            GOAL_AREA,
            LINE_WIDTH,
            lines,
        );

        if config.show_territory {
            for &anchor in scene.anchors() {
                canvas.circle(anchor, ANCHOR_RADIUS, self.palette.anchors);
            }
        }
    }

    /// Players with their numbers, then the ball on top
    fn draw_markers<K: Canvas>(&self, scene: &Scene, canvas: &mut K) {
        let font_size = match scene.config().variant {
            BoardVariant::Classic => 20.0,
            BoardVariant::Territory => 25.0,
        };

        for player in scene.players() {
            let color = self.colors.map_color(player.team);
            canvas.circle(player.position, scene.radius_of(player), color);
            if let Some(number) = player.number {
                canvas.text_centered(
                    &number.to_string(),
                    player.position,
                    font_size,
                    self.palette.numbers,
                );
            }
        }

        if let Some(ball) = scene.ball() {
            canvas.circle(
                ball.position,
                scene.radius_of(ball),
                self.colors.map_color(ball.team),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BoardConfig, BoardConfigBuilder};
    use crate::marker::Team;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Rect(Vec2, Vec2),
        Circle(Vec2, f32, Rgba),
        CircleOutline(Vec2, f32),
        Line(Vec2, Vec2, Rgba),
        Text(String, Vec2),
    }

    #[derive(Default)]
    struct RecordingCanvas {
        ops: Vec<Op>,
    }

    impl Canvas for RecordingCanvas {
        fn clear(&mut self, _color: Rgba) {
            self.ops.push(Op::Clear);
        }

        fn rect_outline(&mut self, min: Vec2, size: Vec2, _thickness: f32, _color: Rgba) {
            self.ops.push(Op::Rect(min, size));
        }

        fn circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
            self.ops.push(Op::Circle(center, radius, color));
        }

        fn circle_outline(&mut self, center: Vec2, radius: f32, _thickness: f32, _color: Rgba) {
            self.ops.push(Op::CircleOutline(center, radius));
        }

        fn line(&mut self, from: Vec2, to: Vec2, _thickness: f32, color: Rgba) {
            self.ops.push(Op::Line(from, to, color));
        }

        fn text_centered(&mut self, text: &str, center: Vec2, _size: f32, _color: Rgba) {
            self.ops.push(Op::Text(text.to_string(), center));
        }
    }

    fn territory_scene() -> Scene {
        let config = BoardConfigBuilder::new()
            .variant(BoardVariant::Territory)
            .build()
            .unwrap();
        Scene::new(config)
    }

    #[test]
    fn test_classic_frame() {
        let scene = Scene::new(BoardConfig::default());
        let mut canvas = RecordingCanvas::default();

        let stats = Renderer::new().draw_frame(&scene, None, &mut canvas);

        assert_eq!(stats, FrameStats::default());
        assert_eq!(canvas.ops[0], Op::Clear);
        assert_eq!(
            canvas.ops[1],
            Op::Rect(Vec2::new(50.0, 50.0), Vec2::new(700.0, 500.0))
        );
        assert_eq!(
            canvas.ops[2],
            Op::CircleOutline(Vec2::new(400.0, 300.0), 100.0)
        );
        assert!(canvas
            .ops
            .contains(&Op::Rect(Vec2::new(730.0, 250.0), Vec2::new(20.0, 100.0))));

        let texts = canvas.ops.iter().filter(|op| matches!(op, Op::Text(..))).count();
        assert_eq!(texts, 22);

        // Ball is the last thing drawn
        let yellow = BasicTeamColors.map_color(Team::Ball);
        assert_eq!(
            canvas.ops.last(),
            Some(&Op::Circle(Vec2::new(400.0, 300.0), 10.0, yellow))
        );
    }

    #[test]
    fn test_territory_frame_order() {
        let scene = territory_scene();
        let mut canvas = RecordingCanvas::default();
        let renderer = Renderer::new();

        let stats = renderer.draw_frame(&scene, None, &mut canvas);

        assert_eq!(stats.regions, 22);
        assert!(stats.stripes > 0);
        assert!(stats.ridges > 0);
        assert!(!stats.territory_skipped);

        let black = renderer.palette.ridges;
        let first_ridge = canvas
            .ops
            .iter()
            .position(|op| matches!(op, Op::Line(_, _, c) if *c == black))
            .unwrap();
        let blue = BasicTeamColors.map_color(Team::Home);
        let last_stripe = canvas
            .ops
            .iter()
            .rposition(|op| matches!(op, Op::Line(_, _, c) if *c == blue))
            .unwrap();
        let first_number = canvas
            .ops
            .iter()
            .position(|op| matches!(op, Op::Text(..)))
            .unwrap();

        assert!(last_stripe < first_ridge);
        assert!(first_ridge < first_number);

        let anchors = canvas
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Circle(_, r, _) if *r == ANCHOR_RADIUS))
            .count();
        assert_eq!(anchors, 4);
    }

    #[test]
    fn test_anchors_only_frame() {
        let config = BoardConfigBuilder::new()
            .variant(BoardVariant::Territory)
            .build()
            .unwrap();
        let scene = Scene::with_markers(config, Vec::new());
        let mut canvas = RecordingCanvas::default();

        // Four cocircular anchors: one welded vertex, nothing to shade
        let stats = Renderer::new().draw_frame(&scene, None, &mut canvas);
        assert_eq!(stats.regions, 0);
        assert_eq!(stats.ridges, 0);
        assert!(!stats.territory_skipped);
    }

    #[test]
    fn test_degenerate_territory_is_skipped() {
        let config = BoardConfig {
            width: 100.0,
            height: 100.0,
            anchor_inset: 50.0,
            show_territory: true,
            ..BoardConfig::default()
        };
        // All four anchors collapse onto the centre
        let scene = Scene::with_markers(config, vec![Marker::ball(Vec2::new(20.0, 20.0))]);
        let mut canvas = RecordingCanvas::default();

        let stats = Renderer::new().draw_frame(&scene, None, &mut canvas);

        assert!(stats.territory_skipped);
        assert_eq!(stats.regions, 0);
        // Field and ball are still drawn
        assert_eq!(canvas.ops[0], Op::Clear);
        assert!(matches!(canvas.ops.last(), Some(Op::Circle(_, r, _)) if *r == 10.0));
    }

    #[test]
    fn test_dragged_region_is_outlined() {
        let scene = territory_scene();
        let renderer = Renderer::new();

        let mut plain = RecordingCanvas::default();
        renderer.draw_frame(&scene, None, &mut plain);

        let mut dragging = RecordingCanvas::default();
        renderer.draw_frame(&scene, Some(8), &mut dragging);

        let territory = scene.territory().unwrap();
        let region = territory
            .region_containing(scene.marker(8).unwrap().position)
            .unwrap();
        assert_eq!(region.site, 8);
        assert_eq!(dragging.ops.len(), plain.ops.len() + region.polygon.len());
    }

    #[test]
    fn test_player_on_touchline_keeps_stripes_bounded() {
        let renderer = Renderer::new();
        let mut scene = territory_scene();
        let kickoff = renderer.draw_frame(&scene, None, &mut RecordingCanvas::default());

        // Just inside the touchline: one cell vertex lands far above the canvas
        scene.move_marker(6, Vec2::new(600.0, 50.5)).unwrap();
        let tessellation = scene.tessellate().unwrap();
        assert!(tessellation.vertices().iter().any(|v| v.y < -10_000.0));

        let stats = renderer.draw_frame(&scene, Some(6), &mut RecordingCanvas::default());

        assert_eq!(stats.regions, 22);
        // At most one scanline per stripe spacing across the canvas, per region
        let per_region = (1200.0 / 20.0 + 1.0) + (800.0 / 20.0 + 1.0);
        assert!(stats.stripes <= 22 * per_region as usize);
        assert!(stats.stripes < kickoff.stripes * 3);
    }
}
