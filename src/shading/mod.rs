//! Stripe shading for territory regions
//!
//! Produces engine-agnostic line segments that fill a region with a
//! cross-hatch of stripes. Any backend able to draw lines can render them.

mod colors;

pub use colors::{BasicTeamColors, CustomTeamColors, Rgba, TeamColorMapper};

use glam::Vec2;

use crate::geometry::bounds;
use crate::territory::Region;

/// A single stripe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    #[inline]
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }
}

/// Stripes for all regions of a frame
#[derive(Debug, Clone, Default)]
pub struct ShadingData {
    /// Stripe segments
    pub segments: Vec<Segment>,
    /// One color per segment
    pub colors: Vec<Rgba>,
}

impl ShadingData {
    /// Get the number of segments
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Check if there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate over segments with their colors
    pub fn iter(&self) -> impl Iterator<Item = (&Segment, &Rgba)> + '_ {
        self.segments.iter().zip(self.colors.iter())
    }
}

/// Shade every region in its team's color
///
/// Only scanlines inside `view` (`(min, max)`, usually the canvas) are
/// emitted, so cells reaching far off-canvas cost no more than the canvas.
pub fn shade_regions<C>(
    regions: &[Region],
    color_mapper: &C,
    spacing: f32,
    view: (Vec2, Vec2),
) -> ShadingData
where
    C: TeamColorMapper,
{
    let mut shading = ShadingData::default();

    for region in regions {
        let color = color_mapper.map_color(region.team);
        let stripes = stripe_segments_within(&region.polygon, spacing, view);
        shading.colors.extend(std::iter::repeat(color).take(stripes.len()));
        shading.segments.extend(stripes);
    }

    shading
}

/// Approximate stripe fill of `polygon`
///
/// Two sweeps over the polygon's bounding box, both always run:
///
/// 1. vertical scanlines every `spacing` units; each emits a slanted stripe
///    from `(x, y_start)` to `(x + spacing, y_end)`
/// 2. horizontal scanlines every `spacing` units; each emits a slanted stripe
///    from `(x_start, y)` to `(x_end, y + spacing)`
///
/// The bounds of a scanline start as the bounding box and are tightened by
/// every edge it crosses: edges running in +axis direction raise the lower
/// bound, the others lower the upper bound. Edges parallel to the scanline
/// are skipped. Corners may show small gaps or overdraw.
///
/// ```
/// use glam::Vec2;
/// use tactics_board::shading::stripe_segments;
///
/// let square = [
///     Vec2::new(0.0, 0.0),
///     Vec2::new(100.0, 0.0),
///     Vec2::new(100.0, 100.0),
///     Vec2::new(0.0, 100.0),
/// ];
/// // 6 vertical plus 6 horizontal scanlines
/// assert_eq!(stripe_segments(&square, 20.0).len(), 12);
/// ```
pub fn stripe_segments(polygon: &[Vec2], spacing: f32) -> Vec<Segment> {
    match bounds(polygon) {
        Some(extent) => stripe_segments_within(polygon, spacing, extent),
        None => Vec::new(),
    }
}

/// [`stripe_segments`] restricted to scanlines inside `view`
///
/// Scanlines keep their positions relative to the polygon's bounding box,
/// so every stripe emitted here is also emitted, unchanged, by
/// [`stripe_segments`]. Stripe endpoints are not clipped.
pub fn stripe_segments_within(
    polygon: &[Vec2],
    spacing: f32,
    view: (Vec2, Vec2),
) -> Vec<Segment> {
    if polygon.len() < 3 || !(spacing > 0.0) {
        return Vec::new();
    }
    let Some((min, max)) = bounds(polygon) else {
        return Vec::new();
    };
    let (view_min, view_max) = view;

    let mut segments = Vec::new();

    for x in scanlines(min.x, max.x, view_min.x, view_max.x, spacing) {
        let (y_start, y_end) = scanline_bounds(polygon, x, min.y, max.y, |p| (p.x, p.y));
        segments.push(Segment::new(
            Vec2::new(x, y_start),
            Vec2::new(x + spacing, y_end),
        ));
    }

    for y in scanlines(min.y, max.y, view_min.y, view_max.y, spacing) {
        let (x_start, x_end) = scanline_bounds(polygon, y, min.x, max.x, |p| (p.y, p.x));
        segments.push(Segment::new(
            Vec2::new(x_start, y),
            Vec2::new(x_end, y + spacing),
        ));
    }

    segments
}

/// Scanline positions `min, min + spacing, ...` up to and including `max`,
/// skipping those outside `[from, to]`
fn scanlines(
    min: f32,
    max: f32,
    from: f32,
    to: f32,
    spacing: f32,
) -> impl Iterator<Item = f32> {
    let first = if from > min {
        ((from - min) / spacing).ceil() as u64
    } else {
        0
    };
    let last = max.min(to);

    (first..)
        .map(move |k| min + k as f32 * spacing)
        .take_while(move |&at| at <= last)
}

/// Tighten `[lo, hi]` along one scanline
///
/// `axes` maps a vertex to `(sweep, cross)` coordinates: the sweep axis is
/// the one the scanline is fixed on.
fn scanline_bounds<F>(polygon: &[Vec2], at: f32, lo: f32, hi: f32, axes: F) -> (f32, f32)
where
    F: Fn(Vec2) -> (f32, f32),
{
    let (mut start, mut end) = (lo, hi);

    for (i, &p1) in polygon.iter().enumerate() {
        let p2 = polygon[(i + 1) % polygon.len()];
        let (s1, c1) = axes(p1);
        let (s2, c2) = axes(p2);

        let spans = (s1 <= at && at <= s2) || (s2 <= at && at <= s1);
        // Parallel to the scanline: no single crossing
        if !spans || s1 == s2 {
            continue;
        }

        let crossing = c1 + (c2 - c1) * (at - s1) / (s2 - s1);
        if lo <= crossing && crossing <= hi {
            if s1 < s2 {
                start = start.max(crossing);
            } else {
                end = end.min(crossing);
            }
        }
    }

    (start, end)
}
