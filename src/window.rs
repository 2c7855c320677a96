//! macroquad front end
//!
//! Polls the mouse once per frame, feeds the resulting [`PointerEvent`]s to a
//! [`Controller`] and redraws the whole scene.

use glam::Vec2;
use macroquad::color::Color;
use macroquad::input::{
    is_mouse_button_pressed, is_mouse_button_released, is_quit_requested, mouse_position,
    prevent_quit, MouseButton,
};
use macroquad::shapes::{draw_circle, draw_circle_lines, draw_line, draw_rectangle_lines};
use macroquad::text::{draw_text, measure_text};
use macroquad::window::{clear_background, next_frame, Conf};

use crate::config::{BoardConfig, BoardVariant};
use crate::controller::{Controller, LoopControl, PointerEvent};
use crate::error::Result;
use crate::render::{Canvas, Renderer};
use crate::scene::Scene;
use crate::shading::Rgba;

const WINDOW_TITLE: &str = "Soccer Tactics Board";

/// Canvas drawing straight to the macroquad window
#[derive(Debug, Clone, Copy, Default)]
pub struct MacroquadCanvas;

fn color(rgba: Rgba) -> Color {
    Color::new(rgba[0], rgba[1], rgba[2], rgba[3])
}

impl Canvas for MacroquadCanvas {
    fn clear(&mut self, rgba: Rgba) {
        clear_background(color(rgba));
    }

    fn rect_outline(&mut self, min: Vec2, size: Vec2, thickness: f32, rgba: Rgba) {
        draw_rectangle_lines(min.x, min.y, size.x, size.y, thickness, color(rgba));
    }

    fn circle(&mut self, center: Vec2, radius: f32, rgba: Rgba) {
        draw_circle(center.x, center.y, radius, color(rgba));
    }

    fn circle_outline(&mut self, center: Vec2, radius: f32, thickness: f32, rgba: Rgba) {
        draw_circle_lines(center.x, center.y, radius, thickness, color(rgba));
    }

    fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, rgba: Rgba) {
        draw_line(from.x, from.y, to.x, to.y, thickness, color(rgba));
    }

    fn text_centered(&mut self, text: &str, center: Vec2, size: f32, rgba: Rgba) {
        let dims = measure_text(text, None, size as u16, 1.0);
        // draw_text positions the baseline
        draw_text(
            text,
            center.x - dims.width / 2.0,
            center.y + dims.offset_y / 2.0,
            size,
            color(rgba),
        );
    }
}

/// Window settings for a variant's preset canvas
pub fn conf(variant: BoardVariant) -> Conf {
    let (width, height) = variant.canvas_size();
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Translate this frame's mouse state into pointer events
///
/// A move is only reported when the position changed since the last frame.
fn poll_events(last_pointer: &mut Option<Vec2>) -> Vec<PointerEvent> {
    let (x, y) = mouse_position();
    let pointer = Vec2::new(x, y);
    let mut events = Vec::new();

    if is_mouse_button_pressed(MouseButton::Left) {
        events.push(PointerEvent::Down(pointer));
    }
    if *last_pointer != Some(pointer) {
        events.push(PointerEvent::Move(pointer));
        *last_pointer = Some(pointer);
    }
    if is_mouse_button_released(MouseButton::Left) {
        events.push(PointerEvent::Up);
    }
    if is_quit_requested() {
        events.push(PointerEvent::Quit);
    }

    events
}

/// Run the board until the window is closed
///
/// # Errors
///
/// Propagates controller errors; the frame loop stops on the first one
pub async fn run(config: BoardConfig) -> Result<()> {
    prevent_quit();

    let mut scene = Scene::new(config);
    let mut controller = Controller::new();
    let renderer = Renderer::new();
    let mut canvas = MacroquadCanvas;
    let mut last_pointer = None;

    log::info!(
        "{} board ready: {}x{}, {} markers",
        config.variant.name(),
        config.width,
        config.height,
        scene.markers().len()
    );

    loop {
        let events = poll_events(&mut last_pointer);
        if controller.handle_all(&mut scene, events)? == LoopControl::Exit {
            break;
        }

        let stats = renderer.draw_frame(&scene, controller.selected(), &mut canvas);
        log::trace!("frame: {:?}", stats);

        next_frame().await;
    }

    log::info!("window closed");
    Ok(())
}
