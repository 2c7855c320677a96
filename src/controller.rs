//! Pointer interaction
//!
//! Turns pointer events into scene mutations: press selects the marker under
//! the pointer, moving drags it, release drops it.

use glam::Vec2;

use crate::error::Result;
use crate::scene::Scene;

/// Input events, in the order the front end received them
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed at a position
    Down(Vec2),
    /// Pointer moved to a position
    Move(Vec2),
    /// Primary button released
    Up,
    /// Window close requested
    Quit,
}

/// Whether the frame loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Drag state between frames
///
/// The controller is the only component that mutates the scene.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    selected: Option<usize>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// ID of the marker currently being dragged
    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Apply one event to the scene
    ///
    /// # Errors
    ///
    /// Returns `MarkerNotFound` if the selection no longer exists in `scene`
    pub fn handle(&mut self, scene: &mut Scene, event: PointerEvent) -> Result<LoopControl> {
        match event {
            PointerEvent::Down(position) => {
                self.selected = scene.marker_at(position);
                log::trace!("pointer down at {:?}: selected {:?}", position, self.selected);
            }
            PointerEvent::Move(position) => {
                if let Some(id) = self.selected {
                    scene.move_marker(id, position)?;
                }
            }
            PointerEvent::Up => {
                if let Some(id) = self.selected.take() {
                    log::trace!("released marker {}", id);
                }
            }
            PointerEvent::Quit => return Ok(LoopControl::Exit),
        }
        Ok(LoopControl::Continue)
    }

    /// Apply all pending events in order, stopping at a quit request
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`Controller::handle`]
    pub fn handle_all<I>(&mut self, scene: &mut Scene, events: I) -> Result<LoopControl>
    where
        I: IntoIterator<Item = PointerEvent>,
    {
        for event in events {
            if self.handle(scene, event)? == LoopControl::Exit {
                return Ok(LoopControl::Exit);
            }
        }
        Ok(LoopControl::Continue)
    }
}
