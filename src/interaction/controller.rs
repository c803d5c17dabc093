//! Interaction controller

use winit::event::MouseButton;

use crate::brush::{BrushParams, DragSession, SessionSummary, StrokeDirection, StrokeOutcome};
use crate::terrain::{PickResult, TerrainMesh};
use super::mode::{InteractionMode, Listeners, ModeEffects};

/// Owns the interaction mode, the brush parameters, the registered pointer
/// handlers and the drag in progress.
///
/// Mode changes go through [`InteractionController::set_mode`] only. Pointer
/// events are offered to the controller unconditionally; those without a
/// registered handler are dropped, and picking is only performed (through the
/// supplied closure) when a handler will use it.
pub struct InteractionController {
    mode: InteractionMode,
    params: BrushParams,
    listeners: Listeners,
    session: Option<DragSession>,
}

impl InteractionController {
    /// Start in navigation mode
    pub fn new(params: BrushParams) -> Self {
        Self {
            mode: InteractionMode::Navigation,
            params,
            listeners: Listeners::none(),
            session: None,
        }
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn params(&self) -> &BrushParams {
        &self.params
    }

    /// Brush parameters for live edits; changes apply from the next stroke
    pub fn params_mut(&mut self) -> &mut BrushParams {
        &mut self.params
    }

    pub fn listeners(&self) -> Listeners {
        self.listeners
    }

    /// Host switches for the current mode
    pub fn effects(&self) -> ModeEffects {
        self.mode.effects()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Switch modes and return what the host must apply.
    ///
    /// Entering navigation drops every pointer handler and ends any drag.
    /// Entering painting registers the press and release handlers; the move
    /// handler is only registered by a press that hits the terrain.
    pub fn set_mode(&mut self, mode: InteractionMode) -> ModeEffects {
        match mode {
            InteractionMode::Navigation => {
                self.listeners = Listeners::none();
                if let Some(session) = self.session.take() {
                    let summary = session.end();
                    log::debug!("Drag cut short by mode change after {} strokes", summary.strokes);
                }
            }
            InteractionMode::Painting => {
                self.listeners.pointer_down = true;
                self.listeners.pointer_up = true;
            }
        }

        if self.mode != mode {
            log::info!("Mode: {} -> {}", self.mode, mode);
        }
        self.mode = mode;
        mode.effects()
    }

    /// A button went down. Returns the stroke applied, if any.
    pub fn pointer_down<F>(&mut self, mesh: &mut TerrainMesh, button: MouseButton, pick: F) -> Option<StrokeOutcome>
    where
        F: FnOnce(&TerrainMesh) -> Option<PickResult>,
    {
        if !self.listeners.pointer_down {
            return None;
        }
        let hit = pick(mesh)?;
        let direction = StrokeDirection::from_button(button);

        let outcome = match self.session.as_mut() {
            // Another button pressed mid-drag stamps again within the same drag
            Some(session) => session.update(mesh, Some(hit.point), &self.params, direction),
            None => {
                let (session, outcome) = DragSession::begin(mesh, hit.point, &self.params, direction);
                self.session = Some(session);
                Some(outcome)
            }
        };
        self.listeners.pointer_move = true;
        outcome
    }

    /// The pointer moved with `buttons` held (pointer-style mask).
    pub fn pointer_move<F>(&mut self, mesh: &mut TerrainMesh, buttons: u8, pick: F) -> Option<StrokeOutcome>
    where
        F: FnOnce(&TerrainMesh) -> Option<PickResult>,
    {
        if !self.listeners.pointer_move {
            return None;
        }
        let session = self.session.as_mut()?;
        let point = pick(mesh).map(|hit| hit.point);
        session.update(mesh, point, &self.params, StrokeDirection::from_buttons(buttons))
    }

    /// A button was released: the drag, if any, ends.
    pub fn pointer_up(&mut self) -> Option<SessionSummary> {
        if !self.listeners.pointer_up {
            return None;
        }
        self.listeners.pointer_move = false;
        let summary = self.session.take()?.end();
        log::debug!(
            "Drag finished: {} strokes ({} raise, {} lower)",
            summary.strokes, summary.raise_strokes, summary.lower_strokes
        );
        Some(summary)
    }
}
