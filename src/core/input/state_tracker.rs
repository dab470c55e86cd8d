//=========================================================================
// State Tracker
//=========================================================================
//
// Last-known pointer state for events that arrive without one.
//
// Architecture:
//   PointerMove → on_move() → PointerState → current()
//   ButtonPress → set_active_button()
//
// Enter, leave and key events carry no pointer coordinates. Their
// renderer event information reuses the most recent observed state.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::event::{Buttons, Modifiers, MouseButton};

//=== PointerState ========================================================

/// Snapshot of the pointer as last reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerState {
    /// Logical x coordinate (top-left origin).
    pub x: i32,

    /// Logical y coordinate (top-left origin).
    pub y: i32,

    /// Modifier state reported with the last move.
    pub modifiers: Modifiers,

    /// Buttons held during the last move.
    pub buttons: Buttons,

    /// Button of the most recent press. Never cleared by a release.
    pub active_button: Option<MouseButton>,
}

//=== StateTracker ========================================================

/// Holds the pointer state that survives between host events.
#[derive(Debug, Default)]
pub struct StateTracker {
    state: PointerState,
}

impl StateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Updates ----------------------------------------------------------

    /// Records a pointer move. Position, modifiers and buttons are all
    /// replaced; the active button is left alone.
    pub fn on_move(&mut self, x: i32, y: i32, modifiers: Modifiers, buttons: Buttons) {
        self.state.x = x;
        self.state.y = y;
        self.state.modifiers = modifiers;
        self.state.buttons = buttons;
    }

    /// Records the button of a press.
    pub fn set_active_button(&mut self, button: MouseButton) {
        self.state.active_button = Some(button);
    }

    //--- Queries ----------------------------------------------------------

    pub fn current(&self) -> PointerState {
        self.state
    }

    pub fn position(&self) -> (i32, i32) {
        (self.state.x, self.state.y)
    }

    pub fn modifiers(&self) -> Modifiers {
        self.state.modifiers
    }

    pub fn active_button(&self) -> Option<MouseButton> {
        self.state.active_button
    }

    /// Resolves modifiers for an event: live state wins, recorded state
    /// fills in when the event has none.
    pub fn resolve_modifiers(&self, live: Option<Modifiers>) -> Modifiers {
        live.unwrap_or(self.state.modifiers)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
