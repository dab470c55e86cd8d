//=========================================================================
// Host Event Types
//
// Defines the toolkit-independent representation of host input events.
//
// This module abstracts away platform-specific input (e.g. Winit) into
// a unified format the translator turns into renderer calls.
//
// Responsibilities:
// - Represent pointer, keyboard and wheel inputs in a portable way
// - Carry modifier state where the host delivers it with the event
// - Leave modifier state absent where the host does not (enter/leave),
//   so the translator can fall back to the last recorded state
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    HostEvent (this module)
//         ↓
//    EventTranslator (+ StateTracker)
//         ↓
//    Interactor (renderer)
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons, macro buttons, and any
/// non-standard inputs. The renderer has no dispatch for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Middle button (wheel click).
    Middle,

    /// Secondary button (typically right).
    Right,

    /// Any other button (side buttons, thumb buttons, macro keys).
    Other,
}

//=== Buttons =============================================================

/// Set of mouse buttons held while the pointer moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Buttons {
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl Buttons {
    /// No buttons held.
    pub const NONE: Self = Self {
        left: false,
        middle: false,
        right: false,
    };

    /// Returns a copy with `button` marked as held or released.
    ///
    /// `MouseButton::Other` is not tracked and leaves the set unchanged.
    pub fn with(mut self, button: MouseButton, held: bool) -> Self {
        match button {
            MouseButton::Left => self.left = held,
            MouseButton::Middle => self.middle = held,
            MouseButton::Right => self.right = held,
            MouseButton::Other => {}
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        !(self.left || self.middle || self.right)
    }
}

//=== KeyCode =============================================================

/// Host keyboard key identifier.
///
/// Represents the physical key, not the character produced. Keys that
/// have a renderer keysym of their own are listed; everything else is
/// `Unidentified` and resolves through the character table or the
/// `"None"` fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Editing & Control ------------------------------------------------

    Backspace,
    Tab,
    /// Shift+Tab as reported by some hosts.
    Backtab,
    Return,
    /// Keypad enter.
    Enter,
    Shift,
    Control,
    Alt,
    Pause,
    CapsLock,
    Escape,
    Space,
    End,
    Home,
    Insert,
    Delete,
    Help,
    SysReq,
    NumLock,
    ScrollLock,

    //--- Arrow Keys -------------------------------------------------------

    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,

    //--- Numeric Keys -----------------------------------------------------

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Punctuation ------------------------------------------------------

    Asterisk,
    Plus,
    Minus,
    Period,
    Slash,

    //--- Function Keys ----------------------------------------------------

    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,

    //--- Fallback ---------------------------------------------------------

    /// Key not explicitly mapped by the input layer.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt).
///
/// The renderer protocol only carries ctrl and shift; alt is kept so the
/// tracked state mirrors what the host reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Shift key held (either left or right).
    pub shift: bool,

    /// Ctrl key held (either left or right, Command on macOS).
    pub ctrl: bool,

    /// Alt key held (either left or right, Option on macOS).
    pub alt: bool,
}

//--- Modifier Constants --------------------------------------------------

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };

    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
    };
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

//=== HostEvent ===========================================================

/// Input event delivered by the host toolkit.
///
/// Coordinates are logical pixels with a top-left origin. `modifiers` is
/// `None` when the host event carries no modifier state; the translator
/// then uses the last state recorded by a pointer move.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Mouse button pressed. `double_click` marks the second press of a
    /// double click.
    ButtonPress {
        x: i32,
        y: i32,
        button: MouseButton,
        double_click: bool,
        modifiers: Option<Modifiers>,
    },

    /// Mouse button released.
    ButtonRelease {
        x: i32,
        y: i32,
        button: MouseButton,
        modifiers: Option<Modifiers>,
    },

    /// Pointer moved. Hosts always report full state with a move.
    PointerMove {
        x: i32,
        y: i32,
        modifiers: Modifiers,
        buttons: Buttons,
    },

    /// Pointer entered the surface (no coordinates).
    PointerEnter { modifiers: Option<Modifiers> },

    /// Pointer left the surface (no coordinates).
    PointerLeave { modifiers: Option<Modifiers> },

    /// Key pressed. `text` is the produced text, if any.
    KeyPress {
        key: KeyCode,
        text: Option<String>,
        modifiers: Option<Modifiers>,
    },

    /// Key released.
    KeyRelease {
        key: KeyCode,
        text: Option<String>,
        modifiers: Option<Modifiers>,
    },

    /// Vertical wheel rotation in eighths of a degree (120 per notch).
    Wheel { delta: i32 },
}

impl HostEvent {
    /// Returns the modifier state carried by the event itself, if any.
    pub fn live_modifiers(&self) -> Option<Modifiers> {
        match self {
            Self::ButtonPress { modifiers, .. }
            | Self::ButtonRelease { modifiers, .. }
            | Self::PointerEnter { modifiers }
            | Self::PointerLeave { modifiers }
            | Self::KeyPress { modifiers, .. }
            | Self::KeyRelease { modifiers, .. } => *modifiers,
            Self::PointerMove { modifiers, .. } => Some(*modifiers),
            Self::Wheel { .. } => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_with_sets_and_clears() {
        let held = Buttons::NONE.with(MouseButton::Left, true);
        assert!(held.left && !held.middle && !held.right);

        let released = held.with(MouseButton::Left, false);
        assert!(released.is_empty());
    }

    #[test]
    fn buttons_ignore_other() {
        let held = Buttons::NONE.with(MouseButton::Other, true);
        assert_eq!(held, Buttons::NONE);
    }

    #[test]
    fn modifiers_default_is_none() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }

    #[test]
    fn move_always_has_live_modifiers() {
        let event = HostEvent::PointerMove {
            x: 1,
            y: 2,
            modifiers: Modifiers::CTRL,
            buttons: Buttons::NONE,
        };
        assert_eq!(event.live_modifiers(), Some(Modifiers::CTRL));
    }

    #[test]
    fn leave_without_modifiers_reports_none() {
        let event = HostEvent::PointerLeave { modifiers: None };
        assert_eq!(event.live_modifiers(), None);
    }

    #[test]
    fn wheel_has_no_modifiers() {
        assert_eq!(HostEvent::Wheel { delta: 120 }.live_modifiers(), None);
    }
}
