//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit window events into toolkit-independent `HostEvent`s.
//
// Architecture:
//   Winit Events → InputProcessor → HostEvent → RenderWidget::handle
//
// Winit reports less per event than the core needs, so the processor
// keeps the missing pieces itself:
// - modifiers from `ModifiersChanged`
// - held buttons (for pointer moves)
// - last cursor position, converted to logical pixels (for buttons)
// - the previous press (for double-click detection)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton, MouseScrollDelta},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{Buttons, HostEvent, KeyCode, Modifiers, MouseButton, WHEEL_STEP};

//=== Constants ===========================================================

/// Longest gap between two presses that still counts as a double click.
pub(crate) const DOUBLE_CLICK_INTERVAL: Duration = Duration::from_millis(500);

/// Largest per-axis pointer travel (logical px) between double-click presses.
pub(crate) const DOUBLE_CLICK_SLOP: i32 = 4;

//=== Click ===============================================================

#[derive(Debug, Clone, Copy)]
struct Click {
    button: MouseButton,
    at: Instant,
    position: (i32, i32),
}

//=== InputProcessor ======================================================

/// Converts Winit events to host events with stateful modifier, button
/// and position tracking.
pub(crate) struct InputProcessor {
    current_modifiers: Modifiers,
    buttons: Buttons,
    position: (i32, i32),
    last_click: Option<Click>,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            current_modifiers: Modifiers::NONE,
            buttons: Buttons::NONE,
            position: (0, 0),
            last_click: None,
        }
    }

    //--- Modifier State Management ----------------------------------------

    /// Updates cached modifier state (applied to subsequent events).
    pub(crate) fn update_modifiers(&mut self, modifiers_state: ModifiersState) {
        self.current_modifiers = Modifiers::from(modifiers_state);
    }

    //--- Pointer ----------------------------------------------------------

    /// Converts a physical cursor position to a logical pointer move.
    pub(crate) fn process_cursor_moved(
        &mut self,
        position: PhysicalPosition<f64>,
        scale_factor: f64,
    ) -> HostEvent {
        let logical = position.to_logical::<f64>(scale_factor);
        self.position = (logical.x.round() as i32, logical.y.round() as i32);

        HostEvent::PointerMove {
            x: self.position.0,
            y: self.position.1,
            modifiers: self.current_modifiers,
            buttons: self.buttons,
        }
    }

    pub(crate) fn process_cursor_entered(&self) -> HostEvent {
        HostEvent::PointerEnter {
            modifiers: Some(self.current_modifiers),
        }
    }

    pub(crate) fn process_cursor_left(&self) -> HostEvent {
        HostEvent::PointerLeave {
            modifiers: Some(self.current_modifiers),
        }
    }

    /// Converts a button change at the last known position.
    pub(crate) fn process_mouse_button(
        &mut self,
        button: WinitMouseButton,
        state: ElementState,
        now: Instant,
    ) -> HostEvent {
        let button = MouseButton::from(button);
        let (x, y) = self.position;
        let modifiers = Some(self.current_modifiers);

        match state {
            ElementState::Pressed => {
                self.buttons = self.buttons.with(button, true);
                let double_click = self.register_click(button, now);
                HostEvent::ButtonPress {
                    x,
                    y,
                    button,
                    double_click,
                    modifiers,
                }
            }
            ElementState::Released => {
                self.buttons = self.buttons.with(button, false);
                HostEvent::ButtonRelease {
                    x,
                    y,
                    button,
                    modifiers,
                }
            }
        }
    }

    /// Converts a scroll to wheel units (120 per line).
    pub(crate) fn process_wheel(&self, delta: MouseScrollDelta) -> HostEvent {
        let delta = match delta {
            MouseScrollDelta::LineDelta(_, lines) => (lines * WHEEL_STEP as f32).round() as i32,
            MouseScrollDelta::PixelDelta(pixels) => pixels.y.round() as i32,
        };
        HostEvent::Wheel { delta }
    }

    //--- Keyboard ---------------------------------------------------------

    /// Converts a Winit key event.
    ///
    /// Unmapped keys are still forwarded as `KeyCode::Unidentified` so
    /// their text can resolve a key symbol.
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> HostEvent {
        let text = key_event
            .text
            .as_deref()
            .or_else(|| key_event.logical_key.to_text());
        self.process_key(key_event.physical_key, text, key_event.state)
    }

    pub(crate) fn process_key(
        &self,
        physical_key: PhysicalKey,
        text: Option<&str>,
        state: ElementState,
    ) -> HostEvent {
        let key = match physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            PhysicalKey::Unidentified(_) => KeyCode::Unidentified,
        };
        let text = text.map(str::to_owned);
        let modifiers = Some(self.current_modifiers);

        match state {
            ElementState::Pressed => HostEvent::KeyPress {
                key,
                text,
                modifiers,
            },
            ElementState::Released => HostEvent::KeyRelease {
                key,
                text,
                modifiers,
            },
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Records a press and reports whether it completes a double click.
    fn register_click(&mut self, button: MouseButton, now: Instant) -> bool {
        let position = self.position;
        let is_double = self.last_click.is_some_and(|last| {
            last.button == button
                && now.saturating_duration_since(last.at) <= DOUBLE_CLICK_INTERVAL
                && (position.0 - last.position.0).abs() <= DOUBLE_CLICK_SLOP
                && (position.1 - last.position.1).abs() <= DOUBLE_CLICK_SLOP
        });

        // A completed double click does not start another one
        self.last_click = if is_double {
            None
        } else {
            Some(Click {
                button,
                at: now,
                position,
            })
        };
        is_double
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit ModifiersState to host Modifiers.
///
/// Winit normalizes platform keys (macOS Cmd → Ctrl, Option → Alt).
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

/// Converts Winit physical key codes to host key codes.
///
/// Numpad keys fold onto their main-keyboard counterparts, except numpad
/// enter which stays distinct from return.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Editing & Control ------------------------------------------

            Backspace => KeyCode::Backspace,
            Tab => KeyCode::Tab,
            Enter => KeyCode::Return,
            NumpadEnter => KeyCode::Enter,
            ShiftLeft | ShiftRight => KeyCode::Shift,
            ControlLeft | ControlRight => KeyCode::Control,
            AltLeft | AltRight => KeyCode::Alt,
            Pause => KeyCode::Pause,
            CapsLock => KeyCode::CapsLock,
            Escape => KeyCode::Escape,
            Space => KeyCode::Space,
            End => KeyCode::End,
            Home => KeyCode::Home,
            Insert => KeyCode::Insert,
            Delete => KeyCode::Delete,
            Help => KeyCode::Help,
            PrintScreen => KeyCode::SysReq,
            NumLock => KeyCode::NumLock,
            ScrollLock => KeyCode::ScrollLock,

            //--- Arrows -----------------------------------------------------

            ArrowLeft => KeyCode::ArrowLeft,
            ArrowUp => KeyCode::ArrowUp,
            ArrowRight => KeyCode::ArrowRight,
            ArrowDown => KeyCode::ArrowDown,

            //--- Digits -----------------------------------------------------

            Digit0 | Numpad0 => KeyCode::Digit0,
            Digit1 | Numpad1 => KeyCode::Digit1,
            Digit2 | Numpad2 => KeyCode::Digit2,
            Digit3 | Numpad3 => KeyCode::Digit3,
            Digit4 | Numpad4 => KeyCode::Digit4,
            Digit5 | Numpad5 => KeyCode::Digit5,
            Digit6 | Numpad6 => KeyCode::Digit6,
            Digit7 | Numpad7 => KeyCode::Digit7,
            Digit8 | Numpad8 => KeyCode::Digit8,
            Digit9 | Numpad9 => KeyCode::Digit9,

            //--- Letters ----------------------------------------------------

            KeyA => KeyCode::KeyA,
            KeyB => KeyCode::KeyB,
            KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD,
            KeyE => KeyCode::KeyE,
            KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG,
            KeyH => KeyCode::KeyH,
            KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ,
            KeyK => KeyCode::KeyK,
            KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM,
            KeyN => KeyCode::KeyN,
            KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP,
            KeyQ => KeyCode::KeyQ,
            KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS,
            KeyT => KeyCode::KeyT,
            KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV,
            KeyW => KeyCode::KeyW,
            KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY,
            KeyZ => KeyCode::KeyZ,

            //--- Punctuation ------------------------------------------------

            NumpadMultiply => KeyCode::Asterisk,
            NumpadAdd => KeyCode::Plus,
            Minus | NumpadSubtract => KeyCode::Minus,
            Period | NumpadDecimal => KeyCode::Period,
            Slash | NumpadDivide => KeyCode::Slash,

            //--- Function Keys ----------------------------------------------

            F1 => KeyCode::F1,
            F2 => KeyCode::F2,
            F3 => KeyCode::F3,
            F4 => KeyCode::F4,
            F5 => KeyCode::F5,
            F6 => KeyCode::F6,
            F7 => KeyCode::F7,
            F8 => KeyCode::F8,
            F9 => KeyCode::F9,
            F10 => KeyCode::F10,
            F11 => KeyCode::F11,
            F12 => KeyCode::F12,
            F13 => KeyCode::F13,
            F14 => KeyCode::F14,
            F15 => KeyCode::F15,
            F16 => KeyCode::F16,
            F17 => KeyCode::F17,
            F18 => KeyCode::F18,
            F19 => KeyCode::F19,
            F20 => KeyCode::F20,
            F21 => KeyCode::F21,
            F22 => KeyCode::F22,
            F23 => KeyCode::F23,
            F24 => KeyCode::F24,

            //--- Unmapped ---------------------------------------------------

            _ => KeyCode::Unidentified,
        }
    }
}

/// Converts Winit mouse buttons to host buttons.
///
/// Left/Right/Middle mapped directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
