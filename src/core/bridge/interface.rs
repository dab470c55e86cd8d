//=========================================================================
// Bridge Interface
//=========================================================================
//
// Contract between the bridge core, the host toolkit and the renderer.
//
//   HostSurface   ← widget asks the host for size/scale, repaint, cursor
//   RenderWindow  ← widget binds the window, sets DPI/size, reads cursor
//   Interactor    ← widget feeds normalized events
//
// Host and renderer backends implement these traits; the core never
// names a concrete toolkit or rendering engine.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::str::FromStr;

//=== Internal Dependencies ===============================================

use crate::core::cursor::{CursorShape, HostCursor};
use crate::core::error::BridgeError;

//=== EventInformation ====================================================

/// Normalized event information handed to the interactor before every
/// dispatch.
///
/// Coordinates are physical pixels with a bottom-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventInformation {
    pub x: i32,
    pub y: i32,
    pub ctrl: bool,
    pub shift: bool,
    /// Character of a key event, `'\0'` for pointer events.
    pub key_char: char,
    /// 1 for the second press of a double click, otherwise 0.
    pub repeat: i32,
    /// Renderer keysym of a key event, `None` for pointer events.
    pub key_sym: Option<&'static str>,
}

//=== InteractorEvent =====================================================

/// Event methods the widget dispatches on the interactor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractorEvent {
    LeftButtonPress,
    LeftButtonRelease,
    MiddleButtonPress,
    MiddleButtonRelease,
    RightButtonPress,
    RightButtonRelease,
    MouseMove,
    Enter,
    Leave,
    KeyPress,
    KeyRelease,
    Char,
    MouseWheelForward,
    MouseWheelBackward,
    Configure,
    Timer,
}

//=== Capability ==========================================================

/// Interactor operations the widget forwards by name without wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Initialize,
    ReInitialize,
    Start,
    Enable,
    Disable,
    ExitCallback,
    TerminateApp,
    UpdateSize,
}

impl Capability {
    pub const ALL: [Capability; 8] = [
        Self::Initialize,
        Self::ReInitialize,
        Self::Start,
        Self::Enable,
        Self::Disable,
        Self::ExitCallback,
        Self::TerminateApp,
        Self::UpdateSize,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Initialize => "Initialize",
            Self::ReInitialize => "ReInitialize",
            Self::Start => "Start",
            Self::Enable => "Enable",
            Self::Disable => "Disable",
            Self::ExitCallback => "ExitCallback",
            Self::TerminateApp => "TerminateApp",
            Self::UpdateSize => "UpdateSize",
        }
    }
}

impl FromStr for Capability {
    type Err = BridgeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cap| cap.name() == name)
            .ok_or_else(|| BridgeError::missing("Interactor", name))
    }
}

//=== HostSurface =========================================================

/// The host widget the render surface lives in.
pub trait HostSurface {
    /// Current size in logical pixels.
    fn logical_size(&self) -> (u32, u32);

    /// Logical-to-physical pixel ratio of the display.
    fn pixel_ratio(&self) -> f64;

    /// Schedules a repaint; the host delivers it later as a paint event.
    fn request_redraw(&self);

    /// Displays `cursor` over the surface.
    fn set_cursor(&self, cursor: HostCursor);
}

//=== RenderWindow ========================================================

/// The renderer's window object.
pub trait RenderWindow {
    /// Attaches the renderer to the host window identified by `info`.
    fn set_window_info(&mut self, info: &str);

    fn set_dpi(&mut self, dpi: i32);

    /// Sets the drawable size in physical pixels.
    fn set_size(&mut self, width: i32, height: i32);

    /// Cursor the renderer currently wants displayed.
    fn current_cursor(&self) -> CursorShape;

    /// Requests a stereo-capable window. Renderers without stereo
    /// support ignore it.
    fn enable_stereo(&mut self) {}

    /// Releases renderer resources bound to the host window.
    fn finalize(&mut self);
}

//=== Interactor ==========================================================

/// The renderer's event-driven interactor.
pub trait Interactor {
    fn set_event_information(&mut self, info: &EventInformation);

    fn dispatch(&mut self, event: InteractorEvent);

    /// Sets the interaction area in physical pixels.
    fn set_size(&mut self, width: i32, height: i32);

    /// Renders one frame.
    fn render(&mut self);

    /// Invokes a forwarded capability. Interactors expose nothing by
    /// default.
    fn invoke(&mut self, capability: Capability) -> Result<(), BridgeError> {
        Err(BridgeError::missing("Interactor", capability.name()))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
