//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use render_bridge::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Entry point
pub use crate::host::{Host, HostBuilder};
pub use crate::platform::PlatformError;

// Renderer seams
pub use crate::core::bridge::{
    Capability, EventInformation, HostSurface, Interactor, InteractorEvent, Notifier,
    RenderWindow, RendererNotification,
};

// Widget
pub use crate::core::config::{BridgeConfig, PixelRatio};
pub use crate::core::error::BridgeError;
pub use crate::core::widget::{Forwarded, RenderWidget, WindowBinding, NATIVE_HOOK};

// Host-side types
pub use crate::core::cursor::{CursorShape, HostCursor};
pub use crate::core::input::{Buttons, HostEvent, KeyCode, Modifiers, MouseButton};
