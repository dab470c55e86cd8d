//=========================================================================
// Bridge
//=========================================================================
//
// Seams between the core, the host toolkit and the renderer.
//
// Components:
// - `interface`: host/renderer traits and the normalized event types
// - `notify`: renderer → widget notification channel
//
//=========================================================================

//=== Module Declarations =================================================

pub mod interface;
pub mod notify;

//=== Public API ==========================================================

pub use interface::{
    Capability, EventInformation, HostSurface, Interactor, InteractorEvent, RenderWindow,
};
pub use notify::{NotificationInbox, Notifier, RendererNotification};
