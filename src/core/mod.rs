//=========================================================================
// Core
//
// Toolkit-independent half of the bridge. Nothing in here knows about
// winit; the platform layer feeds it `HostEvent`s and implements
// `HostSurface` for a real window.
//
// Components:
// - `input`: host event types, pointer state, wheel accumulation
// - `keysym`: key → renderer key-symbol tables
// - `cursor`: renderer cursor IDs → host cursors
// - `translator`: host events → renderer event information + events
// - `timer`: renderer-requested repeating timer
// - `cursor_sync`: deferred cursor read-back
// - `lifecycle`: exactly-once finalization
// - `bridge`: host/renderer traits and the notification channel
// - `widget`: the `RenderWidget` composing all of the above
//
//=========================================================================

//=== Module Declarations =================================================

pub mod bridge;
pub mod config;
pub mod cursor;
pub mod cursor_sync;
pub mod error;
pub mod input;
pub mod keysym;
pub mod lifecycle;
pub mod timer;
pub mod translator;
pub mod widget;
