//=========================================================================
// Input
//
// Toolkit-independent input types and the state that must persist
// between host events.
//
// Components:
// - `event`: host events, keys, buttons, modifiers
// - `state_tracker`: last-known pointer state
// - `wheel`: high-resolution wheel accumulation
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
pub mod state_tracker;
pub mod wheel;

//=== Public API ==========================================================

pub use event::{Buttons, HostEvent, KeyCode, Modifiers, MouseButton};
pub use state_tracker::{PointerState, StateTracker};
pub use wheel::{WheelAccumulator, WheelStep, WHEEL_STEP};
