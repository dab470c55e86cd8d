//=========================================================================
// Event Translator
//=========================================================================
//
// Converts host events into the renderer's event protocol.
//
// Architecture:
//   HostEvent → translate() → Translation { info, events }
//                               │       │
//                               │       └─ dispatched in order
//                               └─ set before the first dispatch
//
// Coordinates: the host reports logical pixels from the top-left, the
// renderer expects physical pixels from the bottom-left:
//
//   x' = round(x · ratio)
//   y' = round((height − y − 1) · ratio)
//
// Translation is pure apart from the pointer/wheel state it owns, so the
// widget decides when and against which interactor to apply it.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::bridge::{EventInformation, InteractorEvent};
use crate::core::input::{
    HostEvent, KeyCode, Modifiers, MouseButton, StateTracker, WheelAccumulator, WheelStep,
};
use crate::core::keysym;

/// DPI of a display at pixel ratio 1.0.
pub const BASE_DPI: f64 = 72.0;

//=== SurfaceGeometry =====================================================

/// Surface facts needed to map host coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
    /// Logical height of the surface.
    pub height: i32,

    /// Resolved logical-to-physical pixel ratio.
    pub pixel_ratio: f64,
}

//=== Translation =========================================================

/// Renderer calls produced by one host event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Translation {
    /// Event information to set first, if the event carries any.
    pub info: Option<EventInformation>,

    /// Interactor events to dispatch, in order.
    pub events: Vec<InteractorEvent>,
}

impl Translation {
    fn with_info(info: EventInformation, events: Vec<InteractorEvent>) -> Self {
        Self {
            info: Some(info),
            events,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.info.is_none() && self.events.is_empty()
    }
}

//=== ResizePlan ==========================================================

/// Physical size and DPI for a resized surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizePlan {
    pub width: i32,
    pub height: i32,
    pub dpi: i32,
}

impl ResizePlan {
    pub fn new(logical: (u32, u32), pixel_ratio: f64) -> Self {
        Self {
            width: scale(logical.0 as f64, pixel_ratio),
            height: scale(logical.1 as f64, pixel_ratio),
            dpi: scale(BASE_DPI, pixel_ratio),
        }
    }
}

fn scale(value: f64, ratio: f64) -> i32 {
    (value * ratio).round() as i32
}

//=== EventTranslator =====================================================

#[derive(Debug, Default)]
pub struct EventTranslator {
    tracker: StateTracker,
    wheel: WheelAccumulator,
}

impl EventTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Translation ------------------------------------------------------

    /// Translates one host event, updating pointer and wheel state.
    pub fn translate(&mut self, event: &HostEvent, geometry: SurfaceGeometry) -> Translation {
        let modifiers = self.tracker.resolve_modifiers(event.live_modifiers());

        let translation = match event {
            HostEvent::ButtonPress { x, y, button, double_click, .. } => {
                let repeat = i32::from(*double_click);
                let info = self.pointer_info(*x, *y, modifiers, repeat, geometry);

                self.tracker.set_active_button(*button);
                let events = press_event(*button).into_iter().collect();
                Translation::with_info(info, events)
            }

            HostEvent::ButtonRelease { x, y, .. } => {
                let info = self.pointer_info(*x, *y, modifiers, 0, geometry);

                // The recorded press decides the release, not the event
                let events = self
                    .tracker
                    .active_button()
                    .and_then(release_event)
                    .into_iter()
                    .collect();
                Translation::with_info(info, events)
            }

            HostEvent::PointerMove { x, y, modifiers: live, buttons } => {
                self.tracker.on_move(*x, *y, *live, *buttons);
                let info = self.pointer_info(*x, *y, *live, 0, geometry);
                Translation::with_info(info, vec![InteractorEvent::MouseMove])
            }

            HostEvent::PointerEnter { .. } => {
                let (x, y) = self.tracker.position();
                let info = self.pointer_info(x, y, modifiers, 0, geometry);
                Translation::with_info(info, vec![InteractorEvent::Enter])
            }

            HostEvent::PointerLeave { .. } => {
                let (x, y) = self.tracker.position();
                let info = self.pointer_info(x, y, modifiers, 0, geometry);
                Translation::with_info(info, vec![InteractorEvent::Leave])
            }

            HostEvent::KeyPress { key, text, .. } => {
                let info = self.key_info(*key, text.as_deref(), modifiers, geometry);
                Translation::with_info(
                    info,
                    vec![InteractorEvent::KeyPress, InteractorEvent::Char],
                )
            }

            HostEvent::KeyRelease { key, text, .. } => {
                let info = self.key_info(*key, text.as_deref(), modifiers, geometry);
                Translation::with_info(info, vec![InteractorEvent::KeyRelease])
            }

            HostEvent::Wheel { delta } => {
                // Wheel steps reuse the last event information
                let events = match self.wheel.accumulate(*delta) {
                    Some(WheelStep::Forward) => vec![InteractorEvent::MouseWheelForward],
                    Some(WheelStep::Backward) => vec![InteractorEvent::MouseWheelBackward],
                    None => Vec::new(),
                };
                Translation { info: None, events }
            }
        };

        trace!(target: "bridge::input", "{:?} → {:?}", event, translation);
        translation
    }

    //--- Queries ----------------------------------------------------------

    pub fn tracker(&self) -> &StateTracker {
        &self.tracker
    }

    pub fn pending_wheel_delta(&self) -> i32 {
        self.wheel.pending()
    }

    //--- Internal Helpers -------------------------------------------------

    fn pointer_info(
        &self,
        x: i32,
        y: i32,
        modifiers: Modifiers,
        repeat: i32,
        geometry: SurfaceGeometry,
    ) -> EventInformation {
        event_information(x, y, modifiers, '\0', repeat, None, geometry)
    }

    fn key_info(
        &self,
        key: KeyCode,
        text: Option<&str>,
        modifiers: Modifiers,
        geometry: SurfaceGeometry,
    ) -> EventInformation {
        let (x, y) = self.tracker.position();
        let (key_char, key_sym) = keysym::resolve(key, text);
        event_information(x, y, modifiers, key_char, 0, Some(key_sym), geometry)
    }
}

//=== Free Helpers ========================================================

fn event_information(
    x: i32,
    y: i32,
    modifiers: Modifiers,
    key_char: char,
    repeat: i32,
    key_sym: Option<&'static str>,
    geometry: SurfaceGeometry,
) -> EventInformation {
    let ratio = geometry.pixel_ratio;
    EventInformation {
        x: scale(f64::from(x), ratio),
        y: scale(f64::from(geometry.height) - f64::from(y) - 1.0, ratio),
        ctrl: modifiers.ctrl,
        shift: modifiers.shift,
        key_char,
        repeat,
        key_sym,
    }
}

fn press_event(button: MouseButton) -> Option<InteractorEvent> {
    match button {
        MouseButton::Left => Some(InteractorEvent::LeftButtonPress),
        MouseButton::Middle => Some(InteractorEvent::MiddleButtonPress),
        MouseButton::Right => Some(InteractorEvent::RightButtonPress),
        MouseButton::Other => None,
    }
}

fn release_event(button: MouseButton) -> Option<InteractorEvent> {
    match button {
        MouseButton::Left => Some(InteractorEvent::LeftButtonRelease),
        MouseButton::Middle => Some(InteractorEvent::MiddleButtonRelease),
        MouseButton::Right => Some(InteractorEvent::RightButtonRelease),
        MouseButton::Other => None,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::Buttons;

    const GEOMETRY: SurfaceGeometry = SurfaceGeometry {
        height: 200,
        pixel_ratio: 1.0,
    };

    fn press(x: i32, y: i32, button: MouseButton) -> HostEvent {
        HostEvent::ButtonPress {
            x,
            y,
            button,
            double_click: false,
            modifiers: Some(Modifiers::NONE),
        }
    }

    fn release(x: i32, y: i32, button: MouseButton) -> HostEvent {
        HostEvent::ButtonRelease {
            x,
            y,
            button,
            modifiers: Some(Modifiers::NONE),
        }
    }

    fn moved(x: i32, y: i32, modifiers: Modifiers) -> HostEvent {
        HostEvent::PointerMove {
            x,
            y,
            modifiers,
            buttons: Buttons::NONE,
        }
    }

    fn key_press(key: KeyCode, text: &str) -> HostEvent {
        HostEvent::KeyPress {
            key,
            text: Some(text.to_string()),
            modifiers: None,
        }
    }

    //=====================================================================
    // Coordinates
    //=====================================================================

    #[test]
    fn click_flips_y() {
        let mut translator = EventTranslator::new();
        let out = translator.translate(&press(10, 5, MouseButton::Left), GEOMETRY);
        let info = out.info.unwrap();
        assert_eq!((info.x, info.y), (10, 194));
    }

    #[test]
    fn coordinates_scale_with_pixel_ratio() {
        let mut translator = EventTranslator::new();
        let geometry = SurfaceGeometry {
            height: 200,
            pixel_ratio: 2.0,
        };
        let out = translator.translate(&moved(10, 5, Modifiers::NONE), geometry);
        let info = out.info.unwrap();
        assert_eq!((info.x, info.y), (20, 388));
    }

    #[test]
    fn fractional_ratio_rounds() {
        let mut translator = EventTranslator::new();
        let geometry = SurfaceGeometry {
            height: 100,
            pixel_ratio: 1.5,
        };
        let out = translator.translate(&moved(3, 0, Modifiers::NONE), geometry);
        let info = out.info.unwrap();
        // 3 * 1.5 = 4.5 → 5; (100 - 0 - 1) * 1.5 = 148.5 → 149
        assert_eq!((info.x, info.y), (5, 149));
    }

    //=====================================================================
    // Buttons
    //=====================================================================

    #[test]
    fn press_dispatches_matching_button() {
        let mut translator = EventTranslator::new();
        for (button, expected) in [
            (MouseButton::Left, InteractorEvent::LeftButtonPress),
            (MouseButton::Middle, InteractorEvent::MiddleButtonPress),
            (MouseButton::Right, InteractorEvent::RightButtonPress),
        ] {
            let out = translator.translate(&press(0, 0, button), GEOMETRY);
            assert_eq!(out.events, vec![expected]);
        }
    }

    #[test]
    fn double_click_sets_repeat() {
        let mut translator = EventTranslator::new();
        let event = HostEvent::ButtonPress {
            x: 1,
            y: 1,
            button: MouseButton::Left,
            double_click: true,
            modifiers: None,
        };
        let out = translator.translate(&event, GEOMETRY);
        assert_eq!(out.info.unwrap().repeat, 1);

        let out = translator.translate(&press(1, 1, MouseButton::Left), GEOMETRY);
        assert_eq!(out.info.unwrap().repeat, 0);
    }

    #[test]
    fn other_button_press_dispatches_nothing() {
        let mut translator = EventTranslator::new();
        let out = translator.translate(&press(0, 0, MouseButton::Other), GEOMETRY);
        assert!(out.events.is_empty());
        assert!(out.info.is_some());
    }

    #[test]
    fn release_matches_recorded_press() {
        let mut translator = EventTranslator::new();
        translator.translate(&press(0, 0, MouseButton::Right), GEOMETRY);

        // Host reports a different button; the recorded press wins
        let out = translator.translate(&release(0, 0, MouseButton::Left), GEOMETRY);
        assert_eq!(out.events, vec![InteractorEvent::RightButtonRelease]);
    }

    #[test]
    fn release_uses_its_own_position() {
        let mut translator = EventTranslator::new();
        translator.translate(&press(0, 0, MouseButton::Left), GEOMETRY);
        let out = translator.translate(&release(30, 40, MouseButton::Left), GEOMETRY);
        let info = out.info.unwrap();
        assert_eq!((info.x, info.y), (30, 159));
    }

    #[test]
    fn release_without_any_press_dispatches_nothing() {
        let mut translator = EventTranslator::new();
        let out = translator.translate(&release(0, 0, MouseButton::Left), GEOMETRY);
        assert!(out.events.is_empty());
    }

    #[test]
    fn second_release_replays_last_button() {
        let mut translator = EventTranslator::new();
        translator.translate(&press(0, 0, MouseButton::Middle), GEOMETRY);
        translator.translate(&release(0, 0, MouseButton::Middle), GEOMETRY);

        let out = translator.translate(&release(0, 0, MouseButton::Middle), GEOMETRY);
        assert_eq!(out.events, vec![InteractorEvent::MiddleButtonRelease]);
    }

    //=====================================================================
    // Pointer State
    //=====================================================================

    #[test]
    fn move_updates_state_and_dispatches() {
        let mut translator = EventTranslator::new();
        let out = translator.translate(&moved(7, 8, Modifiers::CTRL), GEOMETRY);

        assert_eq!(out.events, vec![InteractorEvent::MouseMove]);
        assert!(out.info.unwrap().ctrl);
        assert_eq!(translator.tracker().position(), (7, 8));
        assert_eq!(translator.tracker().modifiers(), Modifiers::CTRL);
    }

    #[test]
    fn enter_and_leave_use_last_position() {
        let mut translator = EventTranslator::new();
        translator.translate(&moved(15, 20, Modifiers::SHIFT), GEOMETRY);

        let out = translator.translate(&HostEvent::PointerEnter { modifiers: None }, GEOMETRY);
        let info = out.info.unwrap();
        assert_eq!(out.events, vec![InteractorEvent::Enter]);
        assert_eq!((info.x, info.y), (15, 179));
        assert!(info.shift);
        assert_eq!(info.key_char, '\0');
        assert_eq!(info.key_sym, None);

        let out = translator.translate(&HostEvent::PointerLeave { modifiers: None }, GEOMETRY);
        assert_eq!(out.events, vec![InteractorEvent::Leave]);
        assert_eq!(out.info.unwrap().x, 15);
    }

    #[test]
    fn live_modifiers_override_recorded() {
        let mut translator = EventTranslator::new();
        translator.translate(&moved(0, 0, Modifiers::SHIFT), GEOMETRY);

        let event = HostEvent::PointerLeave {
            modifiers: Some(Modifiers::CTRL),
        };
        let info = translator.translate(&event, GEOMETRY).info.unwrap();
        assert!(info.ctrl);
        assert!(!info.shift);
    }

    //=====================================================================
    // Keys
    //=====================================================================

    #[test]
    fn key_press_dispatches_press_then_char() {
        let mut translator = EventTranslator::new();
        translator.translate(&moved(4, 9, Modifiers::NONE), GEOMETRY);

        let out = translator.translate(&key_press(KeyCode::KeyA, "a"), GEOMETRY);
        assert_eq!(out.events, vec![InteractorEvent::KeyPress, InteractorEvent::Char]);

        let info = out.info.unwrap();
        assert_eq!(info.key_char, 'a');
        assert_eq!(info.key_sym, Some("a"));
        assert_eq!((info.x, info.y), (4, 190));
    }

    #[test]
    fn key_release_dispatches_release_only() {
        let mut translator = EventTranslator::new();
        let event = HostEvent::KeyRelease {
            key: KeyCode::Escape,
            text: None,
            modifiers: Some(Modifiers::NONE),
        };
        let out = translator.translate(&event, GEOMETRY);
        assert_eq!(out.events, vec![InteractorEvent::KeyRelease]);
        assert_eq!(out.info.unwrap().key_sym, Some("Escape"));
    }

    #[test]
    fn unknown_key_falls_back() {
        let mut translator = EventTranslator::new();
        let out = translator.translate(&key_press(KeyCode::Unidentified, ""), GEOMETRY);
        let info = out.info.unwrap();
        assert_eq!(info.key_char, '\0');
        assert_eq!(info.key_sym, Some("None"));
    }

    //=====================================================================
    // Wheel
    //=====================================================================

    #[test]
    fn wheel_accumulates_without_event_information() {
        let mut translator = EventTranslator::new();
        let out = translator.translate(&HostEvent::Wheel { delta: 60 }, GEOMETRY);
        assert!(out.is_empty());
        assert_eq!(translator.pending_wheel_delta(), 60);

        let out = translator.translate(&HostEvent::Wheel { delta: 60 }, GEOMETRY);
        assert_eq!(out.info, None);
        assert_eq!(out.events, vec![InteractorEvent::MouseWheelForward]);
        assert_eq!(translator.pending_wheel_delta(), 0);
    }

    #[test]
    fn wheel_backward() {
        let mut translator = EventTranslator::new();
        let out = translator.translate(&HostEvent::Wheel { delta: -120 }, GEOMETRY);
        assert_eq!(out.events, vec![InteractorEvent::MouseWheelBackward]);
    }

    //=====================================================================
    // Resize
    //=====================================================================

    #[test]
    fn resize_at_unit_ratio() {
        let plan = ResizePlan::new((300, 200), 1.0);
        assert_eq!(plan, ResizePlan { width: 300, height: 200, dpi: 72 });
    }

    #[test]
    fn resize_at_high_density() {
        let plan = ResizePlan::new((300, 200), 2.0);
        assert_eq!(plan, ResizePlan { width: 600, height: 400, dpi: 144 });
    }

    #[test]
    fn extreme_coordinates_saturate() {
        let mut translator = EventTranslator::new();
        let info = translator
            .translate(&press(i32::MAX, i32::MIN, MouseButton::Left), GEOMETRY)
            .info
            .unwrap();

        assert_eq!(info.x, i32::MAX);
        assert_eq!(info.y, i32::MAX);
    }

}
