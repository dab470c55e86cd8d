//=========================================================================
// Render Widget
//=========================================================================
//
// Host widget that owns a renderer window and its interactor.
//
// Architecture:
// ```text
//  Host Event Loop              RenderWidget                 Renderer
//  ───────────────              ────────────                 ────────
//  input event ──→ handle() ──→ EventTranslator ──→ set_event_information
//                                                 ──→ dispatch(...)
//                               pump_notifications() ←── Notifier
//                                 ├─ CreateTimer/DestroyTimer → TimerBridge
//                                 └─ CursorChanged → CursorSync (queued)
//  resize ───────→ resize() ──→ DPI, sizes, Configure, request_redraw
//  paint ────────→ paint() ───→ Interactor::render
//  deadline ─────→ tick() ────→ dispatch(Timer)
//  loop idle ────→ process_deferred() → cursor read-back
//  close / drop ─→ LifecycleGuard → RenderWindow::finalize (once)
// ```
//
// Everything runs on the host's event-loop thread.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::time::Instant;

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use crate::core::bridge::{
    notify, Capability, HostSurface, Interactor, InteractorEvent, NotificationInbox, Notifier,
    RenderWindow, RendererNotification,
};
use crate::core::config::BridgeConfig;
use crate::core::cursor_sync::CursorSync;
use crate::core::error::BridgeError;
use crate::core::input::{HostEvent, PointerState};
use crate::core::lifecycle::LifecycleGuard;
use crate::core::timer::TimerBridge;
use crate::core::translator::{EventTranslator, ResizePlan, SurfaceGeometry, Translation};

/// Reserved forwarding name that yields the interactor itself.
pub const NATIVE_HOOK: &str = "__native__";

//=== WindowBinding =======================================================

/// String-encoded native window handle the renderer attaches to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowBinding(String);

impl WindowBinding {
    pub fn new(info: impl Into<String>) -> Self {
        Self(info.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//=== Forwarded ===========================================================

/// Result of a successful capability lookup.
pub enum Forwarded<'a, I> {
    /// The reserved native hook: direct access to the interactor.
    Native(&'a mut I),

    /// The named capability was invoked on the interactor.
    Invoked(Capability),
}

impl<I> fmt::Debug for Forwarded<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(_) => f.write_str("Native"),
            Self::Invoked(capability) => write!(f, "Invoked({})", capability.name()),
        }
    }
}

//=== RenderWidget ========================================================

pub struct RenderWidget<S, W, I>
where
    S: HostSurface,
    W: RenderWindow,
    I: Interactor,
{
    config: BridgeConfig,
    surface: S,
    binding: WindowBinding,
    render_window: W,
    interactor: I,
    inbox: NotificationInbox,
    translator: EventTranslator,
    timer: TimerBridge,
    cursor: CursorSync,
    lifecycle: LifecycleGuard,
}

impl<S, W, I> RenderWidget<S, W, I>
where
    S: HostSurface,
    W: RenderWindow,
    I: Interactor,
{
    //--- Construction -----------------------------------------------------

    /// Builds the widget around `surface`.
    ///
    /// `build` creates the renderer window and interactor and receives the
    /// notifier they use to request timers and announce cursor changes.
    /// The window binding is applied here and never changes afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `config.timer_interval` is zero.
    pub fn new<F>(config: BridgeConfig, surface: S, binding: WindowBinding, build: F) -> Self
    where
        F: FnOnce(Notifier) -> (W, I),
    {
        let (notifier, inbox) = notify::channel();
        let (mut render_window, interactor) = build(notifier);

        render_window.set_window_info(binding.as_str());
        if config.stereo {
            render_window.enable_stereo();
        }

        info!(target: "bridge", "Render widget bound to window {}", binding.as_str());

        Self {
            timer: TimerBridge::new(config.timer_interval),
            config,
            surface,
            binding,
            render_window,
            interactor,
            inbox,
            translator: EventTranslator::new(),
            cursor: CursorSync::new(),
            lifecycle: LifecycleGuard::new(),
        }
    }

    //--- Input ------------------------------------------------------------

    /// Translates and dispatches one host input event.
    pub fn handle(&mut self, event: HostEvent) {
        let geometry = self.geometry();
        let translation = self.translator.translate(&event, geometry);
        self.apply(translation);
    }

    //--- Geometry & Paint -------------------------------------------------

    /// Applies the surface's current size to the renderer and requests a
    /// repaint. Safe to repeat with an unchanged size.
    pub fn resize(&mut self) {
        let ratio = self.pixel_ratio();
        let plan = ResizePlan::new(self.surface.logical_size(), ratio);
        debug!(
            target: "bridge",
            "Resize to {}x{} @ {} DPI",
            plan.width,
            plan.height,
            plan.dpi
        );

        self.render_window.set_dpi(plan.dpi);
        self.render_window.set_size(plan.width, plan.height);
        self.interactor.set_size(plan.width, plan.height);
        self.dispatch(InteractorEvent::Configure);
        self.surface.request_redraw();
    }

    /// Renders a frame in response to a host paint event.
    pub fn paint(&mut self) {
        trace!(target: "bridge", "Paint");
        self.interactor.render();
        self.pump_notifications();
    }

    /// Requests a repaint through the host instead of rendering now.
    pub fn render(&self) {
        self.surface.request_redraw();
    }

    /// Preferred logical size of the widget.
    pub fn size_hint(&self) -> (u32, u32) {
        self.config.size_hint
    }

    //--- Timer ------------------------------------------------------------

    /// Delivers the renderer's timer tick if one is due at `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.lifecycle.is_finalized() || !self.timer.fire_due(now) {
            return false;
        }
        self.dispatch(InteractorEvent::Timer);
        true
    }

    /// Instant the host should next call [`tick`](Self::tick), if any.
    pub fn next_timer_deadline(&self) -> Option<Instant> {
        self.timer.next_deadline()
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    //--- Cursor -----------------------------------------------------------

    /// Runs work deferred to the end of the event-loop turn.
    pub fn process_deferred(&mut self) {
        self.pump_notifications();
        self.cursor.process(&self.render_window, &self.surface);
    }

    pub fn hide_cursor(&mut self) {
        self.cursor.hide(&self.surface);
    }

    pub fn show_cursor(&mut self) {
        self.cursor.show(&self.render_window, &self.surface);
    }

    //--- Lifecycle --------------------------------------------------------

    /// Handles the host window closing. Finalizes the renderer once.
    pub fn close(&mut self) {
        info!(target: "bridge", "Close requested");
        self.finalize();
    }

    /// Finalizes the render window. Later calls do nothing.
    pub fn finalize(&mut self) -> bool {
        let render_window = &mut self.render_window;
        let timer = &mut self.timer;
        self.lifecycle.finalize_once(|| {
            timer.stop();
            render_window.finalize();
        })
    }

    pub fn is_finalized(&self) -> bool {
        self.lifecycle.is_finalized()
    }

    //--- Forwarding -------------------------------------------------------

    /// Looks up an interactor capability by name.
    ///
    /// [`NATIVE_HOOK`] returns the interactor itself. Names the widget
    /// does not know, or the interactor does not support, fail with
    /// [`BridgeError::MissingCapability`].
    pub fn forward(&mut self, name: &str) -> Result<Forwarded<'_, I>, BridgeError> {
        if name == NATIVE_HOOK {
            return Ok(Forwarded::Native(&mut self.interactor));
        }

        let missing = || BridgeError::missing("RenderWidget", name);
        let capability: Capability = name.parse().map_err(|_| missing())?;

        self.interactor.invoke(capability).map_err(|_| missing())?;
        self.pump_notifications();
        Ok(Forwarded::Invoked(capability))
    }

    //--- Accessors --------------------------------------------------------

    pub fn render_window(&self) -> &W {
        &self.render_window
    }

    pub fn render_window_mut(&mut self) -> &mut W {
        &mut self.render_window
    }

    pub fn interactor(&self) -> &I {
        &self.interactor
    }

    pub fn interactor_mut(&mut self) -> &mut I {
        &mut self.interactor
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn binding(&self) -> &WindowBinding {
        &self.binding
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn pointer_state(&self) -> PointerState {
        self.translator.tracker().current()
    }

    //--- Internal Helpers -------------------------------------------------

    fn pixel_ratio(&self) -> f64 {
        self.config.pixel_ratio.resolve(self.surface.pixel_ratio())
    }

    fn geometry(&self) -> SurfaceGeometry {
        let (_, height) = self.surface.logical_size();
        SurfaceGeometry {
            height: i32::try_from(height).unwrap_or(i32::MAX),
            pixel_ratio: self.pixel_ratio(),
        }
    }

    fn apply(&mut self, translation: Translation) {
        if let Some(info) = &translation.info {
            self.interactor.set_event_information(info);
        }
        for event in translation.events {
            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: InteractorEvent) {
        self.interactor.dispatch(event);
        self.pump_notifications();
    }

    /// Handles notifications the renderer posted while we called into it.
    fn pump_notifications(&mut self) {
        for notification in self.inbox.drain() {
            match notification {
                RendererNotification::CreateTimer if self.lifecycle.is_finalized() => {
                    debug!(target: "bridge::timer", "Timer request after finalize ignored");
                }
                RendererNotification::CreateTimer => self.timer.start(Instant::now()),
                RendererNotification::DestroyTimer => self.timer.stop(),
                RendererNotification::CursorChanged => self.cursor.on_cursor_changed(),
            }
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl<S, W, I> Drop for RenderWidget<S, W, I>
where
    S: HostSurface,
    W: RenderWindow,
    I: Interactor,
{
    fn drop(&mut self) {
        self.finalize();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
