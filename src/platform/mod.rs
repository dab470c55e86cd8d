//=========================================================================
// Platform Subsystem
//
// Drives a `RenderWidget` from a Winit event loop.
//
// Architecture:
// ```text
//  Main Thread
//  ┌────────────────────────────────────────────────────────────┐
//  │  Winit Event Loop                                          │
//  │   ├─ resumed ──────────→ create window, bind, build widget │
//  │   ├─ input events ─────→ InputProcessor → widget.handle    │
//  │   ├─ Resized/Scale ────→ widget.resize                     │
//  │   ├─ RedrawRequested ──→ widget.paint                      │
//  │   ├─ CloseRequested ───→ widget.close, exit                │
//  │   ├─ new_events ───────→ widget.tick (timer deadline)      │
//  │   └─ about_to_wait ────→ widget.process_deferred,          │
//  │                          ControlFlow::WaitUntil(deadline)  │
//  └────────────────────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Lazy window**: created in `resumed()` (mobile compatibility)
// - **Timer as deadline**: the renderer's repeating timer is the event
//   loop's wake-up time; no threads are spawned
// - **Deferred work at loop idle**: cursor read-back runs in
//   `about_to_wait`, after every event of the turn was handled
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Host::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;
mod surface;
mod window_info;

//=== External Crates =====================================================

use std::time::Instant;

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{StartCause, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::bridge::{Interactor, Notifier, RenderWindow};
use crate::core::config::BridgeConfig;
use crate::core::widget::{RenderWidget, WindowBinding};
use input_processor::InputProcessor;
use surface::WinitSurface;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal: without an event loop or a bindable window there is
/// nothing to render into.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(winit::error::EventLoopError),

    /// Window creation failed.
    WindowCreation(winit::error::OsError),

    /// The window system's handle type cannot be passed to the renderer.
    UnsupportedWindowHandle(String),

    /// The window did not provide a handle.
    WindowHandle(winit::raw_window_handle::HandleError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
            Self::UnsupportedWindowHandle(h) => write!(f, "Unsupported window handle: {}", h),
            Self::WindowHandle(e) => write!(f, "Window handle unavailable: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== Platform ============================================================

/// Window owner and event pump for one render widget.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(config, factory)`
/// 2. **Execution**: `platform.run()` starts the event loop
/// 3. **Startup**: `resumed()` creates the window and calls `factory`
/// 4. **Shutdown**: window close finalizes the widget and exits the loop
///
/// # Thread Safety
///
/// This type is NOT Send/Sync - it must remain on the main thread.
pub(crate) struct Platform<F, W, I>
where
    F: FnOnce(Notifier) -> (W, I),
    W: RenderWindow,
    I: Interactor,
{
    config: BridgeConfig,

    /// Builds the renderer; consumed when the window is created.
    factory: Option<F>,

    /// Widget bound to the window (None until `resumed()` called).
    widget: Option<RenderWidget<WinitSurface, W, I>>,

    input_processor: InputProcessor,

    /// First fatal error seen inside the loop, returned by `run()`.
    error: Option<PlatformError>,
}

impl<F, W, I> Platform<F, W, I>
where
    F: FnOnce(Notifier) -> (W, I),
    W: RenderWindow,
    I: Interactor,
{
    //--- Construction -----------------------------------------------------

    /// Does not create the window yet - that happens lazily in `resumed()`.
    pub(crate) fn new(config: BridgeConfig, factory: F) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            config,
            factory: Some(factory),
            widget: None,
            input_processor: InputProcessor::new(),
            error: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot start, or if the
    /// window cannot be created or bound to the renderer.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn create_widget(
        &self,
        event_loop: &ActiveEventLoop,
        factory: F,
    ) -> Result<RenderWidget<WinitSurface, W, I>, PlatformError> {
        let (width, height) = self.config.size_hint;
        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(width, height));

        let window = event_loop
            .create_window(attrs)
            .map_err(PlatformError::WindowCreation)?;
        let binding = WindowBinding::new(window_info::window_info_for(&window)?);

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        let mut widget = RenderWidget::new(
            self.config.clone(),
            WinitSurface::new(window),
            binding,
            factory,
        );
        widget.resize();
        Ok(widget)
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: PlatformError) {
        error!(target: "platform", "{}", error);
        self.error.get_or_insert(error);
        event_loop.exit();
    }
}

//=== Winit Integration ===================================================

impl<F, W, I> ApplicationHandler for Platform<F, W, I>
where
    F: FnOnce(Notifier) -> (W, I),
    W: RenderWindow,
    I: Interactor,
{
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(factory) = self.factory.take() else {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        };

        match self.create_widget(event_loop, factory) {
            Ok(widget) => self.widget = Some(widget),
            Err(e) => self.fail(event_loop, e),
        }
    }

    /// Delivers the renderer's timer when the loop wakes at its deadline.
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause {
            if let Some(widget) = self.widget.as_mut() {
                widget.tick(Instant::now());
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::CloseRequested = event {
            info!(target: "platform", "Window close requested");
            // Dropping after close() is a no-op finalize
            if let Some(mut widget) = self.widget.take() {
                widget.close();
            }
            event_loop.exit();
            return;
        }

        let Some(widget) = self.widget.as_mut() else {
            return;
        };
        let processor = &mut self.input_processor;

        match event {
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                widget.resize();
            }

            WindowEvent::RedrawRequested => widget.paint(),

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                processor.update_modifiers(state.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale = widget.surface().window().scale_factor();
                widget.handle(processor.process_cursor_moved(position, scale));
            }

            WindowEvent::CursorEntered { .. } => widget.handle(processor.process_cursor_entered()),

            WindowEvent::CursorLeft { .. } => widget.handle(processor.process_cursor_left()),

            WindowEvent::MouseInput { state, button, .. } => {
                let event = processor.process_mouse_button(button, state, Instant::now());
                widget.handle(event);
            }

            WindowEvent::MouseWheel { delta, .. } => widget.handle(processor.process_wheel(delta)),

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                widget.handle(processor.process_key_event(&key_event));
            }

            _ => {
                // Ignore: Focused, Moved, touch, IME, etc.
            }
        }
    }

    /// Runs deferred work and schedules the next wake-up.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(widget) = self.widget.as_mut() else {
            return;
        };

        widget.process_deferred();

        match widget.next_timer_deadline() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
