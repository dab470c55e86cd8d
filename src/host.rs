//=========================================================================
// Host
//
// Entry point that opens a window and runs a render widget in it.
//
// Architecture:
// ```text
//     HostBuilder  ──build()──>  Host  ──run(factory)──>  [Event Loop]
//         │                        │
//         ├─ with_title()          └─ creates window
//         ├─ with_size_hint()         builds renderer via factory
//         ├─ with_timer_interval()    blocks until window closes
//         ├─ with_stereo()
//         └─ with_pixel_ratio()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::bridge::{Interactor, Notifier, RenderWindow};
use crate::core::config::{BridgeConfig, PixelRatio};
use crate::platform::{Platform, PlatformError};

//=== HostBuilder =========================================================

/// Builder for configuring and constructing a [`Host`].
///
/// # Default Values
///
/// - **Title**: "Render Window"
/// - **Size hint**: 400 × 400 logical pixels
/// - **Timer interval**: 10 ms
/// - **Stereo**: off
/// - **Pixel ratio**: taken from the display
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use render_bridge::HostBuilder;
/// # use render_bridge::prelude::*;
/// # struct Win;
/// # impl RenderWindow for Win {
/// #     fn set_window_info(&mut self, _: &str) {}
/// #     fn set_dpi(&mut self, _: i32) {}
/// #     fn set_size(&mut self, _: i32, _: i32) {}
/// #     fn current_cursor(&self) -> CursorShape { CursorShape::DEFAULT }
/// #     fn finalize(&mut self) {}
/// # }
/// # struct Iren;
/// # impl Interactor for Iren {
/// #     fn set_event_information(&mut self, _: &EventInformation) {}
/// #     fn dispatch(&mut self, _: InteractorEvent) {}
/// #     fn set_size(&mut self, _: i32, _: i32) {}
/// #     fn render(&mut self) {}
/// # }
///
/// HostBuilder::new()
///     .with_title("Cone")
///     .with_timer_interval(Duration::from_millis(16))
///     .build()
///     .run(|_notifier| (Win, Iren))?;
/// # Ok::<(), render_bridge::PlatformError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct HostBuilder {
    config: BridgeConfig,
}

impl HostBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config.timer_interval` is zero.
    pub fn from_config(config: BridgeConfig) -> Self {
        assert!(
            !config.timer_interval.is_zero(),
            "Timer interval must be positive"
        );
        Self { config }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Sets the preferred logical size, used as the initial window size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_size_hint(mut self, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Size hint must be non-zero, got {}x{}",
            width,
            height
        );
        self.config.size_hint = (width, height);
        self
    }

    /// Sets the period of the renderer's interaction timer.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn with_timer_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Timer interval must be positive");
        self.config.timer_interval = interval;
        self
    }

    /// Requests a stereo-capable render window.
    pub fn with_stereo(mut self, stereo: bool) -> Self {
        self.config.stereo = stereo;
        self
    }

    /// Uses a fixed pixel ratio instead of the display's.
    ///
    /// # Panics
    ///
    /// Panics if `ratio` is not finite and positive.
    pub fn with_pixel_ratio(mut self, ratio: f64) -> Self {
        assert!(
            ratio.is_finite() && ratio > 0.0,
            "Pixel ratio must be positive, got {}",
            ratio
        );
        self.config.pixel_ratio = PixelRatio::Fixed(ratio);
        self
    }

    /// Builds the host.
    pub fn build(self) -> Host {
        info!(
            target: "bridge",
            "Building host (title: {:?}, size hint: {:?}, timer: {:?})",
            self.config.title,
            self.config.size_hint,
            self.config.timer_interval
        );
        Host {
            config: self.config,
        }
    }
}

//=== Host ================================================================

/// Runs a single render widget in its own window.
#[derive(Debug, Clone)]
pub struct Host {
    config: BridgeConfig,
}

impl Host {
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    //--- Execution --------------------------------------------------------

    /// Opens the window and runs the event loop until it closes.
    ///
    /// `factory` is called once the window exists. It receives the
    /// [`Notifier`] the renderer uses to request timers and announce
    /// cursor changes, and returns the render window and interactor.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop or window cannot be
    /// created, or the window handle cannot be passed to the renderer.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub fn run<F, W, I>(self, factory: F) -> Result<(), PlatformError>
    where
        F: FnOnce(Notifier) -> (W, I),
        W: RenderWindow,
        I: Interactor,
    {
        info!(target: "bridge", "Starting host");
        let result = Platform::new(self.config, factory).run();
        info!(target: "bridge", "Host stopped");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
