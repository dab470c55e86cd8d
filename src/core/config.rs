//=========================================================================
// Bridge Configuration
//=========================================================================
//
// Settings for a render widget and the window hosting it.
//
// Defaults:
// - title:          "Render Window"
// - size hint:      400 × 400 logical pixels
// - timer interval: 10 ms
// - stereo:         off
// - pixel ratio:    supplied by the host
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::timer::DEFAULT_TIMER_INTERVAL;

//=== PixelRatio ==========================================================

/// Source of the logical-to-physical pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PixelRatio {
    /// Ask the host surface (tracks the display the window is on).
    Host,

    /// Always use this ratio.
    Fixed(f64),
}

impl PixelRatio {
    /// Resolves the ratio, using `host` when the source is the host.
    ///
    /// Non-finite or non-positive host ratios resolve to 1.0.
    pub fn resolve(self, host: f64) -> f64 {
        match self {
            Self::Fixed(ratio) => ratio,
            Self::Host if host.is_finite() && host > 0.0 => host,
            Self::Host => 1.0,
        }
    }
}

//=== BridgeConfig ========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    /// Title of the host window.
    pub title: String,

    /// Preferred logical size of the widget.
    pub size_hint: (u32, u32),

    /// Period of the interaction timer.
    pub timer_interval: Duration,

    /// Request a stereo-capable render window.
    pub stereo: bool,

    pub pixel_ratio: PixelRatio,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            title: String::from("Render Window"),
            size_hint: (400, 400),
            timer_interval: DEFAULT_TIMER_INTERVAL,
            stereo: false,
            pixel_ratio: PixelRatio::Host,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
