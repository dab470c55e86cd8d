//=========================================================================
// Wheel Accumulator
//=========================================================================
//
// Turns high-resolution wheel deltas into discrete wheel steps.
//
// Deltas are in eighths of a degree; a standard notch is 120. Smaller
// deltas from free-spinning or precision wheels add up until a full
// notch is reached, then exactly one step is emitted and the sum resets.
//
//=========================================================================

/// Delta magnitude that produces one wheel step.
pub const WHEEL_STEP: i32 = 120;

//=== WheelStep ===========================================================

/// Direction of a completed wheel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelStep {
    Forward,
    Backward,
}

//=== WheelAccumulator ====================================================

#[derive(Debug, Default)]
pub struct WheelAccumulator {
    delta: i32,
}

impl WheelAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `delta` and returns the step it completes, if any.
    ///
    /// The sum resets to zero whenever a step is emitted, so a single
    /// large delta never yields more than one step.
    pub fn accumulate(&mut self, delta: i32) -> Option<WheelStep> {
        self.delta = self.delta.saturating_add(delta);

        if self.delta >= WHEEL_STEP {
            self.delta = 0;
            Some(WheelStep::Forward)
        } else if self.delta <= -WHEEL_STEP {
            self.delta = 0;
            Some(WheelStep::Backward)
        } else {
            None
        }
    }

    /// Returns the pending, not yet emitted delta.
    pub fn pending(&self) -> i32 {
        self.delta
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
