//=========================================================================
// Lifecycle Guard
//=========================================================================
//
// Exactly-once finalization of the renderer's window binding.
//
// Both the close handler and widget teardown (Drop) finalize. Whichever
// runs first does the work; every later call is a no-op.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== LifecycleGuard ======================================================

#[derive(Debug, Default)]
pub struct LifecycleGuard {
    finalized: bool,
}

impl LifecycleGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `finalize` unless it already ran. Returns whether it ran.
    pub fn finalize_once(&mut self, finalize: impl FnOnce()) -> bool {
        if self.finalized {
            debug!(target: "bridge", "Finalize skipped (already finalized)");
            return false;
        }

        self.finalized = true;
        finalize();
        info!(target: "bridge", "Render window finalized");
        true
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
