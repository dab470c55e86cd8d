//=========================================================================
// Cursor Sync
//=========================================================================
//
// Keeps the host cursor in step with the renderer's cursor.
//
// The renderer announces a cursor change *before* it commits the new
// shape, so reading the cursor inside the notification sees the old one.
// The read is therefore posted to a deferred queue and performed when the
// event loop processes deferred work, after the renderer has committed.
//
// Flow:
//   CursorChanged → on_cursor_changed() → queue: Refresh
//   ...rest of the event-loop turn...
//   process() → RenderWindow::current_cursor() → CURSOR_MAP → HostSurface
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::bridge::{HostSurface, RenderWindow};
use crate::core::cursor::{host_cursor_for, HostCursor};

//=== CursorRequest =======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorRequest {
    /// Read the renderer's current cursor and apply it.
    Refresh,
}

//=== CursorSync ==========================================================

#[derive(Debug)]
pub struct CursorSync {
    sender: Sender<CursorRequest>,
    receiver: Receiver<CursorRequest>,
    applied: Option<HostCursor>,
}

impl CursorSync {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            applied: None,
        }
    }

    //--- Notification -----------------------------------------------------

    /// Queues a deferred cursor read. Never reads synchronously.
    pub fn on_cursor_changed(&self) {
        if self.sender.send(CursorRequest::Refresh).is_err() {
            trace!(target: "bridge::cursor", "Cursor queue closed, change dropped");
        } else {
            trace!(target: "bridge::cursor", "Cursor change queued");
        }
    }

    /// Returns `true` if a deferred read is waiting.
    pub fn has_pending(&self) -> bool {
        !self.receiver.is_empty()
    }

    //--- Deferred Processing ----------------------------------------------

    /// Performs queued reads in order. Returns how many were processed.
    pub fn process<W, S>(&mut self, render_window: &W, surface: &S) -> usize
    where
        W: RenderWindow + ?Sized,
        S: HostSurface + ?Sized,
    {
        let mut processed = 0;
        while let Ok(request) = self.receiver.try_recv() {
            match request {
                CursorRequest::Refresh => self.show(render_window, surface),
            }
            processed += 1;
        }
        processed
    }

    //--- Direct Operations ------------------------------------------------

    /// Hides the cursor over the surface.
    pub fn hide<S: HostSurface + ?Sized>(&mut self, surface: &S) {
        self.apply(surface, HostCursor::Blank);
    }

    /// Shows the host cursor matching the renderer's current cursor.
    pub fn show<W, S>(&mut self, render_window: &W, surface: &S)
    where
        W: RenderWindow + ?Sized,
        S: HostSurface + ?Sized,
    {
        let shape = render_window.current_cursor();
        let cursor = host_cursor_for(shape);
        debug!(target: "bridge::cursor", "Cursor {:?} → {:?}", shape, cursor);
        self.apply(surface, cursor);
    }

    /// Last cursor applied to the host, if any.
    pub fn applied(&self) -> Option<HostCursor> {
        self.applied
    }

    fn apply<S: HostSurface + ?Sized>(&mut self, surface: &S, cursor: HostCursor) {
        surface.set_cursor(cursor);
        self.applied = Some(cursor);
    }
}

impl Default for CursorSync {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
