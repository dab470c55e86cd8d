//=========================================================================
// Renderer Notifications
//=========================================================================
//
// Renderer → widget notification channel.
//
// Architecture:
//   Renderer ── Notifier::create_timer() ──→ Sender<RendererNotification>
//                                                   ↓
//   Widget   ←── NotificationInbox::drain() ── Receiver (after dispatch)
//
// Both ends live on the event-loop thread. The channel keeps notifications
// in order and lets the renderer hold a handle without borrowing the
// widget that is currently dispatching into it.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use log::{trace, warn};

//=== RendererNotification ================================================

/// Requests the renderer makes of its host widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererNotification {
    /// Start (or restart) the repeating interaction timer.
    CreateTimer,

    /// Stop the interaction timer.
    DestroyTimer,

    /// The renderer is about to change its cursor.
    CursorChanged,
}

//=== Notifier ============================================================

/// Renderer-side handle for posting notifications.
#[derive(Debug, Clone)]
pub struct Notifier {
    sender: Sender<RendererNotification>,
}

impl Notifier {
    pub fn create_timer(&self) {
        self.post(RendererNotification::CreateTimer);
    }

    pub fn destroy_timer(&self) {
        self.post(RendererNotification::DestroyTimer);
    }

    pub fn cursor_changed(&self) {
        self.post(RendererNotification::CursorChanged);
    }

    pub fn post(&self, notification: RendererNotification) {
        if self.sender.send(notification).is_err() {
            trace!(
                target: "bridge",
                "Widget gone, dropping {:?}",
                notification
            );
        }
    }
}

//=== NotificationInbox ===================================================

/// Widget-side receiver of renderer notifications.
#[derive(Debug)]
pub struct NotificationInbox {
    receiver: Receiver<RendererNotification>,
}

impl NotificationInbox {
    /// Takes every pending notification in posting order.
    ///
    /// Bounded so a renderer that re-posts from inside its own handlers
    /// cannot keep the widget draining forever.
    pub fn drain(&self) -> Vec<RendererNotification> {
        const MAX_PER_DRAIN: usize = 64;

        let mut pending = Vec::new();
        while pending.len() < MAX_PER_DRAIN {
            match self.receiver.try_recv() {
                Ok(notification) => pending.push(notification),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if pending.len() >= MAX_PER_DRAIN {
            warn!(
                target: "bridge",
                "Notification backlog: drained {} this pass",
                pending.len()
            );
        }

        pending
    }
}

/// Creates a connected notifier/inbox pair.
pub fn channel() -> (Notifier, NotificationInbox) {
    let (sender, receiver) = unbounded();
    (Notifier { sender }, NotificationInbox { receiver })
}

//=========================================================================
// Unit Tests
//=========================================================================
