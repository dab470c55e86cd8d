//=========================================================================
// Winit Surface
//=========================================================================
//
// `HostSurface` over a Winit window.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;
use winit::window::{CursorIcon, Window};

//=== Internal Dependencies ===============================================

use crate::core::bridge::HostSurface;
use crate::core::cursor::HostCursor;

//=== WinitSurface ========================================================

pub(crate) struct WinitSurface {
    window: Window,
}

impl WinitSurface {
    pub(crate) fn new(window: Window) -> Self {
        Self { window }
    }

    pub(crate) fn window(&self) -> &Window {
        &self.window
    }
}

impl HostSurface for WinitSurface {
    fn logical_size(&self) -> (u32, u32) {
        let size = self
            .window
            .inner_size()
            .to_logical::<u32>(self.window.scale_factor());
        (size.width, size.height)
    }

    fn pixel_ratio(&self) -> f64 {
        self.window.scale_factor()
    }

    fn request_redraw(&self) {
        self.window.request_redraw();
    }

    fn set_cursor(&self, cursor: HostCursor) {
        trace!(target: "platform", "Set cursor {:?}", cursor);
        match cursor_icon(cursor) {
            Some(icon) => {
                self.window.set_cursor_visible(true);
                self.window.set_cursor(icon);
            }
            None => self.window.set_cursor_visible(false),
        }
    }
}

//=== Cursor Mapping ======================================================

/// Winit icon for a host cursor. `None` means the cursor is hidden.
pub(crate) fn cursor_icon(cursor: HostCursor) -> Option<CursorIcon> {
    let icon = match cursor {
        HostCursor::Arrow => CursorIcon::Default,
        HostCursor::SizeBDiag => CursorIcon::NeswResize,
        HostCursor::SizeFDiag => CursorIcon::NwseResize,
        HostCursor::SizeVer => CursorIcon::NsResize,
        HostCursor::SizeHor => CursorIcon::EwResize,
        HostCursor::SizeAll => CursorIcon::Move,
        HostCursor::PointingHand => CursorIcon::Pointer,
        HostCursor::Cross => CursorIcon::Crosshair,
        HostCursor::Blank => return None,
    };
    Some(icon)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_hides_cursor() {
        assert_eq!(cursor_icon(HostCursor::Blank), None);
    }

    #[test]
    fn diagonal_resize_cursors() {
        assert_eq!(cursor_icon(HostCursor::SizeBDiag), Some(CursorIcon::NeswResize));
        assert_eq!(cursor_icon(HostCursor::SizeFDiag), Some(CursorIcon::NwseResize));
    }

    #[test]
    fn arrow_and_hand() {
        assert_eq!(cursor_icon(HostCursor::Arrow), Some(CursorIcon::Default));
        assert_eq!(cursor_icon(HostCursor::PointingHand), Some(CursorIcon::Pointer));
        assert_eq!(cursor_icon(HostCursor::Cross), Some(CursorIcon::Crosshair));
    }
}
