//=========================================================================
// Window Info
//=========================================================================
//
// Encodes a native window handle as the decimal string the renderer
// binds to.
//
// Handle → value:
// - Win32:   HWND
// - Xlib:    Window ID
// - Xcb:     Window ID
// - AppKit:  NSView pointer
// - UIKit:   UIView pointer
// - Wayland: wl_surface pointer
// - Android: ANativeWindow pointer
//
//=========================================================================

//=== External Dependencies ===============================================

use std::ffi::c_void;
use std::ptr::NonNull;

use winit::raw_window_handle::{HasWindowHandle, RawWindowHandle};

//=== Internal Dependencies ===============================================

use super::PlatformError;

//=== Encoding ============================================================

/// Encodes a raw window handle.
pub(crate) fn window_info(handle: RawWindowHandle) -> Result<String, PlatformError> {
    let info = match handle {
        RawWindowHandle::Win32(h) => h.hwnd.get().to_string(),
        RawWindowHandle::Xlib(h) => h.window.to_string(),
        RawWindowHandle::Xcb(h) => h.window.get().to_string(),
        RawWindowHandle::AppKit(h) => pointer(h.ns_view),
        RawWindowHandle::UiKit(h) => pointer(h.ui_view),
        RawWindowHandle::Wayland(h) => pointer(h.surface),
        RawWindowHandle::AndroidNdk(h) => pointer(h.a_native_window),
        other => return Err(PlatformError::UnsupportedWindowHandle(format!("{:?}", other))),
    };
    Ok(info)
}

/// Encodes the handle of any window that exposes one.
pub(crate) fn window_info_for<W: HasWindowHandle + ?Sized>(
    window: &W,
) -> Result<String, PlatformError> {
    let handle = window
        .window_handle()
        .map_err(PlatformError::WindowHandle)?;
    window_info(handle.as_raw())
}

fn pointer(ptr: NonNull<c_void>) -> String {
    (ptr.as_ptr() as usize).to_string()
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::{NonZeroIsize, NonZeroU32};
    use winit::raw_window_handle::{
        WebWindowHandle, Win32WindowHandle, XcbWindowHandle, XlibWindowHandle,
    };

    #[test]
    fn win32_hwnd_is_decimal() {
        let hwnd = NonZeroIsize::new(0x1F2E).unwrap();
        let handle = RawWindowHandle::Win32(Win32WindowHandle::new(hwnd));
        assert_eq!(window_info(handle).unwrap(), "7982");
    }

    #[test]
    fn xlib_and_xcb_window_ids() {
        let xlib = RawWindowHandle::Xlib(XlibWindowHandle::new(4242));
        assert_eq!(window_info(xlib).unwrap(), "4242");

        let xcb = RawWindowHandle::Xcb(XcbWindowHandle::new(NonZeroU32::new(77).unwrap()));
        assert_eq!(window_info(xcb).unwrap(), "77");
    }

    #[test]
    fn pointer_handles_use_address() {
        let mut value = 0u8;
        let ptr = NonNull::from(&mut value).cast::<c_void>();
        assert_eq!(pointer(ptr), (ptr.as_ptr() as usize).to_string());
    }

    #[test]
    fn unsupported_handle_is_error() {
        let web = RawWindowHandle::Web(WebWindowHandle::new(1));
        assert!(matches!(
            window_info(web),
            Err(PlatformError::UnsupportedWindowHandle(_))
        ));
    }
}
