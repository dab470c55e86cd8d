//=========================================================================
// Render Bridge - Library Root
//
// Hosts a renderer's window and interactor inside a native window and
// bridges the host's input, paint, resize, timer and cursor traffic to
// the renderer's event protocol.
//
// Responsibilities:
// - Expose the toolkit-independent bridge (`core`)
// - Keep the Winit integration (`platform`) hidden behind `Host`
// - Provide the renderer-facing traits users implement
//
// Typical usage:
// ```ignore
// use render_bridge::HostBuilder;
//
// fn main() -> Result<(), render_bridge::PlatformError> {
//     HostBuilder::new()
//         .with_title("Cone")
//         .build()
//         .run(|notifier| MyRenderer::new(notifier).split())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the bridge itself: event translation, key symbols, the
// timer, cursor sync and the `RenderWidget`. It does not depend on Winit
// and can be driven by any host that implements `HostSurface`.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the Winit window, event loop and input conversion.
//
// `host` defines the entry point that runs a widget in a Winit window.
//
mod host;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use host::{Host, HostBuilder};
pub use platform::PlatformError;
