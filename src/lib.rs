//! Embeddable ClarityOS chat widget.
//!
//! This crate is compiled to WebAssembly and injects itself into a host page:
//! it writes its own stylesheet and markup, owns a floating launcher/panel,
//! and relays chat messages and file uploads to the ClarityOS backend. The
//! conversation logic is browser-independent so it can be exercised natively;
//! only [`dom`] and [`net::http`] touch the browser, behind the `browser`
//! feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Build-time configuration (backend URL, accent color, copy) |
//! | [`error`] | Crate error type |
//! | [`net`] | Wire types and the [`net::backend::Backend`] boundary |
//! | [`render`] | HTML markup and stylesheet generation |
//! | [`state`] | Session core: history, file context, panel visibility |
//! | [`surface`] | Rendering boundary the session writes to |
//! | [`widget`] | Intent driver tying session, surface and backend together |
//! | `dom` | Browser injection, DOM surface and event wiring (`browser` only) |

pub mod config;
#[cfg(feature = "browser")]
pub mod dom;
pub mod error;
pub mod net;
pub mod render;
pub mod state;
pub mod surface;
#[cfg(test)]
mod test_support;
pub mod widget;

#[cfg(feature = "browser")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: install logging, then inject and wire the widget.
#[cfg(feature = "browser")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(config::build_log_level()) {
        // The host page may already own the global logger.
        log::debug!("console logger not installed: {err}");
    }

    let config = config::WidgetConfig::from_build_env().unwrap_or_else(|err| {
        log::warn!("{err}; falling back to default widget config");
        config::WidgetConfig::default()
    });

    if let Err(err) = dom::mount(config) {
        log::error!("clarity widget failed to start: {err}");
    }
}
