//! Browser glue: inject the widget, render into it, wire its events.
//!
//! SYSTEM CONTEXT
//! ==============
//! `inject` writes the stylesheet and shell once and resolves element
//! handles, `surface` implements [`crate::surface::Surface`] on those
//! handles, and `events` routes DOM events to [`crate::widget::Widget`].

mod events;
mod inject;
mod surface;

pub use inject::{DomRefs, inject};
pub use surface::DomSurface;

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::net::http::HttpBackend;
use crate::state::session::Session;
use crate::widget::Widget;

/// The widget as wired in the browser.
pub type BrowserWidget = Widget<HttpBackend, DomSurface>;

/// Inject the widget into the current document and start handling events.
///
/// # Errors
///
/// Returns an error if there is no document or the widget markup cannot be
/// attached or resolved.
pub fn mount(config: WidgetConfig) -> Result<BrowserWidget, WidgetError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| WidgetError::Dom("no document available".to_owned()))?;

    let refs = inject(&document, &config)?;
    let surface = DomSurface::new(document, refs.clone(), config.trust_reply_html);
    let widget = Widget::new(Session::new(surface), HttpBackend::new(&config));

    let for_review = widget.clone();
    widget.with_session(|session| {
        session.surface_mut().set_review_handler(Rc::new(move |action| {
            let widget = for_review.clone();
            spawn_local(async move { widget.review(action).await });
        }));
    });

    events::wire(&widget, &refs)?;

    let probe = widget.clone();
    spawn_local(async move { probe.probe_health().await });

    log::info!("clarity widget mounted (backend {})", config.api_url);
    Ok(widget)
}
