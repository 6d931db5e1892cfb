//! Page-lifetime event listeners on the widget shell.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventTarget, KeyboardEvent};

use super::BrowserWidget;
use super::inject::DomRefs;
use crate::error::WidgetError;
use crate::widget::SelectedFile;

thread_local! {
    static LISTENERS: RefCell<Vec<Closure<dyn FnMut(Event)>>> = const { RefCell::new(Vec::new()) };
}

/// Route shell events to `widget`.
///
/// # Errors
///
/// Returns an error if a listener cannot be registered.
pub(super) fn wire(widget: &BrowserWidget, refs: &DomRefs) -> Result<(), WidgetError> {
    let w = widget.clone();
    listen(&refs.launcher, "click", move |_| {
        w.toggle_panel();
    })?;

    let w = widget.clone();
    listen(&refs.close, "click", move |_| {
        w.toggle_panel();
    })?;

    let w = widget.clone();
    let input = refs.input.clone();
    listen(&refs.send, "click", move |_| send_input(&w, &input.value()))?;

    let w = widget.clone();
    let input = refs.input.clone();
    listen(&refs.input, "keypress", move |event| {
        if event.dyn_ref::<KeyboardEvent>().is_some_and(|key| key.key() == "Enter") {
            send_input(&w, &input.value());
        }
    })?;

    let w = widget.clone();
    let file_input = refs.file_input.clone();
    listen(&refs.file_input, "change", move |_| {
        let selected = file_input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| SelectedFile { name: file.name(), handle: file });
        let widget = w.clone();
        spawn_local(async move { widget.upload(selected).await });
    })?;

    let w = widget.clone();
    listen(&refs.remove_file, "click", move |_| w.remove_file())?;

    Ok(())
}

fn send_input(widget: &BrowserWidget, raw: &str) {
    let widget = widget.clone();
    let text = raw.to_owned();
    spawn_local(async move { widget.send(&text).await });
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), WidgetError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    LISTENERS.with(|listeners| listeners.borrow_mut().push(closure));
    Ok(())
}
