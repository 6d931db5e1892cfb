//! One-time injection of the stylesheet and widget shell.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::render::markup::{
    CLOSE_ID, CONTAINER_ID, FILE_BADGE_ID, FILE_INPUT_ID, FILE_NAME_ID, INPUT_ID, LAUNCHER_ID, MESSAGES_ID,
    REMOVE_FILE_ID, SEND_ID, STYLE_ID, WINDOW_ID, shell_html,
};
use crate::render::style::stylesheet;

/// Handles to every element the widget reads or mutates.
#[derive(Clone, Debug)]
pub struct DomRefs {
    pub window: HtmlElement,
    pub close: Element,
    pub messages: HtmlElement,
    pub file_badge: Element,
    pub file_name: Element,
    pub remove_file: Element,
    pub file_input: HtmlInputElement,
    pub input: HtmlInputElement,
    pub send: Element,
    pub launcher: Element,
}

/// Attach the stylesheet and shell to `document`, once.
///
/// A second call finds the existing container and only resolves handles.
///
/// # Errors
///
/// Returns [`WidgetError::Dom`] if the document has no `<head>`/`<body>`, a
/// DOM call throws, or an expected element is missing.
pub fn inject(document: &Document, config: &WidgetConfig) -> Result<DomRefs, WidgetError> {
    if document.get_element_by_id(CONTAINER_ID).is_some() {
        log::debug!("#{CONTAINER_ID} already present; reusing it");
    } else {
        let head = document.head().ok_or_else(|| WidgetError::Dom("document has no <head>".to_owned()))?;
        let body = document.body().ok_or_else(|| WidgetError::Dom("document has no <body>".to_owned()))?;

        let style = document.create_element("style")?;
        style.set_id(STYLE_ID);
        style.set_text_content(Some(&stylesheet(&config.primary_color)));
        head.append_child(&style)?;

        let container = document.create_element("div")?;
        container.set_id(CONTAINER_ID);
        container.set_inner_html(&shell_html(config));
        body.append_child(&container)?;
    }

    Ok(DomRefs {
        window: by_id(document, WINDOW_ID)?,
        close: by_id(document, CLOSE_ID)?,
        messages: by_id(document, MESSAGES_ID)?,
        file_badge: by_id(document, FILE_BADGE_ID)?,
        file_name: by_id(document, FILE_NAME_ID)?,
        remove_file: by_id(document, REMOVE_FILE_ID)?,
        file_input: by_id(document, FILE_INPUT_ID)?,
        input: by_id(document, INPUT_ID)?,
        send: by_id(document, SEND_ID)?,
        launcher: by_id(document, LAUNCHER_ID)?,
    })
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, WidgetError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WidgetError::Dom(format!("missing #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| WidgetError::Dom(format!("#{id} has an unexpected element type")))
}
