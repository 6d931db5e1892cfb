//! [`Surface`] backed by the injected DOM.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, HtmlElement};

use super::inject::DomRefs;
use crate::error::WidgetError;
use crate::net::types::{MentorCard, Message};
use crate::render::markup::{
    APPROVE_LABEL, DOC_SAVED_CLASS, MENTOR_CARD_CLASS, REVIEW_BAR_CLASS, SUGGEST_EDITS_LABEL, document_saved_html,
    mentor_card_html, message_class, message_html,
};
use crate::surface::{ReviewAction, Surface};

type ReviewHandler = Rc<dyn Fn(ReviewAction)>;

pub struct DomSurface {
    document: Document,
    refs: DomRefs,
    trust_reply_html: bool,
    on_review: Option<ReviewHandler>,
    /// Listeners on rendered entries; they live as long as the transcript.
    listeners: Vec<Closure<dyn FnMut(Event)>>,
}

impl DomSurface {
    pub fn new(document: Document, refs: DomRefs, trust_reply_html: bool) -> Self {
        Self { document, refs, trust_reply_html, on_review: None, listeners: Vec::new() }
    }

    /// Callback for review bar clicks.
    pub fn set_review_handler(&mut self, handler: ReviewHandler) {
        self.on_review = Some(handler);
    }

    fn create_html(&self, tag: &str) -> Result<HtmlElement, WidgetError> {
        self.document
            .create_element(tag)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| WidgetError::Dom(format!("<{tag}> is not an HTML element")))
    }

    fn append_block(&self, class: &str, html: &str) -> Result<HtmlElement, WidgetError> {
        let el = self.create_html("div")?;
        el.set_class_name(class);
        el.set_inner_html(html);
        self.refs.messages.append_child(&el)?;
        self.scroll_to_end();
        Ok(el)
    }

    fn scroll_to_end(&self) {
        let messages = &self.refs.messages;
        messages.set_scroll_top(messages.scroll_height());
    }

    fn on_click(&mut self, target: &HtmlElement, handler: impl FnMut(Event) + 'static) -> Result<(), WidgetError> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        self.listeners.push(closure);
        Ok(())
    }

    fn try_append_mentor_card(&mut self, card: &MentorCard) -> Result<(), WidgetError> {
        let el = self.append_block(MENTOR_CARD_CLASS, &mentor_card_html(card))?;
        let href = card.href().to_owned();
        self.on_click(&el, move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(err) = window.open_with_url_and_target(&href, "_blank") {
                log::warn!("failed to open {href}: {}", WidgetError::from(err));
            }
        })
    }

    fn try_append_review_bar(&mut self) -> Result<(), WidgetError> {
        let bar = self.append_block(REVIEW_BAR_CLASS, "")?;
        for (label, class, action) in [
            (APPROVE_LABEL, "review-btn approve", ReviewAction::Approve),
            (SUGGEST_EDITS_LABEL, "review-btn edit", ReviewAction::SuggestEdits),
        ] {
            let button = self.create_html("button")?;
            button.set_class_name(class);
            button.set_text_content(Some(label));
            bar.append_child(&button)?;

            let handler = self.on_review.clone();
            self.on_click(&button, move |_| match &handler {
                Some(handler) => handler(action),
                None => log::warn!("review action {action:?} has no handler"),
            })?;
        }
        Ok(())
    }

    fn try_set_file_badge(&self, file_name: Option<&str>) -> Result<(), WidgetError> {
        let classes = self.refs.file_badge.class_list();
        match file_name {
            Some(name) => {
                self.refs.file_name.set_text_content(Some(name));
                classes.add_1("active")?;
            }
            None => {
                classes.remove_1("active")?;
                self.refs.file_input.set_value("");
            }
        }
        Ok(())
    }
}

impl Surface for DomSurface {
    fn append_message(&mut self, message: &Message) {
        let html = message_html(message, self.trust_reply_html);
        if let Err(err) = self.append_block(&message_class(message.role), &html) {
            log::warn!("failed to render {} message: {err}", message.role.as_str());
        }
    }

    fn append_mentor_card(&mut self, card: &MentorCard) {
        if let Err(err) = self.try_append_mentor_card(card) {
            log::warn!("failed to render mentor card: {err}");
        }
    }

    fn append_document_saved(&mut self, file_name: &str) {
        if let Err(err) = self.append_block(DOC_SAVED_CLASS, &document_saved_html(file_name)) {
            log::warn!("failed to render document badge: {err}");
        }
    }

    fn append_review_bar(&mut self) {
        if let Err(err) = self.try_append_review_bar() {
            log::warn!("failed to render review bar: {err}");
        }
    }

    fn show_file_badge(&mut self, file_name: &str) {
        if let Err(err) = self.try_set_file_badge(Some(file_name)) {
            log::warn!("failed to show file badge: {err}");
        }
    }

    fn hide_file_badge(&mut self) {
        if let Err(err) = self.try_set_file_badge(None) {
            log::warn!("failed to hide file badge: {err}");
        }
    }

    fn clear_input(&mut self) {
        self.refs.input.set_value("");
    }

    fn focus_input(&mut self) {
        if let Err(err) = self.refs.input.focus() {
            log::warn!("failed to focus input: {}", WidgetError::from(err));
        }
    }

    fn set_panel_open(&mut self, open: bool) {
        let display = if open { "flex" } else { "none" };
        if let Err(err) = self.refs.window.style().set_property("display", display) {
            log::warn!("failed to toggle panel: {}", WidgetError::from(err));
        }
    }
}
