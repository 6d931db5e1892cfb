//! Test doubles for the surface and backend boundaries.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::error::WidgetError;
use crate::net::backend::Backend;
use crate::net::types::{ChatReply, ChatRequest, HealthStatus, HttpReply, MentorCard, Message, Role, UploadReply};
use crate::surface::Surface;

/// One call observed by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Rendered {
    Message(Message),
    MentorCard(MentorCard),
    DocumentSaved(String),
    ReviewBar,
    FileBadge(Option<String>),
    InputCleared,
    InputFocused,
    Panel(bool),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub events: Vec<Rendered>,
}

impl RecordingSurface {
    /// Entries that end up in the message list, in render order.
    pub fn transcript(&self) -> Vec<Rendered> {
        self.events
            .iter()
            .filter(|event| {
                matches!(
                    event,
                    Rendered::Message(_) | Rendered::MentorCard(_) | Rendered::DocumentSaved(_) | Rendered::ReviewBar
                )
            })
            .cloned()
            .collect()
    }

    pub fn messages_from(&self, role: Role) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Rendered::Message(message) if message.role == role => Some(message.content.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn append_message(&mut self, message: &Message) {
        self.events.push(Rendered::Message(message.clone()));
    }

    fn append_mentor_card(&mut self, card: &MentorCard) {
        self.events.push(Rendered::MentorCard(card.clone()));
    }

    fn append_document_saved(&mut self, file_name: &str) {
        self.events.push(Rendered::DocumentSaved(file_name.to_owned()));
    }

    fn append_review_bar(&mut self) {
        self.events.push(Rendered::ReviewBar);
    }

    fn show_file_badge(&mut self, file_name: &str) {
        self.events.push(Rendered::FileBadge(Some(file_name.to_owned())));
    }

    fn hide_file_badge(&mut self) {
        self.events.push(Rendered::FileBadge(None));
    }

    fn clear_input(&mut self) {
        self.events.push(Rendered::InputCleared);
    }

    fn focus_input(&mut self) {
        self.events.push(Rendered::InputFocused);
    }

    fn set_panel_open(&mut self, open: bool) {
        self.events.push(Rendered::Panel(open));
    }
}

/// Backend answering from pre-queued outcomes and recording every call.
///
/// Files are plain strings standing in for the selected file's name.
#[derive(Default)]
pub(crate) struct ScriptedBackend {
    chat: RefCell<VecDeque<Result<HttpReply<ChatReply>, WidgetError>>>,
    uploads: RefCell<VecDeque<Result<HttpReply<UploadReply>, WidgetError>>>,
    health: RefCell<Option<Result<HealthStatus, WidgetError>>>,
    pub chat_requests: RefCell<Vec<ChatRequest>>,
    pub uploaded: RefCell<Vec<String>>,
}

impl ScriptedBackend {
    pub fn push_chat(&self, outcome: Result<HttpReply<ChatReply>, WidgetError>) {
        self.chat.borrow_mut().push_back(outcome);
    }

    pub fn push_upload(&self, outcome: Result<HttpReply<UploadReply>, WidgetError>) {
        self.uploads.borrow_mut().push_back(outcome);
    }

    pub fn set_health(&self, outcome: Result<HealthStatus, WidgetError>) {
        *self.health.borrow_mut() = Some(outcome);
    }

    pub fn chat_calls(&self) -> usize {
        self.chat_requests.borrow().len()
    }

    pub fn upload_calls(&self) -> usize {
        self.uploaded.borrow().len()
    }
}

fn unscripted(call: &str) -> WidgetError {
    WidgetError::Transport(format!("no scripted {call} outcome"))
}

#[async_trait(?Send)]
impl Backend for ScriptedBackend {
    type File = String;

    async fn upload(&self, file: &String) -> Result<HttpReply<UploadReply>, WidgetError> {
        self.uploaded.borrow_mut().push(file.clone());
        self.uploads.borrow_mut().pop_front().unwrap_or_else(|| Err(unscripted("upload")))
    }

    async fn send_message(&self, request: &ChatRequest) -> Result<HttpReply<ChatReply>, WidgetError> {
        self.chat_requests.borrow_mut().push(request.clone());
        self.chat.borrow_mut().pop_front().unwrap_or_else(|| Err(unscripted("chat")))
    }

    async fn health(&self) -> Result<HealthStatus, WidgetError> {
        self.health.borrow_mut().take().unwrap_or_else(|| Err(unscripted("health")))
    }
}

/// Decode a JSON body into a reply with `status`.
pub(crate) fn reply_from_json<T: serde::de::DeserializeOwned>(
    status: u16,
    body: serde_json::Value,
) -> Result<HttpReply<T>, WidgetError> {
    serde_json::from_value(body)
        .map(|body| HttpReply::new(status, body))
        .map_err(|err| WidgetError::Decode(err.to_string()))
}
