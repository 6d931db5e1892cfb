//! Conversation session: history, active file context, panel visibility.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each network flow is split into a synchronous `begin_*` step (guard,
//! optimistic rendering, request snapshot) and a synchronous `finish_*` step
//! (apply the outcome). The async gap between them is owned by
//! [`crate::widget::Widget`], which never holds a session borrow across an
//! `.await`, so overlapping requests each finish in arrival order.
//!
//! Every rendered message, notices included, is appended to history and
//! sent back to the backend on the next turn.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::panel::Visibility;
use crate::error::WidgetError;
use crate::net::types::{ChatReply, ChatRequest, HttpReply, MentorCard, Message, Role, UploadReply, detail_text};
use crate::render::markup::escape_markdown;
use crate::surface::Surface;

pub const OFFLINE_NOTICE: &str = "⚠️ ClarityOS is offline. Please check backend.";
pub const UPLOAD_UNREACHABLE_NOTICE: &str = "❌ Upload failed. Check if backend is running.";
pub const UNKNOWN_ERROR: &str = "Unknown error";
/// Sent on the user's behalf by the review bar's approve button.
pub const APPROVE_MESSAGE: &str = "Looks good, save it.";

pub fn uploading_notice(file_name: &str) -> String {
    format!("📤 Uploading {file_name}...")
}

/// The file name is shown literally, whatever Markdown it contains.
pub fn upload_success_notice(file_name: &str) -> String {
    format!("✅ **{}** analyzed! I'll use this context in our chat.", escape_markdown(file_name))
}

pub fn upload_failed_notice(detail: &str) -> String {
    format!("❌ Upload failed: {detail}")
}

pub fn chat_failed_notice(detail: &str) -> String {
    format!("⚠️ Message failed: {detail}")
}

/// Final path segment, splitting on both `/` and `\`.
pub fn document_file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Conversation state bound to one surface.
pub struct Session<S> {
    surface: S,
    history: Vec<Message>,
    file_context: Option<String>,
    file_name: Option<String>,
    visibility: Visibility,
}

impl<S: Surface> Session<S> {
    pub fn new(surface: S) -> Self {
        Self { surface, history: Vec::new(), file_context: None, file_name: None, visibility: Visibility::Closed }
    }

    // --- Queries ---

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Extracted text of the active upload, if any.
    pub fn file_context(&self) -> Option<&str> {
        self.file_context.as_deref()
    }

    /// Display name of the active upload, if any.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // --- Rendering ---

    /// Render `text` as a `role` bubble and append it to history.
    pub fn render(&mut self, text: impl Into<String>, role: Role) {
        let message = Message::new(role, text);
        self.surface.append_message(&message);
        self.history.push(message);
    }

    pub fn render_mentor_card(&mut self, card: &MentorCard) {
        self.surface.append_mentor_card(card);
    }

    pub fn render_document_saved(&mut self, path: &str) {
        self.surface.append_document_saved(document_file_name(path));
    }

    // --- Panel ---

    pub fn toggle_panel(&mut self) -> Visibility {
        self.visibility = self.visibility.toggled();
        self.surface.set_panel_open(self.visibility.is_open());
        self.visibility
    }

    // --- Send flow ---

    /// Render the user's turn and snapshot the request for it.
    ///
    /// Returns `None` (and renders nothing) when `raw` is blank.
    pub fn begin_send(&mut self, raw: &str) -> Option<ChatRequest> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        self.render(text, Role::User);
        self.surface.clear_input();
        Some(ChatRequest { history: self.history.clone(), file_context: self.file_context.clone() })
    }

    /// Render the outcome of a chat request.
    pub fn finish_send(&mut self, outcome: Result<HttpReply<ChatReply>, WidgetError>) {
        let reply = match outcome {
            Ok(reply) => reply,
            Err(err) => {
                log::error!("chat request failed: {err}");
                self.render(OFFLINE_NOTICE, Role::Assistant);
                return;
            }
        };

        let success = reply.is_success();
        let body = reply.body;
        log::debug!(
            "chat reply: status={} state={:?} message_count={:?} cards={} preview={}",
            reply.status,
            body.conversation_state,
            body.message_count,
            body.cards().len(),
            body.document_preview.is_some(),
        );

        let detail = || detail_text(body.detail.as_ref()).unwrap_or_else(|| UNKNOWN_ERROR.to_owned());
        if !success {
            let detail = detail();
            log::warn!("chat request rejected: status={} detail={detail}", reply.status);
            self.render(chat_failed_notice(&detail), Role::Assistant);
            return;
        }

        match body.reply.as_deref() {
            Some(text) => self.render(text, Role::Assistant),
            None => {
                let detail = detail();
                log::warn!("chat reply has no text: detail={detail}");
                self.render(chat_failed_notice(&detail), Role::Assistant);
            }
        }

        if let Some(path) = body.saved_document_path() {
            self.render_document_saved(path);
        }
        for card in body.cards() {
            self.render_mentor_card(card);
        }
        if body.show_review_buttons {
            self.surface.append_review_bar();
        }
    }

    // --- Upload flow ---

    /// Announce an upload of `file_name`.
    pub fn begin_upload(&mut self, file_name: &str) {
        self.render(uploading_notice(file_name), Role::User);
    }

    /// Apply the outcome of an upload. The file context only changes on success.
    pub fn finish_upload(&mut self, file_name: &str, outcome: Result<HttpReply<UploadReply>, WidgetError>) {
        let reply = match outcome {
            Ok(reply) => reply,
            Err(err) => {
                log::error!("upload of {file_name} failed: {err}");
                self.render(UPLOAD_UNREACHABLE_NOTICE, Role::Assistant);
                return;
            }
        };

        if reply.is_success() && reply.body.is_success() {
            log::debug!("upload of {file_name} succeeded (server name {:?})", reply.body.filename);
            self.file_context = reply.body.content;
            self.file_name = Some(file_name.to_owned());
            self.surface.show_file_badge(file_name);
            self.render(upload_success_notice(file_name), Role::Assistant);
        } else {
            let detail = detail_text(reply.body.detail.as_ref()).unwrap_or_else(|| UNKNOWN_ERROR.to_owned());
            log::warn!("upload of {file_name} rejected: status={} detail={detail}", reply.status);
            self.render(upload_failed_notice(&detail), Role::Assistant);
        }
    }

    /// Drop the active file context and reset the picker.
    pub fn remove_file(&mut self) {
        self.file_context = None;
        self.file_name = None;
        self.surface.hide_file_badge();
    }
}
