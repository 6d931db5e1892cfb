//! Rendering boundary between the session core and whatever displays it.
//!
//! The browser implementation lives in `dom::surface`; tests record calls
//! instead. Implementations own scrolling, escaping and layout; the session
//! only decides *what* appears and in which order.

use crate::net::types::{MentorCard, Message};

/// Display-side actions offered by the review bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewAction {
    /// Accept the previewed document.
    Approve,
    /// Return focus to the input so the user can describe changes.
    SuggestEdits,
}

/// A place the widget renders into.
///
/// Methods are infallible from the session's point of view: a surface that
/// cannot render an entry logs and skips it.
pub trait Surface {
    /// Append a chat bubble and scroll it into view.
    fn append_message(&mut self, message: &Message);

    /// Append a mentor recommendation card.
    fn append_mentor_card(&mut self, card: &MentorCard);

    /// Append the "document saved" confirmation for `file_name`.
    fn append_document_saved(&mut self, file_name: &str);

    /// Append approve / suggest-edits controls for a document preview.
    fn append_review_bar(&mut self);

    /// Show the active-file badge with `file_name`.
    fn show_file_badge(&mut self, file_name: &str);

    /// Hide the active-file badge and reset the file picker.
    fn hide_file_badge(&mut self);

    fn clear_input(&mut self);

    fn focus_input(&mut self);

    fn set_panel_open(&mut self, open: bool);
}
