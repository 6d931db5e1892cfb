//! Intent driver: one method per user action.
//!
//! SYSTEM CONTEXT
//! ==============
//! DOM handlers call into [`Widget`] and nothing else. Each async intent
//! borrows the session only inside the synchronous `begin_*`/`finish_*`
//! steps, so a second send can start while the first is still in flight and
//! replies render in the order they arrive.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::backend::Backend;
use crate::state::panel::Visibility;
use crate::state::session::{APPROVE_MESSAGE, Session};
use crate::surface::{ReviewAction, Surface};

/// A file picked by the user.
#[derive(Clone, Debug)]
pub struct SelectedFile<F> {
    pub name: String,
    pub handle: F,
}

/// Shared handle to a session and its backend. Cheap to clone into handlers.
pub struct Widget<B, S> {
    session: Rc<RefCell<Session<S>>>,
    backend: Rc<B>,
}

impl<B, S> Clone for Widget<B, S> {
    fn clone(&self) -> Self {
        Self { session: Rc::clone(&self.session), backend: Rc::clone(&self.backend) }
    }
}

impl<B: Backend, S: Surface> Widget<B, S> {
    pub fn new(session: Session<S>, backend: B) -> Self {
        Self { session: Rc::new(RefCell::new(session)), backend: Rc::new(backend) }
    }

    /// Run `f` with the session borrowed. Must not be called re-entrantly.
    pub fn with_session<R>(&self, f: impl FnOnce(&mut Session<S>) -> R) -> R {
        f(&mut *self.session.borrow_mut())
    }

    /// Launcher or close button.
    pub fn toggle_panel(&self) -> Visibility {
        self.with_session(Session::toggle_panel)
    }

    /// File badge remove button.
    pub fn remove_file(&self) {
        self.with_session(Session::remove_file);
    }

    /// Send button or Enter in the text input.
    pub async fn send(&self, raw: &str) {
        let request = self.with_session(|session| session.begin_send(raw));
        let Some(request) = request else {
            return;
        };
        let outcome = self.backend.send_message(&request).await;
        self.with_session(|session| session.finish_send(outcome));
    }

    /// File input change. `None` means the picker was dismissed.
    pub async fn upload(&self, file: Option<SelectedFile<B::File>>) {
        let Some(file) = file else {
            return;
        };
        self.with_session(|session| session.begin_upload(&file.name));
        let outcome = self.backend.upload(&file.handle).await;
        self.with_session(|session| session.finish_upload(&file.name, outcome));
    }

    /// Review bar buttons.
    pub async fn review(&self, action: ReviewAction) {
        match action {
            ReviewAction::Approve => self.send(APPROVE_MESSAGE).await,
            ReviewAction::SuggestEdits => self.with_session(|session| session.surface_mut().focus_input()),
        }
    }

    /// Log what the backend reports about itself. No visible effect.
    pub async fn probe_health(&self) {
        match self.backend.health().await {
            Ok(health) => log::info!(
                "backend status={} mentors_indexed={} model={}",
                health.status.as_deref().unwrap_or("unknown"),
                health.mentors_indexed.map_or_else(|| "?".to_owned(), |n| n.to_string()),
                health.model.as_deref().unwrap_or("unknown"),
            ),
            Err(err) => log::warn!("backend health probe failed: {err}"),
        }
    }
}
