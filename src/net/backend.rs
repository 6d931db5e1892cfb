//! The network boundary the widget talks through.
//!
//! TRADE-OFFS
//! ==========
//! Futures are `?Send`: the widget runs on the browser's single thread and
//! its handles (`web_sys::File`, JS promises) are not `Send`. Test doubles
//! implement the same trait natively.

use async_trait::async_trait;

use super::types::{ChatReply, ChatRequest, HealthStatus, HttpReply, UploadReply};
use crate::error::WidgetError;

/// Remote ClarityOS backend.
///
/// Every call returns `Ok` once a response body was decoded, whatever the
/// HTTP status; `Err` means the backend was unreachable or answered with
/// something that is not JSON.
#[async_trait(?Send)]
pub trait Backend {
    /// Handle to a user-selected file.
    type File;

    /// `POST /upload` with `file` as multipart form data.
    async fn upload(&self, file: &Self::File) -> Result<HttpReply<UploadReply>, WidgetError>;

    /// `POST /chat/message`.
    async fn send_message(&self, request: &ChatRequest) -> Result<HttpReply<ChatReply>, WidgetError>;

    /// `GET /`.
    async fn health(&self) -> Result<HealthStatus, WidgetError>;
}
