//! `gloo-net` implementation of [`Backend`] for the browser.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

use super::backend::Backend;
use super::types::{ChatReply, ChatRequest, HealthStatus, HttpReply, UploadReply};
use crate::config::WidgetConfig;
use crate::error::WidgetError;

/// Multipart field name the backend reads the upload from.
const UPLOAD_FIELD: &str = "file";

/// Backend reached over `fetch`.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    upload_url: String,
    chat_url: String,
    health_url: String,
}

impl HttpBackend {
    pub fn new(config: &WidgetConfig) -> Self {
        Self { upload_url: config.upload_url(), chat_url: config.chat_url(), health_url: config.health_url() }
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    type File = File;

    async fn upload(&self, file: &File) -> Result<HttpReply<UploadReply>, WidgetError> {
        let form = FormData::new()?;
        form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())?;

        log::debug!("POST {} ({} bytes)", self.upload_url, file.size());
        let resp = Request::post(&self.upload_url).body(form)?.send().await?;
        decode(resp).await
    }

    async fn send_message(&self, request: &ChatRequest) -> Result<HttpReply<ChatReply>, WidgetError> {
        log::debug!("POST {} (history={})", self.chat_url, request.history.len());
        let resp = Request::post(&self.chat_url).json(request)?.send().await?;
        decode(resp).await
    }

    async fn health(&self) -> Result<HealthStatus, WidgetError> {
        let resp = Request::get(&self.health_url).send().await?;
        Ok(decode::<HealthStatus>(resp).await?.body)
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<HttpReply<T>, WidgetError> {
    let status = resp.status();
    let body = resp.json::<T>().await?;
    Ok(HttpReply::new(status, body))
}
