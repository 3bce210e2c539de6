use super::{ApiError, ApiResult, LostFoundBackend, read_body};
use crate::config::join_url;
use crate::types::{Detection, Item, ItemKind};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

pub struct LostFoundClient {
    client: Client,
    base_url: String,
}

impl LostFoundClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

/// File picked in the report form, already read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Snapshot of the report form as it is sent to `/upload`.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadForm {
    pub kind: ItemKind,
    pub description: String,
    pub location: Option<String>,
    pub contact_info: Option<String>,
    pub file: Option<SelectedFile>,
}

impl UploadForm {
    /// Text parts in send order. Optional fields only appear when non-empty.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("type", self.kind.as_str().to_string()),
            ("description", self.description.clone()),
        ];
        if let Some(location) = self.location.as_ref().filter(|v| !v.is_empty()) {
            fields.push(("location", location.clone()));
        }
        if let Some(contact) = self.contact_info.as_ref().filter(|v| !v.is_empty()) {
            fields.push(("contactInfo", contact.clone()));
        }
        fields
    }

    pub fn into_multipart(self) -> ApiResult<Form> {
        let mut form = Form::new();
        for (name, value) in self.text_fields() {
            form = form.text(name, value);
        }
        if let Some(file) = self.file {
            let mut part = Part::bytes(file.bytes).file_name(file.name);
            if let Some(mime) = file.content_type.as_deref() {
                part = part
                    .mime_str(mime)
                    .map_err(|e| ApiError::InvalidUpload(e.to_string()))?;
            }
            form = form.part("file", part);
        }
        Ok(form)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UploadReceipt {
    pub id: String,
    #[serde(default)]
    pub detections: Vec<Detection>,
}

#[async_trait]
impl LostFoundBackend for LostFoundClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_items(&self) -> ApiResult<Vec<Item>> {
        let url = join_url(&self.base_url, "items");
        tracing::debug!(%url, "fetching items");
        let response = self.client.get(&url).send().await?;
        let body = read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn upload(&self, form: UploadForm) -> ApiResult<UploadReceipt> {
        let url = join_url(&self.base_url, "upload");
        tracing::debug!(%url, kind = %form.kind, "uploading report");
        let response = self
            .client
            .post(&url)
            .multipart(form.into_multipart()?)
            .send()
            .await?;
        let body = read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
