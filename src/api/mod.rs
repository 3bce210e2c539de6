/// HTTP collaborators for the campus backends.
///
/// The views only talk to the backend traits defined here, so tests can swap the
/// `reqwest` clients for in-memory doubles.
///
/// - `navigation` - the navigation bot (`POST /ask`)
/// - `lost_found` - the lost-and-found service (`GET /items`, `POST /upload`)
mod lost_found;
mod navigation;

use crate::types::Item;
use async_trait::async_trait;

pub use lost_found::{LostFoundClient, SelectedFile, UploadForm, UploadReceipt};
pub use navigation::{AskRequest, AskResponse, NavigationClient, Source};

// ============================================
// Error Types
// ============================================

/// Every failure is handled the same way by the callers; the variants only exist
/// so the log line says what went wrong.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid upload: {0}")]
    InvalidUpload(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

// ============================================
// Backend Traits
// ============================================

#[async_trait]
pub trait NavigationBackend: Send + Sync {
    async fn ask(&self, query: &str) -> ApiResult<AskResponse>;
}

#[async_trait]
pub trait LostFoundBackend: Send + Sync {
    /// Base URL that relative image paths are resolved against.
    fn base_url(&self) -> &str;

    async fn list_items(&self) -> ApiResult<Vec<Item>>;

    async fn upload(&self, form: UploadForm) -> ApiResult<UploadReceipt>;
}

async fn read_body(response: reqwest::Response) -> ApiResult<String> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
