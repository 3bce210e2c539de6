//! In-memory backends for the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use campus_assistant::api::{
    ApiError, ApiResult, AskResponse, LostFoundBackend, NavigationBackend, Source, UploadForm,
    UploadReceipt,
};
use campus_assistant::types::{Detection, Item, ItemKind};
use std::collections::VecDeque;
use std::sync::Mutex;

pub fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        body: "Error".to_string(),
    }
}

#[derive(Default)]
pub struct MockNavigation {
    replies: Mutex<VecDeque<ApiResult<AskResponse>>>,
    queries: Mutex<Vec<String>>,
}

impl MockNavigation {
    pub fn replying(replies: Vec<ApiResult<AskResponse>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl NavigationBackend for MockNavigation {
    async fn ask(&self, query: &str) -> ApiResult<AskResponse> {
        self.queries.lock().unwrap().push(query.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(server_error()))
    }
}

pub fn located_answer() -> AskResponse {
    AskResponse {
        answer: "L'emplacement 'Bloc Prepa' se trouve ici :".to_string(),
        source: Some(Source {
            kind: Some("location".to_string()),
            title: "Bloc Prepa".to_string(),
            lat: Some(36.8344411),
            lng: Some(10.1456052),
            distance: Some(0.123456),
        }),
    }
}

pub struct MockLostFound {
    base_url: String,
    listings: Mutex<VecDeque<ApiResult<Vec<Item>>>>,
    uploads: Mutex<VecDeque<ApiResult<UploadReceipt>>>,
    list_calls: Mutex<usize>,
    sent_forms: Mutex<Vec<UploadForm>>,
}

impl MockLostFound {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            listings: Mutex::new(VecDeque::new()),
            uploads: Mutex::new(VecDeque::new()),
            list_calls: Mutex::new(0),
            sent_forms: Mutex::new(Vec::new()),
        }
    }

    pub fn with_listing(self, listing: ApiResult<Vec<Item>>) -> Self {
        self.listings.lock().unwrap().push_back(listing);
        self
    }

    pub fn with_upload(self, receipt: ApiResult<UploadReceipt>) -> Self {
        self.uploads.lock().unwrap().push_back(receipt);
        self
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    pub fn sent_forms(&self) -> Vec<UploadForm> {
        self.sent_forms.lock().unwrap().clone()
    }
}

#[async_trait]
impl LostFoundBackend for MockLostFound {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_items(&self) -> ApiResult<Vec<Item>> {
        *self.list_calls.lock().unwrap() += 1;
        self.listings
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn upload(&self, form: UploadForm) -> ApiResult<UploadReceipt> {
        self.sent_forms.lock().unwrap().push(form);
        self.uploads
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(server_error()))
    }
}

pub fn item(id: &str, kind: ItemKind, description: &str) -> Item {
    Item {
        id: id.to_string(),
        kind,
        description: description.to_string(),
        location: None,
        contact_info: None,
        image_path: None,
        detections: Vec::new(),
        timestamp: None,
        matches: Vec::new(),
        expanded: false,
    }
}

pub fn wallet_report() -> Item {
    Item {
        location: Some("Bloc Prepa".to_string()),
        contact_info: Some("john.doe@example.com".to_string()),
        image_path: Some("/data/test.jpg".to_string()),
        detections: vec![Detection {
            name: "wallet".to_string(),
            confidence: 0.9,
        }],
        timestamp: Some("2023-10-01T10:00:00Z".to_string()),
        ..item("1", ItemKind::Lost, "Lost a black wallet")
    }
}

pub fn wallet_receipt() -> UploadReceipt {
    UploadReceipt {
        id: "1".to_string(),
        detections: vec![Detection {
            name: "wallet".to_string(),
            confidence: 0.9,
        }],
    }
}
