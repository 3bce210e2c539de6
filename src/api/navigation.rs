use super::{ApiResult, NavigationBackend, read_body};
use crate::config::join_url;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub struct NavigationClient {
    client: Client,
    base_url: String,
}

impl NavigationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AskRequest<'a> {
    pub query: &'a str,
}

/// Place the bot matched the question against.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Source {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub distance: Option<f64>,
}

impl Source {
    /// Both coordinates, when the bot sent them. The bot reports `0` for places it has
    /// no position for, so a zero on either axis counts as missing.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let present = |value: Option<f64>| value.filter(|v| *v != 0.0);
        Some((present(self.lat)?, present(self.lng)?))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default)]
    pub source: Option<Source>,
}

#[async_trait]
impl NavigationBackend for NavigationClient {
    async fn ask(&self, query: &str) -> ApiResult<AskResponse> {
        let url = join_url(&self.base_url, "ask");
        tracing::debug!(%url, "asking navigation bot");
        let response = self
            .client
            .post(&url)
            .json(&AskRequest { query })
            .send()
            .await?;
        let body = read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_answer_with_location_source() {
        let raw = r#"{
            "answer": "L'emplacement 'Bloc Prepa' se trouve ici :",
            "source": {"type": "location", "title": "Bloc Prepa", "lat": 36.8344411, "lng": 10.1456052, "distance": 0.123456}
        }"#;
        let response: AskResponse = serde_json::from_str(raw).unwrap();
        let source = response.source.unwrap();
        assert_eq!(source.kind.as_deref(), Some("location"));
        assert_eq!(source.coordinates(), Some((36.8344411, 10.1456052)));
    }

    #[test]
    fn missing_coordinates_yield_none() {
        let raw = r#"{"answer": "I don't know", "source": {"type": "faq", "title": "Opening hours"}}"#;
        let response: AskResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.source.unwrap().coordinates(), None);

        let bare: AskResponse = serde_json::from_str(r#"{"answer": "hi"}"#).unwrap();
        assert!(bare.source.is_none());
    }

    #[test]
    fn zero_coordinates_count_as_missing() {
        let raw = r#"{"answer": "Cafeteria", "source": {"title": "Cafeteria", "lat": 0, "lng": 10.1456052}}"#;
        let response: AskResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.source.unwrap().coordinates(), None);
    }

    #[test]
    fn request_body_is_a_single_query_field() {
        let body = serde_json::to_value(AskRequest { query: "Where is the library?" }).unwrap();
        assert_eq!(body, serde_json::json!({ "query": "Where is the library?" }));
    }
}
