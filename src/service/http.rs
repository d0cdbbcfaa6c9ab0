//! HTTP client for the puzzle service
//!
//! `GET /api/today` returns `{"words": [...]}`; `POST /api/check` takes
//! `{"selection": [...]}` and returns `{"isCorrect": bool, "group"?: {...}}`.

use super::{DailyPuzzle, GroupCheck, PuzzleService};
use crate::core::{GROUP_SIZE, SolvedGroup};
use crate::error::ServiceError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct TodayResponse {
    words: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CheckRequest<'a> {
    selection: &'a [String; GROUP_SIZE],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckResponse {
    is_correct: bool,
    #[serde(default)]
    group: Option<SolvedGroup>,
}

pub struct HttpPuzzleService {
    client: Client,
    base_url: String,
}

impl HttpPuzzleService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl PuzzleService for HttpPuzzleService {
    async fn fetch_today(&self) -> Result<DailyPuzzle, ServiceError> {
        let url = self.endpoint("/api/today");
        debug!("GET {}", url);

        let body: TodayResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        DailyPuzzle::new(body.words)
    }

    async fn check_group(
        &self,
        selection: &[String; GROUP_SIZE],
    ) -> Result<GroupCheck, ServiceError> {
        let url = self.endpoint("/api/check");
        debug!("POST {} selection={:?}", url, selection);

        let body: CheckResponse = self
            .client
            .post(&url)
            .json(&CheckRequest { selection })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match (body.is_correct, body.group) {
            (true, Some(group)) => Ok(GroupCheck::Correct(group)),
            (true, None) => Err(ServiceError::InvalidResponse(
                "correct answer without a group".to_string(),
            )),
            (false, _) => Ok(GroupCheck::Incorrect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let service = HttpPuzzleService::new("http://localhost:3001/");
        assert_eq!(service.base_url(), "http://localhost:3001");
        assert_eq!(
            service.endpoint("/api/today"),
            "http://localhost:3001/api/today"
        );
    }

    #[test]
    fn check_response_without_group() {
        let body: CheckResponse = serde_json::from_str(r#"{"isCorrect":false}"#).unwrap();
        assert!(!body.is_correct);
        assert!(body.group.is_none());
    }

    #[test]
    fn check_request_shape() {
        let selection = ["BASS", "PIKE", "SOLE", "CARP"].map(String::from);
        let json = serde_json::to_string(&CheckRequest {
            selection: &selection,
        })
        .unwrap();
        assert_eq!(json, r#"{"selection":["BASS","PIKE","SOLE","CARP"]}"#);
    }
}
