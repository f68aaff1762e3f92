use fortune_shared::api::{
    CreateRequest, CreateResponse, PickRequest, PickResponse, StatsRequest, StatsResponse,
};
use fortune_shared::constants::{CREATE_PATH, PICK_PATH, STATS_PATH};
use reqwest::{blocking::Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("unexpected response: {0}")]
    Status(StatusCode),

    #[error("invalid response data: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Blocking client for the fortune server. One request at a time, no retries.
pub struct FortuneClient {
    http: Client,
    base_url: String,
    username: String,
}

impl FortuneClient {
    pub fn new(base_url: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn pick(&self) -> Result<PickResponse, ClientError> {
        self.post(
            PICK_PATH,
            &PickRequest {
                username: self.username.clone(),
            },
        )
    }

    pub fn create(&self, content: &str, author: &str) -> Result<CreateResponse, ClientError> {
        self.post(
            CREATE_PATH,
            &CreateRequest {
                content: content.to_string(),
                author: author.to_string(),
                username: self.username.clone(),
            },
        )
    }

    pub fn stats(&self) -> Result<StatsResponse, ClientError> {
        self.post(
            STATS_PATH,
            &StatsRequest {
                username: self.username.clone(),
            },
        )
    }

    fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("POST {}", url);

        let res = self
            .http
            .post(&url)
            .json(body)
            .send()
            .map_err(ClientError::Request)?;

        if res.status() != StatusCode::OK {
            return Err(ClientError::Status(res.status()));
        }

        res.json::<T>().map_err(ClientError::Decode)
    }
}
