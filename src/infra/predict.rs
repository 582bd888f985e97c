//! Thin asynchronous client for the card price prediction service.
//!
//! A single endpoint is used: `POST {base}/predict` with the player name,
//! answered by a list of card records or an `{"error": ...}` object.

use reqwest::{Client, ClientBuilder, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::CardRecord;
use crate::util::config::Settings;

const USER_AGENT: &str = concat!("card-value-scanner/", env!("CARGO_PKG_VERSION"));
pub const UNKNOWN_ERROR: &str = "unknown error";

#[derive(Debug, Error)]
pub enum PredictClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Api(String),
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    player_name: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> String {
        self.error
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PredictResponse {
    Cards(Vec<CardRecord>),
    Failure(ErrorBody),
}

#[derive(Clone, Debug)]
pub struct PredictClient {
    http: Client,
    base_url: Url,
}

impl PredictClient {
    pub fn new(settings: &Settings) -> Result<Self, PredictClientError> {
        Self::with_base_url(&settings.api_base_url)
    }

    pub fn with_base_url(base: &str) -> Result<Self, PredictClientError> {
        Self::from_builder(base, Client::builder())
    }

    fn from_builder(base: &str, builder: ClientBuilder) -> Result<Self, PredictClientError> {
        let base_url = if base.ends_with('/') {
            Url::parse(base)?
        } else {
            Url::parse(&format!("{base}/"))?
        };
        let http = builder.user_agent(USER_AGENT).build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches every card variant the service knows for `player_name`.
    pub async fn predict(&self, player_name: &str) -> Result<Vec<CardRecord>, PredictClientError> {
        let url = self.url("predict")?;
        debug!(%url, player_name, "requesting card predictions");

        let response = self
            .http
            .post(url)
            .json(&PredictRequest { player_name })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            let message = body.into_message();
            warn!(%status, %message, "prediction request rejected");
            return Err(PredictClientError::Api(message));
        }

        match response.json::<PredictResponse>().await? {
            PredictResponse::Cards(cards) => {
                info!(player_name, count = cards.len(), "received card predictions");
                Ok(cards)
            }
            PredictResponse::Failure(body) => {
                let message = body.into_message();
                warn!(%message, "prediction service reported an error");
                Err(PredictClientError::Api(message))
            }
        }
    }

    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}
