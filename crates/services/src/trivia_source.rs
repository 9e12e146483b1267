use std::env;
use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use trivia_core::model::RawQuestion;

use crate::error::{ConfigError, FetchError};

pub const DEFAULT_API_URL: &str = "https://opentdb.com/api.php";
pub const DEFAULT_AMOUNT: u32 = 5;
/// Largest `amount` Open Trivia DB accepts per request.
pub const MAX_AMOUNT: u32 = 50;

//
// ─── FILTERS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ConfigError::InvalidDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question format filter (`type` in the API query).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Multiple,
    Boolean,
}

impl QuestionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Multiple => "multiple",
            Self::Boolean => "boolean",
        }
    }
}

impl FromStr for QuestionKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "multiple" => Ok(Self::Multiple),
            "boolean" => Ok(Self::Boolean),
            _ => Err(ConfigError::InvalidKind(s.to_string())),
        }
    }
}

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriviaSourceConfig {
    pub base_url: String,
    pub amount: u32,
    pub category: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub kind: Option<QuestionKind>,
}

impl Default for TriviaSourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            amount: DEFAULT_AMOUNT,
            category: None,
            difficulty: None,
            kind: None,
        }
    }
}

impl TriviaSourceConfig {
    /// Read `TRIVIA_*` variables; unset or invalid values keep their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = env::var("TRIVIA_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
        {
            config.base_url = url;
        }
        if let Some(amount) = env::var("TRIVIA_AMOUNT")
            .ok()
            .and_then(|value| parse_amount(&value).ok())
        {
            config.amount = amount;
        }
        config.category = env::var("TRIVIA_CATEGORY")
            .ok()
            .and_then(|value| parse_category(&value).ok());
        config.difficulty = env::var("TRIVIA_DIFFICULTY")
            .ok()
            .and_then(|value| value.parse().ok());
        config.kind = env::var("TRIVIA_TYPE")
            .ok()
            .and_then(|value| value.parse().ok());
        config
    }

    /// Query string pairs for a single fetch.
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("amount", self.amount.to_string())];
        if let Some(category) = self.category {
            pairs.push(("category", category.to_string()));
        }
        if let Some(difficulty) = self.difficulty {
            pairs.push(("difficulty", difficulty.as_str().to_string()));
        }
        if let Some(kind) = self.kind {
            pairs.push(("type", kind.as_str().to_string()));
        }
        pairs
    }
}

/// Parse a question count, accepting `1..=MAX_AMOUNT`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidAmount` for non-numeric or out-of-range values.
pub fn parse_amount(raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|amount| (1..=MAX_AMOUNT).contains(amount))
        .ok_or_else(|| ConfigError::InvalidAmount {
            raw: raw.to_string(),
            max: MAX_AMOUNT,
        })
}

/// Parse a numeric category id.
///
/// # Errors
///
/// Returns `ConfigError::InvalidCategory` if `raw` is not a number.
pub fn parse_category(raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::InvalidCategory(raw.to_string()))
}

//
// ─── SOURCE ────────────────────────────────────────────────────────────────────
//

/// Anything that can hand back a batch of raw trivia results.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<RawQuestion>, FetchError>;
}

/// Open Trivia DB over HTTP.
#[derive(Clone)]
pub struct OpenTdbSource {
    client: Client,
    config: TriviaSourceConfig,
}

impl OpenTdbSource {
    #[must_use]
    pub fn new(config: TriviaSourceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl QuestionSource for OpenTdbSource {
    async fn fetch(&self) -> Result<Vec<RawQuestion>, FetchError> {
        tracing::debug!(url = %self.config.base_url, amount = self.config.amount, "fetching questions");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&self.config.query())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let body: TriviaResponse = response.json().await?;
        body.into_results()
    }
}

#[derive(Debug, Deserialize)]
struct TriviaResponse {
    #[serde(default)]
    response_code: u8,
    #[serde(default)]
    results: Vec<RawQuestion>,
}

impl TriviaResponse {
    fn into_results(self) -> Result<Vec<RawQuestion>, FetchError> {
        if self.response_code != 0 {
            return Err(FetchError::Api {
                code: self.response_code,
            });
        }
        Ok(self.results)
    }
}
