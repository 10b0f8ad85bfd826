use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, time::Duration};
use thiserror::Error;

/// Errors while translating a text
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The translator name is not one of the supported ones
    #[error("unrecognized translator type '{0}'")]
    UnrecognizedTranslator(String),

    /// Any non-200 answer, 429 when the hourly rate limit is hit
    #[error("unexpected status code {0} from funtranslations")]
    UpstreamStatus(StatusCode),

    #[error("request to funtranslations failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed funtranslations response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The translators this service knows how to call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslatorKind {
    Yoda,
    Shakespeare,
}

impl TranslatorKind {
    /// The name of the translator, as used in the upstream endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslatorKind::Yoda => "yoda",
            TranslatorKind::Shakespeare => "shakespeare",
        }
    }

    /// The upstream sub-path of the translator
    pub fn path(&self) -> &'static str {
        match self {
            TranslatorKind::Yoda => "yoda.json",
            TranslatorKind::Shakespeare => "shakespeare.json",
        }
    }
}

impl fmt::Display for TranslatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranslatorKind {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yoda" => Ok(TranslatorKind::Yoda),
            "shakespeare" => Ok(TranslatorKind::Shakespeare),
            other => Err(TranslationError::UnrecognizedTranslator(other.to_string())),
        }
    }
}

/// Rewrites text in the voice of a translator
#[async_trait]
pub trait FunTranslate: Send + Sync {
    /// Translates `text` with the given translator, in a single attempt
    async fn translate(&self, kind: TranslatorKind, text: &str) -> Result<String, TranslationError>;

    /// Same as [`FunTranslate::translate`] but takes the translator by name.
    /// Unknown names fail before anything is sent upstream
    async fn translate_named(&self, translator: &str, text: &str) -> Result<String, TranslationError> {
        let kind: TranslatorKind = translator.parse()?;
        self.translate(kind, text).await
    }
}

/// [`FunTranslate`] backed by the funtranslations.com API
///
/// Reference: https://funtranslations.com/api/
pub struct FunTranslationsClient {
    client: reqwest::Client,
    base_url: Url,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    contents: TranslateContents,
}

#[derive(Deserialize)]
struct TranslateContents {
    translated: String,
}

impl FunTranslationsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Self::with_client(super::http_client(timeout)?, base_url)
    }

    /// Builds the client on top of an already configured [`reqwest::Client`]
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: super::parse_base_url(base_url)?,
        })
    }

    /// The URL of the given translator
    pub fn translator_url(&self, kind: TranslatorKind) -> Url {
        super::join_segments(&self.base_url, &[kind.path()])
    }
}

#[async_trait]
impl FunTranslate for FunTranslationsClient {
    async fn translate(&self, kind: TranslatorKind, text: &str) -> Result<String, TranslationError> {
        let url = self.translator_url(kind);
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(&TranslateRequest { text })
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(TranslationError::UpstreamStatus(response.status()));
        }

        let body = response.text().await?;
        let translation: TranslateResponse = serde_json::from_str(&body)?;
        Ok(translation.contents.translated)
    }
}
