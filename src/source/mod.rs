use std::time::Duration;

use thiserror::Error;

use crate::model::{self, EmojiRecord};

pub const DEFAULT_ENDPOINT: &str = "https://emojihub.yurace.pro/api/all";

const USER_AGENT: &str = concat!("emojihub/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub enum DatasetSource {
    Http(String),
    FilePath(String),
    Inline(Vec<EmojiRecord>),
}

impl Default for DatasetSource {
    fn default() -> Self {
        Self::Http(DEFAULT_ENDPOINT.to_string())
    }
}

impl DatasetSource {
    pub fn describe(&self) -> String {
        match self {
            Self::Http(url) => url.clone(),
            Self::FilePath(path) => path.clone(),
            Self::Inline(records) => format!("{} inline records", records.len()),
        }
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to build HTTP client: {source}")]
    HttpClientBuild {
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to setup proxy: {proxy}: {source}")]
    ProxySetup {
        proxy: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read dataset file: {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode emoji list from {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, Default)]
pub struct HttpSettings {
    /// `None` leaves the request without a deadline.
    pub timeout_seconds: Option<u64>,
    pub proxy: Option<String>,
    pub use_system_proxy: bool,
}

pub fn build_client(settings: &HttpSettings) -> Result<reqwest::Client, SourceError> {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::USER_AGENT,
        reqwest::header::HeaderValue::from_static(USER_AGENT),
    );
    headers.insert(
        reqwest::header::ACCEPT,
        reqwest::header::HeaderValue::from_static("application/json"),
    );

    let mut builder = reqwest::Client::builder().default_headers(headers);
    if let Some(secs) = settings.timeout_seconds.filter(|s| *s > 0) {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    if let Some(proxy) = settings.proxy.as_deref().filter(|p| !p.trim().is_empty()) {
        let proxy = reqwest::Proxy::all(proxy).map_err(|e| SourceError::ProxySetup {
            proxy: proxy.to_string(),
            source: e,
        })?;
        builder = builder.proxy(proxy);
    } else if !settings.use_system_proxy {
        builder = builder.no_proxy();
    }

    builder
        .build()
        .map_err(|e| SourceError::HttpClientBuild { source: e })
}

pub async fn fetch_records(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<EmojiRecord>, SourceError> {
    log::debug!("GET {url}");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| SourceError::Request {
            url: url.to_string(),
            source: e,
        })?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let body = response.text().await.map_err(|e| SourceError::Request {
        url: url.to_string(),
        source: e,
    })?;
    model::parse_records(&body).map_err(|e| SourceError::Decode {
        origin: url.to_string(),
        source: e,
    })
}

pub async fn read_records(path: &str) -> Result<Vec<EmojiRecord>, SourceError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SourceError::FileRead {
            path: path.to_string(),
            source: e,
        })?;
    model::parse_records(&raw).map_err(|e| SourceError::Decode {
        origin: path.to_string(),
        source: e,
    })
}

/// Performs the single dataset read for a session.
pub async fn load(
    source: &DatasetSource,
    settings: &HttpSettings,
) -> Result<Vec<EmojiRecord>, SourceError> {
    match source {
        DatasetSource::Http(url) => {
            let client = build_client(settings)?;
            fetch_records(&client, url).await
        }
        DatasetSource::FilePath(path) => read_records(path).await,
        DatasetSource::Inline(records) => Ok(records.clone()),
    }
}
