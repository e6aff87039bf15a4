use async_trait::async_trait;
use serde::Deserialize;

use rdsnap_core::{PageSize, Snapshot};

use crate::source::{SnapshotPage, SnapshotSource, SourceConfig};
use crate::SourceError;

/// Lists snapshots from the management API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSnapshotSource {
    base_url: String,
    bearer_token: Option<String>,
    client: reqwest::Client,
}

impl HttpSnapshotSource {
    pub fn new(base_url: String, bearer_token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: SourceConfig) -> Result<Self, SourceError> {
        if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
            return Err(SourceError::ConnectionFailed(format!(
                "unsupported endpoint '{}': expected an http(s) URL",
                config.base_url
            )));
        }
        Ok(Self::new(config.base_url, config.bearer_token))
    }

    fn page_url(&self, filter: &str, page_size: PageSize, marker: Option<&str>) -> String {
        let mut url = format!("{}/v1/db-snapshots?MaxRecords={}", self.base_url, page_size);
        if !filter.is_empty() {
            url.push_str("&DBInstanceIdentifier=");
            url.push_str(&urlencoding::encode(filter));
        }
        if let Some(marker) = marker {
            url.push_str("&Marker=");
            url.push_str(&urlencoding::encode(marker));
        }
        url
    }

    fn request(&self, url: String) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }
}

#[derive(Debug, Deserialize)]
struct DescribeSnapshotsResponse {
    #[serde(rename = "DBSnapshots", default)]
    db_snapshots: Vec<Snapshot>,
    #[serde(rename = "Marker", default)]
    marker: Option<String>,
}

#[async_trait]
impl SnapshotSource for HttpSnapshotSource {
    async fn fetch_page(
        &mut self,
        filter: &str,
        page_size: PageSize,
        marker: Option<&str>,
    ) -> Result<SnapshotPage, SourceError> {
        let url = self.page_url(filter, page_size, marker);
        tracing::debug!(%url, "requesting snapshot page");

        let resp = self.request(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(SourceError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: DescribeSnapshotsResponse = serde_json::from_str(&body)?;
        Ok(SnapshotPage {
            snapshots: parsed.db_snapshots,
            marker: parsed.marker,
        })
    }
}
