//! Dataset fetch + load pipeline

use std::future::Future;

use tracing::info;

use crate::error::DatasetError;

use super::{FactIndex, build_fact_index, parse_records};

/// Where the raw CSV text comes from. The HTTP source is the production
/// implementation; tests feed canned text through a stub.
pub trait DatasetSource {
    fn fetch(&self) -> impl Future<Output = Result<String, DatasetError>> + Send;
}

/// Fetches the dataset over HTTP. No caching: every load hits the URL again,
/// since the map is redrawn from fresh data on each mode change.
#[derive(Clone)]
pub struct HttpDatasetSource {
    client: reqwest::Client,
    url: String,
}

impl HttpDatasetSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl DatasetSource for HttpDatasetSource {
    async fn fetch(&self) -> Result<String, DatasetError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| DatasetError::Fetch {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DatasetError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(DatasetError::Body)
    }
}

/// Fetch, parse, and index the dataset. Failures propagate unchanged; there
/// is no retry at this layer.
pub async fn load<S: DatasetSource>(source: &S) -> Result<FactIndex, DatasetError> {
    let text = source.fetch().await?;
    let records = parse_records(&text)?;
    let index = build_fact_index(records);
    info!(regions = index.len(), "dataset loaded");
    Ok(index)
}
