//! Remote summary client
//!
//! One POST per panel per selection: the summarization endpoint receives the
//! selected region's facts and answers with rendered narrative text. The
//! endpoint reports status inside its JSON body; anything but 200 there, a
//! transport failure, or a missing body all collapse to the same
//! rate-limit-flavored error marker at the panel.

use std::future::Future;
use std::time::Duration;

use tracing::debug;
use wattmap_types::{RegionFacts, SummaryRequest, SummaryResponse};

use crate::error::SummaryError;

/// Placeholder written into a panel while its request is in flight.
pub const LOADING: &str = "Loading...";

/// Marker rendered on any summary failure. The backing model allows 5
/// requests per minute, which is the usual reason.
pub const SUMMARY_ERROR: &str = "Error (the model is limited to 5 requests per minute)";

/// The two narrative panels, each fed by its own request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    Summary,
    Recommendation,
}

impl SummaryKind {
    pub const ALL: [SummaryKind; 2] = [SummaryKind::Summary, SummaryKind::Recommendation];

    /// Panel identifier, also sent as the request's `id` field.
    pub fn id(self) -> &'static str {
        match self {
            SummaryKind::Summary => "summary",
            SummaryKind::Recommendation => "recommendation",
        }
    }
}

/// Issues summary requests. Generic so the service can be driven by a stub
/// in tests.
pub trait SummaryProvider {
    fn fetch(
        &self,
        request: &SummaryRequest,
    ) -> impl Future<Output = Result<String, SummaryError>> + Send;
}

/// Production provider: JSON POST via reqwest, with a per-request timeout
/// (the upstream source configured none; see DESIGN.md).
#[derive(Clone)]
pub struct HttpSummaryClient {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpSummaryClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            timeout,
        }
    }
}

/// Build the request payload for one panel.
pub fn build_request(region: &str, facts: &RegionFacts, kind: SummaryKind) -> SummaryRequest {
    SummaryRequest {
        region: region.to_string(),
        data: facts.clone(),
        id: kind.id().to_string(),
    }
}

impl SummaryProvider for HttpSummaryClient {
    async fn fetch(&self, request: &SummaryRequest) -> Result<String, SummaryError> {
        debug!(region = %request.region, id = %request.id, "requesting summary");

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(SummaryError::Transport)?;

        let body: SummaryResponse = response.json().await.map_err(SummaryError::Decode)?;
        resolve_response(body)
    }
}

/// Map the endpoint's body-level status onto a result: only 200 with content
/// is a success.
pub fn resolve_response(response: SummaryResponse) -> Result<String, SummaryError> {
    if response.status_code != 200 {
        return Err(SummaryError::Status {
            status: response.status_code,
        });
    }
    response.info.ok_or(SummaryError::EmptyBody)
}
