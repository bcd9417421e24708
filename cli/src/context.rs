use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use wattmap_core::{
    AppConfig, DashboardService, HttpDatasetSource, HttpSummaryClient, ServiceHandle,
};

use crate::surface::TerminalSurface;

/// Holds the running dashboard service and its handle. This is a lightweight
/// container - all orchestration lives in the service.
pub struct CliContext {
    pub handle: ServiceHandle,
    pub service_task: JoinHandle<()>,
}

impl CliContext {
    /// Load config and spawn the dashboard service against the terminal
    /// surface and the real HTTP collaborators.
    pub fn start() -> Self {
        let config = AppConfig::load();
        let source = HttpDatasetSource::new(config.dataset_url.clone());
        let provider = HttpSummaryClient::new(
            config.summary_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        );

        let (handle, service_task) = DashboardService::spawn(
            Arc::new(TerminalSurface),
            Arc::new(provider),
            source,
            config,
        );

        Self {
            handle,
            service_task,
        }
    }

    /// Stop the service loop and wait for it to finish.
    pub async fn stop(self) {
        let _ = self.handle.shutdown().await;
        let _ = self.service_task.await;
    }
}
