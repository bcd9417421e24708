//! Dashboard service - coordinates dataset loading, selection state, and
//! panel updates
//!
//! Architecture (mirrors the rest of the engine's handle/command split):
//! - SharedState: Arc-wrapped state readable by frontends
//! - ServiceHandle: for sending commands + accessing shared state
//! - DashboardService: background task that processes commands and writes
//!   every UI update through a [`PanelSurface`]
//!
//! The surface is the DOM stand-in: frontends implement it, the service is
//! the only writer. Summary completions are applied through per-panel
//! generation counters so a stale response never overwrites a newer one.


use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{RwLock, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};
use wattmap_types::{Palette, RegionFacts, VizColumn};

use crate::config::AppConfig;
use crate::dataset::{self, DatasetSource, FactIndex};
use crate::format::{FACT_ERROR, build_fact_sheet};
use crate::regions;
use crate::selection::Selection;
use crate::summary::{self, LOADING, SUMMARY_ERROR, SummaryKind, SummaryProvider};

// ─────────────────────────────────────────────────────────────────────────────
// Panels & surface
// ─────────────────────────────────────────────────────────────────────────────

/// Every output region the dashboard writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    ConsumptionRenewable,
    ConsumptionNonRenewable,
    ProductionRenewable,
    ProductionNonRenewable,
    Summary,
    Recommendation,
}

impl Panel {
    /// The four fact-sheet panels, in render order.
    pub const FACTS: [Panel; 4] = [
        Panel::ConsumptionRenewable,
        Panel::ConsumptionNonRenewable,
        Panel::ProductionRenewable,
        Panel::ProductionNonRenewable,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Panel::ConsumptionRenewable => "consumption-renewable",
            Panel::ConsumptionNonRenewable => "consumption-non-renewable",
            Panel::ProductionRenewable => "production-renewable",
            Panel::ProductionNonRenewable => "production-non-renewable",
            Panel::Summary => "summary",
            Panel::Recommendation => "recommendation",
        }
    }

    fn for_summary(kind: SummaryKind) -> Panel {
        match kind {
            SummaryKind::Summary => Panel::Summary,
            SummaryKind::Recommendation => Panel::Recommendation,
        }
    }
}

/// Output surface the service renders into. Implementations decide what a
/// "panel" physically is (terminal section, DOM node, test recorder).
pub trait PanelSurface: Send + Sync {
    fn set_header(&self, text: &str);
    fn set_busy(&self, busy: bool);
    fn set_panel(&self, panel: Panel, content: &str);
    /// The map itself is an external collaborator; the surface is only told
    /// which column/palette to draw with.
    fn draw_map(&self, column: VizColumn, palette: Palette);
    fn clear_map(&self);
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared state
// ─────────────────────────────────────────────────────────────────────────────

/// State shared between the service and frontends.
pub struct SharedState {
    pub config: RwLock<AppConfig>,
    /// Rebuilt (old index discarded) on every dataset load.
    pub fact_index: RwLock<Option<FactIndex>>,
    pub selection: RwLock<Selection>,
    summary_generation: AtomicU64,
    recommendation_generation: AtomicU64,
}

impl SharedState {
    fn new(config: AppConfig) -> Self {
        Self {
            config: RwLock::new(config),
            fact_index: RwLock::new(None),
            selection: RwLock::new(Selection::Aggregate),
            summary_generation: AtomicU64::new(0),
            recommendation_generation: AtomicU64::new(0),
        }
    }

    fn generation(&self, kind: SummaryKind) -> &AtomicU64 {
        match kind {
            SummaryKind::Summary => &self.summary_generation,
            SummaryKind::Recommendation => &self.recommendation_generation,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Service handle (for frontends)
// ─────────────────────────────────────────────────────────────────────────────

/// Commands processed by the dashboard service.
#[derive(Debug, Clone)]
pub enum DashboardCommand {
    /// A map click carrying the clicked shape's geometry identifier, or
    /// `None` for a background click.
    Click { geometry_id: Option<String> },
    /// Switch the visualization column (reloads the dataset).
    SetColumn(VizColumn),
    /// Re-fetch the dataset for the current column.
    Reload,
    Shutdown,
}

/// Handle to communicate with the dashboard service and query state.
#[derive(Clone)]
pub struct ServiceHandle {
    cmd_tx: mpsc::Sender<DashboardCommand>,
    shared: Arc<SharedState>,
}

impl ServiceHandle {
    /// Forward a map click.
    pub async fn click(&self, geometry_id: Option<String>) -> Result<(), String> {
        self.cmd_tx
            .send(DashboardCommand::Click { geometry_id })
            .await
            .map_err(|e| e.to_string())
    }

    /// Switch the visualization column.
    pub async fn set_column(&self, column: VizColumn) -> Result<(), String> {
        self.cmd_tx
            .send(DashboardCommand::SetColumn(column))
            .await
            .map_err(|e| e.to_string())
    }

    /// Re-fetch the dataset.
    pub async fn reload(&self) -> Result<(), String> {
        self.cmd_tx
            .send(DashboardCommand::Reload)
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn shutdown(&self) -> Result<(), String> {
        self.cmd_tx
            .send(DashboardCommand::Shutdown)
            .await
            .map_err(|e| e.to_string())
    }

    /// Get the current configuration.
    pub async fn config(&self) -> AppConfig {
        self.shared.config.read().await.clone()
    }

    /// Currently selected region.
    pub async fn selection(&self) -> Selection {
        self.shared.selection.read().await.clone()
    }

    /// Whether a dataset is loaded.
    pub async fn has_data(&self) -> bool {
        self.shared.fact_index.read().await.is_some()
    }

    /// Facts for the current selection, if loaded.
    pub async fn selected_facts(&self) -> Option<RegionFacts> {
        let selection = self.shared.selection.read().await.clone();
        let index = self.shared.fact_index.read().await;
        index.as_ref().and_then(|ix| selection.facts(ix)).cloned()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dashboard service
// ─────────────────────────────────────────────────────────────────────────────

pub struct DashboardService<S, P, D> {
    surface: Arc<S>,
    provider: Arc<P>,
    source: D,
    shared: Arc<SharedState>,
    cmd_rx: mpsc::Receiver<DashboardCommand>,
}

impl<S, P, D> DashboardService<S, P, D>
where
    S: PanelSurface + 'static,
    P: SummaryProvider + Send + Sync + 'static,
    D: DatasetSource + Send + Sync + 'static,
{
    /// Spawn the service. Performs the initial dataset load and aggregate
    /// render, then processes commands until `Shutdown`.
    pub fn spawn(
        surface: Arc<S>,
        provider: Arc<P>,
        source: D,
        config: AppConfig,
    ) -> (ServiceHandle, JoinHandle<()>) {
        let (cmd_tx, cmd_rx) = mpsc::channel(32);
        let shared = Arc::new(SharedState::new(config));

        let service = DashboardService {
            surface,
            provider,
            source,
            shared: Arc::clone(&shared),
            cmd_rx,
        };
        let task = tokio::spawn(service.run());

        (ServiceHandle { cmd_tx, shared }, task)
    }

    async fn run(mut self) {
        self.reload().await;

        while let Some(cmd) = self.cmd_rx.recv().await {
            match cmd {
                DashboardCommand::Click { geometry_id } => self.handle_click(geometry_id).await,
                DashboardCommand::SetColumn(column) => self.handle_set_column(column).await,
                DashboardCommand::Reload => self.reload().await,
                DashboardCommand::Shutdown => break,
            }
        }
        info!("dashboard service stopped");
    }

    /// Resolve the click through the region index and advance the selection
    /// machine. Unresolved geometry on the aggregate view changes nothing.
    async fn handle_click(&self, geometry_id: Option<String>) {
        let resolved = geometry_id.as_deref().and_then(regions::lookup);

        let next = {
            let selection = self.shared.selection.read().await;
            selection.apply_click(resolved)
        };

        let Some(next) = next else {
            debug!(?geometry_id, "click ignored");
            return;
        };

        *self.shared.selection.write().await = next;
        self.render_selection().await;
    }

    /// Visualization-mode change: discard the map, reload the dataset, reset
    /// the selection to the aggregate view.
    async fn handle_set_column(&self, column: VizColumn) {
        self.shared.config.write().await.viz_column = column;
        self.surface.clear_map();
        self.reload().await;
    }

    /// Fetch + index the dataset, redraw the map, render the aggregate view.
    /// A load failure is logged and leaves the previous panels in place.
    async fn reload(&self) {
        match dataset::load(&self.source).await {
            Ok(index) => {
                *self.shared.fact_index.write().await = Some(index);
                *self.shared.selection.write().await = Selection::Aggregate;

                let column = self.shared.config.read().await.viz_column;
                self.surface.draw_map(column, column.palette());
                self.render_selection().await;
            }
            Err(err) => {
                error!(error = %err, "dataset load failed");
            }
        }
    }

    /// The render sequence for the current selection: header, four fact
    /// panels, two non-blocking summary dispatches.
    async fn render_selection(&self) {
        let selection = self.shared.selection.read().await.clone();

        self.surface
            .set_header(&format!("{} ({})", selection.full_name(), selection.code()));
        self.surface.set_busy(true);

        let facts = {
            let index = self.shared.fact_index.read().await;
            index.as_ref().and_then(|ix| selection.facts(ix)).cloned()
        };

        match &facts {
            Some(facts) => {
                self.surface.set_panel(
                    Panel::ConsumptionRenewable,
                    &build_fact_sheet(Some(&facts.consumption.renewable.entries())),
                );
                self.surface.set_panel(
                    Panel::ConsumptionNonRenewable,
                    &build_fact_sheet(Some(&facts.consumption.non_renewable.entries())),
                );
                self.surface.set_panel(
                    Panel::ProductionRenewable,
                    &build_fact_sheet(Some(&facts.production.renewable.entries())),
                );
                self.surface.set_panel(
                    Panel::ProductionNonRenewable,
                    &build_fact_sheet(Some(&facts.production.non_renewable.entries())),
                );
            }
            None => {
                for panel in Panel::FACTS {
                    self.surface.set_panel(panel, FACT_ERROR);
                }
            }
        }

        match facts {
            Some(facts) => {
                for kind in SummaryKind::ALL {
                    self.dispatch_summary(kind, selection.code(), &facts);
                }
            }
            None => {
                // Nothing to summarize; fail the narrative panels the same
                // way a rejected request would.
                for kind in SummaryKind::ALL {
                    self.surface.set_panel(Panel::for_summary(kind), SUMMARY_ERROR);
                }
            }
        }

        self.surface.set_busy(false);
    }

    /// Write the loading indicator and fire one summary request. The
    /// completion is applied only if no newer dispatch for the same panel
    /// happened in the meantime.
    fn dispatch_summary(&self, kind: SummaryKind, region: &str, facts: &RegionFacts) {
        let generation = self.shared.generation(kind).fetch_add(1, Ordering::SeqCst) + 1;
        let panel = Panel::for_summary(kind);
        self.surface.set_panel(panel, LOADING);

        let request = summary::build_request(region, facts, kind);
        let surface = Arc::clone(&self.surface);
        let provider = Arc::clone(&self.provider);
        let shared = Arc::clone(&self.shared);

        tokio::spawn(async move {
            let content = match provider.fetch(&request).await {
                Ok(text) => text,
                Err(err) => {
                    debug!(error = %err, panel = panel.id(), "summary request failed");
                    SUMMARY_ERROR.to_string()
                }
            };

            if shared.generation(kind).load(Ordering::SeqCst) == generation {
                surface.set_panel(panel, &content);
            } else {
                debug!(panel = panel.id(), "discarding stale summary response");
            }
        });
    }
}
