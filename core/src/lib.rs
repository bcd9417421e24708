pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod regions;
pub mod selection;
pub mod service;
pub mod summary;

// Re-exports for convenience
pub use config::AppConfig;
pub use dataset::{DatasetSource, FactIndex, HttpDatasetSource, RawRecord, build_fact_index};
pub use error::{ConfigError, DatasetError, SummaryError};
pub use format::{FACT_ERROR, build_fact_sheet, format_decimal, title_case};
pub use selection::Selection;
pub use service::{
    DashboardCommand, DashboardService, Panel, PanelSurface, ServiceHandle, SharedState,
};
pub use summary::{LOADING, SUMMARY_ERROR, HttpSummaryClient, SummaryKind, SummaryProvider, build_request};
pub use wattmap_types as types;
