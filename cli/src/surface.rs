//! Terminal rendition of the dashboard's output surface
//!
//! Panel writes arrive from the service task (and from spawned summary
//! completions) at any time, so each update prints as a self-contained
//! block. Watching a `Loading...` block get replaced by the response block
//! is the terminal equivalent of the panel swap.

use std::io::Write;

use tracing::debug;
use wattmap_core::types::{Palette, VizColumn};
use wattmap_core::{Panel, PanelSurface};

#[derive(Default)]
pub struct TerminalSurface;

impl TerminalSurface {
    fn print_block(&self, block: &str) {
        // Single write per block so concurrent completions don't interleave.
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{block}");
    }
}

impl PanelSurface for TerminalSurface {
    fn set_header(&self, text: &str) {
        self.print_block(&format!("\n═══ {text} ═══"));
    }

    fn set_busy(&self, busy: bool) {
        debug!(busy, "header busy state");
    }

    fn set_panel(&self, panel: Panel, content: &str) {
        self.print_block(&format!("[{}]\n{}", panel.id(), content.trim_end()));
    }

    fn draw_map(&self, column: VizColumn, palette: Palette) {
        self.print_block(&format!("(map) {} [{} scale]", column.label(), palette));
    }

    fn clear_map(&self) {
        self.print_block("(map cleared)");
    }
}
