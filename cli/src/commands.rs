use std::io::Write;

use wattmap_core::build_fact_sheet;
use wattmap_core::regions;
use wattmap_core::types::VizColumn;

use crate::CliContext;

/// Forward a map click (no id = background click).
pub async fn click(id: Option<&str>, ctx: &CliContext) {
    if let Err(e) = ctx.handle.click(id.map(str::to_string)).await {
        println!("click failed: {e}");
    }
}

/// Select a region by short code, routed through the same click path the
/// map uses.
pub async fn select(code: &str, ctx: &CliContext) {
    let code = code.to_uppercase();
    match regions::geometry_for(&code) {
        Some(geometry_id) => click(Some(geometry_id), ctx).await,
        None => println!("unknown region code '{code}'"),
    }
}

/// Switch the map's visualization column (triggers a dataset reload).
pub async fn set_mode(column: &str, ctx: &CliContext) {
    match column.parse::<VizColumn>() {
        Ok(column) => {
            if let Err(e) = ctx.handle.set_column(column).await {
                println!("mode change failed: {e}");
            }
        }
        Err(e) => {
            println!("{e}");
            println!("valid columns:");
            for col in VizColumn::ALL {
                println!("  {col}");
            }
        }
    }
}

/// Print the selected region's four fact sheets.
pub async fn show_facts(ctx: &CliContext) {
    let Some(facts) = ctx.handle.selected_facts().await else {
        println!("no facts for the current selection");
        return;
    };
    println!("consumption / renewable:");
    print!("{}", build_fact_sheet(Some(&facts.consumption.renewable.entries())));
    println!("consumption / non-renewable:");
    print!("{}", build_fact_sheet(Some(&facts.consumption.non_renewable.entries())));
    println!("production / renewable:");
    print!("{}", build_fact_sheet(Some(&facts.production.renewable.entries())));
    println!("production / non-renewable:");
    print!("{}", build_fact_sheet(Some(&facts.production.non_renewable.entries())));
}

pub async fn reload(ctx: &CliContext) {
    if let Err(e) = ctx.handle.reload().await {
        println!("reload failed: {e}");
    }
}

pub async fn show_status(ctx: &CliContext) {
    let selection = ctx.handle.selection().await;
    let config = ctx.handle.config().await;
    println!(
        "selected: {} ({})",
        selection.full_name(),
        selection.code()
    );
    println!("column:   {}", config.viz_column);
    println!(
        "dataset:  {}",
        if ctx.handle.has_data().await {
            "loaded"
        } else {
            "not loaded"
        }
    );
}

pub async fn show_settings(ctx: &CliContext) {
    let config = ctx.handle.config().await;
    println!("dataset_url:          {}", config.dataset_url);
    println!("summary_url:          {}", config.summary_url);
    println!("viz_column:           {}", config.viz_column);
    println!("request_timeout_secs: {}", config.request_timeout_secs);
}

pub fn exit() {
    writeln!(std::io::stdout(), "quitting...").expect("error exiting");
    std::io::stdout().flush().expect("error flushing stdout");
}
