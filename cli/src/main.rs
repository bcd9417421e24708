use clap::{Parser, Subcommand};
use std::io::Write;
use tracing_subscriber::EnvFilter;
use wattmap_cli::commands;
use wattmap_cli::readline;
use wattmap_cli::CliContext;

#[tokio::main]
async fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let ctx = CliContext::start();

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    ctx.stop().await;
    Ok(())
}

#[derive(Parser)]
#[command(version, about = "wattmap terminal dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a map click; omit --id for a background click
    Click {
        #[arg(short, long)]
        id: Option<String>,
    },
    /// Select a region by short code (e.g. CA)
    Select {
        #[arg(short, long)]
        code: String,
    },
    /// Switch the visualization column
    Mode {
        #[arg(short, long)]
        column: String,
    },
    /// Print the selected region's fact sheets
    Facts,
    /// Re-fetch the dataset
    Reload,
    Status,
    Config,
    Exit,
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "wattmap".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Click { id }) => commands::click(id.as_deref(), ctx).await,
        Some(Commands::Select { code }) => commands::select(code, ctx).await,
        Some(Commands::Mode { column }) => commands::set_mode(column, ctx).await,
        Some(Commands::Facts) => commands::show_facts(ctx).await,
        Some(Commands::Reload) => commands::reload(ctx).await,
        Some(Commands::Status) => commands::show_status(ctx).await,
        Some(Commands::Config) => commands::show_settings(ctx).await,
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
