pub mod commands;
pub mod context;
pub mod repl;
pub mod surface;

pub use context::CliContext;
pub use repl::readline;
pub use surface::TerminalSurface;
