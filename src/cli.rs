//! CLI argument parsing for the tutorial page generator.
//!
//! The CLI is intentionally thin: it selects content and output locations
//! without embedding rendering policy, so the same core logic can be reused
//! elsewhere.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint for the page generator.
#[derive(Parser, Debug)]
#[command(
    name = "tileguide",
    version,
    about = "Deterministic tutorial page generator for launchpad tile setup",
    after_help = "Commands:\n  render [--content <json>] [--out <path>]  Render the guide to HTML\n  check [--content <json>] [--assets <dir>]  Validate guide invariants and assets\n\nExamples:\n  tileguide render --out site/index.html\n  tileguide render --out site/index.html --meta site/meta.json\n  tileguide check --assets site\n  tileguide check --content custom-guide.json --json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Render(RenderArgs),
    Check(CheckArgs),
}

/// Render command inputs.
#[derive(Parser, Debug)]
#[command(about = "Render the guide to a single HTML document")]
pub struct RenderArgs {
    /// Guide content JSON (defaults to the built-in guide)
    #[arg(long, value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Output path for the rendered document (stdout when omitted)
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Output path for render metadata JSON
    #[arg(long, value_name = "PATH", requires = "out")]
    pub meta: Option<PathBuf>,
}

/// Check command inputs.
#[derive(Parser, Debug)]
#[command(about = "Validate guide invariants and screenshot assets")]
pub struct CheckArgs {
    /// Guide content JSON (defaults to the built-in guide)
    #[arg(long, value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Directory containing the screenshot assets
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}
