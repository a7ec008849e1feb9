use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use tryst_core::VERSION;

/// Tryst - share date plans as secret codes and friendly links
#[derive(Parser)]
#[command(name = "tryst")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the saved-selection file
    #[arg(short, long, global = true, env = "TRYST_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Toggle date categories and set the schedule slot
    Pick(PickArgs),

    /// Show the current result (saved state, or a path/query)
    Show(ShowArgs),

    /// Encrypt the saved selection into a passphrase-protected code
    Share(ShareArgs),

    /// Decrypt a secret code back into a selection
    Decode(DecodeArgs),

    /// Print the shareable link for the saved selection
    Link(LinkArgs),

    /// Resolve a friendly path or query string into a selection
    Resolve(ResolveArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `pick` command
#[derive(Args)]
pub struct PickArgs {
    /// Categories to toggle (hiking, movie, coffee, dinner)
    #[arg(value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Set the schedule slot (display text or slug, e.g. "friday-7pm")
    #[arg(short = 'w', long, value_name = "SLOT")]
    pub schedule: Option<String>,

    /// Clear all saved selections
    #[arg(long)]
    pub reset: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Show the selection encoded in a friendly path instead
    #[arg(long, value_name = "PATH", conflicts_with = "query")]
    pub path: Option<String>,

    /// Apply results query parameters (they beat saved state)
    #[arg(long, value_name = "QUERY")]
    pub query: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `share` command
#[derive(Args)]
pub struct ShareArgs {
    /// Print only the secret code
    #[arg(long)]
    pub code_only: bool,
}

/// Arguments for the `decode` command
#[derive(Args)]
pub struct DecodeArgs {
    /// The secret code to decrypt
    #[arg(value_name = "CODE")]
    pub code: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `link` command
#[derive(Args)]
pub struct LinkArgs {
    /// Print the query-string form instead of the friendly path
    #[arg(long)]
    pub query: bool,
}

/// Arguments for the `resolve` command
#[derive(Args)]
pub struct ResolveArgs {
    /// A friendly path (/results_…, /results-…, /r/…) or query string
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}
