use clap::Parser;
use clap_complete::Shell;

use tinychat_types::DEFAULT_API_ENDPOINT;

/// CLI arguments for tinychat
#[derive(Parser)]
#[command(name = "tinychat")]
#[command(about = "Tiny Chat - terminal client for a locally hosted chat model server")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Chat endpoint of the model server
    #[arg(long, value_name = "URL", env = "TINYCHAT_API_URL", default_value = DEFAULT_API_ENDPOINT)]
    pub api_url: String,

    /// Reply length budget in tokens (50-500); unparsable values fall back
    /// to the default of 150
    #[arg(long, value_name = "N")]
    pub max_length: Option<String>,

    /// Sampling temperature (0.1-1.0); unparsable values fall back to the
    /// default of 0.7
    #[arg(long, value_name = "T")]
    pub temperature: Option<String>,

    /// Disable conversation logging to the logs/ directory
    #[arg(long)]
    pub no_log: bool,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}
