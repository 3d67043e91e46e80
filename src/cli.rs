use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Search brand logos, pick one and download it
#[derive(Parser, Debug, Clone)]
#[command(name = "logo-search", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "LOGO_SEARCH_CONFIG", default_value = "logo-search.toml")]
    pub config: PathBuf,

    /// Lookup service origin
    #[arg(long, env = "LOGO_SEARCH_BASE_URL")]
    pub base_url: Option<String>,

    /// State file holding the widget snapshot
    #[arg(long, env = "LOGO_SEARCH_STATE")]
    pub state: Option<PathBuf>,

    /// Key prefix inside the state file
    #[arg(long, env = "LOGO_SEARCH_NAMESPACE")]
    pub namespace: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the query text and look up matching brands
    Type {
        /// Query text, sent as typed
        text: String,
    },
    /// Select a suggestion by its position in the list
    Select {
        index: usize,
    },
    /// Submit the form and print the submission
    Submit,
    /// Clear the query, suggestions and selection
    Reset,
    /// Download the selected logo
    Download {
        /// Directory to write the file into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Print the current widget state
    Show,
}
