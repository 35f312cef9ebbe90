use clap::{Parser, Subcommand};

/// `embedlink` - classify share links and derive embeddable URLs.
#[derive(Parser, Debug)]
#[command(name = "embedlink")]
#[command(version = "0.1.0")]
#[command(about = "Classify Google Drive and media share links.", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a URL (exit code 1 when the link is rejected)
    Classify {
        /// URL to classify
        url: String,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the best-effort embed URL for a link
    Embed {
        /// URL to transform
        url: String,
    },

    /// Check whether a Drive link looks publicly shared (advisory)
    Access {
        /// URL to inspect
        url: String,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Find and classify every URL in the given text (stdin if omitted)
    Scan {
        /// Text to scan; read from stdin when absent
        text: Option<String>,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}
