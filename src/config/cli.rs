use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "midori")]
#[command(about = "Text front-end for the Midori Teehaus site backend")]
pub struct Cli {
    /// Backend base URL (overrides the config file and BACKEND_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Load the menu and print the visible items
    Menu {
        /// Category tab to select ("All" shows everything)
        #[arg(long)]
        category: Option<String>,
    },

    /// Send a message through the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long)]
        message: String,
    },

    /// Render the whole page
    Page {
        #[arg(long)]
        category: Option<String>,
    },
}
