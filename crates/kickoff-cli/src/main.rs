mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kickoff",
    about = "Project setup wizard — walk through the configuration pages, delegate to the AI, submit",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .kickoff/ or .git/)
    #[arg(long, global = true, env = "KICKOFF_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current page, progress, and control level
    Status,

    /// Print one section's current values
    Show { section: String },

    /// Shallow-merge a JSON object patch into one section
    Set { section: String, patch: String },

    /// Select or deselect one option in a multi-select field
    Toggle {
        section: String,
        field: String,
        value: String,

        /// Deselect instead of select
        #[arg(long)]
        off: bool,
    },

    /// Hand one field to the AI (or take it back with --off)
    Delegate {
        section: String,
        field: String,

        /// Return the field to manual control
        #[arg(long)]
        off: bool,
    },

    /// Select a control level (quick, guided, manual) and run the pre-fill cascade
    Level { level: String },

    /// Mark the current page complete and advance
    Next,

    /// Step back one page
    Prev,

    /// Skip the current page (advances without filling it in)
    Skip,

    /// Jump to a page
    Goto { page: u32 },

    /// Validate and send the completed configuration to the webhook
    Submit {
        /// Override the configured webhook URL
        #[arg(long)]
        url: Option<String>,
    },

    /// Discard all answers and start over
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Run the webhook sink server that archives submissions
    Sink {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "4150")]
        port: u16,

        /// Directory for archived submissions (default: <root>/submissions)
        #[arg(long)]
        archive_dir: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Sink { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command {
        Commands::Status => cmd::status::run(&root, cli.json),
        Commands::Show { section } => cmd::section::show(&root, &section),
        Commands::Set { section, patch } => cmd::section::set(&root, &section, &patch, cli.json),
        Commands::Toggle {
            section,
            field,
            value,
            off,
        } => cmd::toggle::value(&root, &section, &field, &value, off),
        Commands::Delegate {
            section,
            field,
            off,
        } => cmd::toggle::delegate(&root, &section, &field, off),
        Commands::Level { level } => cmd::level::run(&root, &level),
        Commands::Next => cmd::nav::next(&root),
        Commands::Prev => cmd::nav::prev(&root),
        Commands::Skip => cmd::nav::skip(&root),
        Commands::Goto { page } => cmd::nav::goto(&root, page),
        Commands::Submit { url } => cmd::submit::run(&root, url.as_deref(), cli.json),
        Commands::Reset { yes } => cmd::reset::run(&root, yes),
        Commands::Sink { port, archive_dir } => cmd::sink::run(&root, port, archive_dir),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
