//! Argument parsing and command dispatch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use adminboard_assets::{DEFAULT_VENDOR_DIR, copy_vendored, list_vendored};

/// Default logging target when `RUST_LOG` is not provided.
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser)]
#[command(
    name = "adminboard",
    about = "Vendored stylesheet management for Adminboard dashboards"
)]
struct Cli {
    /// Directory holding vendored Bootswatch themes.
    #[arg(
        long,
        global = true,
        env = "ADMINBOARD_VENDOR_DIR",
        default_value = DEFAULT_VENDOR_DIR
    )]
    vendor_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List vendored Bootswatch themes.
    List,
    /// Copy vendored themes into a static directory.
    Serve {
        /// Destination directory for the exported themes.
        dest: PathBuf,
        /// Restrict the export to the named themes (repeatable).
        #[arg(long = "theme")]
        themes: Vec<String>,
    },
}

/// Parse arguments and run the selected command.
///
/// # Errors
///
/// Returns an error when a vendor export fails; listing is best-effort and
/// never fails.
pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Command::List => {
            let themes = list_vendored(&cli.vendor_dir);
            print!("{}", render_list(&themes));
        }
        Command::Serve { dest, themes } => {
            let selection = if themes.is_empty() {
                None
            } else {
                Some(themes.as_slice())
            };
            let report = copy_vendored(&cli.vendor_dir, &dest, selection)
                .with_context(|| format!("exporting themes to {}", dest.display()))?;
            tracing::debug!(lock = %report.lock_path.display(), "vendor lock written");
            print!("{}", render_serve(report.count(), &dest));
        }
    }
    Ok(())
}

fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

fn render_list(themes: &[String]) -> String {
    if themes.is_empty() {
        return "No vendored Bootswatch themes found.\n".to_string();
    }
    let mut out = String::from("Vendored Bootswatch themes:\n");
    for theme in themes {
        out.push_str("- ");
        out.push_str(theme);
        out.push('\n');
    }
    out
}

fn render_serve(count: usize, dest: &Path) -> String {
    if count == 0 {
        return "No vendored themes copied.\n".to_string();
    }
    format!("Copied {count} vendored theme files to {}\n", dest.display())
}
