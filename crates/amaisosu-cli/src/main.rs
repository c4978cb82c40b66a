use std::io::{self, IsTerminal};
use std::path::PathBuf;

use amaisosu_backup::{Backup, InstallLayout};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod completion;
mod render;

use completion::write_completions_script;
use render::{
    format_backup_list_lines, format_backup_report_lines, format_manifest_lines,
    format_plan_lines, resolve_output_style,
};

#[derive(Parser, Debug)]
#[command(name = "amaisosu")]
#[command(
    about = "Move an existing OpenSauce/HAC2 installation into a backup directory",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Back up OpenSauce and HAC2 files found in the installation directory.
    Backup {
        /// Installation directory. Defaults to the current directory.
        path: Option<PathBuf>,
        /// Show what would be moved without touching anything.
        #[arg(long)]
        dry_run: bool,
        #[arg(long)]
        json: bool,
    },
    /// List backup directories created by earlier runs.
    List { path: Option<PathBuf> },
    /// Print the entries that get backed up.
    Manifest,
    Completions { shell: Shell },
}

fn main() -> Result<()> {
    init_tracing();
    run_cli(Cli::parse())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_cli(cli: Cli) -> Result<()> {
    let style = resolve_output_style(io::stdout().is_terminal());

    match cli.command {
        Commands::Backup {
            path,
            dry_run,
            json,
        } => {
            let root = resolve_install_root(path)?;
            debug!(root = %root.display(), dry_run, "resolved installation root");
            let backup = Backup::new(&root);

            if dry_run {
                let plan = backup.plan();
                if json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&plan)
                            .context("failed to serialize backup plan")?
                    );
                } else {
                    print_lines(&format_plan_lines(&root, &plan, style));
                }
                return Ok(());
            }

            let report = backup
                .commit_with_report()
                .with_context(|| format!("backup of {} failed", root.display()))?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report)
                        .context("failed to serialize backup report")?
                );
            } else {
                print_lines(&format_backup_report_lines(&report, style));
            }
        }
        Commands::List { path } => {
            let root = resolve_install_root(path)?;
            let dirs = InstallLayout::new(&root).existing_backup_dirs()?;
            print_lines(&format_backup_list_lines(&dirs));
        }
        Commands::Manifest => {
            print_lines(&format_manifest_lines());
        }
        Commands::Completions { shell } => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_completions_script(shell, &mut handle)?;
        }
    }

    Ok(())
}

fn resolve_install_root(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => std::env::current_dir().context("failed to resolve current directory"),
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
