//! `grannymail`: command-line tool for the GrannyMail website.
//!
//! Renders the same pages the server hosts, without a server: export the
//! whole site to a directory for static hosting, print a single page, or
//! list the routes.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use grannymail_pages::layout::DEFAULT_SITE_URL;
use grannymail_pages::{Route, SiteMeta, export};

// ── ANSI color helpers ───────────────────────────────────────────────

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";

// ── CLI structure ────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "grannymail",
    version,
    about = "GrannyMail site CLI: export the website or render single pages",
    long_about = None,
    after_help = format!(
        "{DIM}Environment variables:{RESET}\n  \
         GRANNYMAIL_SITE_URL   Public origin for canonical links (default: {DEFAULT_SITE_URL})\n\n\
         {DIM}Examples:{RESET}\n  \
         grannymail export --out dist\n  \
         grannymail render /privacy-policy > policy.html\n  \
         grannymail routes"
    ),
)]
struct Cli {
    /// Public origin used for canonical links.
    #[arg(long, global = true, env = "GRANNYMAIL_SITE_URL", default_value = DEFAULT_SITE_URL)]
    site_url: String,

    /// Log each written file to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write every page as static HTML files.
    Export {
        /// Output directory (created if missing).
        #[arg(long, short, default_value = "dist")]
        out: PathBuf,
    },
    /// Print one rendered page to stdout.
    Render {
        /// Request path of the page, e.g. `/` or `/privacy-policy`.
        path: String,
    },
    /// List the routes the site serves.
    Routes,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
            .with_writer(std::io::stderr)
            .without_time()
            .init();
    }

    let site = SiteMeta::new(&cli.site_url);

    match run(&site, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{RED}{BOLD}✗ Error:{RESET} {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(site: &SiteMeta, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Export { out } => cmd_export(site, &out),
        Commands::Render { path } => cmd_render(site, &path),
        Commands::Routes => {
            cmd_routes();
            Ok(())
        }
    }
}

fn cmd_export(site: &SiteMeta, out: &Path) -> Result<()> {
    let report = export::export_site(out, site)
        .with_context(|| format!("failed to export site to {}", out.display()))?;

    for file in &report.files {
        println!("  {GREEN}✓{RESET} {} {DIM}({} bytes){RESET}", file.path.display(), file.bytes);
    }
    println!(
        "{BOLD}Exported {} files ({} bytes) to {}{RESET}",
        report.files.len(),
        report.total_bytes(),
        out.display()
    );
    Ok(())
}

fn cmd_render(site: &SiteMeta, path: &str) -> Result<()> {
    let route = Route::from_path(path)?;
    print!("{}", route.render(site));
    Ok(())
}

fn cmd_routes() {
    for route in Route::ALL {
        println!("{:<18} {}", route.path(), route.title());
    }
}
