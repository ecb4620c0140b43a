use anyhow::{Context, Result};
use clap::Parser;
use d2l_archiver::config::Config;
use d2l_archiver::{archive, crawl, download, PortalClient};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// d2l-archiver - download every file attachment from a Brightspace (D2L)
/// course into a single zip archive
#[derive(Parser, Debug)]
#[command(name = "d2l-archiver")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Download all file attachments of a Brightspace course into one zip archive", long_about = None)]
struct Cli {
    /// Course identifier, as shown in the course home URL
    /// (falls back to D2L_COURSE_ID)
    #[arg(long)]
    course_id: Option<u64>,

    /// Session cookie captured from an authenticated browser session
    /// (falls back to D2L_COOKIE)
    #[arg(long)]
    cookie: Option<String>,

    /// Portal base URL (falls back to D2L_PORTAL_URL)
    #[arg(long)]
    portal: Option<String>,

    /// Enable verbose logging (can be used multiple times: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("d2l_archiver={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::resolve(cli.course_id, cli.cookie, cli.portal)?;
    let portal = PortalClient::new(&config)?;

    let records = crawl::enumerate_topics(&portal).await;
    if records.is_empty() {
        info!("no topics found");
        return Ok(());
    }
    info!("found {} topics, attempting downloads", records.len());

    // Staging lives through download and archival, removed on drop either way
    let staging =
        tempfile::tempdir().context("failed to create staging directory")?;
    let report =
        download::materialize_all(&portal, &records, staging.path()).await;
    info!(
        "downloaded {} files, skipped {}",
        report.downloaded_count(),
        report.skipped_count()
    );

    let files = report.into_downloaded();
    if files.is_empty() {
        warn!("no files were downloaded");
        return Ok(());
    }

    let title = match portal.course_title().await {
        Ok(title) => Some(title),
        Err(err) => {
            warn!(error = %err, "failed to fetch course title");
            None
        }
    };

    let name = archive::archive_name(title.as_deref(), config.course_id);
    let dest = std::env::current_dir()?.join(&name);
    archive::write_archive(&files, &dest)
        .with_context(|| format!("failed to write archive {}", dest.display()))?;

    info!("created archive {}", dest.display());
    Ok(())
}
