use std::future::Future;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use kdvs_acquire::{config, AcquireConfig, AcquireError};
use kdvs_model::{RequestError, ShowRequest};

#[derive(Parser)]
#[command(name = "kdvs")]
#[command(about = "KDVS archive downloader")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Date to download (YYYY-MM-DD)
    #[arg(short, long)]
    date: String,

    /// Name of the show, matched case-insensitively against the start of schedule links (e.g., "Apartment 5")
    #[arg(short, long)]
    show: String,

    /// Directory to write the MP3 into
    #[arg(short = 'O', long, default_value = ".")]
    output_dir: PathBuf,

    /// Schedule page listing the station's shows
    #[arg(long, default_value = config::SCHEDULE_URL)]
    schedule_url: String,

    /// Host serving the archived MP3s
    #[arg(long, default_value = config::ARCHIVE_HOST)]
    archive_host: String,

    /// Port of the archive host
    #[arg(long, default_value_t = config::ARCHIVE_PORT)]
    archive_port: u16,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.utc);

    tokio::select! {
        result = run(cli) => match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                tracing::error!("{err:#}");
                ExitCode::from(exit_code(&err))
            }
        },
        () = interrupted(tokio::signal::ctrl_c()) => {
            // Interrupted by the user: leave quietly
            println!();
            ExitCode::SUCCESS
        }
    }
}

/// Resolves once the user interrupts. If the handler could not be installed
/// the run continues uninterruptible instead of exiting early.
async fn interrupted(signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(err) = signal.await {
        tracing::warn!("Could not listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
}

async fn run(cli: Cli) -> Result<()> {
    let request = ShowRequest::new(cli.show, cli.date)?;
    let config = AcquireConfig {
        schedule_url: cli.schedule_url,
        archive_host: cli.archive_host,
        archive_port: cli.archive_port,
        output_dir: cli.output_dir,
    };

    tracing::info!(show = %request.show, date = %request.date, "Looking up show");
    kdvs_acquire::acquire(&request, &config).await?;
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(err) = err.downcast_ref::<AcquireError>() {
        err.exit_code()
    } else if err.downcast_ref::<RequestError>().is_some() {
        2
    } else {
        1
    }
}

fn init_tracing(level: &LogLevel, utc: bool) {
    // Suppress noisy HTML-parsing crates at debug/trace
    let level = match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z".to_string();

    if utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::time::Duration;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_required_flags() {
        let cli = Cli::try_parse_from(["kdvs", "-d", "2020-01-01", "-s", "Apartment 5"]).unwrap();
        assert_eq!(cli.date, "2020-01-01");
        assert_eq!(cli.show, "Apartment 5");
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert_eq!(cli.schedule_url, config::SCHEDULE_URL);
        assert_eq!(cli.archive_port, 80);

        assert!(Cli::try_parse_from(["kdvs", "--date", "2020-01-01"]).is_err());
        assert!(Cli::try_parse_from(["kdvs", "--show", "Apartment 5"]).is_err());
    }

    #[test]
    fn test_exit_codes() {
        let not_found = anyhow::Error::from(AcquireError::ShowNotFound("x".into()));
        assert_eq!(exit_code(&not_found), 3);

        let empty = anyhow::Error::from(RequestError::EmptyShow);
        assert_eq!(exit_code(&empty), 2);

        assert_eq!(exit_code(&anyhow::anyhow!("something else")), 1);
    }

    #[tokio::test]
    async fn test_interrupt_resolves_on_signal() {
        let signal = async { Ok(()) };
        let waited = tokio::time::timeout(Duration::from_millis(100), interrupted(signal)).await;
        assert!(waited.is_ok());
    }

    #[tokio::test]
    async fn test_failed_signal_handler_is_not_an_interrupt() {
        let signal = async { Err(std::io::Error::other("no signal handler")) };
        let waited = tokio::time::timeout(Duration::from_millis(100), interrupted(signal)).await;
        assert!(waited.is_err());
    }
}
