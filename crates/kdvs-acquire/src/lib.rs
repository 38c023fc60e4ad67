use kdvs_model::naming::{build_download_url, title_case};
use kdvs_model::ShowRequest;
use std::path::PathBuf;

pub mod archive;
pub mod config;
pub mod download;
pub mod error;
pub mod normalize;
pub mod schedule;

pub use config::AcquireConfig;
pub use error::AcquireError;

/// HTTP client used for both the schedule page and the archive.
pub fn build_client() -> Result<reqwest::Client, AcquireError> {
    reqwest::Client::builder()
        .user_agent(config::USER_AGENT)
        .build()
        .map_err(AcquireError::Client)
}

/// Download one archived show to disk.
///
/// Finds the show on the schedule page, derives its archive id, resolves the
/// archive host and streams the MP3 into `config.output_dir`. Returns the path
/// of the written file.
pub async fn acquire(request: &ShowRequest, config: &AcquireConfig) -> Result<PathBuf, AcquireError> {
    let client = build_client()?;
    acquire_with_client(&client, request, config).await
}

/// Like [`acquire`], with a caller-supplied client.
pub async fn acquire_with_client(
    client: &reqwest::Client,
    request: &ShowRequest,
    config: &AcquireConfig,
) -> Result<PathBuf, AcquireError> {
    if request.parsed_date().is_none() {
        tracing::warn!(date = %request.date, "Date is not YYYY-MM-DD, the archive will likely not have it");
    }
    // Fail on a bad pattern before touching the network
    schedule::show_pattern(&request.show)?;

    tracing::info!(url = %config.schedule_url, "Fetching schedule page");
    let html = schedule::fetch_page(client, &config.schedule_url).await?;
    tracing::info!(bytes = html.len(), "Received HTML");

    let anchor = schedule::find_show_link(&html, &request.show)?
        .ok_or_else(|| AcquireError::ShowNotFound(request.show.clone()))?;
    tracing::debug!(text = %anchor.text, href = %anchor.href, "Matched show link");

    let show_id = schedule::show_id(&config.schedule_url, &anchor.href)?;
    let addr = archive::resolve_archive_host(&config.archive_host, config.archive_port).await?;
    let url = build_download_url(&request.date, &show_id, &archive::authority(addr));

    tracing::info!(
        "Grabbing: {} (#{}): {}",
        title_case(&request.show),
        show_id,
        url
    );

    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .map_err(AcquireError::io(&config.output_dir))?;
    let path = config.output_dir.join(request.output_filename());

    let bytes = download::fetch_and_save(client, &url, &path).await?;
    tracing::info!(path = %path.display(), bytes, "Saved show");

    Ok(path)
}
