use crate::error::AcquireError;
use reqwest::StatusCode;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Stream `url` to `out_path`, returning the number of bytes written.
///
/// Only a 200 response is saved; anything else is reported as
/// [`AcquireError::BadStatus`] before the output file is touched. An existing
/// file at `out_path` is overwritten.
pub async fn fetch_and_save(
    client: &reqwest::Client,
    url: &str,
    out_path: &Path,
) -> Result<u64, AcquireError> {
    let mut response = client
        .get(url)
        .send()
        .await
        .map_err(AcquireError::http(url))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(AcquireError::BadStatus {
            url: url.to_string(),
            status,
        });
    }
    tracing::debug!(
        url = %url,
        content_length = ?response.content_length(),
        "Archive responded"
    );

    let mut file = File::create(out_path)
        .await
        .map_err(AcquireError::io(out_path))?;

    let mut written: u64 = 0;
    while let Some(chunk) = response.chunk().await.map_err(AcquireError::http(url))? {
        file.write_all(&chunk)
            .await
            .map_err(AcquireError::io(out_path))?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(AcquireError::io(out_path))?;

    Ok(written)
}
