use std::path::PathBuf;

/// Station schedule grid listing every show with a link to its archive page.
pub const SCHEDULE_URL: &str = "http://kdvs.org/programming/schedule-grid/";

/// Host serving the archived MP3s.
pub const ARCHIVE_HOST: &str = "archives.kdvs.org";

pub const ARCHIVE_PORT: u16 = 80;

pub const USER_AGENT: &str = concat!("kdvs/", env!("CARGO_PKG_VERSION"), " (archive downloader)");

/// Where to look for shows and where to put the download.
#[derive(Debug, Clone)]
pub struct AcquireConfig {
    pub schedule_url: String,
    pub archive_host: String,
    pub archive_port: u16,
    /// Directory the MP3 is written into; created if missing.
    pub output_dir: PathBuf,
}

impl Default for AcquireConfig {
    fn default() -> Self {
        Self {
            schedule_url: SCHEDULE_URL.to_string(),
            archive_host: ARCHIVE_HOST.to_string(),
            archive_port: ARCHIVE_PORT,
            output_dir: PathBuf::from("."),
        }
    }
}
