use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("invalid show name pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid URL '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("no show matching '{0}' found on the schedule page")]
    ShowNotFound(String),

    #[error("show link '{0}' has no show id in its path")]
    MissingShowId(String),

    #[error("{url} returned HTTP {status}. Is your date correct?")]
    BadStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("could not build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not resolve archive host {host}: {detail}")]
    Dns { host: String, detail: String },

    #[error("could not write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AcquireError {
    /// Process exit code for this failure, grouped by what the operator can do about it.
    ///
    /// 2: bad input, 3: show lookup failed, 4: archive refused the date,
    /// 5: network, 6: local filesystem.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidPattern { .. } | Self::InvalidUrl { .. } => 2,
            Self::ShowNotFound(_) | Self::MissingShowId(_) => 3,
            Self::BadStatus { .. } => 4,
            Self::Client(_) | Self::Http { .. } | Self::Dns { .. } => 5,
            Self::Io { .. } => 6,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }

    pub(crate) fn http(url: &str) -> impl FnOnce(reqwest::Error) -> Self {
        let url = url.to_string();
        move |source| Self::Http { url, source }
    }
}
