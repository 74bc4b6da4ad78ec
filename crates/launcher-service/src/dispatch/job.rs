//! Composition of the remote batch request.

use reqwest::Url;

use launcher_core::error::{AppError, ErrorKind};
use launcher_core::result::AppResult;
use launcher_core::types::{Language, Settings};

/// A fully addressed `POST /batch` request for the subtitle server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteJob {
    /// Complete request URL including the query string.
    pub url: Url,
    /// Directory as the remote server sees it.
    pub directory: String,
    /// Language forced on the generated subtitles.
    pub language: Language,
}

impl RemoteJob {
    /// Builds the request for `rel_path` using the stored server address.
    ///
    /// Fails with `Conflict` until both host and port are configured.
    pub fn new(settings: &Settings, rel_path: &str, container_prefix: &str) -> AppResult<Self> {
        if !settings.is_configured() {
            return Err(AppError::conflict("Configure server settings first"));
        }

        let directory = container_directory(container_prefix, rel_path);
        let base = format!(
            "http://{}:{}/batch",
            settings.server_host, settings.server_port
        );
        let url = Url::parse_with_params(
            &base,
            &[
                ("directory", directory.as_str()),
                ("forceLanguage", settings.default_language.code()),
            ],
        )
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Validation,
                format!("Invalid subtitle server address: {base}"),
                e,
            )
        })?;

        Ok(Self {
            url,
            directory,
            language: settings.default_language,
        })
    }
}

/// `{prefix}/{rel_path}` without trailing slashes.
pub fn container_directory(prefix: &str, rel_path: &str) -> String {
    let joined = format!("{}/{}", prefix.trim_end_matches('/'), rel_path);
    joined.trim_end_matches('/').to_string()
}
