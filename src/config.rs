//! Configuration for the docfind web front-end.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

/// Default search backend base URL.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8091/";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid backend URL {url:?}: {source}")]
    BackendUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the search backend (always ends with a slash).
    pub backend_url: Url,
    /// Directory served under /images (thumbnails).
    pub images_dir: PathBuf,
    /// Directory served under /files (downloadable originals).
    pub files_dir: PathBuf,
    /// Backend request timeout in seconds.
    pub request_timeout: u64,
    /// User agent for backend requests.
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: Url::parse(DEFAULT_BACKEND_URL).expect("default backend URL is valid"),
            images_dir: PathBuf::from("static/images"),
            files_dir: PathBuf::from("static/files"),
            request_timeout: 30,
            user_agent: format!("docfind/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Settings {
    /// Set the backend base URL, normalizing a missing trailing slash so
    /// that endpoint paths join under it rather than replacing the last
    /// path segment.
    pub fn set_backend_url(&mut self, raw: &str) -> Result<(), ConfigError> {
        let normalized = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{}/", raw)
        };
        self.backend_url = Url::parse(&normalized).map_err(|source| ConfigError::BackendUrl {
            url: raw.to_string(),
            source,
        })?;
        Ok(())
    }
}

/// Configuration file structure. Every field is optional; unset fields keep
/// their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Search backend base URL.
    #[serde(default)]
    pub backend_url: Option<String>,
    /// Thumbnail directory.
    #[serde(default)]
    pub images_dir: Option<String>,
    /// Download directory.
    #[serde(default)]
    pub files_dir: Option<String>,
    /// Backend request timeout in seconds.
    #[serde(default)]
    pub request_timeout: Option<u64>,
    /// User agent string for backend requests.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// With an explicit path, a missing or malformed file is an error. With
    /// no path, `docfind.toml` in the working directory is used when it
    /// exists and defaults apply otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from("docfind.toml"), false),
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings) -> Result<(), ConfigError> {
        if let Some(ref backend_url) = self.backend_url {
            settings.set_backend_url(backend_url)?;
        }
        if let Some(ref images_dir) = self.images_dir {
            settings.images_dir = PathBuf::from(images_dir);
        }
        if let Some(ref files_dir) = self.files_dir {
            settings.files_dir = PathBuf::from(files_dir);
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = user_agent.clone();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_gets_trailing_slash() {
        let mut settings = Settings::default();
        settings.set_backend_url("http://search.internal:8091").unwrap();
        assert_eq!(settings.backend_url.as_str(), "http://search.internal:8091/");
    }

    #[test]
    fn invalid_backend_url_is_rejected() {
        let mut settings = Settings::default();
        assert!(settings.set_backend_url("not a url").is_err());
    }

    #[test]
    fn config_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docfind.toml");
        fs::write(
            &path,
            "backend_url = \"http://fts:9000\"\nrequest_timeout = 5\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        let mut settings = Settings::default();
        config.apply_to_settings(&mut settings).unwrap();

        assert_eq!(settings.backend_url.as_str(), "http://fts:9000/");
        assert_eq!(settings.request_timeout, 5);
        assert_eq!(settings.images_dir, PathBuf::from("static/images"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        assert!(Config::load(Some(Path::new("/nonexistent/docfind.toml"))).is_err());
    }
}
