//! Where word lists and translation tables come from.
//!
//! Assets are addressed by a relative path (`words/words.json`). A
//! [`LocalSource`] reads them from the bundled assets directory; a
//! [`RemoteSource`] fetches them from a base URL such as a raw GitHub
//! checkout.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

use crate::config::LexicardConfig;
use crate::error::LoadError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Build the URL for an asset.
///
/// Absolute `http(s)://` URLs pass through. With a remote base the path is
/// joined onto it with exactly one slash; otherwise the path is made
/// root-relative.
pub fn data_url(remote_base: Option<&str>, relative: &str) -> String {
    if is_absolute_url(relative) {
        return relative.to_string();
    }

    match remote_base.filter(|b| !b.is_empty()) {
        Some(base) => {
            let path = relative.strip_prefix('/').unwrap_or(relative);
            let base = base.strip_suffix('/').unwrap_or(base);
            format!("{base}/{path}")
        }
        None if relative.starts_with('/') => relative.to_string(),
        None => format!("/{relative}"),
    }
}

/// Drop a leading UTF-8 byte-order mark.
pub(crate) fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

fn is_absolute_url(path: &str) -> bool {
    let lower = path.get(..8).unwrap_or(path).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// A store of JSON assets.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Short name for logs (e.g. "local").
    fn name(&self) -> &str;

    /// Fetch and parse one asset.
    async fn fetch_json(&self, relative: &str) -> Result<Value, LoadError>;
}

/// Assets on disk under a root directory.
#[derive(Debug, Clone)]
pub struct LocalSource {
    root: PathBuf,
}

impl LocalSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative.trim_start_matches('/'))
    }
}

#[async_trait]
impl DataSource for LocalSource {
    fn name(&self) -> &str {
        "local"
    }

    #[instrument(skip(self), fields(source = "local"))]
    async fn fetch_json(&self, relative: &str) -> Result<Value, LoadError> {
        let path = self.resolve(relative);
        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound(path.display().to_string())
            } else {
                LoadError::Io {
                    path: path.display().to_string(),
                    source: e,
                }
            }
        })?;

        serde_json::from_str(strip_bom(&content)).map_err(|e| LoadError::Parse {
            location: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Assets served over HTTP from a base URL.
pub struct RemoteSource {
    base_url: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl RemoteSource {
    pub fn new(base_url: &str) -> Result<Self, LoadError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| LoadError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.to_string(),
            client,
            timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl DataSource for RemoteSource {
    fn name(&self) -> &str {
        "remote"
    }

    #[instrument(skip(self), fields(source = "remote"))]
    async fn fetch_json(&self, relative: &str) -> Result<Value, LoadError> {
        let url = data_url(Some(self.base_url.as_str()), relative);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                LoadError::Timeout(self.timeout_secs)
            } else {
                LoadError::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        if status == 404 {
            return Err(LoadError::NotFound(url));
        }
        if status >= 400 {
            return Err(LoadError::Http { status, url });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        serde_json::from_str(strip_bom(&body)).map_err(|e| LoadError::Parse {
            location: url,
            message: e.to_string(),
        })
    }
}

/// Pick the source the configuration asks for.
pub fn source_from_config(config: &LexicardConfig) -> Result<Box<dyn DataSource>, LoadError> {
    match config.remote_base.as_deref().filter(|b| !b.is_empty()) {
        Some(base) => {
            tracing::info!(base, "using remote data source");
            Ok(Box::new(RemoteSource::new(base)?))
        }
        None => {
            tracing::info!(root = %config.assets_dir.display(), "using local data source");
            Ok(Box::new(LocalSource::new(config.assets_dir.clone())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_passes_absolute_urls() {
        assert_eq!(
            data_url(Some("https://cdn.test"), "HTTPS://other.test/a.json"),
            "HTTPS://other.test/a.json"
        );
        assert_eq!(data_url(None, "http://x.test/a.json"), "http://x.test/a.json");
    }

    #[test]
    fn data_url_joins_remote_base() {
        assert_eq!(
            data_url(Some("https://cdn.test/data/"), "/words/words.json"),
            "https://cdn.test/data/words/words.json"
        );
        assert_eq!(
            data_url(Some("https://cdn.test/data"), "words/words.json"),
            "https://cdn.test/data/words/words.json"
        );
    }

    #[test]
    fn data_url_without_base_is_root_relative() {
        assert_eq!(data_url(None, "words/words.json"), "/words/words.json");
        assert_eq!(data_url(None, "/words/words.json"), "/words/words.json");
        assert_eq!(data_url(Some(""), "words.json"), "/words.json");
    }

    #[test]
    fn data_url_short_paths() {
        assert_eq!(data_url(None, "a"), "/a");
        assert_eq!(data_url(None, "дом.json"), "/дом.json");
    }

    #[tokio::test]
    async fn local_source_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("words")).unwrap();
        std::fs::write(dir.path().join("words/a.json"), r#"["кот | cat"]"#).unwrap();

        let source = LocalSource::new(dir.path());
        let value = source.fetch_json("/words/a.json").await.unwrap();
        assert_eq!(value, serde_json::json!(["кот | cat"]));
    }

    #[tokio::test]
    async fn local_source_skips_byte_order_mark() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), "\u{feff}{\"кот\": \"cat\"}").unwrap();

        let source = LocalSource::new(dir.path());
        let value = source.fetch_json("a.json").await.unwrap();
        assert_eq!(value, serde_json::json!({"кот": "cat"}));
    }

    #[tokio::test]
    async fn local_source_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{").unwrap();
        let source = LocalSource::new(dir.path());

        assert!(matches!(
            source.fetch_json("missing.json").await,
            Err(LoadError::NotFound(_))
        ));
        assert!(matches!(
            source.fetch_json("bad.json").await,
            Err(LoadError::Parse { .. })
        ));
    }

    mod remote {
        use super::*;
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        #[tokio::test]
        async fn fetches_from_base() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/data/words/words.json"))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(serde_json::json!({"кот": "cat"})),
                )
                .mount(&server)
                .await;

            let source = RemoteSource::new(&format!("{}/data/", server.uri())).unwrap();
            let value = source.fetch_json("/words/words.json").await.unwrap();
            assert_eq!(value["кот"], "cat");
        }

        #[tokio::test]
        async fn maps_status_codes() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/broken.json"))
                .respond_with(ResponseTemplate::new(500))
                .mount(&server)
                .await;

            let source = RemoteSource::new(&server.uri()).unwrap();
            assert!(matches!(
                source.fetch_json("missing.json").await,
                Err(LoadError::NotFound(_))
            ));
            assert!(matches!(
                source.fetch_json("broken.json").await,
                Err(LoadError::Http { status: 500, .. })
            ));
        }

        #[tokio::test]
        async fn skips_byte_order_mark() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/words.json"))
                .respond_with(ResponseTemplate::new(200).set_body_string("\u{feff}[\"кот | cat\"]"))
                .mount(&server)
                .await;

            let source = RemoteSource::new(&server.uri()).unwrap();
            let value = source.fetch_json("words.json").await.unwrap();
            assert_eq!(value, serde_json::json!(["кот | cat"]));
        }

        #[tokio::test]
        async fn invalid_body_is_parse_error() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/words.json"))
                .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
                .mount(&server)
                .await;

            let source = RemoteSource::new(&server.uri()).unwrap();
            assert!(matches!(
                source.fetch_json("words.json").await,
                Err(LoadError::Parse { .. })
            ));
        }
    }

    #[test]
    fn config_selects_source() {
        let mut config = LexicardConfig::default();
        assert_eq!(source_from_config(&config).unwrap().name(), "local");

        config.remote_base = Some("https://cdn.test".into());
        assert_eq!(source_from_config(&config).unwrap().name(), "remote");

        config.remote_base = Some(String::new());
        assert_eq!(source_from_config(&config).unwrap().name(), "local");
    }
}
