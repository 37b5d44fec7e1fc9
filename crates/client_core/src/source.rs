//! Where the site documents come from: an HTTP origin or a local directory.

use std::{fmt, path::PathBuf};

use async_trait::async_trait;
use reqwest::Client;
use shared::{LoadError, LoadErrorKind, Resource};
use url::Url;

#[async_trait]
pub trait ResourceSource: Send + Sync {
    /// Returns the raw body of `resource`.
    async fn fetch(&self, resource: Resource) -> Result<String, LoadError>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}

pub struct HttpSource {
    http: Client,
    base_url: Url,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        let mut base_url = Url::parse(base_url)?;
        // Url::join drops the last path segment unless it ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    pub fn resource_url(&self, resource: Resource) -> Result<Url, url::ParseError> {
        self.base_url.join(resource.relative_path())
    }
}

#[async_trait]
impl ResourceSource for HttpSource {
    async fn fetch(&self, resource: Resource) -> Result<String, LoadError> {
        let url = self
            .resource_url(resource)
            .map_err(|err| transport_error(resource, err))?;

        let res = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|err| transport_error(resource, err))?;

        let status = res.status();
        if !status.is_success() {
            return Err(LoadError::new(
                resource,
                LoadErrorKind::Status,
                format!("{status} from {url}"),
            ));
        }

        res.text()
            .await
            .map_err(|err| transport_error(resource, err))
    }

    fn describe(&self) -> String {
        self.base_url.to_string()
    }
}

fn transport_error(resource: Resource, err: impl fmt::Display) -> LoadError {
    LoadError::new(resource, LoadErrorKind::Transport, err.to_string())
}

pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ResourceSource for DirSource {
    async fn fetch(&self, resource: Resource) -> Result<String, LoadError> {
        let path = self.root.join(resource.relative_path());
        let message = |err: std::io::Error| format!("{}: {err}", path.display());
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|err| LoadError::new(resource, LoadErrorKind::Io, message(err)))
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
