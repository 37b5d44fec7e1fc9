use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the three documents a page needs before it can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Translations,
    Agenda,
    Programs,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Translations, Resource::Agenda, Resource::Programs];

    /// Location relative to the data root.
    pub fn relative_path(self) -> &'static str {
        match self {
            Resource::Translations => "data/translations.json",
            Resource::Agenda => "data/agenda.json",
            Resource::Programs => "data/programs.json",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Translations => "translations",
            Resource::Agenda => "agenda",
            Resource::Programs => "programs",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadErrorKind {
    Transport,
    Status,
    Io,
    Parse,
}

#[derive(Debug, Clone, Error)]
#[error("failed to load {resource} ({kind:?}): {message}")]
pub struct LoadError {
    pub resource: Resource,
    pub kind: LoadErrorKind,
    pub message: String,
}

impl LoadError {
    pub fn new(resource: Resource, kind: LoadErrorKind, message: impl Into<String>) -> Self {
        Self {
            resource,
            kind,
            message: message.into(),
        }
    }

    pub fn parse(resource: Resource, err: &serde_json::Error) -> Self {
        Self::new(resource, LoadErrorKind::Parse, err.to_string())
    }
}
