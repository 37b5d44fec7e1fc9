//! Records shared between the loader, the projection layer and the preview app.

pub mod domain;
pub mod error;

pub use domain::{
    AgendaEntry, CategoryKey, ClockTime, LanguageCode, ProgramCatalog, ProgramEntry, SiteData,
    TranslationTable, TranslationTree,
};
pub use error::{LoadError, LoadErrorKind, Resource};

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
