//! Startup data loading: the translation table, the agenda and the program
//! catalog are fetched together and handed over as one [`SiteData`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use shared::{AgendaEntry, LoadError, ProgramCatalog, Resource, SiteData, TranslationTable};
use tracing::{debug, info, warn};

pub mod source;

pub use source::{DirSource, HttpSource, ResourceSource};

#[derive(Clone)]
pub struct DataLoader {
    source: Arc<dyn ResourceSource>,
}

impl DataLoader {
    pub fn new(source: impl ResourceSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Fetches all three resources concurrently. The first failure wins and
    /// nothing is returned for the other two.
    pub async fn load(&self) -> Result<SiteData, LoadError> {
        let origin = self.source.describe();
        debug!(%origin, "loading site data");

        let result = tokio::try_join!(
            self.fetch_json::<TranslationTable>(Resource::Translations),
            self.fetch_json::<Vec<AgendaEntry>>(Resource::Agenda),
            self.fetch_json::<ProgramCatalog>(Resource::Programs),
        );

        match result {
            Ok((translations, agenda, programs)) => {
                info!(
                    %origin,
                    languages = translations.len(),
                    agenda_entries = agenda.len(),
                    categories = programs.len(),
                    "site data loaded"
                );
                Ok(SiteData {
                    translations,
                    agenda,
                    programs,
                })
            }
            Err(err) => {
                warn!(%origin, resource = %err.resource, error = %err, "site data load failed");
                Err(err)
            }
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, resource: Resource) -> Result<T, LoadError> {
        let body = self.source.fetch(resource).await?;
        debug!(%resource, bytes = body.len(), "resource fetched");
        serde_json::from_str(&body).map_err(|err| LoadError::parse(resource, &err))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
