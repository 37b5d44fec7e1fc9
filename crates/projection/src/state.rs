use shared::{
    AgendaEntry, CategoryKey, LanguageCode, ProgramCatalog, ProgramEntry, SiteData,
    TranslationTable, TranslationTree,
};
use tracing::warn;

pub const FALLBACK_LANGUAGE: &str = "es";
pub const DEFAULT_CATEGORY: &str = "sacred";

/// Everything the projectors read. Owned by the page; the projectors only
/// ever borrow it.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub lang: LanguageCode,
    pub translations: TranslationTable,
    pub agenda: Vec<AgendaEntry>,
    pub programs: ProgramCatalog,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(LanguageCode::from(FALLBACK_LANGUAGE))
    }
}

impl AppState {
    pub fn new(lang: LanguageCode) -> Self {
        Self {
            lang,
            translations: TranslationTable::new(),
            agenda: Vec::new(),
            programs: ProgramCatalog::new(),
        }
    }

    /// Replaces all three collections at once with a fresh load.
    ///
    /// If the current language is not in the new table, the first language
    /// of the table is selected so that `lang` always names a loaded tree.
    pub fn apply(&mut self, data: SiteData) {
        let SiteData {
            translations,
            agenda,
            programs,
        } = data;

        if !translations.contains_key(&self.lang) {
            if let Some(first) = translations.keys().next() {
                warn!(
                    requested = %self.lang,
                    selected = %first,
                    "language missing from translations; using first available"
                );
                self.lang = first.clone();
            }
        }

        self.translations = translations;
        self.agenda = agenda;
        self.programs = programs;
    }

    /// Translation tree for the current language, if that language was loaded.
    pub fn translation(&self) -> Option<&TranslationTree> {
        self.translations.get(&self.lang)
    }

    pub fn is_supported(&self, code: &LanguageCode) -> bool {
        self.translations.contains_key(code)
    }

    /// Entries of `category`; an unknown category is an empty list.
    pub fn programs_for(&self, category: &CategoryKey) -> &[ProgramEntry] {
        self.programs
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
