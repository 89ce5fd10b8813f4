use model::Language;

use super::PreferenceStore;
use crate::Result;

pub const THEME_KEY: &str = "theme";
pub const LANGUAGE_KEY: &str = "language";
pub const DEFAULT_THEME: &str = "light";

/// Holds the active theme and display language and mirrors every change into
/// its [`PreferenceStore`].
///
/// Built once at startup with [`Configurator::load`] and handed to whatever
/// needs the preferences.
#[derive(Debug)]
pub struct Configurator<S: PreferenceStore> {
    store: S,
    theme: String,
    language: Language,
}

impl<S: PreferenceStore> Configurator<S> {
    /// Adopts the persisted values. Missing (or empty) entries are replaced by
    /// the defaults, which are written back to the store right away.
    pub fn load(mut store: S) -> Result<Self> {
        let theme = match store.get(THEME_KEY)?.filter(|t| !t.is_empty()) {
            Some(theme) => theme,
            None => {
                store.set(THEME_KEY, DEFAULT_THEME)?;
                DEFAULT_THEME.to_string()
            }
        };

        let language = match store.get(LANGUAGE_KEY)?.filter(|l| !l.is_empty()) {
            Some(code) => Language::from_code(&code),
            None => {
                let language = Language::default();
                store.set(LANGUAGE_KEY, language.as_code())?;
                language
            }
        };

        tracing::debug!("Preferences loaded (theme: {}, language: {})", theme, language);

        Ok(Self {
            store,
            theme,
            language,
        })
    }

    /// Writes both current values to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.set(THEME_KEY, &self.theme)?;
        self.store.set(LANGUAGE_KEY, self.language.as_code())
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Any string is accepted as a theme. The in-memory value only changes
    /// once the store accepted it.
    pub fn set_theme(&mut self, theme: impl Into<String>) -> Result<()> {
        let theme = theme.into();
        self.store.set(THEME_KEY, &theme)?;
        self.theme = theme;
        Ok(())
    }

    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.store.set(LANGUAGE_KEY, language.as_code())?;
        self.language = language;
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
