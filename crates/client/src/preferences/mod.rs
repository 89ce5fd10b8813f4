mod configurator;
mod store;

pub use configurator::{Configurator, DEFAULT_THEME, LANGUAGE_KEY, THEME_KEY};
pub use store::{FileStore, MemoryStore, PreferenceStore};
