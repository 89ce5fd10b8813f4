pub mod api;
pub mod communicator;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod preferences;

pub use api::RateMatchApi;
pub use communicator::{Communicator, NO_AVERAGE};
pub use config::ClientConfig;
pub use endpoint::Endpoint;
pub use error::{ClientError, Result};
pub use preferences::{Configurator, FileStore, MemoryStore, PreferenceStore};
