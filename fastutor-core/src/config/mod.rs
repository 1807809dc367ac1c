//! Configuration file loading, defaults and API key resolution

pub mod api_keys;
pub mod constants;
pub mod loader;

pub use api_keys::{ApiKeySources, get_api_key, load_dotenv};
pub use loader::{ConfigManager, FasTutorConfig, LlmConfig, UiConfig};
