pub mod types;
pub mod loader;
pub mod builder;
pub mod validator;
pub mod templates;

pub use types::{BackendConfig, PulseConfig, RenderConfig, DEFAULT_BASE_URL, DEFAULT_CONFIG_FILE};
pub use loader::{ConfigLoader, DefaultConfigLoader};
pub use builder::PulseConfigBuilder;
pub use validator::ConfigValidatorImpl;
pub use templates::{ensure_config_file_exists, generate_default_config_template};
