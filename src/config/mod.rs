mod core;
mod display;
mod loader;

pub use self::core::ReportConfig;
pub use display::{DisplayConfig, MessagesConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
