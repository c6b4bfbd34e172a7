mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{ChartConfig, Config, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, StyleConfig};
pub use validation::validate_config_semantics;
