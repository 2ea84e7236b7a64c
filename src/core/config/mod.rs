pub mod explorer_config;

pub use explorer_config::{
    ConfigError, ExplorerConfig, GestureConfig, RenderConfig, ViewConfig, WindowConfig,
};
