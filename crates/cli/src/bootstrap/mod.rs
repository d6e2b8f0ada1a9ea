mod config;
mod logging;

pub use config::{load_config, load_resolver_config};
pub use logging::init_logging;
