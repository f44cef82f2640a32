//! Utility modules

pub mod input;
pub mod logging;
pub mod paths;

pub use input::parse_item_names;
pub use logging::init_logging;
pub use paths::{config_path, data_dir, database_path, init_data_dir, log_file_path, logs_dir};
