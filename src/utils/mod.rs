pub mod environment;
pub mod paths;
pub mod text;

pub use environment::get_data_dir;
pub use paths::{default_database_path, default_log_path, format_path_with_tilde};
pub use text::{sanitize_line, truncate_chars};
