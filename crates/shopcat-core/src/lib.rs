pub mod path;

pub use path::{
    Error, Result, default_fallback_path, expand_tilde, log_file_path, resolve_data_dir,
    storage_dir,
};
