use std::path::{Path, PathBuf};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub archive_dir: PathBuf,
}

impl AppState {
    pub fn new(archive_dir: &Path) -> Self {
        Self {
            archive_dir: archive_dir.to_path_buf(),
        }
    }
}
