use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const KICKOFF_DIR: &str = ".kickoff";
pub const FORM_FILE: &str = ".kickoff/form.json";
pub const CONFIG_FILE: &str = ".kickoff/config.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn kickoff_dir(root: &Path) -> PathBuf {
    root.join(KICKOFF_DIR)
}

pub fn form_path(root: &Path) -> PathBuf {
    root.join(FORM_FILE)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
