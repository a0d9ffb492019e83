use std::path::{Path, PathBuf};

/// Resolve the project root: an explicit flag wins, otherwise walk up from
/// the current directory looking for `.kickoff/` or `.git/`, falling back to
/// the current directory.
pub fn resolve_root(cli_root: Option<&Path>) -> PathBuf {
    if let Some(root) = cli_root {
        return root.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut dir = cwd.as_path();
    loop {
        if dir.join(kickoff_core::paths::KICKOFF_DIR).is_dir() || dir.join(".git").is_dir() {
            return dir.to_path_buf();
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => return cwd,
        }
    }
}
