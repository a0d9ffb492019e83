use std::path::{Path, PathBuf};

/// `kickoff sink [--port] [--archive-dir]` — run the webhook sink server
/// that receives and archives submissions.
pub fn run(root: &Path, port: u16, archive_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let archive_dir = archive_dir.unwrap_or_else(|| root.join("submissions"));
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(kickoff_sink::serve(&archive_dir, port))
}
