use anyhow::Context;
use kickoff_core::form::FormState;
use std::path::Path;

/// `kickoff reset --yes` — discard every answer and start over. Refuses to
/// act without the explicit confirmation flag.
pub fn run(root: &Path, yes: bool) -> anyhow::Result<()> {
    if !yes {
        println!("This permanently discards all answers and progress.");
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }

    let mut state = FormState::load_or_default(root);
    state.reset();
    state.save(root).context("failed to save form")?;
    println!("form reset to defaults");
    Ok(())
}
