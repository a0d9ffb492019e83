use anyhow::Context;
use kickoff_core::form::FormState;
use kickoff_core::types::ControlLevel;
use std::path::Path;
use std::str::FromStr;

/// `kickoff level <quick|guided|manual>` — select a control level and run
/// the pre-fill cascade across all sections.
pub fn run(root: &Path, level: &str) -> anyhow::Result<()> {
    let level = ControlLevel::from_str(level)?;
    let mut state = FormState::load_or_default(root);
    state.set_control_level(level);
    state.save(root).context("failed to save form")?;

    match level {
        ControlLevel::Quick => println!("control level: quick — core choices delegated to the AI"),
        ControlLevel::Guided => {
            println!("control level: guided — core and tooling choices delegated to the AI")
        }
        ControlLevel::Manual => println!("control level: manual — all delegation cleared"),
    }
    Ok(())
}
