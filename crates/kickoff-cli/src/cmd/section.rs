use crate::output::print_json;
use anyhow::Context;
use kickoff_core::form::FormState;
use kickoff_core::types::SectionKey;
use std::path::Path;
use std::str::FromStr;

/// `kickoff show <section>` — print one section's current values.
pub fn show(root: &Path, section: &str) -> anyhow::Result<()> {
    let key = SectionKey::from_str(section)?;
    let state = FormState::load_or_default(root);
    let doc = serde_json::to_value(&state.sections)?;
    print_json(&doc[key.as_str()])
}

/// `kickoff set <section> <patch>` — shallow-merge a JSON object patch into
/// one section. A patch to `controlLevel` with a `selectedLevel` runs the
/// cascade.
pub fn set(root: &Path, section: &str, patch: &str, json: bool) -> anyhow::Result<()> {
    let key = SectionKey::from_str(section)?;
    let patch: serde_json::Value =
        serde_json::from_str(patch).context("patch must be valid JSON")?;

    let mut state = FormState::load_or_default(root);
    state.update_section(key, &patch)?;
    state.save(root).context("failed to save form")?;

    if json {
        let doc = serde_json::to_value(&state.sections)?;
        return print_json(&doc[key.as_str()]);
    }
    println!("updated {key}");
    Ok(())
}
