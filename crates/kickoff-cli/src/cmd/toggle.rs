use anyhow::Context;
use kickoff_core::form::FormState;
use kickoff_core::types::SectionKey;
use std::path::Path;
use std::str::FromStr;

/// `kickoff toggle <section> <field> <value> [--off]` — select or deselect
/// one concrete option.
pub fn value(
    root: &Path,
    section: &str,
    field: &str,
    value: &str,
    off: bool,
) -> anyhow::Result<()> {
    let key = SectionKey::from_str(section)?;
    let mut state = FormState::load_or_default(root);
    state.toggle_value(key, field, value, !off)?;
    state.save(root).context("failed to save form")?;
    println!(
        "{} '{value}' {} {key}.{field}",
        if off { "removed" } else { "selected" },
        if off { "from" } else { "in" },
    );
    Ok(())
}

/// `kickoff delegate <section> <field> [--off]` — hand one field to the AI,
/// or take it back.
pub fn delegate(root: &Path, section: &str, field: &str, off: bool) -> anyhow::Result<()> {
    let key = SectionKey::from_str(section)?;
    let mut state = FormState::load_or_default(root);
    state.toggle_ai_decide(key, field, !off)?;
    state.save(root).context("failed to save form")?;
    println!(
        "{key}.{field} {}",
        if off { "back under manual control" } else { "delegated to the AI" },
    );
    Ok(())
}
