use anyhow::Context;
use kickoff_core::form::{Advance, FormState, PAGE_COUNT};
use std::path::Path;

fn announce(state: &FormState) {
    println!(
        "Page {}/{} — {}",
        state.current_page,
        PAGE_COUNT,
        kickoff_core::pages::title(state.current_page).unwrap_or("?")
    );
}

/// `kickoff next` — mark the current page complete and advance.
pub fn next(root: &Path) -> anyhow::Result<()> {
    let mut state = FormState::load_or_default(root);
    let advance = state.next_page();
    state.save(root).context("failed to save form")?;
    match advance {
        Advance::Moved => announce(&state),
        Advance::AtEnd => {
            println!("Final page complete — run `kickoff submit` to send your configuration.")
        }
    }
    Ok(())
}

/// `kickoff skip` — same advance as `next`; the page's data is left alone.
pub fn skip(root: &Path) -> anyhow::Result<()> {
    let mut state = FormState::load_or_default(root);
    let advance = state.skip_page();
    state.save(root).context("failed to save form")?;
    match advance {
        Advance::Moved => announce(&state),
        Advance::AtEnd => {
            println!("Final page complete — run `kickoff submit` to send your configuration.")
        }
    }
    Ok(())
}

/// `kickoff prev` — step back one page.
pub fn prev(root: &Path) -> anyhow::Result<()> {
    let mut state = FormState::load_or_default(root);
    state.previous_page();
    state.save(root).context("failed to save form")?;
    announce(&state);
    Ok(())
}

/// `kickoff goto <n>` — jump to a page, clamped to the valid range.
pub fn goto(root: &Path, page: u32) -> anyhow::Result<()> {
    let mut state = FormState::load_or_default(root);
    state.go_to_page(page);
    state.save(root).context("failed to save form")?;
    announce(&state);
    Ok(())
}
