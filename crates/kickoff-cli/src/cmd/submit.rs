use crate::output::print_json;
use anyhow::Context;
use kickoff_core::config::Config;
use kickoff_core::form::FormState;
use std::path::Path;

/// `kickoff submit [--url]` — validate and POST the completed configuration.
pub fn run(root: &Path, url: Option<&str>, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root)?;
    let url = url.unwrap_or(&config.webhook_url);

    let mut state = FormState::load_or_default(root);
    let ack = kickoff_core::submit::submit(&mut state, url)?;
    state.save(root).context("failed to save form")?;

    if json {
        #[derive(serde::Serialize)]
        struct SubmitOutput<'a> {
            submitted: bool,
            message: Option<&'a str>,
        }
        return print_json(&SubmitOutput {
            submitted: true,
            message: ack.message.as_deref(),
        });
    }

    match ack.message {
        Some(message) => println!("submitted — {message}"),
        None => println!("submitted"),
    }
    Ok(())
}
