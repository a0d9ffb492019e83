use crate::output::print_json;
use kickoff_core::form::{FormState, PAGE_COUNT};
use kickoff_core::pages::PAGES;
use kickoff_core::submit::missing_required_fields;
use kickoff_core::types::ControlLevel;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let state = FormState::load_or_default(root);
    let label = &state.sections.control_level.selected_level;
    let missing = missing_required_fields(&state.sections.developer_info);

    if json {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct StatusOutput<'a> {
            current_page: u32,
            current_title: Option<&'static str>,
            total_pages: u32,
            completed_pages: Vec<u32>,
            submitted: bool,
            control_level: &'static str,
            control_level_label: &'a str,
            missing_required: Vec<String>,
        }

        return print_json(&StatusOutput {
            current_page: state.current_page,
            current_title: kickoff_core::pages::title(state.current_page),
            total_pages: PAGE_COUNT,
            completed_pages: state.completed_pages.iter().copied().collect(),
            submitted: state.submitted,
            control_level: ControlLevel::from_label(label).as_str(),
            control_level_label: label,
            missing_required: missing,
        });
    }

    // -- Human-readable output ------------------------------------------------

    println!(
        "Page {}/{} — {}",
        state.current_page,
        PAGE_COUNT,
        kickoff_core::pages::title(state.current_page).unwrap_or("?")
    );
    if label.is_empty() {
        println!("Control level: not selected");
    } else {
        println!(
            "Control level: {} ({label})",
            ControlLevel::from_label(label)
        );
    }
    println!(
        "Completed: {}/{} pages{}",
        state.completed_count(),
        PAGE_COUNT,
        if state.submitted { " — submitted" } else { "" }
    );

    println!();
    for page in &PAGES {
        let marker = if page.number == state.current_page {
            ">"
        } else if state.completed_pages.contains(&page.number) {
            "x"
        } else {
            " "
        };
        println!("  [{marker}] {:>2}  {}", page.number, page.title);
    }

    if !missing.is_empty() {
        println!("\nRequired before submit: {}", missing.join(", "));
    }

    Ok(())
}
