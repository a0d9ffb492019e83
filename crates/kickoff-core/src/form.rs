use crate::error::{Result, WizardError};
use crate::paths;
use crate::sections::Sections;
use crate::types::{ControlLevel, SectionKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Number of wizard pages.
pub const PAGE_COUNT: u32 = 16;

/// Version string stamped into submission payloads.
pub const FORM_VERSION: &str = "1.0";

// ---------------------------------------------------------------------------
// Advance
// ---------------------------------------------------------------------------

/// Outcome of a forward navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next page.
    Moved,
    /// Already on the final page — the caller's cue to run submission.
    AtEnd,
}

// ---------------------------------------------------------------------------
// FormState
// ---------------------------------------------------------------------------

/// The canonical wizard document: every section's selections plus
/// navigation and progress metadata. Mutated only through the methods below;
/// callers persist with `save` after each mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "first_page")]
    pub current_page: u32,
    /// Serialized as an ordered array; a set in memory.
    #[serde(default)]
    pub completed_pages: BTreeSet<u32>,
    #[serde(default)]
    pub submitted: bool,
    #[serde(default)]
    pub sections: Sections,
}

fn default_version() -> u32 {
    1
}

fn first_page() -> u32 {
    1
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            version: 1,
            current_page: 1,
            completed_pages: BTreeSet::new(),
            submitted: false,
            sections: Sections::default(),
        }
    }

    // ---------------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------------

    /// Hydrate from `.kickoff/form.json`. A missing file is first-run
    /// initialization, not an error; a malformed file is.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::form_path(root);
        if !path.exists() {
            return Ok(Self::new());
        }
        let data = std::fs::read_to_string(&path)?;
        let mut state: FormState = serde_json::from_str(&data)?;
        state.current_page = state.current_page.clamp(1, PAGE_COUNT);
        state.completed_pages.retain(|p| (1..=PAGE_COUNT).contains(p));
        Ok(state)
    }

    /// Like `load`, but degrades to in-memory defaults with a warning when
    /// the saved document cannot be read. The session stays usable.
    pub fn load_or_default(root: &Path) -> Self {
        match Self::load(root) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("could not read saved form, starting fresh: {e}");
                Self::new()
            }
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::form_path(root);
        let data = serde_json::to_string_pretty(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    // ---------------------------------------------------------------------------
    // Section mutation
    // ---------------------------------------------------------------------------

    /// Shallow-merge a JSON object patch into one section. Fields present in
    /// the patch fully replace the prior value (lists are replaced, not
    /// appended); absent fields are untouched; other sections are untouched.
    ///
    /// This is also the cascade trigger: a patch to `controlLevel` carrying
    /// `selectedLevel` runs the control-level overwrite across all sections
    /// before returning.
    pub fn update_section(&mut self, key: SectionKey, patch: &serde_json::Value) -> Result<()> {
        let Some(patch_obj) = patch.as_object() else {
            return Err(WizardError::InvalidPatch {
                section: key.to_string(),
                reason: "patch must be a JSON object".to_string(),
            });
        };

        let mut doc = serde_json::to_value(&self.sections)?;
        let section = doc
            .get_mut(key.as_str())
            .and_then(|v| v.as_object_mut())
            .ok_or_else(|| WizardError::UnknownSection(key.to_string()))?;
        for (field, value) in patch_obj {
            section.insert(field.clone(), value.clone());
        }

        self.sections =
            serde_json::from_value(doc).map_err(|e| WizardError::InvalidPatch {
                section: key.to_string(),
                reason: e.to_string(),
            })?;

        if key == SectionKey::ControlLevel {
            if let Some(label) = patch_obj.get("selectedLevel").and_then(|v| v.as_str()) {
                self.sections
                    .apply_control_level(ControlLevel::from_label(label));
            }
        }
        Ok(())
    }

    /// Select a control level directly: stores its catalog label and runs
    /// the cascade.
    pub fn set_control_level(&mut self, level: ControlLevel) {
        self.sections.control_level.selected_level = level.label().to_string();
        self.sections.apply_control_level(level);
    }

    /// Multi-select toggle on a single field. Selecting a concrete value
    /// removes any delegation sentinel; deselecting leaves it untouched.
    pub fn toggle_value(
        &mut self,
        key: SectionKey,
        field: &str,
        value: &str,
        selected: bool,
    ) -> Result<()> {
        let choice = self.sections.choice_mut(key, field).ok_or_else(|| {
            WizardError::UnknownField {
                section: key.to_string(),
                field: field.to_string(),
            }
        })?;
        choice.toggle(value, selected);
        Ok(())
    }

    /// Delegation toggle on a single field, in whichever encoding the
    /// section uses: the `aiDecision` name array where the section has one,
    /// the per-field sentinel otherwise.
    pub fn toggle_ai_decide(&mut self, key: SectionKey, field: &str, selected: bool) -> Result<()> {
        match self.sections.toggle_ai_decision(key, field, selected) {
            Some(true) => Ok(()),
            Some(false) => Err(WizardError::UnknownField {
                section: key.to_string(),
                field: field.to_string(),
            }),
            None => {
                let choice = self.sections.choice_mut(key, field).ok_or_else(|| {
                    WizardError::UnknownField {
                        section: key.to_string(),
                        field: field.to_string(),
                    }
                })?;
                choice.set_delegated(selected);
                Ok(())
            }
        }
    }

    // ---------------------------------------------------------------------------
    // Navigation & completion tracking
    // ---------------------------------------------------------------------------

    /// Direct jump, clamped to the valid page range. Never touches
    /// completion tracking.
    pub fn go_to_page(&mut self, page: u32) {
        self.current_page = page.clamp(1, PAGE_COUNT);
    }

    /// Mark the current page complete and advance. On the final page the
    /// pointer stays put and `AtEnd` signals the submission flow instead.
    pub fn next_page(&mut self) -> Advance {
        self.completed_pages.insert(self.current_page);
        if self.current_page < PAGE_COUNT {
            self.current_page += 1;
            Advance::Moved
        } else {
            Advance::AtEnd
        }
    }

    /// Retreat by one page, clamped at the first. Completion is untouched.
    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// "I am deliberately not filling this in." Identical to `next_page` on
    /// both data and bookkeeping; only the user-facing label differs.
    pub fn skip_page(&mut self) -> Advance {
        self.next_page()
    }

    pub fn complete_page(&mut self, page: u32) {
        self.completed_pages.insert(page.clamp(1, PAGE_COUNT));
    }

    pub fn completed_count(&self) -> usize {
        self.completed_pages.len()
    }

    // ---------------------------------------------------------------------------
    // Reset
    // ---------------------------------------------------------------------------

    /// Fresh default document, identical in shape to first-run
    /// initialization. The presentation layer is responsible for the
    /// explicit confirmation step.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
