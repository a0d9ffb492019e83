use crate::types::ControlLevel;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Reserved marker meaning "delegate this choice to the AI". Mutually
/// exclusive with concrete selections on the same field.
pub const AI_DECIDE: &str = "Let the AI decide";

/// Default catch-all pre-selection for sections the user has not visited.
pub const ALL_OK: &str = "All are OK";

// ---------------------------------------------------------------------------
// Choice
// ---------------------------------------------------------------------------

/// A multi-select field that may instead be delegated wholesale to the AI.
///
/// On the wire this is a plain JSON array of strings where delegation is
/// exactly `["Let the AI decide"]`. Keeping the two states as enum variants
/// makes the sentinel-exclusivity invariant unrepresentable to violate:
/// concrete picks and the sentinel cannot coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Picks(Vec<String>),
    Delegated,
}

impl Choice {
    pub fn picks<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Choice::Picks(values.into_iter().map(Into::into).collect())
    }

    pub fn is_delegated(&self) -> bool {
        matches!(self, Choice::Delegated)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Choice::Picks(v) if v.is_empty())
    }

    /// Concrete selections; empty when delegated.
    pub fn selected(&self) -> &[String] {
        match self {
            Choice::Picks(v) => v,
            Choice::Delegated => &[],
        }
    }

    /// The wire representation of this field.
    pub fn wire_values(&self) -> Vec<String> {
        match self {
            Choice::Picks(v) => v.clone(),
            Choice::Delegated => vec![AI_DECIDE.to_string()],
        }
    }

    /// Multi-select toggle. Selecting a concrete value drops delegation;
    /// deselecting leaves delegation untouched. Idempotent in both
    /// directions — no duplicates, no error on absent values.
    pub fn toggle(&mut self, value: &str, selected: bool) {
        if selected {
            match self {
                Choice::Delegated => *self = Choice::picks([value]),
                Choice::Picks(v) => {
                    if !v.iter().any(|x| x == value) {
                        v.push(value.to_string());
                    }
                }
            }
        } else if let Choice::Picks(v) = self {
            v.retain(|x| x != value);
        }
    }

    /// Sentinel toggle: on replaces everything with delegation, off clears
    /// the field entirely.
    pub fn set_delegated(&mut self, on: bool) {
        *self = if on {
            Choice::Delegated
        } else {
            Choice::Picks(Vec::new())
        };
    }

    /// Bulk overwrite for the control-level cascade. Prior values are never
    /// consulted.
    pub fn apply_level(&mut self, level: ControlLevel) {
        *self = match level {
            ControlLevel::Quick | ControlLevel::Guided => Choice::Delegated,
            ControlLevel::Manual => Choice::Picks(Vec::new()),
        };
    }
}

impl Default for Choice {
    fn default() -> Self {
        Choice::Picks(Vec::new())
    }
}

impl Serialize for Choice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.wire_values().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Choice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<String>::deserialize(deserializer)?;
        // Normalize: a saved document that ever mixed the sentinel with
        // concrete values collapses to delegation on load.
        if values.iter().any(|v| v == AI_DECIDE) {
            Ok(Choice::Delegated)
        } else {
            Ok(Choice::Picks(values))
        }
    }
}

// ---------------------------------------------------------------------------
// Scalar helpers
// ---------------------------------------------------------------------------

/// Cascade overwrite for single-valued (string) delegable fields.
pub fn apply_level_scalar(field: &mut String, level: ControlLevel) {
    *field = match level {
        ControlLevel::Quick | ControlLevel::Guided => AI_DECIDE.to_string(),
        ControlLevel::Manual => String::new(),
    };
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_select_is_idempotent() {
        let mut c = Choice::default();
        c.toggle("Rust", true);
        c.toggle("Rust", true);
        assert_eq!(c.selected(), ["Rust"]);
    }

    #[test]
    fn toggle_deselect_removes_value() {
        let mut c = Choice::picks(["Rust", "Go"]);
        c.toggle("Go", false);
        assert_eq!(c.selected(), ["Rust"]);
        // Deselecting again is a no-op.
        c.toggle("Go", false);
        assert_eq!(c.selected(), ["Rust"]);
    }

    #[test]
    fn selecting_concrete_value_drops_delegation() {
        let mut c = Choice::Delegated;
        c.toggle("Rust", true);
        assert_eq!(c, Choice::picks(["Rust"]));
    }

    #[test]
    fn deselect_leaves_delegation_untouched() {
        let mut c = Choice::Delegated;
        c.toggle("Rust", false);
        assert!(c.is_delegated());
    }

    #[test]
    fn set_delegated_replaces_picks() {
        let mut c = Choice::picks(["AWS", "GCP"]);
        c.set_delegated(true);
        assert!(c.is_delegated());
        c.set_delegated(false);
        assert!(c.is_empty());
    }

    #[test]
    fn sentinel_exclusivity_after_arbitrary_toggles() {
        let mut c = Choice::default();
        c.toggle("A", true);
        c.set_delegated(true);
        c.toggle("B", true);
        c.toggle("C", true);
        c.set_delegated(true);
        c.toggle("B", false);
        let wire = c.wire_values();
        assert!(
            !(wire.iter().any(|v| v == AI_DECIDE) && wire.len() > 1),
            "sentinel must never coexist with concrete values: {wire:?}"
        );
    }

    #[test]
    fn wire_form_of_delegation() {
        let json = serde_json::to_value(Choice::Delegated).unwrap();
        assert_eq!(json, serde_json::json!(["Let the AI decide"]));
    }

    #[test]
    fn deserialize_normalizes_mixed_sentinel() {
        let c: Choice =
            serde_json::from_value(serde_json::json!(["Rust", "Let the AI decide"])).unwrap();
        assert!(c.is_delegated());
    }

    #[test]
    fn deserialize_plain_picks() {
        let c: Choice = serde_json::from_value(serde_json::json!(["Stripe", "PayPal"])).unwrap();
        assert_eq!(c.selected(), ["Stripe", "PayPal"]);
    }

    #[test]
    fn apply_level_overwrites_regardless_of_prior_value() {
        for prior in [Choice::picks(["X", "Y"]), Choice::Delegated, Choice::default()] {
            let mut c = prior.clone();
            c.apply_level(ControlLevel::Quick);
            assert!(c.is_delegated(), "quick must delegate, prior = {prior:?}");

            let mut c = prior.clone();
            c.apply_level(ControlLevel::Manual);
            assert!(c.is_empty(), "manual must clear, prior = {prior:?}");
        }
    }

    #[test]
    fn scalar_apply_level() {
        let mut s = "Next.js".to_string();
        apply_level_scalar(&mut s, ControlLevel::Guided);
        assert_eq!(s, AI_DECIDE);
        apply_level_scalar(&mut s, ControlLevel::Manual);
        assert_eq!(s, "");
    }
}
