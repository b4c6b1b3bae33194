//! Phrase lists used by the language and commitment-quality checks
//!
//! Matching is a case-insensitive substring test, so "enhance" also matches
//! "enhancement" and "drive" matches "drives".

/// Vague corporate phrases that make a statement interchangeable with any
/// other company's
pub const VANILLA_PHRASES: &[&str] = &[
    "leverage",
    "synergy",
    "synergies",
    "best practice",
    "best-in-class",
    "world-class",
    "world class",
    "drive",
    "enhance",
    "optimize",
    "optimise",
    "streamline",
    "maximize",
    "maximise",
    "innovative",
    "cutting-edge",
    "excellence",
    "holistic",
    "robust",
    "seamless",
    "empower",
    "paradigm",
    "value-add",
    "going forward",
    "stakeholder value",
    "core competency",
    "move the needle",
    "low-hanging fruit",
];

/// Inside-out planning phrases that signal an intent is not written in the
/// stakeholder's voice
pub const FIRST_PERSON_PHRASES: &[&str] = &[
    "we will",
    "we aim",
    "we plan",
    "we intend",
    "we want to",
    "we are going to",
    "we must",
    "our goal",
    "our aim",
];

/// Verbs naming a concrete, observable action
pub const ACTION_VERBS: &[&str] = &[
    "deploy",
    "launch",
    "implement",
    "build",
    "open",
    "deliver",
    "complete",
    "establish",
    "introduce",
    "roll out",
    "migrate",
    "replace",
    "create",
    "acquire",
    "hire",
    "close",
    "achieve",
    "reduce",
    "increase",
    "install",
    "release",
    "retire",
    "consolidate",
    "certify",
];

fn matches_in(text: &str, phrases: &'static [&'static str]) -> Vec<&'static str> {
    let haystack = text.to_lowercase();
    phrases
        .iter()
        .copied()
        .filter(|phrase| haystack.contains(phrase))
        .collect()
}

/// Vanilla phrases found in `text`, in list order
#[must_use]
pub fn vanilla_matches(text: &str) -> Vec<&'static str> {
    matches_in(text, VANILLA_PHRASES)
}

/// First-person planning phrases found in `text`, in list order
#[must_use]
pub fn first_person_matches(text: &str) -> Vec<&'static str> {
    matches_in(text, FIRST_PERSON_PHRASES)
}

/// Whether `text` names at least one tangible action
#[must_use]
pub fn has_action_verb(text: &str) -> bool {
    !matches_in(text, ACTION_VERBS).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jargon_heavy_intent_registers_three_matches() {
        let found = vanilla_matches("We aim to leverage synergies to enhance our partnership");
        assert_eq!(found, ["leverage", "synergies", "enhance"]);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(vanilla_matches("World-Class service"), ["world-class"]);
        assert_eq!(first_person_matches("WE WILL win"), ["we will"]);
    }

    #[test]
    fn plain_statement_has_no_jargon() {
        assert!(vanilla_matches("Deploy Workday globally").is_empty());
    }

    #[test]
    fn action_verbs_are_detected() {
        assert!(has_action_verb("Deploy Workday globally"));
        assert!(has_action_verb("Roll out self-service kiosks"));
        assert!(!has_action_verb("Customer centricity"));
    }
}
