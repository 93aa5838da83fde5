use std::fmt;

use thiserror::Error;

use crate::constants::{MAX_PROJECT_NAME_LENGTH, MIN_PROJECT_NAME_LENGTH};

/// Length limits applied by [`sanitize`]. Passed explicitly so validators
/// with different limits can coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRules {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for NameRules {
    fn default() -> Self {
        Self { min_length: MIN_PROJECT_NAME_LENGTH, max_length: MAX_PROJECT_NAME_LENGTH }
    }
}

/// Why a raw project name could not be turned into a [`SanitizedName`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    #[error("project name cannot be empty")]
    Empty,
    #[error("project name contains no usable characters")]
    EmptyAfterSanitization,
    #[error("project name is too short")]
    TooShort,
    #[error("project name must start with a letter or number")]
    InvalidStart,
    #[error("project name is too long")]
    TooLong,
}

impl NameError {
    /// Stable machine-readable reason code.
    pub fn reason(&self) -> &'static str {
        match self {
            NameError::Empty => "empty",
            NameError::EmptyAfterSanitization => "empty-after-sanitization",
            NameError::TooShort => "too-short",
            NameError::InvalidStart => "invalid-start",
            NameError::TooLong => "too-long",
        }
    }
}

/// A canonical project identifier: non-empty, lowercase `[a-z0-9_-]`, starts
/// alphanumeric, no leading/trailing/doubled hyphens. Only [`sanitize`]
/// constructs one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SanitizedName(String);

impl SanitizedName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SanitizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SanitizedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'
}

/// Turns arbitrary user input into a [`SanitizedName`].
///
/// The normalization steps run in a fixed order; later steps assume earlier
/// ones already happened: trim, lowercase, whitespace runs to a single
/// hyphen, drop everything outside `[a-z0-9_-]`, collapse hyphen runs, strip
/// edge hyphens, then length and first-character checks.
pub fn sanitize(raw: &str, rules: &NameRules) -> Result<SanitizedName, NameError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }

    let lowered = trimmed.to_lowercase();

    let mut hyphenated = String::with_capacity(lowered.len());
    let mut in_whitespace = false;
    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                hyphenated.push('-');
            }
            in_whitespace = true;
        } else {
            hyphenated.push(c);
            in_whitespace = false;
        }
    }

    let mut collapsed = String::with_capacity(hyphenated.len());
    for c in hyphenated.chars().filter(|c| is_allowed(*c)) {
        if c == '-' && collapsed.ends_with('-') {
            continue;
        }
        collapsed.push(c);
    }

    let name = collapsed.trim_matches('-');
    if name.is_empty() {
        return Err(NameError::EmptyAfterSanitization);
    }
    let length = name.chars().count();
    if length < rules.min_length {
        return Err(NameError::TooShort);
    }
    // Only an underscore can survive sanitization in first position.
    if !name.chars().next().is_some_and(|c| c.is_ascii_alphanumeric()) {
        return Err(NameError::InvalidStart);
    }
    if length > rules.max_length {
        return Err(NameError::TooLong);
    }

    Ok(SanitizedName(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitized(raw: &str) -> String {
        sanitize(raw, &NameRules::default()).unwrap().into_inner()
    }

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(sanitized("My Game!"), "my-game");
        assert_eq!(sanitized("GAME"), "game");
        assert_eq!(sanitized("Space Shooter 2024"), "space-shooter-2024");
        assert_eq!(sanitized("a"), "a");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(sanitized("my   cool\tgame"), "my-cool-game");
    }

    #[test]
    fn strips_and_collapses_hyphens() {
        assert_eq!(sanitized("---game"), "game");
        assert_eq!(sanitized("game---"), "game");
        assert_eq!(sanitized("my--game"), "my-game");
        assert_eq!(sanitized("- my - game -"), "my-game");
    }

    #[test]
    fn deletes_disallowed_characters() {
        assert_eq!(sanitized("café"), "caf");
        assert_eq!(sanitized("<script>alert(1)</script>"), "scriptalert1script");
    }

    #[test]
    fn path_traversal_is_neutralized() {
        assert_eq!(sanitized("../evil"), "evil");
        assert_eq!(sanitized("../../etc/passwd"), "etcpasswd");
        assert_eq!(sanitized("/tmp/game"), "tmpgame");
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(sanitize("", &NameRules::default()), Err(NameError::Empty));
        assert_eq!(sanitize("  ", &NameRules::default()), Err(NameError::Empty));
    }

    #[test]
    fn rejects_names_with_no_usable_characters() {
        assert_eq!(sanitize("!!!", &NameRules::default()), Err(NameError::EmptyAfterSanitization));
        assert_eq!(sanitize("---", &NameRules::default()), Err(NameError::EmptyAfterSanitization));
        assert_eq!(sanitize("日本語", &NameRules::default()), Err(NameError::EmptyAfterSanitization));
    }

    #[test]
    fn rejects_leading_underscore() {
        assert_eq!(sanitize("_private", &NameRules::default()), Err(NameError::InvalidStart));
    }

    #[test]
    fn enforces_maximum_length() {
        let at_limit = "a".repeat(50);
        assert_eq!(sanitized(&at_limit), at_limit);
        let over_limit = "a".repeat(51);
        assert_eq!(sanitize(&over_limit, &NameRules::default()), Err(NameError::TooLong));
    }

    #[test]
    fn numeric_names_are_valid() {
        assert_eq!(sanitized("2048"), "2048");
    }

    #[test]
    fn sanitization_is_idempotent() {
        for raw in ["My Game!", "---game", "GAME", "Space Shooter 2024", "a_b-c9", "  x  "] {
            let once = sanitized(raw);
            assert_eq!(sanitized(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn custom_rules_coexist_with_defaults() {
        let strict = NameRules { min_length: 3, max_length: 8 };
        assert_eq!(sanitize("ab", &strict), Err(NameError::TooShort));
        assert_eq!(sanitize("abcdefghi", &strict), Err(NameError::TooLong));
        assert!(sanitize("abc", &strict).is_ok());
        // The same inputs pass under the defaults.
        assert!(sanitize("ab", &NameRules::default()).is_ok());
        assert!(sanitize("abcdefghi", &NameRules::default()).is_ok());
    }

    #[test]
    fn reason_codes_are_stable() {
        assert_eq!(NameError::Empty.reason(), "empty");
        assert_eq!(NameError::EmptyAfterSanitization.reason(), "empty-after-sanitization");
        assert_eq!(NameError::InvalidStart.reason(), "invalid-start");
        assert_eq!(NameError::TooLong.reason(), "too-long");
    }
}
