//! Filename matching and title derivation
//!
//! A file qualifies for annotation when its base name starts with one or
//! more decimal digits immediately followed by an underscore.

use std::fmt;

/// Title derived from a qualifying filename. Distinct from paths and raw
/// filenames so the two cannot be mixed up at call sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Title(String);

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check whether a base name starts with digits followed by an underscore.
pub(crate) fn qualifies(filename: &str) -> bool {
    let rest = filename.trim_start_matches(|c: char| c.is_ascii_digit());
    rest.len() < filename.len() && rest.starts_with('_')
}

/// Derive the display title from a qualifying base name: drop the extension,
/// drop the numeric prefix, and turn the remaining underscores into spaces.
///
/// Callers are expected to have checked `qualifies` first; matching is
/// anchored at the start of the extension-stripped name.
pub(crate) fn derive_title(filename: &str) -> Title {
    let stem = filename
        .rsplit_once('.')
        .map_or(filename, |(stem, _ext)| stem);
    let rest = stem.trim_start_matches(|c: char| c.is_ascii_digit());
    let rest = rest.strip_prefix('_').unwrap_or(rest);
    Title(rest.replace('_', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualifies_digits_then_underscore() {
        assert!(qualifies("12_intro.md"));
        assert!(qualifies("0_x"));
        assert!(qualifies("00042_deep_dive.rst"));
        assert!(qualifies("123_"));
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(!qualifies("intro.md"));
        assert!(!qualifies("_intro.md"));
        assert!(!qualifies("03intro.md"));
        assert!(!qualifies("12.md"));
        assert!(!qualifies(""));
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // U+0661 ARABIC-INDIC DIGIT ONE is not a prefix digit here
        assert!(!qualifies("١_intro.md"));
    }

    #[test]
    fn title_replaces_underscores() {
        assert_eq!(
            derive_title("042_getting_started.md").to_string(),
            "getting started"
        );
    }

    #[test]
    fn title_single_word() {
        assert_eq!(derive_title("7_a.txt").to_string(), "a");
    }

    #[test]
    fn title_empty_is_valid() {
        assert_eq!(derive_title("9_.md").to_string(), "");
    }

    #[test]
    fn title_without_extension() {
        assert_eq!(derive_title("3_release_notes").to_string(), "release notes");
    }

    #[test]
    fn title_strips_only_final_extension() {
        assert_eq!(derive_title("1_v2.0_plan.md").to_string(), "v2.0 plan");
    }

    #[test]
    fn title_keeps_case_and_spacing() {
        assert_eq!(derive_title("10__Two_Words_.md").to_string(), " Two Words ");
    }
}
