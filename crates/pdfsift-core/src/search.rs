//! Highlighting a search term within extracted text.

use regex::Regex;

/// Marker placed on both sides of every highlighted occurrence.
pub const HIGHLIGHT_MARK: &str = "**";

/// Options controlling highlighting.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightOptions {
    /// Whether the term must match case exactly (default: `true`).
    pub case_sensitive: bool,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

/// Wrap every literal occurrence of `term` in `text` with [`HIGHLIGHT_MARK`].
///
/// The term is never interpreted as a pattern. Matched text keeps its
/// original case, so a case-insensitive search for `alpha` turns `Alpha`
/// into `**Alpha**`. An empty term returns `text` unchanged.
pub fn highlight(text: &str, term: &str, options: &HighlightOptions) -> String {
    if term.is_empty() {
        return text.to_string();
    }
    if options.case_sensitive {
        return text.replace(term, &format!("{HIGHLIGHT_MARK}{term}{HIGHLIGHT_MARK}"));
    }

    let pattern = format!("(?i){}", regex::escape(term));
    match Regex::new(&pattern) {
        Ok(re) => re
            .replace_all(text, |caps: &regex::Captures<'_>| {
                format!("{HIGHLIGHT_MARK}{}{HIGHLIGHT_MARK}", &caps[0])
            })
            .into_owned(),
        // An escaped literal only fails to compile past the size limit.
        Err(_) => text.to_string(),
    }
}

/// Count literal occurrences of `term` in `text`.
pub fn count_occurrences(text: &str, term: &str, options: &HighlightOptions) -> usize {
    if term.is_empty() {
        return 0;
    }
    if options.case_sensitive {
        text.matches(term).count()
    } else {
        text.to_lowercase().matches(&term.to_lowercase()).count()
    }
}
