//! Case-insensitive keyword filtering of whole-page text.

/// A set of keywords deciding whether a page is included.
///
/// Keywords are stored lowercased and deduplicated. Matching is plain
/// substring containment against the lowercased page text: there is no
/// tokenization, stemming, or word-boundary logic. A filter with no
/// keywords matches every page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawKeywordFilter")
)]
pub struct KeywordFilter {
    keywords: Vec<String>,
}

/// Wire form of [`KeywordFilter`]; deserialized keywords are normalized
/// through [`KeywordFilter::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawKeywordFilter {
    keywords: Vec<String>,
}

#[cfg(feature = "serde")]
impl From<RawKeywordFilter> for KeywordFilter {
    fn from(raw: RawKeywordFilter) -> Self {
        Self::new(raw.keywords)
    }
}

impl KeywordFilter {
    /// Build a filter from individual keywords.
    ///
    /// Each keyword is lowercased; entries that are empty or all whitespace
    /// are dropped. Surrounding spaces are kept, so `" acid"` only matches
    /// text where a space precedes `acid`.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for kw in keywords {
            let kw = kw.as_ref();
            if kw.trim().is_empty() {
                continue;
            }
            let kw = kw.to_lowercase();
            if !out.contains(&kw) {
                out.push(kw);
            }
        }
        Self { keywords: out }
    }

    /// Parse a comma-separated keyword list such as `"alpha, beta"`.
    ///
    /// Each item is trimmed before being added.
    pub fn parse(input: &str) -> Self {
        Self::new(input.split(',').map(str::trim))
    }

    /// Returns `true` if the filter holds no keywords and so accepts every page.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// The normalized keywords, in first-seen order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns `true` if `text` contains at least one keyword, ignoring case.
    pub fn matches(&self, text: &str) -> bool {
        if self.keywords.is_empty() {
            return true;
        }
        let haystack = text.to_lowercase();
        self.keywords.iter().any(|kw| haystack.contains(kw.as_str()))
    }
}
