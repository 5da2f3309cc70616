use lazy_static::lazy_static;
use regex::Regex;

/// Maximum number of characters kept from a summary.
pub const SUMMARY_MAX_CHARS: usize = 80;

/// Always appended to a cleaned summary, even when nothing was cut.
pub const ELLIPSIS: &str = "...";

lazy_static! {
    static ref TAG_PATTERN: Regex = Regex::new(r"<.*?>").expect("tag pattern is valid");
}

/// Strip anything that looks like a markup tag, keep the first
/// [`SUMMARY_MAX_CHARS`] characters and append [`ELLIPSIS`].
pub fn clean_summary(raw: &str) -> String {
    let stripped = TAG_PATTERN.replace_all(raw, "");
    let mut cleaned: String = stripped.chars().take(SUMMARY_MAX_CHARS).collect();
    cleaned.push_str(ELLIPSIS);
    cleaned
}
