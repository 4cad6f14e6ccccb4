use regex::Regex;
use std::sync::OnceLock;

static COMPANY_SUFFIX: OnceLock<Regex> = OnceLock::new();

fn company_suffix() -> &'static Regex {
    COMPANY_SUFFIX.get_or_init(|| {
        Regex::new(r"(?i)\s*company documents\s*$").expect("company suffix pattern is valid")
    })
}

/// Collapse whitespace runs to a single space and trim both ends.
pub(crate) fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace each whitespace run with a single space. Leading and trailing
/// runs are kept as one space each.
pub(crate) fn collapse_whitespace_runs(value: &str) -> String {
    replace_whitespace_runs(value, ' ')
}

/// Lowercase and replace every whitespace run with `_`.
pub(crate) fn snake_case(value: &str) -> String {
    replace_whitespace_runs(&value.to_lowercase(), '_')
}

fn replace_whitespace_runs(value: &str, separator: char) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_space = false;
    for ch in value.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push(separator);
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

/// Comparison key for an employer name. Absent or empty input has no key.
pub fn normalize_company_name(name: Option<&str>) -> Option<String> {
    let name = name.filter(|value| !value.is_empty())?;
    Some(collapse_whitespace(name).to_lowercase())
}

/// Employer implied by a `"<Employer> Company Documents"` label.
///
/// A bare `"Company Documents"` label yields `Some("")`: the suffix is present
/// but no employer was captured. Callers treat the empty key as "no name".
pub fn extract_company_name_from_label(label: Option<&str>) -> Option<String> {
    let label = label.filter(|value| !value.is_empty())?;
    let suffix = company_suffix().find(label)?;
    let remainder = &label[..suffix.start()];
    Some(collapse_whitespace(remainder).to_lowercase())
}
