use std::sync::LazyLock;

use regex::Regex;

static SUMMARY_SECTION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?is)SUMMARY\s*:\s*(.*?)\s*(?:KEY\s+POINTS\s*:|\z)").ok());

static KEY_POINTS_SECTION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?is)KEY\s+POINTS\s*:\s*(.*)\z").ok());

static BULLET: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-*•]|\d+[.)])\s+(.+?)\s*$").ok());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNarrative {
    pub summary: String,
    pub key_points: Vec<String>,
}

/// Parse a `SUMMARY:` / `KEY POINTS:` reply. A reply without markers is
/// taken whole as the summary. `None` when the summary is missing or empty.
pub fn parse_response(text: &str) -> Option<ParsedNarrative> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let summary = SUMMARY_SECTION
        .as_ref()
        .and_then(|re| re.captures(text))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string());

    let key_points: Vec<String> = KEY_POINTS_SECTION
        .as_ref()
        .and_then(|re| re.captures(text))
        .and_then(|c| c.get(1))
        .map(|m| bullets(m.as_str()))
        .unwrap_or_default();

    let summary = match summary {
        Some(s) => s,
        None if has_markers(text) => return None,
        None => text.to_string(),
    };
    if summary.is_empty() {
        return None;
    }
    Some(ParsedNarrative { summary, key_points })
}

fn has_markers(text: &str) -> bool {
    let upper = text.to_uppercase();
    upper.contains("SUMMARY") || upper.contains("KEY POINTS")
}

fn bullets(block: &str) -> Vec<String> {
    let Some(re) = BULLET.as_ref() else {
        return Vec::new();
    };
    block
        .lines()
        .filter_map(|line| re.captures(line).and_then(|c| c.get(1)))
        .map(|m| m.as_str().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_layout() {
        let parsed = parse_response(
            "SUMMARY:\nFirst paragraph.\n\nSecond paragraph.\n\nKEY POINTS:\n- One\n* Two\n3. Three\nnot a bullet",
        )
        .unwrap();
        assert_eq!(parsed.summary, "First paragraph.\n\nSecond paragraph.");
        assert_eq!(parsed.key_points, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn markers_are_case_insensitive() {
        let parsed = parse_response("summary: short\nkey points:\n- a").unwrap();
        assert_eq!(parsed.summary, "short");
        assert_eq!(parsed.key_points, vec!["a"]);
    }

    #[test]
    fn summary_only() {
        let parsed = parse_response("SUMMARY: all good").unwrap();
        assert_eq!(parsed.summary, "all good");
        assert!(parsed.key_points.is_empty());
    }

    #[test]
    fn unstructured_text_becomes_summary() {
        let parsed = parse_response("Please see a doctor soon.").unwrap();
        assert_eq!(parsed.summary, "Please see a doctor soon.");
    }

    #[test]
    fn empty_or_hollow_replies_rejected() {
        assert!(parse_response("").is_none());
        assert!(parse_response("  \n\t").is_none());
        assert!(parse_response("SUMMARY:\nKEY POINTS:\n").is_none());
        assert!(parse_response("KEY POINTS:\n- only points").is_none());
    }

    #[test]
    fn bengali_bullets() {
        let parsed = parse_response("SUMMARY:\nসংক্ষেপ\nKEY POINTS:\n• চিকিৎসকের সাথে দেখা করুন").unwrap();
        assert_eq!(parsed.summary, "সংক্ষেপ");
        assert_eq!(parsed.key_points, vec!["চিকিৎসকের সাথে দেখা করুন"]);
    }
}
