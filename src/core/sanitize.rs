// src/core/sanitize.rs

/// Collapse whitespace runs to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Uppercase the first character, leave the rest untouched ("müller" → "Müller").
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => s!(),
    }
}

/// Capitalize every whitespace-separated token; runs of whitespace collapse.
pub fn capitalize_words(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a full name at its final space: ("Anna Lena", "Schmidt").
/// A single token is a last name with an empty first name.
pub fn split_name(full: &str) -> (&str, &str) {
    match full.rsplit_once(' ') {
        Some((first, last)) => (first, last),
        None => ("", full),
    }
}

/// Text after `marker` up to the first `terminator` (or end of line), trimmed.
/// `None` when the marker is absent.
pub fn text_after<'a>(line: &'a str, marker: &str, terminator: &str) -> Option<&'a str> {
    let start = line.find(marker)? + marker.len();
    let rest = &line[start..];
    let end = rest.find(terminator).unwrap_or(rest.len());
    Some(rest[..end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_touches_only_first_char() {
        assert_eq!(capitalize("müller"), "Müller");
        assert_eq!(capitalize("mcDonald"), "McDonald");
        assert_eq!(capitalize("ß"), "SS");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn capitalize_words_collapses_whitespace() {
        assert_eq!(capitalize_words("  michael   müller "), "Michael Müller");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn split_name_uses_final_space() {
        assert_eq!(split_name("Anna Lena Schmidt"), ("Anna Lena", "Schmidt"));
        assert_eq!(split_name("Müller"), ("", "Müller"));
    }

    #[test]
    fn text_after_stops_at_terminator() {
        let line = "BT /F1 10.00 Tf 40 760 Td (Heim: CVJM Möglingen ) Tj ET";
        assert_eq!(text_after(line, "Heim: ", ") Tj"), Some("CVJM Möglingen"));
        assert_eq!(text_after("(Gast: HSG X", "Gast: ", ") Tj"), Some("HSG X"));
        assert_eq!(text_after("(Heim)", "Gast: ", ") Tj"), None);
    }

    #[test]
    fn normalize_ws_collapses() {
        assert_eq!(normalize_ws("  a \t b\n"), "a b");
    }
}
