// src/core/sanitize.rs

/// Minimal entity decoding for the entities the stats pages actually emit.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&#39;", "'")
}

/// Collapse whitespace runs into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Strip the trailing eligibility marker from a player name ("C*" → "C").
pub fn strip_marker(s: &str) -> String {
    s.trim_end().trim_end_matches('*').trim_end().to_string()
}
