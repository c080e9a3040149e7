// src/core/html.rs
// Low-level HTML string helpers, deliberately naive but tailored to the
// stats site structure. Case-insensitive on ASCII tag/attribute names.

/// Find the next complete tag block from `from` onwards, case-insensitive.
/// A block runs from the start of the opening tag to the end of the
/// closing tag.
///
/// Example: `<td ...> ... </td>`
pub fn next_tag_block_ci(s: &str, open_tag: &str, close_tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s.get(from..)?);
    let open_lc = to_lower(open_tag);
    let close_lc = to_lower(close_tag);

    let start = lc.find(&open_lc)?;
    // Jump past the end of the opening tag
    let open_end = lc[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&close_lc)?;
    let end = open_end + end_rel + close_lc.len();
    Some((from + start, from + end))
}

/// Find the next element (any tag name) whose `class` attribute carries
/// `class_name` as a whitespace-separated token, and return the span of the
/// whole block including its closing tag.
///
/// Example: `next_class_block_ci(doc, "full_table", 0)` matches
/// `<tr class="full_table">…</tr>`.
pub fn next_class_block_ci(s: &str, class_name: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s.get(from..)?);
    let want = to_lower(class_name);
    let mut i = 0usize;

    while let Some(p) = lc[i..].find('<') {
        let lt = i + p;
        let gt = lc[lt + 1..].find('>')? + lt + 1;
        let opener = &lc[lt + 1..gt];

        // Closing tags, comments and doctypes can't carry a class
        if !opener.starts_with('/') && !opener.starts_with('!') {
            let name_len = opener
                .bytes()
                .take_while(|b| b.is_ascii_alphanumeric())
                .count();
            if name_len > 0 && has_class_token(&opener[name_len..], &want) {
                let close = join!("</", &opener[..name_len], ">");
                let rel = lc[gt + 1..].find(&close)?;
                let end = gt + 1 + rel + close.len();
                return Some((from + lt, from + end));
            }
        }
        i = gt + 1;
    }
    None
}

/// True when an opener's attribute text (already lowercased) has a `class`
/// attribute containing `want` as one of its tokens.
fn has_class_token(attrs: &str, want: &str) -> bool {
    let mut rest = attrs;
    while let Some(p) = rest.find("class") {
        let at_boundary = p == 0 || rest.as_bytes()[p - 1].is_ascii_whitespace();
        let after = rest[p + "class".len()..].trim_start();
        if at_boundary {
            if let Some(v) = after.strip_prefix('=') {
                let v = v.trim_start();
                let val = match v.as_bytes().first() {
                    Some(b'"') => v[1..].split('"').next().unwrap_or(""),
                    Some(b'\'') => v[1..].split('\'').next().unwrap_or(""),
                    _ => v
                        .split(|c: char| c.is_ascii_whitespace() || c == '>')
                        .next()
                        .unwrap_or(""),
                };
                return val.split_ascii_whitespace().any(|t| t == want);
            }
        }
        rest = &rest[p + "class".len()..];
    }
    false
}

/// Given a complete block like `<td ...>INNER</td>`, return INNER without
/// the wrapping tags (may still contain nested tags).
pub fn inner_after_open_tag(block: &str) -> &str {
    if let Some(open_end) = block.find('>') {
        if let Some(close_start) = block.rfind('<') {
            if close_start > open_end {
                return &block[open_end + 1..close_start];
            }
        }
    }
    ""
}

/// Remove all `<...>` tags, then collapse whitespace to single spaces.
pub fn strip_tags(s: &str) -> String {
    crate::core::sanitize::normalize_ws(&strip_tags_keep_lines(s))
}

/// Remove all `<...>` tags but keep the text's line structure intact.
/// Header tokenization depends on the document's literal line breaks.
pub fn strip_tags_keep_lines(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Fast ASCII-only lowercasing for tag/attribute matching. Non-ASCII chars
/// pass through unchanged, so byte offsets match the input.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}
