// src/core/html.rs
// Case-insensitive scanning over raw HTML strings. Tag and attribute names are
// matched ASCII-lowercased; text content is returned untouched.

use super::sanitize::{normalize_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Next `<tag …>…</tag>` block at or after `from`, as a byte range over `s`.
/// `lc` is `to_lower(s)`, computed once by the caller; offsets are shared
/// since lowering keeps byte lengths.
///
/// The tag name must end at whitespace, `>` or `/`, so `"a"` never matches
/// `<abbr>`. Blocks do not nest: the first matching close tag ends the block.
pub fn next_element_ci(s: &str, lc: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let open = join!("<", &to_lower(tag));
    let close = join!("</", &to_lower(tag), ">");

    let mut at = from;
    loop {
        let start = lc.get(at..)?.find(&open)? + at;
        let after_name = start + open.len();
        match lc.as_bytes().get(after_name) {
            Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => {
                let open_end = s[start..].find('>')? + start + 1;
                let end = lc[open_end..].find(&close)? + open_end + close.len();
                return Some((start, end));
            }
            _ => at = after_name,
        }
    }
}

/// All blocks for `tag`, in document order.
pub fn elements_ci<'a>(s: &'a str, tag: &str) -> Vec<&'a str> {
    let lc = to_lower(s);
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((start, end)) = next_element_ci(s, &lc, tag, pos) {
        out.push(&s[start..end]);
        pos = end;
    }
    out
}

/// The opening tag of a block, `<` through `>` inclusive.
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

/// Attribute value from an opening tag. Handles `"…"`, `'…'` and bare values.
pub fn attr_value(open_tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(open_tag);
    let needle = join!(&to_lower(name), "=");
    let bytes = lc.as_bytes();

    let mut at = 0usize;
    let value_start = loop {
        let i = lc.get(at..)?.find(&needle)? + at;
        // attribute names start after whitespace; skip e.g. `data-href=`
        if i > 0 && bytes[i - 1].is_ascii_whitespace() {
            break i + needle.len();
        }
        at = i + needle.len();
    };

    let rest = &open_tag[value_start..];
    let value = match rest.chars().next()? {
        q @ ('"' | '\'') => {
            let body = &rest[1..];
            &body[..body.find(q)?]
        }
        _ => {
            let end = rest
                .find(|c: char| c.is_whitespace() || c == '>')
                .unwrap_or(rest.len());
            &rest[..end]
        }
    };
    Some(normalize_entities(value))
}

/// Visible text of a fragment on one line: tags removed, entities decoded,
/// whitespace collapsed.
pub fn text_of(fragment: &str) -> String {
    normalize_ws(&normalize_entities(&strip_tags(fragment)))
}

/// Remove `<…>` tags and keep everything else, newlines included.
/// Quoted attribute values may contain `>`.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    let mut quote: Option<char> = None;

    for ch in s.chars() {
        match (in_tag, quote, ch) {
            (false, _, '<') => in_tag = true,
            (false, _, c) => out.push(c),
            (true, None, '>') => in_tag = false,
            (true, None, q @ ('"' | '\'')) => quote = Some(q),
            (true, Some(q), c) if c == q => quote = None,
            (true, _, _) => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_name_boundary() {
        let html = r#"<abbr>x</abbr><A HREF="/p">Player</A>"#;
        let blocks = elements_ci(html, "a");
        assert_eq!(blocks, vec![r#"<A HREF="/p">Player</A>"#]);
    }

    #[test]
    fn attr_value_quoting_styles() {
        assert_eq!(attr_value(r#"<a href="/x?a=1;b=2">"#, "href").as_deref(), Some("/x?a=1;b=2"));
        assert_eq!(attr_value("<a class=x href='/y'>", "HREF").as_deref(), Some("/y"));
        assert_eq!(attr_value("<a href=/z>", "href").as_deref(), Some("/z"));
        assert_eq!(attr_value(r#"<a data-href="/no">"#, "href"), None);
        assert_eq!(attr_value(r#"<a href="/a?x=1&amp;y=2">"#, "href").as_deref(), Some("/a?x=1&y=2"));
    }

    #[test]
    fn strip_tags_keeps_lines_and_quoted_gt() {
        let html = "<td title=\"a>b\">Mat</td>\n<td>\n12</td>";
        assert_eq!(strip_tags(html), "Mat\n\n12");
    }

    #[test]
    fn text_of_normalizes() {
        assert_eq!(text_of("<b> Test&nbsp;matches </b>\n player"), "Test matches player");
    }

    #[test]
    fn next_element_resumes_from_offset() {
        let html = "<CAPTION>One</CAPTION><p>gap</p><caption>Two</caption>";
        let lc = to_lower(html);
        let (s1, e1) = next_element_ci(html, &lc, "caption", 0).unwrap();
        assert_eq!(&html[s1..e1], "<CAPTION>One</CAPTION>");
        let (s2, e2) = next_element_ci(html, &lc, "caption", e1).unwrap();
        assert_eq!(&html[s2..e2], "<caption>Two</caption>");
        assert_eq!(next_element_ci(html, &lc, "caption", e2), None);
    }
}
