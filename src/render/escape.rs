pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn escape_html_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escapes characters that would otherwise start emphasis, links, code spans,
/// inline HTML, entities or cell boundaries in the intermediate markup.
pub fn escape_markdown_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' | '`' | '*' | '_' | '~' | '[' | ']' | '|' | '<' | '>' | '&' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Neutralises block syntax at the start of a markup line: ATX heading and
/// blockquote markers, list bullets, ordered list numbers, thematic breaks,
/// setext underlines and indented code.
///
/// `value` must already be escaped with [`escape_markdown_text`].
pub fn escape_markdown_line_start(value: &str) -> String {
    let value = value.trim_start_matches([' ', '\t']);
    match value.chars().next() {
        Some('#' | '>' | '-' | '+' | '=') => format!("\\{}", value),
        Some(c) if c.is_ascii_digit() => {
            let digits = value.len() - value.trim_start_matches(|c: char| c.is_ascii_digit()).len();
            match value[digits..].chars().next() {
                Some('.' | ')') => format!("{}\\{}", &value[..digits], &value[digits..]),
                _ => value.to_string(),
            }
        }
        _ => value.to_string(),
    }
}

pub fn escape_markdown_link_destination(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' | '(' | ')' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            ' ' => escaped.push_str("%20"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
