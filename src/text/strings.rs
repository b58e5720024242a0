/// Column width where non-ASCII characters (and `^`) take two cells.
pub fn display_width(s: &str) -> usize {
    s.encode_utf16()
        .map(|unit| if unit > 127 || unit == u16::from(b'^') { 2 } else { 1 })
        .sum()
}

/// Pad `s` with spaces on the right up to `width` display cells.
pub fn pad_display(s: &str, width: usize) -> String {
    let used = display_width(s);
    let mut out = s.to_string();
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

/// Backslash-escape characters that are special in a regex.
///
/// Public for callers building search patterns from instance names.
pub fn escape_pattern(s: &str) -> String {
    const SPECIAL: &[char] = &[
        '.', '*', '+', '?', '^', '=', '!', ':', '$', '{', '}', '(', ')', '|', '[', ']', '/', '\\',
    ];

    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if SPECIAL.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// `data-resource-type` -> `dataResourceType`.
///
/// Public for callers mapping dashed payload keys onto field names.
pub fn camelize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == '-' && (next.is_ascii_alphanumeric() || next == '_') => {
                out.extend(next.to_uppercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}
