// Helpers for quoted DBC strings and diagnostic dumps.
//
// Phrases may contain escaped quotes (\") and span several lines, which is
// common in CM_ comments.

// Strip the surrounding quotes of a phrase and resolve \" and \\ escapes.
// Input without surrounding quotes is returned unchanged.
pub(crate) fn unquote(raw: &str) -> String {
    let inner: &str = match raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(inner) => inner,
        None => return raw.to_string(),
    };

    let mut out: String = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some(next @ ('"' | '\\')) => out.push(next),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

// Prefix every line with its 1-based number, for trace dumps of the input.
pub(crate) fn with_line_numbers(text: &str) -> String {
    let mut buff: String = String::with_capacity(text.len() + text.len() / 8);
    for (i, line) in text.lines().enumerate() {
        buff.push_str(&format!("{:>5}: {}\n", i + 1, line));
    }
    buff
}
