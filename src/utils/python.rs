//! Python literal rendering.
//!
//! The generated program and the option listings shown at the prompts use
//! Python's own `repr` formatting for lists and dicts.

/// Quote a string the way Python's `repr` does for simple strings
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

/// Render a list of strings as a Python list literal, e.g. `['A', 'B']`
pub fn string_list<S: AsRef<str>>(items: &[S]) -> String {
    let inner: Vec<String> = items.iter().map(|item| quote(item.as_ref())).collect();
    format!("[{}]", inner.join(", "))
}

/// Render `(key, name)` pairs as a Python dict literal, e.g. `{1: 'EQSN'}`
pub fn keyed_dict<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let inner: Vec<String> = entries
        .into_iter()
        .map(|(key, name)| format!("{}: {}", key, quote(name)))
        .collect();
    format!("{{{}}}", inner.join(", "))
}
