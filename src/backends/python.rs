//! Python literal formatting for the values we drop into generated source: strings, `None`,
//! booleans, attribute dicts, and choice lists. Strings are escaped the way Python's `repr()`
//! escapes them for control, separator, format, and private-use characters. Unassigned code
//! points are written through unescaped.

use crate::graph::fields::{Choice, WidgetAttrs};

/// `repr()` of a Python `str`: single quotes unless the text contains a single quote and no
/// double quotes
pub fn repr_str(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => push_printable(&mut out, c),
        }
    }
    out.push(quote);
    out
}

/// A double-quoted string literal, used for `label="..."`
pub fn double_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => push_printable(&mut out, c),
        }
    }
    out.push('"');
    out
}

fn push_printable(out: &mut String, c: char) {
    let code = c as u32;
    if !is_printable(c) {
        if code <= 0xff {
            out.push_str(&format!("\\x{code:02x}"));
        } else if code <= 0xffff {
            out.push_str(&format!("\\u{code:04x}"));
        } else {
            out.push_str(&format!("\\U{code:08x}"));
        }
    } else {
        out.push(c);
    }
}

/// Python's `str.isprintable()` for everything but unassigned code points: controls (Cc),
/// format characters (Cf), private use (Co), and every separator except the ASCII space (Zs,
/// Zl, Zp) are not printable
fn is_printable(c: char) -> bool {
    if c.is_control() {
        return false;
    }
    !matches!(
        c,
        // Zs
        '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            // Zl, Zp
            | '\u{2028}'
            | '\u{2029}'
            // Cf
            | '\u{ad}'
            | '\u{600}'..='\u{605}'
            | '\u{61c}'
            | '\u{6dd}'
            | '\u{70f}'
            | '\u{890}'..='\u{891}'
            | '\u{8e2}'
            | '\u{180e}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
            | '\u{110bd}'
            | '\u{110cd}'
            | '\u{13430}'..='\u{1343f}'
            | '\u{1bca0}'..='\u{1bca3}'
            | '\u{1d173}'..='\u{1d17a}'
            | '\u{e0001}'
            | '\u{e0020}'..='\u{e007f}'
            // Co
            | '\u{e000}'..='\u{f8ff}'
            | '\u{f0000}'..='\u{ffffd}'
            | '\u{100000}'..='\u{10fffd}'
    )
}

pub fn repr_opt_str(text: Option<&str>) -> String {
    match text {
        Some(text) => repr_str(text),
        None => "None".to_string(),
    }
}

pub fn repr_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// `{'class': '...', 'id': '...'}`
pub fn repr_attrs(attrs: &WidgetAttrs) -> String {
    let entries: Vec<String> = attrs
        .pairs()
        .into_iter()
        .map(|(key, value)| format!("{}: {}", repr_str(key), repr_str(value)))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

/// `[('value', 'text'), ...]`
pub fn repr_choices(choices: &[Choice]) -> String {
    let entries: Vec<String> = choices
        .iter()
        .map(|choice| {
            format!(
                "({}, {})",
                repr_opt_str(choice.value.as_deref()),
                repr_opt_str(choice.text.as_deref())
            )
        })
        .collect();
    format!("[{}]", entries.join(", "))
}
